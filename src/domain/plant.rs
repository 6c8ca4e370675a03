// Furnace plant data: per-furnace coefficients and plant-wide limits

use serde::{Deserialize, Serialize};

/// Malformed plant data, detected before any model is built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid configuration: {0}")]
pub struct InvalidConfiguration(pub String);

/// Physical and economic coefficients of one blast furnace.
///
/// Gas flows are m³/h, coke and production t/h, quality is silicon content in %.
/// Every marginal coefficient is the first-order response around `base_gas`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Furnace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub base_gas: f64,
    pub min_gas: f64,
    pub max_gas: f64,
    /// Coke displaced per unit of extra gas, kg per m³ (E)
    #[serde(alias = "e")]
    pub substitution_ratio: f64,
    pub base_coke: f64,
    pub base_production: f64,
    pub delta_prod_per_gas: f64,
    pub delta_prod_per_coke: f64,
    pub quality_per_gas: f64,
    pub quality_per_coke: f64,
    pub quality_per_production: f64,
    pub quality_base: f64,
    pub quality_min: f64,
    pub quality_max: f64,
}

impl Furnace {
    /// Display label: the configured name or the 1-based position
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{}", index + 1))
    }

    fn coefficients(&self) -> [(&'static str, f64); 14] {
        [
            ("base_gas", self.base_gas),
            ("min_gas", self.min_gas),
            ("max_gas", self.max_gas),
            ("substitution_ratio", self.substitution_ratio),
            ("base_coke", self.base_coke),
            ("base_production", self.base_production),
            ("delta_prod_per_gas", self.delta_prod_per_gas),
            ("delta_prod_per_coke", self.delta_prod_per_coke),
            ("quality_per_gas", self.quality_per_gas),
            ("quality_per_coke", self.quality_per_coke),
            ("quality_per_production", self.quality_per_production),
            ("quality_base", self.quality_base),
            ("quality_min", self.quality_min),
            ("quality_max", self.quality_max),
        ]
    }

    fn validate(&self, index: usize) -> Result<(), InvalidConfiguration> {
        let label = self.label(index);

        if let Some((field, value)) = self.coefficients().iter().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidConfiguration(format!(
                "furnace {}: {} is not finite ({})",
                label, field, value
            )));
        }
        if !(self.min_gas <= self.base_gas && self.base_gas <= self.max_gas) {
            return Err(InvalidConfiguration(format!(
                "furnace {}: gas bounds must satisfy min ({}) <= base ({}) <= max ({})",
                label, self.min_gas, self.base_gas, self.max_gas
            )));
        }
        if self.quality_min > self.quality_max {
            return Err(InvalidConfiguration(format!(
                "furnace {}: quality_min ({}) > quality_max ({})",
                label, self.quality_min, self.quality_max
            )));
        }
        Ok(())
    }
}

/// Plant-wide limits
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlantLimits {
    /// Upper bound on the summed gas flow, m³/h
    pub total_gas: f64,
    /// Upper bound on the summed coke consumption, t/h
    pub total_coke: f64,
    /// Floor on the summed production, t/h
    pub required_production: f64,
}

/// The furnaces of one plant together with the plant-wide limits
#[derive(Debug, Clone, PartialEq)]
pub struct FurnaceSet {
    pub furnaces: Vec<Furnace>,
    pub limits: PlantLimits,
}

impl FurnaceSet {
    /// Build a validated furnace set
    pub fn new(furnaces: Vec<Furnace>, limits: PlantLimits) -> Result<Self, InvalidConfiguration> {
        let set = Self { furnaces, limits };
        set.validate()?;
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.furnaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.furnaces.is_empty()
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.furnaces.is_empty() {
            return Err(InvalidConfiguration(
                "at least one furnace is required".to_string(),
            ));
        }

        for (name, value) in [
            ("total_gas", self.limits.total_gas),
            ("total_coke", self.limits.total_coke),
            ("required_production", self.limits.required_production),
        ] {
            if !value.is_finite() {
                return Err(InvalidConfiguration(format!(
                    "limit {} is not finite ({})",
                    name, value
                )));
            }
        }

        self.furnaces
            .iter()
            .enumerate()
            .try_for_each(|(i, furnace)| furnace.validate(i))
    }
}

/// Column-oriented plant data: one array per coefficient, indexed by furnace
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FurnaceColumns {
    #[serde(default)]
    pub names: Vec<String>,
    pub base_gas: Vec<f64>,
    pub min_gas: Vec<f64>,
    pub max_gas: Vec<f64>,
    #[serde(alias = "e")]
    pub substitution_ratio: Vec<f64>,
    pub base_coke: Vec<f64>,
    pub base_production: Vec<f64>,
    pub delta_prod_per_gas: Vec<f64>,
    pub delta_prod_per_coke: Vec<f64>,
    pub quality_per_gas: Vec<f64>,
    pub quality_per_coke: Vec<f64>,
    pub quality_per_production: Vec<f64>,
    pub quality_base: Vec<f64>,
    pub quality_min: Vec<f64>,
    pub quality_max: Vec<f64>,
}

impl FurnaceColumns {
    /// Combine the columns with plant limits into a validated set
    pub fn into_furnace_set(self, limits: PlantLimits) -> Result<FurnaceSet, InvalidConfiguration> {
        let n = self.base_gas.len();
        let lengths = [
            ("min_gas", self.min_gas.len()),
            ("max_gas", self.max_gas.len()),
            ("substitution_ratio", self.substitution_ratio.len()),
            ("base_coke", self.base_coke.len()),
            ("base_production", self.base_production.len()),
            ("delta_prod_per_gas", self.delta_prod_per_gas.len()),
            ("delta_prod_per_coke", self.delta_prod_per_coke.len()),
            ("quality_per_gas", self.quality_per_gas.len()),
            ("quality_per_coke", self.quality_per_coke.len()),
            ("quality_per_production", self.quality_per_production.len()),
            ("quality_base", self.quality_base.len()),
            ("quality_min", self.quality_min.len()),
            ("quality_max", self.quality_max.len()),
        ];

        if let Some((column, len)) = lengths.iter().find(|(_, len)| *len != n) {
            return Err(InvalidConfiguration(format!(
                "column {} has {} entries but base_gas has {}",
                column, len, n
            )));
        }
        if !self.names.is_empty() && self.names.len() != n {
            return Err(InvalidConfiguration(format!(
                "names has {} entries but base_gas has {}",
                self.names.len(),
                n
            )));
        }

        let furnaces = (0..n)
            .map(|i| Furnace {
                name: self.names.get(i).cloned(),
                base_gas: self.base_gas[i],
                min_gas: self.min_gas[i],
                max_gas: self.max_gas[i],
                substitution_ratio: self.substitution_ratio[i],
                base_coke: self.base_coke[i],
                base_production: self.base_production[i],
                delta_prod_per_gas: self.delta_prod_per_gas[i],
                delta_prod_per_coke: self.delta_prod_per_coke[i],
                quality_per_gas: self.quality_per_gas[i],
                quality_per_coke: self.quality_per_coke[i],
                quality_per_production: self.quality_per_production[i],
                quality_base: self.quality_base[i],
                quality_min: self.quality_min[i],
                quality_max: self.quality_max[i],
            })
            .collect();

        FurnaceSet::new(furnaces, limits)
    }
}
