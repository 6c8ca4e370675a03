//! Affine responses of furnace quantities to gas flow.
//!
//! Each derived quantity (coke consumption, production, silicon content) is
//! modelled as a first-order response around the furnace's baseline gas flow.
//! These definitions are the only place the formulas live: the model builder
//! turns them into constraint rows and the result deriver evaluates them at
//! the solved gas flow.

use super::plant::Furnace;

/// Kilograms per tonne.
///
/// The substitution ratio is kg of coke per m³ of gas while coke consumption
/// and the coke limit are t/h, so coke displaced by a gas change is divided
/// by this factor.
pub const KG_PER_TONNE: f64 = 1000.0;

/// `value(gas) = base_value + (gas - base_gas) * slope`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearResponse {
    pub base_gas: f64,
    pub base_value: f64,
    pub slope: f64,
}

impl LinearResponse {
    pub fn eval(&self, gas: f64) -> f64 {
        self.base_value + (gas - self.base_gas) * self.slope
    }

    /// Constant term when written as `slope * gas + intercept`
    pub fn intercept(&self) -> f64 {
        self.base_value - self.slope * self.base_gas
    }

    /// Same response with value and slope multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            base_gas: self.base_gas,
            base_value: self.base_value * factor,
            slope: self.slope * factor,
        }
    }
}

impl Furnace {
    /// Net production gained per m³/h of gas: the direct gas effect minus the
    /// production lost with the coke that gas displaces.
    pub fn net_gas_value(&self) -> f64 {
        self.delta_prod_per_gas - self.substitution_ratio * self.delta_prod_per_coke
    }

    /// Coke consumption, t/h. Falls as gas rises above baseline.
    pub fn coke_of(&self) -> LinearResponse {
        LinearResponse {
            base_gas: self.base_gas,
            base_value: self.base_coke,
            slope: -self.substitution_ratio / KG_PER_TONNE,
        }
    }

    /// Production rate, t/h.
    pub fn production_of(&self) -> LinearResponse {
        LinearResponse {
            base_gas: self.base_gas,
            base_value: self.base_production,
            slope: self.net_gas_value(),
        }
    }

    /// Silicon content, %: direct gas effect, coke displacement effect and
    /// the effect of the production change.
    pub fn quality_of(&self) -> LinearResponse {
        LinearResponse {
            base_gas: self.base_gas,
            base_value: self.quality_base,
            slope: self.quality_per_gas - self.substitution_ratio * self.quality_per_coke
                + self.net_gas_value() * self.quality_per_production,
        }
    }
}
