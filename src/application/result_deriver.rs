//! Recomputes per-furnace physical quantities from solved gas flows.

use crate::domain::{FurnaceSet, Solution};
use serde::Serialize;

/// Operating point of one furnace at the solved gas flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FurnaceOutcome {
    pub furnace: String,
    /// m³/h
    pub gas: f64,
    /// t/h
    pub coke: f64,
    /// t/h
    pub production: f64,
    /// Si, %
    pub quality: f64,
}

/// Derived operating plan for the whole plant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FurnaceReport {
    pub furnaces: Vec<FurnaceOutcome>,
    pub total_gas: f64,
    pub total_coke: f64,
    pub total_production: f64,
    pub mean_quality: f64,
    /// Net marginal value of the allocation, Σ net_gas_value_i · gas_i
    pub objective: f64,
}

impl FurnaceReport {
    pub fn gas(&self) -> Vec<f64> {
        self.furnaces.iter().map(|f| f.gas).collect()
    }

    pub fn coke(&self) -> Vec<f64> {
        self.furnaces.iter().map(|f| f.coke).collect()
    }

    pub fn production(&self) -> Vec<f64> {
        self.furnaces.iter().map(|f| f.production).collect()
    }

    pub fn quality(&self) -> Vec<f64> {
        self.furnaces.iter().map(|f| f.quality).collect()
    }
}

/// Derive the operating plan from a solved model.
///
/// Only an optimal solution is reported; any other status yields `None`, as
/// does a value vector that does not cover every furnace.
pub fn derive_report(set: &FurnaceSet, solution: &Solution) -> Option<FurnaceReport> {
    if !solution.is_optimal() || solution.variable_values.len() != set.len() {
        return None;
    }

    let furnaces: Vec<FurnaceOutcome> = set
        .furnaces
        .iter()
        .zip(&solution.variable_values)
        .enumerate()
        .map(|(i, (furnace, &gas))| FurnaceOutcome {
            furnace: furnace.label(i),
            gas,
            coke: furnace.coke_of().eval(gas),
            production: furnace.production_of().eval(gas),
            quality: furnace.quality_of().eval(gas),
        })
        .collect();

    let objective: f64 = set
        .furnaces
        .iter()
        .zip(&furnaces)
        .map(|(f, outcome)| f.net_gas_value() * outcome.gas)
        .sum();

    Some(FurnaceReport {
        total_gas: furnaces.iter().map(|f| f.gas).sum(),
        total_coke: furnaces.iter().map(|f| f.coke).sum(),
        total_production: furnaces.iter().map(|f| f.production).sum(),
        mean_quality: furnaces.iter().map(|f| f.quality).sum::<f64>() / furnaces.len() as f64,
        objective,
        furnaces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionStatus;
    use crate::testing::{reference_plant, single_furnace_set};
    use float_eq::assert_float_eq;

    #[test]
    fn derives_quantities_at_solved_gas() {
        let set = single_furnace_set();
        let report = derive_report(&set, &Solution::optimal(0.0, vec![20000.0])).unwrap();
        let outcome = &report.furnaces[0];

        assert_eq!(outcome.furnace, "1");
        assert_eq!(outcome.gas, 20000.0);
        assert_float_eq!(outcome.coke, 64.25 - 5000.0 * 0.59 / 1000.0, abs <= 1e-9);
        assert_float_eq!(
            outcome.production,
            146.4 + 5000.0 * (-0.0007295 + 0.59 * 0.00297),
            abs <= 1e-9
        );
        assert_eq!(report.total_production, outcome.production);
    }

    #[test]
    fn baseline_gas_reproduces_baseline_totals() {
        let set = reference_plant();
        let baseline: Vec<f64> = set.furnaces.iter().map(|f| f.base_gas).collect();
        let report = derive_report(&set, &Solution::optimal(0.0, baseline)).unwrap();

        assert_float_eq!(report.total_production, 677.6, abs <= 1e-9);
        assert_float_eq!(report.total_coke, 299.79, abs <= 1e-9);
        assert_eq!(report.total_gas, 68000.0);
        assert_float_eq!(report.mean_quality, (0.59 + 0.51 + 0.66 + 0.6 + 0.535) / 5.0, abs <= 1e-12);
    }

    #[test]
    fn objective_sums_net_values() {
        let set = reference_plant();
        let gas = vec![20000.0, 10000.0, 10000.0, 10000.0, 10000.0];
        let report = derive_report(&set, &Solution::optimal(0.0, gas.clone())).unwrap();
        let expected: f64 = set
            .furnaces
            .iter()
            .zip(&gas)
            .map(|(f, g)| (f.delta_prod_per_gas - f.substitution_ratio * f.delta_prod_per_coke) * g)
            .sum();
        assert_float_eq!(report.objective, expected, rmax <= 1e-12);
    }

    #[test]
    fn non_optimal_statuses_produce_nothing() {
        let set = single_furnace_set();
        for status in [
            SolutionStatus::Feasible,
            SolutionStatus::Infeasible,
            SolutionStatus::Unbounded,
            SolutionStatus::Abnormal,
            SolutionStatus::NotSolved,
        ] {
            let mut solution = Solution::new(status, "");
            solution.variable_values = vec![15000.0];
            assert!(derive_report(&set, &solution).is_none(), "{} was derived", status);
        }
    }

    #[test]
    fn short_value_vector_is_not_derived() {
        let set = reference_plant();
        assert!(derive_report(&set, &Solution::optimal(0.0, vec![15000.0])).is_none());
    }

    #[test]
    fn vectors_follow_furnace_order() {
        let set = reference_plant();
        let gas = vec![11000.0, 12000.0, 13000.0, 14000.0, 15000.0];
        let report = derive_report(&set, &Solution::optimal(0.0, gas.clone())).unwrap();
        assert_eq!(report.gas(), gas);
        assert_eq!(report.coke().len(), 5);
        assert_eq!(report.production().len(), 5);
        assert_eq!(report.quality()[4], set.furnaces[4].quality_of().eval(15000.0));
    }
}
