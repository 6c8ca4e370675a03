//! Translates a furnace plant into a linear program.
//!
//! One continuous variable per furnace holds its gas flow. Every row is built
//! from the affine responses in [`crate::domain::response`], moving the
//! response's constant term to the right-hand side.

use crate::domain::{
    Constraint, Furnace, FurnaceSet, InvalidConfiguration, LinearResponse, ObjectiveFunction,
    OptimizationProblem, SolverConfig, Variable, KG_PER_TONNE,
};

pub const PROBLEM_NAME: &str = "furnace_gas_allocation";

pub const TOTAL_GAS_MIN: &str = "total_gas_min";
pub const TOTAL_GAS_MAX: &str = "total_gas_max";
pub const TOTAL_COKE: &str = "total_coke";
pub const PRODUCTION_FLOOR: &str = "production_floor";

pub fn gas_variable_name(index: usize) -> String {
    format!("gas_{}", index)
}

pub fn quality_min_name(index: usize) -> String {
    format!("quality_min_{}", index)
}

pub fn quality_max_name(index: usize) -> String {
    format!("quality_max_{}", index)
}

/// Build the gas allocation LP for a furnace set.
///
/// Fails before building anything if the set is empty or inconsistent.
pub fn build_problem(
    set: &FurnaceSet,
    config: SolverConfig,
) -> Result<OptimizationProblem, InvalidConfiguration> {
    set.validate()?;

    let n = set.len();
    let limits = &set.limits;

    let variables = set
        .furnaces
        .iter()
        .enumerate()
        .map(|(i, f)| Variable::continuous(gas_variable_name(i)).with_bounds(f.min_gas, f.max_gas))
        .collect();

    let objective = ObjectiveFunction::maximize(
        set.furnaces.iter().map(Furnace::net_gas_value).collect(),
    );

    let mut problem = OptimizationProblem::new(objective)
        .with_name(PROBLEM_NAME)
        .with_variables(variables)
        .with_config(config)
        .add_constraint(Constraint::geq(vec![1.0; n], 0.0).with_name(TOTAL_GAS_MIN))
        .add_constraint(Constraint::leq(vec![1.0; n], limits.total_gas).with_name(TOTAL_GAS_MAX));

    // Coke row in kg/h: the limit is t/h, so both sides carry KG_PER_TONNE
    let (coefficients, constant) = summed_row(set, |f| f.coke_of().scaled(KG_PER_TONNE));
    problem = problem.add_constraint(
        Constraint::leq(coefficients, limits.total_coke * KG_PER_TONNE - constant)
            .with_name(TOTAL_COKE),
    );

    let (coefficients, constant) = summed_row(set, Furnace::production_of);
    problem = problem.add_constraint(
        Constraint::geq(coefficients, limits.required_production - constant)
            .with_name(PRODUCTION_FLOOR),
    );

    for (i, furnace) in set.furnaces.iter().enumerate() {
        let (coefficients, constant) = single_row(n, i, furnace.quality_of());
        problem = problem
            .add_constraint(
                Constraint::geq(coefficients.clone(), furnace.quality_min - constant)
                    .with_name(quality_min_name(i)),
            )
            .add_constraint(
                Constraint::leq(coefficients, furnace.quality_max - constant)
                    .with_name(quality_max_name(i)),
            );
    }

    Ok(problem)
}

/// Row for `Σ_i response_i(gas_i)`: per-variable slopes and the summed constant term
fn summed_row<F>(set: &FurnaceSet, response: F) -> (Vec<f64>, f64)
where
    F: Fn(&Furnace) -> LinearResponse,
{
    set.furnaces
        .iter()
        .map(response)
        .fold((Vec::with_capacity(set.len()), 0.0), |(mut row, constant), r| {
            row.push(r.slope);
            (row, constant + r.intercept())
        })
}

/// Row for a response of a single furnace's gas flow
fn single_row(n: usize, index: usize, response: LinearResponse) -> (Vec<f64>, f64) {
    let mut row = vec![0.0; n];
    row[index] = response.slope;
    (row, response.intercept())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConstraintType;
    use crate::testing::{reference_plant, single_furnace_set};
    use float_eq::assert_float_eq;

    #[test]
    fn one_bounded_variable_per_furnace() {
        let set = reference_plant();
        let problem = build_problem(&set, SolverConfig::default()).unwrap();

        assert_eq!(problem.num_variables(), 5);
        assert_eq!(problem.variables.len(), 5);
        for (var, furnace) in problem.variables.iter().zip(&set.furnaces) {
            assert_eq!(var.lower_bound, furnace.min_gas);
            assert_eq!(var.upper_bound, furnace.max_gas);
        }
        assert_eq!(problem.variables[3].name, "gas_3");
    }

    #[test]
    fn four_plant_rows_and_two_quality_rows_per_furnace() {
        let problem = build_problem(&reference_plant(), SolverConfig::default()).unwrap();
        assert_eq!(problem.num_constraints(), 4 + 2 * 5);
        assert!(problem.constraint(TOTAL_COKE).is_some());
        assert!(problem.constraint("quality_max_4").is_some());
    }

    #[test]
    fn objective_is_net_marginal_value_of_gas() {
        let set = reference_plant();
        let problem = build_problem(&set, SolverConfig::default()).unwrap();
        let expected = -0.0007295 - 0.59 * -0.00297;
        assert_float_eq!(problem.objective.coefficients[0], expected, rmax <= 1e-12);
        assert_float_eq!(problem.objective.coefficients[2], 0.85 * 0.002928, rmax <= 1e-12);
    }

    #[test]
    fn total_gas_rows_bracket_the_sum() {
        let problem = build_problem(&reference_plant(), SolverConfig::default()).unwrap();
        let min = problem.constraint(TOTAL_GAS_MIN).unwrap();
        let max = problem.constraint(TOTAL_GAS_MAX).unwrap();
        assert_eq!(min.constraint_type, ConstraintType::GreaterThanOrEqual);
        assert_eq!(min.bound, 0.0);
        assert_eq!(max.constraint_type, ConstraintType::LessThanOrEqual);
        assert_eq!(max.bound, 85000.0);
        assert_eq!(max.coefficients, vec![1.0; 5]);
    }

    #[test]
    fn coke_row_is_scaled_to_kilograms() {
        let set = reference_plant();
        let problem = build_problem(&set, SolverConfig::default()).unwrap();
        let coke = problem.constraint(TOTAL_COKE).unwrap();

        // Σ E_i (base_i - gas_i) <= 1000 (limit - Σ base_coke)  ⇔  -Σ E_i gas_i <= rhs
        let base_coke: f64 = set.furnaces.iter().map(|f| f.base_coke).sum();
        let e_base_gas: f64 = set
            .furnaces
            .iter()
            .map(|f| f.substitution_ratio * f.base_gas)
            .sum();
        let expected_rhs = KG_PER_TONNE * (300.0 - base_coke) - e_base_gas;

        assert_float_eq!(coke.coefficients[1], -0.53, abs <= 1e-12);
        assert_float_eq!(coke.bound, expected_rhs, abs <= 1e-6);
    }

    #[test]
    fn production_row_holds_exactly_at_baseline() {
        let set = single_furnace_set();
        let problem = build_problem(&set, SolverConfig::default()).unwrap();
        let row = problem.constraint(PRODUCTION_FLOOR).unwrap();

        // At base gas the floor reads base_production >= required_production
        let slack = row.lhs(&[15000.0]) - row.bound;
        assert_float_eq!(slack, 146.4 - 140.0, abs <= 1e-9);
    }

    #[test]
    fn quality_rows_touch_only_their_furnace() {
        let problem = build_problem(&reference_plant(), SolverConfig::default()).unwrap();
        for i in 0..5 {
            for name in [quality_min_name(i), quality_max_name(i)] {
                let row = problem.constraint(&name).unwrap();
                for (j, c) in row.coefficients.iter().enumerate() {
                    if j != i {
                        assert_eq!(*c, 0.0, "{} has a coefficient on gas_{}", name, j);
                    }
                }
            }
        }
    }

    #[test]
    fn baseline_satisfies_every_row_of_the_reference_plant() {
        let set = reference_plant();
        let problem = build_problem(&set, SolverConfig::default()).unwrap();
        let baseline: Vec<f64> = set.furnaces.iter().map(|f| f.base_gas).collect();
        assert!(problem.violations(&baseline, 1e-6).is_empty());
    }

    #[test]
    fn empty_set_never_reaches_the_solver() {
        let mut set = single_furnace_set();
        set.furnaces.clear();
        assert!(build_problem(&set, SolverConfig::default()).is_err());
    }
}
