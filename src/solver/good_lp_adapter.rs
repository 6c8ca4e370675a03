// good_lp adapter shared by the microlp and CBC backends
// Translates the domain LP into good_lp variables, objective and constraints

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::Result,
    value_objects::{ConstraintType, OptimizationType, SolutionStatus as DomainSolutionStatus},
};
use good_lp::{
    solvers::SolutionStatus as GoodLpStatus, variable, variable::UnsolvedProblem, variables,
    Expression, ResolutionError, Solution as GoodLpSolutionTrait, SolverModel,
    Variable as GoodLpVariable,
};
use std::time::Instant;
use tracing::debug;

/// Solve `problem` with a good_lp backend such as `good_lp::microlp`
pub(crate) fn solve_with<S, M>(
    problem: &OptimizationProblem,
    backend: S,
    backend_name: &str,
) -> Result<DomainSolution>
where
    S: FnOnce(UnsolvedProblem) -> M,
    M: SolverModel<Error = ResolutionError>,
{
    let start_time = Instant::now();

    let mut vars = variables!();
    let lp_variables: Vec<GoodLpVariable> = problem
        .variables
        .iter()
        .map(|var_def| vars.add(variable().min(var_def.lower_bound).max(var_def.upper_bound)))
        .collect();

    let objective = linear_expression(&problem.objective.coefficients, &lp_variables);
    let unsolved = match problem.objective.optimization_type {
        OptimizationType::Maximize => vars.maximise(objective),
        OptimizationType::Minimize => vars.minimise(objective),
    };

    let mut lp_model = backend(unsolved);
    for constraint in &problem.constraints {
        let lhs = linear_expression(&constraint.coefficients, &lp_variables);
        lp_model = match constraint.constraint_type {
            ConstraintType::LessThanOrEqual => lp_model.with(lhs.leq(constraint.bound)),
            ConstraintType::Equal => lp_model.with(lhs.eq(constraint.bound)),
            ConstraintType::GreaterThanOrEqual => lp_model.with(lhs.geq(constraint.bound)),
        };
    }

    let solution_result = lp_model.solve();
    let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
    let statistics = SolverStatistics::for_problem(problem, solve_time);

    debug!(backend = backend_name, solve_time_ms = solve_time, "good_lp solve returned");

    let solution = match solution_result {
        Ok(sol) => {
            let variable_values: Vec<f64> = lp_variables.iter().map(|&var| sol.value(var)).collect();
            let actual_obj = problem.objective.evaluate(&variable_values);
            let lp_status = sol.status();

            match solved_status(lp_status) {
                DomainSolutionStatus::Optimal => {
                    let mut solution = DomainSolution::optimal(actual_obj, variable_values);
                    solution.message = format!("Optimal solution found for '{}'", problem.name);
                    solution
                }
                status => {
                    // Values at a limit are only a feasible point, never derived
                    let mut solution = DomainSolution::new(
                        status,
                        format!("{} stopped early: {:?}", backend_name, lp_status),
                    );
                    solution.variable_values = variable_values;
                    solution
                }
            }
        }
        Err(e) => unsolved_outcome(e, backend_name),
    };

    Ok(solution.with_statistics(statistics))
}

/// Domain status for a solve that returned values
fn solved_status(status: GoodLpStatus) -> DomainSolutionStatus {
    match status {
        GoodLpStatus::Optimal => DomainSolutionStatus::Optimal,
        GoodLpStatus::TimeLimit | GoodLpStatus::GapLimit => DomainSolutionStatus::Feasible,
    }
}

/// Domain solution for a solve that returned no values
fn unsolved_outcome(err: ResolutionError, backend_name: &str) -> DomainSolution {
    match err {
        ResolutionError::Infeasible => DomainSolution::infeasible(),
        ResolutionError::Unbounded => DomainSolution::unbounded(),
        ResolutionError::Other(reason) => DomainSolution::new(
            DomainSolutionStatus::Abnormal,
            format!("{} stopped abnormally: {}", backend_name, reason),
        ),
        ResolutionError::Str(reason) => DomainSolution::new(
            DomainSolutionStatus::Abnormal,
            format!("{} stopped abnormally: {}", backend_name, reason),
        ),
    }
}

fn linear_expression(coefficients: &[f64], lp_variables: &[GoodLpVariable]) -> Expression {
    let mut expr: Expression = 0.into();
    for (&coeff, &var) in coefficients.iter().zip(lp_variables) {
        if coeff != 0.0 {
            expr += coeff * var;
        }
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_proven_optimum_is_optimal() {
        assert_eq!(solved_status(GoodLpStatus::Optimal), DomainSolutionStatus::Optimal);
        assert_eq!(solved_status(GoodLpStatus::TimeLimit), DomainSolutionStatus::Feasible);
        assert_eq!(solved_status(GoodLpStatus::GapLimit), DomainSolutionStatus::Feasible);
    }

    #[test]
    fn resolution_errors_become_statuses() {
        assert_eq!(
            unsolved_outcome(ResolutionError::Infeasible, "cbc").status,
            DomainSolutionStatus::Infeasible
        );
        assert_eq!(
            unsolved_outcome(ResolutionError::Unbounded, "cbc").status,
            DomainSolutionStatus::Unbounded
        );

        let stopped = unsolved_outcome(ResolutionError::Other("Abandoned"), "cbc");
        assert_eq!(stopped.status, DomainSolutionStatus::Abnormal);
        assert!(stopped.message.contains("Abandoned"));
        assert!(stopped.variable_values.is_empty());

        let internal = unsolved_outcome(ResolutionError::Str("singular basis".into()), "microlp");
        assert_eq!(internal.status, DomainSolutionStatus::Abnormal);
        assert!(internal.message.contains("singular basis"));
    }
}
