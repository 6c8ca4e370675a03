// HiGHS Solver Adapter
// Implements the SolverService interface directly on the highs crate
// so that every HiGHS model status maps onto a domain status

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus as DomainSolutionStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;
use tracing::debug;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        let start_time = Instant::now();

        // Use HiGHS RowProblem (add variables first, then constraints)
        let mut pb = RowProblem::default();
        let vars: Vec<_> = problem
            .variables
            .iter()
            .zip(&problem.objective.coefficients)
            .map(|(var_def, &obj_coeff)| {
                pb.add_column(obj_coeff, var_def.lower_bound..=var_def.upper_bound)
            })
            .collect();

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .zip(&vars)
                .filter(|&(&coeff, _)| coeff != 0.0)
                .map(|(&coeff, &col)| (col, coeff))
                .collect();

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let sense = match problem.objective.optimization_type {
            OptimizationType::Maximize => Sense::Maximise,
            OptimizationType::Minimize => Sense::Minimise,
        };

        let mut model = pb.optimise(sense);
        model.set_option("output_flag", problem.solver_config.verbose);

        let solved = model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        let statistics = SolverStatistics::for_problem(problem, solve_time);

        debug!(status = ?solved.status(), solve_time_ms = solve_time, "HiGHS solve returned");

        let solution = match solved.status() {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();
                let actual_obj = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(actual_obj, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                solution
            }
            // Presolve reports UnboundedOrInfeasible for boxed models with no feasible point
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                DomainSolution::infeasible()
            }
            HighsModelStatus::Unbounded => DomainSolution::unbounded(),
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit => {
                // Values at a limit are only a feasible point, never derived
                let mut solution = DomainSolution::new(
                    DomainSolutionStatus::Feasible,
                    format!("HiGHS stopped early: {:?}", solved.status()),
                );
                solution.variable_values = solved.get_solution().columns().to_vec();
                solution
            }
            HighsModelStatus::NotSet => DomainSolution::new(
                DomainSolutionStatus::NotSolved,
                "HiGHS did not run",
            ),
            HighsModelStatus::LoadError | HighsModelStatus::ModelError => {
                return Err(SolverError::ExecutionFailed(format!(
                    "HiGHS rejected the model: {:?}",
                    solved.status()
                )))
            }
            status => DomainSolution::new(
                DomainSolutionStatus::Abnormal,
                format!("HiGHS solver returned status: {:?}", status),
            ),
        };

        Ok(solution.with_statistics(statistics))
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
