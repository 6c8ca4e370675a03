// Optimization entry point: validate, build, solve once, derive

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::model_builder::build_problem;
use super::result_deriver::{derive_report, FurnaceReport};
use crate::domain::{
    FurnaceSet, InvalidConfiguration, OptimizationProblem, SolutionStatus, SolverConfig,
    SolverError, SolverService, SolverStatistics,
};
use crate::solver::SolverFactory;

/// Slack allowed when checking a returned solution against the model rows
const FEASIBILITY_TOLERANCE: f64 = 1e-5;

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error("Solver unavailable: {0}")]
    SolverUnavailable(String),
}

impl From<SolverError> for OptimizeError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidProblem(msg) => {
                OptimizeError::InvalidConfiguration(InvalidConfiguration(msg))
            }
            SolverError::SolverNotAvailable(msg) | SolverError::ExecutionFailed(msg) => {
                OptimizeError::SolverUnavailable(msg)
            }
        }
    }
}

/// Result of one optimization call.
///
/// `report` is present only when `status` is `Optimal`.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationOutcome {
    pub status: SolutionStatus,
    pub solver: String,
    pub message: String,
    pub statistics: SolverStatistics,
    pub report: Option<FurnaceReport>,
}

impl OptimizationOutcome {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Allocates gas across furnaces with a pluggable LP solver
#[derive(Clone)]
pub struct FurnaceOptimizer {
    solver: Arc<dyn SolverService>,
    config: SolverConfig,
}

impl FurnaceOptimizer {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self {
            solver,
            config: SolverConfig::default(),
        }
    }

    /// Optimizer backed by the solver the configuration asks for
    pub fn from_config(config: SolverConfig) -> Result<Self, OptimizeError> {
        let solver = SolverFactory::create_solver(&config)?;
        Ok(Self::new(solver).with_config(config))
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Build and validate the LP without solving it
    pub fn build(&self, set: &FurnaceSet) -> Result<OptimizationProblem, OptimizeError> {
        let problem = build_problem(set, self.config.clone())?;
        self.solver.validate(&problem)?;
        Ok(problem)
    }

    /// Run one optimization over the furnace set
    pub fn optimize(&self, set: &FurnaceSet) -> Result<OptimizationOutcome, OptimizeError> {
        let problem = self.build(set)?;

        info!(
            furnaces = set.len(),
            solver = self.solver.name(),
            "Solving furnace gas allocation"
        );
        debug!(
            variables = problem.num_variables(),
            constraints = problem.num_constraints(),
            total_gas_limit = set.limits.total_gas,
            total_coke_limit = set.limits.total_coke,
            required_production = set.limits.required_production,
            "Model built"
        );

        let solution = self.solver.solve(&problem)?;

        info!(
            status = %solution.status,
            solve_time_ms = solution.statistics.solve_time_ms,
            "Solver finished"
        );

        if solution.is_feasible() {
            let violated = problem.violations(&solution.variable_values, FEASIBILITY_TOLERANCE);
            if !violated.is_empty() {
                warn!(status = %solution.status, rows = ?violated, "Solution violates model rows");
            }
        }

        let report = derive_report(set, &solution);
        if let Some(report) = &report {
            info!(
                total_gas = report.total_gas,
                total_coke = report.total_coke,
                total_production = report.total_production,
                objective = report.objective,
                "Derived operating plan"
            );
        }

        Ok(OptimizationOutcome {
            status: solution.status,
            solver: self.solver.name().to_string(),
            message: solution.message,
            statistics: solution.statistics,
            report,
        })
    }
}
