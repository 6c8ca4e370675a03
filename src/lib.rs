// Domain layer: LP model, solver contract, furnace plant data
pub mod domain;

// Application layer: model building, solving and result derivation
pub mod application;

// Infrastructure layer: configuration files and logging
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintType, Furnace, FurnaceColumns, FurnaceSet, InvalidConfiguration,
    LinearResponse, ObjectiveFunction, OptimizationProblem, OptimizationType, PlantLimits,
    Solution, SolutionStatus, SolverBackend, SolverConfig, SolverError, SolverService, Variable,
    KG_PER_TONNE,
};

pub use application::{
    build_problem, derive_report, FurnaceOptimizer, FurnaceOutcome, FurnaceReport,
    OptimizationOutcome, OptimizeError,
};

pub use infrastructure::{AppConfig, ConfigError, LogFormat, LogLevel, LoggingConfig};

pub use solver::SolverFactory;

#[cfg(feature = "microlp")]
pub use solver::MicroLpSolver;

#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;

#[cfg(feature = "highs")]
pub use solver::HighsSolver;
