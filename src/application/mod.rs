// Application layer: furnace model building, solving and result derivation

pub mod model_builder;
pub mod optimizer;
pub mod result_deriver;

pub use model_builder::build_problem;
pub use optimizer::{FurnaceOptimizer, OptimizationOutcome, OptimizeError};
pub use result_deriver::{derive_report, FurnaceOutcome, FurnaceReport};
