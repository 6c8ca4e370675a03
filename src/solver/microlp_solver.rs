// microlp Solver Adapter
// Pure Rust simplex through good_lp; needs no native library

use super::good_lp_adapter::solve_with;
use crate::domain::{
    models::{OptimizationProblem, Solution},
    solver_service::{Result, SolverService},
};

pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicroLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for MicroLpSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        self.validate(problem)?;
        solve_with(problem, good_lp::microlp, self.name())
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
