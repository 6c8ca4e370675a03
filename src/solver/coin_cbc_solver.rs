// COIN-OR CBC Solver Adapter
// Requires the system Cbc library; enabled with the `cbc` feature

use super::good_lp_adapter::solve_with;
use crate::domain::{
    models::{OptimizationProblem, Solution},
    solver_service::{Result, SolverService},
};
use good_lp::solvers::coin_cbc;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        self.validate(problem)?;
        solve_with(
            problem,
            |unsolved| {
                let mut model = coin_cbc::coin_cbc(unsolved);
                // CBC logs to stdout unless told otherwise
                if !problem.solver_config.verbose {
                    model.set_parameter("log", "0");
                }
                model
            },
            self.name(),
        )
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
