// Domain value objects representing core optimization concepts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of constraint comparison.
///
/// The furnace model only emits `≤` and `≥` rows. `Equal` belongs to the
/// general LP surface every `SolverService` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// Less than or equal (≤)
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

impl ConstraintType {
    /// Whether `lhs` satisfies the comparison against `bound` within `tolerance`
    pub fn holds(&self, lhs: f64, bound: f64, tolerance: f64) -> bool {
        match self {
            ConstraintType::LessThanOrEqual => lhs <= bound + tolerance,
            ConstraintType::Equal => (lhs - bound).abs() <= tolerance,
            ConstraintType::GreaterThanOrEqual => lhs >= bound - tolerance,
        }
    }
}

/// Direction of optimization.
///
/// The furnace model always maximizes. `Minimize` belongs to the general LP
/// surface every `SolverService` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationType {
    /// Minimize the objective function
    Minimize,
    /// Maximize the objective function
    Maximize,
}

/// Status reported by the LP solver after a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Found feasible solution (may not be optimal)
    Feasible,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Solver stopped in an abnormal state (numerical trouble, limits)
    Abnormal,
    /// Solver did not run
    NotSolved,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "OPTIMAL"),
            SolutionStatus::Feasible => write!(f, "FEASIBLE"),
            SolutionStatus::Infeasible => write!(f, "INFEASIBLE"),
            SolutionStatus::Unbounded => write!(f, "UNBOUNDED"),
            SolutionStatus::Abnormal => write!(f, "ABNORMAL"),
            SolutionStatus::NotSolved => write!(f, "NOT_SOLVED"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackend {
    /// Pick the best backend compiled into this build
    #[default]
    Auto,
    /// Pure Rust simplex via good_lp
    MicroLp,
    /// COIN-OR CBC via good_lp
    #[serde(rename = "cbc")]
    CoinCbc,
    /// HiGHS
    Highs,
}

impl SolverBackend {
    /// Every concrete backend, in `Auto` preference order
    pub const CONCRETE: [SolverBackend; 3] =
        [SolverBackend::Highs, SolverBackend::CoinCbc, SolverBackend::MicroLp];

    /// Whether the backend's Cargo feature is compiled in
    pub fn is_available(&self) -> bool {
        match self {
            SolverBackend::Auto => Self::CONCRETE.iter().any(|b| b.is_available()),
            SolverBackend::MicroLp => cfg!(feature = "microlp"),
            SolverBackend::CoinCbc => cfg!(feature = "cbc"),
            SolverBackend::Highs => cfg!(feature = "highs"),
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::MicroLp => write!(f, "microlp"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

impl std::str::FromStr for SolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SolverBackend::Auto),
            "microlp" => Ok(SolverBackend::MicroLp),
            "cbc" | "coin_cbc" => Ok(SolverBackend::CoinCbc),
            "highs" => Ok(SolverBackend::Highs),
            other => Err(format!(
                "unknown solver backend '{}' (expected auto, microlp, cbc or highs)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_names() {
        assert_eq!("HiGHS".parse::<SolverBackend>(), Ok(SolverBackend::Highs));
        assert_eq!("cbc".parse::<SolverBackend>(), Ok(SolverBackend::CoinCbc));
        assert_eq!("microlp".parse::<SolverBackend>(), Ok(SolverBackend::MicroLp));
        assert!("glop".parse::<SolverBackend>().is_err());
    }

    #[test]
    fn auto_is_available_when_any_backend_is() {
        let any = SolverBackend::CONCRETE.iter().any(|b| b.is_available());
        assert_eq!(SolverBackend::Auto.is_available(), any);
    }

    #[test]
    fn comparison_tolerance() {
        assert!(ConstraintType::LessThanOrEqual.holds(1.0 + 1e-9, 1.0, 1e-6));
        assert!(!ConstraintType::GreaterThanOrEqual.holds(0.9, 1.0, 1e-6));
        assert!(ConstraintType::Equal.holds(2.0, 2.0, 0.0));
    }

    #[test]
    fn status_display_matches_solver_vocabulary() {
        assert_eq!(SolutionStatus::Optimal.to_string(), "OPTIMAL");
        assert_eq!(SolutionStatus::NotSolved.to_string(), "NOT_SOLVED");
    }
}
