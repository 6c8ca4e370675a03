use crate::domain::{
    models::SolverConfig,
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolverBackend,
};
#[cfg(feature = "cbc")]
use crate::solver::CoinCbcSolver;
#[cfg(feature = "highs")]
use crate::solver::HighsSolver;
#[cfg(feature = "microlp")]
use crate::solver::MicroLpSolver;
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver based on the solver configuration
    pub fn create_solver(config: &SolverConfig) -> Result<Arc<dyn SolverService>> {
        Self::create_from_backend(config.backend)
    }

    /// Create a solver for a specific backend
    ///
    /// Fails with `SolverNotAvailable` when the backend's feature is not compiled in.
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Self::default_solver(),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Ok(Arc::new(HighsSolver::new())),
            #[cfg(feature = "cbc")]
            SolverBackend::CoinCbc => Ok(Arc::new(CoinCbcSolver::new())),
            #[cfg(feature = "microlp")]
            SolverBackend::MicroLp => Ok(Arc::new(MicroLpSolver::new())),
            #[allow(unreachable_patterns)]
            missing => Err(SolverError::SolverNotAvailable(format!(
                "{} backend is not compiled in (enable the `{}` feature)",
                missing,
                feature_name(missing)
            ))),
        }
    }

    /// Get the preferred compiled-in solver: HiGHS, then CBC, then microlp
    pub fn default_solver() -> Result<Arc<dyn SolverService>> {
        match Self::available_backends().first() {
            Some(&backend) => Self::create_from_backend(backend),
            None => Err(SolverError::SolverNotAvailable(
                "no solver backend is compiled in".to_string(),
            )),
        }
    }

    /// Concrete backends compiled into this build, in preference order
    pub fn available_backends() -> Vec<SolverBackend> {
        SolverBackend::CONCRETE
            .into_iter()
            .filter(SolverBackend::is_available)
            .collect()
    }
}

fn feature_name(backend: SolverBackend) -> &'static str {
    match backend {
        SolverBackend::Auto => "microlp",
        SolverBackend::MicroLp => "microlp",
        SolverBackend::CoinCbc => "cbc",
        SolverBackend::Highs => "highs",
    }
}
