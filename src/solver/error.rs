use std::error::Error;
use std::fmt::Display;

use crate::catalog::CatalogError;
use crate::grid::GridError;

/// Error returned by [`Solver::solve`](super::Solver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Propagation emptied a cell's candidate list; this is not a bug to
    /// recover from in-place, it is WFC's normal failure mode. Callers
    /// retry with a fresh seed.
    Contradiction { index: usize },
    /// The catalog could not be prepared for solving.
    Catalog(CatalogError),
    /// The grid rejected an operation the solver attempted.
    Grid(GridError),
}

impl Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Contradiction { index } => {
                write!(f, "no consistent tile remains for cell {index}")
            }
            SolveError::Catalog(err) => write!(f, "catalog error: {err}"),
            SolveError::Grid(err) => write!(f, "grid error: {err}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Contradiction { .. } => None,
            SolveError::Catalog(err) => Some(err),
            SolveError::Grid(err) => Some(err),
        }
    }
}

impl From<CatalogError> for SolveError {
    fn from(err: CatalogError) -> Self {
        SolveError::Catalog(err)
    }
}

impl From<GridError> for SolveError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Contradiction { index } => SolveError::Contradiction { index },
            other => SolveError::Grid(other),
        }
    }
}
