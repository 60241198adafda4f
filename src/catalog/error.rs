use std::error::Error;
use std::fmt::Display;

/// Error occurring while configuring or populating a [`TileCatalog`](super::TileCatalog).
///
/// Every variant corresponds to one of the misconfiguration or over-capacity
/// failure modes this crate's operations can report; none of them can occur
/// mid-solve, since the catalog cannot be mutated once borrowed by
/// [`Solver::solve`](crate::solver::Solver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// `tile_capacity` was zero.
    ZeroCapacity,
    /// `tile_capacity` exceeded the 255-tile ceiling imposed by the
    /// byte-width tile-index storage used by [`Grid`](crate::grid::Grid).
    CapacityTooLarge { capacity: usize, max: usize },
    /// `direction_count` was outside `1..=8`.
    InvalidDirectionCount { direction_count: usize },
    /// `socket_count_per_direction` was outside `1..=8`.
    InvalidSocketCount { socket_count: usize },
    /// The number of sockets passed to [`add`](super::TileCatalog::add) did
    /// not match the catalog's configured `direction_count`.
    SocketCountMismatch { expected: usize, got: usize },
    /// Adding this tile (plus its rotations, before clamping) would exceed
    /// the catalog's remaining capacity.
    CapacityExceeded { requested: usize, available: usize },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ZeroCapacity => write!(f, "tile catalog capacity must be at least 1"),
            CatalogError::CapacityTooLarge { capacity, max } => write!(
                f,
                "tile catalog capacity {capacity} exceeds the maximum of {max} tiles addressable by an 8-bit tile index"
            ),
            CatalogError::InvalidDirectionCount { direction_count } => write!(
                f,
                "direction_count {direction_count} is outside the supported range 1..=8"
            ),
            CatalogError::InvalidSocketCount { socket_count } => write!(
                f,
                "socket_count_per_direction {socket_count} is outside the supported range 1..=8"
            ),
            CatalogError::SocketCountMismatch { expected, got } => write!(
                f,
                "tile has {got} direction sockets, catalog expects {expected}"
            ),
            CatalogError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "adding {requested} tile slots (including rotations) would exceed the {available} remaining in the catalog"
            ),
        }
    }
}

impl Error for CatalogError {}
