use std::error::Error;
use std::fmt::Display;

/// Error occurring while constructing or mutating a [`Grid`](super::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// `rows` or `cols` was zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// The catalog passed to [`Grid::new`](super::Grid::new) held no tiles.
    EmptyCatalog,
    /// This crate's neighbor navigation is only defined for four cardinal
    /// directions; the catalog's `direction_count` was something else.
    UnsupportedDirectionCount { direction_count: usize },
    /// `index` was outside `0..cell_count`.
    IndexOutOfBounds { index: usize, cell_count: usize },
    /// [`collapse_cell`](super::Grid::collapse_cell) was called on a cell
    /// that is already collapsed.
    AlreadyCollapsed { index: usize },
    /// The tile passed to [`collapse_cell`](super::Grid::collapse_cell) is
    /// not among the cell's current candidates.
    NotACandidate { index: usize, tile: u8 },
    /// Propagation removed every remaining candidate from a cell.
    Contradiction { index: usize },
}

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions {rows}x{cols} must both be at least 1")
            }
            GridError::EmptyCatalog => {
                write!(f, "cannot build a grid from a catalog with zero tiles")
            }
            GridError::UnsupportedDirectionCount { direction_count } => write!(
                f,
                "grid navigation requires exactly 4 directions, catalog has {direction_count}"
            ),
            GridError::IndexOutOfBounds { index, cell_count } => write!(
                f,
                "cell index {index} is out of bounds for a grid of {cell_count} cells"
            ),
            GridError::AlreadyCollapsed { index } => {
                write!(f, "cell {index} is already collapsed")
            }
            GridError::NotACandidate { index, tile } => write!(
                f,
                "tile {tile} is not among the remaining candidates of cell {index}"
            ),
            GridError::Contradiction { index } => write!(
                f,
                "cell {index} has no remaining candidates after propagation"
            ),
        }
    }
}

impl Error for GridError {}
