//! Per-cell superposition state over a 2D grid, and the single-step
//! constraint propagation that narrows neighbors once a cell collapses.
//!
//! Grid navigation is specified for exactly four cardinal directions
//! (`0 = up, 1 = right, 2 = down, 3 = left`), matching the direction
//! ordering [`TileCatalog`](crate::catalog::TileCatalog) sockets are indexed
//! by when `direction_count == 4`.

mod error;

pub use error::GridError;

use crate::catalog::TileCatalog;

/// A 2D grid of tile superpositions: each cell starts holding every tile in
/// the catalog as a candidate, and narrows toward a single tile as
/// neighboring cells collapse.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_capacity: usize,
    collapsed: Vec<bool>,
    entropy_count: Vec<u8>,
    candidates: Vec<u8>,
}

impl Grid {
    /// Build a `rows x cols` grid, every cell fully superposed over every
    /// tile in `catalog`.
    ///
    /// `catalog` must have `direction_count == 4` and at least one tile.
    pub fn new(rows: usize, cols: usize, catalog: &TileCatalog) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if catalog.config().direction_count != 4 {
            return Err(GridError::UnsupportedDirectionCount {
                direction_count: catalog.config().direction_count,
            });
        }
        let tile_count = catalog.tile_count();
        if tile_count == 0 {
            return Err(GridError::EmptyCatalog);
        }

        let cell_count = rows * cols;
        log::trace!("allocating Grid {rows}x{cols} tile_capacity={tile_count}");

        let mut grid = Self {
            rows,
            cols,
            tile_capacity: tile_count,
            collapsed: vec![false; cell_count],
            entropy_count: vec![0; cell_count],
            candidates: vec![0u8; cell_count * tile_count],
        };
        grid.reset();
        Ok(grid)
    }

    /// Reset every cell back to full superposition over `0..tile_capacity`.
    pub fn reset(&mut self) {
        self.collapsed.iter_mut().for_each(|c| *c = false);
        self.entropy_count
            .iter_mut()
            .for_each(|c| *c = self.tile_capacity as u8);
        for cell in 0..self.rows * self.cols {
            let base = cell * self.tile_capacity;
            for (offset, tile) in (0..self.tile_capacity).enumerate() {
                self.candidates[base + offset] = tile as u8;
            }
        }
    }

    /// Row/column extent of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of tiles each cell's candidate list is sized for.
    pub fn tile_capacity(&self) -> usize {
        self.tile_capacity
    }

    /// Linear index of `(row, col)`, row-major.
    pub fn index_at(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a linear index.
    pub fn coords_at(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Whether `index` has been narrowed to exactly one tile.
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed[index]
    }

    /// Number of tiles still possible at `index`.
    pub fn entropy_count(&self, index: usize) -> usize {
        self.entropy_count[index] as usize
    }

    /// The remaining candidate tile indices at `index`, in no particular
    /// order beyond "front-compacted".
    pub fn candidates(&self, index: usize) -> &[u8] {
        let base = index * self.tile_capacity;
        &self.candidates[base..base + self.entropy_count[index] as usize]
    }

    /// The tile `index` collapsed to, if it has.
    pub fn collapsed_tile(&self, index: usize) -> Option<u8> {
        if self.collapsed[index] {
            Some(self.candidates[index * self.tile_capacity])
        } else {
            None
        }
    }

    /// Index of the neighbor in `direction` (`0 = up, 1 = right, 2 = down,
    /// 3 = left`) from `index`, or `None` if that would fall outside the
    /// grid.
    pub fn neighbor_index(&self, index: usize, direction: usize) -> Option<usize> {
        let (row, col) = self.coords_at(index);
        match direction {
            0 if row > 0 => Some(self.index_at(row - 1, col)),
            1 if col + 1 < self.cols => Some(self.index_at(row, col + 1)),
            2 if row + 1 < self.rows => Some(self.index_at(row + 1, col)),
            3 if col > 0 => Some(self.index_at(row, col - 1)),
            _ => None,
        }
    }

    /// Narrow `index` to exactly `tile`, which must currently be one of its
    /// candidates.
    pub fn collapse_cell(&mut self, index: usize, tile: u8) -> Result<(), GridError> {
        let cell_count = self.cell_count();
        if index >= cell_count {
            return Err(GridError::IndexOutOfBounds { index, cell_count });
        }
        if self.collapsed[index] {
            return Err(GridError::AlreadyCollapsed { index });
        }
        if !self.candidates(index).contains(&tile) {
            return Err(GridError::NotACandidate { index, tile });
        }
        let base = index * self.tile_capacity;
        self.candidates[base] = tile;
        self.entropy_count[index] = 1;
        self.collapsed[index] = true;
        Ok(())
    }

    /// Remove, from each uncollapsed neighbor of `index`, every candidate
    /// incompatible with the tile `index` just collapsed to.
    ///
    /// This is a single step: it only constrains the four immediate
    /// neighbors, it does not recursively flood-fill the effect outward.
    /// Returns `Err(GridError::Contradiction)` naming the first neighbor
    /// whose candidate list becomes empty.
    pub fn propagate_from(
        &mut self,
        index: usize,
        catalog: &TileCatalog,
    ) -> Result<(), GridError> {
        let cell_count = self.cell_count();
        if index >= cell_count {
            return Err(GridError::IndexOutOfBounds { index, cell_count });
        }
        let tile = self
            .collapsed_tile(index)
            .ok_or(GridError::NotACandidate { index, tile: 0 })?;

        for direction in 0..4 {
            let Some(neighbor) = self.neighbor_index(index, direction) else {
                continue;
            };
            if self.collapsed[neighbor] {
                continue;
            }

            let base = neighbor * self.tile_capacity;
            let mut write = 0usize;
            let count = self.entropy_count[neighbor] as usize;
            for read in 0..count {
                let candidate = self.candidates[base + read];
                if catalog.is_compatible(tile as usize, direction, candidate as usize) {
                    self.candidates[base + write] = candidate;
                    write += 1;
                }
            }
            self.entropy_count[neighbor] = write as u8;

            if write == 0 {
                log::warn!("propagation emptied candidates at cell {neighbor}");
                return Err(GridError::Contradiction { index: neighbor });
            }
        }
        Ok(())
    }
}
