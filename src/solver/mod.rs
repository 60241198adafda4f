//! The collapse/propagation loop: repeatedly picks the least-determined
//! cell, collapses it to one of its remaining candidates, and propagates
//! that choice to its immediate neighbors, until every cell is collapsed or
//! a contradiction is found.

mod error;

pub use error::SolveError;

use crate::catalog::TileCatalog;
use crate::grid::Grid;
use crate::rng::Lcg32;

/// Callback hook into the solve loop, for recording or visualizing progress
/// without the solver itself taking on that responsibility.
///
/// `on_generation_start` has a no-op default since most observers only care
/// about individual collapses; `on_collapse` has none, since a no-op
/// `Observer` carries no information and should just be omitted (`None`).
pub trait Observer {
    /// Called once, before the first cell is collapsed.
    fn on_generation_start(&mut self, grid: &Grid) {
        let _ = grid;
    }

    /// Called each time a cell is collapsed, naming the cell and the tile
    /// index it was collapsed to.
    fn on_collapse(&mut self, cell_index: usize, tile_index: u8);
}

/// Drives a [`Grid`] to completion against a [`TileCatalog`], owning the
/// deterministic random stream used for both candidate tie-breaking and the
/// final pick among equally-valid candidates.
#[derive(Debug, Clone)]
pub struct Solver {
    rng: Lcg32,
}

impl Solver {
    /// Build a solver seeded with `seed`. The same seed, against the same
    /// catalog and an identically-sized fresh grid, always produces the
    /// same sequence of collapses.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Lcg32::new(seed),
        }
    }

    /// The generator's current internal state, exposed for callers that
    /// want to resume or log the stream position.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Run the collapse loop to completion.
    ///
    /// Computes `catalog`'s compatibility mask first if it hasn't been
    /// computed yet. Each iteration: scans every uncollapsed cell for the
    /// minimum remaining-candidate count, breaking ties in favor of the
    /// *last* cell scanned at that minimum; collapses it to a
    /// uniformly-random one of its remaining candidates; propagates that
    /// choice to its four immediate neighbors. Stops when every cell is
    /// collapsed, or reports the first cell propagation empties.
    pub fn solve(
        &mut self,
        grid: &mut Grid,
        catalog: &mut TileCatalog,
        mut observer: Option<&mut dyn Observer>,
    ) -> Result<(), SolveError> {
        if !catalog.is_compat_ready() {
            catalog.compute_compatibility()?;
        }

        if let Some(observer) = observer.as_deref_mut() {
            observer.on_generation_start(grid);
        }

        loop {
            let Some(selected) = self.select_minimum_entropy_cell(grid) else {
                log::debug!("solve complete: every cell collapsed");
                return Ok(());
            };

            let entropy = grid.entropy_count(selected);
            if entropy == 0 {
                return Err(SolveError::Contradiction { index: selected });
            }

            let pick = self.rng.gen_range(0, entropy as u32) as usize;
            let tile = grid.candidates(selected)[pick];

            grid.collapse_cell(selected, tile)?;
            log::trace!("collapsed cell {selected} to tile {tile}");

            if let Some(observer) = observer.as_deref_mut() {
                observer.on_collapse(selected, tile);
            }

            grid.propagate_from(selected, catalog)?;
        }
    }

    /// Scan every uncollapsed cell and return the one with the smallest
    /// remaining-candidate count, the last such cell scanned winning ties.
    /// Returns `None` once every cell is collapsed.
    fn select_minimum_entropy_cell(&self, grid: &Grid) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for index in 0..grid.cell_count() {
            if grid.is_collapsed(index) {
                continue;
            }
            let entropy = grid.entropy_count(index);
            match best {
                Some((_, best_entropy)) if entropy > best_entropy => {}
                _ => best = Some((index, entropy)),
            }
        }
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConfig;
    use crate::socket::Socket;

    fn uniform_catalog(tile_count: usize) -> TileCatalog {
        let mut catalog = TileCatalog::new(CatalogConfig {
            tile_capacity: tile_count,
            direction_count: 4,
            socket_count_per_direction: 1,
        })
        .unwrap();
        for i in 0..tile_count {
            catalog.add(i as u32, &[Socket::EMPTY; 4], 0).unwrap();
        }
        catalog.compute_compatibility().unwrap();
        catalog
    }

    struct RecordingObserver {
        started: bool,
        collapses: Vec<(usize, u8)>,
    }

    impl Observer for RecordingObserver {
        fn on_generation_start(&mut self, _grid: &Grid) {
            self.started = true;
        }

        fn on_collapse(&mut self, cell_index: usize, tile_index: u8) {
            self.collapses.push((cell_index, tile_index));
        }
    }

    #[test]
    fn solves_fully_permissive_grid() {
        let catalog = uniform_catalog(3);
        let mut grid = Grid::new(4, 4, &catalog).unwrap();
        let mut catalog = catalog;
        let mut solver = Solver::new(42);

        solver.solve(&mut grid, &mut catalog, None).unwrap();

        for index in 0..grid.cell_count() {
            assert!(grid.is_collapsed(index));
        }
    }

    #[test]
    fn same_seed_reproduces_same_collapse_order() {
        let run = |seed: u32| {
            let mut catalog = uniform_catalog(3);
            let mut grid = Grid::new(3, 3, &catalog).unwrap();
            let mut observer = RecordingObserver {
                started: false,
                collapses: Vec::new(),
            };
            Solver::new(seed)
                .solve(&mut grid, &mut catalog, Some(&mut observer))
                .unwrap();
            (observer.started, observer.collapses)
        };

        let (started_a, a) = run(7);
        let (started_b, b) = run(7);
        assert!(started_a && started_b);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_can_diverge() {
        let make_run = |seed: u32| {
            let mut catalog = uniform_catalog(4);
            let mut grid = Grid::new(5, 5, &catalog).unwrap();
            let mut observer = RecordingObserver {
                started: false,
                collapses: Vec::new(),
            };
            Solver::new(seed)
                .solve(&mut grid, &mut catalog, Some(&mut observer))
                .unwrap();
            observer.collapses
        };

        let a = make_run(1);
        let b = make_run(999_983);
        assert_ne!(a, b);
    }

    #[test]
    fn contradiction_is_reported_not_panicked() {
        // two tiles that are never compatible with anything, including
        // themselves, on a grid large enough to force a neighbor conflict.
        let mut catalog = TileCatalog::new(CatalogConfig {
            tile_capacity: 2,
            direction_count: 4,
            socket_count_per_direction: 2,
        })
        .unwrap();
        catalog
            .add(0, &[Socket::pack_many(&[1, 2]); 4], 0)
            .unwrap();
        catalog
            .add(1, &[Socket::pack_many(&[3, 4]); 4], 0)
            .unwrap();
        catalog.compute_compatibility().unwrap();

        let mut grid = Grid::new(1, 2, &catalog).unwrap();
        let mut solver = Solver::new(5);

        let result = solver.solve(&mut grid, &mut catalog, None);
        assert!(matches!(result, Err(SolveError::Contradiction { .. })));
    }
}
