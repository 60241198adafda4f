//! # Wave Function Collapse — constraint propagation core
//!
//! This crate is the engine at the center of a tile-based [Wave Function
//! Collapse](https://github.com/mxgmn/WaveFunctionCollapse) generator: given
//! a finite catalog of tiles, each carrying a socket signature per
//! directional edge, it expands the catalog with rotational variants,
//! precomputes which tiles may sit next to which, and collapses an initially
//! fully-superposed grid into one consistent assignment using a
//! minimum-remaining-values heuristic with random tie-breaking.
//!
//! ## Pieces
//!
//! - [`rng`] — the deterministic RNG the solver draws from.
//! - [`socket`] — the bit-packed directional edge signature ([`socket::Socket`]).
//! - [`catalog`] — the tile catalog, rotation expansion and compatibility masks ([`catalog::TileCatalog`]).
//! - [`grid`] — per-cell superposition state ([`grid::Grid`]).
//! - [`solver`] — the collapse/propagation loop ([`solver::Solver`]).
//!
//! ## What this crate does *not* do
//!
//! It does not weight tiles probabilistically, does not backtrack on
//! contradiction (it reports one instead), does not support reflections or
//! non-90° rotations, and its grid navigation is specified for exactly four
//! cardinal directions. A contradiction is a caller-visible `Err`; retrying
//! with a different seed is the caller's responsibility, not this crate's.

pub mod catalog;
pub mod grid;
pub mod rng;
pub mod socket;
pub mod solver;

pub use catalog::{CatalogConfig, CatalogError, TileCatalog};
pub use grid::{Grid, GridError};
pub use rng::Lcg32;
pub use socket::Socket;
pub use solver::{Observer, SolveError, Solver};
