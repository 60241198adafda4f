//! The tile catalog: stores tiles, expands rotations, and precomputes
//! per-direction compatibility masks between every pair of tiles.
//!
//! Structure-of-arrays, owned and sized once at construction — see
//! `SPEC_FULL.md`'s "Memory model resolution" for why this crate uses an
//! owning [`Vec`]-backed container rather than mirroring the original
//! caller-supplied-byte-buffer arena literally.

mod error;

pub use error::CatalogError;

use crate::socket::Socket;

/// Tile-index width. [`TileCatalog::new`] rejects a `tile_capacity` larger
/// than this so tile indices always fit in a single byte, matching
/// [`Grid`](crate::grid::Grid)'s per-cell storage.
pub const MAX_TILE_CAPACITY: usize = u8::MAX as usize;

/// The three integers that shape a [`TileCatalog`]'s storage, bundled into
/// one typed value rather than three positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Maximum number of tiles the catalog can ever hold, including
    /// rotational expansions. Must be in `1..=255`.
    pub tile_capacity: usize,
    /// Number of directional edges per tile. Must be in `1..=8`; the
    /// concrete grid-navigation algorithm in [`crate::grid`] requires
    /// exactly 4.
    pub direction_count: usize,
    /// Number of significant socket fields per edge. Must be in `1..=8`.
    pub socket_count_per_direction: usize,
}

impl CatalogConfig {
    fn validate(self) -> Result<(), CatalogError> {
        if self.tile_capacity == 0 {
            return Err(CatalogError::ZeroCapacity);
        }
        if self.tile_capacity > MAX_TILE_CAPACITY {
            return Err(CatalogError::CapacityTooLarge {
                capacity: self.tile_capacity,
                max: MAX_TILE_CAPACITY,
            });
        }
        if !(1..=8).contains(&self.direction_count) {
            return Err(CatalogError::InvalidDirectionCount {
                direction_count: self.direction_count,
            });
        }
        if !(1..=8).contains(&self.socket_count_per_direction) {
            return Err(CatalogError::InvalidSocketCount {
                socket_count: self.socket_count_per_direction,
            });
        }
        Ok(())
    }
}

/// Number of `u32` compatibility-mask words needed to address `capacity`
/// tiles with one bit per tile (`ceil(capacity / 32)`).
pub const fn mask_words_for_capacity(capacity: usize) -> usize {
    (capacity + 31) / 32
}

/// Number of `u32` words a catalog of this shape occupies: tile ids +
/// rotations + per-direction sockets + compatibility masks. Bit-exact with
/// the sizing formula this crate's data layout is derived from.
pub const fn required_u32_words(capacity: usize, direction_count: usize) -> usize {
    let mask_words = mask_words_for_capacity(capacity);
    2 * capacity + capacity * direction_count + capacity * direction_count * mask_words
}

/// Byte-equivalent of [`required_u32_words`], for callers who want to reason
/// about or pre-size an equivalent raw allocation.
pub const fn required_bytes(capacity: usize, direction_count: usize) -> usize {
    required_u32_words(capacity, direction_count) * std::mem::size_of::<u32>()
}

/// Structure-of-arrays catalog of tiles, their rotational variants, and the
/// per-(tile, direction) compatibility bitmask computed over all tiles.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    config: CatalogConfig,
    count: usize,
    asset_ids: Vec<u32>,
    rotations: Vec<u8>,
    edge_sockets: Vec<Socket>,
    compat_mask: Vec<u32>,
    compat_ready: bool,
}

impl TileCatalog {
    /// Allocate a catalog sized for `config`, empty (`tile_count() == 0`).
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;

        let capacity = config.tile_capacity;
        let direction_count = config.direction_count;
        let mask_words = mask_words_for_capacity(capacity);

        log::trace!(
            "allocating TileCatalog capacity={capacity} direction_count={direction_count} mask_words={mask_words}"
        );

        Ok(Self {
            config,
            count: 0,
            asset_ids: vec![0; capacity],
            rotations: vec![0; capacity],
            edge_sockets: vec![Socket::EMPTY; capacity * direction_count],
            compat_mask: vec![0u32; capacity * direction_count * mask_words],
            compat_ready: false,
        })
    }

    /// The configuration this catalog was built with.
    pub fn config(&self) -> CatalogConfig {
        self.config
    }

    /// Current number of tiles stored, `N` in the spec's notation.
    pub fn tile_count(&self) -> usize {
        self.count
    }

    /// Number of compatibility-mask words per (tile, direction) entry.
    pub fn mask_words(&self) -> usize {
        mask_words_for_capacity(self.config.tile_capacity)
    }

    /// Whether [`compute_compatibility`](Self::compute_compatibility) has
    /// run since the last tile was added.
    pub fn is_compat_ready(&self) -> bool {
        self.compat_ready
    }

    /// User-supplied asset id for tile `index`.
    pub fn asset_id(&self, index: usize) -> u32 {
        self.asset_ids[index]
    }

    /// Rotation applied to produce tile `index` (0 = original orientation).
    pub fn rotation(&self, index: usize) -> u8 {
        self.rotations[index]
    }

    /// Socket word of tile `index` facing `direction`.
    pub fn socket(&self, index: usize, direction: usize) -> Socket {
        self.edge_sockets[index * self.config.direction_count + direction]
    }

    /// Add a tile with the given per-direction sockets, plus up to
    /// `rotation_multiplicity` additional 90°-clockwise rotational copies
    /// (clamped to `direction_count - 1`).
    ///
    /// The base tile occupies the first of the newly written slots; each
    /// rotated copy is derived from the *previous* slot, so rotation `r` is
    /// the base rotated clockwise `r` times.
    ///
    /// Fails without mutating the catalog if `sockets.len() !=
    /// direction_count`, or if adding `1 + rotation_multiplicity` tiles
    /// (before clamping) would exceed the catalog's capacity.
    pub fn add(
        &mut self,
        asset_id: u32,
        sockets: &[Socket],
        rotation_multiplicity: u8,
    ) -> Result<(), CatalogError> {
        let direction_count = self.config.direction_count;

        if sockets.len() != direction_count {
            return Err(CatalogError::SocketCountMismatch {
                expected: direction_count,
                got: sockets.len(),
            });
        }

        let requested = 1 + rotation_multiplicity as usize;
        let available = self.config.tile_capacity - self.count;
        if requested > available {
            log::warn!(
                "catalog_add rejected: requested {requested} slots, {available} available"
            );
            return Err(CatalogError::CapacityExceeded {
                requested,
                available,
            });
        }

        let base_slot = self.count;
        self.asset_ids[base_slot] = asset_id;
        self.rotations[base_slot] = 0;
        for (dir, &socket) in sockets.iter().enumerate() {
            self.edge_sockets[base_slot * direction_count + dir] = socket;
        }
        self.count += 1;

        let clamped_rotations = (rotation_multiplicity as usize).min(direction_count - 1);
        for r in 1..=clamped_rotations {
            let prev_slot = self.count - 1;
            let slot = self.count;
            self.asset_ids[slot] = asset_id;
            self.rotations[slot] = r as u8;
            for dir in 0..direction_count {
                let src_dir = (dir + direction_count - 1) % direction_count;
                self.edge_sockets[slot * direction_count + dir] =
                    self.edge_sockets[prev_slot * direction_count + src_dir];
            }
            self.count += 1;
        }

        self.compat_ready = false;
        log::trace!(
            "catalog_add asset_id={asset_id} rotations={clamped_rotations} tile_count={}",
            self.count
        );

        Ok(())
    }

    /// Precompute the per-(tile, direction) compatibility bitmask: bit `b`
    /// is set in entry `(t, d)` iff tile `b` placed in the neighbor opposite
    /// direction `d` is compatible with tile `t` facing `d`, i.e.
    /// `reverse(socket[b][opp(d)], S) == socket[t][d]`.
    ///
    /// `O(N² · D)` socket comparisons, `O(N² · D · W)` bit writes; meant to
    /// be paid once per catalog, not per solve attempt — [`Solver::solve`](
    /// crate::solver::Solver::solve) only calls it if it hasn't run yet.
    pub fn compute_compatibility(&mut self) -> Result<(), CatalogError> {
        let direction_count = self.config.direction_count;
        let socket_count = self.config.socket_count_per_direction;
        let mask_words = self.mask_words();
        let count = self.count;

        self.compat_mask.iter_mut().for_each(|word| *word = 0);

        for t in 0..count {
            for dir in 0..direction_count {
                let opp = (dir + direction_count / 2) % direction_count;
                let socket_t = self.edge_sockets[t * direction_count + dir];
                let base = (t * direction_count + dir) * mask_words;

                for b in 0..count {
                    let socket_b = self.edge_sockets[b * direction_count + opp];
                    if socket_b.reverse(socket_count) == socket_t {
                        self.compat_mask[base + b / 32] |= 1u32 << (b % 32);
                    }
                }
            }
        }

        self.compat_ready = true;
        log::debug!(
            "compute_compatibility tile_count={count} direction_count={direction_count} mask_words={mask_words}"
        );

        Ok(())
    }

    /// Whether tile `other` may be placed in the neighbor at `direction`
    /// from a cell holding `tile`. Panics if `compute_compatibility` has not
    /// run (see [`is_compat_ready`](Self::is_compat_ready)).
    pub fn is_compatible(&self, tile: usize, direction: usize, other: usize) -> bool {
        debug_assert!(self.compat_ready, "compatibility mask not computed yet");
        let mask_words = self.mask_words();
        let base = (tile * self.config.direction_count + direction) * mask_words;
        (self.compat_mask[base + other / 32] >> (other % 32)) & 1 != 0
    }

    /// Raw compatibility bitmask words for `(tile, direction)`, most
    /// significant use is testing and benchmarking; [`is_compatible`](
    /// Self::is_compatible) is the normal query surface.
    pub fn compat_mask_words(&self, tile: usize, direction: usize) -> &[u32] {
        let mask_words = self.mask_words();
        let base = (tile * self.config.direction_count + direction) * mask_words;
        &self.compat_mask[base..base + mask_words]
    }
}
