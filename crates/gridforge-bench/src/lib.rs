//! Benchmark profiles for gridforge.
//!
//! - [`reference_profile`]: a 100x100 grid at the basic rendering limit,
//!   every cell painted from a seeded RNG
//! - [`stress_profile`]: 400x400 (160K cells), past what the basic limit
//!   allows, for accelerated-capability sizing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridforge_core::{Biome, CellMatrix, GridConfig, GridType};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A config plus a fully painted matrix.
pub struct Profile {
    /// Topology.
    pub grid_type: GridType,
    /// Grid config.
    pub config: GridConfig,
    /// Painted cells.
    pub cells: CellMatrix,
}

fn profile(grid_type: GridType, cols: u32, rows: u32, seed: u64) -> Profile {
    let config = GridConfig {
        cols,
        rows,
        ..GridConfig::default_for(grid_type.family())
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = CellMatrix::random(rows, cols, &Biome::palette(), &mut rng);
    Profile {
        grid_type,
        config,
        cells,
    }
}

/// 100x100, every cell painted.
pub fn reference_profile(grid_type: GridType, seed: u64) -> Profile {
    profile(grid_type, 100, 100, seed)
}

/// 400x400, every cell painted.
pub fn stress_profile(grid_type: GridType, seed: u64) -> Profile {
    profile(grid_type, 400, 400, seed)
}
