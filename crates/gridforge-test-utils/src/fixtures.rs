//! Matrix and config builders.

use gridforge_core::{CellIndex, CellMatrix, GridConfig, GridType, Rgb, BIOMES};

/// Family defaults for `grid_type`.
pub fn default_config(grid_type: GridType) -> GridConfig {
    GridConfig::default_for(grid_type.family())
}

/// Matrix sized for `config` with nothing painted.
pub fn empty_for(config: &GridConfig) -> CellMatrix {
    CellMatrix::new(config.rows, config.cols)
}

/// Matrix with exactly the given cells painted.
pub fn painted(config: &GridConfig, cells: &[(u32, u32, Rgb)]) -> CellMatrix {
    let mut m = empty_for(config);
    for &(row, col, color) in cells {
        m.paint(CellIndex::new(row, col), color);
    }
    m
}

/// Alternating `a` / `b` over the whole grid, `a` at `(0, 0)`.
pub fn checkerboard(config: &GridConfig, a: Rgb, b: Rgb) -> CellMatrix {
    let mut m = empty_for(config);
    for row in 0..config.rows {
        for col in 0..config.cols {
            let color = if (row + col) % 2 == 0 { a } else { b };
            m.paint(CellIndex::new(row, col), color);
        }
    }
    m
}

/// Every cell painted, cycling through the biome palette row-major.
pub fn biome_stripes(config: &GridConfig) -> CellMatrix {
    let mut m = empty_for(config);
    let mut i = 0usize;
    for row in 0..config.rows {
        for col in 0..config.cols {
            m.paint(CellIndex::new(row, col), BIOMES[i % BIOMES.len()].color);
            i += 1;
        }
    }
    m
}
