//! Per-family grid configuration and its legal ranges.

use crate::color::Rgb;
use crate::error::ConfigError;
use crate::grid_type::GridFamily;
use serde::{Deserialize, Serialize};

/// Smallest tile size in pixels.
pub const MIN_TILE_SIZE: u32 = 20;
/// Largest tile size in pixels.
pub const MAX_TILE_SIZE: u32 = 200;
/// Smallest pixels-per-inch.
pub const MIN_PPI: u32 = 10;
/// Largest pixels-per-inch.
pub const MAX_PPI: u32 = 300;
/// Largest border (grout) width in pixels.
pub const MAX_BORDER_WIDTH: u32 = 10;

/// Rendering-capability dependent limits on grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLimits {
    /// Upper bound for both `cols` and `rows`.
    pub max_cells_per_axis: u32,
}

impl GridLimits {
    /// Limits for basic 2D canvas rendering.
    pub const STANDARD: GridLimits = GridLimits {
        max_cells_per_axis: 100,
    };
    /// Limits when accelerated rendering is available.
    pub const ACCELERATED: GridLimits = GridLimits {
        max_cells_per_axis: 50_000,
    };

    /// Select limits by capability.
    pub fn for_capability(accelerated: bool) -> Self {
        if accelerated {
            Self::ACCELERATED
        } else {
            Self::STANDARD
        }
    }
}

impl Default for GridLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Grid configuration persisted per [`GridFamily`].
///
/// `tile_size / ppi` is the real-world tile edge in inches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
    /// Tile size in pixels. For hexes this is the long diagonal.
    pub tile_size: u32,
    /// Pixels per inch.
    pub ppi: u32,
    /// Grout width between cells, in pixels.
    pub border_width: u32,
    /// Grout color.
    pub border_color: Rgb,
}

impl GridConfig {
    /// Factory defaults for a family.
    pub fn default_for(family: GridFamily) -> Self {
        let (cols, rows) = match family {
            GridFamily::Square => (20, 20),
            GridFamily::HexFlat => (30, 25),
            GridFamily::HexPointy => (25, 30),
        };
        Self {
            cols,
            rows,
            tile_size: 30,
            ppi: 80,
            border_width: 1,
            border_color: Rgb::BLACK,
        }
    }

    /// Check every field against its range.
    pub fn validate(&self, limits: GridLimits) -> Result<(), ConfigError> {
        let max_axis = limits.max_cells_per_axis;
        check("cols", self.cols, 1, max_axis)?;
        check("rows", self.rows, 1, max_axis)?;
        check("tileSize", self.tile_size, MIN_TILE_SIZE, MAX_TILE_SIZE)?;
        check("ppi", self.ppi, MIN_PPI, MAX_PPI)?;
        check("borderWidth", self.border_width, 0, MAX_BORDER_WIDTH)?;
        Ok(())
    }

    /// A copy with every field clamped into range.
    pub fn clamped(&self, limits: GridLimits) -> Self {
        let max_axis = limits.max_cells_per_axis.max(1);
        Self {
            cols: self.cols.clamp(1, max_axis),
            rows: self.rows.clamp(1, max_axis),
            tile_size: self.tile_size.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE),
            ppi: self.ppi.clamp(MIN_PPI, MAX_PPI),
            border_width: self.border_width.min(MAX_BORDER_WIDTH),
            border_color: self.border_color,
        }
    }

    /// Real-world tile size in inches.
    pub fn tile_inches(&self) -> f64 {
        if self.ppi == 0 {
            return 0.0;
        }
        f64::from(self.tile_size) / f64::from(self.ppi)
    }
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn family_defaults() {
        let sq = GridConfig::default_for(GridFamily::Square);
        assert_eq!((sq.cols, sq.rows), (20, 20));
        let flat = GridConfig::default_for(GridFamily::HexFlat);
        assert_eq!((flat.cols, flat.rows), (30, 25));
        let pointy = GridConfig::default_for(GridFamily::HexPointy);
        assert_eq!((pointy.cols, pointy.rows), (25, 30));
        for f in GridFamily::ALL {
            let c = GridConfig::default_for(f);
            assert_eq!(c.tile_size, 30);
            assert_eq!(c.ppi, 80);
            assert_eq!(c.border_width, 1);
            assert_eq!(c.border_color, Rgb::BLACK);
            assert!(c.validate(GridLimits::STANDARD).is_ok());
        }
    }

    #[test]
    fn validate_names_the_field() {
        let mut c = GridConfig::default_for(GridFamily::Square);
        c.tile_size = 10;
        assert_eq!(
            c.validate(GridLimits::STANDARD),
            Err(ConfigError::OutOfRange {
                field: "tileSize",
                value: 10,
                min: 20,
                max: 200
            })
        );
    }

    #[test]
    fn limits_depend_on_capability() {
        let mut c = GridConfig::default_for(GridFamily::Square);
        c.cols = 400;
        assert!(c.validate(GridLimits::for_capability(false)).is_err());
        assert!(c.validate(GridLimits::for_capability(true)).is_ok());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let c = GridConfig::default_for(GridFamily::Square);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["tileSize"], 30);
        assert_eq!(v["borderWidth"], 1);
        assert_eq!(v["borderColor"], "#000000");
    }

    #[test]
    fn tile_inches() {
        let c = GridConfig::default_for(GridFamily::Square);
        assert!((c.tile_inches() - 0.375).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn clamped_always_validates(
            cols in 0u32..200_000,
            rows in 0u32..200_000,
            tile in 0u32..1000,
            ppi in 0u32..1000,
            bw in 0u32..100,
            accelerated in any::<bool>(),
        ) {
            let limits = GridLimits::for_capability(accelerated);
            let c = GridConfig {
                cols, rows, tile_size: tile, ppi, border_width: bw,
                border_color: Rgb::BLACK,
            };
            prop_assert!(c.clamped(limits).validate(limits).is_ok());
        }
    }
}
