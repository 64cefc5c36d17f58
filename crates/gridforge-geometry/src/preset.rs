//! Display presets: fit a grid of physical tiles to a TV or monitor.
//!
//! A preset is a screen diagonal, a pixel resolution, and the physical size
//! one tile should have on that screen. From these we derive the screen's
//! pixels-per-inch, the tile size in pixels, and how many tiles fit.

use crate::error::GeometryError;
use crate::hex::HexMetrics;
use gridforge_core::{GridConfig, GridFamily, GridLimits};
use std::fmt;
use std::str::FromStr;

/// Common TV diagonals in inches.
pub const TV_SIZES: [f64; 10] = [15.5, 24.0, 27.0, 32.0, 43.0, 50.0, 55.0, 65.0, 75.0, 85.0];

/// Screen resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 1920 x 1080.
    P1080,
    /// 2560 x 1440.
    P1440,
    /// 3840 x 2160.
    K4,
    /// 7680 x 4320.
    K8,
}

impl Resolution {
    /// Every resolution.
    pub const ALL: [Resolution; 4] = [Resolution::P1080, Resolution::P1440, Resolution::K4, Resolution::K8];

    /// `(width, height)` in pixels.
    pub fn pixels(self) -> (u32, u32) {
        match self {
            Resolution::P1080 => (1920, 1080),
            Resolution::P1440 => (2560, 1440),
            Resolution::K4 => (3840, 2160),
            Resolution::K8 => (7680, 4320),
        }
    }

    /// Short label.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::P1080 => "1080p",
            Resolution::P1440 => "1440p",
            Resolution::K4 => "4K",
            Resolution::K8 => "8K",
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown resolution {s:?} (expected 1080p, 1440p, 4k or 8k)"))
    }
}

/// Physical size of one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileMeasure {
    /// One inch.
    Inch,
    /// Two centimeters.
    TwoCentimeters,
}

impl TileMeasure {
    /// Size in inches.
    pub fn inches(self) -> f64 {
        match self {
            TileMeasure::Inch => 1.0,
            TileMeasure::TwoCentimeters => 0.787,
        }
    }

    /// Short label.
    pub fn label(self) -> &'static str {
        match self {
            TileMeasure::Inch => "1 inch",
            TileMeasure::TwoCentimeters => "2cm",
        }
    }
}

impl FromStr for TileMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inch" | "1in" | "1 inch" => Ok(TileMeasure::Inch),
            "2cm" => Ok(TileMeasure::TwoCentimeters),
            _ => Err(format!("unknown tile measure {s:?} (expected inch or 2cm)")),
        }
    }
}

/// A screen plus a physical tile size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPreset {
    diagonal_inches: f64,
    resolution: Resolution,
    tile: TileMeasure,
}

impl DisplayPreset {
    /// Build a preset. The diagonal must be positive and finite.
    pub fn new(diagonal_inches: f64, resolution: Resolution, tile: TileMeasure) -> Result<Self, GeometryError> {
        if !(diagonal_inches.is_finite() && diagonal_inches > 0.0) {
            return Err(GeometryError::InvalidDiagonal {
                inches: diagonal_inches,
            });
        }
        Ok(Self {
            diagonal_inches,
            resolution,
            tile,
        })
    }

    /// Display name, e.g. `24" 1080p (1 inch)`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Screen pixels per inch, floored.
    pub fn ppi(&self) -> u32 {
        let (w, h) = self.resolution.pixels();
        let diag_px = f64::from(w).hypot(f64::from(h));
        (diag_px / self.diagonal_inches).floor() as u32
    }

    /// Physical screen size in inches.
    pub fn physical_size(&self) -> (f64, f64) {
        let (w, h) = self.resolution.pixels();
        let ppi = f64::from(self.ppi().max(1));
        (f64::from(w) / ppi, f64::from(h) / ppi)
    }

    /// Tile size in pixels.
    pub fn tile_pixels(&self) -> u32 {
        (self.tile.inches() * f64::from(self.ppi())).round() as u32
    }

    /// How many `(cols, rows)` fit on screen, at least one each way.
    ///
    /// Hex counts include fixed corrections that keep the packed grid
    /// inside the visible area.
    pub fn dimensions(&self, family: GridFamily) -> (u32, u32) {
        let (pw, ph) = self.physical_size();
        let tile = self.tile.inches();
        let hex = HexMetrics::new(tile);
        let d = hex.long_diagonal;
        let s = hex.short_diagonal;
        let (cols, rows) = match family {
            GridFamily::Square => (pw / tile, ph / tile),
            GridFamily::HexFlat => (pw / (d * 0.75) - d * 5.0 * 0.75, ph / s - s * 2.0),
            GridFamily::HexPointy => (pw / s - s * 6.0, ph / (d * 0.75) - d * 5.0 * 0.75),
        };
        (floor_count(cols), floor_count(rows))
    }

    /// Config for `family`, keeping the border settings of `current` and
    /// clamping into `limits`.
    pub fn config_for(&self, family: GridFamily, current: &GridConfig, limits: GridLimits) -> GridConfig {
        let (cols, rows) = self.dimensions(family);
        GridConfig {
            cols,
            rows,
            tile_size: self.tile_pixels(),
            ppi: self.ppi(),
            border_width: current.border_width,
            border_color: current.border_color,
        }
        .clamped(limits)
    }
}

impl fmt::Display for DisplayPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\" {} ({})",
            self.diagonal_inches,
            self.resolution.label(),
            self.tile.label()
        )
    }
}

fn floor_count(v: f64) -> u32 {
    if v.is_finite() && v >= 1.0 {
        v.floor() as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridforge_core::Rgb;

    fn preset(diag: f64, res: Resolution, tile: TileMeasure) -> DisplayPreset {
        DisplayPreset::new(diag, res, tile).unwrap()
    }

    #[test]
    fn ppi_and_tile_for_24_inch_1080p() {
        let p = preset(24.0, Resolution::P1080, TileMeasure::Inch);
        assert_eq!(p.ppi(), 91);
        assert_eq!(p.tile_pixels(), 91);
        assert_eq!(p.dimensions(GridFamily::Square), (21, 11));
    }

    #[test]
    fn two_centimeter_tiles_are_smaller() {
        let p = preset(24.0, Resolution::P1080, TileMeasure::TwoCentimeters);
        assert_eq!(p.tile_pixels(), 72);
        let (cols, rows) = p.dimensions(GridFamily::Square);
        assert_eq!((cols, rows), (26, 15));
    }

    #[test]
    fn hex_counts() {
        let p = preset(24.0, Resolution::P1080, TileMeasure::Inch);
        assert_eq!(p.dimensions(GridFamily::HexFlat), (24, 11));
        // pw / s - 6s = 24.36 - 5.20; ph / 0.75 - 3.75 = 15.82 - 3.75.
        assert_eq!(p.dimensions(GridFamily::HexPointy), (19, 12));
    }

    #[test]
    fn config_keeps_border_and_clamps() {
        let current = GridConfig {
            border_width: 3,
            border_color: Rgb::new(1, 2, 3),
            ..GridConfig::default_for(GridFamily::Square)
        };
        let p = preset(15.5, Resolution::K8, TileMeasure::Inch);
        let c = p.config_for(GridFamily::Square, &current, GridLimits::STANDARD);
        assert_eq!(c.border_width, 3);
        assert_eq!(c.border_color, Rgb::new(1, 2, 3));
        assert_eq!(c.tile_size, 200);
        assert_eq!(c.ppi, 300);
        assert!(c.validate(GridLimits::STANDARD).is_ok());
    }

    #[test]
    fn rejects_bad_diagonal() {
        assert!(DisplayPreset::new(0.0, Resolution::K4, TileMeasure::Inch).is_err());
        assert!(DisplayPreset::new(f64::NAN, Resolution::K4, TileMeasure::Inch).is_err());
    }

    #[test]
    fn name_and_parsing() {
        let p = preset(55.0, Resolution::K4, TileMeasure::Inch);
        assert_eq!(p.name(), "55\" 4K (1 inch)");
        assert_eq!("4k".parse::<Resolution>().unwrap(), Resolution::K4);
        assert_eq!("2cm".parse::<TileMeasure>().unwrap(), TileMeasure::TwoCentimeters);
    }

    #[test]
    fn every_stock_preset_yields_a_valid_config() {
        for diag in TV_SIZES {
            for res in Resolution::ALL {
                for tile in [TileMeasure::Inch, TileMeasure::TwoCentimeters] {
                    let p = preset(diag, res, tile);
                    for family in GridFamily::ALL {
                        let base = GridConfig::default_for(family);
                        let c = p.config_for(family, &base, GridLimits::STANDARD);
                        assert!(c.validate(GridLimits::STANDARD).is_ok(), "{p} {family}");
                    }
                }
            }
        }
    }
}
