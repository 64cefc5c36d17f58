//! Static terrain palette.

use crate::color::Rgb;

/// A named terrain with its fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Biome {
    /// Display name.
    pub name: &'static str,
    /// Fill color.
    pub color: Rgb,
}

/// The brush palette, alphabetical.
pub const BIOMES: [Biome; 10] = [
    Biome { name: "Arctic", color: Rgb::new(0xE3, 0xF2, 0xFD) },
    Biome { name: "Bog", color: Rgb::new(0x4A, 0x5D, 0x23) },
    Biome { name: "Desert", color: Rgb::new(0xF4, 0xA4, 0x60) },
    Biome { name: "Forest", color: Rgb::new(0x22, 0x8B, 0x22) },
    Biome { name: "Hills", color: Rgb::new(0x8F, 0xBC, 0x8F) },
    Biome { name: "Jungle", color: Rgb::new(0x00, 0x64, 0x00) },
    Biome { name: "Mountains", color: Rgb::new(0x69, 0x69, 0x69) },
    Biome { name: "Plains", color: Rgb::new(0x9A, 0xCD, 0x32) },
    Biome { name: "Road", color: Rgb::new(0x70, 0x80, 0x90) },
    Biome { name: "Woodland", color: Rgb::new(0x32, 0xCD, 0x32) },
];

impl Biome {
    /// Case-insensitive lookup by name.
    pub fn by_name(name: &str) -> Option<Biome> {
        BIOMES
            .iter()
            .copied()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Lookup by fill color.
    pub fn by_color(color: Rgb) -> Option<Biome> {
        BIOMES.iter().copied().find(|b| b.color == color)
    }

    /// Palette colors in catalog order.
    pub fn palette() -> [Rgb; 10] {
        BIOMES.map(|b| b.color)
    }
}
