//! Export formats.

use std::fmt;
use std::str::FromStr;

/// Raster image encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// WebP. Encoded lossless.
    Webp,
    /// PNG, lossless.
    Png,
    /// JPEG at quality 90.
    Jpeg,
}

impl RasterFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Webp => "webp",
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpeg",
        }
    }

    /// MIME type.
    pub fn media_type(self) -> &'static str {
        match self {
            RasterFormat::Webp => "image/webp",
            RasterFormat::Png => "image/png",
            RasterFormat::Jpeg => "image/jpeg",
        }
    }

    /// Nominal encoder quality in `[0, 1]`; `None` for lossless formats.
    ///
    /// The WebP encoder in use only writes lossless images, so the 0.95
    /// figure is a ceiling rather than a setting.
    pub fn quality(self) -> Option<f32> {
        match self {
            RasterFormat::Webp => Some(0.95),
            RasterFormat::Png => None,
            RasterFormat::Jpeg => Some(0.90),
        }
    }
}

/// Everything the pipeline can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// A single image.
    Raster(RasterFormat),
    /// Generic JSON snapshot.
    Json,
    /// Universal VTT.
    Uvtt,
    /// FoundryVTT scene plus image.
    Foundry,
}

impl ExportFormat {
    /// Every format.
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Raster(RasterFormat::Webp),
        ExportFormat::Raster(RasterFormat::Png),
        ExportFormat::Raster(RasterFormat::Jpeg),
        ExportFormat::Json,
        ExportFormat::Uvtt,
        ExportFormat::Foundry,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Raster(f) => f.extension(),
            ExportFormat::Json => "json",
            ExportFormat::Uvtt => "uvtt",
            ExportFormat::Foundry => "foundry",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let wanted = if lower == "jpg" { "jpeg" } else { lower.as_str() };
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| format!("unknown export format {s:?}"))
    }
}
