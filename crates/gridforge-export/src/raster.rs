//! Off-screen rendering and image encoding.

use crate::error::EnvironmentError;
use crate::format::RasterFormat;
use gridforge_core::{CellMatrix, GridConfig, GridType, Rgb};
use gridforge_geometry::GridDimensions;
use gridforge_render::{GridRenderer, RasterSurface, RenderError};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Background behind cells: the grout color when there is grout, else white.
pub(crate) fn background(config: &GridConfig) -> Rgb {
    if config.border_width > 0 {
        config.border_color
    } else {
        Rgb::WHITE
    }
}

/// Render the grid at true scale into a fresh RGBA image.
pub(crate) fn render_snapshot(
    grid_type: GridType,
    config: &GridConfig,
    cells: &CellMatrix,
) -> Result<RgbaImage, RenderError> {
    let dims = GridDimensions::export(grid_type, config)?;
    let mut surface =
        RasterSurface::with_background(dims.canvas_width, dims.canvas_height, background(config))?;
    let stats = GridRenderer::new().render(&mut surface, grid_type, config, cells)?;
    tracing::debug!(
        width = dims.canvas_width,
        height = dims.canvas_height,
        cells = stats.cells_drawn,
        "rendered export raster"
    );
    Ok(surface.into_image())
}

/// Encode `img` as `format`.
pub(crate) fn encode(img: &RgbaImage, format: RasterFormat) -> Result<Vec<u8>, EnvironmentError> {
    let (w, h) = img.dimensions();
    let mut out = Vec::new();
    let result = match format {
        RasterFormat::Png => {
            PngEncoder::new(&mut out).write_image(img.as_raw(), w, h, ExtendedColorType::Rgba8)
        }
        RasterFormat::Webp => WebPEncoder::new_lossless(&mut out).write_image(
            img.as_raw(),
            w,
            h,
            ExtendedColorType::Rgba8,
        ),
        RasterFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb: Vec<u8> = img
                .as_raw()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            let quality = (format.quality().unwrap_or(0.9) * 100.0).round() as u8;
            JpegEncoder::new_with_quality(&mut out, quality).write_image(
                &rgb,
                w,
                h,
                ExtendedColorType::Rgb8,
            )
        }
    };
    result.map_err(|source| EnvironmentError::Encode { format, source })?;
    Ok(out)
}
