//! Cell rendering for gridforge.
//!
//! [`GridRenderer`] paints a [`CellMatrix`](gridforge_core::CellMatrix) onto
//! any [`Surface`]. The same renderer serves the live view (through a
//! [`Transformed`] adapter carrying pan, zoom and display scale) and the
//! export path (a true-scale [`RasterSurface`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod raster;
pub mod renderer;
pub mod surface;

pub use cache::SilhouetteCache;
pub use error::RenderError;
pub use raster::RasterSurface;
pub use renderer::{GridRenderer, RenderStats};
pub use surface::{Surface, Transformed};
