//! Grid geometry for gridforge.
//!
//! Every pixel position used by live drawing, dimension calculation, hit
//! testing and export is derived here, so all of them agree.
//!
//! # Layouts
//!
//! - [`HexMetrics`]: the six derived measurements of a regular hexagon
//! - [`HexGeometry`] / [`HexLayout`]: offset-coordinate hex grids (flat or pointy, odd or even)
//! - [`SquareLayout`]: axis-aligned square grids
//! - [`GridLayout`]: dispatch over both by [`GridType`](gridforge_core::GridType)
//!
//! # Sizing and inversion
//!
//! [`GridDimensions`] derives raw, display and export canvas sizes.
//! [`HitTester`] maps screen pixels back to cells through a [`ViewTransform`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod grid;
pub mod hex;
pub mod hit;
pub mod layout;
pub mod preset;
pub mod square;

pub use dims::{GridDimensions, MAX_CANVAS_SIZE};
pub use error::GeometryError;
pub use grid::GridLayout;
pub use hex::HexMetrics;
pub use hit::{HitTestMode, HitTester, ViewTransform};
pub use layout::{Bounds, CellPosition, HexGeometry, HexLayout, HexParams};
pub use preset::{DisplayPreset, Resolution, TileMeasure, TV_SIZES};
pub use square::SquareLayout;
