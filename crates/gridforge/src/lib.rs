//! gridforge: paint hex and square battle maps and export them for virtual
//! tabletops.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridforge sub-crates. For most users, adding `gridforge` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridforge::prelude::*;
//!
//! let mut session = ConfigSession::new(MemoryStore::new(), GridType::HexFlatOdd, GridLimits::STANDARD);
//! let mut scene = GridScene::new(session.active(), session.config(), GridLimits::STANDARD);
//!
//! let forest = Biome::by_name("forest").unwrap().color;
//! scene.paint(CellIndex::new(2, 3), forest);
//!
//! // Widen the grid; the edit is persisted immediately.
//! let config = session.edit(|c| c.cols = 40);
//! scene.set_config(config);
//! assert_eq!(scene.cells().cols(), 40);
//!
//! let mut sink = MemorySink::new();
//! let snapshot = GridSnapshot::new(scene.grid_type(), scene.config(), scene.cells());
//! let report = Exporter::new()
//!     .export(ExportFormat::Json, &snapshot, &mut sink)
//!     .unwrap();
//! assert_eq!(report.files.len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridforge-core` | Grid types, config, cells, colors, view state |
//! | [`geometry`] | `gridforge-geometry` | Hex/square layout, sizing, hit testing, presets |
//! | [`render`] | `gridforge-render` | Surfaces and the cell renderer |
//! | [`interact`] | `gridforge-interact` | Scene, pointer controller, config session |
//! | [`export`] | `gridforge-export` | Raster, JSON, UVTT and FoundryVTT export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridforge-core`).
pub use gridforge_core as types;

/// Layout, sizing and hit testing (`gridforge-geometry`).
///
/// [`geometry::GridLayout`] dispatches to [`geometry::SquareLayout`] or
/// [`geometry::HexGeometry`].
pub use gridforge_geometry as geometry;

/// Rendering onto [`render::Surface`]s (`gridforge-render`).
pub use gridforge_render as render;

/// Editing state and pointer handling (`gridforge-interact`).
pub use gridforge_interact as interact;

/// File export (`gridforge-export`).
pub use gridforge_export as export;

/// Common imports for typical gridforge usage.
///
/// ```rust
/// use gridforge::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridforge_core::{
        Biome, CellIndex, CellMatrix, GridConfig, GridFamily, GridLimits, GridType, Point, Rgb,
        ViewState, BIOMES,
    };

    // Geometry
    pub use gridforge_geometry::{
        DisplayPreset, GridDimensions, GridLayout, HitTestMode, HitTester, ViewTransform,
    };

    // Rendering
    pub use gridforge_render::{GridRenderer, RasterSurface, Surface, Transformed};

    // Interaction
    pub use gridforge_interact::{
        ConfigSession, ConfigStore, GridScene, InteractionController, JsonFileStore, MemoryStore,
        PointerButton, PointerEvent,
    };

    // Export
    pub use gridforge_export::{
        DirectorySink, DownloadSink, ExportError, ExportFormat, Exporter, GridSnapshot,
        MemorySink, RasterFormat,
    };
}
