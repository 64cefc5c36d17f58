//! Core types for the gridforge battle-map engine.
//!
//! This is the leaf crate of the workspace. It defines the grid topology
//! tags ([`GridType`], [`GridFamily`]), the persisted per-family
//! [`GridConfig`], the painted [`CellMatrix`], the live [`ViewState`], and
//! the static [`Biome`] palette. It has no rendering or I/O dependencies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod biome;
pub mod cells;
pub mod color;
pub mod config;
pub mod error;
pub mod grid_type;
pub mod point;
pub mod view;

pub use biome::{Biome, BIOMES};
pub use cells::CellMatrix;
pub use color::Rgb;
pub use config::{GridConfig, GridLimits};
pub use error::{ColorError, ConfigError, GridTypeError};
pub use grid_type::{GridFamily, GridType, HexOrientation, Parity};
pub use point::{CellIndex, Point};
pub use view::ViewState;
