//! Interaction layer for gridforge.
//!
//! - [`GridScene`]: the editable state of one view (grid type, config,
//!   painted cells, pan/zoom)
//! - [`InteractionController`]: pointer events to painting, panning and zooming
//! - [`ConfigSession`]: per-family config lifecycle over a [`ConfigStore`]
//!
//! Everything here is synchronous and single-threaded; the host event loop
//! drives it one event at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod scene;
pub mod session;
pub mod store;

pub use controller::{
    Buttons, CursorHint, EventOutcome, InteractionController, PointerButton, PointerEvent, Session,
};
pub use error::StoreError;
pub use scene::GridScene;
pub use session::{ConfigSession, FamilyState};
pub use store::{ConfigStore, JsonFileStore, MemoryStore, STORAGE_KEY};
