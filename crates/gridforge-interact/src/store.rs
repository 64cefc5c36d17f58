//! Grid config persistence keyed by family.
//!
//! All families live in one JSON document:
//!
//! ```json
//! { "square": { "cols": 20, ... }, "hex-flat": { ... }, "hex-pointy": { ... } }
//! ```
//!
//! Loading is forgiving. A missing document, a missing family, or a
//! malformed field falls back to the family defaults field by field, so a
//! partially written record still yields a complete config.

use crate::error::StoreError;
use gridforge_core::{GridConfig, GridFamily, Rgb};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the persisted config document.
pub const STORAGE_KEY: &str = "gridConfigs";

/// Durable storage for per-family grid configs.
pub trait ConfigStore {
    /// Config for `family`, defaults if absent or unreadable.
    fn load(&self, family: GridFamily) -> GridConfig;

    /// Persist `config` for `family`.
    fn save(&mut self, family: GridFamily, config: &GridConfig) -> Result<(), StoreError>;
}

/// A [`ConfigStore`] backed by a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/gridConfigs.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document, or an empty one if missing or corrupt.
    fn read_document(&self) -> Map<String, Value> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable grid config store, using defaults");
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(path = %self.path.display(), "malformed grid config store, using defaults");
                Map::new()
            }
        }
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self, family: GridFamily) -> GridConfig {
        match self.read_document().get(family.key()) {
            Some(record) => merge_record(family, record),
            None => GridConfig::default_for(family),
        }
    }

    fn save(&mut self, family: GridFamily, config: &GridConfig) -> Result<(), StoreError> {
        let mut doc = self.read_document();
        doc.insert(family.key().to_string(), serde_json::to_value(config)?);
        let text = serde_json::to_string_pretty(&Value::Object(doc))?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, text).map_err(io_err)?;
        tracing::debug!(family = %family, path = %self.path.display(), "saved grid config");
        Ok(())
    }
}

/// Overlay a stored record onto the family defaults, one field at a time.
pub fn merge_record(family: GridFamily, record: &Value) -> GridConfig {
    let mut config = GridConfig::default_for(family);
    let Some(fields) = record.as_object() else {
        tracing::warn!(family = %family, "stored grid config is not an object, using defaults");
        return config;
    };
    let slots: [(&str, &mut u32); 5] = [
        ("cols", &mut config.cols),
        ("rows", &mut config.rows),
        ("tileSize", &mut config.tile_size),
        ("ppi", &mut config.ppi),
        ("borderWidth", &mut config.border_width),
    ];
    for (name, slot) in slots {
        let Some(value) = fields.get(name) else {
            continue;
        };
        match as_count(value) {
            Some(v) => *slot = v,
            None => tracing::warn!(family = %family, field = name, "ignoring malformed stored value"),
        }
    }
    if let Some(value) = fields.get("borderColor") {
        match value.as_str().map(Rgb::parse) {
            Some(Ok(color)) => config.border_color = color,
            _ => tracing::warn!(family = %family, field = "borderColor", "ignoring malformed stored value"),
        }
    }
    config
}

fn as_count(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f.round() as u32)
}

/// An in-memory [`ConfigStore`], for tests and headless sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    configs: HashMap<GridFamily, GridConfig>,
    saves: usize,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times [`save`](ConfigStore::save) was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The stored config, without default fallback.
    pub fn stored(&self, family: GridFamily) -> Option<&GridConfig> {
        self.configs.get(&family)
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, family: GridFamily) -> GridConfig {
        self.configs
            .get(&family)
            .cloned()
            .unwrap_or_else(|| GridConfig::default_for(family))
    }

    fn save(&mut self, family: GridFamily, config: &GridConfig) -> Result<(), StoreError> {
        self.configs.insert(family, config.clone());
        self.saves += 1;
        Ok(())
    }
}
