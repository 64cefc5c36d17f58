//! Per-family config lifecycle.
//!
//! Each [`GridFamily`] moves through three states:
//!
//! | from | event | to |
//! |------|-------|----|
//! | `Unloaded` / `LoadedClean` | activate | `LoadedClean` (reloaded from the store) |
//! | `LoadedDirty` | activate (same family, e.g. parity switch) | `LoadedDirty` (in-memory values kept) |
//! | any loaded | manual edit | `LoadedDirty` (saved immediately) |
//! | `LoadedDirty` | another family activated | `LoadedClean` |
//! | any | preset applied | `LoadedClean` (saved) |
//!
//! Edits are persisted as they happen, so leaving a family loses nothing;
//! the dirty state only shields the in-memory config from a reload while
//! the user stays on that family.

use crate::store::ConfigStore;
use gridforge_core::{GridConfig, GridFamily, GridLimits, GridType};
use gridforge_geometry::DisplayPreset;
use std::collections::BTreeMap;

/// Load state of one family's config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyState {
    /// Never loaded this session.
    Unloaded,
    /// In memory and identical to what was last loaded or saved.
    LoadedClean,
    /// Edited by hand while active.
    LoadedDirty,
}

/// Tracks which family is active and mediates loads and saves.
#[derive(Debug)]
pub struct ConfigSession<S: ConfigStore> {
    store: S,
    limits: GridLimits,
    active: GridType,
    configs: BTreeMap<GridFamily, GridConfig>,
    states: BTreeMap<GridFamily, FamilyState>,
}

impl<S: ConfigStore> ConfigSession<S> {
    /// Open a session with `initial` active.
    pub fn new(store: S, initial: GridType, limits: GridLimits) -> Self {
        let mut session = Self {
            store,
            limits,
            active: initial,
            configs: BTreeMap::new(),
            states: GridFamily::ALL
                .into_iter()
                .map(|f| (f, FamilyState::Unloaded))
                .collect(),
        };
        session.load(initial.family());
        session
    }

    /// The active grid type.
    pub fn active(&self) -> GridType {
        self.active
    }

    /// Config of the active family.
    pub fn config(&self) -> GridConfig {
        let family = self.active.family();
        self.configs
            .get(&family)
            .cloned()
            .unwrap_or_else(|| GridConfig::default_for(family))
    }

    /// Load state of `family`.
    pub fn state(&self, family: GridFamily) -> FamilyState {
        self.states
            .get(&family)
            .copied()
            .unwrap_or(FamilyState::Unloaded)
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dimension limits applied to loaded and edited configs.
    pub fn limits(&self) -> GridLimits {
        self.limits
    }

    /// Switch to `grid_type` and return the config to use.
    pub fn activate(&mut self, grid_type: GridType) -> GridConfig {
        let leaving = self.active.family();
        let entering = grid_type.family();
        if leaving != entering && self.state(leaving) == FamilyState::LoadedDirty {
            self.states.insert(leaving, FamilyState::LoadedClean);
        }
        self.active = grid_type;
        match self.state(entering) {
            FamilyState::LoadedDirty => {
                tracing::debug!(family = %entering, "keeping edited config");
            }
            FamilyState::Unloaded | FamilyState::LoadedClean => self.load(entering),
        }
        self.config()
    }

    /// Apply a manual edit to the active config, persist it, and return
    /// the clamped result.
    pub fn edit(&mut self, change: impl FnOnce(&mut GridConfig)) -> GridConfig {
        let family = self.active.family();
        let mut config = self.config();
        change(&mut config);
        let config = config.clamped(self.limits);
        self.persist(family, &config);
        self.configs.insert(family, config.clone());
        self.states.insert(family, FamilyState::LoadedDirty);
        config
    }

    /// Write `preset` into every family, keeping each family's border
    /// settings, and return the active config.
    pub fn apply_preset(&mut self, preset: &DisplayPreset) -> GridConfig {
        for family in GridFamily::ALL {
            let current = match self.state(family) {
                FamilyState::Unloaded => self.store.load(family),
                FamilyState::LoadedClean | FamilyState::LoadedDirty => self
                    .configs
                    .get(&family)
                    .cloned()
                    .unwrap_or_else(|| GridConfig::default_for(family)),
            };
            let config = preset.config_for(family, &current, self.limits);
            self.persist(family, &config);
            self.configs.insert(family, config);
            self.states.insert(family, FamilyState::LoadedClean);
        }
        tracing::info!(preset = %preset, "applied display preset");
        self.config()
    }

    fn load(&mut self, family: GridFamily) {
        let config = self.store.load(family).clamped(self.limits);
        tracing::debug!(family = %family, "loaded grid config");
        self.configs.insert(family, config);
        self.states.insert(family, FamilyState::LoadedClean);
    }

    fn persist(&mut self, family: GridFamily, config: &GridConfig) {
        if let Err(e) = self.store.save(family, config) {
            tracing::warn!(family = %family, error = %e, "failed to persist grid config");
        }
    }
}
