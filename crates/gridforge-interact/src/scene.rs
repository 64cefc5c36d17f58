//! The editable state behind one grid view.

use gridforge_core::{Biome, CellIndex, CellMatrix, GridConfig, GridLimits, GridType, Rgb, ViewState};
use gridforge_geometry::{GeometryError, GridDimensions, HitTestMode, HitTester, ViewTransform};
use rand::Rng;

/// Grid type, config, painted cells and view of one editing session.
///
/// The cell matrix always matches the config's `rows x cols`; every config
/// change resizes it, keeping the overlapping region.
#[derive(Clone, Debug)]
pub struct GridScene {
    grid_type: GridType,
    config: GridConfig,
    limits: GridLimits,
    cells: CellMatrix,
    view: ViewState,
}

impl GridScene {
    /// A scene with an empty matrix. `config` is clamped into `limits`.
    pub fn new(grid_type: GridType, config: GridConfig, limits: GridLimits) -> Self {
        let config = config.clamped(limits);
        let cells = CellMatrix::new(config.rows, config.cols);
        Self {
            grid_type,
            config,
            limits,
            cells,
            view: ViewState::default(),
        }
    }

    /// Current grid type.
    pub fn grid_type(&self) -> GridType {
        self.grid_type
    }

    /// Current config.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Dimension limits in force.
    pub fn limits(&self) -> GridLimits {
        self.limits
    }

    /// Painted cells.
    pub fn cells(&self) -> &CellMatrix {
        &self.cells
    }

    /// Pan and zoom.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable pan and zoom.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Replace the config (clamped) and resize the matrix to match.
    ///
    /// Returns `true` when `config` was outside the limits and had to be
    /// clamped. Cells beyond the clamped size are dropped.
    pub fn set_config(&mut self, config: GridConfig) -> bool {
        let clamped = match config.validate(self.limits) {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(error = %e, "config clamped to grid limits");
                true
            }
        };
        self.config = config.clamped(self.limits);
        self.cells.resize(self.config.rows, self.config.cols);
        clamped
    }

    /// Switch grid type and config together. Returns whether `config` was clamped.
    pub fn set_grid_type(&mut self, grid_type: GridType, config: GridConfig) -> bool {
        self.grid_type = grid_type;
        self.set_config(config)
    }

    /// Change the dimension limits, reclamping the config.
    pub fn set_limits(&mut self, limits: GridLimits) {
        self.limits = limits;
        let config = self.config.clone();
        self.set_config(config);
    }

    /// Replace the matrix wholesale, reshaped to the config.
    pub fn replace_cells(&mut self, mut cells: CellMatrix) {
        cells.resize(self.config.rows, self.config.cols);
        self.cells = cells;
    }

    /// Paint one cell; out-of-grid indices are ignored.
    pub fn paint(&mut self, idx: CellIndex, color: Rgb) -> bool {
        self.cells.paint(idx, color)
    }

    /// Fill every cell with a random biome.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells = CellMatrix::random(self.config.rows, self.config.cols, &Biome::palette(), rng);
    }

    /// Empty every cell.
    pub fn reset_cells(&mut self) {
        self.cells = CellMatrix::new(self.config.rows, self.config.cols);
    }

    /// Back to no pan, unit zoom.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Display-canvas sizing for the current grid.
    pub fn dimensions(&self) -> Result<GridDimensions, GeometryError> {
        GridDimensions::display(self.grid_type, &self.config)
    }

    /// Screen transform combining pan, zoom and display scale.
    pub fn view_transform(&self) -> Result<ViewTransform, GeometryError> {
        Ok(ViewTransform::new(&self.view, self.dimensions()?.scale))
    }

    /// Hit tester for the current grid.
    pub fn hit_tester(&self, mode: HitTestMode) -> Result<HitTester, GeometryError> {
        HitTester::new(self.grid_type, &self.config, mode)
    }
}
