//! The painted cell-color matrix.

use crate::color::Rgb;
use crate::point::CellIndex;
use rand::Rng;

/// A row-major `rows x cols` matrix of optional terrain colors.
///
/// Reads and writes outside the matrix are tolerated: reads return `None`
/// and writes are no-ops. Interaction code relies on this to paint without
/// bounds checks of its own.
///
/// # Examples
///
/// ```
/// use gridforge_core::{CellIndex, CellMatrix, Rgb};
///
/// let mut cells = CellMatrix::new(2, 3);
/// assert!(!cells.has_content());
/// assert!(cells.paint(CellIndex::new(1, 2), Rgb::WHITE));
/// assert_eq!(cells.get(CellIndex::new(1, 2)), Some(Rgb::WHITE));
///
/// // Out of bounds: ignored.
/// assert!(!cells.paint(CellIndex::new(5, 0), Rgb::WHITE));
/// assert_eq!(cells.get(CellIndex::new(5, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMatrix {
    rows: u32,
    cols: u32,
    cells: Vec<Option<Rgb>>,
}

impl CellMatrix {
    /// An all-empty matrix.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Build from nested rows, truncating or padding with empty cells so the
    /// result is exactly `rows x cols`.
    pub fn from_rows(rows: u32, cols: u32, data: &[Vec<Option<Rgb>>]) -> Self {
        let mut m = Self::new(rows, cols);
        for (r, line) in data.iter().take(rows as usize).enumerate() {
            for (c, cell) in line.iter().take(cols as usize).enumerate() {
                m.cells[r * cols as usize + c] = *cell;
            }
        }
        m
    }

    /// Fill every cell with a uniformly chosen palette color. An empty
    /// palette yields an empty matrix.
    pub fn random<R: Rng + ?Sized>(rows: u32, cols: u32, palette: &[Rgb], rng: &mut R) -> Self {
        let mut m = Self::new(rows, cols);
        if palette.is_empty() {
            return m;
        }
        for cell in &mut m.cells {
            *cell = Some(palette[rng.random_range(0..palette.len())]);
        }
        m
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn offset(&self, idx: CellIndex) -> Option<usize> {
        if idx.row < self.rows && idx.col < self.cols {
            Some(idx.row as usize * self.cols as usize + idx.col as usize)
        } else {
            None
        }
    }

    /// Whether `idx` is inside the matrix.
    pub fn contains(&self, idx: CellIndex) -> bool {
        self.offset(idx).is_some()
    }

    /// Color at `idx`; `None` if empty or out of bounds.
    pub fn get(&self, idx: CellIndex) -> Option<Rgb> {
        self.offset(idx).and_then(|o| self.cells[o])
    }

    /// Set or clear a cell. Returns whether the stored value changed.
    pub fn set(&mut self, idx: CellIndex, value: Option<Rgb>) -> bool {
        let Some(o) = self.offset(idx) else {
            return false;
        };
        let changed = self.cells[o] != value;
        self.cells[o] = value;
        changed
    }

    /// Paint a cell. Returns whether the stored value changed.
    pub fn paint(&mut self, idx: CellIndex, color: Rgb) -> bool {
        self.set(idx, Some(color))
    }

    /// Reshape to `rows x cols`, keeping the overlapping region.
    pub fn resize(&mut self, rows: u32, cols: u32) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        let mut next = Self::new(rows, cols);
        for r in 0..self.rows.min(rows) {
            for c in 0..self.cols.min(cols) {
                let idx = CellIndex::new(r, c);
                next.set(idx, self.get(idx));
            }
        }
        *self = next;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// True if at least one cell is painted.
    pub fn has_content(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// Number of painted cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Painted cells in row-major order.
    pub fn iter_filled(&self) -> impl Iterator<Item = (CellIndex, Rgb)> + '_ {
        let cols = self.cols.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|color| (CellIndex::new((i / cols) as u32, (i % cols) as u32), color))
        })
    }

    /// Nested `[row][col]` copy, as serialized by the JSON export.
    pub fn to_nested(&self) -> Vec<Vec<Option<Rgb>>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows as usize];
        }
        self.cells
            .chunks(self.cols as usize)
            .map(<[Option<Rgb>]>::to_vec)
            .collect()
    }
}
