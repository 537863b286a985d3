//! Read-only access for renderers.
//!
//! Renderers never get a mirrored copy of the history. They read through
//! [`HistoryView`] and apply [`fold_index`] per pixel when the artwork is
//! mirrored, so shape and colour choices stay independent of the simulation.

use cellblock_data::{CellRow, GenerationHistory, SymmetryMode, DEAD};

/// Reflects `index` across `floor(length / 2)`.
///
/// Indices below the centre map to themselves; the rest count back down
/// towards zero. On odd lengths the last index folds to 0, a true mirror of
/// the first, where the older `c - (i mod c)` form gave `c`.
#[inline]
pub fn fold_index(index: usize, length: usize) -> usize {
    let center = length / 2;
    if center == 0 || index < center {
        index
    } else {
        center.saturating_sub(index - center)
    }
}

/// Borrowed, read-only view over a finished history.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    history: &'a GenerationHistory,
}

impl<'a> HistoryView<'a> {
    pub fn new(history: &'a GenerationHistory) -> Self {
        Self { history }
    }

    pub fn rows(&self) -> usize {
        self.history.len()
    }

    pub fn columns(&self) -> usize {
        self.history.row_width()
    }

    pub fn row(&self, row: usize) -> Option<&'a CellRow> {
        self.history.row(row)
    }

    /// Stored state; dead when out of range.
    pub fn cell(&self, row: usize, column: usize) -> u8 {
        self.history.row(row).map_or(DEAD, |r| r.get(column))
    }

    pub fn folded_cell(&self, row: usize, column: usize) -> u8 {
        self.cell(
            fold_index(row, self.rows()),
            fold_index(column, self.columns()),
        )
    }

    /// State a renderer should draw at `(row, column)` for `mode`.
    pub fn sample(&self, row: usize, column: usize, mode: SymmetryMode) -> u8 {
        match mode {
            SymmetryMode::Normal => self.cell(row, column),
            SymmetryMode::Mirrored => self.folded_cell(row, column),
        }
    }
}

/// Everything a renderer receives for one artwork.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub view: HistoryView<'a>,
    pub symmetry: SymmetryMode,
    /// Rule bits, most significant first, for the legend strip.
    pub legend: [u8; 8],
}

/// Consumer of finished histories (canvas painters, exporters, terminals).
pub trait RenderAdapter {
    type Output;

    fn render(&mut self, frame: &RenderFrame<'_>) -> Self::Output;
}

/// Renders a frame as lines of glyphs, one line per generation, followed by
/// the rule legend.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub alive: String,
    pub dead: String,
    pub show_legend: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            alive: "█".to_string(),
            dead: " ".to_string(),
            show_legend: true,
        }
    }
}

impl TextRenderer {
    pub fn new(alive: impl Into<String>, dead: impl Into<String>) -> Self {
        Self {
            alive: alive.into(),
            dead: dead.into(),
            show_legend: true,
        }
    }

    fn glyph(&self, state: u8) -> &str {
        if state == DEAD {
            &self.dead
        } else {
            &self.alive
        }
    }
}

impl RenderAdapter for TextRenderer {
    type Output = String;

    fn render(&mut self, frame: &RenderFrame<'_>) -> String {
        let view = frame.view;
        let mut out = String::with_capacity(view.rows() * (view.columns() + 1));
        for row in 0..view.rows() {
            for column in 0..view.columns() {
                out.push_str(self.glyph(view.sample(row, column, frame.symmetry)));
            }
            out.push('\n');
        }
        if self.show_legend {
            let bits: String = frame
                .legend
                .iter()
                .map(|b| if *b == DEAD { '0' } else { '1' })
                .collect();
            out.push_str(&format!("rule {bits} ({})\n", frame.symmetry));
        }
        out
    }
}
