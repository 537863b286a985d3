//! Entropy injection driven by block transactions.
//!
//! Each of the first `point_count` pairs names a trigger generation
//! (`floor(x * 255) mod rows`). When the simulation reaches a trigger, the
//! next pair in sequence names a column (`floor(y * 255) mod columns`) that is
//! forced alive before the rule is applied. Triggers are keyed to the row
//! count and targets to the column count.

use cellblock_data::{CellRow, SeedPair};
use serde::{Deserialize, Serialize};

/// Trigger generation and target column derived from one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionPoint {
    pub generation_trigger: usize,
    pub target_column: usize,
}

impl InjectionPoint {
    pub fn from_pair(pair: SeedPair, row_height: usize, row_width: usize) -> Self {
        Self {
            generation_trigger: byte_scaled(pair.x) % row_height.max(1),
            target_column: byte_scaled(pair.y) % row_width.max(1),
        }
    }
}

/// `floor(unit * 255)`; non-negative for draws in `[0, 1)`.
#[inline]
fn byte_scaled(unit: f64) -> usize {
    (unit * 255.0).floor().max(0.0) as usize
}

/// Per-run injection state. The cursor is owned here and advanced once per
/// injection, independent of which trigger fired.
#[derive(Debug, Clone)]
pub struct InjectionSchedule {
    pairs: Vec<SeedPair>,
    point_count: usize,
    cursor: usize,
}

impl InjectionSchedule {
    /// Creates a schedule; `point_count` is clamped to the number of pairs.
    pub fn new(pairs: Vec<SeedPair>, point_count: usize) -> Self {
        if point_count > pairs.len() {
            tracing::warn!(
                requested = point_count,
                available = pairs.len(),
                "Clamping injection point count"
            );
        }
        let point_count = point_count.min(pairs.len());
        Self {
            pairs,
            point_count,
            cursor: 0,
        }
    }

    /// A schedule that never fires.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn pairs(&self) -> &[SeedPair] {
        &self.pairs
    }

    /// Number of injections performed so far.
    pub fn injections(&self) -> usize {
        self.cursor
    }

    /// Trigger generation of pair `i`.
    pub fn trigger(&self, i: usize, row_height: usize) -> Option<usize> {
        self.pairs
            .get(i)
            .map(|p| byte_scaled(p.x) % row_height.max(1))
    }

    /// How many triggers fire at `generation`.
    pub fn triggers_at(&self, generation: usize, row_height: usize) -> usize {
        (0..self.point_count)
            .filter(|&i| self.trigger(i, row_height) == Some(generation))
            .count()
    }

    pub fn is_injection_generation(&self, generation: usize, row_height: usize) -> bool {
        self.triggers_at(generation, row_height) > 0
    }

    /// Forces the next target column alive in `row` and advances the cursor.
    /// Returns the column, or `None` when there are no pairs at all.
    pub fn next_injection_target(&mut self, row: &mut CellRow) -> Option<usize> {
        if self.pairs.is_empty() || row.is_empty() {
            return None;
        }
        let pair = self.pairs[self.cursor % self.pairs.len()];
        let column = byte_scaled(pair.y) % row.len();
        row.set_alive(column);
        self.cursor += 1;
        Some(column)
    }

    /// Every injection point this schedule will consider, in trigger order.
    pub fn points(&self, row_height: usize, row_width: usize) -> Vec<InjectionPoint> {
        self.pairs[..self.point_count]
            .iter()
            .map(|&p| InjectionPoint::from_pair(p, row_height, row_width))
            .collect()
    }
}
