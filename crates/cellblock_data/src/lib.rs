//! # Cellblock Data
//!
//! Plain data types shared by the engine, the binaries and the tests.
//! Nothing in here knows how a generation is computed; these are the
//! shapes that flow in (blocks) and out (histories, attributes).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Dead cell state.
pub const DEAD: u8 = 0;
/// Alive cell state.
pub const ALIVE: u8 = 1;

/// A transaction as seen by the seeding layer. Only the hash matters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: String,
}

impl Transaction {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// Block data consumed by the seed stream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub hash: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(hash: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        Self {
            hash: hash.into(),
            transactions,
        }
    }
}

/// One pseudo-random draw pair, both components in `[0, 1)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeedPair {
    pub x: f64,
    pub y: f64,
}

impl SeedPair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single generation of the automaton.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CellRow(Vec<u8>);

impl CellRow {
    /// Creates a row of `width` dead cells.
    pub fn dead(width: usize) -> Self {
        Self(vec![DEAD; width])
    }

    pub fn from_cells(cells: Vec<u8>) -> Self {
        Self(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the state at `column`, or dead when out of range.
    pub fn get(&self, column: usize) -> u8 {
        self.0.get(column).copied().unwrap_or(DEAD)
    }

    pub fn set_alive(&mut self, column: usize) {
        if let Some(cell) = self.0.get_mut(column) {
            *cell = ALIVE;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == ALIVE).count()
    }

    pub fn cells(&self) -> &[u8] {
        &self.0
    }
}

/// Append-only record of every generation of a run, generation 0 first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct GenerationHistory {
    rows: Vec<CellRow>,
}

impl GenerationHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: CellRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, generation: usize) -> Option<&CellRow> {
        self.rows.get(generation)
    }

    pub fn rows(&self) -> &[CellRow] {
        &self.rows
    }

    /// Width of generation 0, or zero for an empty history.
    pub fn row_width(&self) -> usize {
        self.rows.first().map_or(0, CellRow::len)
    }

    pub fn alive_count(&self) -> usize {
        self.rows.iter().map(CellRow::alive_count).sum()
    }

    /// SHA-256 over every cell, row by row. Two runs over the same block
    /// and parameters must agree on this value.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.rows {
            hasher.update((row.len() as u64).to_le_bytes());
            hasher.update(row.cells());
        }
        hex::encode(hasher.finalize())
    }
}

/// Coarse long-run behaviour of an elementary rule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WolframClass {
    Emptied,
    Periodic,
    Structured,
    Chaotic,
}

impl WolframClass {
    pub const ALL: [WolframClass; 4] = [
        WolframClass::Emptied,
        WolframClass::Periodic,
        WolframClass::Structured,
        WolframClass::Chaotic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WolframClass::Emptied => "Emptied",
            WolframClass::Periodic => "Periodic",
            WolframClass::Structured => "Structured",
            WolframClass::Chaotic => "Chaotic",
        }
    }
}

impl fmt::Display for WolframClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether renderers read the history straight or folded about its centre.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymmetryMode {
    #[default]
    Normal,
    Mirrored,
}

impl SymmetryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SymmetryMode::Normal => "Normal",
            SymmetryMode::Mirrored => "Mirrored",
        }
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata surface emitted for every block. Field names are consumed
/// downstream and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub rule: u8,
    pub class: WolframClass,
    pub scarcity_boost_percent: u32,
    pub symmetry: SymmetryMode,
    pub extra_rarity_boost: u32,
}

/// Marketplace-style trait entry (`display_type` is omitted for plain strings).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TraitAttribute {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_type: Option<String>,
    pub trait_type: String,
    pub value: serde_json::Value,
}

impl Attributes {
    /// Expands the record into the trait list published alongside the artwork.
    pub fn trait_attributes(&self) -> Vec<TraitAttribute> {
        vec![
            TraitAttribute {
                display_type: Some("number".to_string()),
                trait_type: "Rule".to_string(),
                value: self.rule.into(),
            },
            TraitAttribute {
                display_type: None,
                trait_type: "Class".to_string(),
                value: self.class.as_str().into(),
            },
            TraitAttribute {
                display_type: Some("boost_percentage".to_string()),
                trait_type: "Scarcity reward".to_string(),
                value: self.scarcity_boost_percent.into(),
            },
            TraitAttribute {
                display_type: None,
                trait_type: "Symmetry".to_string(),
                value: self.symmetry.as_str().into(),
            },
            TraitAttribute {
                display_type: Some("boost_number".to_string()),
                trait_type: "Rarity boost".to_string(),
                value: self.extra_rarity_boost.into(),
            },
        ]
    }
}
