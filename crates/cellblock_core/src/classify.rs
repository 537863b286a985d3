//! Wolfram-class membership and rarity scoring.
//!
//! The four membership lists partition `0..=255` and are fixed; they are
//! folded into a 256-entry table at compile time so lookups are a single
//! index.

use cellblock_data::{SymmetryMode, WolframClass};
use serde::{Deserialize, Serialize};

/// Draws at or above this value produce a mirrored artwork.
pub const MIRROR_THRESHOLD: f64 = 0.98;

pub const EMPTIED_RULES: [u8; 16] = [
    0, 8, 32, 40, 64, 72, 96, 104, 128, 136, 160, 168, 192, 200, 224, 232,
];

pub const PERIODIC_RULES: [u8; 158] = [
    1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 19, 20, 21, 23, 24, 25, 27, 29, 31,
    33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44, 46, 47, 48, 49, 51, 52, 53, 55, 56, 59, 61, 63,
    65, 66, 67, 68, 69, 70, 71, 74, 76, 78, 79, 80, 81, 83, 84, 85, 87, 88, 92, 93, 95, 97, 98,
    100, 103, 106, 108, 111, 112, 113, 115, 116, 117, 119, 120, 123, 125, 127, 130, 132, 134,
    138, 139, 140, 142, 143, 144, 148, 151, 152, 155, 159, 162, 164, 166, 170, 171, 172, 173,
    174, 175, 176, 180, 183, 184, 185, 187, 189, 191, 194, 196, 201, 202, 203, 204, 205, 207,
    208, 209, 211, 212, 213, 215, 216, 217, 219, 221, 223, 226, 227, 228, 229, 231, 233, 234,
    235, 236, 237, 239, 240, 241, 243, 244, 245, 247, 248, 249, 251, 253, 255,
];

pub const STRUCTURED_RULES: [u8; 70] = [
    18, 22, 26, 28, 50, 54, 57, 58, 60, 62, 73, 77, 82, 90, 91, 94, 99, 102, 105, 109, 110, 114,
    118, 122, 124, 126, 129, 131, 133, 137, 141, 145, 146, 147, 150, 153, 154, 156, 157, 158,
    161, 163, 165, 167, 177, 178, 179, 181, 182, 186, 188, 190, 193, 195, 197, 198, 199, 206,
    210, 214, 218, 220, 222, 230, 238, 242, 246, 250, 252, 254,
];

pub const CHAOTIC_RULES: [u8; 12] = [30, 45, 75, 86, 89, 101, 107, 121, 135, 149, 169, 225];

const fn build_table() -> [Option<WolframClass>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < EMPTIED_RULES.len() {
        table[EMPTIED_RULES[i] as usize] = Some(WolframClass::Emptied);
        i += 1;
    }
    i = 0;
    while i < PERIODIC_RULES.len() {
        table[PERIODIC_RULES[i] as usize] = Some(WolframClass::Periodic);
        i += 1;
    }
    i = 0;
    while i < STRUCTURED_RULES.len() {
        table[STRUCTURED_RULES[i] as usize] = Some(WolframClass::Structured);
        i += 1;
    }
    i = 0;
    while i < CHAOTIC_RULES.len() {
        table[CHAOTIC_RULES[i] as usize] = Some(WolframClass::Chaotic);
        i += 1;
    }
    table
}

static CLASS_TABLE: [Option<WolframClass>; 256] = build_table();

/// Members of `class`, ascending.
pub fn members(class: WolframClass) -> &'static [u8] {
    match class {
        WolframClass::Emptied => &EMPTIED_RULES,
        WolframClass::Periodic => &PERIODIC_RULES,
        WolframClass::Structured => &STRUCTURED_RULES,
        WolframClass::Chaotic => &CHAOTIC_RULES,
    }
}

/// `round(size / 255 * 100)`.
pub fn scarcity_percent(class: WolframClass) -> u32 {
    (members(class).len() as f64 / 255.0 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub wolfram_class: WolframClass,
    pub scarcity_percent: u32,
}

impl ClassificationResult {
    /// Rarer classes earn a larger boost.
    pub fn boost(&self) -> u32 {
        100u32.saturating_sub(self.scarcity_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityOutcome {
    pub symmetry_mode: SymmetryMode,
    pub extra_rarity_boost: u32,
}

pub fn classify(rule: u8) -> ClassificationResult {
    // The four lists cover every byte; see `test_partition_is_total`.
    let wolfram_class = CLASS_TABLE[rule as usize].unwrap_or(WolframClass::Periodic);
    ClassificationResult {
        wolfram_class,
        scarcity_percent: scarcity_percent(wolfram_class),
    }
}

pub fn symmetry_mode(rarity_draw: f64) -> SymmetryMode {
    if rarity_draw >= MIRROR_THRESHOLD {
        SymmetryMode::Mirrored
    } else {
        SymmetryMode::Normal
    }
}

/// Fixed bonus table; only mirrored artworks earn anything.
pub fn extra_rarity_boost(class: WolframClass, mode: SymmetryMode) -> u32 {
    match (class, mode) {
        (_, SymmetryMode::Normal) => 0,
        (WolframClass::Periodic, SymmetryMode::Mirrored) => 25,
        (WolframClass::Structured, SymmetryMode::Mirrored) => 50,
        (WolframClass::Emptied, SymmetryMode::Mirrored) => 75,
        (WolframClass::Chaotic, SymmetryMode::Mirrored) => 100,
    }
}

pub fn symmetry_roll(classification: &ClassificationResult, rarity_draw: f64) -> RarityOutcome {
    let symmetry_mode = symmetry_mode(rarity_draw);
    RarityOutcome {
        symmetry_mode,
        extra_rarity_boost: extra_rarity_boost(classification.wolfram_class, symmetry_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_total() {
        let total: usize = WolframClass::ALL.iter().map(|c| members(*c).len()).sum();
        assert_eq!(total, 256);
        assert!(CLASS_TABLE.iter().all(Option::is_some));
        for class in WolframClass::ALL {
            for &rule in members(class) {
                assert_eq!(classify(rule).wolfram_class, class, "rule {rule}");
            }
        }
    }

    #[test]
    fn test_rule_30_chaotic() {
        let result = classify(30);
        assert_eq!(result.wolfram_class, WolframClass::Chaotic);
        assert_eq!(result.scarcity_percent, 5);
        assert_eq!(result.boost(), 95);
    }

    #[test]
    fn test_known_rules() {
        assert_eq!(classify(0).wolfram_class, WolframClass::Emptied);
        assert_eq!(classify(204).wolfram_class, WolframClass::Periodic);
        assert_eq!(classify(110).wolfram_class, WolframClass::Structured);
        assert_eq!(classify(90).wolfram_class, WolframClass::Structured);
        assert_eq!(classify(255).wolfram_class, WolframClass::Periodic);
    }

    #[test]
    fn test_scarcity_percentages() {
        assert_eq!(scarcity_percent(WolframClass::Emptied), 6);
        assert_eq!(scarcity_percent(WolframClass::Periodic), 62);
        assert_eq!(scarcity_percent(WolframClass::Structured), 27);
        assert_eq!(scarcity_percent(WolframClass::Chaotic), 5);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(symmetry_mode(0.98), SymmetryMode::Mirrored);
        assert_eq!(symmetry_mode(0.979_999_9), SymmetryMode::Normal);
        assert_eq!(symmetry_mode(0.0), SymmetryMode::Normal);
    }

    #[test]
    fn test_extra_rarity_table() {
        let mirrored = [
            (WolframClass::Periodic, 25),
            (WolframClass::Structured, 50),
            (WolframClass::Emptied, 75),
            (WolframClass::Chaotic, 100),
        ];
        for (class, boost) in mirrored {
            assert_eq!(extra_rarity_boost(class, SymmetryMode::Mirrored), boost);
            assert_eq!(extra_rarity_boost(class, SymmetryMode::Normal), 0);
        }
    }

    #[test]
    fn test_symmetry_roll() {
        let outcome = symmetry_roll(&classify(30), 0.99);
        assert_eq!(outcome.symmetry_mode, SymmetryMode::Mirrored);
        assert_eq!(outcome.extra_rarity_boost, 100);

        let outcome = symmetry_roll(&classify(30), 0.5);
        assert_eq!(outcome.extra_rarity_boost, 0);
    }
}
