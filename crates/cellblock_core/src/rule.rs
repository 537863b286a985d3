//! Elementary rule tables.
//!
//! A rule index in `0..=255` is expanded into its 8-bit binary form,
//! most significant bit first. Bit `i` answers for the neighbourhood whose
//! left-centre-right encoding is `7 - i`, so the table reads like the usual
//! `111 110 101 100 011 010 001 000` header.

use crate::error::{CaError, Result};
use serde::{Deserialize, Serialize};

/// 8-entry lookup table for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleTable {
    bits: [u8; 8],
}

impl RuleTable {
    /// Parses a rule index, rejecting anything outside `0..=255`.
    pub fn parse(rule: i64) -> Result<Self> {
        let index = u8::try_from(rule).map_err(|_| CaError::InvalidRule(rule))?;
        Ok(Self::from_index(index))
    }

    pub fn from_index(index: u8) -> Self {
        let mut bits = [0u8; 8];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (index >> (7 - i)) & 1;
        }
        Self { bits }
    }

    /// Next state of a cell given its neighbourhood.
    #[inline]
    pub fn next_state(&self, left: u8, center: u8, right: u8) -> u8 {
        let n = ((left & 1) << 2 | (center & 1) << 1 | (right & 1)) as usize;
        self.bits[7 - n]
    }

    /// Reassembles the rule index from the table.
    pub fn to_rule_index(&self) -> u8 {
        self.bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit)
    }

    /// MSB-first bits, as drawn in the legend strip.
    pub fn legend(&self) -> [u8; 8] {
        self.bits
    }

    /// Zero-padded binary string, e.g. `00011110` for rule 30.
    pub fn binary_string(&self) -> String {
        self.bits.iter().map(|b| if *b == 1 { '1' } else { '0' }).collect()
    }
}
