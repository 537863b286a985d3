//! Block-derived pseudo-random draws.
//!
//! The block hash seeds a ChaCha8 generator once; every transaction then
//! consumes one `(y, x)` draw pair in block order. The same block always
//! yields the same pairs on every platform.

use crate::error::{CaError, Result};
use cellblock_data::{Block, SeedPair};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of hex characters read from a hash to build a 64-bit seed.
pub const SEED_HEX_CHARS: usize = 16;

/// Derived draw used to pick the rule index.
pub const RULE_DRAW: usize = 0;
/// Derived draw used to size the injection schedule.
pub const INJECTION_DRAW: usize = 1;
/// Derived draw compared against the rarity threshold.
pub const RARITY_DRAW: usize = 2;

/// Decodes the leading 16 hex characters of `hash` (after an optional `0x`)
/// into a big-endian `u64`.
pub fn hash_seed(hash: &str) -> Result<u64> {
    let digits = hash
        .strip_prefix("0x")
        .or_else(|| hash.strip_prefix("0X"))
        .unwrap_or(hash);
    let head = digits.get(..SEED_HEX_CHARS).ok_or_else(|| {
        CaError::malformed(format!(
            "hash '{hash}' has fewer than {SEED_HEX_CHARS} hex characters"
        ))
    })?;
    let bytes = hex::decode(head)
        .map_err(|e| CaError::malformed(format!("hash '{hash}' is not hex: {e}")))?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes);
    Ok(u64::from_be_bytes(buf))
}

/// Indexable sequence of draw pairs, one per transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedStream {
    seed: u64,
    pairs: Vec<SeedPair>,
}

impl SeedStream {
    /// Builds the stream for `block`.
    ///
    /// Fails when the block hash or any transaction hash is too short, or
    /// when the block carries no transactions at all.
    pub fn from_block(block: &Block) -> Result<Self> {
        let seed = hash_seed(&block.hash)?;
        if block.transactions.is_empty() {
            return Err(CaError::malformed("block has no transactions"));
        }
        for (i, tx) in block.transactions.iter().enumerate() {
            hash_seed(&tx.hash).map_err(|e| match e {
                CaError::MalformedBlockData(msg) => {
                    CaError::malformed(format!("transaction {i}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(Self::generate(seed, block.transactions.len()))
    }

    /// Draws `count` pairs from a generator seeded with `seed`.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pairs = (0..count)
            .map(|_| {
                let y: f64 = rng.gen();
                let x: f64 = rng.gen();
                SeedPair { x, y }
            })
            .collect();
        Self { seed, pairs }
    }

    /// Wraps pre-computed pairs. Fails on an empty list.
    pub fn from_pairs(seed: u64, pairs: Vec<SeedPair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(CaError::malformed("seed stream needs at least one pair"));
        }
        Ok(Self { seed, pairs })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pair(&self, index: usize) -> Option<SeedPair> {
        self.pairs.get(index).copied()
    }

    pub fn pairs(&self) -> &[SeedPair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<SeedPair> {
        self.pairs
    }

    /// The `k`-th derived draw: pair `k` (mod length) picks another pair
    /// whose `x` is returned.
    pub fn derived_draw(&self, k: usize) -> f64 {
        let n = self.pairs.len();
        if n == 0 {
            return 0.0;
        }
        let selector = self.pairs[k % n].x;
        let idx = ((selector * (n - 1) as f64) as usize).min(n - 1);
        self.pairs[idx].x
    }

    /// Rule index picked by this stream, in `0..=254`.
    pub fn rule_index(&self) -> u8 {
        scale_unit(self.derived_draw(RULE_DRAW), 255) as u8
    }

    /// How many injection triggers the schedule should consider.
    pub fn injection_point_count(&self) -> usize {
        scale_unit(self.derived_draw(INJECTION_DRAW), self.pairs.len())
    }

    pub fn rarity_draw(&self) -> f64 {
        self.derived_draw(RARITY_DRAW)
    }
}

/// `floor(unit * span)` for a unit draw, clamped below `span` when `span > 0`.
pub(crate) fn scale_unit(unit: f64, span: usize) -> usize {
    let v = (unit * span as f64).floor().max(0.0) as usize;
    v.min(span.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellblock_data::Transaction;

    fn block(tx_count: usize) -> Block {
        Block::new(
            "0x1f2e3d4c5b6a79880011223344556677",
            (0..tx_count)
                .map(|i| Transaction::new(format!("0x{:064x}", i + 1)))
                .collect(),
        )
    }

    #[test]
    fn test_hash_seed_reads_sixteen_chars() {
        assert_eq!(hash_seed("0x0000000000000001ffff").unwrap(), 1);
        assert_eq!(hash_seed("00000000000000ff").unwrap(), 255);
        assert_eq!(hash_seed("ffffffffffffffff").unwrap(), u64::MAX);
    }

    #[test]
    fn test_hash_seed_rejects_short_or_non_hex() {
        assert!(matches!(
            hash_seed("0x1234"),
            Err(CaError::MalformedBlockData(_))
        ));
        assert!(matches!(
            hash_seed("zzzzzzzzzzzzzzzz"),
            Err(CaError::MalformedBlockData(_))
        ));
    }

    #[test]
    fn test_empty_transactions_fail_fast() {
        assert!(matches!(
            SeedStream::from_block(&block(0)),
            Err(CaError::MalformedBlockData(_))
        ));
    }

    #[test]
    fn test_short_transaction_hash_fails() {
        let mut b = block(3);
        b.transactions[1].hash = "0xabc".to_string();
        let err = SeedStream::from_block(&b).unwrap_err();
        assert!(err.to_string().contains("transaction 1"));
    }

    #[test]
    fn test_stream_is_deterministic() {
        let a = SeedStream::from_block(&block(20)).unwrap();
        let b = SeedStream::from_block(&block(20)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        for p in a.pairs() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_prefix_is_stable_when_more_transactions_added() {
        let short = SeedStream::from_block(&block(5)).unwrap();
        let long = SeedStream::from_block(&block(9)).unwrap();
        assert_eq!(short.pairs(), &long.pairs()[..5]);
    }

    #[test]
    fn test_derived_draw_selection() {
        let pairs = vec![
            SeedPair::new(0.5, 0.1),
            SeedPair::new(0.99, 0.2),
            SeedPair::new(0.25, 0.3),
        ];
        let stream = SeedStream::from_pairs(7, pairs).unwrap();
        // pair 0: x = 0.5 -> floor(0.5 * 2) = 1 -> pairs[1].x
        assert_eq!(stream.derived_draw(0), 0.99);
        // pair 1: x = 0.99 -> floor(1.98) = 1
        assert_eq!(stream.derived_draw(1), 0.99);
        // pair 2: x = 0.25 -> floor(0.5) = 0
        assert_eq!(stream.derived_draw(2), 0.5);
        // wraps
        assert_eq!(stream.derived_draw(3), stream.derived_draw(0));
        assert_eq!(stream.rule_index(), 252);
        assert_eq!(stream.injection_point_count(), 2);
    }

    #[test]
    fn test_single_transaction_is_enough() {
        let stream = SeedStream::from_block(&block(1)).unwrap();
        let x = stream.pairs()[0].x;
        assert_eq!(stream.derived_draw(RARITY_DRAW), x);
        assert_eq!(stream.injection_point_count(), 0);
    }

    #[test]
    fn test_scale_unit_bounds() {
        assert_eq!(scale_unit(0.0, 255), 0);
        assert_eq!(scale_unit(0.999_999, 255), 254);
        assert_eq!(scale_unit(0.5, 0), 0);
    }
}
