use cellblock_lib::model::config::AppConfig;
use cellblock_lib::model::state::{Block, SeedPair, Transaction};

#[allow(dead_code)]
pub struct BlockBuilder {
    hash: String,
    transactions: Vec<Transaction>,
}

#[allow(dead_code)]
impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            hash: "0x9a3f5c7e1b2d4f6081726354a5b6c7d8e9f00112233445566778899aabbccdd".to_string(),
            transactions: Vec::new(),
        }
    }

    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = hash.to_string();
        self
    }

    pub fn with_transaction(mut self, hash: &str) -> Self {
        self.transactions.push(Transaction::new(hash));
        self
    }

    /// Appends `count` transactions with distinct, well-formed hashes.
    pub fn with_transactions(mut self, count: usize) -> Self {
        let start = self.transactions.len();
        for i in start..start + count {
            self.transactions.push(Transaction::new(format!(
                "0x{:016x}{:048x}",
                (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15),
                i
            )));
        }
        self
    }

    pub fn build(self) -> Block {
        Block::new(self.hash, self.transactions)
    }
}

/// Small canvas so integration tests stay fast.
#[allow(dead_code)]
pub fn small_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.canvas.width = 128.0;
    config.canvas.height = 128.0;
    config.modifiers.mod1 = 0.0;
    config
}

/// Pair whose `floor(x * 255)` and `floor(y * 255)` are exactly the given bytes.
#[allow(dead_code)]
pub fn pair_for(trigger_byte: usize, column_byte: usize) -> SeedPair {
    SeedPair::new(
        (trigger_byte as f64 + 0.5) / 255.0,
        (column_byte as f64 + 0.5) / 255.0,
    )
}
