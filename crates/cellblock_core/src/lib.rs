//! # Cellblock Core
//!
//! Deterministic elementary cellular automaton seeded from block data.
//!
//! This crate contains the whole engine:
//! - Rule tables for the 256 elementary rules
//! - A block-seeded stream of draw pairs (ChaCha8)
//! - Entropy injection scheduling
//! - The generation loop and its recorded history
//! - Wolfram-class and rarity classification
//! - A read-only render contract with symmetry folding
//!
//! ## Example
//!
//! ```
//! use cellblock_core::artifact::generate;
//! use cellblock_core::config::AppConfig;
//! use cellblock_data::{Block, Transaction};
//!
//! let block = Block::new(
//!     "0x7f3c1a2b4d5e6f708192a3b4c5d6e7f8",
//!     vec![
//!         Transaction::new("0x00000000000000010000000000000000"),
//!         Transaction::new("0x00000000000000020000000000000000"),
//!         Transaction::new("0x00000000000000030000000000000000"),
//!     ],
//! );
//! let artifact = generate(&block, &AppConfig::default()).unwrap();
//! assert_eq!(artifact.history.len(), artifact.dimensions.row_height);
//! ```

/// Block in, history and attributes out
pub mod artifact;
/// Wolfram classes and rarity scoring
pub mod classify;
/// Configuration management for rendering parameters
pub mod config;
/// Error taxonomy for the engine
pub mod error;
/// Canvas geometry and cell scale
pub mod geometry;
/// Block-driven spark injection
pub mod injection;
/// Run metrics and structured logging
pub mod metrics;
/// Read-only render contract
pub mod render;
/// Elementary rule tables
pub mod rule;
/// Seeded draw pairs derived from block data
pub mod seed;
/// Generation loop state machine
pub mod simulation;

pub use artifact::{generate, Artifact};
pub use classify::{classify, ClassificationResult, RarityOutcome};
pub use error::{CaError, Result};
pub use geometry::{CanvasGeometry, Dimensions};
pub use injection::{InjectionPoint, InjectionSchedule};
pub use metrics::{init_logging, RunMetrics};
pub use render::{fold_index, HistoryView, RenderAdapter, RenderFrame, TextRenderer};
pub use rule::RuleTable;
pub use seed::SeedStream;
pub use simulation::{CaSimulation, SimulationState};
