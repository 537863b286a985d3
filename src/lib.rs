//! Block-seeded elementary automaton artwork.
//!
//! The engine lives in `cellblock_core`; this crate re-exports it under
//! `model` and adds the command-line application layer in `app`.

pub mod app;
pub mod model;
