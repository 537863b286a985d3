//! Run metrics and logging setup.
//!
//! Metrics are informational only and never feed back into the generated
//! artifact, which stays a pure function of block and parameters.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Counters collected over one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub generations: usize,
    pub injections: usize,
    pub alive_cells: usize,
    pub elapsed_micros: u64,
}

impl RunMetrics {
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros)
    }

    /// Records a produced generation.
    pub fn record_generation(&mut self, alive: usize) {
        self.generations += 1;
        self.alive_cells += alive;
    }

    pub fn record_injection(&mut self) {
        self.injections += 1;
    }

    /// Density of alive cells over everything produced so far.
    pub fn alive_ratio(&self, row_width: usize) -> f64 {
        let total = self.generations * row_width;
        if total == 0 {
            0.0
        } else {
            self.alive_cells as f64 / total as f64
        }
    }
}

/// Wall-clock stopwatch feeding [`RunMetrics::elapsed_micros`].
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn stop(&self, metrics: &mut RunMetrics) {
        metrics.elapsed_micros = self.start.elapsed().as_micros() as u64;
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
