//! Configuration management for rendering parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. The block supplies the entropy; the configuration
//! only decides the canvas and the creator-facing modifiers.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [canvas]
//! width = 500.0
//! height = 500.0
//!
//! [modifiers]
//! mod1 = 0.25
//! mod2 = 0.0
//! mod3 = 0.0
//!
//! [render]
//! alive_glyph = "#"
//! dead_glyph = "."
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pixel size of the target canvas.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

/// Creator modifiers, all in `[0.0, 1.0]`.
///
/// Only `mod1` reaches the automaton (it picks the cell scale); the other two
/// are forwarded untouched to renderers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModifierConfig {
    /// Scale percentage; smaller means finer detail and more cells
    pub mod1: f64,
    /// Shape probability
    pub mod2: f64,
    /// Shape anchor probability
    pub mod3: f64,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            mod1: 0.25,
            mod2: 0.0,
            mod3: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub alive_glyph: String,
    pub dead_glyph: String,
    pub show_legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: "█".to_string(),
            dead_glyph: " ".to_string(),
            show_legend: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub modifiers: ModifierConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Canvas dimensions must be positive and at most 8192
    /// - Modifiers must be in `[0.0, 1.0]`
    /// - Glyphs must not be empty
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.canvas.width > 0.0, "Canvas width must be positive");
        anyhow::ensure!(
            self.canvas.width <= 8192.0,
            "Canvas width too large (max 8192)"
        );
        anyhow::ensure!(self.canvas.height > 0.0, "Canvas height must be positive");
        anyhow::ensure!(
            self.canvas.height <= 8192.0,
            "Canvas height too large (max 8192)"
        );

        for (name, value) in [
            ("mod1", self.modifiers.mod1),
            ("mod2", self.modifiers.mod2),
            ("mod3", self.modifiers.mod3),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&value),
                "Modifier {} must be in [0.0, 1.0]",
                name
            );
        }

        anyhow::ensure!(
            !self.render.alive_glyph.is_empty(),
            "Alive glyph must not be empty"
        );
        anyhow::ensure!(
            !self.render.dead_glyph.is_empty(),
            "Dead glyph must not be empty"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Hash of every parameter that can change the artwork.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.canvas).as_bytes());
        hasher.update(format!("{:?}", self.modifiers).as_bytes());
        hex::encode(hasher.finalize())
    }
}
