//! Command-line application layer: load inputs, run the engine, format output.

use crate::model::artifact::{generate, Artifact};
use crate::model::config::AppConfig;
use crate::model::render::TextRenderer;
use crate::model::state::Block;
use anyhow::Context;
use clap::ValueEnum;
use std::path::Path;

/// What the binary prints for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputMode {
    /// Attribute record as JSON
    #[default]
    Attributes,
    /// Marketplace trait list as JSON
    Traits,
    /// Glyph rendering of the history
    Text,
    /// Full artifact (history included) as JSON
    History,
}

pub struct App {
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads the config file (defaults if missing) and validates it.
    pub fn from_config_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = AppConfig::load(path.as_ref())
            .with_context(|| format!("loading config {}", path.as_ref().display()))?;
        Self::new(config)
    }

    pub fn load_block(path: impl AsRef<Path>) -> anyhow::Result<Block> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading block {}", path.display()))?;
        let block = serde_json::from_str(&data)
            .with_context(|| format!("parsing block {}", path.display()))?;
        Ok(block)
    }

    pub fn artifact(&self, block: &Block) -> anyhow::Result<Artifact> {
        Ok(generate(block, &self.config)?)
    }

    pub fn run(&self, block: &Block, mode: OutputMode) -> anyhow::Result<String> {
        let artifact = self.artifact(block)?;
        let out = match mode {
            OutputMode::Attributes => serde_json::to_string_pretty(&artifact.attributes)?,
            OutputMode::Traits => {
                let traits = artifact.attributes.trait_attributes();
                serde_json::to_string_pretty(&serde_json::json!({ "attributes": traits }))?
            }
            OutputMode::Text => {
                let mut renderer = TextRenderer {
                    alive: self.config.render.alive_glyph.clone(),
                    dead: self.config.render.dead_glyph.clone(),
                    show_legend: self.config.render.show_legend,
                };
                artifact.render(&mut renderer)
            }
            OutputMode::History => serde_json::to_string(&artifact)?,
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::Transaction;

    fn block() -> Block {
        Block::new(
            "0x00112233445566778899aabbccddeeff",
            (1..=8)
                .map(|i| Transaction::new(format!("0x{:032x}", i * 0x1234_5678_9abc_u64)))
                .collect(),
        )
    }

    #[test]
    fn test_attributes_output() {
        let app = App::new(AppConfig::default()).unwrap();
        let out = app.run(&block(), OutputMode::Attributes).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json["rule"].is_u64());
        assert!(json["scarcityBoostPercent"].is_u64());
        assert!(json["extraRarityBoost"].is_u64());
    }

    #[test]
    fn test_traits_output() {
        let app = App::new(AppConfig::default()).unwrap();
        let out = app.run(&block(), OutputMode::Traits).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["attributes"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_text_output_uses_glyphs() {
        let mut config = AppConfig::default();
        config.render.alive_glyph = "#".to_string();
        config.render.dead_glyph = ".".to_string();
        config.render.show_legend = false;
        let app = App::new(config).unwrap();
        let out = app.run(&block(), OutputMode::Text).unwrap();
        assert!(out.chars().all(|c| matches!(c, '#' | '.' | '\n')));
        assert!(out.contains('#'));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.modifiers.mod1 = 2.0;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_engine_errors_surface() {
        let app = App::new(AppConfig::default()).unwrap();
        let err = app
            .run(&Block::new("0x12", Vec::new()), OutputMode::Attributes)
            .unwrap_err();
        assert!(err.to_string().contains("Malformed block data"));
    }
}
