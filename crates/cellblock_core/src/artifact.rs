//! Block in, artwork data out.
//!
//! `generate` wires the seed stream, geometry, simulation and classifier
//! together. The result is a pure function of the block and the canvas
//! parameters; only the attached [`RunMetrics`] varies between runs.

use crate::classify::{classify, symmetry_roll, ClassificationResult};
use crate::config::AppConfig;
use crate::error::{CaError, Result};
use crate::geometry::{CanvasGeometry, Dimensions};
use crate::injection::InjectionPoint;
use crate::metrics::RunMetrics;
use crate::render::{HistoryView, RenderAdapter, RenderFrame};
use crate::rule::RuleTable;
use crate::seed::SeedStream;
use crate::simulation::CaSimulation;
use cellblock_data::{Attributes, Block, GenerationHistory, SymmetryMode};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub seed: u64,
    pub rule: RuleTable,
    pub geometry: CanvasGeometry,
    pub dimensions: Dimensions,
    pub symmetry: SymmetryMode,
    pub classification: ClassificationResult,
    pub attributes: Attributes,
    pub injection_points: Vec<InjectionPoint>,
    pub history: GenerationHistory,
    pub metrics: RunMetrics,
}

impl Artifact {
    pub fn view(&self) -> HistoryView<'_> {
        HistoryView::new(&self.history)
    }

    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            view: self.view(),
            symmetry: self.symmetry,
            legend: self.rule.legend(),
        }
    }

    pub fn render<R: RenderAdapter>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.frame())
    }
}

/// Runs the full pipeline for `block`.
///
/// The config is validated first, so hand-built configs get the same bounds
/// as ones loaded from disk.
pub fn generate(block: &Block, config: &AppConfig) -> Result<Artifact> {
    config
        .validate()
        .map_err(|e| CaError::dimension(e.to_string()))?;
    let stream = SeedStream::from_block(block)?;
    let geometry = CanvasGeometry::from_modifier(
        config.canvas.width,
        config.canvas.height,
        config.modifiers.mod1,
    )?;
    let dimensions = geometry.dimensions()?;
    generate_with(&stream, geometry, dimensions)
}

/// Runs the pipeline from an existing stream, e.g. one built from fixed pairs.
pub fn generate_with(
    stream: &SeedStream,
    geometry: CanvasGeometry,
    dimensions: Dimensions,
) -> Result<Artifact> {
    let rule_index = stream.rule_index();
    let point_count = stream.injection_point_count();
    let rarity_draw = stream.rarity_draw();

    let classification = classify(rule_index);
    let rarity = symmetry_roll(&classification, rarity_draw);

    let mut sim = CaSimulation::new(dimensions);
    sim.init(i64::from(rule_index), stream.pairs().to_vec(), point_count)?;
    sim.generate_all()?;

    let rule = sim.rule().copied().unwrap_or_else(|| RuleTable::from_index(rule_index));
    let injection_points = sim
        .schedule()
        .points(dimensions.row_height, dimensions.row_width);
    let (history, metrics) = sim.into_parts();

    let attributes = Attributes {
        rule: rule_index,
        class: classification.wolfram_class,
        scarcity_boost_percent: classification.boost(),
        symmetry: rarity.symmetry_mode,
        extra_rarity_boost: rarity.extra_rarity_boost,
    };

    tracing::info!(
        seed = stream.seed(),
        rule = rule_index,
        class = %classification.wolfram_class,
        symmetry = %rarity.symmetry_mode,
        columns = dimensions.row_width,
        rows = dimensions.row_height,
        injections = metrics.injections,
        "Artifact generated"
    );

    Ok(Artifact {
        seed: stream.seed(),
        rule,
        geometry,
        dimensions,
        symmetry: rarity.symmetry_mode,
        classification,
        attributes,
        injection_points,
        history,
        metrics,
    })
}
