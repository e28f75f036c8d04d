//! Classification of normalized tiles

use crate::RecogResult;
use crate::interpret::{Decision, Ranking, ScoreInterpreter};
use crate::registry::ScorerRegistry;
use crate::tile::NormalizedTile;
use std::time::Instant;
use tracing::{info, warn};

/// Classify a tile with the active scorer, folding failures into the decision
///
/// A failure yields class -1, empty labels, confidence 0 and the reason in
/// `error`.
pub fn classify(tile: &NormalizedTile, registry: &ScorerRegistry) -> Decision {
    classify_with(tile, registry, &ScoreInterpreter::default())
}

/// [`classify`] with an explicit interpreter
pub fn classify_with(
    tile: &NormalizedTile,
    registry: &ScorerRegistry,
    interpreter: &ScoreInterpreter,
) -> Decision {
    try_classify_with(tile, registry, interpreter).unwrap_or_else(|e| {
        warn!(error = %e, "classification failed");
        Decision::failed(e.to_string())
    })
}

/// Classify a tile with the active scorer
///
/// # Errors
///
/// [`crate::RecogError::ModelNotLoaded`] before any scorer is installed, and
/// whatever the scorer reports.
pub fn try_classify(tile: &NormalizedTile, registry: &ScorerRegistry) -> RecogResult<Decision> {
    try_classify_with(tile, registry, &ScoreInterpreter::default())
}

/// [`try_classify`] with an explicit interpreter
pub fn try_classify_with(
    tile: &NormalizedTile,
    registry: &ScorerRegistry,
    interpreter: &ScoreInterpreter,
) -> RecogResult<Decision> {
    let start = Instant::now();
    let active = registry.require_active()?;
    let scores = active.scorer().score(tile)?;
    let decision = interpreter.interpret(&scores, active.labels());

    let ranking = Ranking::of(&scores);
    info!(
        model = %active.kind(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        confidence = decision.confidence,
        top1 = %decision.top1_label,
        top1_score = ranking.top1.map_or(0.0, |(_, s)| s),
        top2 = %decision.top2_label,
        top2_score = ranking.top2.map_or(0.0, |(_, s)| s),
        diff = ranking.diff(),
        label = %decision.label,
        class_index = decision.class_index,
        "classified"
    );
    Ok(decision)
}
