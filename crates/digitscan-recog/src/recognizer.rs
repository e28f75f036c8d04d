//! End-to-end recognition of raw images

use crate::classify::try_classify_with;
use crate::debug::DebugSink;
use crate::interpret::{Decision, ScoreInterpreter};
use crate::normalize::normalize_with;
use crate::options::{ImageSource, NormalizeOptions};
use crate::registry::{ActiveScorer, ScorerRegistry};
use crate::scorer::ScorerKind;
use crate::{RecogError, RecogResult};
use digitscan_core::Pix;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Per-request settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizeConfig {
    /// Where the image came from
    pub source: ImageSource,
    /// Sharpen natural captures
    #[serde(alias = "enhanceImage")]
    pub enhance: bool,
    /// Scorer to use; `None` keeps whatever is active
    pub model: Option<ScorerKind>,
}

impl Default for RecognizeConfig {
    fn default() -> Self {
        Self {
            source: ImageSource::Natural,
            enhance: true,
            model: None,
        }
    }
}

impl RecognizeConfig {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    pub fn with_model(mut self, model: ScorerKind) -> Self {
        self.model = Some(model);
        self
    }
}

/// Loads a scorer configuration of the requested kind
pub type ScorerLoader = dyn Fn(ScorerKind) -> RecogResult<ActiveScorer> + Send + Sync;

/// Normalizes and classifies raw images against a shared registry
pub struct Recognizer {
    registry: Arc<ScorerRegistry>,
    options: NormalizeOptions,
    interpreter: ScoreInterpreter,
    loader: Option<Arc<ScorerLoader>>,
    sink: Option<Arc<dyn DebugSink>>,
}

impl Recognizer {
    pub fn new(registry: Arc<ScorerRegistry>) -> Self {
        Self {
            registry,
            options: NormalizeOptions::default(),
            interpreter: ScoreInterpreter::default(),
            loader: None,
            sink: None,
        }
    }

    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_interpreter(mut self, interpreter: ScoreInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Loader used when a request names a model that is not active
    pub fn with_loader<F>(mut self, loader: F) -> Self
    where
        F: Fn(ScorerKind) -> RecogResult<ActiveScorer> + Send + Sync + 'static,
    {
        self.loader = Some(Arc::new(loader));
        self
    }

    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn registry(&self) -> &Arc<ScorerRegistry> {
        &self.registry
    }

    /// Recognize one image; every failure is folded into the decision
    pub fn recognize(&self, image: &Pix, config: &RecognizeConfig) -> Decision {
        let start = Instant::now();
        let decision = self.try_recognize(image, config).unwrap_or_else(|e| {
            warn!(error = %e, source = ?config.source, "recognition failed");
            Decision::failed(e.to_string())
        });
        info!(
            source = ?config.source,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            label = %decision.label,
            "request done"
        );
        decision
    }

    /// Recognize one image
    pub fn try_recognize(&self, image: &Pix, config: &RecognizeConfig) -> RecogResult<Decision> {
        if let Some(kind) = config.model {
            self.select_model(kind)?;
        }
        self.emit("input", image);

        let tile = normalize_with(image, config.source, config.enhance, &self.options)?;
        debug!(ink = tile.ink_count(), "tile normalized");
        if self.sink.is_some() {
            self.emit("tile", &tile.to_pix()?);
        }

        try_classify_with(&tile, &self.registry, &self.interpreter)
    }

    fn select_model(&self, kind: ScorerKind) -> RecogResult<()> {
        match &self.loader {
            Some(loader) => {
                self.registry.ensure_loaded(kind, |k| loader(k))?;
            }
            None => {
                if self.registry.status().kind != Some(kind) {
                    return Err(RecogError::ModelNotLoaded);
                }
            }
        }
        Ok(())
    }

    fn emit(&self, tag: &str, pix: &Pix) {
        if let Some(sink) = &self.sink {
            sink.submit(tag, pix);
        }
    }
}
