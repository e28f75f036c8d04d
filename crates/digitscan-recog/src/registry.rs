//! The process-wide scorer configuration
//!
//! A [`ScorerRegistry`] holds at most one [`ActiveScorer`]: a scorer plus the
//! label table it was trained with. Readers clone an `Arc` under a short
//! read lock; a model switch builds the new configuration first and then
//! replaces the whole value under the write lock, so a request sees either
//! the old or the new configuration, never a mix.

use crate::labels::LabelTable;
use crate::scorer::{Scorer, ScorerKind};
use crate::{RecogError, RecogResult};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// A loaded scorer and its labels
pub struct ActiveScorer {
    scorer: Box<dyn Scorer>,
    labels: LabelTable,
}

impl ActiveScorer {
    pub fn new(scorer: impl Scorer + 'static, labels: LabelTable) -> Self {
        Self {
            scorer: Box::new(scorer),
            labels,
        }
    }

    pub fn kind(&self) -> ScorerKind {
        self.scorer.kind()
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}

impl std::fmt::Debug for ActiveScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveScorer")
            .field("kind", &self.kind())
            .field("labels", &self.labels.len())
            .finish()
    }
}

/// Health report of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatus {
    /// Whether a configuration is loaded
    #[serde(rename = "model_loaded")]
    pub loaded: bool,
    /// Kind of the loaded configuration
    #[serde(rename = "current_model")]
    pub kind: Option<ScorerKind>,
}

/// Holds the active scorer configuration
#[derive(Debug, Default)]
pub struct ScorerRegistry {
    active: RwLock<Option<Arc<ActiveScorer>>>,
}

impl ScorerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a configuration already loaded
    pub fn with_active(active: ActiveScorer) -> Self {
        Self {
            active: RwLock::new(Some(Arc::new(active))),
        }
    }

    /// Current configuration, if any
    pub fn active(&self) -> Option<Arc<ActiveScorer>> {
        let guard = self.active.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Current configuration or [`RecogError::ModelNotLoaded`]
    pub fn require_active(&self) -> RecogResult<Arc<ActiveScorer>> {
        self.active().ok_or(RecogError::ModelNotLoaded)
    }

    /// Install a configuration, replacing any previous one
    pub fn install(&self, active: ActiveScorer) {
        let kind = active.kind();
        let mut guard = self.active.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(active));
        info!(model = %kind, "scorer installed");
    }

    /// Load a configuration of `kind` and make it active
    ///
    /// The loader runs without holding the lock. If it fails, the previous
    /// configuration stays in place and the error is returned.
    pub fn switch<F>(&self, kind: ScorerKind, loader: F) -> RecogResult<()>
    where
        F: FnOnce(ScorerKind) -> RecogResult<ActiveScorer>,
    {
        info!(model = %kind, "switching scorer");
        let loaded = loader(kind).inspect_err(|e| {
            warn!(model = %kind, error = %e, "scorer load failed");
        })?;
        if loaded.kind() != kind {
            return Err(RecogError::InvalidParameter(format!(
                "loader for {kind} produced a {} scorer",
                loaded.kind()
            )));
        }
        self.install(loaded);
        Ok(())
    }

    /// Load `kind` only if no configuration, or one of another kind, is active
    ///
    /// Returns whether a load happened.
    pub fn ensure_loaded<F>(&self, kind: ScorerKind, loader: F) -> RecogResult<bool>
    where
        F: FnOnce(ScorerKind) -> RecogResult<ActiveScorer>,
    {
        if self.active().is_some_and(|a| a.kind() == kind) {
            return Ok(false);
        }
        self.switch(kind, loader)?;
        Ok(true)
    }

    /// Drop the active configuration
    pub fn clear(&self) {
        let mut guard = self.active.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn status(&self) -> RegistryStatus {
        let kind = self.active().map(|a| a.kind());
        RegistryStatus {
            loaded: kind.is_some(),
            kind,
        }
    }
}
