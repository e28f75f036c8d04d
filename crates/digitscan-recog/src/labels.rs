//! Class index to label mapping

use crate::{RecogError, RecogResult};
use std::collections::BTreeMap;

/// Label reported for unknown or unrecognized classes
pub const UNKNOWN_LABEL: &str = "?";

/// Maps class indices to labels
///
/// Loaded once per scorer configuration and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: BTreeMap<usize, String>,
}

impl LabelTable {
    /// Parse the label file format, a JSON object keyed by class index:
    /// `{"0": "0", "1": "1", ...}`
    pub fn from_json(json: &str) -> RecogResult<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let labels = raw
            .into_iter()
            .map(|(k, v)| {
                k.trim()
                    .parse::<usize>()
                    .map(|i| (i, v))
                    .map_err(|_| RecogError::InvalidParameter(format!("class index '{k}'")))
            })
            .collect::<RecogResult<_>>()?;
        Ok(Self { labels })
    }

    /// Labels for classes `0..n` in order
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels
                .into_iter()
                .enumerate()
                .map(|(i, s)| (i, s.into()))
                .collect(),
        }
    }

    /// The ten decimal digits
    pub fn digits() -> Self {
        Self::from_labels((0..10).map(|d| d.to_string()))
    }

    /// Label of a class, if known
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    /// Label of a class, or `"?"`
    pub fn label_or_unknown(&self, index: usize) -> &str {
        self.get(index).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Serialize back to the label file format
    pub fn to_json(&self) -> RecogResult<String> {
        let raw: BTreeMap<String, &str> = self
            .labels
            .iter()
            .map(|(i, s)| (i.to_string(), s.as_str()))
            .collect();
        Ok(serde_json::to_string(&raw)?)
    }
}
