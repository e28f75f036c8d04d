//! Score interpretation
//!
//! Ranks per-class scores and turns them into a [`Decision`], falling back to
//! the unknown label when the top two scores are too close.

use crate::labels::{LabelTable, UNKNOWN_LABEL};
use crate::options::InterpretOptions;
use serde::{Deserialize, Serialize};

/// Outcome of one classification request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Predicted label, `"?"` when ambiguous, empty on failure
    #[serde(rename = "text")]
    pub label: String,
    /// Top-1 score
    pub confidence: f32,
    /// Predicted class, -1 when ambiguous or failed
    pub class_index: i32,
    /// Label of the best class
    #[serde(rename = "top_1_label")]
    pub top1_label: String,
    /// Label of the runner-up class
    #[serde(rename = "top_2_label")]
    pub top2_label: String,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Decision {
    /// Uniform result for a request that could not be classified
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            confidence: 0.0,
            class_index: -1,
            top1_label: String::new(),
            top2_label: String::new(),
            error: Some(reason.into()),
        }
    }

    /// True when a definite class was chosen
    pub fn is_recognized(&self) -> bool {
        self.class_index >= 0 && self.error.is_none()
    }
}

/// Top-two ranking of a score vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub top1: Option<(usize, f32)>,
    pub top2: Option<(usize, f32)>,
}

impl Ranking {
    /// Rank scores descending; ties go to the higher index, as with a
    /// stable ascending sort read from the end
    pub fn of(scores: &[f32]) -> Self {
        let mut top1: Option<(usize, f32)> = None;
        let mut top2: Option<(usize, f32)> = None;
        for (i, &s) in scores.iter().enumerate() {
            match top1 {
                Some((_, s1)) if s < s1 => {
                    if top2.is_none_or(|(_, s2)| s >= s2) {
                        top2 = Some((i, s));
                    }
                }
                _ => {
                    top2 = top1;
                    top1 = Some((i, s));
                }
            }
        }
        Self { top1, top2 }
    }

    /// Gap between the two best scores; a missing runner-up counts as 0
    pub fn diff(&self) -> f32 {
        let s1 = self.top1.map_or(0.0, |(_, s)| s);
        let s2 = self.top2.map_or(0.0, |(_, s)| s);
        s1 - s2
    }
}

/// Turns score vectors into decisions
#[derive(Debug, Clone, Default)]
pub struct ScoreInterpreter {
    options: InterpretOptions,
}

impl ScoreInterpreter {
    pub fn new(options: InterpretOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InterpretOptions {
        &self.options
    }

    /// Interpret scores; never fails
    ///
    /// A gap below the ambiguity threshold yields label `"?"` and class -1
    /// while still reporting the true top-1 and top-2 labels.
    pub fn interpret(&self, scores: &[f32], labels: &LabelTable) -> Decision {
        let ranking = Ranking::of(scores);
        let Some((idx1, s1)) = ranking.top1 else {
            return Decision {
                label: UNKNOWN_LABEL.to_string(),
                confidence: 0.0,
                class_index: -1,
                top1_label: UNKNOWN_LABEL.to_string(),
                top2_label: UNKNOWN_LABEL.to_string(),
                error: None,
            };
        };

        let top1_label = labels.label_or_unknown(idx1).to_string();
        let top2_label = ranking
            .top2
            .map_or(UNKNOWN_LABEL, |(i, _)| labels.label_or_unknown(i))
            .to_string();

        let (label, class_index) = if ranking.diff() < self.options.ambiguity_threshold {
            (UNKNOWN_LABEL.to_string(), -1)
        } else {
            (top1_label.clone(), idx1 as i32)
        };

        Decision {
            label,
            confidence: s1,
            class_index,
            top1_label,
            top2_label,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_scores() {
        let scores = [0.10, 0.52, 0.50, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let d = ScoreInterpreter::default().interpret(&scores, &LabelTable::digits());
        assert_eq!(d.label, "?");
        assert_eq!(d.class_index, -1);
        assert_eq!(d.confidence, 0.52);
        assert_eq!(d.top1_label, "1");
        assert_eq!(d.top2_label, "2");
        assert!(!d.is_recognized());
    }

    #[test]
    fn test_confident_scores() {
        let scores = [0.05, 0.05, 0.1, 0.7, 0.1];
        let d = ScoreInterpreter::default().interpret(&scores, &LabelTable::digits());
        assert_eq!(d.label, "3");
        assert_eq!(d.class_index, 3);
        // 0.1 appears at 2 and 4; the later index is the runner-up
        assert_eq!(d.top2_label, "4");
        assert!(d.is_recognized());
    }

    #[test]
    fn test_ties_prefer_higher_index() {
        let r = Ranking::of(&[0.2, 0.4, 0.4, 0.1]);
        assert_eq!(r.top1, Some((2, 0.4)));
        assert_eq!(r.top2, Some((1, 0.4)));
        let r = Ranking::of(&[0.3, 0.9, 0.3]);
        assert_eq!(r.top1, Some((1, 0.9)));
        assert_eq!(r.top2, Some((2, 0.3)));
        // all equal: the last two indices, highest first
        let r = Ranking::of(&[0.1; 10]);
        assert_eq!(r.top1, Some((9, 0.1)));
        assert_eq!(r.top2, Some((8, 0.1)));
    }

    #[test]
    fn test_tied_top_scores_name_higher_label() {
        let labels = LabelTable::digits();
        let mut scores = vec![0.0; 10];
        scores[3] = 0.5;
        scores[5] = 0.5;
        let d = ScoreInterpreter::default().interpret(&scores, &labels);
        assert_eq!(d.label, "?");
        assert_eq!(d.top1_label, "5");
        assert_eq!(d.top2_label, "3");
    }

    #[test]
    fn test_short_vectors() {
        let labels = LabelTable::digits();
        let d = ScoreInterpreter::default().interpret(&[0.9], &labels);
        assert_eq!(d.label, "0");
        assert_eq!(d.top2_label, "?");

        let d = ScoreInterpreter::default().interpret(&[], &labels);
        assert_eq!(d.label, "?");
        assert_eq!(d.class_index, -1);
        assert_eq!(d.confidence, 0.0);
    }

    #[test]
    fn test_missing_label() {
        let labels = LabelTable::from_labels(["a", "b"]);
        let d = ScoreInterpreter::default().interpret(&[0.1, 0.2, 0.7], &labels);
        assert_eq!(d.label, "?");
        assert_eq!(d.class_index, 2);
        assert_eq!(d.top2_label, "b");
    }

    #[test]
    fn test_serialized_shape() {
        let d = ScoreInterpreter::default().interpret(&[0.9, 0.1], &LabelTable::digits());
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["text"], "0");
        assert_eq!(json["class_index"], 0);
        assert_eq!(json["top_1_label"], "0");
        assert_eq!(json["top_2_label"], "1");
        assert!(json.get("error").is_none());

        let failed = serde_json::to_value(Decision::failed("model not loaded")).unwrap();
        assert_eq!(failed["text"], "");
        assert_eq!(failed["error"], "model not loaded");
    }
}
