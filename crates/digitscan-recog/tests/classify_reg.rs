//! Classification regression test
//!
//! Tests:
//!   (1) A canvas "7" is recognized by a template tile model
//!   (2) Close top-two scores produce the unknown label
//!   (3) Fused features of the wrong length never reach the classifier
//!   (4) Switching scorers, including a failed switch
//!   (5) End-to-end recognition through the registry
//!
//! Run with:
//! ```
//! cargo test -p digitscan-recog --test classify_reg
//! ```

use digitscan_recog::{
    ActiveScorer, CnnScorer, EmbeddingExtractor, ImageSource, LabelTable, LinearProjection,
    LinearSoftmax, NormalizedTile, ProbabilityClassifier, RecogError, RecogResult,
    RecognizeConfig, Recognizer, ScoreVector, Scorer, ScorerKind, ScorerRegistry, SvmScorer,
    classify, normalize, try_classify,
};
use digitscan_test::{RegParams, fixtures};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Nearest-template model: `logit_k = t_k . x - |t_k|^2 / 2`
fn template_model() -> LinearSoftmax {
    let mut weights = Vec::new();
    let mut bias = Vec::new();
    for digit in 0..10 {
        let canvas = fixtures::canvas_digit(digit, 60).expect("template fixture");
        let tile = normalize(&canvas, ImageSource::Canvas, false).expect("template tile");
        let values = tile.values();
        bias.push(-values.iter().map(|v| v * v).sum::<f32>() / 2.0);
        weights.extend_from_slice(values);
    }
    LinearSoftmax::new(weights, bias).expect("template model")
}

struct Fixed(ScorerKind, Vec<f32>);

impl Scorer for Fixed {
    fn kind(&self) -> ScorerKind {
        self.0
    }

    fn score(&self, _tile: &NormalizedTile) -> RecogResult<ScoreVector> {
        Ok(self.1.clone())
    }
}

struct Embedding(usize);

impl EmbeddingExtractor for Embedding {
    fn extract(&self, tile: &NormalizedTile) -> RecogResult<Vec<f32>> {
        Ok(tile.values().iter().take(self.0).copied().collect())
    }
}

struct CountingClassifier(Arc<AtomicUsize>);

impl ProbabilityClassifier for CountingClassifier {
    fn predict_proba(&self, _features: &[f32]) -> RecogResult<Vec<f32>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0.1; 10])
    }
}

#[test]
fn classify_reg() {
    init_tracing();
    let mut rp = RegParams::new("classify");

    // --- Test 1: template recognition ---
    let registry = ScorerRegistry::with_active(ActiveScorer::new(
        CnnScorer::new(template_model()),
        LabelTable::digits(),
    ));
    let seven = fixtures::canvas_digit(7, 60).expect("seven");
    let tile = normalize(&seven, ImageSource::Canvas, false).expect("seven tile");
    rp.write_pix(&tile.to_pix().expect("seven pix")).expect("write seven");
    let decision = classify(&tile, &registry);
    assert_eq!(decision.label, "7");
    rp.compare_values(7.0, decision.class_index as f64, 0.0);
    assert_eq!(decision.top1_label, "7");
    assert!(decision.confidence > 0.9);
    assert!(decision.is_recognized());

    // --- Test 2: ambiguity ---
    registry.install(ActiveScorer::new(
        Fixed(ScorerKind::Cnn, vec![0.10, 0.52, 0.50]),
        LabelTable::digits(),
    ));
    let decision = classify(&tile, &registry);
    assert_eq!(decision.label, "?");
    rp.compare_values(-1.0, decision.class_index as f64, 0.0);
    rp.compare_values(0.52, decision.confidence as f64, 1e-6);
    assert_eq!(decision.top1_label, "1");
    assert_eq!(decision.top2_label, "2");
    let json = serde_json::to_string(&decision).expect("decision json");
    rp.compare_strings(
        br#"{"text":"?","confidence":0.52,"class_index":-1,"top_1_label":"1","top_2_label":"2"}"#,
        json.as_bytes(),
    );

    // --- Test 3: feature length mismatch ---
    // 1296 HOG values + 7 embedding values = 1303, projection expects 1300
    let calls = Arc::new(AtomicUsize::new(0));
    let projection =
        LinearProjection::new(vec![0.0; 1300], vec![0.0; 1300 * 16], 16).expect("projection");
    let svm = SvmScorer::new(
        Embedding(7),
        projection,
        CountingClassifier(calls.clone()),
    );
    rp.compare_values(1303.0, svm.features(&tile).expect("features").len() as f64, 0.0);
    registry.install(ActiveScorer::new(svm, LabelTable::digits()));
    let result = try_classify(&tile, &registry);
    assert!(matches!(
        result,
        Err(RecogError::FeatureDimensionMismatch {
            expected: 1300,
            actual: 1303
        })
    ));
    rp.compare_values(0.0, calls.load(Ordering::SeqCst) as f64, 0.0);
    let decision = classify(&tile, &registry);
    rp.compare_values(-1.0, decision.class_index as f64, 0.0);
    assert!(decision.error.is_some());

    // a matching projection lets the classifier run
    let projection =
        LinearProjection::new(vec![0.0; 1300], vec![0.0; 1300 * 16], 16).expect("projection");
    let svm = SvmScorer::new(
        Embedding(4),
        projection,
        CountingClassifier(calls.clone()),
    );
    registry.install(ActiveScorer::new(svm, LabelTable::digits()));
    let decision = classify(&tile, &registry);
    rp.compare_values(1.0, calls.load(Ordering::SeqCst) as f64, 0.0);
    // flat probabilities are ambiguous
    assert_eq!(decision.label, "?");

    // --- Test 4: switching ---
    registry
        .switch(ScorerKind::Cnn, |_| {
            Ok(ActiveScorer::new(CnnScorer::new(template_model()), LabelTable::digits()))
        })
        .expect("switch to cnn");
    assert_eq!(registry.status().kind, Some(ScorerKind::Cnn));

    let failed = registry.switch(ScorerKind::Svm, |_| {
        Err(RecogError::ScorerFailure("weights missing".to_string()))
    });
    assert!(failed.is_err());
    // the previous configuration stays active
    assert_eq!(registry.status().kind, Some(ScorerKind::Cnn));
    assert_eq!(classify(&tile, &registry).label, "7");

    // --- Test 5: end to end ---
    let recognizer = Recognizer::new(Arc::new(registry));
    let config = RecognizeConfig::new(ImageSource::Canvas).with_enhance(false);
    for digit in [0u8, 4, 9] {
        let canvas = fixtures::canvas_digit(digit, 60).expect("canvas");
        let decision = recognizer.recognize(&canvas, &config);
        assert_eq!(decision.label, digit.to_string());
    }
    // a model that was never loaded can't be selected without a loader
    let decision = recognizer.recognize(&seven, &config.clone().with_model(ScorerKind::Svm));
    assert_eq!(decision.error.as_deref(), Some("model not loaded"));

    assert!(rp.cleanup(), "classify regression test failed");
}
