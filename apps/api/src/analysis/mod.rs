// Ghost-job analysis engine.
// text → features → scorer bank → ensemble → conditions + report.
// Pure and synchronous: no I/O, no shared mutable state. The only non-determinism
// is scorer confidence jitter, drawn from the random source handed to each call.

pub mod conditions;
pub mod ensemble;
pub mod features;
pub mod handlers;
pub mod models;
pub mod report;
pub mod result;
pub mod text;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod fixtures;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::analysis::models::{ModelInfo, Scorer};
use crate::analysis::result::AnalysisResult;
use crate::analysis::text::TokenizedText;
use crate::analysis::vocabulary::VOCABULARY_VERSION;

/// Runs the full pipeline over a registry of scorers.
pub struct GhostJobDetector {
    scorers: Vec<Box<dyn Scorer>>,
    /// When set, every call seeds its jitter source with this value.
    seed: Option<u64>,
}

impl Default for GhostJobDetector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GhostJobDetector {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_scorers(models::default_registry(), seed)
    }

    pub fn with_scorers(scorers: Vec<Box<dyn Scorer>>, seed: Option<u64>) -> Self {
        Self { scorers, seed }
    }

    pub fn catalog(&self) -> Vec<ModelInfo> {
        models::catalog(&self.scorers)
    }

    /// Analyzes one posting. Reproducible only when the detector was built with a seed.
    pub fn analyze(&self, description: &str) -> AnalysisResult {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.analyze_with_rng(description, &mut rng)
    }

    pub fn analyze_with_rng(&self, description: &str, rng: &mut dyn RngCore) -> AnalysisResult {
        let tokenized = TokenizedText::new(description);
        let features = features::extract_tokenized(&tokenized, description);
        debug!(
            word_count = features.text.word_count,
            sentence_count = features.text.sentence_count,
            "features extracted"
        );

        let predictions: Vec<_> = self
            .scorers
            .iter()
            .map(|scorer| scorer.predict(&features, &tokenized, &mut *rng))
            .collect();

        let outcome = ensemble::aggregate(&predictions);
        debug!(
            ensemble_score = outcome.ensemble_score,
            is_ghost_job = outcome.is_ghost_job,
            risk_level = ?outcome.risk_level,
            "ensemble aggregated"
        );

        let conditions = conditions::evaluate_tokenized(&features, &tokenized);
        debug!(
            ghost_flags = conditions.detected_ghost().count(),
            legitimate_flags = conditions.detected_legitimate().count(),
            "conditions evaluated"
        );

        AnalysisResult {
            is_ghost_job: outcome.is_ghost_job,
            confidence: outcome.confidence,
            risk_level: outcome.risk_level,
            overall_score: outcome.ensemble_score.round().clamp(0.0, 100.0) as u32,
            summary: report::summarize(
                outcome.is_ghost_job,
                outcome.confidence,
                outcome.ensemble_score,
            ),
            recommendations: report::recommend(outcome.is_ghost_job, &features),
            detailed_analysis: report::detail_tokenized(&features, &tokenized, description),
            model_predictions: predictions,
            feature_analysis: features,
            ensemble_score: outcome.ensemble_score,
            ghost_conditions: conditions.ghost_conditions,
            legitimate_conditions: conditions.legitimate_conditions,
            vocabulary_version: VOCABULARY_VERSION.to_string(),
        }
    }
}

/// Analyzes one posting with the default scorers and an unseeded jitter source.
#[allow(dead_code)]
pub fn analyze(description: &str) -> AnalysisResult {
    GhostJobDetector::default().analyze(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ensemble::RiskLevel;
    use crate::analysis::fixtures::{GHOST_POSTING, LEGIT_POSTING, URGENT_FREEMAIL_POSTING};
    use crate::analysis::models::{Label, ModelPrediction};
    use crate::analysis::features::FeatureBundle;

    fn every_percentage(result: &AnalysisResult) -> Vec<f64> {
        let mut values = vec![result.confidence, result.ensemble_score];
        values.extend(result.model_predictions.iter().map(|p| p.confidence));
        values.extend(
            result
                .ghost_conditions
                .iter()
                .chain(&result.legitimate_conditions)
                .map(|c| c.confidence),
        );
        let f = &result.feature_analysis;
        values.extend([
            f.text.tfidf_score,
            f.text.vagueness_density,
            f.text.buzzword_ratio,
            f.text.specificity_score,
            f.text.sentiment_polarity,
            f.text.readability_index,
            f.text.keyword_diversity,
            f.meta.salary_transparency,
            f.meta.contact_info_score,
            f.meta.company_legitimacy,
            f.meta.posting_urgency,
            f.meta.requirement_clarity,
            f.meta.benefits_specificity,
            f.behavioral.application_process_clarity,
            f.linguistic.grammar_quality,
            f.linguistic.professional_tone,
            f.linguistic.clarity_index,
        ]);
        values
    }

    #[test]
    fn test_empty_input_is_neutral_and_finite() {
        let result = analyze("");
        assert!((result.ensemble_score - 50.0).abs() < 1e-9);
        assert!(!result.is_ghost_job);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.overall_score, 50);
        for value in every_percentage(&result) {
            assert!(value.is_finite());
        }
        // no NaN or Infinity can survive into the JSON contract
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_percentages_in_range_for_assorted_inputs() {
        let detector = GhostJobDetector::new(Some(3));
        let long = LEGIT_POSTING.repeat(5);
        for text in [
            "",
            " ",
            "???",
            "a",
            LEGIT_POSTING,
            GHOST_POSTING,
            URGENT_FREEMAIL_POSTING,
            long.as_str(),
        ] {
            let result = detector.analyze(text);
            for value in every_percentage(&result) {
                assert!((0.0..=100.0).contains(&value), "{value} for {text:?}");
            }
            assert!(result.overall_score <= 100);
        }
    }

    #[test]
    fn test_ghost_flag_matches_score_and_legitimate_is_low_risk() {
        for seed in 0..25 {
            let detector = GhostJobDetector::new(Some(seed));
            for text in [LEGIT_POSTING, GHOST_POSTING, URGENT_FREEMAIL_POSTING, ""] {
                let result = detector.analyze(text);
                assert_eq!(result.is_ghost_job, result.ensemble_score < 50.0);
                if !result.is_ghost_job {
                    assert_eq!(result.risk_level, RiskLevel::Low);
                }
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let detector = GhostJobDetector::new(Some(42));
        let first = serde_json::to_string(&detector.analyze(LEGIT_POSTING)).unwrap();
        let second = serde_json::to_string(&detector.analyze(LEGIT_POSTING)).unwrap();
        assert_eq!(first, second);

        let other = GhostJobDetector::new(Some(42));
        let third = serde_json::to_string(&other.analyze(LEGIT_POSTING)).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn test_verdicts_for_fixtures() {
        let detector = GhostJobDetector::new(Some(9));

        let legit = detector.analyze(LEGIT_POSTING);
        assert!(!legit.is_ghost_job);
        assert_eq!(legit.risk_level, RiskLevel::Low);
        assert!(legit.ensemble_score > 70.0, "{}", legit.ensemble_score);

        let ghost = detector.analyze(GHOST_POSTING);
        assert!(ghost.is_ghost_job);
        assert!(
            matches!(ghost.risk_level, RiskLevel::Critical | RiskLevel::High),
            "{:?}",
            ghost.risk_level
        );
    }

    #[test]
    fn test_light_contextual_label_follows_contextual_label() {
        for seed in 0..10 {
            let detector = GhostJobDetector::new(Some(seed));
            for text in [LEGIT_POSTING, GHOST_POSTING, URGENT_FREEMAIL_POSTING] {
                let result = detector.analyze(text);
                let label_of = |name: &str| {
                    result
                        .model_predictions
                        .iter()
                        .find(|p| p.name == name)
                        .map(|p| p.label)
                };
                assert_eq!(label_of("BERT"), label_of("DistilBERT"));
            }
        }
    }

    #[test]
    fn test_conditions_are_not_reconciled_with_verdict() {
        // Legitimate overall, but the posting still uses pressure phrasing.
        let text = format!("{LEGIT_POSTING} Apply now, spots are limited, don't miss this!");
        let result = GhostJobDetector::new(Some(1)).analyze(&text);
        assert!(!result.is_ghost_job);
        assert!(result
            .ghost_conditions
            .iter()
            .any(|c| c.name == "High-pressure tactics" && c.detected));
    }

    #[test]
    fn test_urgent_freemail_posting_flags_urgency() {
        let result = GhostJobDetector::new(Some(5)).analyze(URGENT_FREEMAIL_POSTING);
        assert!(result
            .ghost_conditions
            .iter()
            .any(|c| c.name == "Urgent language indicators" && c.detected));
    }

    #[test]
    fn test_salary_range_surfaces_in_result() {
        let result = analyze("Compensation: $60,000–$75,000 plus benefits.");
        assert_eq!(result.feature_analysis.meta.salary_transparency, 90.0);
    }

    struct AlwaysGhost;

    impl Scorer for AlwaysGhost {
        fn name(&self) -> &'static str {
            "AlwaysGhost"
        }

        fn weight(&self) -> f64 {
            3.0
        }

        fn predict(
            &self,
            _features: &FeatureBundle,
            _text: &TokenizedText,
            _rng: &mut dyn RngCore,
        ) -> ModelPrediction {
            ModelPrediction {
                name: self.name().to_string(),
                label: Label::Ghost,
                confidence: 90.0,
                weight: self.weight(),
                features: vec![],
                rationale: String::new(),
            }
        }
    }

    #[test]
    fn test_custom_registry() {
        let detector = GhostJobDetector::with_scorers(vec![Box::new(AlwaysGhost)], None);
        let result = detector.analyze(LEGIT_POSTING);
        assert!((result.ensemble_score - 10.0).abs() < 1e-9);
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert_eq!(result.model_predictions.len(), 1);
        assert_eq!(detector.catalog()[0].normalized_weight, 1.0);
    }

    #[test]
    fn test_result_uses_contract_field_names() {
        let json = serde_json::to_value(analyze(GHOST_POSTING)).unwrap();
        for key in [
            "isGhostJob",
            "confidence",
            "riskLevel",
            "overallScore",
            "modelPredictions",
            "featureAnalysis",
            "ensembleScore",
            "ghostConditions",
            "legitimateConditions",
            "summary",
            "recommendations",
            "detailedAnalysis",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
