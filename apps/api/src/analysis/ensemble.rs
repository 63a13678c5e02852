//! Ensemble aggregation: folds weighted model votes into one legitimacy score.
//!
//! Score bands are asymmetric: every band below 50 is a ghost tier, and `Low` covers
//! the whole legitimate side. A legitimate verdict is always reported as `Low` risk.

use serde::{Deserialize, Serialize};

use crate::analysis::models::ModelPrediction;

pub const DECISION_BOUNDARY: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(ensemble_score: f64) -> Self {
        if ensemble_score < 20.0 {
            Self::Critical
        } else if ensemble_score < 35.0 {
            Self::High
        } else if ensemble_score < DECISION_BOUNDARY {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleOutcome {
    pub ensemble_score: f64,
    pub is_ghost_job: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
}

/// Weighted mean of the votes' legitimacy scores, normalized by the sum of weights.
/// No votes (or zero total weight) gives the neutral midpoint.
pub fn aggregate(predictions: &[ModelPrediction]) -> EnsembleOutcome {
    let total_weight: f64 = predictions.iter().map(|p| p.weight).sum();
    // Summed as offsets from the midpoint so all-neutral votes land exactly on 50.
    let ensemble_score = if total_weight > 0.0 {
        let offset: f64 = predictions
            .iter()
            .map(|p| (p.legitimacy_score() - DECISION_BOUNDARY) * p.weight)
            .sum();
        (DECISION_BOUNDARY + offset / total_weight).clamp(0.0, 100.0)
    } else {
        DECISION_BOUNDARY
    };

    EnsembleOutcome {
        ensemble_score,
        is_ghost_job: ensemble_score < DECISION_BOUNDARY,
        confidence: ((ensemble_score - DECISION_BOUNDARY).abs() * 2.0).min(100.0),
        risk_level: RiskLevel::from_score(ensemble_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Label;

    fn vote(label: Label, confidence: f64, weight: f64) -> ModelPrediction {
        ModelPrediction {
            name: "test".to_string(),
            label,
            confidence,
            weight,
            features: vec![],
            rationale: String::new(),
        }
    }

    #[test]
    fn test_empty_predictions_are_neutral() {
        let outcome = aggregate(&[]);
        assert_eq!(outcome.ensemble_score, 50.0);
        assert!(!outcome.is_ghost_job);
        assert_eq!(outcome.confidence, 0.0);
        assert_eq!(outcome.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_neutral_votes_land_on_midpoint() {
        let outcome = aggregate(&[
            vote(Label::Legitimate, 50.0, 0.15),
            vote(Label::Legitimate, 50.0, 0.20),
            vote(Label::Legitimate, 50.0, 0.25),
            vote(Label::Legitimate, 50.0, 0.25),
            vote(Label::Legitimate, 50.0, 0.10),
            vote(Label::Legitimate, 50.0, 0.05),
        ]);
        assert_eq!(outcome.ensemble_score, 50.0);
        assert!(!outcome.is_ghost_job);
    }

    #[test]
    fn test_weights_are_normalized() {
        // (80*2 + (100-60)*2) / 4 = 60
        let outcome = aggregate(&[
            vote(Label::Legitimate, 80.0, 2.0),
            vote(Label::Ghost, 60.0, 2.0),
        ]);
        assert!((outcome.ensemble_score - 60.0).abs() < 1e-9);
        assert!((outcome.confidence - 20.0).abs() < 1e-9);
        assert!(!outcome.is_ghost_job);
    }

    #[test]
    fn test_unnormalized_weights_match_normalized() {
        let a = aggregate(&[
            vote(Label::Legitimate, 70.0, 0.2),
            vote(Label::Ghost, 90.0, 0.1),
        ]);
        let b = aggregate(&[
            vote(Label::Legitimate, 70.0, 2.0),
            vote(Label::Ghost, 90.0, 1.0),
        ]);
        assert!((a.ensemble_score - b.ensemble_score).abs() < 1e-9);
    }

    #[test]
    fn test_ghost_flag_tracks_boundary() {
        let ghost = aggregate(&[vote(Label::Ghost, 51.0, 1.0)]);
        assert!(ghost.is_ghost_job);
        assert_eq!(ghost.risk_level, RiskLevel::Medium);

        let boundary = aggregate(&[vote(Label::Legitimate, 50.0, 1.0)]);
        assert!(!boundary.is_ghost_job);
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(19.99), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(20.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(34.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(35.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::Low);
    }

    #[test]
    fn test_legitimate_verdict_is_always_low_risk() {
        for confidence in [50.0, 50.5, 60.0, 99.0] {
            let outcome = aggregate(&[vote(Label::Legitimate, confidence, 1.0)]);
            assert!(!outcome.is_ghost_job);
            assert_eq!(outcome.risk_level, RiskLevel::Low);
        }
    }
}
