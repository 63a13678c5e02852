//! Model bank: six weighted heuristic scorers behind one `Scorer` trait.
//!
//! None of these are trained models. Each one is a fixed, explainable rule over a
//! slice of the `FeatureBundle` (or the raw text) that votes Ghost or Legitimate with a
//! confidence. The names mirror the model families they stand in for so the
//! ensemble output reads the same way the presentation layer labels it.
//!
//! Three scorers (RandomForest, XGBoost, DistilBERT) draw their confidence from a
//! model-specific band using the caller's random source. Results are therefore not
//! reproducible unless that source is seeded.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureBundle;
use crate::analysis::text::{clamp_pct, TokenizedText};
use crate::analysis::vocabulary::{
    GHOST_KEYWORDS, GHOST_PAIRS, LEGITIMATE_KEYWORDS, LEGITIMATE_PAIRS,
};

/// Confidence reported when a scorer has nothing to go on.
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Ghost,
    Legitimate,
}

/// One scorer's vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPrediction {
    pub name: String,
    pub label: Label,
    /// 0 – 100
    pub confidence: f64,
    /// (0, 1]; normalized by the aggregator
    pub weight: f64,
    pub features: Vec<String>,
    pub rationale: String,
}

impl ModelPrediction {
    /// Maps the vote onto the 0 – 100 legitimacy axis.
    pub fn legitimacy_score(&self) -> f64 {
        match self.label {
            Label::Legitimate => self.confidence,
            Label::Ghost => 100.0 - self.confidence,
        }
    }
}

/// Registry entry exposed by the model catalog endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    pub weight: f64,
    pub normalized_weight: f64,
    pub jittered: bool,
}

/// A single ensemble member. Implementations must be total over any input.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    fn weight(&self) -> f64;

    /// Whether `predict` draws its confidence from `rng`.
    fn jittered(&self) -> bool {
        false
    }

    fn predict(
        &self,
        features: &FeatureBundle,
        text: &TokenizedText,
        rng: &mut dyn RngCore,
    ) -> ModelPrediction;
}

/// The six scorers in ensemble order.
pub fn default_registry() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(LogisticScorer),
        Box::new(RandomForestScorer),
        Box::new(XgBoostScorer),
        Box::new(ContextualScorer),
        Box::new(LightContextualScorer),
        Box::new(EmbeddingOverlapScorer),
    ]
}

pub fn catalog(scorers: &[Box<dyn Scorer>]) -> Vec<ModelInfo> {
    let total: f64 = scorers.iter().map(|s| s.weight()).sum();
    scorers
        .iter()
        .map(|s| ModelInfo {
            name: s.name().to_string(),
            weight: s.weight(),
            normalized_weight: if total > 0.0 { s.weight() / total } else { 0.0 },
            jittered: s.jittered(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Band {
    low: f64,
    high: f64,
}

impl Band {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(self.low..=self.high)
    }

    /// Linear position inside the band; `fraction` is clamped to [0, 1].
    fn at(&self, fraction: f64) -> f64 {
        self.low + (self.high - self.low) * fraction.clamp(0.0, 1.0)
    }
}

/// A named feature value and its coefficient.
struct Term {
    feature: &'static str,
    coefficient: f64,
    value: f64,
}

impl Term {
    fn new(feature: &'static str, coefficient: f64, value: f64) -> Self {
        Self {
            feature,
            coefficient,
            value,
        }
    }
}

/// Result of a weighted linear rule.
struct LinearVote {
    signal: f64,
    label: Label,
    features: Vec<String>,
}

fn linear_vote(terms: &[Term], threshold: f64) -> LinearVote {
    let signal: f64 = terms.iter().map(|t| t.coefficient * t.value).sum();
    LinearVote {
        signal,
        label: if signal >= threshold {
            Label::Legitimate
        } else {
            Label::Ghost
        },
        features: terms.iter().map(|t| t.feature.to_string()).collect(),
    }
}

fn neutral(name: &str, weight: f64, reason: &str) -> ModelPrediction {
    ModelPrediction {
        name: name.to_string(),
        label: Label::Legitimate,
        confidence: NEUTRAL_CONFIDENCE,
        weight,
        features: vec![],
        rationale: reason.to_string(),
    }
}

const NO_TEXT: &str = "No text to score; neutral vote";

// ────────────────────────────────────────────────────────────────────────────
// Feature-driven scorers
// ────────────────────────────────────────────────────────────────────────────

/// Content-quality rule: keyword balance, pay transparency, requirement clarity, vagueness.
/// Confidence grows with the distance from the threshold.
pub struct LogisticScorer;

impl LogisticScorer {
    const THRESHOLD: f64 = 40.0;
    const BAND: Band = Band {
        low: 60.0,
        high: 85.0,
    };
}

impl Scorer for LogisticScorer {
    fn name(&self) -> &'static str {
        "LogisticRegression"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn predict(
        &self,
        features: &FeatureBundle,
        _text: &TokenizedText,
        _rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        if features.is_blank() {
            return neutral(self.name(), self.weight(), NO_TEXT);
        }

        let vote = linear_vote(
            &[
                Term::new("tfidfScore", 0.30, features.text.tfidf_score),
                Term::new("salaryTransparency", 0.25, features.meta.salary_transparency),
                Term::new("requirementClarity", 0.25, features.meta.requirement_clarity),
                Term::new(
                    "vaguenessDensity",
                    0.20,
                    100.0 - features.text.vagueness_density,
                ),
            ],
            Self::THRESHOLD,
        );
        let margin = (vote.signal - Self::THRESHOLD).abs();

        ModelPrediction {
            name: self.name().to_string(),
            label: vote.label,
            confidence: Self::BAND.at(margin / Self::THRESHOLD),
            weight: self.weight(),
            rationale: format!(
                "Content signal {:.1} against threshold {:.1}",
                vote.signal,
                Self::THRESHOLD
            ),
            features: vote.features,
        }
    }
}

/// Transparency rule: contact details, company presence, benefits, absence of urgency.
pub struct RandomForestScorer;

impl RandomForestScorer {
    const THRESHOLD: f64 = 45.0;
    const BAND: Band = Band {
        low: 70.0,
        high: 90.0,
    };
}

impl Scorer for RandomForestScorer {
    fn name(&self) -> &'static str {
        "RandomForest"
    }

    fn weight(&self) -> f64 {
        0.20
    }

    fn jittered(&self) -> bool {
        true
    }

    fn predict(
        &self,
        features: &FeatureBundle,
        _text: &TokenizedText,
        rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        if features.is_blank() {
            return neutral(self.name(), self.weight(), NO_TEXT);
        }

        let vote = linear_vote(
            &[
                Term::new("contactInfoScore", 0.30, features.meta.contact_info_score),
                Term::new("companyLegitimacy", 0.25, features.meta.company_legitimacy),
                Term::new(
                    "benefitsSpecificity",
                    0.25,
                    features.meta.benefits_specificity,
                ),
                Term::new("postingUrgency", 0.20, 100.0 - features.meta.posting_urgency),
            ],
            Self::THRESHOLD,
        );

        ModelPrediction {
            name: self.name().to_string(),
            label: vote.label,
            confidence: Self::BAND.sample(rng),
            weight: self.weight(),
            rationale: format!(
                "Transparency signal {:.1} against threshold {:.1}",
                vote.signal,
                Self::THRESHOLD
            ),
            features: vote.features,
        }
    }
}

/// Process rule: specificity, application steps, timeline, tone, pressure.
pub struct XgBoostScorer;

impl XgBoostScorer {
    const THRESHOLD: f64 = 45.0;
    const BAND: Band = Band {
        low: 75.0,
        high: 92.0,
    };
}

impl Scorer for XgBoostScorer {
    fn name(&self) -> &'static str {
        "XGBoost"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn jittered(&self) -> bool {
        true
    }

    fn predict(
        &self,
        features: &FeatureBundle,
        _text: &TokenizedText,
        rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        if features.is_blank() {
            return neutral(self.name(), self.weight(), NO_TEXT);
        }

        let vote = linear_vote(
            &[
                Term::new("specificityScore", 0.30, features.text.specificity_score),
                Term::new(
                    "applicationProcessClarity",
                    0.25,
                    features.behavioral.application_process_clarity,
                ),
                Term::new("timelineRealism", 0.20, features.behavioral.timeline_realism),
                Term::new("professionalTone", 0.15, features.linguistic.professional_tone),
                Term::new(
                    "persuasionTactics",
                    0.10,
                    100.0 - features.linguistic.persuasion_tactics,
                ),
            ],
            Self::THRESHOLD,
        );

        ModelPrediction {
            name: self.name().to_string(),
            label: vote.label,
            confidence: Self::BAND.sample(rng),
            weight: self.weight(),
            rationale: format!(
                "Process signal {:.1} against threshold {:.1}",
                vote.signal,
                Self::THRESHOLD
            ),
            features: vote.features,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text-scanning scorers
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of the same-sentence co-occurrence scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextualReading {
    pub label: Label,
    pub confidence: f64,
    pub legitimate_pairs: Vec<String>,
    pub ghost_pairs: Vec<String>,
}

impl ContextualReading {
    pub fn has_evidence(&self) -> bool {
        !self.legitimate_pairs.is_empty() || !self.ghost_pairs.is_empty()
    }
}

fn sentence_words(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn pair_hits(sentences: &[Vec<String>], pairs: &[(&str, &str)]) -> Vec<String> {
    let mut hits = Vec::new();
    for words in sentences {
        for (first, second) in pairs {
            if words.iter().any(|w| w == first) && words.iter().any(|w| w == second) {
                hits.push(format!("{first}+{second}"));
            }
        }
    }
    hits
}

/// Reads the posting for word pairs that co-occur within one sentence.
/// Deterministic; shared by both contextual scorers so their labels always agree.
pub fn contextual_reading(text: &TokenizedText) -> ContextualReading {
    let sentences: Vec<Vec<String>> = text.sentences.iter().map(|s| sentence_words(s)).collect();
    let legitimate_pairs = pair_hits(&sentences, LEGITIMATE_PAIRS);
    let ghost_pairs = pair_hits(&sentences, GHOST_PAIRS);

    let balance = legitimate_pairs.len() as f64 - ghost_pairs.len() as f64;
    let label = if balance >= 0.0 {
        Label::Legitimate
    } else {
        Label::Ghost
    };

    ContextualReading {
        label,
        confidence: (NEUTRAL_CONFIDENCE + 10.0 * balance.abs()).min(95.0),
        legitimate_pairs,
        ghost_pairs,
    }
}

/// Contextual co-occurrence scan over the raw text.
pub struct ContextualScorer;

impl Scorer for ContextualScorer {
    fn name(&self) -> &'static str {
        "BERT"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn predict(
        &self,
        _features: &FeatureBundle,
        text: &TokenizedText,
        _rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        let reading = contextual_reading(text);
        if !reading.has_evidence() {
            return neutral(self.name(), self.weight(), "No contextual word pairs found");
        }

        ModelPrediction {
            name: self.name().to_string(),
            label: reading.label,
            confidence: reading.confidence,
            weight: self.weight(),
            rationale: format!(
                "{} legitimate and {} ghost context pairs",
                reading.legitimate_pairs.len(),
                reading.ghost_pairs.len()
            ),
            features: reading
                .legitimate_pairs
                .into_iter()
                .chain(reading.ghost_pairs)
                .collect(),
        }
    }
}

/// Lightweight contextual scorer: same label as `ContextualScorer`, perturbed confidence.
pub struct LightContextualScorer;

impl LightContextualScorer {
    const PERTURBATION: f64 = 5.0;
}

impl Scorer for LightContextualScorer {
    fn name(&self) -> &'static str {
        "DistilBERT"
    }

    fn weight(&self) -> f64 {
        0.10
    }

    fn jittered(&self) -> bool {
        true
    }

    fn predict(
        &self,
        _features: &FeatureBundle,
        text: &TokenizedText,
        rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        let reading = contextual_reading(text);
        if !reading.has_evidence() {
            return neutral(self.name(), self.weight(), "No contextual word pairs found");
        }

        let offset = rng.gen_range(-Self::PERTURBATION..=Self::PERTURBATION);
        ModelPrediction {
            name: self.name().to_string(),
            label: reading.label,
            confidence: clamp_pct(reading.confidence + offset),
            weight: self.weight(),
            rationale: "Distilled contextual reading".to_string(),
            features: reading
                .legitimate_pairs
                .into_iter()
                .chain(reading.ghost_pairs)
                .collect(),
        }
    }
}

/// Legitimate-versus-ghost vocabulary overlap, independent of the feature bundle.
pub struct EmbeddingOverlapScorer;

impl Scorer for EmbeddingOverlapScorer {
    fn name(&self) -> &'static str {
        "OpenAIEmbeddings"
    }

    fn weight(&self) -> f64 {
        0.05
    }

    fn predict(
        &self,
        _features: &FeatureBundle,
        text: &TokenizedText,
        _rng: &mut dyn RngCore,
    ) -> ModelPrediction {
        let legitimate = text.count_hits(&LEGITIMATE_KEYWORDS);
        let ghost = text.count_hits(&GHOST_KEYWORDS);
        let total = legitimate + ghost;
        if total == 0 {
            return neutral(self.name(), self.weight(), "No vocabulary overlap");
        }

        let ratio = legitimate as f64 / total as f64;
        ModelPrediction {
            name: self.name().to_string(),
            label: if ratio >= 0.5 {
                Label::Legitimate
            } else {
                Label::Ghost
            },
            confidence: NEUTRAL_CONFIDENCE + (ratio - 0.5).abs() * 80.0,
            weight: self.weight(),
            rationale: format!("Legitimate overlap ratio {ratio:.2} ({legitimate}/{total})"),
            features: vec!["legitimateKeywords".to_string(), "ghostKeywords".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::extract;
    use crate::analysis::fixtures::{GHOST_POSTING, LEGIT_POSTING};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn predict_all(text: &str, seed: u64) -> Vec<ModelPrediction> {
        let tokenized = TokenizedText::new(text);
        let features = extract(text);
        let mut rng = StdRng::seed_from_u64(seed);
        default_registry()
            .iter()
            .map(|s| s.predict(&features, &tokenized, &mut rng))
            .collect()
    }

    #[test]
    fn test_registry_weights() {
        let weights: Vec<(&str, f64)> = default_registry()
            .iter()
            .map(|s| (s.name(), s.weight()))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("LogisticRegression", 0.15),
                ("RandomForest", 0.20),
                ("XGBoost", 0.25),
                ("BERT", 0.25),
                ("DistilBERT", 0.10),
                ("OpenAIEmbeddings", 0.05),
            ]
        );
    }

    #[test]
    fn test_exactly_three_scorers_are_jittered() {
        let jittered: Vec<&str> = default_registry()
            .iter()
            .filter(|s| s.jittered())
            .map(|s| s.name())
            .collect();
        assert_eq!(jittered, vec!["RandomForest", "XGBoost", "DistilBERT"]);
    }

    #[test]
    fn test_catalog_normalizes_weights() {
        let info = catalog(&default_registry());
        let total: f64 = info.iter().map(|m| m.normalized_weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_text_gives_neutral_votes() {
        for prediction in predict_all("", 1) {
            assert_eq!(prediction.confidence, NEUTRAL_CONFIDENCE, "{}", prediction.name);
            assert_eq!(prediction.legitimacy_score(), 50.0);
        }
    }

    #[test]
    fn test_legitimate_posting_votes_legitimate() {
        for prediction in predict_all(LEGIT_POSTING, 7) {
            assert_eq!(prediction.label, Label::Legitimate, "{}", prediction.name);
        }
    }

    #[test]
    fn test_ghost_posting_votes_ghost() {
        for prediction in predict_all(GHOST_POSTING, 7) {
            assert_eq!(prediction.label, Label::Ghost, "{}", prediction.name);
        }
    }

    #[test]
    fn test_confidences_stay_in_bands() {
        for seed in 0..50 {
            let predictions = predict_all(LEGIT_POSTING, seed);
            assert!((70.0..=90.0).contains(&predictions[1].confidence));
            assert!((75.0..=92.0).contains(&predictions[2].confidence));
            for p in &predictions {
                assert!((0.0..=100.0).contains(&p.confidence), "{}", p.name);
            }
        }
    }

    #[test]
    fn test_light_contextual_label_matches_contextual() {
        let texts = [
            LEGIT_POSTING,
            GHOST_POSTING,
            "",
            "Urgent hiring. Easy money. Salary and benefits included.",
        ];
        for text in texts {
            for seed in 0..20 {
                let predictions = predict_all(text, seed);
                assert_eq!(predictions[3].label, predictions[4].label, "{text:?}");
            }
        }
    }

    #[test]
    fn test_contextual_reading_counts_same_sentence_pairs() {
        let reading = contextual_reading(&TokenizedText::new(
            "The interview process has two rounds. Salary is listed. Benefits are listed.",
        ));
        assert_eq!(reading.legitimate_pairs, vec!["interview+process"]);
        assert!(reading.ghost_pairs.is_empty());
        assert_eq!(reading.label, Label::Legitimate);
        assert_eq!(reading.confidence, 60.0);
    }

    #[test]
    fn test_embedding_overlap_ratio() {
        let features = extract("salary benefits urgent");
        let mut rng = StdRng::seed_from_u64(0);
        let prediction = EmbeddingOverlapScorer.predict(
            &features,
            &TokenizedText::new("salary benefits urgent"),
            &mut rng,
        );
        assert_eq!(prediction.label, Label::Legitimate);
        let expected = 50.0 + (2.0 / 3.0 - 0.5) * 80.0;
        assert!((prediction.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_legitimacy_score_mapping() {
        let mut prediction = neutral("x", 1.0, "");
        prediction.confidence = 80.0;
        assert_eq!(prediction.legitimacy_score(), 80.0);
        prediction.label = Label::Ghost;
        assert_eq!(prediction.legitimacy_score(), 20.0);
    }
}
