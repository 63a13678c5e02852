use serde::{Deserialize, Serialize};

use crate::analysis::conditions::ConditionResult;
use crate::analysis::ensemble::RiskLevel;
use crate::analysis::features::FeatureBundle;
use crate::analysis::models::ModelPrediction;

/// Full verdict for one posting. Field names are the contract the presentation
/// layer renders; keep them stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_ghost_job: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// `ensemble_score` rounded, 0 – 100
    pub overall_score: u32,
    pub model_predictions: Vec<ModelPrediction>,
    pub feature_analysis: FeatureBundle,
    pub ensemble_score: f64,
    pub ghost_conditions: Vec<ConditionResult>,
    pub legitimate_conditions: Vec<ConditionResult>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub detailed_analysis: DetailedAnalysis,
    pub vocabulary_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub text_analysis: TextBreakdown,
    pub transparency: TransparencyBreakdown,
    pub process: ProcessBreakdown,
    pub language: LanguageBreakdown,
    pub keyword_evidence: KeywordEvidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBreakdown {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
    pub readability_index: f64,
    pub keyword_diversity: f64,
    pub technical_terms_count: usize,
    pub vagueness_density: f64,
    pub buzzword_ratio: f64,
    pub specificity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparencyBreakdown {
    pub salary_transparency: f64,
    pub contact_info_score: f64,
    pub company_legitimacy: f64,
    pub benefits_specificity: f64,
    pub requirement_clarity: f64,
    pub description_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBreakdown {
    pub application_process_clarity: f64,
    pub interview_process_mentioned: f64,
    pub timeline_realism: f64,
    pub response_time_indicator: f64,
    pub posting_urgency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBreakdown {
    pub grammar_quality: f64,
    pub professional_tone: f64,
    pub emotional_language: f64,
    pub persuasion_tactics: f64,
    pub clarity_index: f64,
    pub sentiment_polarity: f64,
}

/// Vocabulary terms found in the posting, first appearance first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEvidence {
    pub ghost_terms: Vec<String>,
    pub legitimate_terms: Vec<String>,
}
