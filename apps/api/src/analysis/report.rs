//! Report generation: summary text, recommendations, and the diagnostic breakdown.

use crate::analysis::features::FeatureBundle;
use crate::analysis::result::{
    DetailedAnalysis, KeywordEvidence, LanguageBreakdown, ProcessBreakdown, TextBreakdown,
    TransparencyBreakdown,
};
use crate::analysis::text::TokenizedText;
use crate::analysis::vocabulary::{GHOST_KEYWORDS, LEGITIMATE_KEYWORDS};

/// Picks a summary template by verdict and confidence band (>80, >60, rest).
pub fn summarize(is_ghost_job: bool, confidence: f64, ensemble_score: f64) -> String {
    let figures = format!("legitimacy {ensemble_score:.1}/100, {confidence:.0}% confidence");
    match (is_ghost_job, confidence) {
        (true, c) if c > 80.0 => format!(
            "High likelihood of a ghost job. Most signals point to a posting with no active hiring behind it ({figures})."
        ),
        (true, c) if c > 60.0 => {
            format!("This posting shows several ghost-job patterns ({figures}).")
        }
        (true, _) => format!(
            "This posting leans toward a ghost job, but the signal is weak ({figures})."
        ),
        (false, c) if c > 80.0 => {
            format!("This posting looks like a genuine, active opening ({figures}).")
        }
        (false, c) if c > 60.0 => {
            format!("This posting appears legitimate, with a few gaps worth checking ({figures}).")
        }
        (false, _) => format!(
            "No strong ghost-job signals, but the posting gives limited information ({figures})."
        ),
    }
}

const GHOST_BASELINE: &[&str] = &[
    "Check that the role is also listed on the company's official careers page.",
    "Look up recent employee reviews and hiring activity before applying.",
    "Do not share personal or financial details until the employer is verified.",
];

const LEGITIMATE_BASELINE: &[&str] = &[
    "Tailor your resume to the requirements listed in the posting.",
    "Prepare for the interview stages the posting describes.",
    "Follow up with the hiring contact about a week after applying.",
];

/// Baseline advice for the verdict plus up to three feature-driven tips.
pub fn recommend(is_ghost_job: bool, features: &FeatureBundle) -> Vec<String> {
    let baseline = if is_ghost_job {
        GHOST_BASELINE
    } else {
        LEGITIMATE_BASELINE
    };
    let mut recommendations: Vec<String> = baseline.iter().map(|s| s.to_string()).collect();

    if features.meta.salary_transparency < 40.0 {
        recommendations
            .push("Ask for the salary range before investing time in the process.".to_string());
    }
    if features.meta.contact_info_score < 30.0 {
        recommendations.push(
            "Request a named recruiter or hiring manager to confirm the opening exists."
                .to_string(),
        );
    }
    if features.meta.posting_urgency > 50.0 {
        recommendations.push(
            "Take your time: real employers allow candidates to evaluate an offer.".to_string(),
        );
    }

    recommendations
}

/// Regroups feature values into the diagnostic record.
#[allow(dead_code)]
pub fn detail(features: &FeatureBundle, text: &str) -> DetailedAnalysis {
    detail_tokenized(features, &TokenizedText::new(text), text)
}

pub(crate) fn detail_tokenized(
    f: &FeatureBundle,
    text: &TokenizedText,
    raw: &str,
) -> DetailedAnalysis {
    DetailedAnalysis {
        text_analysis: TextBreakdown {
            word_count: f.text.word_count,
            sentence_count: f.text.sentence_count,
            character_count: raw.chars().count(),
            readability_index: f.text.readability_index,
            keyword_diversity: f.text.keyword_diversity,
            technical_terms_count: f.text.technical_terms_count,
            vagueness_density: f.text.vagueness_density,
            buzzword_ratio: f.text.buzzword_ratio,
            specificity_score: f.text.specificity_score,
        },
        transparency: TransparencyBreakdown {
            salary_transparency: f.meta.salary_transparency,
            contact_info_score: f.meta.contact_info_score,
            company_legitimacy: f.meta.company_legitimacy,
            benefits_specificity: f.meta.benefits_specificity,
            requirement_clarity: f.meta.requirement_clarity,
            description_length: f.meta.description_length,
        },
        process: ProcessBreakdown {
            application_process_clarity: f.behavioral.application_process_clarity,
            interview_process_mentioned: f.behavioral.interview_process_mentioned,
            timeline_realism: f.behavioral.timeline_realism,
            response_time_indicator: f.behavioral.response_time_indicator,
            posting_urgency: f.meta.posting_urgency,
        },
        language: LanguageBreakdown {
            grammar_quality: f.linguistic.grammar_quality,
            professional_tone: f.linguistic.professional_tone,
            emotional_language: f.linguistic.emotional_language,
            persuasion_tactics: f.linguistic.persuasion_tactics,
            clarity_index: f.linguistic.clarity_index,
            sentiment_polarity: f.text.sentiment_polarity,
        },
        keyword_evidence: KeywordEvidence {
            ghost_terms: text.matched_tokens(&GHOST_KEYWORDS),
            legitimate_terms: text.matched_tokens(&LEGITIMATE_KEYWORDS),
        },
    }
}
