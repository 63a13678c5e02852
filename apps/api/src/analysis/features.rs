//! Feature extraction: turns a raw posting into the four-group `FeatureBundle`.
//!
//! Every percentage field is clamped to [0, 100]. Counts are unbounded. Extraction is
//! total: empty or unpunctuated text yields neutral values, never NaN.

use serde::{Deserialize, Serialize};

use crate::analysis::text::{clamp_pct, ratio, TokenizedText};
use crate::analysis::vocabulary::{
    ABOUT_PHRASES, BUZZWORDS, CASUAL_WORDS, COMPETITIVE_PAY_PHRASES, CONTACT_PHRASES,
    DOLLAR_AMOUNT_RE, EMAIL_RE, EMOTIONAL_WORDS, FREEMAIL_DOMAINS, GHOST_KEYWORDS, HR_PHRASES,
    LEGITIMATE_KEYWORDS, MONTH_NAMES, NAMED_BENEFITS, NEGATIVE_WORDS, PAY_RANGE_PHRASES,
    PHONE_RE, POSITIVE_WORDS, PRESSURE_PHRASES, PROCESS_PHRASES, PROFESSIONAL_WORDS,
    REQUIREMENT_PHRASES, SPECIFIC_PHRASES, TECHNICAL_TERMS, TIMELINE_PHRASES, URGENT_PHRASES,
    VAGUE_TERMS, WEBSITE_RE,
};

/// Placeholder for posting-history signals the text alone cannot provide.
pub const NEUTRAL_POSTING_PATTERN: f64 = 50.0;

/// Readability reported for text with no words.
const NEUTRAL_READABILITY: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    pub tfidf_score: f64,
    pub vagueness_density: f64,
    pub buzzword_ratio: f64,
    pub specificity_score: f64,
    pub sentiment_polarity: f64,
    pub readability_index: f64,
    pub keyword_diversity: f64,
    pub technical_terms_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaFeatures {
    pub description_length: f64,
    pub salary_transparency: f64,
    pub contact_info_score: f64,
    pub company_legitimacy: f64,
    pub posting_urgency: f64,
    pub requirement_clarity: f64,
    pub benefits_specificity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralFeatures {
    pub posting_pattern_score: f64,
    pub response_time_indicator: f64,
    pub application_process_clarity: f64,
    pub interview_process_mentioned: f64,
    pub timeline_realism: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticFeatures {
    pub grammar_quality: f64,
    pub professional_tone: f64,
    pub emotional_language: f64,
    pub persuasion_tactics: f64,
    pub clarity_index: f64,
}

/// All four feature groups for one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBundle {
    pub text: TextFeatures,
    pub meta: MetaFeatures,
    pub behavioral: BehavioralFeatures,
    pub linguistic: LinguisticFeatures,
}

impl FeatureBundle {
    /// True when the posting has no words to score.
    pub fn is_blank(&self) -> bool {
        self.text.word_count == 0
    }
}

#[allow(dead_code)]
pub fn extract(text: &str) -> FeatureBundle {
    extract_tokenized(&TokenizedText::new(text), text)
}

pub(crate) fn extract_tokenized(tokenized: &TokenizedText, raw: &str) -> FeatureBundle {
    FeatureBundle {
        text: text_features(tokenized),
        meta: meta_features(tokenized, raw),
        behavioral: behavioral_features(tokenized),
        linguistic: linguistic_features(tokenized, raw),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text
// ────────────────────────────────────────────────────────────────────────────

fn text_features(t: &TokenizedText) -> TextFeatures {
    let token_count = t.token_count();
    let ghost_density = ratio(t.count_hits(&GHOST_KEYWORDS), token_count);
    let legit_density = ratio(t.count_hits(&LEGITIMATE_KEYWORDS), token_count);

    let positive = t.count_hits(&POSITIVE_WORDS) as f64;
    let negative = t.count_hits(&NEGATIVE_WORDS) as f64;

    TextFeatures {
        tfidf_score: clamp_pct((legit_density - ghost_density) * 100.0),
        vagueness_density: clamp_pct(ratio(t.count_hits(&VAGUE_TERMS), token_count) * 100.0),
        buzzword_ratio: clamp_pct(ratio(t.count_hits(&BUZZWORDS), token_count) * 100.0),
        specificity_score: phrase_coverage(t, SPECIFIC_PHRASES),
        sentiment_polarity: clamp_pct((positive - negative + 5.0) * 10.0),
        readability_index: readability(t),
        keyword_diversity: clamp_pct(ratio(t.unique_token_count(), token_count) * 100.0),
        technical_terms_count: t.count_hits(&TECHNICAL_TERMS),
        word_count: t.words.len(),
        sentence_count: t.sentences.len(),
    }
}

/// Flesch reading ease, clamped.
fn readability(t: &TokenizedText) -> f64 {
    if t.words.is_empty() {
        return NEUTRAL_READABILITY;
    }
    clamp_pct(
        206.835 - 1.015 * t.avg_words_per_sentence() - 84.6 * t.avg_syllables_per_word(),
    )
}

fn phrase_coverage(t: &TokenizedText, phrases: &[&str]) -> f64 {
    clamp_pct(ratio(t.count_phrases(phrases), phrases.len()) * 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Meta
// ────────────────────────────────────────────────────────────────────────────

fn meta_features(t: &TokenizedText, raw: &str) -> MetaFeatures {
    MetaFeatures {
        description_length: length_curve(raw.chars().count()),
        salary_transparency: salary_transparency(t),
        contact_info_score: contact_info_score(t),
        company_legitimacy: company_legitimacy(t),
        posting_urgency: (t.count_phrases(URGENT_PHRASES) as f64 * 25.0).min(100.0),
        requirement_clarity: phrase_coverage(t, REQUIREMENT_PHRASES),
        benefits_specificity: phrase_coverage(t, NAMED_BENEFITS),
    }
}

fn length_curve(chars: usize) -> f64 {
    match chars {
        0..=199 => 20.0,
        300..=800 => 90.0,
        1201.. => 30.0,
        _ => 60.0,
    }
}

fn salary_transparency(t: &TokenizedText) -> f64 {
    if DOLLAR_AMOUNT_RE.is_match(&t.lower) {
        90.0
    } else if t.contains_any(COMPETITIVE_PAY_PHRASES) {
        30.0
    } else if t.contains_any(PAY_RANGE_PHRASES) {
        70.0
    } else {
        10.0
    }
}

fn contact_info_score(t: &TokenizedText) -> f64 {
    let mut score: f64 = 0.0;
    if has_employer_email(t) {
        score += 30.0;
    }
    if PHONE_RE.is_match(&t.lower) {
        score += 25.0;
    }
    if t.contains_any(CONTACT_PHRASES) {
        score += 25.0;
    }
    if t.contains_any(HR_PHRASES) {
        score += 20.0;
    }
    score.min(100.0)
}

/// An address on a free-mail domain earns no credit.
fn has_employer_email(t: &TokenizedText) -> bool {
    EMAIL_RE
        .captures_iter(&t.lower)
        .any(|caps| !FREEMAIL_DOMAINS.contains(&caps[1]))
}

fn company_legitimacy(t: &TokenizedText) -> f64 {
    let mut score: f64 = 50.0;
    if t.contains("company") {
        score += 15.0;
    }
    if WEBSITE_RE
        .find_iter(&t.lower)
        .any(|m| !FREEMAIL_DOMAINS.contains(m.as_str()))
    {
        score += 20.0;
    }
    if t.contains_any(ABOUT_PHRASES) {
        score += 15.0;
    }
    score.min(100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Behavioral
// ────────────────────────────────────────────────────────────────────────────

fn behavioral_features(t: &TokenizedText) -> BehavioralFeatures {
    BehavioralFeatures {
        posting_pattern_score: NEUTRAL_POSTING_PATTERN,
        response_time_indicator: if t.contains("respond") || t.contains("reply") {
            75.0
        } else {
            25.0
        },
        application_process_clarity: phrase_coverage(t, PROCESS_PHRASES),
        interview_process_mentioned: if t.contains("interview") { 80.0 } else { 20.0 },
        timeline_realism: timeline_realism(t),
    }
}

fn timeline_realism(t: &TokenizedText) -> f64 {
    if t.contains("immediate") || t.contains("asap") {
        20.0
    } else if t.contains_any(TIMELINE_PHRASES) {
        80.0
    } else if mentions_month(t) {
        70.0
    } else {
        50.0
    }
}

/// A month counts when it sits next to a day or year number ("March 1", "1st of May",
/// "May 2025"), or is capitalised mid-sentence ("starts in September").
fn mentions_month(t: &TokenizedText) -> bool {
    t.sentences.iter().any(|sentence| {
        let words: Vec<&str> = sentence
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();
        words.iter().enumerate().any(|(i, word)| {
            if !MONTH_NAMES.contains(&word.to_lowercase().as_str()) {
                return false;
            }
            let numeric = |w: &&str| w.starts_with(|c: char| c.is_ascii_digit());
            let dated = words.get(i + 1).is_some_and(numeric)
                || (i > 0 && numeric(&words[i - 1]))
                || (i > 1 && words[i - 1].eq_ignore_ascii_case("of") && numeric(&words[i - 2]));
            let proper = i > 0 && word.starts_with(|c: char| c.is_uppercase());
            dated || proper
        })
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Linguistic
// ────────────────────────────────────────────────────────────────────────────

fn linguistic_features(t: &TokenizedText, raw: &str) -> LinguisticFeatures {
    let professional = t.count_hits(&PROFESSIONAL_WORDS) as f64;
    let casual = t.count_hits(&CASUAL_WORDS) as f64;

    LinguisticFeatures {
        grammar_quality: grammar_quality(t, raw),
        professional_tone: clamp_pct((professional - casual) * 10.0 + 50.0),
        emotional_language: (t.count_hits(&EMOTIONAL_WORDS) as f64 * 20.0).min(100.0),
        persuasion_tactics: (t.count_phrases(PRESSURE_PHRASES) as f64 * 25.0).min(100.0),
        clarity_index: clarity_index(t),
    }
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase)
}

fn grammar_quality(t: &TokenizedText, raw: &str) -> f64 {
    let mut score: f64 = 80.0;
    if raw.contains("  ") {
        score -= 5.0;
    }
    if starts_lowercase(raw.trim_start()) {
        score -= 10.0;
    }
    if t.sentences.iter().any(|s| starts_lowercase(s)) {
        score -= 10.0;
    }
    clamp_pct(score)
}

fn clarity_index(t: &TokenizedText) -> f64 {
    let mut score: f64 = 100.0;
    let words_per_sentence = t.avg_words_per_sentence();
    if !(10.0..=25.0).contains(&words_per_sentence) {
        score -= 20.0;
    }
    let word_length = t.avg_word_length();
    if !(3.0..=7.0).contains(&word_length) {
        score -= 15.0;
    }
    score
}
