//! Tokenization and counting primitives shared by the extractor, scorers, and conditions.

use std::collections::HashSet;

/// Minimum token length (exclusive) for word metrics.
const MIN_TOKEN_LEN: usize = 2;

/// A posting broken into the pieces every stage needs.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    /// Lower-cased original text, for phrase matching.
    pub lower: String,
    /// Lower-cased tokens longer than two characters.
    pub tokens: Vec<String>,
    /// Every whitespace-separated word of the original text.
    pub words: Vec<String>,
    /// Trimmed, non-empty sentences of the original text.
    pub sentences: Vec<String>,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = lower
            .split_whitespace()
            .map(trim_token)
            .filter(|t| t.chars().count() > MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();
        let words = text
            .split_whitespace()
            .map(trim_token)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            lower,
            tokens,
            words,
            sentences: split_sentences(text),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Counts every token that belongs to `vocabulary`.
    pub fn count_hits(&self, vocabulary: &HashSet<&'static str>) -> usize {
        self.tokens
            .iter()
            .filter(|t| vocabulary.contains(t.as_str()))
            .count()
    }

    /// Counts the distinct phrases of `phrases` present in the lower-cased text.
    pub fn count_phrases(&self, phrases: &[&str]) -> usize {
        phrases.iter().filter(|p| self.lower.contains(*p)).count()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.lower.contains(phrase)
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.lower.contains(p))
    }

    /// Phrases of `phrases` present in the text, in list order.
    pub fn matched_phrases(&self, phrases: &[&'static str]) -> Vec<&'static str> {
        phrases
            .iter()
            .copied()
            .filter(|p| self.lower.contains(p))
            .collect()
    }

    /// Vocabulary tokens in first-appearance order, without duplicates.
    pub fn matched_tokens(&self, vocabulary: &HashSet<&'static str>) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokens
            .iter()
            .filter(|t| vocabulary.contains(t.as_str()))
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    pub fn unique_token_count(&self) -> usize {
        self.tokens.iter().collect::<HashSet<_>>().len()
    }

    pub fn avg_words_per_sentence(&self) -> f64 {
        ratio(self.words.len(), self.sentences.len())
    }

    pub fn avg_syllables_per_word(&self) -> f64 {
        let total: usize = self.words.iter().map(|w| count_syllables(w)).sum();
        ratio(total, self.words.len())
    }

    pub fn avg_word_length(&self) -> f64 {
        let total: usize = self.words.iter().map(|w| w.chars().count()).sum();
        ratio(total, self.words.len())
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn clamp_pct(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

fn trim_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
}

/// Splits on runs of `.`, `!` and `?`.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of vowel groups in `word`, never less than 1.
pub fn count_syllables(word: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for c in word.chars().flat_map(char::to_lowercase) {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = is_vowel;
    }
    groups.max(1)
}
