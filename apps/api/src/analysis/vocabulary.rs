//! Closed vocabularies used by feature extraction, the text scorers, and the condition
//! evaluator. Word sets are matched against single tokens; phrase lists are matched as
//! substrings of the lower-cased posting.
//!
//! Bump `VOCABULARY_VERSION` whenever a list changes: scores are only comparable
//! between results that report the same version.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub const VOCABULARY_VERSION: &str = "2024.2";

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Word sets (token membership)
// ────────────────────────────────────────────────────────────────────────────

pub static GHOST_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "urgent",
        "immediate",
        "immediately",
        "asap",
        "unlimited",
        "guaranteed",
        "easy",
        "money",
        "commission",
        "rockstar",
        "ninja",
        "passionate",
        "dynamic",
        "fast-paced",
        "various",
        "ongoing",
        "pipeline",
        "always",
        "future",
        "pool",
        "evergreen",
        "wfh",
        "cash",
    ])
});

pub static LEGITIMATE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "salary",
        "benefits",
        "401k",
        "insurance",
        "dental",
        "vision",
        "pto",
        "requirements",
        "qualifications",
        "responsibilities",
        "experience",
        "degree",
        "team",
        "manager",
        "reports",
        "department",
        "office",
        "interview",
        "onboarding",
        "training",
        "mentorship",
        "equity",
        "bonus",
        "location",
        "hybrid",
        "schedule",
        "full-time",
        "part-time",
    ])
});

pub static VAGUE_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "various",
        "multiple",
        "some",
        "several",
        "etc",
        "stuff",
        "things",
        "other",
        "assigned",
        "general",
        "miscellaneous",
        "misc",
        "related",
        "needed",
        "whatever",
        "certain",
        "flexible",
    ])
});

pub static TECHNICAL_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "python",
        "java",
        "javascript",
        "typescript",
        "rust",
        "sql",
        "postgresql",
        "aws",
        "azure",
        "gcp",
        "docker",
        "kubernetes",
        "react",
        "node.js",
        "api",
        "apis",
        "linux",
        "git",
        "ci/cd",
        "terraform",
        "excel",
        "salesforce",
        "tableau",
        "c++",
        "c#",
        "golang",
        "html",
        "css",
        "analytics",
        "database",
        "cloud",
        "microservices",
    ])
});

pub static BUZZWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "synergy",
        "rockstar",
        "ninja",
        "guru",
        "wizard",
        "disruptive",
        "innovative",
        "passionate",
        "dynamic",
        "fast-paced",
        "self-starter",
        "go-getter",
        "hustle",
        "world-class",
        "cutting-edge",
        "game-changer",
        "unicorn",
        "superstar",
        "paradigm",
        "leverage",
    ])
});

pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "great",
        "excellent",
        "growth",
        "supportive",
        "collaborative",
        "rewarding",
        "exciting",
        "inclusive",
        "stable",
        "competitive",
        "generous",
        "welcoming",
    ])
});

pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "pressure",
        "demanding",
        "stressful",
        "unpaid",
        "strict",
        "penalty",
        "mandatory",
        "overtime",
        "tight",
        "grueling",
    ])
});

pub static PROFESSIONAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "experience",
        "responsibilities",
        "qualifications",
        "collaborate",
        "professional",
        "develop",
        "manage",
        "ensure",
        "provide",
        "support",
        "organization",
        "position",
        "candidate",
        "role",
        "stakeholders",
    ])
});

pub static CASUAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "awesome", "cool", "guys", "fun", "crazy", "super", "lol", "hey", "stuff", "gonna",
        "wanna", "dude", "vibe", "vibes", "epic",
    ])
});

pub static EMOTIONAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "amazing",
        "incredible",
        "passionate",
        "love",
        "thrilled",
        "excited",
        "dream",
        "life-changing",
        "unbelievable",
        "fantastic",
        "awesome",
        "exciting",
    ])
});

// ────────────────────────────────────────────────────────────────────────────
// Phrase lists (substring presence, counted once each)
// ────────────────────────────────────────────────────────────────────────────

pub const SPECIFIC_PHRASES: &[&str] = &[
    "years of experience",
    "bachelor",
    "master's",
    "degree in",
    "certification",
    "proficiency in",
    "experience with",
    "knowledge of",
    "reports to",
    "responsible for",
    "per hour",
    "per year",
    "full-time",
    "located in",
    "team of",
];

pub const URGENT_PHRASES: &[&str] = &[
    "urgent",
    "immediate",
    "asap",
    "easy money",
    "act now",
    "start today",
    "hurry",
    "right away",
    "quick cash",
    "limited time",
];

pub const PRESSURE_PHRASES: &[&str] = &[
    "don't miss",
    "limited time",
    "act now",
    "only a few",
    "apply now",
    "first come",
    "once in a lifetime",
    "won't last",
    "spots left",
    "today only",
    "guaranteed",
];

pub const COMPETITIVE_PAY_PHRASES: &[&str] = &[
    "competitive salary",
    "competitive pay",
    "competitive compensation",
];

pub const PAY_RANGE_PHRASES: &[&str] = &[
    "salary range",
    "pay range",
    "compensation",
    "per hour",
    "per year",
    "hourly rate",
    "annually",
    "/hr",
    "/year",
];

pub const CONTACT_PHRASES: &[&str] = &[
    "contact us",
    "reach out",
    "apply at",
    "send your resume",
    "apply via",
    "email us",
    "questions?",
];

pub const HR_PHRASES: &[&str] = &[
    "human resources",
    "recruiter",
    "hiring manager",
    "talent acquisition",
    "hr department",
    "hr team",
];

pub const ABOUT_PHRASES: &[&str] = &["about us", "our mission", "founded in", "headquartered"];

pub const REQUIREMENT_PHRASES: &[&str] = &[
    "years of experience",
    "bachelor",
    "degree",
    "required",
    "requirements",
    "qualifications",
    "must have",
    "proficient",
    "experience with",
    "knowledge of",
    "certification",
    "skills",
];

pub const NAMED_BENEFITS: &[&str] = &[
    "health insurance",
    "dental",
    "vision",
    "401(k)",
    "401k",
    "paid time off",
    "pto",
    "parental leave",
    "tuition",
    "equity",
    "stock options",
    "life insurance",
];

pub const PROCESS_PHRASES: &[&str] = &[
    "apply",
    "application",
    "submit",
    "resume",
    "cover letter",
    "portfolio",
    "interview",
    "assessment",
    "next steps",
    "hiring process",
];

pub const TIMELINE_PHRASES: &[&str] = &[
    "start date",
    "timeline",
    "within two weeks",
    "within 2 weeks",
    "by the end of",
    "start on",
    "expected start",
];

/// Full month names. "may" and "march" double as ordinary words, so a bare token
/// is not enough to count as a date (see `features::mentions_month`).
pub const MONTH_NAMES: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Free-mail and throwaway providers. Addresses on these domains say nothing
/// about the employer.
pub static FREEMAIL_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "gmail.com",
        "googlemail.com",
        "yahoo.com",
        "ymail.com",
        "hotmail.com",
        "outlook.com",
        "live.com",
        "msn.com",
        "aol.com",
        "icloud.com",
        "mail.com",
        "gmx.com",
        "proton.me",
        "protonmail.com",
        "yandex.com",
        "zoho.com",
        "mailinator.com",
        "guerrillamail.com",
        "10minutemail.com",
        "tempmail.com",
    ])
});

/// Same-sentence word pairs read by the contextual scorers.
pub const LEGITIMATE_PAIRS: &[(&str, &str)] = &[
    ("salary", "benefits"),
    ("experience", "required"),
    ("team", "report"),
    ("interview", "process"),
    ("responsibilities", "include"),
    ("degree", "field"),
    ("start", "date"),
    ("health", "insurance"),
];

pub const GHOST_PAIRS: &[(&str, &str)] = &[
    ("urgent", "hiring"),
    ("easy", "money"),
    ("no", "experience"),
    ("unlimited", "earning"),
    ("always", "hiring"),
    ("talent", "pool"),
    ("future", "opportunities"),
    ("work", "anywhere"),
];

// ────────────────────────────────────────────────────────────────────────────
// Patterns
// ────────────────────────────────────────────────────────────────────────────

pub static DOLLAR_AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s?\d").expect("dollar pattern is valid"));

pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9._%+-]+@([a-z0-9-]+(?:\.[a-z0-9-]+)+)").expect("email pattern is valid")
});

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]\d{4}\b").expect("phone pattern is valid")
});

pub static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://|www\.|\b[a-z0-9-]+\.(com|org|io|net|co)\b")
        .expect("website pattern is valid")
});
