//! Condition evaluation: independent red and green flags over single features.
//!
//! Conditions never look at the ensemble verdict. A legitimate verdict can carry
//! detected ghost conditions and vice versa; callers get both lists as-is.

use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureBundle;
use crate::analysis::text::{clamp_pct, TokenizedText};
use crate::analysis::vocabulary::{BUZZWORDS, PRESSURE_PHRASES, URGENT_PHRASES, VAGUE_TERMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Content,
    Compensation,
    Language,
    Contact,
    Company,
    Process,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionResult {
    pub name: String,
    pub detected: bool,
    /// 0 – 100
    pub confidence: f64,
    pub impact: Impact,
    pub category: ConditionCategory,
    pub description: String,
    /// Value of the feature the condition tests.
    pub feature_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSet {
    pub ghost_conditions: Vec<ConditionResult>,
    pub legitimate_conditions: Vec<ConditionResult>,
}

impl ConditionSet {
    pub fn detected_ghost(&self) -> impl Iterator<Item = &ConditionResult> {
        self.ghost_conditions.iter().filter(|c| c.detected)
    }

    pub fn detected_legitimate(&self) -> impl Iterator<Item = &ConditionResult> {
        self.legitimate_conditions.iter().filter(|c| c.detected)
    }
}

#[allow(dead_code)]
pub fn evaluate(features: &FeatureBundle, text: &str) -> ConditionSet {
    evaluate_tokenized(features, &TokenizedText::new(text))
}

pub(crate) fn evaluate_tokenized(features: &FeatureBundle, text: &TokenizedText) -> ConditionSet {
    ConditionSet {
        ghost_conditions: ghost_conditions(features, text),
        legitimate_conditions: legitimate_conditions(features),
    }
}

struct Check {
    name: &'static str,
    category: ConditionCategory,
    impact: Impact,
    value: f64,
    detected: bool,
    /// Unclamped linear transform of `value`.
    confidence: f64,
    description: String,
}

impl Check {
    fn finish(self) -> ConditionResult {
        ConditionResult {
            name: self.name.to_string(),
            detected: self.detected,
            confidence: clamp_pct(self.confidence),
            impact: self.impact,
            category: self.category,
            description: self.description,
            feature_contribution: self.value,
        }
    }
}

/// Appends the matched terms to `base`, if any.
fn with_evidence<S: AsRef<str>>(base: &str, evidence: &[S]) -> String {
    if evidence.is_empty() {
        return base.to_string();
    }
    let terms: Vec<&str> = evidence.iter().map(|s| s.as_ref()).collect();
    format!("{base} Found: {}.", terms.join(", "))
}

fn ghost_conditions(f: &FeatureBundle, text: &TokenizedText) -> Vec<ConditionResult> {
    let vagueness = f.text.vagueness_density;
    let salary = f.meta.salary_transparency;
    let urgency = f.meta.posting_urgency;
    let buzzwords = f.text.buzzword_ratio;
    let requirements = f.meta.requirement_clarity;
    let contact = f.meta.contact_info_score;
    let pressure = f.linguistic.persuasion_tactics;
    let timeline = f.behavioral.timeline_realism;

    vec![
        Check {
            name: "Vague job description",
            category: ConditionCategory::Content,
            impact: Impact::High,
            value: vagueness,
            detected: vagueness > 15.0,
            confidence: vagueness * 4.0,
            description: with_evidence(
                "The posting leans on non-committal wording instead of concrete duties.",
                &text.matched_tokens(&VAGUE_TERMS),
            ),
        },
        Check {
            name: "Missing salary information",
            category: ConditionCategory::Compensation,
            impact: Impact::High,
            value: salary,
            detected: salary < 40.0,
            confidence: 100.0 - salary,
            description: "No concrete pay figure or range is given.".to_string(),
        },
        Check {
            name: "Urgent language indicators",
            category: ConditionCategory::Language,
            impact: Impact::Medium,
            value: urgency,
            detected: urgency > 50.0,
            confidence: urgency * 1.2,
            description: with_evidence(
                "The posting pushes for an immediate decision.",
                &text.matched_phrases(URGENT_PHRASES),
            ),
        },
        Check {
            name: "Excessive buzzwords",
            category: ConditionCategory::Language,
            impact: Impact::Medium,
            value: buzzwords,
            detected: buzzwords > 5.0,
            confidence: buzzwords * 10.0,
            description: with_evidence(
                "Hype terms stand in for a description of the actual work.",
                &text.matched_tokens(&BUZZWORDS),
            ),
        },
        Check {
            name: "Unclear requirements",
            category: ConditionCategory::Content,
            impact: Impact::Medium,
            value: requirements,
            detected: requirements < 30.0,
            confidence: 100.0 - requirements * 2.0,
            description: "Few or no concrete qualifications are listed.".to_string(),
        },
        Check {
            name: "Limited contact information",
            category: ConditionCategory::Contact,
            impact: Impact::Medium,
            value: contact,
            detected: contact < 30.0,
            confidence: 100.0 - contact,
            description: "No named contact, phone number, or recruiting team is given."
                .to_string(),
        },
        Check {
            name: "High-pressure tactics",
            category: ConditionCategory::Language,
            impact: Impact::High,
            value: pressure,
            detected: pressure > 40.0,
            confidence: pressure * 1.5,
            description: with_evidence(
                "Scarcity and deadline phrasing is used to rush applicants.",
                &text.matched_phrases(PRESSURE_PHRASES),
            ),
        },
        Check {
            name: "Unrealistic timeline",
            category: ConditionCategory::Process,
            impact: Impact::Low,
            value: timeline,
            detected: timeline < 40.0,
            confidence: 100.0 - timeline,
            description: "The start date is immediate or otherwise implausible.".to_string(),
        },
    ]
    .into_iter()
    .map(Check::finish)
    .collect()
}

fn legitimate_conditions(f: &FeatureBundle) -> Vec<ConditionResult> {
    let requirements = f.meta.requirement_clarity;
    let salary = f.meta.salary_transparency;
    let benefits = f.meta.benefits_specificity;
    let contact = f.meta.contact_info_score;
    let company = f.meta.company_legitimacy;
    let process = f.behavioral.application_process_clarity;
    let interview = f.behavioral.interview_process_mentioned;
    let tone = f.linguistic.professional_tone;

    vec![
        Check {
            name: "Clear requirements",
            category: ConditionCategory::Content,
            impact: Impact::High,
            value: requirements,
            detected: requirements > 60.0,
            confidence: requirements * 1.2,
            description: "Qualifications and experience levels are spelled out.".to_string(),
        },
        Check {
            name: "Salary transparency",
            category: ConditionCategory::Compensation,
            impact: Impact::High,
            value: salary,
            detected: salary > 60.0,
            confidence: salary * 1.1,
            description: "Pay is stated as an amount or range.".to_string(),
        },
        Check {
            name: "Detailed benefits",
            category: ConditionCategory::Compensation,
            impact: Impact::Medium,
            value: benefits,
            detected: benefits > 30.0,
            confidence: benefits * 2.0,
            description: "Specific named benefits are listed.".to_string(),
        },
        Check {
            name: "Complete contact information",
            category: ConditionCategory::Contact,
            impact: Impact::Medium,
            value: contact,
            detected: contact > 40.0,
            confidence: contact * 1.5,
            description: "Applicants can reach a real person or team.".to_string(),
        },
        Check {
            name: "Established company presence",
            category: ConditionCategory::Company,
            impact: Impact::Medium,
            value: company,
            detected: company > 70.0,
            confidence: company,
            description: "The employer is identified with a web presence or background."
                .to_string(),
        },
        Check {
            name: "Defined application process",
            category: ConditionCategory::Process,
            impact: Impact::Medium,
            value: process,
            detected: process > 40.0,
            confidence: process * 1.5,
            description: "The steps to apply are described.".to_string(),
        },
        Check {
            name: "Interview process described",
            category: ConditionCategory::Process,
            impact: Impact::Low,
            value: interview,
            detected: interview > 50.0,
            confidence: interview,
            description: "The posting explains how candidates will be interviewed.".to_string(),
        },
        Check {
            name: "Professional tone",
            category: ConditionCategory::Language,
            impact: Impact::Low,
            value: tone,
            detected: tone > 60.0,
            confidence: tone * 1.1,
            description: "The language is formal and role-focused.".to_string(),
        },
    ]
    .into_iter()
    .map(Check::finish)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::extract;
    use crate::analysis::fixtures::{GHOST_POSTING, LEGIT_POSTING, URGENT_FREEMAIL_POSTING};

    fn run(text: &str) -> ConditionSet {
        evaluate(&extract(text), text)
    }

    fn find<'a>(conditions: &'a [ConditionResult], name: &str) -> &'a ConditionResult {
        conditions
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("condition {name} missing"))
    }

    #[test]
    fn test_eight_conditions_per_side() {
        let set = run(LEGIT_POSTING);
        assert_eq!(set.ghost_conditions.len(), 8);
        assert_eq!(set.legitimate_conditions.len(), 8);
    }

    #[test]
    fn test_confidence_is_clamped() {
        // persuasion 100 * 1.5 and urgency 100 * 1.2 both overflow before clamping
        for text in [GHOST_POSTING, LEGIT_POSTING, "", URGENT_FREEMAIL_POSTING] {
            let set = run(text);
            for c in set.ghost_conditions.iter().chain(&set.legitimate_conditions) {
                assert!(
                    (0.0..=100.0).contains(&c.confidence),
                    "{} = {} for {text:?}",
                    c.name,
                    c.confidence
                );
            }
        }
        let set = run(GHOST_POSTING);
        assert_eq!(find(&set.ghost_conditions, "High-pressure tactics").confidence, 100.0);
        assert_eq!(find(&set.ghost_conditions, "Urgent language indicators").confidence, 100.0);
    }

    #[test]
    fn test_urgent_freemail_posting_detects_urgency() {
        let set = run(URGENT_FREEMAIL_POSTING);
        let urgent = find(&set.ghost_conditions, "Urgent language indicators");
        assert!(urgent.detected);
        assert_eq!(urgent.impact, Impact::Medium);
        assert!(urgent.description.contains("easy money"));
    }

    #[test]
    fn test_freemail_contact_is_limited() {
        let set = run(URGENT_FREEMAIL_POSTING);
        let limited = find(&set.ghost_conditions, "Limited contact information");
        assert!(limited.detected);
        assert_eq!(limited.feature_contribution, 0.0);

        let company = URGENT_FREEMAIL_POSTING.replace("quickhire.jobs@gmail.com", "jobs@quickhire.com");
        assert!(!find(&run(&company).ghost_conditions, "Limited contact information").detected);
    }

    #[test]
    fn test_two_urgent_phrases_are_not_enough() {
        let set = run("Urgent role with an immediate start.");
        assert!(!find(&set.ghost_conditions, "Urgent language indicators").detected);
    }

    #[test]
    fn test_legitimate_posting_green_flags() {
        let set = run(LEGIT_POSTING);
        for name in [
            "Clear requirements",
            "Salary transparency",
            "Detailed benefits",
            "Complete contact information",
            "Established company presence",
            "Defined application process",
            "Interview process described",
            "Professional tone",
        ] {
            assert!(find(&set.legitimate_conditions, name).detected, "{name}");
        }
        assert_eq!(set.detected_ghost().count(), 0);
    }

    #[test]
    fn test_ghost_posting_red_flags() {
        let set = run(GHOST_POSTING);
        for name in [
            "Missing salary information",
            "Urgent language indicators",
            "Excessive buzzwords",
            "Unclear requirements",
            "Limited contact information",
            "High-pressure tactics",
            "Unrealistic timeline",
        ] {
            assert!(find(&set.ghost_conditions, name).detected, "{name}");
        }
        assert_eq!(set.detected_legitimate().count(), 0);
    }

    #[test]
    fn test_feature_contribution_is_raw_value() {
        let features = extract(LEGIT_POSTING);
        let set = evaluate(&features, LEGIT_POSTING);
        assert_eq!(
            find(&set.legitimate_conditions, "Salary transparency").feature_contribution,
            features.meta.salary_transparency
        );
    }

    #[test]
    fn test_condition_serializes_lowercase_enums() {
        let set = run("");
        let json = serde_json::to_value(&set.ghost_conditions[0]).unwrap();
        assert_eq!(json["impact"], "high");
        assert_eq!(json["category"], "content");
        assert!(json.get("featureContribution").is_some());
    }
}
