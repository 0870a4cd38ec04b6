//! Threshold rules that turn sub-scores into reasons and strengths.
//!
//! Each category is an ordered table evaluated top-down; the first rule whose
//! threshold the value exceeds fires, and at most one message per category is
//! emitted. `{pct}` in a template is replaced by the rounded percentage.

use crate::matching::models::MatchExplanation;

/// Where a fired rule's message lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Reason,
    Strength,
}

#[derive(Debug, Clone, Copy)]
pub struct ExplanationRule {
    /// Fires when the value is strictly greater. `None` always fires.
    pub above: Option<f64>,
    pub slot: Slot,
    pub template: &'static str,
}

pub const CONTENT_RULES: &[ExplanationRule] = &[
    ExplanationRule {
        above: Some(0.7),
        slot: Slot::Strength,
        template: "Strong content match with job description",
    },
    ExplanationRule {
        above: Some(0.5),
        slot: Slot::Reason,
        template: "Moderate content match with job description",
    },
    ExplanationRule {
        above: None,
        slot: Slot::Reason,
        template: "Limited content match - consider tailoring resume",
    },
];

pub const SKILL_RULES: &[ExplanationRule] = &[
    ExplanationRule {
        above: Some(0.8),
        slot: Slot::Strength,
        template: "Has {pct}% of required skills",
    },
    ExplanationRule {
        above: Some(0.5),
        slot: Slot::Reason,
        template: "Has {pct}% of required skills - missing some key skills",
    },
    ExplanationRule {
        above: None,
        slot: Slot::Reason,
        template: "Only has {pct}% of required skills",
    },
];

pub const LOCATION_RULES: &[ExplanationRule] = &[ExplanationRule {
    above: Some(0.1),
    slot: Slot::Strength,
    template: "Matches location/remote preferences",
}];

/// First rule in `rules` that fires for `value`, with its rendered message.
pub fn evaluate(rules: &[ExplanationRule], value: f64) -> Option<(Slot, String)> {
    rules
        .iter()
        .find(|rule| rule.above.map_or(true, |threshold| value > threshold))
        .map(|rule| (rule.slot, render(rule.template, value)))
}

/// Halves round away from zero: 62.5 renders as 63.
fn render(template: &str, value: f64) -> String {
    let pct = (value * 100.0).round() as i64;
    template.replace("{pct}", &pct.to_string())
}

/// Builds the explanation for raw sub-scores (content and skills in [0, 1],
/// location bonus in [0, 0.2]).
pub fn explain(content: f64, skills: f64, location: f64) -> MatchExplanation {
    let mut explanation = MatchExplanation::default();

    for (rules, value) in [
        (CONTENT_RULES, content),
        (SKILL_RULES, skills),
        (LOCATION_RULES, location),
    ] {
        match evaluate(rules, value) {
            Some((Slot::Reason, message)) => explanation.reasons.push(message),
            Some((Slot::Strength, message)) => explanation.strengths.push(message),
            None => {}
        }
    }

    explanation
}
