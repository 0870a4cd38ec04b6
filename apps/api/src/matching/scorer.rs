//! Match scoring: composes content similarity, skill overlap and location bonus
//! into a bounded 0 – 100 score with an explanation.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `TfIdfMatchScorer` is the default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::explanation::explain;
use crate::matching::location::location_bonus;
use crate::matching::models::{MatchInput, MatchResult, ScoreBreakdown};
use crate::matching::similarity::content_similarity;
use crate::matching::skills::{extract_skills, skill_overlap};

/// Weights applied to the raw sub-scores. They sum to 1.0, so the total never
/// leaves [0, 1] before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub content: f64,
    pub skills: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            content: 0.50,
            skills: 0.40,
            location: 0.10,
        }
    }
}

/// Scores one resume against one job. Implementations must be pure.
pub trait MatchScorer: Send + Sync {
    fn score(&self, input: &MatchInput) -> MatchResult;

    /// Backend label for logs and responses.
    fn backend(&self) -> &'static str;
}

/// TF-IDF + vocabulary skill overlap + location bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfMatchScorer;

impl MatchScorer for TfIdfMatchScorer {
    fn score(&self, input: &MatchInput) -> MatchResult {
        compute_match_score(input)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Computes the full match result for `input` with the default weights.
///
/// Never fails: empty text, empty skill lists and missing preferences all
/// have defined fallbacks.
pub fn compute_match_score(input: &MatchInput) -> MatchResult {
    compute_match_score_with(input, &MatchWeights::default())
}

fn compute_match_score_with(input: &MatchInput, weights: &MatchWeights) -> MatchResult {
    let resume_skills = resolve_skills(&input.resume_skills, &input.resume_text);
    let job_skills = resolve_skills(&input.job_skills, &input.job_text);

    let content = content_similarity(&input.resume_text, &input.job_text);
    let overlap = skill_overlap(&resume_skills, &job_skills);
    let bonus = location_bonus(
        input.user_location.as_deref(),
        input.user_work_type_preference,
        input.job_location.as_deref(),
        input.job_work_type,
    );

    let total =
        content * weights.content + overlap.score * weights.skills + bonus * weights.location;
    let match_score = total * 100.0;

    debug!(
        match_score,
        content,
        skill_overlap = overlap.score,
        location_bonus = bonus,
        missing = overlap.missing.len(),
        "Computed match score"
    );

    MatchResult {
        match_score,
        breakdown: ScoreBreakdown {
            content_similarity: content * 100.0,
            skill_overlap: overlap.score * 100.0,
            location_bonus: bonus * 100.0,
        },
        explanation: explain(content, overlap.score, bonus),
        missing_skills: overlap.missing,
    }
}

/// Uses caller-supplied skills when present, otherwise extracts them from text.
fn resolve_skills(supplied: &[String], text: &str) -> Vec<String> {
    if supplied.is_empty() {
        extract_skills(text).merged()
    } else {
        supplied.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::WorkType;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.content + w.skills + w.location - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_weighted_sum_of_breakdown() {
        let input = MatchInput {
            resume_text: "Rust engineer with Kafka and Postgres experience".to_string(),
            job_text: "Hiring a Rust engineer, Kafka preferred".to_string(),
            user_location: Some("Austin".to_string()),
            user_work_type_preference: Some(WorkType::Hybrid),
            job_location: Some("Austin, TX".to_string()),
            job_work_type: Some(WorkType::Remote),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        let b = result.breakdown;
        let expected = b.content_similarity * 0.5 + b.skill_overlap * 0.4 + b.location_bonus * 0.1;
        assert!((result.match_score - expected).abs() < 1e-6);
    }

    #[test]
    fn test_empty_resume_text_contributes_no_content() {
        let input = MatchInput {
            resume_text: String::new(),
            job_text: "Python backend role".to_string(),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        assert_eq!(result.breakdown.content_similarity, 0.0);
        // "python" extracted from the job, nothing from the empty resume.
        assert_eq!(result.breakdown.skill_overlap, 0.0);
        assert_eq!(result.missing_skills, skills(&["python"]));
        assert_eq!(result.match_score, 0.0);
    }

    #[test]
    fn test_no_job_skills_is_vacuous_full_overlap() {
        let input = MatchInput {
            resume_text: "anything at all".to_string(),
            job_text: "warehouse picker".to_string(),
            resume_skills: skills(&["python"]),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        assert_eq!(result.breakdown.skill_overlap, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_supplied_skills_take_precedence_over_text() {
        let input = MatchInput {
            resume_text: "python docker".to_string(),
            job_text: "python docker kubernetes".to_string(),
            resume_skills: skills(&["python", "docker"]),
            job_skills: skills(&["python", "docker", "kubernetes"]),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        assert!((result.breakdown.skill_overlap - 200.0 / 3.0).abs() < 1e-6);
        assert_eq!(result.missing_skills, skills(&["kubernetes"]));
    }

    #[test]
    fn test_react_python_aws_scenario() {
        let input = MatchInput {
            resume_text: "Frontend developer: React and Python projects".to_string(),
            job_text: "We need React, Python and AWS experience".to_string(),
            user_location: Some("Austin".to_string()),
            user_work_type_preference: Some(WorkType::Remote),
            job_location: Some("Austin, TX".to_string()),
            job_work_type: Some(WorkType::Remote),
            ..Default::default()
        };
        let result = compute_match_score(&input);

        assert!((result.breakdown.skill_overlap - 200.0 / 3.0).abs() < 1e-6);
        assert_eq!(result.missing_skills, skills(&["aws"]));
        assert!(result
            .explanation
            .reasons
            .iter()
            .any(|r| r.to_lowercase().contains("has 67% of required skills")));
        assert!((result.breakdown.location_bonus - 20.0).abs() < 1e-6);
        assert!(result
            .explanation
            .strengths
            .contains(&"Matches location/remote preferences".to_string()));
    }

    #[test]
    fn test_perfect_match_scores_high() {
        let text = "Senior Python engineer: Django, PostgreSQL, Docker, AWS, leadership";
        let input = MatchInput {
            resume_text: text.to_string(),
            job_text: text.to_string(),
            user_work_type_preference: Some(WorkType::Remote),
            job_work_type: Some(WorkType::Remote),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        assert!(result.match_score > 90.0, "score was {}", result.match_score);
        assert!(result.missing_skills.is_empty());
        assert!(!result.explanation.strengths.is_empty());
    }

    #[test]
    fn test_poor_match_scores_low() {
        let input = MatchInput {
            resume_text: "Pastry chef, croissants and laminated dough".to_string(),
            job_text: "Kubernetes platform engineer with Terraform and AWS".to_string(),
            ..Default::default()
        };
        let result = compute_match_score(&input);
        assert!(result.match_score < 50.0);
        assert!(!result.explanation.reasons.is_empty());
        assert!(!result.missing_skills.is_empty());
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let inputs = [
            MatchInput::default(),
            MatchInput {
                resume_text: "the of and".to_string(),
                job_text: "a an the".to_string(),
                ..Default::default()
            },
            MatchInput {
                resume_text: "rust rust rust".to_string(),
                job_text: "rust".to_string(),
                user_location: Some("Remote".to_string()),
                user_work_type_preference: Some(WorkType::Remote),
                job_location: Some("remote".to_string()),
                job_work_type: Some(WorkType::Remote),
                ..Default::default()
            },
        ];
        for input in &inputs {
            let result = compute_match_score(input);
            assert!((0.0..=100.0).contains(&result.match_score));
            assert!((0.0..=100.0).contains(&result.breakdown.content_similarity));
            assert!((0.0..=100.0).contains(&result.breakdown.skill_overlap));
            assert!((0.0..=20.0 + 1e-9).contains(&result.breakdown.location_bonus));
        }
    }

    #[test]
    fn test_scoring_is_deterministic_across_threads() {
        let input = MatchInput {
            resume_text: "Go developer, gRPC, Redis, observability and mentoring".to_string(),
            job_text: "Backend Go role: gRPC services, Redis caching, on-call".to_string(),
            ..Default::default()
        };
        let baseline = compute_match_score(&input);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let input = input.clone();
                std::thread::spawn(move || TfIdfMatchScorer.score(&input))
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert!((result.match_score - baseline.match_score).abs() < 1e-6);
            assert_eq!(result.missing_skills, baseline.missing_skills);
            assert_eq!(result.explanation, baseline.explanation);
        }
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(TfIdfMatchScorer.backend(), "tfidf");
    }
}
