//! Batch scoring — one resume against many job postings, ranked and filtered.
//!
//! Each job is an independent `MatchScorer::score` call; nothing is shared
//! between iterations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::matching::models::{MatchInput, MatchResult, WorkType};
use crate::matching::scorer::MatchScorer;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub text: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl JobPosting {
    /// Title, description and requirements joined for scoring.
    pub fn scoring_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.requirements.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: Uuid,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub matches_computed: usize,
    pub matches_stored: usize,
    pub min_score: f64,
    /// Highest score first.
    pub matches: Vec<JobMatch>,
    pub message: String,
    pub computed_at: DateTime<Utc>,
}

/// Builds the engine input for one resume/job pair.
pub fn build_input(
    resume: &ResumeDocument,
    preferences: &MatchPreferences,
    job: &JobPosting,
) -> MatchInput {
    MatchInput {
        resume_text: resume.text.clone(),
        job_text: job.scoring_text(),
        resume_skills: resume.skills.clone(),
        job_skills: job.skills.clone(),
        user_location: preferences.location.clone(),
        user_work_type_preference: preferences.work_type,
        job_location: job.location.clone(),
        job_work_type: job.work_type,
    }
}

/// Scores `resume` against every job, keeps matches at or above `min_score`
/// and ranks them by score descending. Equal scores keep input order.
pub fn score_resume_against_jobs(
    scorer: &dyn MatchScorer,
    resume: &ResumeDocument,
    preferences: &MatchPreferences,
    jobs: &[JobPosting],
    min_score: f64,
) -> BatchOutcome {
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| JobMatch {
            job_id: job.id,
            result: scorer.score(&build_input(resume, preferences, job)),
        })
        .filter(|m| m.result.match_score >= min_score)
        .collect();

    matches.sort_by(|a, b| b.result.match_score.total_cmp(&a.result.match_score));

    let matches_computed = jobs.len();
    let matches_stored = matches.len();

    info!(
        backend = scorer.backend(),
        matches_computed, matches_stored, min_score, "Batch match computation complete"
    );

    BatchOutcome {
        matches_computed,
        matches_stored,
        min_score,
        matches,
        message: format!(
            "Computed {matches_computed} matches, stored {matches_stored} above threshold"
        ),
        computed_at: Utc::now(),
    }
}
