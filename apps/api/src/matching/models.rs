use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Work arrangement shared by user preferences and job postings.
///
/// Parsed case-insensitively; an unknown value is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkType {
    Remote,
    Hybrid,
    FullTime,
    PartTime,
    Contract,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Remote => "remote",
            WorkType::Hybrid => "hybrid",
            WorkType::FullTime => "full-time",
            WorkType::PartTime => "part-time",
            WorkType::Contract => "contract",
        }
    }

    /// True for arrangements that do not pin the worker to a site.
    pub fn is_flexible(&self) -> bool {
        matches!(self, WorkType::Remote | WorkType::Hybrid)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(WorkType::Remote),
            "hybrid" => Ok(WorkType::Hybrid),
            "full-time" => Ok(WorkType::FullTime),
            "part-time" => Ok(WorkType::PartTime),
            "contract" => Ok(WorkType::Contract),
            other => Err(format!(
                "unknown work type '{other}' (expected remote, hybrid, full-time, part-time or contract)"
            )),
        }
    }
}

impl TryFrom<String> for WorkType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkType> for String {
    fn from(value: WorkType) -> Self {
        value.as_str().to_string()
    }
}

/// Everything the engine needs to score one resume against one job.
///
/// Empty skill lists are derived from the corresponding text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub resume_text: String,
    pub job_text: String,
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub user_location: Option<String>,
    #[serde(default)]
    pub user_work_type_preference: Option<WorkType>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default)]
    pub job_work_type: Option<WorkType>,
}

/// Per-dimension contributions, each on its own scale:
/// content and skills in [0, 100], location in [0, 20].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content_similarity: f64,
    pub skill_overlap: f64,
    pub location_bonus: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub reasons: Vec<String>,
    pub strengths: Vec<String>,
}

/// Final output of a single resume/job comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 – 100
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanation: MatchExplanation,
    pub missing_skills: Vec<String>,
}
