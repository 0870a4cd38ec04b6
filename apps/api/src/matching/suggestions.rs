//! Advice for users with no or few matches, derived from a profile snapshot.

use serde::{Deserialize, Serialize};

use crate::matching::models::WorkType;

/// Below this many matches a fully set-up profile still gets advice.
pub const MIN_MATCHES_THRESHOLD: usize = 5;
/// Job listings below this count are reported as limited.
pub const LIMITED_JOBS_THRESHOLD: usize = 10;
/// Minimum salary above which the expectation is flagged.
pub const HIGH_SALARY_THRESHOLD: u64 = 150_000;

const RESUME_UPLOAD_URL: &str = "/api/v1/resume/upload";
const PREFERENCES_URL: &str = "/api/v1/preferences/me";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Resume,
    Preferences,
    Jobs,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub title: String,
    pub description: String,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub min_salary: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub has_resume: bool,
    #[serde(default)]
    pub resume_parsed: bool,
    #[serde(default)]
    pub preferences: Option<PreferenceSnapshot>,
    pub active_job_count: usize,
    pub match_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub has_matches: bool,
    pub match_count: usize,
    pub suggestions: Vec<Suggestion>,
    pub message: String,
}

fn suggestion(
    suggestion_type: SuggestionType,
    title: &str,
    description: impl Into<String>,
    action_url: Option<&str>,
) -> Suggestion {
    Suggestion {
        suggestion_type,
        title: title.to_string(),
        description: description.into(),
        action_url: action_url.map(str::to_string),
    }
}

/// Suggestions in rule order: resume, preferences, job supply, then profile.
pub fn generate_suggestions(profile: &ProfileSnapshot) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !profile.has_resume {
        suggestions.push(suggestion(
            SuggestionType::Resume,
            "Upload your resume",
            "Upload your CV/resume to enable job matching. We support PDF and DOCX formats.",
            Some(RESUME_UPLOAD_URL),
        ));
    } else if !profile.resume_parsed {
        suggestions.push(suggestion(
            SuggestionType::Resume,
            "Resume parsing incomplete",
            "Your resume is still being processed. Please wait a moment and try again.",
            None,
        ));
    }

    match &profile.preferences {
        None => suggestions.push(suggestion(
            SuggestionType::Preferences,
            "Set your job preferences",
            "Configure your preferred job roles, locations, salary range, and work type to improve match quality.",
            Some(PREFERENCES_URL),
        )),
        Some(prefs) => {
            let location_set = prefs.location.as_deref().is_some_and(|l| !l.is_empty());
            let site_bound = prefs.work_type.is_some_and(|w| !w.is_flexible());
            if location_set && site_bound {
                suggestions.push(suggestion(
                    SuggestionType::Preferences,
                    "Consider remote work",
                    "Enabling remote or hybrid work options can significantly increase your job matches.",
                    Some(PREFERENCES_URL),
                ));
            }
            if prefs.min_salary.is_some_and(|s| s > HIGH_SALARY_THRESHOLD) {
                suggestions.push(suggestion(
                    SuggestionType::Preferences,
                    "Adjust salary expectations",
                    "Your minimum salary requirement may be limiting matches. Consider adjusting for more opportunities.",
                    Some(PREFERENCES_URL),
                ));
            }
        }
    }

    if profile.active_job_count == 0 {
        suggestions.push(suggestion(
            SuggestionType::Jobs,
            "No active jobs available",
            "There are currently no active job listings. New jobs are fetched hourly from configured sources.",
            None,
        ));
    } else if profile.active_job_count < LIMITED_JOBS_THRESHOLD {
        suggestions.push(suggestion(
            SuggestionType::Jobs,
            "Limited job listings",
            format!(
                "Only {} jobs are currently available. More jobs will be added as sources are fetched.",
                profile.active_job_count
            ),
            None,
        ));
    }

    if profile.has_resume
        && profile.preferences.is_some()
        && profile.match_count < MIN_MATCHES_THRESHOLD
        && profile.active_job_count >= LIMITED_JOBS_THRESHOLD
    {
        suggestions.push(suggestion(
            SuggestionType::Profile,
            "Enhance your profile",
            "Add more skills and experience details to your resume to improve match scores.",
            Some(RESUME_UPLOAD_URL),
        ));
        suggestions.push(suggestion(
            SuggestionType::Preferences,
            "Broaden your search criteria",
            "Try expanding your preferred roles or locations to discover more opportunities.",
            Some(PREFERENCES_URL),
        ));
    }

    suggestions
}

/// Wraps [`generate_suggestions`] with a summary message.
pub fn build_suggestions_response(profile: &ProfileSnapshot) -> SuggestionsResponse {
    let suggestions = generate_suggestions(profile);
    let has_matches = profile.match_count > 0;

    let message = if !has_matches {
        "No matches found. Follow the suggestions below to improve your results.".to_string()
    } else if profile.match_count < MIN_MATCHES_THRESHOLD {
        format!(
            "Only {} matches found. Consider the suggestions below for more opportunities.",
            profile.match_count
        )
    } else {
        format!(
            "You have {} matches. Keep your profile updated for the best results.",
            profile.match_count
        )
    };

    SuggestionsResponse {
        has_matches,
        match_count: profile.match_count,
        suggestions,
        message,
    }
}
