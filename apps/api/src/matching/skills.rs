//! Skill vocabularies, vocabulary-based extraction, and required-skill overlap.
//!
//! Extraction is plain substring containment on the lowercased text, so
//! "react" also hits inside "reactive". Keep it that way: tightening the match
//! changes scores for every stored resume.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Technical skills recognised in free text.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "react",
    "vue",
    "angular",
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    "asp.net",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "terraform",
    "git",
    "ci/cd",
    "jenkins",
    "github actions",
    "gitlab ci",
    "machine learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "rest api",
    "graphql",
    "websockets",
    "grpc",
    "agile",
    "scrum",
    "kanban",
    "jira",
    "linux",
    "unix",
    "windows",
    "macos",
    "testing",
    "pytest",
    "jest",
    "mocha",
    "rspec",
    "devops",
    "sre",
    "monitoring",
    "logging",
    "observability",
];

/// Soft skills recognised in free text.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "project management",
    "mentoring",
    "collaboration",
    "adaptability",
    "creativity",
];

/// Vocabulary hits found in a piece of text, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl ExtractedSkills {
    /// Technical followed by soft skills, as one flat list.
    pub fn merged(self) -> Vec<String> {
        let mut all = self.technical;
        all.extend(self.soft);
        all
    }
}

/// Finds every vocabulary term contained in `text` (case-insensitive).
pub fn extract_skills(text: &str) -> ExtractedSkills {
    if text.is_empty() {
        return ExtractedSkills::default();
    }

    let text_lower = text.to_lowercase();
    ExtractedSkills {
        technical: vocabulary_hits(TECH_SKILLS, &text_lower),
        soft: vocabulary_hits(SOFT_SKILLS, &text_lower),
    }
}

fn vocabulary_hits(vocabulary: &[&str], text_lower: &str) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Fraction of required job skills the resume covers, plus the uncovered ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOverlap {
    /// 0.0 – 1.0
    pub score: f64,
    pub missing: Vec<String>,
}

/// Compares skill lists case-insensitively.
///
/// No job skills means nothing can be missing: score 1.0. Duplicate job
/// skills count once; `missing` keeps the first spelling of each uncovered
/// skill in job-skill order.
pub fn skill_overlap(resume_skills: &[String], job_skills: &[String]) -> SkillOverlap {
    if job_skills.is_empty() {
        return SkillOverlap {
            score: 1.0,
            missing: Vec::new(),
        };
    }

    let resume_set: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let mut covered = 0usize;
    let mut missing = Vec::new();

    for skill in job_skills {
        let skill_lower = skill.to_lowercase();
        if !seen.insert(skill_lower.clone()) {
            continue;
        }
        if resume_set.contains(&skill_lower) {
            covered += 1;
        } else {
            missing.push(skill.clone());
        }
    }

    let score = (covered as f64 / seen.len() as f64).min(1.0);

    SkillOverlap { score, missing }
}
