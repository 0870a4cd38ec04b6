// Match scoring engine: resume vs job posting.
// Pure computation in every module except `handlers`; no I/O, no shared mutable state.

pub mod batch;
pub mod explanation;
pub mod handlers;
pub mod location;
pub mod models;
pub mod scorer;
pub mod similarity;
pub mod skills;
pub mod stopwords;
pub mod suggestions;
