use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Skills detected in one text. Iteration order is alphabetical but callers
/// must not depend on it.
pub type SkillSet = BTreeSet<String>;

/// Outcome of one resume vs job description analysis. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Percentage in [0, 100], rounded to 2 decimals.
    pub score: f64,
    pub resume_skills: SkillSet,
    pub jd_skills: SkillSet,
    /// `jd_skills - resume_skills`
    pub missing_skills: SkillSet,
    pub scorer_backend: String,
}
