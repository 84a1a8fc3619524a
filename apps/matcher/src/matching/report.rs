use crate::models::{MatchReport, SkillSet};

/// Combines the skill sets and score of one analysis into a report.
/// `missing_skills` is every JD skill the resume does not show.
pub fn compose_report(
    resume_skills: SkillSet,
    jd_skills: SkillSet,
    score: f64,
    scorer_backend: &str,
) -> MatchReport {
    let missing_skills = jd_skills.difference(&resume_skills).cloned().collect();

    MatchReport {
        score: score.clamp(0.0, 100.0),
        resume_skills,
        jd_skills,
        missing_skills,
        scorer_backend: scorer_backend.to_string(),
    }
}
