use tracing::debug;

use crate::extraction::{extract_text, ExtractError};
use crate::matching::report::compose_report;
use crate::matching::similarity::SimilarityScorer;
use crate::models::{Document, MatchReport, NormalizedText};
use crate::skills::{extract_skills, SkillVocabulary};

/// Full analysis of one request: extract → score → extract skills twice →
/// compose. CPU-bound; handlers run it inside `spawn_blocking`.
///
/// An extraction failure aborts the analysis and no report is produced.
pub fn analyze(
    resume: &Document,
    jd_text: &str,
    vocabulary: &SkillVocabulary,
    scorer: &dyn SimilarityScorer,
) -> Result<MatchReport, ExtractError> {
    let resume_text = extract_text(resume)?;
    Ok(analyze_text(&resume_text, jd_text, vocabulary, scorer))
}

/// Same as [`analyze`] for a resume that is already text.
pub fn analyze_text(
    resume_text: &NormalizedText,
    jd_text: &str,
    vocabulary: &SkillVocabulary,
    scorer: &dyn SimilarityScorer,
) -> MatchReport {
    let jd_text = NormalizedText::new(jd_text);

    let score = scorer.score(resume_text, &jd_text);
    let resume_skills = extract_skills(resume_text, vocabulary);
    let jd_skills = extract_skills(&jd_text, vocabulary);

    let report = compose_report(resume_skills, jd_skills, score, scorer.backend());
    debug!(
        score = report.score,
        resume_skills = report.resume_skills.len(),
        jd_skills = report.jd_skills.len(),
        missing_skills = report.missing_skills.len(),
        "Analysis complete"
    );
    report
}
