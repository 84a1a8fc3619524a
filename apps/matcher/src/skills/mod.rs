// Skill Vocabulary + Skill Extractor.
// The vocabulary is loaded once in main and shared read-only via AppState.

pub mod extractor;
pub mod vocabulary;

pub use extractor::extract_skills;
pub use vocabulary::SkillVocabulary;
