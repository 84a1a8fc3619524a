pub mod document;
pub mod report;

pub use document::{Document, DocumentFormat, NormalizedText};
pub use report::{MatchReport, SkillSet};
