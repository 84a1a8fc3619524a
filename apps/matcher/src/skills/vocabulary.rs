use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Column the vocabulary file must carry.
const SKILL_COLUMN: &str = "skill";

/// Built-in vocabulary used when no `SKILLS_CSV` is configured.
const BUILTIN_SKILLS: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "c", "c++", "c#", "go", "rust", "ruby",
    "php", "kotlin", "swift", "scala", "r", "sql", "bash", "html", "css",
    // frameworks
    "react", "angular", "vue", "node.js", "django", "flask", "fastapi", "spring boot",
    ".net", "ruby on rails", "express",
    // data and ml
    "machine learning", "deep learning", "nlp", "computer vision", "pandas", "numpy",
    "scikit-learn", "tensorflow", "pytorch", "spark", "hadoop", "kafka", "airflow",
    "tableau", "power bi", "excel", "data analysis", "statistics",
    // storage
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "dynamodb", "sqlite",
    // cloud and ops
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "ci/cd", "linux", "git", "graphql", "rest api", "microservices",
    // practice
    "agile", "scrum", "jira", "unit testing", "system design",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Cannot open skills file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed skills file '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Skills file '{}' has no 'skill' column", .path.display())]
    MissingColumn { path: PathBuf },
}

/// Ordered, case-folded, de-duplicated list of recognised skills.
///
/// Loaded once at startup and shared read-only (behind an `Arc`) by every
/// request afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary entries: lower-cases, trims and
    /// collapses inner whitespace, drops blanks and later duplicates.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = entries
            .into_iter()
            .map(|s| canonical_skill(s.as_ref()))
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { skills }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_SKILLS)
    }

    /// Reads the `skill` column of a CSV file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self, VocabularyError> {
        let file = File::open(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let csv_err = |source: csv::Error| VocabularyError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let column = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(SKILL_COLUMN))
            .ok_or_else(|| VocabularyError::MissingColumn {
                path: path.to_path_buf(),
            })?;

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            if let Some(cell) = record.get(column) {
                entries.push(cell.to_string());
            }
        }

        let vocabulary = Self::new(entries);
        info!(
            "Loaded {} skills from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, VocabularyError> {
        match path {
            Some(p) => Self::from_csv_path(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn canonical_skill(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
