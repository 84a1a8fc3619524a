//! Similarity Scorer — TF-IDF weighted cosine similarity between a resume
//! and a job description.
//!
//! The two texts are the whole corpus for IDF purposes: a term present in
//! both gets a lower weight than a term distinctive to one of them.
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`; `TfIdfScorer` is the
//! default backend.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::NormalizedText;

/// Number of documents in the corpus: the resume and the job description.
const CORPUS_SIZE: f64 = 2.0;

/// Scores lexical overlap between two normalized texts as a percentage.
///
/// Implementations must be symmetric, return a value in `[0, 100]`, and
/// return 0 when either side has no tokens.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, resume: &NormalizedText, jd: &NormalizedText) -> f64;

    /// Backend label surfaced in reports.
    fn backend(&self) -> &'static str;
}

/// Pure-Rust TF-IDF + cosine scorer. Deterministic, no external calls.
///
/// Algorithm:
/// 1. tokenize both texts, counting raw term frequency
/// 2. idf(t) = ln((1 + n) / (1 + df(t))) + 1, n = 2
/// 3. weight = tf × idf, over the union of both token sets
/// 4. score = cos(θ) × 100, rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, resume: &NormalizedText, jd: &NormalizedText) -> f64 {
        to_percentage(tfidf_cosine(resume.as_str(), jd.as_str()))
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Splits on anything that is not alphanumeric. Every non-empty run is a
/// token, single letters included ("c", "r"). Input is expected to be
/// lower-cased already.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

fn term_frequencies(text: &str) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn smoothed_idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}

/// Cosine of the TF-IDF vectors of `a` and `b`, in `[0, 1]`.
/// Zero vectors yield 0 rather than NaN.
pub fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let tf_a = term_frequencies(a);
    let tf_b = term_frequencies(b);
    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    // Sorted union so both argument orders sum in the same sequence.
    let terms: BTreeSet<&str> = tf_a.keys().chain(tf_b.keys()).copied().collect();

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for term in terms {
        let count_a = tf_a.get(term).copied().unwrap_or(0.0);
        let count_b = tf_b.get(term).copied().unwrap_or(0.0);
        let df = [count_a, count_b].iter().filter(|&&c| c > 0.0).count() as f64;
        let idf = smoothed_idf(df);

        let w_a = count_a * idf;
        let w_b = count_b * idf;
        dot += w_a * w_b;
        norm_a += w_a * w_a;
        norm_b += w_b * w_b;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot / denominator).clamp(0.0, 1.0)
}

/// Scales a cosine to a percentage rounded to 2 decimal places.
pub fn to_percentage(cosine: f64) -> f64 {
    ((cosine * 100.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "experienced in python, sql and docker for backend development";
    const JD: &str = "looking for a candidate skilled in python, aws, docker and kubernetes";

    fn score(a: &str, b: &str) -> f64 {
        TfIdfScorer.score(&NormalizedText::new(a), &NormalizedText::new(b))
    }

    #[test]
    fn test_tokenize_splits_on_non_alphanumeric() {
        let tokens: Vec<_> = tokenize("c++/rust, node.js & k8s a").collect();
        assert_eq!(tokens, vec!["c", "rust", "node", "js", "k8s", "a"]);
    }

    #[test]
    fn test_score_is_symmetric() {
        assert_eq!(score(RESUME, JD), score(JD, RESUME));
        let a = "rust rust rust tokio axum";
        let b = "rust python django postgres postgres";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_identical_text_scores_100() {
        assert_eq!(score(RESUME, RESUME), 100.0);
        assert_eq!(score("rust", "rust"), 100.0);
    }

    #[test]
    fn test_single_char_text_scores_100() {
        assert_eq!(score("c", "c"), 100.0);
        assert_eq!(score("r", "r"), 100.0);
        assert_eq!(score("C", "c"), 100.0);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        assert_eq!(score(RESUME, ""), 0.0);
        assert_eq!(score("", JD), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn test_tokenless_text_scores_zero() {
        // punctuation only
        assert_eq!(score("! ? -- ...", JD), 0.0);
        assert_eq!(score(JD, "/ + #"), 0.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(score("rust tokio", "python django"), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let s = score(RESUME, JD);
        assert!(s > 0.0 && s < 100.0, "score was {s}");
    }

    #[test]
    fn test_shared_terms_weighted_below_unique_terms() {
        assert!(smoothed_idf(2.0) < smoothed_idf(1.0));
        assert!((smoothed_idf(2.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_value() {
        // shared "rust" has idf 1, unique "go"/"sql" have idf ln(1.5) + 1
        let unique = 1.5_f64.ln() + 1.0;
        let expected = 1.0 / (1.0 + unique * unique);
        let cosine = tfidf_cosine("rust go", "rust sql");
        assert!((cosine - expected).abs() < 1e-12, "cosine was {cosine}");
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(TfIdfScorer.backend(), "tfidf");
    }
}
