mod tfidf;
mod tokenize;

use super::domain::CourseRecord;
use tfidf::{cosine_similarity, TfidfMatrix};

/// Tolerance absorbing floating-point error before truncation, so a query
/// identical to a description lands on 100 rather than 99.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Text-similarity scorer over course descriptions.
///
/// Every call builds a fresh corpus from the catalog descriptions plus the
/// lower-cased skills text, so scores are always relative to the query and
/// the full catalog. Nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// One match percentage per catalog entry, in catalog order.
    pub fn score(&self, skills_text: &str, catalog: &[CourseRecord]) -> Vec<u8> {
        let mut corpus: Vec<String> = catalog
            .iter()
            .map(|course| course.description.clone())
            .collect();
        corpus.push(skills_text.to_lowercase());

        let matrix = TfidfMatrix::fit_transform(&corpus);
        let query_row = matrix.n_rows() - 1;
        let Some(query) = matrix.row(query_row) else {
            return vec![0; catalog.len()];
        };

        (0..catalog.len())
            .map(|index| {
                matrix
                    .row(index)
                    .map(|course| to_match_score(cosine_similarity(query, course)))
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Clamp a similarity into [0, 1] and truncate it to a whole percentage.
pub fn to_match_score(similarity: f64) -> u8 {
    if !similarity.is_finite() {
        return 0;
    }
    let clamped = similarity.clamp(0.0, 1.0);
    (clamped * 100.0 + TRUNCATION_EPSILON).floor() as u8
}
