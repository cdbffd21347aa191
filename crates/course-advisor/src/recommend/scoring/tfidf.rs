use std::collections::BTreeMap;

use super::tokenize::tokenize;

/// Dense TF-IDF rows for a corpus, one per document, each L2-normalized.
///
/// tfidf(t, d) = count(t, d) × idf(t), with the smoothed
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TfidfMatrix {
    vocabulary: BTreeMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Learn the vocabulary from `documents` and weight every document against it.
    pub(crate) fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        // BTreeMap keeps feature indices sorted by term, independent of hash seeds.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let vocabulary: BTreeMap<String, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&index) = vocabulary.get(token) {
                        row[index] += 1.0;
                    }
                }
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, rows }
    }

    pub(crate) fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub(crate) fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Cosine similarity; a zero vector is orthogonal to everything.
pub(crate) fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.iter_mut() {
            *weight /= norm;
        }
    }
}
