//! TF-IDF vectorization.
//!
//! ```text
//! w(t, d) = tf(t, d) × idf(t)
//! idf(t)  = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! `tf` is the raw count of `t` in document `d`, `N` the number of documents
//! and `df(t)` the number of documents containing `t`. The `+1` terms smooth
//! the IDF so that a term present in every document still carries weight.
//! Every non-empty row is then scaled to unit L2 norm, which makes the dot
//! product of two rows their cosine similarity.

use super::tokenize::tokenize;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1};
use serde::Serialize;
use std::collections::BTreeSet;

/// Ordered, duplicate-free list of terms; position is the column index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    fn from_sorted(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// Number of terms (matrix columns).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term for a column index.
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Column index for a term.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Terms in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Document-term matrix together with its vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    /// One row per document, one column per vocabulary term.
    pub weights: Array2<f32>,
    /// Column → term mapping.
    pub vocabulary: Vocabulary,
    /// Smoothed IDF per column.
    pub idf: Array1<f32>,
}

impl TermMatrix {
    /// Number of documents.
    pub fn n_documents(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of non-zero cells.
    pub fn nnz(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }

    /// Non-zero `(term, weight)` pairs of one row, in column order.
    pub fn row_terms(&self, row: usize) -> Vec<(&str, f32)> {
        self.weights
            .row(row)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0.0)
            .filter_map(|(col, &w)| self.vocabulary.term(col).map(|t| (t, w)))
            .collect()
    }
}

/// Build a TF-IDF matrix over `documents`.
///
/// Rows keep the input order; the vocabulary is sorted lexicographically.
/// A document with no retained term becomes an all-zero row.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `documents` is empty.
/// - [`Error::EmptyVocabulary`] when no document contains a retained term.
pub fn vectorize<S: AsRef<str>>(documents: &[S]) -> Result<TermMatrix> {
    if documents.is_empty() {
        return Err(Error::EmptyInput);
    }

    let tokens: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

    let terms: BTreeSet<&str> = tokens.iter().flatten().map(String::as_str).collect();
    if terms.is_empty() {
        return Err(Error::EmptyVocabulary);
    }
    let vocabulary = Vocabulary::from_sorted(terms.into_iter().map(str::to_owned).collect());

    let n = documents.len();
    let mut weights = Array2::<f32>::zeros((n, vocabulary.len()));
    for (row, doc) in tokens.iter().enumerate() {
        for term in doc {
            if let Some(col) = vocabulary.column(term) {
                weights[[row, col]] += 1.0;
            }
        }
    }

    let idf = smoothed_idf(&weights);
    for mut row in weights.rows_mut() {
        row *= &idf;
        let norm = l2_norm(&row.view());
        if norm > 0.0 {
            row /= norm;
        }
    }

    Ok(TermMatrix {
        weights,
        vocabulary,
        idf,
    })
}

/// `ln((1 + N) / (1 + df)) + 1` for every column of a count matrix.
fn smoothed_idf(counts: &Array2<f32>) -> Array1<f32> {
    let n = counts.nrows() as f32;
    counts
        .columns()
        .into_iter()
        .map(|col| {
            let df = col.iter().filter(|&&c| c > 0.0).count() as f32;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        })
        .collect()
}

fn l2_norm(row: &ArrayView1<'_, f32>) -> f32 {
    row.dot(row).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(m: &TermMatrix, row: usize) -> f32 {
        l2_norm(&m.weights.row(row))
    }

    #[test]
    fn vocabulary_is_sorted_and_unique() {
        let m = vectorize(&["Markets rally", "Markets fall sharply"]).unwrap();
        let terms: Vec<&str> = m.vocabulary.iter().collect();
        assert_eq!(terms, vec!["fall", "markets", "rally", "sharply"]);
        assert_eq!(m.weights.dim(), (2, 4));
        assert_eq!(m.vocabulary.column("rally"), Some(2));
        assert_eq!(m.vocabulary.term(0), Some("fall"));
        assert_eq!(m.vocabulary.column("the"), None);
    }

    #[test]
    fn rows_have_unit_norm() {
        let m = vectorize(&["Markets rally", "Markets fall sharply", "Film festival opens"])
            .unwrap();
        for row in 0..m.n_documents() {
            assert!((norm(&m, row) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn rarer_terms_weigh_more() {
        // "markets" appears in both documents, "rally" in one.
        let m = vectorize(&["Markets rally", "Markets fall"]).unwrap();
        let markets = m.vocabulary.column("markets").unwrap();
        let rally = m.vocabulary.column("rally").unwrap();
        assert!(m.weights[[0, rally]] > m.weights[[0, markets]]);
        assert!(m.idf[rally] > m.idf[markets]);
        assert!((m.idf[markets] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn repeated_terms_weigh_more() {
        let m = vectorize(&["rain rain storm", "sun"]).unwrap();
        let rain = m.vocabulary.column("rain").unwrap();
        let storm = m.vocabulary.column("storm").unwrap();
        assert!(m.weights[[0, rain]] > m.weights[[0, storm]]);
    }

    #[test]
    fn stop_word_only_document_is_zero_row() {
        let m = vectorize(&["Markets rally", "It is what it is", ""]).unwrap();
        assert_eq!(norm(&m, 1), 0.0);
        assert_eq!(norm(&m, 2), 0.0);
        assert_eq!(m.nnz(), 2);
        assert!(m.row_terms(1).is_empty());
        let terms: Vec<&str> = m.row_terms(0).into_iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["markets", "rally"]);
    }

    #[test]
    fn empty_input_is_distinct_from_empty_vocabulary() {
        let none: [&str; 0] = [];
        assert_eq!(vectorize(&none).unwrap_err(), Error::EmptyInput);
        assert_eq!(vectorize(&[""]).unwrap_err(), Error::EmptyVocabulary);
        assert_eq!(
            vectorize(&["the and of", "2024"]).unwrap_err(),
            Error::EmptyVocabulary
        );
    }
}
