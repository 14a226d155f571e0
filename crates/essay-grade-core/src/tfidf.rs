//! Minimal TF-IDF vector space over a handful of documents.
//!
//! Terms are lowercased `\b\w\w+\b` matches minus English stop words. Term
//! frequency is the raw count, inverse document frequency is smoothed as
//! `ln((1 + n) / (1 + df)) + 1`, and each document vector is L2-normalized,
//! so cosine similarity is a plain dot product.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::stop_words::is_stop_word;

/// Terms of two or more word characters.
static TERM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// L2-normalized TF-IDF rows, one per input document.
///
/// Rows are ordered maps so float sums are reproducible across calls.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    rows: Vec<BTreeMap<String, f64>>,
}

impl TfIdf {
    /// Fit the vocabulary and weights over `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let counts: Vec<BTreeMap<String, usize>> =
            documents.iter().map(|d| term_counts(d.as_ref())).collect();

        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *df.entry(term.as_str()).or_default() += 1;
            }
        }

        let n = documents.len() as f64;
        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: BTreeMap<String, f64> = doc
                    .iter()
                    .map(|(term, &tf)| {
                        let idf = ((1.0 + n) / (1.0 + df[term.as_str()] as f64)).ln() + 1.0;
                        (term.clone(), tf as f64 * idf)
                    })
                    .collect();
                let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.values_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        Self { rows }
    }

    /// Number of fitted documents.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing was fitted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cosine similarity between documents `a` and `b`, clamped to `[0, 1]`.
    ///
    /// Zero when either index is out of range or either vector is empty.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        let (Some(left), Some(right)) = (self.rows.get(a), self.rows.get(b)) else {
            return 0.0;
        };
        let (small, large) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|v| w * v))
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Cosine similarity of two texts in a space fitted over just the pair.
pub fn similarity(reference: &str, text: &str) -> f64 {
    TfIdf::fit(&[reference, text]).cosine(0, 1)
}

fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for m in TERM.find_iter(text) {
        let term = m.as_str().to_lowercase();
        if !is_stop_word(&term) {
            *counts.entry(term).or_insert(0) += 1;
        }
    }
    counts
}
