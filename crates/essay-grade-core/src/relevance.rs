//! Domain relevance: distributional similarity plus explicit keyword use.
//!
//! The two signals are kept apart. TF-IDF similarity rewards an essay whose
//! vocabulary is distributed like the domain's reference corpus; keyword
//! coverage counts which of the domain's own terms the essay actually uses.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::{DomainProfile, DomainRegistry};
use crate::text;
use crate::tfidf;

/// Relevance metric for the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RelevanceReport {
    /// TF-IDF cosine similarity to the reference corpus, in `[0, 1]`.
    pub score: f64,
    /// Domain keywords present in the essay, sorted.
    pub matched_keywords: Vec<String>,
    /// Share of the domain's keywords present, in `[0, 1]`.
    pub coverage: f64,
    /// Whether the domain was found in the registry.
    pub known_domain: bool,
}

/// Score `text` against the named domain.
///
/// An unknown domain is not an error: it degrades to an empty reference
/// corpus and keyword set, so similarity and coverage are both zero.
#[tracing::instrument(skip(input, registry), fields(text_len = input.len()))]
pub fn score_relevance(input: &str, domain: &str, registry: &DomainRegistry) -> RelevanceReport {
    match registry.get(domain) {
        Some(profile) => score_against(input, profile, true),
        None => {
            tracing::warn!(domain, "unknown domain, falling back to empty corpus");
            score_against(input, &DomainProfile::empty(domain), false)
        }
    }
}

/// Score `text` against a specific profile.
pub fn score_against(input: &str, profile: &DomainProfile, known_domain: bool) -> RelevanceReport {
    let score = tfidf::similarity(profile.reference_corpus(), input);

    let tokens: HashSet<String> = text::tokenize(input).into_iter().collect();
    let keywords = profile.keywords();
    // BTreeSet iteration keeps the matches sorted.
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| tokens.contains(*k))
        .cloned()
        .collect();
    let coverage = (matched_keywords.len() as f64 / keywords.len().max(1) as f64).clamp(0.0, 1.0);

    tracing::debug!(
        domain = profile.name(),
        similarity = score,
        matched = matched_keywords.len(),
        coverage,
        "relevance scored"
    );

    RelevanceReport {
        score,
        matched_keywords,
        coverage,
        known_domain,
    }
}
