//! Lexical grammar checking.
//!
//! Essays are checked for spelling only: every `\w+` token is looked up in
//! a [`Dictionary`], and unknown tokens are reported with a best-guess
//! correction. No syntactic parsing happens here.

pub mod dictionary;

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use dictionary::Dictionary;

use crate::text;

/// An out-of-dictionary token and its suggested correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Misspelling {
    /// The unknown token, lowercased.
    pub word: String,
    /// Closest dictionary word, if any is within two edits.
    pub suggestion: Option<String>,
}

/// Spelling metric for the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarReport {
    /// `1 - distinct unknown / tokens`, in `[0, 1]`.
    pub score: f64,
    /// Total number of tokens checked.
    pub token_count: usize,
    /// Distinct unknown tokens in lexicographic order.
    pub misspelled: Vec<Misspelling>,
}

/// Check spelling of `text` against `dictionary`.
///
/// An empty text scores 1.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn check_grammar(input: &str, dictionary: &Dictionary) -> GrammarReport {
    let tokens = text::tokenize(input);

    let unknown: BTreeSet<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !dictionary.is_known(t))
        .collect();

    let score = (1.0 - unknown.len() as f64 / tokens.len().max(1) as f64).clamp(0.0, 1.0);

    let misspelled: Vec<Misspelling> = unknown
        .into_iter()
        .map(|word| Misspelling {
            word: word.to_string(),
            suggestion: dictionary.suggest(word),
        })
        .collect();

    tracing::debug!(
        tokens = tokens.len(),
        misspelled = misspelled.len(),
        score,
        "spelling checked"
    );

    GrammarReport {
        score,
        token_count: tokens.len(),
        misspelled,
    }
}
