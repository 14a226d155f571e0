//! Text normalization and tokenization.
//!
//! Every scorer sees the same view of the essay: whitespace collapsed by
//! [`normalize`], words found by [`tokenize`], and sentences found by
//! [`split_sentences`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Any run of whitespace, including newlines and tabs.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Word tokens, matching `\w+`.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// URLs and email addresses.
static URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)\S+$|\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.?[A-Za-z]*$")
        .expect("valid regex")
});

/// Initials (J.K., U.S.A., etc.).
static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+$").expect("valid regex"));

/// Normalized essay body.
///
/// Holds no whitespace run longer than a single space and no leading or
/// trailing whitespace. Only [`normalize`] builds one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EssayText(String);

impl EssayText {
    /// Borrow the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether nothing is left after normalization.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EssayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EssayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse every whitespace run to one space and trim the ends.
///
/// Never fails; empty or whitespace-only input yields an empty text.
pub fn normalize(raw: &str) -> EssayText {
    EssayText(WHITESPACE_RUN.replace_all(raw, " ").trim().to_string())
}

/// Lowercased `\w+` tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Number of `\w+` tokens.
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Split text into sentences.
///
/// A `.`, `!` or `?` ends a sentence unless the context says otherwise:
/// abbreviations (`Dr.`), initials (`J.K.`), decimals (`3.14`), ellipses,
/// URLs, email addresses, and a lowercase continuation all suppress the
/// break. Fragments shorter than three bytes are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    const MIN_LEN: usize = 3;

    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let end = idx + ch.len_utf8();
        let current = &text[start..end];
        let rest = &text[end..];
        if is_boundary(ch, current, rest) {
            let sentence = current.trim();
            if sentence.len() >= MIN_LEN {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if tail.len() >= MIN_LEN {
        sentences.push(tail);
    }

    sentences
}

fn is_boundary(punct: char, current: &str, rest: &str) -> bool {
    let after = rest.trim_start();
    let Some(next) = after.chars().next() else {
        return true;
    };

    if punct != '.' {
        return match next {
            '"' | '\'' => after.chars().nth(1).is_none_or(char::is_uppercase),
            _ => true,
        };
    }

    // Glued to the next character ("3.14", "e.g.x") or part of an ellipsis.
    if rest.starts_with('.') || (!rest.starts_with(char::is_whitespace) && next.is_alphanumeric())
    {
        return false;
    }

    let before = word_before(current);
    if is_likely_abbreviation(before) || INITIALS.is_match(before) {
        return false;
    }
    if current.ends_with("..") || URL_OR_EMAIL.is_match(before) {
        return false;
    }

    !next.is_lowercase()
}

/// The token immediately before the final period, periods included.
fn word_before(current: &str) -> &str {
    let body = current.trim_end_matches('.');
    let begin = body
        .rfind(|c: char| !(c.is_alphanumeric() || c == '.' || c == '@' || c == '/' || c == ':'))
        .map_or(0, |i| i + body[i..].chars().next().map_or(1, char::len_utf8));
    &current[begin..]
}

fn is_likely_abbreviation(word: &str) -> bool {
    let clean = word.trim_end_matches('.');
    if clean.is_empty() {
        return false;
    }
    if is_abbreviation(&clean.to_lowercase()) {
        return true;
    }
    let mut chars = clean.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}
