//! Frequency-ranked spelling dictionary with edit-distance corrections.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use camino::Utf8Path;

use crate::dictionaries::english;
use crate::error::DictionaryError;

/// The built-in English dictionary, built once per process.
static ENGLISH: LazyLock<Arc<Dictionary>> = LazyLock::new(|| {
    let mut dict = Dictionary::from_words(english::WORDS.iter().copied());
    dict.extend(word_list_entries(english::WORD_LIST));
    tracing::debug!(words = dict.len(), "built-in dictionary loaded");
    Arc::new(dict)
});

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Words longer than this only get distance-1 corrections.
const MAX_DISTANCE_TWO_LEN: usize = 15;

/// Lowercase words mapped to their frequency rank (0 = most frequent).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    ranks: HashMap<String, usize>,
}

impl Dictionary {
    /// Shared handle to the built-in English dictionary.
    pub fn english() -> Arc<Self> {
        Arc::clone(&ENGLISH)
    }

    /// Build a dictionary from words in descending frequency order.
    ///
    /// Duplicates keep their first (most frequent) rank.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        dict.extend(words);
        dict
    }

    /// Append words ranked after everything already present.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let next = self.ranks.len();
            self.ranks.entry(word).or_insert(next);
        }
    }

    /// Append a word-list file: one word per line, most frequent first.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_word_list(&mut self, path: &Utf8Path) -> Result<(), DictionaryError> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let before = self.len();
        self.extend(word_list_entries(&content));
        tracing::debug!(path = %path, added = self.len() - before, "loaded word list");
        Ok(())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Exact lookup of a lowercase word.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Frequency rank of a lowercase word.
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Whether a lowercase token counts as correctly spelled.
    ///
    /// Tokens containing digits are always known. Otherwise the token must be
    /// listed directly or reduce to a listed word by stripping one regular
    /// inflection.
    pub fn is_known(&self, token: &str) -> bool {
        if token.chars().any(|c| c.is_ascii_digit()) || self.contains(token) {
            return true;
        }
        base_forms(token).iter().any(|base| self.contains(base))
    }

    /// Best-guess correction for an unknown word.
    ///
    /// Prefers the most frequent word at edit distance one, then at edit
    /// distance two. Frequency ties resolve lexicographically.
    pub fn suggest(&self, word: &str) -> Option<String> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        let first = edits1(word);
        if let Some(best) = self.best_of(first.iter()) {
            return Some(best);
        }
        if word.len() > MAX_DISTANCE_TWO_LEN {
            return None;
        }
        let second: HashSet<String> = first.iter().flat_map(|e| edits1(e)).collect();
        self.best_of(second.iter())
    }

    fn best_of<'a, I>(&self, candidates: I) -> Option<String>
    where
        I: Iterator<Item = &'a String>,
    {
        candidates
            .filter_map(|c| self.rank(c).map(|rank| (rank, c)))
            .min()
            .map(|(_, word)| word.clone())
    }
}

/// Entries of a word list: trimmed lines, skipping blanks and `#` comments.
fn word_list_entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Every string one delete, transpose, replace or insert away from `word`.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = HashSet::with_capacity(54 * n + 25);

    for i in 0..n {
        let mut deleted = chars.clone();
        deleted.remove(i);
        out.insert(deleted.into_iter().collect());
    }
    for i in 0..n.saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        out.insert(swapped.into_iter().collect());
    }
    for i in 0..n {
        for c in ALPHABET.chars() {
            if c != chars[i] {
                let mut replaced = chars.clone();
                replaced[i] = c;
                out.insert(replaced.into_iter().collect());
            }
        }
    }
    for i in 0..=n {
        for c in ALPHABET.chars() {
            let mut inserted = chars.clone();
            inserted.insert(i, c);
            out.insert(inserted.into_iter().collect());
        }
    }

    out.remove(word);
    out
}

/// Candidate base forms for a regularly inflected word.
fn base_forms(word: &str) -> Vec<String> {
    let mut bases = Vec::new();

    if let Some(stem) = word.strip_suffix("ies") {
        bases.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        bases.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s')
        && !word.ends_with("ss")
    {
        bases.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ied") {
        bases.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        push_stem_variants(&mut bases, stem);
    }
    if let Some(stem) = word.strip_suffix('d') {
        bases.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing") {
        push_stem_variants(&mut bases, stem);
    }
    if let Some(stem) = word.strip_suffix("ily") {
        bases.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ally") {
        bases.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ly") {
        bases.push(stem.to_string());
    }
    for suffix in ["ier", "iest"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            bases.push(format!("{stem}y"));
        }
    }
    for suffix in ["er", "est"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            push_stem_variants(&mut bases, stem);
        }
    }

    bases.retain(|b| b.len() > 1);
    bases
}

/// `stem`, `stem + "e"`, and `stem` with a doubled final consonant undone.
fn push_stem_variants(bases: &mut Vec<String>, stem: &str) {
    bases.push(stem.to_string());
    bases.push(format!("{stem}e"));
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next())
        && last == prev
    {
        bases.push(stem[..stem.len() - last.len_utf8()].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::from_words(["the", "economy", "policy", "stop", "use", "rate", "happy", "then", "than"])
    }

    #[test]
    fn exact_and_inflected_words_are_known() {
        let dict = small();
        assert!(dict.is_known("economy"));
        assert!(dict.is_known("economies"));
        assert!(dict.is_known("policies"));
        assert!(dict.is_known("stopped"));
        assert!(dict.is_known("stopping"));
        assert!(dict.is_known("used"));
        assert!(dict.is_known("using"));
        assert!(dict.is_known("rates"));
        assert!(dict.is_known("happily"));
        assert!(dict.is_known("happiest"));
        assert!(!dict.is_known("econmy"));
    }

    #[test]
    fn digits_are_known() {
        let dict = small();
        assert!(dict.is_known("2024"));
        assert!(dict.is_known("q2"));
    }

    #[test]
    fn ranks_follow_insertion_order() {
        let mut dict = small();
        assert_eq!(dict.rank("the"), Some(0));
        dict.extend(["the", "zebra"]);
        assert_eq!(dict.rank("the"), Some(0));
        assert_eq!(dict.rank("zebra"), Some(9));
        assert_eq!(dict.len(), 10);
    }

    #[test]
    fn suggests_distance_one() {
        let dict = small();
        assert_eq!(dict.suggest("econmy").as_deref(), Some("economy"));
        assert_eq!(dict.suggest("plicy").as_deref(), Some("policy"));
    }

    #[test]
    fn suggests_distance_two() {
        let dict = small();
        assert_eq!(dict.suggest("ecnmy").as_deref(), Some("economy"));
    }

    #[test]
    fn frequency_breaks_ties() {
        // "thon" is one edit from both; "then" is ranked first.
        let dict = small();
        assert_eq!(dict.suggest("thon").as_deref(), Some("then"));
    }

    #[test]
    fn no_suggestion_for_gibberish() {
        let dict = small();
        assert_eq!(dict.suggest("qqqqqqqq"), None);
        assert_eq!(dict.suggest("ünïcode"), None);
    }

    #[test]
    fn edits_exclude_original() {
        let edits = edits1("ab");
        assert!(!edits.contains("ab"));
        assert!(edits.contains("ba"));
        assert!(edits.contains("a"));
        assert!(edits.contains("abc"));
        assert!(edits.contains("xb"));
    }

    #[test]
    fn load_word_list_appends() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        std::fs::write(&path, "# custom\nmonsoon\n\nKharif\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let mut dict = small();
        dict.load_word_list(&path).unwrap();
        assert!(dict.contains("monsoon"));
        assert!(dict.contains("kharif"));
        assert!(!dict.contains("# custom"));
    }

    #[test]
    fn missing_word_list_errors() {
        let mut dict = small();
        let err = dict
            .load_word_list(Utf8Path::new("/nonexistent/words.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn english_has_domain_words() {
        let dict = Dictionary::english();
        assert!(dict.is_known("economy"));
        assert!(dict.is_known("treaties"));
        assert!(dict.is_known("organisations"));
        assert_eq!(dict.suggest("goverment").as_deref(), Some("government"));
    }
}
