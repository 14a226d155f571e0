//! Syllable counting for readability formulas.
//!
//! A vowel-group estimator handles most words; a small exception table
//! covers common essay vocabulary where vowel groups mislead (adjacent
//! vowels that split into two syllables, silent endings that are not
//! silent).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Words whose syllable count the estimator gets wrong.
static EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HashMap::from([
        ("area", 3),
        ("areas", 3),
        ("being", 2),
        ("beings", 2),
        ("biodiversity", 6),
        ("business", 2),
        ("businesses", 3),
        ("cooperation", 5),
        ("create", 2),
        ("created", 3),
        ("creates", 2),
        ("creation", 3),
        ("creative", 3),
        ("diet", 2),
        ("every", 2),
        ("everyone", 3),
        ("everything", 3),
        ("evening", 2),
        ("geopolitics", 5),
        ("geopolitical", 6),
        ("going", 2),
        ("idea", 3),
        ("ideas", 3),
        ("ideal", 3),
        ("ideology", 5),
        ("judiciary", 5),
        ("media", 3),
        ("medieval", 4),
        ("museum", 3),
        ("period", 3),
        ("poem", 2),
        ("poet", 2),
        ("poetry", 3),
        ("quiet", 2),
        ("radio", 3),
        ("ratio", 3),
        ("real", 2),
        ("reality", 4),
        ("science", 2),
        ("sciences", 3),
        ("scientific", 4),
        ("scientist", 3),
        ("scientists", 3),
        ("situation", 4),
        ("society", 4),
        ("theory", 3),
        ("theories", 3),
        ("usual", 3),
        ("usually", 4),
        ("variety", 4),
        ("various", 3),
        ("video", 3),
        ("violence", 3),
        ("violent", 3),
    ])
});

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables from vowel groups with English suffix adjustments.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0usize;
    let mut in_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = vowel;
    }

    let n = letters.len();
    let at = |back: usize| n.checked_sub(back).map(|i| letters[i]);

    if groups > 1 {
        match (at(3), at(2), at(1)) {
            // Silent final e, but not "-ee" or consonant + "le" (table, able).
            (_, Some(before), Some('e')) if !is_vowel(before) && before != 'l' => groups -= 1,
            (Some(before), Some('l'), Some('e')) if is_vowel(before) => groups -= 1,
            // "-ed" is silent unless it follows t or d (based vs. wanted).
            (Some(before), Some('e'), Some('d')) if !matches!(before, 't' | 'd') => groups -= 1,
            // "-es" is silent unless it follows a sibilant (rates vs. taxes).
            (Some(before), Some('e'), Some('s'))
                if !matches!(before, 's' | 'x' | 'z' | 'c' | 'g' | 'h') && !is_vowel(before) =>
            {
                groups -= 1;
            }
            _ => {}
        }
    }

    groups.max(1)
}

/// Count syllables: exception table first, estimator fallback.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let lower = word.to_lowercase();
    EXCEPTIONS
        .get(lower.as_str())
        .copied()
        .unwrap_or_else(|| estimate_syllables(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_basics() {
        assert_eq!(estimate_syllables("growth"), 1);
        assert_eq!(estimate_syllables("trade"), 1);
        assert_eq!(estimate_syllables("policy"), 3);
        assert_eq!(estimate_syllables("economy"), 4);
        assert_eq!(estimate_syllables("table"), 2);
        assert_eq!(estimate_syllables("based"), 1);
        assert_eq!(estimate_syllables("wanted"), 2);
        assert_eq!(estimate_syllables("rates"), 1);
        assert_eq!(estimate_syllables("taxes"), 2);
    }

    #[test]
    fn exceptions_win() {
        assert_eq!(count_syllables("idea"), 3);
        assert_eq!(count_syllables("Science"), 2);
        assert_eq!(count_syllables("biodiversity"), 6);
    }

    #[test]
    fn edge_cases() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("42"), 0);
    }
}
