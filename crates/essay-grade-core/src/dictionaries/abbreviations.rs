//! Abbreviations that end in a period without ending a sentence.
//!
//! Short English words that often close a sentence in essays ("in", "no",
//! "sun", "max") are left out even though they double as abbreviations.

/// Lowercase abbreviations without their trailing period, sorted for binary search.
static ABBREVIATIONS: &[&str] = &[
    "a.d", "a.m", "adm", "al", "approx", "apr", "assn", "aug", "ave", "avg", "b.a", "b.c",
    "b.c.e", "b.s", "bldg", "blvd", "bros", "c.e", "calif", "capt", "cf", "cmdr", "col", "corp",
    "cpl", "dec", "dept", "dr", "e.g", "e.u", "ed.d", "eds", "encl", "eq", "esq", "et al", "etc",
    "feb", "fig", "fr", "gen", "gov", "govt", "hon", "i.e", "ibid", "inc", "intl", "j.d", "jan",
    "jr", "jul", "jun", "kg", "km", "lt", "ltd", "m.a", "m.b.a", "m.d", "m.s", "maj", "messrs",
    "mfg", "mr", "mrs", "ms", "msgr", "mt", "n.b", "nos", "nov", "oct", "p.m", "p.s", "ph.d",
    "pp", "pres", "prof", "pvt", "r.s.v.p", "rd", "rev", "sept", "sgt", "sr", "st", "supp",
    "u.k", "u.n", "u.s", "u.s.a", "viz", "vol", "vs",
];

/// Check whether a word (any case, trailing periods ignored) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.trim_matches('.').to_lowercase();
    ABBREVIATIONS.binary_search(&lower.as_str()).is_ok()
}
