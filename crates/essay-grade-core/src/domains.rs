//! Subject domains and their reference vocabulary.
//!
//! A [`DomainRegistry`] is built once and shared read-only. The built-in
//! registry holds seven essay domains; configuration may add or replace
//! entries before the registry is frozen behind an `Arc`.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, LazyLock};

use schemars::JsonSchema;
use serde::Serialize;

use crate::{text, tfidf};

/// Built-in domains and their reference corpora, in presentation order.
const BUILTIN_DOMAINS: &[(&str, &str)] = &[
    (
        "Economy",
        "economy GDP inflation unemployment fiscal monetary policy growth taxation public \
         finance trade sectors investment banking market reforms",
    ),
    (
        "Environment",
        "environment climate change sustainability biodiversity conservation pollution \
         renewable energy ecosystem greenhouse emissions forestry water management",
    ),
    (
        "Philosophy",
        "philosophy ethics morality epistemology metaphysics logic argument reason duty \
         virtue justice human nature existentialism",
    ),
    (
        "Science",
        "science technology research innovation experiments data evidence hypothesis theory \
         discoveries physics chemistry biology",
    ),
    (
        "Polity",
        "constitution governance democracy rights law parliament judiciary federal centre \
         state policy election representation fundamental duties",
    ),
    (
        "History",
        "history heritage civilisation ancient medieval modern independence movement \
         colonial freedom battle culture archaeological sources",
    ),
    (
        "International Relations",
        "foreign policy diplomacy geopolitics strategic relations alliances treaties \
         international organisations UN security trade cooperation",
    ),
];

static BUILTIN: LazyLock<Arc<DomainRegistry>> = LazyLock::new(|| {
    Arc::new(DomainRegistry::from_entries(
        BUILTIN_DOMAINS.iter().map(|(n, c)| (*n, *c)),
    ))
});

/// A named subject domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DomainProfile {
    name: String,
    reference_corpus: String,
    keywords: BTreeSet<String>,
}

impl DomainProfile {
    /// Build a profile; keywords are the corpus's lowercased `\w+` tokens.
    pub fn new(name: impl Into<String>, reference_corpus: impl Into<String>) -> Self {
        let reference_corpus = reference_corpus.into();
        let keywords = text::tokenize(&reference_corpus).into_iter().collect();
        Self {
            name: name.into(),
            reference_corpus,
            keywords,
        }
    }

    /// The degenerate profile used for unknown domain names.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Unique domain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free text describing the domain's vocabulary.
    pub fn reference_corpus(&self) -> &str {
        &self.reference_corpus
    }

    /// Lowercase keyword set.
    pub const fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }
}

/// Ordered, read-only collection of domain profiles.
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    profiles: Vec<DomainProfile>,
    index: HashMap<String, usize>,
}

impl DomainRegistry {
    /// Shared handle to the built-in registry.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build a registry from `(name, corpus)` pairs in order.
    ///
    /// A repeated name replaces the earlier entry in place.
    pub fn from_entries<I, N, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut registry = Self::default();
        registry.extend(entries);
        registry
    }

    /// The built-in domains plus `custom` entries.
    ///
    /// Custom names matching a built-in replace it in place; new names are
    /// appended in the iteration order given.
    pub fn with_custom<I, N, C>(custom: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut registry = (*Self::builtin()).clone();
        registry.extend(custom);
        registry
    }

    fn extend<I, N, C>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        for (name, corpus) in entries {
            let profile = DomainProfile::new(name, corpus);
            if let Some(&idx) = self.index.get(profile.name()) {
                self.profiles[idx] = profile;
            } else {
                self.index
                    .insert(profile.name().to_string(), self.profiles.len());
                self.profiles.push(profile);
            }
        }
    }

    /// Look up a domain by exact name.
    pub fn get(&self, name: &str) -> Option<&DomainProfile> {
        self.index.get(name).map(|&idx| &self.profiles[idx])
    }

    /// Domain names in registry order.
    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    /// Iterate over profiles in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainProfile> {
        self.profiles.iter()
    }

    /// Number of domains.
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry is empty.
    pub const fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The domain whose reference corpus is most similar to `text`.
    ///
    /// Ties go to the earlier domain. `None` only for an empty registry.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn closest(&self, text: &str) -> Option<&DomainProfile> {
        let mut best: Option<(&DomainProfile, f64)> = None;
        for profile in &self.profiles {
            let sim = tfidf::similarity(profile.reference_corpus(), text);
            if best.is_none_or(|(_, top)| sim > top) {
                best = Some((profile, sim));
            }
        }
        if let Some((profile, sim)) = best {
            tracing::debug!(domain = profile.name(), similarity = sim, "closest domain");
        }
        best.map(|(profile, _)| profile)
    }
}

/// Names of the built-in domains, in presentation order.
pub fn get_domain_list() -> Vec<String> {
    DomainRegistry::builtin().names()
}
