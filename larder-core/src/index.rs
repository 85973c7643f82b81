//! Inverted index from tokens to catalog slugs.
//!
//! Built once per catalog and never patched: a changed catalog means a new
//! index. Recipes only read from it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::matcher::{Entry, IngredientMatcher};
use crate::normalize::Vocabulary;
use crate::types::IngredientRecord;

#[derive(Debug, Clone)]
pub struct MatcherIndex {
    vocabulary: Vocabulary,
    matchers: BTreeMap<String, IngredientMatcher>,
    token_index: HashMap<String, BTreeSet<String>>,
    /// Matchers with no tokens a recipe line can carry. They can only be
    /// found by scanning, so they are candidates for every recipe.
    fallback: BTreeSet<String>,
}

impl MatcherIndex {
    /// Build an index with the standard descriptor vocabulary.
    pub fn build(catalog: &[IngredientRecord]) -> Self {
        Self::build_with(catalog, Vocabulary::standard().clone())
    }

    /// Build an index that tokenizes with `vocabulary`.
    ///
    /// Records without a slug cannot be referenced and are skipped. When two
    /// records share a slug the later one wins.
    pub fn build_with(catalog: &[IngredientRecord], vocabulary: Vocabulary) -> Self {
        let mut matchers = BTreeMap::new();
        for record in catalog {
            if record.slug.is_empty() {
                tracing::debug!("Skipping catalog entry without slug: {:?}", record.name);
                continue;
            }
            let matcher = IngredientMatcher::build(record, &vocabulary);
            if matchers.insert(record.slug.clone(), matcher).is_some() {
                tracing::debug!("Duplicate catalog slug {}, keeping the later entry", record.slug);
            }
        }

        let mut token_index: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut fallback = BTreeSet::new();
        for (slug, matcher) in &matchers {
            // Recipe lines never carry descriptor tokens, so postings under
            // them would never be looked up.
            let searchable: Vec<&str> = matcher
                .tokens
                .iter()
                .filter(|token| !vocabulary.is_descriptor(token))
                .collect();
            if searchable.is_empty() {
                fallback.insert(slug.clone());
                continue;
            }
            for token in searchable {
                token_index
                    .entry(token.to_string())
                    .or_default()
                    .insert(slug.clone());
            }
        }

        tracing::info!(
            "Built matcher index: {} ingredients, {} tokens, {} fallback",
            matchers.len(),
            token_index.len(),
            fallback.len()
        );

        Self {
            vocabulary,
            matchers,
            token_index,
            fallback,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Normalize and tokenize a recipe line with this index's vocabulary.
    pub fn entry(&self, item: &str) -> Entry {
        Entry::new(item, &self.vocabulary)
    }

    pub fn matcher(&self, slug: &str) -> Option<&IngredientMatcher> {
        self.matchers.get(slug)
    }

    pub fn matchers(&self) -> impl Iterator<Item = &IngredientMatcher> {
        self.matchers.values()
    }

    /// Every indexed slug, sorted.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Slugs posted under `token`.
    pub fn slugs_for_token(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.token_index.get(token)
    }

    pub fn fallback(&self) -> &BTreeSet<String> {
        &self.fallback
    }

    /// Slugs worth testing against `entries`: everything posted under any of
    /// their tokens, plus the fallback bucket.
    pub fn candidates<'a>(&'a self, entries: &[Entry]) -> BTreeSet<&'a str> {
        let mut candidates: BTreeSet<&str> = self.fallback.iter().map(String::as_str).collect();
        for entry in entries {
            for token in &entry.tokens {
                if let Some(slugs) = self.token_index.get(token.as_str()) {
                    candidates.extend(slugs.iter().map(String::as_str));
                }
            }
        }
        candidates
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// Free-function form of [`MatcherIndex::build`].
pub fn build_index(catalog: &[IngredientRecord]) -> MatcherIndex {
    MatcherIndex::build(catalog)
}
