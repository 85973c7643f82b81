//! Per-ingredient matchers and the line-vs-ingredient test.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::normalize::{normalize, TokenSet, Vocabulary};
use crate::types::IngredientRecord;

/// Everything needed to decide whether a recipe line names one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientMatcher {
    pub slug: String,
    pub label: String,
    pub tokens: TokenSet,
    /// Literal normalized phrases compared by substring containment.
    pub variants: BTreeSet<String>,
}

impl IngredientMatcher {
    pub fn build(record: &IngredientRecord, vocabulary: &Vocabulary) -> Self {
        let name = normalize(&record.name);
        let tail = slug_tail_phrase(&record.slug);

        let mut tokens = vocabulary.tokenize(&record.name);
        tokens.extend(vocabulary.tokenize(&tail).iter());

        // A name made only of descriptor words still needs something to match on.
        if tokens.is_empty() {
            tokens = name.split_whitespace().collect();
        }

        let mut variants = BTreeSet::new();
        if is_multi_word(&name) {
            variants.insert(name.clone());
        }
        if !tail.is_empty() && (is_multi_word(&tail) || tokens.len() <= 1) {
            variants.insert(tail);
        }
        let joined = tokens.joined();
        if !joined.is_empty() {
            variants.insert(joined);
        }

        Self {
            slug: record.slug.clone(),
            label: record.name.clone(),
            tokens,
            variants,
        }
    }

    /// Whether `entry` refers to this ingredient.
    ///
    /// A variant phrase contained in the line (or containing the whole line)
    /// is a match. Otherwise every matcher token must appear in the line; the
    /// line may carry extra tokens but not the other way round, so "potato"
    /// alone never matches a sweet potato.
    pub fn matches(&self, entry: &Entry) -> bool {
        if !entry.text.is_empty()
            && self
                .variants
                .iter()
                .any(|v| entry.text.contains(v.as_str()) || v.contains(entry.text.as_str()))
        {
            return true;
        }

        !self.tokens.is_empty() && self.tokens.is_subset(&entry.tokens)
    }
}

/// One recipe ingredient line, normalized and tokenized.
#[derive(Debug, Clone)]
pub struct Entry {
    pub text: String,
    pub tokens: TokenSet,
}

impl Entry {
    pub fn new(item: &str, vocabulary: &Vocabulary) -> Self {
        Self {
            text: normalize(item),
            tokens: vocabulary.tokenize(item),
        }
    }
}

/// Free-function form of [`IngredientMatcher::matches`].
pub fn matches(entry: &Entry, matcher: &IngredientMatcher) -> bool {
    matcher.matches(entry)
}

/// The slug without its category prefix, as a normalized phrase:
/// `meat-chicken-breast` becomes `chicken breast`.
fn slug_tail_phrase(slug: &str) -> String {
    match slug.split_once('-') {
        Some((_, tail)) => normalize(tail),
        None => String::new(),
    }
}

fn is_multi_word(phrase: &str) -> bool {
    phrase.split_whitespace().nth(1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(slug: &str, name: &str) -> IngredientMatcher {
        IngredientMatcher::build(&IngredientRecord::new(slug, name), Vocabulary::standard())
    }

    fn entry(item: &str) -> Entry {
        Entry::new(item, Vocabulary::standard())
    }

    #[test]
    fn test_build_multi_word() {
        let m = matcher("meat-chicken-breast", "Chicken Breast");
        assert_eq!(m.slug, "meat-chicken-breast");
        assert_eq!(m.label, "Chicken Breast");
        assert!(m.tokens.contains("chicken"));
        assert!(m.tokens.contains("breast"));
        assert_eq!(m.tokens.len(), 2);
        assert_eq!(
            m.variants,
            BTreeSet::from(["chicken breast".to_string()])
        );
    }

    #[test]
    fn test_build_single_word_keeps_slug_tail() {
        let m = matcher("spice-salt", "Salt");
        assert_eq!(m.tokens.len(), 1);
        assert_eq!(m.variants, BTreeSet::from(["salt".to_string()]));
    }

    #[test]
    fn test_build_slug_and_name_disagree() {
        let m = matcher("veg-scallion", "Green Onions");
        for token in ["green", "onions", "onion", "scallion"] {
            assert!(m.tokens.contains(token), "missing {token}");
        }
        assert!(m.variants.contains("green onions"));
        // single-word tail, more than one token: not a variant on its own
        assert!(!m.variants.contains("scallion"));
        assert!(m.variants.contains("green onions onion scallion"));
    }

    #[test]
    fn test_build_descriptor_only_name_falls_back() {
        let m = matcher("misc", "Fresh Whole");
        assert_eq!(m.tokens.joined(), "fresh whole");
        assert!(m.variants.contains("fresh whole"));
        assert!(m.matches(&entry("a fresh whole thing")));
    }

    #[test]
    fn test_build_empty_record() {
        let m = matcher("x-", "");
        assert!(m.tokens.is_empty());
        assert!(m.variants.is_empty());
        assert!(!m.matches(&entry("anything at all")));
        assert!(!m.matches(&entry("")));
    }

    #[test]
    fn test_plural_closure() {
        let m = matcher("veg-sweet-potato", "Sweet Potato");
        assert!(m.matches(&entry("3 sweet potatoes, diced")));
        assert!(m.matches(&entry("2 Large, diced Sweet Potatoes")));
    }

    #[test]
    fn test_token_subset_with_extra_words() {
        let m = matcher("veg-sweet-potato", "Sweet Potato");
        // No variant is a substring here; tokens carry it.
        assert!(m.matches(&entry("potatoes, sweet variety")));
    }

    #[test]
    fn test_subset_is_one_directional() {
        let m = matcher("veg-sweet-potato", "Sweet Potato");
        assert!(!m.matches(&entry("4 russet potatoes")));
    }

    #[test]
    fn test_peanut_oil_not_peanut_butter() {
        let m = matcher("oil-peanut", "Peanut Oil");
        assert!(!m.matches(&entry("creamy peanut butter")));
        assert!(m.matches(&entry("2 tablespoons peanut oil")));
    }

    #[test]
    fn test_entry_contained_in_variant() {
        let m = matcher("herb-basil-leaves", "Basil Leaves");
        assert!(m.matches(&entry("Basil")));
    }

    #[test]
    fn test_parenthetical_notes_ignored() {
        let m = matcher("meat-chicken-breast", "Chicken Breast");
        assert!(m.matches(&entry("1 lb chicken breast (boneless, skinless)")));
        assert!(!matcher("meat-chicken-thigh", "Chicken Thigh")
            .matches(&entry("1 lb chicken breast (boneless, skinless)")));
    }

    #[test]
    fn test_empty_entry_never_matches() {
        let m = matcher("oil-olive", "Olive Oil");
        assert!(!matches(&entry(""), &m));
        assert!(!matches(&entry("(to serve)"), &m));
    }
}
