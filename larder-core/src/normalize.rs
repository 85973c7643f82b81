//! Text normalization and tokenization.
//!
//! Turns arbitrary ingredient text into a canonical lowercase form and a set of
//! word stems with descriptor words ("large", "diced", "fresh", ...) removed.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use crate::stem::expand_forms;

/// Words that describe how much or in what state an ingredient is, not which
/// ingredient it is. Curated by hand; recipe prose is too irregular to derive
/// this list from data.
pub const DESCRIPTOR_WORDS: &[&str] = &[
    // Size and quantity
    "large",
    "small",
    "medium",
    "big",
    "extra",
    "whole",
    "half",
    "pinch",
    "handful",
    "bunch",
    "piece",
    "pieces",
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "tbsp",
    "teaspoon",
    "teaspoons",
    "tsp",
    "lb",
    "lbs",
    "pound",
    "pounds",
    "oz",
    "ounce",
    "ounces",
    // Preparation
    "diced",
    "minced",
    "chopped",
    "sliced",
    "grated",
    "shredded",
    "crushed",
    "peeled",
    "cubed",
    "halved",
    "quartered",
    "trimmed",
    "rinsed",
    "drained",
    "melted",
    "softened",
    "beaten",
    "sifted",
    "packed",
    "divided",
    "cooked",
    "uncooked",
    "thawed",
    "boneless",
    "skinless",
    "finely",
    "roughly",
    "coarsely",
    "thinly",
    "lightly",
    "freshly",
    // State
    "fresh",
    "dried",
    "frozen",
    "room",
    "temperature",
    "cold",
    "warm",
    "ripe",
    "raw",
    // Connectives and filler
    "and",
    "or",
    "with",
    "of",
    "for",
    "to",
    "the",
    "a",
    "an",
    "into",
    "plus",
    "about",
    "optional",
    "taste",
    "needed",
    "more",
    "as",
];

static STANDARD: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::from_words(DESCRIPTOR_WORDS.iter().copied()));

/// An immutable descriptor vocabulary.
///
/// Matchers and recipe entries must be tokenized with the same vocabulary,
/// which is why [`crate::MatcherIndex`] keeps its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    descriptors: HashSet<String>,
}

impl Vocabulary {
    /// The built-in list from [`DESCRIPTOR_WORDS`].
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let descriptors = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { descriptors }
    }

    /// A copy of this vocabulary that also treats `words` as descriptors.
    pub fn with_extra_words<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut descriptors = self.descriptors.clone();
        descriptors.extend(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
        Self { descriptors }
    }

    pub fn is_descriptor(&self, word: &str) -> bool {
        self.descriptors.contains(word)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Normalize `text`, drop descriptor words and expand the rest into
    /// their plural/singular forms.
    pub fn tokenize(&self, text: &str) -> TokenSet {
        let mut tokens = TokenSet::new();
        for word in normalize(text).split_whitespace() {
            if self.is_descriptor(word) {
                continue;
            }
            for form in expand_forms(word) {
                tokens.insert(form);
            }
        }
        tokens
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        STANDARD.clone()
    }
}

/// A set of normalized word stems.
///
/// Membership is all matching cares about. Iteration follows insertion order
/// so that [`TokenSet::joined`] is deterministic for a given input.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TokenSet(Vec<String>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the token was already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.contains(&token) {
            return false;
        }
        self.0.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// True when every token of `self` is in `other`. The empty set is a
    /// subset of everything.
    pub fn is_subset(&self, other: &TokenSet) -> bool {
        self.0.iter().all(|t| other.contains(t))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// All tokens joined by single spaces, in insertion order.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tokens = TokenSet::new();
        tokens.extend(iter);
        tokens
    }
}

impl<S: Into<String>> Extend<S> for TokenSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Canonical form of `text`: lowercase, parenthetical asides removed, every
/// run of non-alphanumeric characters collapsed to one space, trimmed.
///
/// ```
/// use larder_core::normalize;
///
/// assert_eq!(
///     normalize("1 lb Chicken Breast (boneless, skinless)"),
///     "1 lb chicken breast"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_asides = strip_parentheticals(&lower);

    let mut out = String::with_capacity(without_asides.len());
    let mut pending_space = false;
    for c in without_asides.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// [`Vocabulary::tokenize`] with the standard vocabulary.
pub fn tokenize(text: &str) -> TokenSet {
    Vocabulary::standard().tokenize(text)
}

/// Replace each `(...)` span with a space. Spans do not nest; an unclosed
/// `(` is left alone.
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('(') {
        let Some(len) = rest[start..].find(')') else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push(' ');
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}
