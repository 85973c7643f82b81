//! Resolve every recipe against a [`MatcherIndex`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::index::MatcherIndex;
use crate::matcher::Entry;
use crate::types::RecipeRecord;

/// Which catalog entries each recipe uses, and which catalog entries any
/// recipe uses at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Keyed by recipe id. Recipes that matched nothing map to an empty set.
    pub recipe_ingredient_matches: BTreeMap<String, BTreeSet<String>>,
    /// Keyed by catalog slug; one entry per indexed ingredient.
    pub ingredient_usage: BTreeMap<String, bool>,
}

impl MatchResult {
    /// A result with every indexed slug marked unused and no recipes.
    fn unused(index: &MatcherIndex) -> Self {
        Self {
            recipe_ingredient_matches: BTreeMap::new(),
            ingredient_usage: index.slugs().map(|slug| (slug.to_string(), false)).collect(),
        }
    }

    fn record(&mut self, recipe_id: String, found: BTreeSet<String>) {
        for slug in &found {
            if let Some(used) = self.ingredient_usage.get_mut(slug) {
                *used = true;
            }
        }
        if self.recipe_ingredient_matches.insert(recipe_id, found).is_some() {
            tracing::debug!("Duplicate recipe id, keeping the later ingredient set");
        }
    }

    /// Matched slugs for one recipe.
    pub fn matches_for(&self, recipe_id: &str) -> Option<&BTreeSet<String>> {
        self.recipe_ingredient_matches.get(recipe_id)
    }

    /// Whether any recipe uses `slug`. Unknown slugs are unused.
    pub fn is_used(&self, slug: &str) -> bool {
        self.ingredient_usage.get(slug).copied().unwrap_or(false)
    }

    /// Catalog slugs no recipe refers to, sorted.
    pub fn unused_slugs(&self) -> Vec<&str> {
        self.ingredient_usage
            .iter()
            .filter(|(_, used)| !**used)
            .map(|(slug, _)| slug.as_str())
            .collect()
    }

    /// Ids of recipes that use every one of `required`, sorted.
    ///
    /// An empty filter selects every recipe.
    pub fn recipes_with_all<S: AsRef<str>>(&self, required: &[S]) -> Vec<&str> {
        self.recipe_ingredient_matches
            .iter()
            .filter(|(_, slugs)| required.iter().all(|r| slugs.contains(r.as_ref())))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Match every recipe against `index`.
///
/// Recipes without an id are skipped. Every other recipe gets a key in the
/// result, even when nothing in it matched.
pub fn map_recipes_to_matches(recipes: &[RecipeRecord], index: &MatcherIndex) -> MatchResult {
    let mut result = MatchResult::unused(index);

    for recipe in recipes {
        if recipe.id.is_empty() {
            tracing::debug!("Skipping recipe without id: {:?}", recipe.title);
            continue;
        }
        let found = match_recipe(recipe, index);
        result.record(recipe.id.clone(), found);
    }

    log_summary(&result);
    result
}

/// Same output as [`map_recipes_to_matches`], with recipes matched on the
/// rayon thread pool.
#[cfg(feature = "parallel")]
pub fn map_recipes_to_matches_par(recipes: &[RecipeRecord], index: &MatcherIndex) -> MatchResult {
    use rayon::prelude::*;

    let matched: Vec<(&str, BTreeSet<String>)> = recipes
        .par_iter()
        .filter(|recipe| !recipe.id.is_empty())
        .map(|recipe| (recipe.id.as_str(), match_recipe(recipe, index)))
        .collect();

    let mut result = MatchResult::unused(index);
    for (id, found) in matched {
        result.record(id.to_string(), found);
    }

    log_summary(&result);
    result
}

/// Slugs of every catalog entry that at least one line of `recipe` matches.
pub fn match_recipe(recipe: &RecipeRecord, index: &MatcherIndex) -> BTreeSet<String> {
    let entries: Vec<Entry> = recipe
        .ingredients
        .iter()
        .map(|ingredient| index.entry(&ingredient.item))
        .collect();

    index
        .candidates(&entries)
        .into_iter()
        .filter(|slug| {
            index
                .matcher(slug)
                .is_some_and(|matcher| entries.iter().any(|entry| matcher.matches(entry)))
        })
        .map(str::to_string)
        .collect()
}

fn log_summary(result: &MatchResult) {
    let used = result.ingredient_usage.values().filter(|u| **u).count();
    tracing::info!(
        "Matched {} recipes; {} of {} ingredients used",
        result.recipe_ingredient_matches.len(),
        used,
        result.ingredient_usage.len()
    );
}
