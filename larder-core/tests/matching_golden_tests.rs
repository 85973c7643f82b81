//! Golden file tests for catalog matching.
//!
//! Each case in `fixtures/matching/` is a self-contained catalog, recipe list
//! and the full expected result:
//! ```json
//! {
//!   "description": "...",
//!   "catalog": [{ "slug": "oil-olive", "name": "Olive Oil" }],
//!   "recipes": [{ "id": "salad", "ingredients": [{ "item": "olive oil" }] }],
//!   "extra_descriptors": ["creamy"],
//!   "expected": { "recipeIngredientMatches": {...}, "ingredientUsage": {...} }
//! }
//! ```

use glob::glob;
use larder_core::{
    map_recipes_to_matches, IngredientRecord, MatchResult, MatcherIndex, RecipeRecord, Vocabulary,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    #[allow(dead_code)]
    description: String,
    catalog: Vec<IngredientRecord>,
    recipes: Vec<RecipeRecord>,
    #[serde(default)]
    extra_descriptors: Vec<String>,
    expected: MatchResult,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/matching/*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    cases.sort_by(|a, b| a.0.cmp(&b.0));
    assert!(!cases.is_empty(), "No matching fixtures found");
    cases
}

fn run_case(case: &TestCase) -> MatchResult {
    let vocabulary = Vocabulary::standard().with_extra_words(&case.extra_descriptors);
    let index = MatcherIndex::build_with(&case.catalog, vocabulary);
    map_recipes_to_matches(&case.recipes, &index)
}

#[test]
fn test_matching_golden_files() {
    let cases = load_test_cases();
    let mut failures = Vec::new();

    for (name, case) in &cases {
        let actual = run_case(case);
        if actual != case.expected {
            failures.push((name.clone(), case.expected.clone(), actual));
        }
    }

    if !failures.is_empty() {
        let mut msg = format!(
            "\n{} failures across {} tests:\n",
            failures.len(),
            cases.len()
        );
        for (name, expected, actual) in &failures {
            msg.push_str(&format!("\n=== {} ===\n", name));
            msg.push_str(&format!("Expected: {:#?}\n", expected));
            msg.push_str(&format!("Actual:   {:#?}\n", actual));
        }
        panic!("{}", msg);
    }
}

/// Usage must be exactly the OR of every recipe's matches, for every fixture.
#[test]
fn test_usage_consistent_with_matches() {
    for (name, case) in load_test_cases() {
        let result = run_case(&case);
        for (slug, used) in &result.ingredient_usage {
            let in_any = result
                .recipe_ingredient_matches
                .values()
                .any(|slugs| slugs.contains(slug));
            assert_eq!(*used, in_any, "{name}: usage mismatch for {slug}");
        }
    }
}

/// Every recipe with an id gets a key, and every slugged catalog entry gets a
/// usage flag.
#[test]
fn test_result_is_total() {
    for (name, case) in load_test_cases() {
        let result = run_case(&case);
        for recipe in case.recipes.iter().filter(|r| !r.id.is_empty()) {
            assert!(
                result.recipe_ingredient_matches.contains_key(&recipe.id),
                "{name}: missing recipe {}",
                recipe.id
            );
        }
        for record in case.catalog.iter().filter(|r| !r.slug.is_empty()) {
            assert!(
                result.ingredient_usage.contains_key(&record.slug),
                "{name}: missing usage for {}",
                record.slug
            );
        }
    }
}
