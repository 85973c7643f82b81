//! Resolve free-text recipe ingredient lines against a curated ingredient
//! catalog.
//!
//! ```
//! use larder_core::{map_recipes_to_matches, IngredientRecord, MatcherIndex, RecipeRecord};
//!
//! let catalog = vec![
//!     IngredientRecord::new("oil-peanut", "Peanut Oil"),
//!     IngredientRecord::new("nut-peanut-butter", "Peanut Butter"),
//! ];
//! let recipes = vec![RecipeRecord::new("satay", ["1/2 cup creamy peanut butter"])];
//!
//! let index = MatcherIndex::build(&catalog);
//! let result = map_recipes_to_matches(&recipes, &index);
//!
//! assert!(result.is_used("nut-peanut-butter"));
//! assert!(!result.is_used("oil-peanut"));
//! ```

pub mod browse;
pub mod catalog;
pub mod error;
pub mod index;
pub mod mapper;
pub mod matcher;
pub mod normalize;
pub mod stem;
pub mod types;

pub use browse::{browse, group_for_category, group_for_record};
pub use catalog::{load_catalog, load_recipes, parse_catalog, parse_recipes};
pub use error::CatalogError;
pub use index::{build_index, MatcherIndex};
#[cfg(feature = "parallel")]
pub use mapper::map_recipes_to_matches_par;
pub use mapper::{map_recipes_to_matches, match_recipe, MatchResult};
pub use matcher::{matches, Entry, IngredientMatcher};
pub use normalize::{normalize, tokenize, TokenSet, Vocabulary, DESCRIPTOR_WORDS};
pub use stem::expand_forms;
pub use types::{IngredientRecord, RecipeIngredient, RecipeRecord};
