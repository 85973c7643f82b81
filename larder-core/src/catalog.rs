//! Loading catalog and recipe data from JSON.
//!
//! Both files may be either a bare array or an object wrapping the array
//! (`{"ingredients": [...]}` / `{"recipes": [...]}`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{IngredientRecord, RecipeRecord};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<IngredientRecord>),
    Wrapped { ingredients: Vec<IngredientRecord> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipesFile {
    Bare(Vec<RecipeRecord>),
    Wrapped { recipes: Vec<RecipeRecord> },
}

pub fn parse_catalog(json: &str) -> Result<Vec<IngredientRecord>, CatalogError> {
    Ok(match serde_json::from_str::<CatalogFile>(json)? {
        CatalogFile::Bare(ingredients) | CatalogFile::Wrapped { ingredients } => ingredients,
    })
}

pub fn parse_recipes(json: &str) -> Result<Vec<RecipeRecord>, CatalogError> {
    Ok(match serde_json::from_str::<RecipesFile>(json)? {
        RecipesFile::Bare(recipes) | RecipesFile::Wrapped { recipes } => recipes,
    })
}

pub fn load_catalog(path: &Path) -> Result<Vec<IngredientRecord>, CatalogError> {
    let catalog = parse_catalog(&read(path)?)?;
    tracing::info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn load_recipes(path: &Path) -> Result<Vec<RecipeRecord>, CatalogError> {
    let recipes = parse_recipes(&read(path)?)?;
    tracing::info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
