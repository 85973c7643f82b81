//! Input records consumed by the matcher.
//!
//! Catalog and recipe data are produced by other tools and are not trusted to
//! be well-typed. Text fields that are missing, `null`, or not strings all
//! deserialize as empty strings, which the matcher treats as "nothing to
//! match" rather than as an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One canonical ingredient in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Stable kebab-case identifier. The first segment is the category prefix.
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
}

impl IngredientRecord {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// The slug's leading segment, e.g. `veg` for `veg-sweet-potato`.
    pub fn slug_prefix(&self) -> &str {
        self.slug.split('-').next().unwrap_or_default()
    }
}

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Free text such as "1 lb chicken breast (boneless, skinless)".
    #[serde(default, deserialize_with = "lenient_string")]
    pub item: String,
    /// Passed through untouched; quantities are the presentation layer's concern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Value>,
}

impl RecipeIngredient {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Numeric ids are kept as their decimal text.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_ingredients")]
    pub ingredients: Vec<RecipeIngredient>,
}

impl RecipeRecord {
    pub fn new<I, S>(id: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: None,
            ingredients: items.into_iter().map(RecipeIngredient::new).collect(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// A non-array becomes no lines; an element that is not a usable line object
/// becomes an empty line, which matches nothing.
fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Vec<RecipeIngredient>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|v| serde_json::from_value::<RecipeIngredient>(v).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
