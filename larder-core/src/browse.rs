//! Grouping catalog entries for the ingredient browser.
//!
//! Maps catalog categories (or slug prefixes) to grocery aisle groups and
//! hides entries that no recipe uses. Group data is loaded from
//! `data/category_groups.json` at compile time.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::mapper::MatchResult;
use crate::types::IngredientRecord;

pub const OTHER_GROUP: &str = "Other";

/// Group labels in aisle order.
pub const GROUPS: &[&str] = &[
    "Produce",
    "Meat & Seafood",
    "Dairy & Eggs",
    "Cheese",
    "Bakery & Bread",
    "Frozen",
    "Pasta & Rice",
    "Canned Goods",
    "Baking",
    "Spices & Seasonings",
    "Condiments & Sauces",
    "Oils & Vinegars",
    "Nuts & Dried Fruit",
    "Beverages",
    "Snacks",
    OTHER_GROUP,
];

#[derive(Deserialize)]
struct CategoryGroupsData {
    groups: HashMap<String, String>,
}

/// Category -> group label, with labels interned against [`GROUPS`].
static CATEGORY_GROUPS: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let json = include_str!("../data/category_groups.json");
    let data: CategoryGroupsData =
        serde_json::from_str(json).expect("Failed to parse category_groups.json");

    data.groups
        .into_iter()
        .map(|(category, group)| (category.to_lowercase(), group_to_static(&group)))
        .collect()
});

fn group_to_static(group: &str) -> &'static str {
    GROUPS
        .iter()
        .copied()
        .find(|g| *g == group)
        .unwrap_or(OTHER_GROUP)
}

/// The aisle group for a catalog category. Case-insensitive; unknown
/// categories are "Other".
pub fn group_for_category(category: &str) -> &'static str {
    CATEGORY_GROUPS
        .get(category.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(OTHER_GROUP)
}

/// The aisle group for a record: its category if set, else its slug prefix.
pub fn group_for_record(record: &IngredientRecord) -> &'static str {
    if record.category.trim().is_empty() {
        group_for_category(record.slug_prefix())
    } else {
        group_for_category(&record.category)
    }
}

/// Catalog entries grouped by aisle, in [`GROUPS`] order and sorted by name
/// within each group. Empty groups are left out.
///
/// Entries no recipe uses are left out unless `show_unused` is set. Entries
/// without a slug are never shown.
pub fn browse<'a>(
    catalog: &'a [IngredientRecord],
    result: &MatchResult,
    show_unused: bool,
) -> Vec<(&'static str, Vec<&'a IngredientRecord>)> {
    let mut groups: HashMap<&'static str, Vec<&IngredientRecord>> = HashMap::new();

    for record in catalog {
        if record.slug.is_empty() || !(show_unused || result.is_used(&record.slug)) {
            continue;
        }
        groups.entry(group_for_record(record)).or_default().push(record);
    }

    GROUPS
        .iter()
        .filter_map(|group| {
            let mut records = groups.remove(group)?;
            records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
            Some((*group, records))
        })
        .collect()
}
