//! Print the ingredient browser view: catalog entries grouped by aisle.

use larder_core::{browse, IngredientRecord, MatchResult};

pub fn print(catalog: &[IngredientRecord], result: &MatchResult, show_unused: bool) {
    let groups = browse(catalog, result, show_unused);

    for (group, records) in &groups {
        println!("{} ({})", group, records.len());
        for record in records {
            let marker = if result.is_used(&record.slug) { "" } else { "  (unused)" };
            println!("  {:<32} {}{}", record.name, record.slug, marker);
        }
    }

    let shown: usize = groups.iter().map(|(_, records)| records.len()).sum();
    println!(
        "\n{} shown, {} unused in catalog",
        shown,
        result.unused_slugs().len()
    );
}
