//! Naive plural handling.
//!
//! Catalog names are mostly singular ("Sweet Potato") while recipes are
//! mostly plural ("3 sweet potatoes"). Rather than a real stemmer we add a
//! handful of candidate singular forms for every token and let set membership
//! sort it out. Wrong forms ("hummus" -> "hummu") are harmless as long as
//! nothing in the catalog spells them.

/// Return `token` followed by every candidate singular form.
///
/// All rules are tried; each one that applies adds forms, so "berries"
/// yields `berries`, `berry`, `berri` and `berrie`.
pub fn expand_forms(token: &str) -> Vec<String> {
    let mut forms = vec![token.to_string()];
    let len = token.chars().count();

    let mut add = |form: String| {
        if !form.is_empty() && !forms.contains(&form) {
            forms.push(form);
        }
    };

    if len > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            add(format!("{stem}y"));
        }
        if let Some(stem) = token.strip_suffix("ves") {
            add(format!("{stem}f"));
            add(format!("{stem}fe"));
        }
    }

    if len > 3 {
        if let Some(stem) = token.strip_suffix("es") {
            add(stem.to_string());
        }
        if let Some(stem) = token.strip_suffix('s') {
            add(stem.to_string());
        }
    }

    forms
}
