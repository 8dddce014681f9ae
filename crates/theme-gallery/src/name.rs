//! Display titles from theme file names.

use crate::config::{DEFAULT_EXTENSION, DEFAULT_MARKER};

/// Turn a theme file name into a display title using the default
/// extension and marker (e.g. `solarized_dark_theme.json` -> `Solarized Dark`).
pub fn generate_theme_name(file_name: &str) -> String {
    derive_theme_name(file_name, DEFAULT_EXTENSION, DEFAULT_MARKER)
}

/// Turn a theme file name into a display title.
///
/// Strips `.{extension}` from the end, removes every occurrence of
/// `marker`, then title-cases each `_`-separated word. Empty segments are
/// kept, so `a__b` becomes `A  B`.
pub fn derive_theme_name(file_name: &str, extension: &str, marker: &str) -> String {
    let suffix = format!(".{extension}");
    let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);
    let stem = if marker.is_empty() {
        stem.to_string()
    } else {
        stem.replace(marker, "")
    };

    stem.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
