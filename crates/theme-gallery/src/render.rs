//! Gallery HTML generation.
//!
//! The page is a fixed template with the parsed themes embedded as JSON;
//! a small script in the page builds one card per theme from that data.

use sailfish::TemplateSimple;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::theme::{ColorRole, RoleEntry, ThemeRecord};

#[derive(TemplateSimple)]
#[template(path = "gallery.stpl")]
struct GalleryTemplate<'a> {
    title: &'a str,
    count: usize,
    themes_json: String,
    roles_json: String,
}

/// Render the complete gallery document.
///
/// Fails with [`GalleryError::NoThemesFound`] when `records` is empty.
pub fn render_gallery(records: &[ThemeRecord], config: &GalleryConfig) -> Result<String> {
    if records.is_empty() {
        return Err(GalleryError::NoThemesFound {
            path: config.themes_dir.clone(),
            skipped: Vec::new(),
        });
    }

    let template = GalleryTemplate {
        title: &config.title,
        count: records.len(),
        themes_json: themes_json(records),
        roles_json: roles_json(),
    };

    template
        .render_once()
        .map_err(|e| GalleryError::Render(e.to_string()))
}

/// The records as pretty JSON, safe to place inside a `<script>` element.
pub fn themes_json(records: &[ThemeRecord]) -> String {
    escape_for_script(&facet_json::to_string_pretty(&records.to_vec()))
}

/// The color roles (`{key, label}`) the page script styles each card with.
pub fn roles_json() -> String {
    let roles: Vec<RoleEntry> = ColorRole::ALL.into_iter().map(RoleEntry::from).collect();
    escape_for_script(&facet_json::to_string_pretty(&roles))
}

/// Escape characters that could close the surrounding `<script>` element.
///
/// These only ever occur inside JSON strings, where `\uXXXX` is a valid
/// spelling, so the output still parses as the same JSON.
fn escape_for_script(json: &str) -> String {
    let mut result = String::with_capacity(json.len() + 32);
    for c in json.chars() {
        match c {
            '<' => result.push_str("\\u003c"),
            '>' => result.push_str("\\u003e"),
            '&' => result.push_str("\\u0026"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            _ => result.push(c),
        }
    }
    result
}
