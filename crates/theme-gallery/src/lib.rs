//! Render a directory of color theme files into one HTML preview page.
//!
//! Theme files are plain text with one `key = value` pair per line. Every
//! file in the themes directory with the configured extension becomes a
//! card in the gallery, styled from its `backgroundColor`, `textColor`,
//! `selectionColor` and `borderColor` keys.
//!
//! # Example
//!
//! ```rust,no_run
//! use theme_gallery::{GalleryConfig, generate_gallery};
//!
//! let config = GalleryConfig::new("themes", "theme_gallery.html");
//! let report = generate_gallery(&config)?;
//! println!("{} themes", report.theme_count);
//! # Ok::<(), theme_gallery::GalleryError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod name;
pub mod render;
pub mod report;
pub mod theme;
pub mod writer;

pub use config::GalleryConfig;
pub use error::{GalleryError, Result};
pub use loader::{
    LoadedThemes, discover_theme_files, load_themes, parse_theme_source, read_theme_file,
};
pub use name::{derive_theme_name, generate_theme_name};
pub use render::{render_gallery, roles_json, themes_json};
pub use theme::{ColorRole, ThemeData, ThemeRecord};
pub use writer::write_gallery;

use camino::Utf8PathBuf;
use tracing::debug;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GalleryReport {
    /// Number of themes in the written gallery.
    pub theme_count: usize,
    /// Files that could not be read.
    pub skipped: Vec<GalleryError>,
    /// Where the gallery was written.
    pub output: Utf8PathBuf,
}

/// Load, render and write a gallery.
///
/// Nothing is written unless at least one theme was loaded. When none was,
/// the files that failed to read ride along in
/// [`GalleryError::NoThemesFound`].
pub fn generate_gallery(config: &GalleryConfig) -> Result<GalleryReport> {
    let LoadedThemes { records, skipped } = load_themes(config)?;
    debug!(themes = records.len(), skipped = skipped.len(), "loaded themes");

    if records.is_empty() {
        return Err(GalleryError::NoThemesFound {
            path: config.themes_dir.clone(),
            skipped,
        });
    }

    let html = render_gallery(&records, config)?;
    write_gallery(&config.output, &html)?;

    Ok(GalleryReport {
        theme_count: records.len(),
        skipped,
        output: config.output.clone(),
    })
}
