//! Error types for gallery generation.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Everything that can go wrong while building a gallery.
///
/// `FileRead` is recovered locally by the loader (the file is skipped);
/// every other variant aborts the run.
#[derive(Debug, Error, Diagnostic)]
pub enum GalleryError {
    #[error("Themes directory {path} does not exist")]
    #[diagnostic(
        code(theme_gallery::directory_not_found),
        help("pass the directory containing your theme files as the first argument")
    )]
    DirectoryNotFound { path: Utf8PathBuf },

    #[error("Failed to list themes directory: {source}")]
    #[diagnostic(code(theme_gallery::directory_read))]
    DirectoryRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading theme file: {source}")]
    #[diagnostic(code(theme_gallery::file_read), severity(Warning))]
    FileRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No theme files found in {path}")]
    #[diagnostic(
        code(theme_gallery::no_themes),
        help("theme files are matched by extension; try --extension")
    )]
    NoThemesFound {
        path: Utf8PathBuf,
        /// Files that matched but could not be read.
        #[related]
        skipped: Vec<GalleryError>,
    },

    #[error("Failed to render gallery: {0}")]
    #[diagnostic(code(theme_gallery::render))]
    Render(String),

    #[error("Error writing HTML file: {source}")]
    #[diagnostic(code(theme_gallery::output_write))]
    OutputWrite {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
