//! Run configuration and default path resolution.

use camino::{Utf8Path, Utf8PathBuf};

/// Extension theme files are discovered by. The files are line-based
/// `key=value` text regardless of what this says.
pub const DEFAULT_EXTENSION: &str = "json";

/// Segment removed from file names when deriving display titles.
pub const DEFAULT_MARKER: &str = "_theme";

/// Subdirectory of the working directory searched first.
pub const DEFAULT_THEMES_SUBDIR: &str = "themes";

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "theme_gallery.html";

/// Page heading and `<title>`.
pub const DEFAULT_TITLE: &str = "Theme Preview Gallery";

/// Everything one gallery run needs.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Directory scanned (non-recursively) for theme files.
    pub themes_dir: Utf8PathBuf,
    /// Destination HTML file.
    pub output: Utf8PathBuf,
    /// Discovery extension, without the leading dot.
    pub extension: String,
    /// Marker stripped from display titles.
    pub marker: String,
    /// Page title.
    pub title: String,
}

impl GalleryConfig {
    pub fn new(themes_dir: impl Into<Utf8PathBuf>, output: impl Into<Utf8PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            output: output.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Fill in missing paths relative to `cwd`.
    ///
    /// Without an explicit directory, `cwd/themes` is used if it exists and
    /// `cwd` otherwise. The output defaults to `cwd/theme_gallery.html`.
    pub fn resolve(
        cwd: &Utf8Path,
        themes_dir: Option<Utf8PathBuf>,
        output: Option<Utf8PathBuf>,
    ) -> Self {
        let themes_dir = themes_dir.unwrap_or_else(|| {
            let candidate = cwd.join(DEFAULT_THEMES_SUBDIR);
            if candidate.exists() {
                candidate
            } else {
                cwd.to_path_buf()
            }
        });
        let output = output.unwrap_or_else(|| cwd.join(DEFAULT_OUTPUT_FILE));

        Self::new(themes_dir, output)
    }

    /// Override the discovery extension. A leading dot is tolerated.
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        let extension = extension.as_ref();
        self.extension = extension.strip_prefix('.').unwrap_or(extension).to_string();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("non-UTF8 temp dir")
    }

    #[test]
    fn test_prefers_themes_subdir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = utf8(&dir);
        fs_err::create_dir(cwd.join("themes")).unwrap();

        let config = GalleryConfig::resolve(&cwd, None, None);
        assert_eq!(config.themes_dir, cwd.join("themes"));
        assert_eq!(config.output, cwd.join("theme_gallery.html"));
    }

    #[test]
    fn test_falls_back_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = utf8(&dir);

        let config = GalleryConfig::resolve(&cwd, None, None);
        assert_eq!(config.themes_dir, cwd);
    }

    #[test]
    fn test_explicit_paths_win() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = utf8(&dir);
        fs_err::create_dir(cwd.join("themes")).unwrap();

        let config = GalleryConfig::resolve(
            &cwd,
            Some("elsewhere".into()),
            Some("gallery.html".into()),
        );
        assert_eq!(config.themes_dir, Utf8PathBuf::from("elsewhere"));
        assert_eq!(config.output, Utf8PathBuf::from("gallery.html"));
    }

    #[test]
    fn test_extension_override() {
        let config = GalleryConfig::new(".", "out.html").with_extension(".theme");
        assert_eq!(config.extension, "theme");
        assert_eq!(config.marker, DEFAULT_MARKER);
    }
}
