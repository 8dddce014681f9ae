//! Theme discovery and `key=value` parsing.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::{debug, warn};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::name::derive_theme_name;
use crate::theme::{ThemeData, ThemeRecord};

/// Records parsed from a themes directory, plus the files that were skipped.
#[derive(Debug, Default)]
pub struct LoadedThemes {
    pub records: Vec<ThemeRecord>,
    pub skipped: Vec<GalleryError>,
}

/// Parse line-based theme source.
///
/// Each trimmed, non-empty line containing `=` is split on the first `=`
/// and both halves are trimmed. Other lines are ignored. Later duplicates
/// overwrite earlier values.
pub fn parse_theme_source(source: &str) -> ThemeData {
    let mut data = ThemeData::new();
    for line in source.lines() {
        let line = line.trim();
        if let Some((key, value)) = line.split_once('=') {
            data.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    data
}

/// Read and parse a single theme file.
pub fn read_theme_file(path: &Utf8Path) -> Result<ThemeData> {
    let source =
        fs::read_to_string(path.as_std_path()).map_err(|source| GalleryError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_theme_source(&source))
}

/// Files directly inside `dir` whose names end in `.{extension}`, sorted by name.
pub fn discover_theme_files(dir: &Utf8Path, extension: &str) -> Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        return Err(GalleryError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |source| GalleryError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_std_path()).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(path) => path,
            Err(path) => {
                warn!(path = %path.display(), "skipping non-UTF8 file name");
                continue;
            }
        };

        if path.extension() == Some(extension) && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load every theme in `config.themes_dir`.
///
/// Unreadable files are collected in [`LoadedThemes::skipped`]; they never
/// abort the load.
pub fn load_themes(config: &GalleryConfig) -> Result<LoadedThemes> {
    let mut loaded = LoadedThemes::default();

    for path in discover_theme_files(&config.themes_dir, &config.extension)? {
        let Some(file) = path.file_name() else {
            continue;
        };

        match read_theme_file(&path) {
            Ok(data) => {
                debug!(file, keys = data.len(), "parsed theme");
                let name = derive_theme_name(file, &config.extension, &config.marker);
                loaded.records.push(ThemeRecord::new(name, file, data));
            }
            Err(err) => {
                debug!(%path, "skipping unreadable theme file");
                loaded.skipped.push(err);
            }
        }
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_key_and_value() {
        let data = parse_theme_source("  foo  =  bar baz  \n");
        assert_eq!(data.len(), 1);
        assert_eq!(data["foo"], "bar baz");
    }

    #[test]
    fn test_splits_on_first_equals() {
        let data = parse_theme_source("font=family=mono");
        assert_eq!(data["font"], "family=mono");
    }

    #[test]
    fn test_ignores_malformed_lines() {
        let source = "# comment without separator\n\nbackgroundColor=#000000\nnot a pair\ntextColor = #ffffff";
        let data = parse_theme_source(source);
        assert_eq!(data.len(), 2);
        assert_eq!(data["backgroundColor"], "#000000");
        assert_eq!(data["textColor"], "#ffffff");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let data = parse_theme_source("a=1\nb=2\na=3");
        assert_eq!(data["a"], "3");
        // First-seen order is kept.
        assert_eq!(data.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_theme_source("").is_empty());
        assert!(parse_theme_source("\n\n   \n").is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let data = parse_theme_source("a = 1\r\nb = 2\r\n");
        assert_eq!(data["a"], "1");
        assert_eq!(data["b"], "2");
    }
}
