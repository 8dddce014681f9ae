use camino::Utf8Path;
use fs_err as fs;

use crate::error::{GalleryError, Result};

/// Write the rendered gallery to `path`, replacing any existing file.
pub fn write_gallery(path: &Utf8Path, html: &str) -> Result<()> {
    fs::write(path.as_std_path(), html).map_err(|source| GalleryError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("gallery.html")).unwrap();
        fs::write(path.as_std_path(), "old").unwrap();

        write_gallery(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(path.as_std_path()).unwrap(), "<html></html>");
    }

    #[test]
    fn test_missing_parent_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("missing/gallery.html")).unwrap();

        let err = write_gallery(&path, "<html></html>").unwrap_err();
        assert!(matches!(err, GalleryError::OutputWrite { .. }));
    }
}
