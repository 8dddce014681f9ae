//! Console status lines.

use camino::Utf8Path;
use owo_colors::OwoColorize;

use crate::error::GalleryError;

pub fn reading_from(themes_dir: &Utf8Path) {
    println!("{} Reading themes from: {}", "●".cyan(), themes_dir.cyan());
}

pub fn output_file(output: &Utf8Path) {
    println!("{} Output file: {}", "●".cyan(), output.cyan());
}

/// A theme file that could not be read and was skipped.
pub fn file_skipped(err: &GalleryError) {
    eprintln!("  {} {}", "⚠".yellow(), err);
}

pub fn generated(count: usize, output: &Utf8Path) {
    println!(
        "  {} Generated theme gallery with {} themes: {}",
        "✓".green(),
        count,
        output.cyan()
    );
}
