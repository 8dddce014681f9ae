//! theme-gallery CLI - build an HTML preview page from a directory of themes.

use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use facet::Facet;
use facet_args as args;
use theme_gallery::{GalleryConfig, generate_gallery, report};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: theme-gallery [themes_dir] [output_file] [--extension EXT] [--title TITLE] [-v]
  themes_dir: Directory containing theme files (default: ./themes or current directory)
  output_file: HTML output file (default: ./theme_gallery.html)

Examples:
  theme-gallery                      # Use ./themes or current directory
  theme-gallery /path/to/themes      # Specific themes directory
  theme-gallery . gallery.html       # Current dir, custom output
  theme-gallery themes -e conf       # Discover *.conf instead of *.json
";

/// Build a single HTML page previewing every theme in a directory.
#[derive(Debug, Facet)]
struct Args {
    /// Directory containing theme files (default: ./themes or current directory)
    #[facet(args::positional, default)]
    themes_dir: Option<PathBuf>,

    /// HTML output file (default: ./theme_gallery.html)
    #[facet(args::positional, default)]
    output: Option<PathBuf>,

    /// Extension theme files are discovered by (default: json)
    #[facet(args::named, args::short = 'e', default)]
    extension: Option<String>,

    /// Page title (default: "Theme Preview Gallery")
    #[facet(args::named, args::short = 't', default)]
    title: Option<String>,

    /// Log each theme as it is parsed
    #[facet(args::named, args::short = 'v', default)]
    verbose: bool,
}

fn main() -> ExitCode {
    if matches!(
        std::env::args().nth(1).as_deref(),
        Some("-h") | Some("--help")
    ) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))
    .ok();

    let args: Args = match facet_args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            if let Some(text) = e.help_text() {
                println!("{text}");
                return ExitCode::SUCCESS;
            }
            eprintln!("{:?}", miette::Report::new(e));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:?}", e);
            return ExitCode::FAILURE;
        }
    };

    report::reading_from(&config.themes_dir);
    report::output_file(&config.output);

    match generate_gallery(&config) {
        Ok(summary) => {
            for skipped in &summary.skipped {
                report::file_skipped(skipped);
            }
            report::generated(summary.theme_count, &summary.output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn build_config(args: Args) -> miette::Result<GalleryConfig> {
    let cwd = std::env::current_dir()
        .map_err(|e| miette::miette!("failed to read current directory: {}", e))
        .and_then(utf8_path)?;
    let themes_dir = args.themes_dir.map(utf8_path).transpose()?;
    let output = args.output.map(utf8_path).transpose()?;

    let mut config = GalleryConfig::resolve(&cwd, themes_dir, output);
    if let Some(extension) = args.extension {
        config = config.with_extension(extension);
    }
    if let Some(title) = args.title {
        config = config.with_title(title);
    }
    Ok(config)
}

fn utf8_path(path: PathBuf) -> miette::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|p| miette::miette!("path is not valid UTF-8: {}", p.display()))
}
