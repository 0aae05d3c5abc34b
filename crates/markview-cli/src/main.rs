//! markview - render a Markdown file to HTML and open it in the
//! default browser.
//!
//! This binary is thin I/O glue around the `markview` library: it
//! validates the input path, reads the document, converts it, writes
//! the HTML into the current directory and hands the file to the
//! system browser. All fatal conditions are caught here, before the
//! conversion core ever runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

#[derive(Parser)]
#[command(name = "markview", version, about = "Preview a Markdown file in the default browser")]
struct Cli {
    /// Path to the Markdown (.md) file to preview
    file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum PreviewError {
    #[error("file does not exist: {0}")]
    Missing(PathBuf),

    #[error("not a Markdown (.md) file: {0}")]
    NotMarkdown(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = preview(&cli.file) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn preview(path: &Path) -> Result<(), PreviewError> {
    validate_input_path(path)?;

    log::info!("reading {}", path.display());
    let markdown = fs::read_to_string(path)?;

    log::debug!("converting {} bytes of Markdown", markdown.len());
    let html = markview::to_html(&markdown);

    let output = temp_output_path();
    log::info!("writing {}", output.display());
    fs::write(&output, html)?;

    log::info!("opening {} in the default browser", output.display());
    open::that(&output)?;

    Ok(())
}

/// The input must exist and carry an `.md` extension, case-insensitive.
fn validate_input_path(path: &Path) -> Result<(), PreviewError> {
    if !path.exists() {
        return Err(PreviewError::Missing(path.to_path_buf()));
    }

    let is_markdown = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false);
    if !is_markdown {
        return Err(PreviewError::NotMarkdown(path.to_path_buf()));
    }

    Ok(())
}

/// A unique output file in the current directory. The file is left on
/// disk so the browser can keep reading it after we exit.
fn temp_output_path() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    PathBuf::from(format!("tempOutput-{millis}.html"))
}
