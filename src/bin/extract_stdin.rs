//! CLI that reads post markup from stdin and prints the extraction result.
//!
//! ```text
//! curl -s https://blog.naver.com/... | extract_stdin --url https://blog.naver.com/... --format text
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use se_extract::{encoding, extract_with_frame, extract_with_options, Error, Options};

#[derive(Parser)]
#[command(name = "extract_stdin")]
#[command(version)]
#[command(about = "Extract ordered text and images from blog post markup", long_about = None)]
struct Cli {
    /// Source URL of the post
    #[arg(long)]
    url: Option<String>,

    /// File holding the markup of the embedded post frame
    #[arg(long, value_name = "FILE")]
    frame: Option<PathBuf>,

    /// Directory used in placeholder paths
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Encoding of the input, overriding any charset declaration
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// JSON options file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Full result as JSON
    Json,
    /// Normalized text only
    Text,
    /// Simplified markup only
    Html,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("extract_stdin: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Error> {
    let mut options = match &cli.config {
        Some(path) => Options::from_json(&read_file(path)?)?,
        None => Options::default(),
    };
    if cli.url.is_some() {
        options.url.clone_from(&cli.url);
    }
    if let Some(dir) = &cli.image_dir {
        options.image_dir.clone_from(dir);
    }

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .map_err(|e| Error::ParseError(format!("stdin: {e}")))?;

    let page = decode(&html, cli.encoding.as_deref())?;
    let result = match &cli.frame {
        Some(path) => extract_with_frame(&page, &read_file(path)?, &options)?,
        None => extract_with_options(&page, &options)?,
    };

    Ok(match cli.format {
        Format::Json => serde_json::to_string_pretty(&result)
            .map_err(|e| Error::ExtractionError(format!("serialize: {e}")))?,
        Format::Text => result.normalized,
        Format::Html => result.simplified_html,
    })
}

fn decode(bytes: &[u8], label: Option<&str>) -> Result<String, Error> {
    match label {
        Some(label) => encoding::transcode_with_label(bytes, label),
        None => Ok(encoding::transcode_to_utf8(bytes)),
    }
}

fn read_file(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|e| Error::ParseError(format!("{}: {e}", path.display())))?;
    Ok(encoding::transcode_to_utf8(&bytes))
}
