//! # mdtoc
//!
//! Tables of contents from markdown headings and OPML outlines.
//!
//! ## Usage
//!
//! Print the TOC of a document:
//! ```sh
//! mdtoc README.md
//! ```
//!
//! Splice the TOC into the document body:
//! ```sh
//! mdtoc -m insert -o README.md README.md
//! ```
//!
//! Convert an OPML outline to a markdown document:
//! ```sh
//! mdtoc -m outline --max-level 3 notes.opml
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Format, Mode};
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use log::LevelFilter;
use mdtoc::toc::{self, TocFormat, TocOptions};
use mdtoc::{Config, input, opml};
use std::io::Write;
use std::path::Path;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let mut config = Config::load();

    let min_level = usize::from(args.min_level.unwrap_or(config.toc.min_level)).clamp(1, 6);
    let max_level = usize::from(args.max_level.unwrap_or(config.toc.max_level)).clamp(1, 6);
    if min_level > max_level {
        bail!("--min-level ({min_level}) cannot exceed --max-level ({max_level})");
    }
    let opts = TocOptions::new(min_level, max_level);

    let format = effective_format(&args, &config)?;

    let content = input::read_input(args.file.as_deref())?;

    log::info!(
        "running {:?} transform with levels {}-{}",
        args.mode,
        min_level,
        max_level
    );

    let result = match args.mode {
        Mode::Toc => toc::generate(&content, &opts, format),
        Mode::Insert => toc::insert_toc(&content, &opts),
        Mode::Outline => opml::opml_to_document(&content, &opts)?,
    };

    write_output(args.output.as_deref(), &result)?;

    if args.save_prefs {
        config.toc.min_level = min_level as u8;
        config.toc.max_level = max_level as u8;
        config.toc.format = match format {
            TocFormat::Markdown => "markdown".to_string(),
            TocFormat::Html => "html".to_string(),
        };
        config.save().map_err(|e| eyre!("cannot save preferences: {e}"))?;
        log::info!("preferences saved");
    }

    Ok(())
}

/// Resolve the output format: explicit flag, then config file, then
/// markdown. The html format only makes sense for the TOC-only mode; a
/// config-file default of html is quietly ignored elsewhere, an explicit
/// flag is an error.
fn effective_format(args: &Cli, config: &Config) -> Result<TocFormat> {
    let requested = args.format.or_else(|| match config.toc.format.as_str() {
        "html" => Some(Format::Html),
        _ => None,
    });
    match requested {
        Some(Format::Html) if args.mode != Mode::Toc => {
            if args.format.is_some() {
                bail!("--format html is only supported with --mode toc");
            }
            log::warn!("configured html format ignored for {:?} mode", args.mode);
            Ok(TocFormat::Markdown)
        }
        Some(Format::Html) => Ok(TocFormat::Html),
        _ => Ok(TocFormat::Markdown),
    }
}

/// Write the result to stdout, or atomically replace the output file.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        None => {
            std::io::stdout().write_all(content.as_bytes())?;
            Ok(())
        }
        Some(p) => {
            let dir = p
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let mut staged = tempfile::NamedTempFile::new_in(dir)?;
            staged.write_all(content.as_bytes())?;
            staged.persist(p)?;
            Ok(())
        }
    }
}
