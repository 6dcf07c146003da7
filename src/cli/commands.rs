use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(version)]
#[command(about = "Tables of contents from markdown headings and OPML outlines")]
#[command(
    long_about = "mdtoc - Generate a table of contents from a markdown document's headings,\n\
    insert it back into the document body, or convert an OPML outline into a\n\
    markdown document with a TOC.\n\n\
    Examples:\n  \
    mdtoc README.md                     # Print the TOC\n  \
    mdtoc -m insert -o out.md doc.md    # Splice the TOC into the document\n  \
    mdtoc -m outline notes.opml         # Convert an outline to markdown\n  \
    cat doc.md | mdtoc -f html          # Nested <ul> markup from a pipe"
)]
pub struct Cli {
    /// Markdown or OPML file to read, or '-' for stdin
    ///
    /// If no file is given, input is read from stdin.
    pub file: Option<PathBuf>,

    /// Transformation to apply
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Toc)]
    pub mode: Mode,

    /// Output format for the generated table of contents
    ///
    /// Defaults to the configured format ("markdown" unless changed).
    /// The html format is only available with --mode toc.
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<Format>,

    /// Lowest heading level included in the table of contents (1-6)
    #[arg(
        long = "min-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    pub min_level: Option<u8>,

    /// Highest heading level included in the table of contents (1-6)
    ///
    /// In outline mode this is also the heading/list boundary: outline
    /// entries nested deeper than LEVEL render as bullet list items
    /// instead of headings.
    #[arg(
        long = "max-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    pub max_level: Option<u8>,

    /// Write output to FILE instead of stdout
    ///
    /// The file is replaced atomically: output is staged in a temporary
    /// file and renamed into place only on success.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Persist the effective levels and format as future defaults
    #[arg(long = "save-prefs")]
    pub save_prefs: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print only the generated table of contents
    Toc,
    /// Print the document with the table of contents spliced in
    Insert,
    /// Convert an OPML outline to a markdown document with a TOC
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Flat indented bullet lines
    Markdown,
    /// Nested unordered-list markup in a <div class="toc"> wrapper
    Html,
}
