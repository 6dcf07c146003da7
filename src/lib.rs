//! # mdtoc
//!
//! Tables of contents from heading hierarchies.
//!
//! This library turns an ordered sequence of markdown headings into a nested
//! table of contents, rendered as flat indented bullet lines or as a nested
//! `<ul>` markup fragment, and can splice the generated TOC back into the
//! document body. It also converts OPML outlines into markdown documents,
//! mapping outline depth to heading levels and rendering branches deeper than
//! the configured maximum as nested bullet lists.
//!
//! ## Example
//!
//! ```rust
//! use mdtoc::toc::{self, TocFormat, TocOptions};
//!
//! let markdown = "\
//! ## Introduction
//! Some content here.
//!
//! ### Setup
//! More details.
//!
//! ## Usage
//! How to use it.
//! ";
//!
//! let rendered = toc::generate(markdown, &TocOptions::default(), TocFormat::Markdown);
//! assert_eq!(
//!     rendered,
//!     "* [Introduction](#introduction)\n    * [Setup](#setup)\n* [Usage](#usage)\n"
//! );
//! ```

/// Configuration module for persisting user preferences.
///
/// Stores the default heading-level window and output format, mirroring the
/// command-line flags.
pub mod config;

/// Error types shared by the transformations.
pub mod error;

/// Input handling for file and stdin sources.
pub mod input;

/// OPML outline parsing and outline-to-markdown conversion.
pub mod opml;

/// Parser module for markdown documents.
///
/// Extracts the heading structure (levels, text, byte offsets) and derives
/// anchor identifiers from heading text.
pub mod parser;

/// The heading-to-nested-list engine, its renderers, and the TOC insertion
/// planner.
pub mod toc;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::TransformError;
pub use parser::{Document, Heading, heading_id, parse_markdown};
pub use toc::{TocFormat, TocOptions};
