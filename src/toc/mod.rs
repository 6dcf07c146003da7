//! Table-of-contents generation and insertion.
//!
//! The pipeline is a straight line: heading entries feed the
//! [`NestingEngine`], which emits structural list events, and a renderer
//! serializes those events as text. [`generate`] runs that pipeline over a
//! markdown document; [`insert_toc`] additionally splices the result back
//! into the body using a two-pass planner.

pub mod engine;
mod insert;
pub mod render;

pub use engine::{ListEvent, NestingEngine, RESERVED_IDS, TocEntry, eligible};
pub use insert::insert_toc;
pub use render::{FlatListRenderer, ListRender, NestedMarkupRenderer};

use crate::parser::parse_markdown;

/// Output format for a generated table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocFormat {
    /// Flat indented bullet lines
    Markdown,
    /// Nested unordered-list markup in a `<div class="toc">` wrapper
    Html,
}

/// The heading-level window for TOC inclusion.
///
/// Both bounds are clamped to the 1-6 heading range at the boundary; the
/// engine itself never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
    pub min_level: usize,
    pub max_level: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 6,
        }
    }
}

impl TocOptions {
    pub fn new(min_level: usize, max_level: usize) -> Self {
        Self {
            min_level: min_level.clamp(1, 6),
            max_level: max_level.clamp(1, 6),
        }
    }
}

/// Generate a table of contents from a markdown document.
///
/// Returns only the rendered TOC; the document body is untouched. An input
/// without any eligible heading renders as an empty string.
pub fn generate(content: &str, opts: &TocOptions, format: TocFormat) -> String {
    let doc = parse_markdown(content);
    let entries: Vec<TocEntry> = doc.headings.iter().map(TocEntry::from).collect();
    let events = NestingEngine::new(opts.min_level, opts.max_level).process(&entries);
    log::debug!(
        "generated {} list events from {} headings",
        events.len(),
        doc.headings.len()
    );
    render_events(&events, format)
}

/// Serialize a list event sequence in the given format.
pub fn render_events(events: &[ListEvent], format: TocFormat) -> String {
    match format {
        TocFormat::Markdown => drive(FlatListRenderer::new(), events),
        TocFormat::Html => drive(NestedMarkupRenderer::new(), events),
    }
}

fn drive<R: ListRender>(mut renderer: R, events: &[ListEvent]) -> String {
    for event in events {
        renderer.event(event);
    }
    renderer.finish()
}
