//! Renderers turning [`ListEvent`] streams into text.
//!
//! Two strategies drive off the same event sequence: a flat
//! indentation-prefixed bullet list for markdown TOCs, and a nested
//! `<ul>`/`<li>` markup fragment. Both are pure stream consumers; for
//! byte-identical event sequences they produce byte-identical output.

use std::fmt::Write;

use super::engine::ListEvent;

/// Spaces per nesting level in the flat bullet format.
const FLAT_INDENT: &str = "    ";
/// Spaces per nesting level in the nested markup format.
const MARKUP_INDENT: &str = "  ";

/// A consumer of list events that accumulates rendered text.
pub trait ListRender {
    fn event(&mut self, event: &ListEvent);

    /// Take the rendered output, leaving the renderer empty.
    fn finish(&mut self) -> String;
}

/// Flat indented bullet lines: `"    " * depth + "* [text](link)"`.
///
/// List open/close events are ignored; the indent comes from the item's
/// heading level relative to the first item's level, which keeps sparse
/// level jumps (say 2 straight to 4) at their full visual depth.
#[derive(Debug, Default)]
pub struct FlatListRenderer {
    out: String,
    base_level: Option<usize>,
}

impl FlatListRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListRender for FlatListRenderer {
    fn event(&mut self, event: &ListEvent) {
        if let ListEvent::OpenItem { level, text, link } = event {
            let base = *self.base_level.get_or_insert(*level);
            for _ in 0..level.saturating_sub(base) {
                self.out.push_str(FLAT_INDENT);
            }
            let _ = writeln!(self.out, "* [{}]({})", text, link);
        }
    }

    fn finish(&mut self) -> String {
        self.base_level = None;
        std::mem::take(&mut self.out)
    }
}

/// Nested unordered-list markup wrapped in a `<div class="toc">` container.
///
/// The wrapper opens lazily on the first event, so an empty event stream
/// renders as an empty string. `</li>` lands on the item's own line when the
/// item closes without a nested list.
#[derive(Debug)]
pub struct NestedMarkupRenderer {
    out: String,
    depth: usize,
    started: bool,
    item_line_open: bool,
    container_open: String,
    container_close: String,
}

impl NestedMarkupRenderer {
    pub fn new() -> Self {
        Self::with_container("<div class=\"toc\">", "</div>")
    }

    /// Use custom open/close container tags around the generated list.
    pub fn with_container(open: &str, close: &str) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            started: false,
            item_line_open: false,
            container_open: open.to_string(),
            container_close: close.to_string(),
        }
    }

    fn ensure_started(&mut self) {
        if !self.started {
            self.out.push_str(&self.container_open);
            self.out.push('\n');
            self.started = true;
            self.depth = 1;
        }
    }

    fn break_item_line(&mut self) {
        if self.item_line_open {
            self.out.push('\n');
            self.item_line_open = false;
        }
    }

    fn push_line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.out.push_str(MARKUP_INDENT);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }
}

impl Default for NestedMarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ListRender for NestedMarkupRenderer {
    fn event(&mut self, event: &ListEvent) {
        match event {
            ListEvent::OpenList => {
                self.ensure_started();
                self.break_item_line();
                self.push_line("<ul>");
                self.depth += 1;
            }
            ListEvent::CloseList => {
                self.depth -= 1;
                self.push_line("</ul>");
            }
            ListEvent::OpenItem { text, link, .. } => {
                self.ensure_started();
                self.break_item_line();
                for _ in 0..self.depth {
                    self.out.push_str(MARKUP_INDENT);
                }
                let _ = write!(
                    self.out,
                    "<li><a href=\"{}\">{}</a>",
                    escape_markup(link),
                    escape_markup(text)
                );
                self.item_line_open = true;
                self.depth += 1;
            }
            ListEvent::CloseItem => {
                self.depth -= 1;
                if self.item_line_open {
                    self.out.push_str("</li>\n");
                    self.item_line_open = false;
                } else {
                    self.push_line("</li>");
                }
            }
        }
    }

    fn finish(&mut self) -> String {
        if self.started {
            self.out.push_str(&self.container_close);
            self.out.push('\n');
        }
        self.started = false;
        self.depth = 0;
        self.item_line_open = false;
        std::mem::take(&mut self.out)
    }
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
