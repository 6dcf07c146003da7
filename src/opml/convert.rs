//! Outline-to-markdown conversion.
//!
//! Outline depth maps directly to heading level up to the configured
//! maximum. Beyond that boundary a node is not a heading candidate but a
//! list item nested under the last emitted heading; the writer tracks an
//! `indents` counter independent of heading level for those overflow
//! branches, so deep outlines render as nested bullet lists instead of
//! ever-deeper headings.

use indextree::NodeId;

use super::{Outline, OutlineItem};

/// Spaces per indent level in converted list output.
const INDENT: &str = "    ";

/// Convert a materialized outline into a markdown document.
///
/// `max_level` is the heading/list boundary: nodes at depth `max_level` or
/// shallower become headings, deeper nodes become overflow list items.
pub fn outline_to_markdown(outline: &Outline, max_level: usize) -> String {
    let mut writer = OutlineWriter::new(max_level.clamp(1, 6));
    for id in outline.top_level() {
        visit(outline, id, &mut writer);
    }
    writer.finish()
}

fn visit(outline: &Outline, id: NodeId, writer: &mut OutlineWriter) {
    writer.begin_node(outline.item(id));
    for child in outline.children(id) {
        visit(outline, child, writer);
    }
    writer.end_node();
}

/// Depth-tracking markdown emitter for one conversion pass.
///
/// `depth` follows the traversal, `list_level` is the deepest currently
/// open list (pinned at or above `max_level` while overflow branches are
/// open), and `indents` always equals the number of open overflow levels.
struct OutlineWriter {
    out: MarkdownWriter,
    max_level: usize,
    depth: usize,
    list_level: usize,
    indents: usize,
}

impl OutlineWriter {
    fn new(max_level: usize) -> Self {
        Self {
            out: MarkdownWriter::new(),
            max_level,
            depth: 0,
            list_level: 0,
            indents: 0,
        }
    }

    fn begin_node(&mut self, item: &OutlineItem) {
        self.depth += 1;
        if let Some(text) = item.text.as_deref() {
            if self.depth <= self.max_level {
                self.end_open_lists();
                self.out.heading(self.depth, text);
            } else {
                if self.list_level < self.max_level {
                    self.list_level = self.max_level;
                }
                self.end_open_lists();
                while self.list_level < self.depth {
                    self.list_level += 1;
                }
                self.out.list_item(text);
                self.more_indent();
            }
        }
        if let Some(note) = item.note.as_deref() {
            self.write_note(note);
        }
    }

    fn end_node(&mut self) {
        self.depth -= 1;
        self.end_open_lists();
    }

    fn finish(mut self) -> String {
        self.end_open_lists();
        self.out.finish()
    }

    fn end_open_lists(&mut self) {
        while self.list_level > self.depth && self.list_level > self.max_level {
            self.list_level -= 1;
        }
        self.adjust_indent();
    }

    fn more_indent(&mut self) {
        self.out.more_indent();
        self.indents += 1;
    }

    fn adjust_indent(&mut self) {
        while self.indents > self.list_level.saturating_sub(self.max_level) && self.indents > 0 {
            self.out.less_indent();
            self.indents -= 1;
        }
    }

    /// Write a `_note` attribute as body lines.
    ///
    /// Single line feeds break lines; a run of more than one consecutive
    /// line feed inserts exactly one blank output line. Carriage returns
    /// are dropped.
    fn write_note(&mut self, note: &str) {
        let bytes = note.as_bytes();
        let mut j = 0;
        while j < note.len() {
            let k = note[j..].find('\n').map_or(note.len(), |p| j + p);
            let mut l = k;
            let mut lfs = 0;
            while l < note.len() && (bytes[l] == b'\n' || bytes[l] == b'\r') {
                if bytes[l] == b'\n' {
                    lfs += 1;
                }
                l += 1;
            }
            self.out.line(note[j..k].trim_end_matches('\r'));
            if lfs > 1 {
                self.out.blank();
            }
            j = l;
        }
    }
}

/// Line sink with blank-line bookkeeping and indent tracking.
struct MarkdownWriter {
    lines: Vec<String>,
    indent: usize,
}

impl MarkdownWriter {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent: 0,
        }
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.ensure_blank();
        self.lines.push(format!("{} {}", "#".repeat(level), text));
        self.lines.push(String::new());
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("* {}", text));
    }

    fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", INDENT.repeat(self.indent), text));
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn ensure_blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn more_indent(&mut self) {
        self.indent += 1;
    }

    fn less_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opml::parse_opml;

    fn convert(xml: &str, max_level: usize) -> String {
        outline_to_markdown(&parse_opml(xml).unwrap(), max_level)
    }

    #[test]
    fn test_depth_maps_to_heading_level() {
        let xml = r#"<opml><body>
            <outline text="One">
              <outline text="Two">
                <outline text="Three"/>
              </outline>
            </outline>
        </body></opml>"#;
        assert_eq!(convert(xml, 6), "# One\n\n## Two\n\n### Three\n");
    }

    #[test]
    fn test_overflow_depth_becomes_list_items() {
        let xml = r#"<opml><body>
            <outline text="A">
              <outline text="B">
                <outline text="C">
                  <outline text="D"/>
                </outline>
                <outline text="E"/>
              </outline>
            </outline>
        </body></opml>"#;
        let expected = "\
# A

## B

* C
    * D
* E
";
        assert_eq!(convert(xml, 2), expected);
    }

    #[test]
    fn test_heading_resumes_after_overflow_branch() {
        let xml = r#"<opml><body>
            <outline text="A">
              <outline text="B">
                <outline text="deep item"/>
              </outline>
              <outline text="F"/>
            </outline>
        </body></opml>"#;
        let expected = "\
# A

## B

* deep item

## F
";
        assert_eq!(convert(xml, 2), expected);
    }

    #[test]
    fn test_note_lines_follow_their_heading() {
        let xml = r#"<opml><body>
            <outline text="Topic" _note="first line&#10;second line"/>
        </body></opml>"#;
        assert_eq!(convert(xml, 6), "# Topic\n\nfirst line\nsecond line\n");
    }

    #[test]
    fn test_note_blank_run_collapses_to_one_blank_line() {
        let xml = r#"<opml><body>
            <outline text="Topic" _note="para one&#10;&#10;&#10;&#10;para two"/>
        </body></opml>"#;
        assert_eq!(convert(xml, 6), "# Topic\n\npara one\n\npara two\n");
    }

    #[test]
    fn test_note_crlf_is_normalized() {
        let xml = r#"<opml><body>
            <outline text="Topic" _note="one&#13;&#10;two"/>
        </body></opml>"#;
        assert_eq!(convert(xml, 6), "# Topic\n\none\ntwo\n");
    }

    #[test]
    fn test_note_under_overflow_item_is_indented() {
        let xml = r#"<opml><body>
            <outline text="H">
              <outline text="item" _note="detail"/>
            </outline>
        </body></opml>"#;
        assert_eq!(convert(xml, 1), "# H\n\n* item\n    detail\n");
    }

    #[test]
    fn test_indents_track_open_overflow_levels() {
        // Descend three levels past the boundary and resurface: the indent
        // must step back down with the traversal, never underflow.
        let xml = r#"<opml><body>
            <outline text="H">
              <outline text="a">
                <outline text="b">
                  <outline text="c"/>
                </outline>
              </outline>
              <outline text="d"/>
            </outline>
        </body></opml>"#;
        let expected = "\
# H

* a
    * b
        * c
* d
";
        assert_eq!(convert(xml, 1), expected);
    }

    #[test]
    fn test_empty_outline_renders_empty() {
        assert_eq!(convert("<opml><body/></opml>", 6), "");
    }
}
