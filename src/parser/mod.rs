//! Markdown parsing and heading structure extraction.
//!
//! Heading extraction is delegated to `turbovault-parser` for unified,
//! code-block-aware parsing: heading markers inside fenced code blocks are
//! not headings, and inline formatting is stripped from heading text.

mod document;

pub use document::{Document, Heading, heading_id};

/// Parse markdown content and extract headings with byte offsets.
///
/// # Arguments
///
/// * `content` - Markdown content as a string
///
/// # Returns
///
/// A `Document` containing the content and extracted headings with byte
/// offsets.
pub fn parse_markdown(content: &str) -> Document {
    let headings = turbovault_parser::parse_headings(content)
        .into_iter()
        .map(|h| Heading {
            level: h.level as usize,
            text: h.text,
            offset: h.position.offset,
        })
        .collect();

    Document::new(content.to_string(), headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headings() {
        let md = "\
# Guide
intro text

## Installation
steps

### From Source
details

## Usage
run it
";

        let doc = parse_markdown(md);
        let levels: Vec<usize> = doc.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 2]);
        assert_eq!(doc.headings[0].text, "Guide");
        assert_eq!(doc.headings[3].text, "Usage");
    }

    #[test]
    fn test_parse_headings_with_bold() {
        let md = "# Title\n\n## **Bold** Section\n";

        let doc = parse_markdown(md);
        assert_eq!(doc.headings.len(), 2);

        // Inline formatting is stripped from heading text
        assert_eq!(doc.headings[1].text, "Bold Section");
        assert_eq!(doc.headings[1].id(), "boldsection");
    }

    #[test]
    fn test_code_fence_is_not_a_heading() {
        let md = "# Real\n\n```\n# not a heading\n```\n";

        let doc = parse_markdown(md);
        assert_eq!(doc.headings.len(), 1);
        assert_eq!(doc.headings[0].text, "Real");
    }

    #[test]
    fn test_headings_store_offsets() {
        let md = "# First\nContent here\n\n## Second\nMore content";

        let doc = parse_markdown(md);
        assert_eq!(doc.headings.len(), 2);
        assert_eq!(doc.headings[0].offset, 0);
        assert!(doc.headings[1].offset > doc.headings[0].offset);
        assert_eq!(doc.line_index(doc.headings[1].offset), 3);
    }
}
