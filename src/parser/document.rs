/// A single heading extracted from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: usize,
    /// Heading text with inline formatting stripped
    pub text: String,
    /// Byte offset of the heading line in the source content
    pub offset: usize,
}

impl Heading {
    /// The normalized anchor identifier for this heading.
    ///
    /// An empty id marks the heading as ineligible for TOC inclusion.
    pub fn id(&self) -> String {
        heading_id(&self.text)
    }
}

/// A parsed markdown document: the raw content plus its heading structure.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw markdown content
    pub content: String,
    /// All headings in document order
    pub headings: Vec<Heading>,
}

impl Document {
    pub fn new(content: String, headings: Vec<Heading>) -> Self {
        Self { content, headings }
    }

    /// Map a byte offset into the content to its zero-based line index.
    pub fn line_index(&self, offset: usize) -> usize {
        let offset = offset.min(self.content.len());
        self.content[..offset].bytes().filter(|b| *b == b'\n').count()
    }
}

/// Derive a normalized anchor identifier from heading text.
///
/// Lower-cases the text and strips every non-alphanumeric character, so
/// "Table of Contents" becomes `tableofcontents`. Headings whose text
/// contains no alphanumeric characters get an empty id and are skipped by
/// the TOC engine.
///
/// # Examples
///
/// ```
/// use mdtoc::parser::heading_id;
///
/// assert_eq!(heading_id("Getting Started"), "gettingstarted");
/// assert_eq!(heading_id("1. API Reference"), "1apireference");
/// assert_eq!(heading_id("---"), "");
/// ```
pub fn heading_id(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_id_strips_punctuation() {
        assert_eq!(heading_id("Table of Contents"), "tableofcontents");
        assert_eq!(heading_id("What's New?"), "whatsnew");
        assert_eq!(heading_id("v2.0 - Breaking Changes"), "v20breakingchanges");
    }

    #[test]
    fn test_heading_id_empty_for_symbols_only() {
        assert_eq!(heading_id(""), "");
        assert_eq!(heading_id("***"), "");
    }

    #[test]
    fn test_line_index() {
        let doc = Document::new("# A\n\n## B\ntext\n".to_string(), vec![]);
        assert_eq!(doc.line_index(0), 0);
        assert_eq!(doc.line_index(5), 2); // start of "## B"
        assert_eq!(doc.line_index(doc.content.len()), 4);
    }
}
