//! OPML outline parsing and conversion.
//!
//! An OPML source is parsed once into a materialized tree (an `indextree`
//! arena), so the two-pass insertion planner downstream re-traverses a
//! buffered structure rather than re-invoking any parser I/O. Element and
//! attribute names are matched case-insensitively, mirroring common OPML
//! producers.

mod convert;

pub use convert::outline_to_markdown;

use indextree::{Arena, NodeId};

use crate::error::TransformError;
use crate::toc::{TocOptions, insert_toc};

const OUTLINE: &str = "outline";
const TEXT: &str = "text";
const NOTE: &str = "_note";

/// One entry in the outline tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineItem {
    /// Heading or list-item text (the `text` attribute)
    pub text: Option<String>,
    /// Free-text body lines (the `_note` attribute)
    pub note: Option<String>,
}

/// A materialized OPML outline.
///
/// The root node is synthetic; its children are the document's top-level
/// `<outline>` elements at depth 1.
#[derive(Debug)]
pub struct Outline {
    arena: Arena<OutlineItem>,
    root: NodeId,
}

impl Outline {
    pub fn item(&self, id: NodeId) -> &OutlineItem {
        self.arena[id].get()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    pub fn top_level(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children(&self.arena).next().is_none()
    }
}

/// Parse OPML text into a materialized outline tree.
///
/// Non-`outline` elements (`opml`, `head`, `body`, ...) are transparent:
/// they contribute no node and no depth, exactly as a SAX handler reacting
/// only to `outline` elements would see the document.
pub fn parse_opml(xml: &str) -> Result<Outline, TransformError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| TransformError::MalformedSource {
        detail: e.to_string(),
    })?;

    let mut arena = Arena::new();
    let root = arena.new_node(OutlineItem::default());
    collect(doc.root_element(), root, &mut arena);

    let outline = Outline { arena, root };
    if outline.is_empty() {
        log::warn!("OPML source contains no outline elements");
    }
    Ok(outline)
}

fn collect(element: roxmltree::Node<'_, '_>, parent: NodeId, arena: &mut Arena<OutlineItem>) {
    for child in element.children().filter(|c| c.is_element()) {
        if child.tag_name().name().eq_ignore_ascii_case(OUTLINE) {
            let item = OutlineItem {
                text: attribute(child, TEXT),
                note: attribute(child, NOTE),
            };
            let node = arena.new_node(item);
            parent.append(node, arena);
            collect(child, node, arena);
        } else {
            collect(child, parent, arena);
        }
    }
}

fn attribute(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attributes()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .map(|a| a.value().to_string())
}

/// Convert an OPML document to markdown and splice in a table of contents.
///
/// This is the whole outline pipeline: parse, convert depth-to-heading
/// (bounded by `opts.max_level`), then run the two-pass TOC insertion over
/// the converted interim document.
pub fn opml_to_document(xml: &str, opts: &TocOptions) -> Result<String, TransformError> {
    let outline = parse_opml(xml)?;
    let interim = outline_to_markdown(&outline, opts.max_level);
    Ok(insert_toc(&interim, opts))
}
