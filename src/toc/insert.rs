//! Two-pass TOC insertion.
//!
//! The insertion point (the first eligible heading) is not knowable until
//! the whole document has been scanned, so insertion runs in two passes over
//! the same parsed, replayable document: pass 1 finds the insertion point
//! and builds the TOC text in memory, pass 2 re-emits every line once and
//! splices the TOC block in front of the insertion point. Only the TOC text
//! is buffered between passes, never a transformed copy of the body.

use std::sync::OnceLock;

use regex::Regex;

use super::engine::{NestingEngine, RESERVED_IDS, TocEntry, eligible};
use super::render::{FlatListRenderer, ListRender};
use super::TocOptions;
use crate::parser::parse_markdown;

/// A previously generated TOC entry line: an indented `* [text](#anchor)`
/// bullet. The bracket match is greedy so heading text containing `]`
/// (say `Array[0] notes`) still matches.
fn toc_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*\*\s+\[.*\]\(#[^)]*\)\s*$").unwrap())
}

/// Splice a generated table of contents into a markdown document.
///
/// The TOC block lands immediately before the first eligible heading.
/// Previously generated TOC bullets are suppressed in two places: bullet
/// lines inside the section under a reserved "contents" heading, and a
/// block directly above the insertion point whose lines exactly equal the
/// freshly generated TOC. That makes the operation idempotent without ever
/// touching a user's own link list. A document without any eligible heading
/// is returned unchanged (single-pass fallback).
pub fn insert_toc(content: &str, opts: &TocOptions) -> String {
    let doc = parse_markdown(content);
    let entries: Vec<TocEntry> = doc.headings.iter().map(TocEntry::from).collect();

    // Pass 1: locate the insertion point and build the TOC text.
    let Some(first_eligible) = entries
        .iter()
        .position(|e| eligible(e, opts.min_level, opts.max_level))
    else {
        log::info!("no eligible heading found, emitting document unchanged");
        return content.to_string();
    };
    let events = NestingEngine::new(opts.min_level, opts.max_level).process(&entries);
    let mut renderer = FlatListRenderer::new();
    for event in &events {
        renderer.event(event);
    }
    let toc_text = renderer.finish();

    let lines: Vec<&str> = content.lines().collect();
    let toc_lines: Vec<&str> = toc_text.lines().collect();
    let insert_line = doc.line_index(doc.headings[first_eligible].offset);
    let suppressed = suppressed_lines(&doc, &lines, &entries, insert_line, &toc_lines);

    // Pass 2: re-emit the body, splicing the TOC before the insertion point
    // and dropping stale TOC bullets.
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + events.len());
    for (i, line) in lines.iter().enumerate() {
        if i == insert_line {
            if out.last().is_some_and(|l| !l.is_empty()) {
                out.push("");
            }
            out.extend(toc_lines.iter().copied());
            out.push("");
        }
        if suppressed[i] {
            continue;
        }
        // Collapse the blank a dropped bullet block leaves behind.
        if line.is_empty()
            && i > 0
            && suppressed[i - 1]
            && out.last().is_none_or(|l| l.is_empty())
        {
            continue;
        }
        out.push(line);
    }

    let mut result = out.join("\n");
    result.push('\n');
    result
}

/// Mark the stale TOC lines that pass 2 must not re-emit.
///
/// Two regions are considered: every bullet-link line inside a section
/// headed by a reserved-id heading, and a line block sitting directly above
/// the insertion point (the spot where a previous run spliced its TOC). The
/// second region is suppressed only when its lines are exactly the freshly
/// generated TOC lines; any other bullet list there is user content and is
/// re-emitted untouched.
fn suppressed_lines(
    doc: &crate::parser::Document,
    lines: &[&str],
    entries: &[TocEntry],
    insert_line: usize,
    toc_lines: &[&str],
) -> Vec<bool> {
    let mut suppressed = vec![false; lines.len()];
    let heading_lines: Vec<usize> = doc
        .headings
        .iter()
        .map(|h| doc.line_index(h.offset))
        .collect();

    for (idx, entry) in entries.iter().enumerate() {
        if !RESERVED_IDS.contains(&entry.id.as_str()) {
            continue;
        }
        let start = heading_lines[idx] + 1;
        let end = heading_lines
            .get(idx + 1)
            .copied()
            .unwrap_or(lines.len());
        for i in start..end.min(lines.len()) {
            if toc_line_pattern().is_match(lines[i]) {
                suppressed[i] = true;
            }
        }
    }

    let mut end = insert_line;
    while end > 0 && lines[end - 1].trim().is_empty() {
        end -= 1;
    }
    if !toc_lines.is_empty()
        && end >= toc_lines.len()
        && lines[end - toc_lines.len()..end] == *toc_lines
    {
        for flag in &mut suppressed[end - toc_lines.len()..end] {
            *flag = true;
        }
    }

    suppressed
}
