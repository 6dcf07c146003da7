//! The heading-to-nested-list state machine.
//!
//! [`NestingEngine`] consumes an ordered sequence of heading entries and
//! produces structural [`ListEvent`]s. It owns the "currently open list
//! levels" state and the level-jump closing logic; textual formatting is
//! left entirely to the renderers.

use crate::parser::{Heading, heading_id};

/// Anchor ids that never receive a TOC entry of their own.
///
/// A heading named "Table of Contents" (or just "Contents") marks where an
/// existing TOC lives; listing it inside the generated TOC would be
/// self-referential.
pub const RESERVED_IDS: [&str; 2] = ["tableofcontents", "contents"];

/// Headings are limited to six levels by convention.
const MAX_HEADING_LEVEL: usize = 6;

/// A structural event in the generated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A new nesting level begins.
    OpenList,
    /// The deepest open nesting level ends.
    CloseList,
    /// A list item opens. `link` is the anchor reference (`#` + id).
    OpenItem {
        level: usize,
        text: String,
        link: String,
    },
    /// The most recently opened item ends.
    CloseItem,
}

/// One heading as seen by the engine: level, anchor id, display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub id: String,
    pub text: String,
}

impl TocEntry {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let id = heading_id(&text);
        Self { level, id, text }
    }
}

impl From<&Heading> for TocEntry {
    fn from(h: &Heading) -> Self {
        Self {
            level: h.level,
            id: h.id(),
            text: h.text.clone(),
        }
    }
}

/// Whether an entry produces a TOC item for the given level window.
///
/// Eligible means: level within `[min_level, max_level]`, a non-empty anchor
/// id, and an id that is not one of the reserved "contents" anchors.
/// Out-of-range levels are tolerated, not rejected.
pub fn eligible(entry: &TocEntry, min_level: usize, max_level: usize) -> bool {
    entry.level >= min_level
        && entry.level <= max_level
        && entry.level <= MAX_HEADING_LEVEL
        && !entry.id.is_empty()
        && !RESERVED_IDS.contains(&entry.id.as_str())
}

/// Single-pass state machine turning eligible headings into list events.
///
/// Constructed fresh for every `process` call; the open-level state never
/// leaks across runs. The produced event stream is always balanced: every
/// `OpenList` has a matching `CloseList` and every `OpenItem` a matching
/// `CloseItem`, regardless of how the input levels jump.
#[derive(Debug)]
pub struct NestingEngine {
    min_level: usize,
    max_level: usize,
    first_level: usize,
    last_level: usize,
    list_open: [bool; MAX_HEADING_LEVEL + 1],
    item_open: [bool; MAX_HEADING_LEVEL + 1],
    events: Vec<ListEvent>,
}

impl NestingEngine {
    pub fn new(min_level: usize, max_level: usize) -> Self {
        Self {
            min_level,
            max_level,
            first_level: 0,
            last_level: 1,
            list_open: [false; MAX_HEADING_LEVEL + 1],
            item_open: [false; MAX_HEADING_LEVEL + 1],
            events: Vec::new(),
        }
    }

    /// Consume the entries in document order and return the event sequence.
    ///
    /// If no entry is eligible the result is empty: no list wrapper, no
    /// events.
    pub fn process(mut self, entries: &[TocEntry]) -> Vec<ListEvent> {
        for entry in entries {
            self.push(entry);
        }
        self.flush();
        self.events
    }

    fn push(&mut self, entry: &TocEntry) {
        if !eligible(entry, self.min_level, self.max_level) {
            return;
        }
        let level = entry.level;

        if self.first_level == 0 {
            self.first_level = level;
            self.last_level = level;
        }

        if level > self.last_level {
            // A new nesting level begins; the previous item stays open as
            // the parent of the deeper list.
        } else if level < self.last_level {
            // An upward jump closes every open level in between at once,
            // deepest first.
            for l in ((level + 1)..=self.last_level).rev() {
                if self.list_open[l] {
                    self.close_item(l);
                    self.events.push(ListEvent::CloseList);
                    self.list_open[l] = false;
                }
            }
        } else {
            // Sibling heading: the previous item at this level ends.
            self.close_item(level);
        }

        // At most one open item per level at any time.
        self.close_item(level);

        if !self.list_open[level] {
            self.events.push(ListEvent::OpenList);
            self.list_open[level] = true;
        }
        self.events.push(ListEvent::OpenItem {
            level,
            text: entry.text.clone(),
            link: format!("#{}", entry.id),
        });
        self.item_open[level] = true;
        self.last_level = level;
    }

    fn close_item(&mut self, level: usize) {
        if self.item_open[level] {
            self.events.push(ListEvent::CloseItem);
            self.item_open[level] = false;
        }
    }

    /// End-of-stream: close every still-open item and list, deepest first.
    fn flush(&mut self) {
        for l in (1..=MAX_HEADING_LEVEL).rev() {
            if self.list_open[l] {
                self.close_item(l);
                self.events.push(ListEvent::CloseList);
                self.list_open[l] = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(levels: &[usize]) -> Vec<TocEntry> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| TocEntry::new(level, format!("Heading {i}")))
            .collect()
    }

    fn count(events: &[ListEvent], wanted: fn(&ListEvent) -> bool) -> usize {
        events.iter().filter(|e| wanted(e)).count()
    }

    fn assert_balanced(events: &[ListEvent]) {
        assert_eq!(
            count(events, |e| matches!(e, ListEvent::OpenList)),
            count(events, |e| matches!(e, ListEvent::CloseList)),
            "unbalanced lists in {events:?}"
        );
        assert_eq!(
            count(events, |e| matches!(e, ListEvent::OpenItem { .. })),
            count(events, |e| matches!(e, ListEvent::CloseItem)),
            "unbalanced items in {events:?}"
        );
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let events = NestingEngine::new(1, 6).process(&[]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_eligible_entry_emits_nothing() {
        let input = vec![
            TocEntry::new(2, "Table of Contents"),
            TocEntry::new(2, "Contents"),
            TocEntry::new(2, "---"),
            TocEntry::new(5, "Too Deep"),
        ];
        let events = NestingEngine::new(1, 4).process(&input);
        assert!(events.is_empty());
    }

    #[test]
    fn test_single_heading() {
        let events = NestingEngine::new(1, 6).process(&entries(&[2]));
        assert_eq!(
            events,
            vec![
                ListEvent::OpenList,
                ListEvent::OpenItem {
                    level: 2,
                    text: "Heading 0".to_string(),
                    link: "#heading0".to_string(),
                },
                ListEvent::CloseItem,
                ListEvent::CloseList,
            ]
        );
    }

    #[test]
    fn test_siblings_share_one_list() {
        let events = NestingEngine::new(1, 6).process(&entries(&[2, 2, 2]));
        assert_eq!(count(&events, |e| matches!(e, ListEvent::OpenList)), 1);
        assert_eq!(count(&events, |e| matches!(e, ListEvent::OpenItem { .. })), 3);
        assert_balanced(&events);
    }

    #[test]
    fn test_multi_level_jump_closes_all_levels_at_once() {
        // Levels [2, 4, 3, 1]: the jump from 3 down to 1 must close both
        // still-open levels in one step, not just one.
        let events = NestingEngine::new(1, 4).process(&entries(&[2, 4, 3, 1]));
        assert_balanced(&events);

        // Locate the final jump: events between opening item at level 3 and
        // opening item at level 1.
        let open3 = events
            .iter()
            .position(|e| matches!(e, ListEvent::OpenItem { level: 3, .. }))
            .unwrap();
        let open1 = events
            .iter()
            .position(|e| matches!(e, ListEvent::OpenItem { level: 1, .. }))
            .unwrap();
        let closes = events[open3 + 1..open1]
            .iter()
            .filter(|e| matches!(e, ListEvent::CloseList))
            .count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn test_level_filter_skips_out_of_window_headings() {
        let input = vec![
            TocEntry::new(1, "Skipped Top"),
            TocEntry::new(2, "Kept"),
            TocEntry::new(5, "Skipped Deep"),
            TocEntry::new(3, "Also Kept"),
        ];
        let events = NestingEngine::new(2, 4).process(&input);
        let items: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ListEvent::OpenItem { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(items, vec!["Kept", "Also Kept"]);
        assert_balanced(&events);
    }

    #[test]
    fn test_reserved_and_empty_ids_never_open_items() {
        let input = vec![
            TocEntry::new(2, "Contents"),
            TocEntry::new(2, "Real Section"),
            TocEntry::new(3, "===="),
        ];
        let events = NestingEngine::new(1, 6).process(&input);
        assert_eq!(count(&events, |e| matches!(e, ListEvent::OpenItem { .. })), 1);
    }

    #[test]
    fn test_deterministic() {
        let input = entries(&[2, 3, 3, 4, 2, 1, 6, 5]);
        let a = NestingEngine::new(1, 6).process(&input);
        let b = NestingEngine::new(1, 6).process(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_balance_holds_for_awkward_sequences() {
        for levels in [
            &[1, 2, 3, 4, 5, 6][..],
            &[6, 5, 4, 3, 2, 1][..],
            &[3, 1, 3, 1][..],
            &[2, 6, 2, 6][..],
            &[4, 4, 4][..],
            &[2, 4, 3, 1][..],
        ] {
            let events = NestingEngine::new(1, 6).process(&entries(levels));
            assert_balanced(&events);
        }
    }

    #[test]
    fn test_reopened_level_gets_a_fresh_list() {
        // 2 -> 3 -> 2 -> 3: the second level-3 list must be reopened.
        let events = NestingEngine::new(1, 6).process(&entries(&[2, 3, 2, 3]));
        assert_eq!(count(&events, |e| matches!(e, ListEvent::OpenList)), 3);
        assert_balanced(&events);
    }
}
