use pulldown_cmark::{Event, HeadingLevel, Tag};

/// A top-level block as produced by the Markdown engine.
///
/// The events are kept exactly as the engine emitted them, start and end tags
/// included, so the block can be handed back to the engine's renderer untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    Heading { level: u8, events: Vec<Event<'a>> },
    Content { events: Vec<Event<'a>> },
}

impl<'a> Block<'a> {
    /// Classify a complete top-level event group.
    pub fn from_events(events: Vec<Event<'a>>) -> Self {
        match events.first() {
            Some(Event::Start(Tag::Heading { level, .. })) => Block::Heading {
                level: heading_level_to_u8(*level),
                events,
            },
            _ => Block::Content { events },
        }
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            Block::Content { .. } => None,
        }
    }

    pub fn events(&self) -> &[Event<'a>] {
        match self {
            Block::Heading { events, .. } | Block::Content { events } => events,
        }
    }
}

pub(crate) fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Read-only view over a document's top-level blocks.
///
/// This is all the sectionizer gets to see: block positions and, for headings,
/// their level. Block contents stay opaque.
#[derive(Debug, Clone, Copy)]
pub struct BlockSequence<'s, 'a> {
    blocks: &'s [Block<'a>],
}

impl<'s, 'a> BlockSequence<'s, 'a> {
    pub fn new(blocks: &'s [Block<'a>]) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn heading_level(&self, id: BlockId) -> Option<u8> {
        self.blocks.get(id.0).and_then(Block::heading_level)
    }

    /// Blocks in document order with their heading level, if any.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, Option<u8>)> + 's {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (BlockId(i), block.heading_level()))
    }
}

/// Index of a block within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{CowStr, TagEnd};

    fn heading(level: HeadingLevel) -> Vec<Event<'static>> {
        vec![
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
            }),
            Event::Text(CowStr::Borrowed("Title")),
            Event::End(TagEnd::Heading(level)),
        ]
    }

    #[test]
    fn classifies_heading() {
        let block = Block::from_events(heading(HeadingLevel::H3));
        assert_eq!(block.heading_level(), Some(3));
        assert_eq!(block.events().len(), 3);
    }

    #[test]
    fn classifies_content() {
        let block = Block::from_events(vec![Event::Rule]);
        assert_eq!(block.heading_level(), None);
        assert_eq!(block.events(), &[Event::Rule]);
    }

    #[test]
    fn view_reports_levels_in_order() {
        let blocks = vec![
            Block::from_events(heading(HeadingLevel::H1)),
            Block::from_events(vec![Event::Rule]),
            Block::from_events(heading(HeadingLevel::H6)),
        ];
        let view = BlockSequence::new(&blocks);

        assert_eq!(view.len(), 3);
        let levels: Vec<_> = view.iter().map(|(_, level)| level).collect();
        assert_eq!(levels, vec![Some(1), None, Some(6)]);
        assert_eq!(view.heading_level(BlockId(2)), Some(6));
        assert_eq!(view.heading_level(BlockId(9)), None);
    }
}
