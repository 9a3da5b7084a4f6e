use pulldown_cmark::{Event, Parser, Tag};

use crate::block::Block;
use crate::config::MarkdownConfig;

/// Parse markdown text into its top-level blocks.
///
/// YAML frontmatter is recognised by the engine itself. A metadata block that
/// opens the document is left out of the result; any later one is kept as
/// content, which the engine renders as nothing.
pub fn parse<'a>(markdown: &'a str, config: &MarkdownConfig) -> Vec<Block<'a>> {
    let parser = Parser::new_ext(markdown, config.options());
    let mut blocks = Vec::new();
    let mut state = GroupState::default();

    for event in parser {
        process_event(event, &mut state, &mut blocks);
    }

    // Only reachable if the engine leaves a tag unclosed
    if !state.events.is_empty() {
        log::warn!(
            "unterminated top-level block ({} events, depth {})",
            state.events.len(),
            state.depth
        );
        blocks.push(Block::from_events(std::mem::take(&mut state.events)));
    }

    log::debug!(
        "parsed {} top-level blocks ({} headings)",
        blocks.len(),
        blocks.iter().filter(|b| b.heading_level().is_some()).count()
    );

    blocks
}

#[derive(Default)]
struct GroupState<'a> {
    // Events of the block currently being collected
    events: Vec<Event<'a>>,
    // Open tag count within that block
    depth: usize,
    // Whether any block has been completed yet
    started: bool,
}

fn process_event<'a>(event: Event<'a>, state: &mut GroupState<'a>, blocks: &mut Vec<Block<'a>>) {
    match event {
        Event::Start(_) => {
            state.depth += 1;
            state.events.push(event);
        }
        Event::End(_) => {
            state.depth = state.depth.saturating_sub(1);
            state.events.push(event);
            if state.depth == 0 {
                let events = std::mem::take(&mut state.events);
                let frontmatter = !state.started
                    && matches!(events.first(), Some(Event::Start(Tag::MetadataBlock(_))));
                state.started = true;
                if frontmatter {
                    log::trace!("skipping frontmatter ({} events)", events.len());
                } else {
                    blocks.push(Block::from_events(events));
                }
            }
        }

        // Leaf events outside any container (thematic breaks) are blocks of
        // their own
        _ if state.depth == 0 => {
            state.started = true;
            blocks.push(Block::from_events(vec![event]));
        }

        _ => state.events.push(event),
    }
}
