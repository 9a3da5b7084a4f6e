use crate::block::BlockSequence;
use crate::config::RootLevel;
use crate::outline::Outline;
use crate::stack::SectionStack;

/// Rewrites a flat block sequence into nested sections.
///
/// Every heading deeper than the root level opens a section holding itself and
/// everything after it, up to the next heading of the same or a shallower level.
/// Nesting follows the stack of open sections, not the numeric gap between
/// levels: an `h4` straight after an `h2` nests directly inside the `h2`
/// section, with no empty `h3` in between.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sectionizer {
    root_level: RootLevel,
}

impl Sectionizer {
    pub fn new(root_level: RootLevel) -> Self {
        Self { root_level }
    }

    pub fn root_level(&self) -> RootLevel {
        self.root_level
    }

    pub fn run(&self, blocks: BlockSequence<'_, '_>) -> Outline {
        let mut outline = Outline::new();
        let mut stack = SectionStack::new(&mut outline);

        for (id, level) in blocks.iter() {
            match level {
                Some(level) => {
                    // A heading never sits inside or beside a section it ends
                    stack.close_at_least(level);
                    if self.root_level.wraps(level) {
                        stack.open(level, id);
                    } else {
                        stack.append(id);
                    }
                }
                None => stack.append(id),
            }
        }

        // End of document acts as a heading shallower than any real one
        stack.close_all();
        debug_assert!(stack.is_empty());

        log::debug!(
            "sectionized {} blocks into {} sections (root level {})",
            blocks.len(),
            outline.section_count(),
            self.root_level
        );
        outline
    }
}
