use crate::block::BlockId;
use crate::outline::{Container, Node, Outline, SectionId};

/// The sections that can still receive content, innermost last.
///
/// Levels strictly increase from bottom to top. The stack borrows the outline
/// it is building, so opening and closing keep the tree and the stack in step.
pub struct SectionStack<'o> {
    outline: &'o mut Outline,
    open: Vec<(u8, SectionId)>,
}

impl<'o> SectionStack<'o> {
    pub fn new(outline: &'o mut Outline) -> Self {
        Self {
            outline,
            open: Vec::new(),
        }
    }

    /// Open a section at `level` with `heading` as its first child, nested in
    /// the current top. Anything at `level` or deeper must already be closed.
    pub fn open(&mut self, level: u8, heading: BlockId) -> SectionId {
        debug_assert!(
            self.open.last().is_none_or(|&(top, _)| top < level),
            "opening level {} over {:?}",
            level,
            self.open
        );

        let parent = self.top();
        let id = self.outline.new_section(level);
        self.outline.push_child(Container::Section(id), Node::Block(heading));
        self.outline.push_child(parent, Node::Section(id));
        self.open.push((level, id));
        log::trace!("open section {} at level {} in {:?}", id.0, level, parent);
        id
    }

    /// Close every open section whose level is `level` or deeper.
    pub fn close_at_least(&mut self, level: u8) {
        while let Some(&(top, id)) = self.open.last() {
            if top < level {
                break;
            }
            self.open.pop();
            self.outline.close(id);
            log::trace!("close section {} at level {}", id.0, top);
        }
    }

    pub fn close_all(&mut self) {
        self.close_at_least(0);
    }

    /// The container new content goes into.
    pub fn top(&self) -> Container {
        match self.open.last() {
            Some(&(_, id)) => Container::Section(id),
            None => Container::Root,
        }
    }

    pub fn append(&mut self, block: BlockId) {
        let top = self.top();
        self.outline.push_child(top, Node::Block(block));
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Levels of the open sections, outermost first.
    pub fn levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.open.iter().map(|&(level, _)| level)
    }
}
