use crate::block::BlockId;

/// Index of a section within an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub(crate) usize);

/// A child of the root or of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Block(BlockId),
    Section(SectionId),
}

/// Something children can be appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Root,
    Section(SectionId),
}

/// A synthetic container owned by the heading that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub children: Vec<Node>,
    pub closed: bool,
}

impl Section {
    /// The heading that opened this section.
    pub fn heading(&self) -> Option<BlockId> {
        match self.children.first() {
            Some(Node::Block(id)) => Some(*id),
            _ => None,
        }
    }
}

/// The nested section tree of a document.
///
/// Sections live in an arena and refer to each other by index, so every node
/// has exactly one parent and nothing is reference counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    root: Vec<Node>,
    sections: Vec<Section>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// An outline with every block directly under the root.
    pub fn flat(block_count: usize) -> Self {
        Self {
            root: (0..block_count).map(|i| Node::Block(BlockId(i))).collect(),
            sections: Vec::new(),
        }
    }

    pub fn root(&self) -> &[Node] {
        &self.root
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    /// All sections in the order they were opened, which is document order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, section)| (SectionId(i), section))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn children(&self, container: Container) -> &[Node] {
        match container {
            Container::Root => &self.root,
            Container::Section(id) => &self.sections[id.0].children,
        }
    }

    pub(crate) fn new_section(&mut self, level: u8) -> SectionId {
        self.sections.push(Section {
            level,
            children: Vec::new(),
            closed: false,
        });
        SectionId(self.sections.len() - 1)
    }

    pub(crate) fn push_child(&mut self, container: Container, node: Node) {
        match container {
            Container::Root => self.root.push(node),
            Container::Section(id) => {
                let section = &mut self.sections[id.0];
                debug_assert!(!section.closed, "append to closed section {:?}", id);
                section.children.push(node);
            }
        }
    }

    pub(crate) fn close(&mut self, id: SectionId) {
        self.sections[id.0].closed = true;
    }

    /// Whether every section has been closed.
    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(|s| s.closed)
    }

    /// Blocks in the order a depth-first walk of the tree visits them.
    pub fn block_order(&self) -> Vec<BlockId> {
        let mut out = Vec::new();
        self.collect_blocks(&self.root, &mut out);
        out
    }

    fn collect_blocks(&self, nodes: &[Node], out: &mut Vec<BlockId>) {
        for node in nodes {
            match node {
                Node::Block(id) => out.push(*id),
                Node::Section(id) => self.collect_blocks(&self.sections[id.0].children, out),
            }
        }
    }

    /// Find the container a node was appended to.
    pub fn parent_of(&self, node: Node) -> Option<Container> {
        if self.root.contains(&node) {
            return Some(Container::Root);
        }
        self.sections()
            .find(|(_, s)| s.children.contains(&node))
            .map(|(id, _)| Container::Section(id))
    }
}
