use crate::block::{Block, BlockId};
use crate::outline::Outline;

/// A parsed document together with its section tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    blocks: Vec<Block<'a>>,
    outline: Outline,
}

impl<'a> Document<'a> {
    /// Pair blocks with an outline built from them.
    ///
    /// The outline must reference every block exactly once, in order.
    pub fn new(blocks: Vec<Block<'a>>, outline: Outline) -> Self {
        debug_assert_eq!(
            outline.block_order(),
            (0..blocks.len()).map(BlockId).collect::<Vec<_>>()
        );
        Self { blocks, outline }
    }

    /// A document without sections.
    pub fn flat(blocks: Vec<Block<'a>>) -> Self {
        let outline = Outline::flat(blocks.len());
        Self { blocks, outline }
    }

    pub fn blocks(&self) -> &[Block<'a>] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> &Block<'a> {
        &self.blocks[id.0]
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}
