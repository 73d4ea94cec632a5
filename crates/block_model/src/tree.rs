//! Page tree - the owning document of a block tree
//!
//! The tree is rooted at the body block (id `"root"`). Lookups walk the tree
//! in pre-order, so parent references are always current rather than cached.

use crate::{Block, BlockId, BlockIter, BlockModelError, BlockOptions, EditorState, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PageTree {
    root: Block,
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTree {
    /// Create a page with an empty body
    pub fn new() -> Self {
        Self {
            root: Block::new(BlockOptions::body()),
        }
    }

    /// Build a page from its top-level document node.
    ///
    /// The node must be the body root, and no descendant may be another body.
    pub fn from_options(options: BlockOptions) -> Result<Self> {
        if !options.is_root() {
            return Err(BlockModelError::MissingRoot);
        }

        let root = Block::new(options);
        if let Some((_, nested)) = root.iter().skip(1).find(|(_, block)| block.is_root()) {
            return Err(BlockModelError::DuplicateRoot(nested.id().to_string()));
        }

        tracing::debug!("Loaded page with {} blocks", root.iter().count());
        Ok(Self { root })
    }

    /// Parse a page from its saved JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let options: BlockOptions = serde_json::from_str(json)?;
        Self::from_options(options)
    }

    /// Serialize the page for saving
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn root(&self) -> &Block {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Block {
        &mut self.root
    }

    /// Pre-order iterator over every block with its depth
    pub fn iter(&self) -> BlockIter<'_> {
        self.root.iter()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Never true; the root always exists
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_block(id).is_some()
    }

    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.iter().map(|(_, block)| block).find(|block| block.id() == id)
    }

    pub fn find_block_mut(&mut self, id: &str) -> Option<&mut Block> {
        find_mut(&mut self.root, id)
    }

    /// Parent of `block`; blocks without a parent id resolve to the root
    pub fn parent_of(&self, block: &Block) -> Option<&Block> {
        block.get_parent_block(self)
    }

    /// Append a new block under `parent_id`
    pub fn add_child(&mut self, parent_id: &str, options: BlockOptions) -> Result<&mut Block> {
        let parent = self
            .find_block_mut(parent_id)
            .ok_or_else(|| BlockModelError::BlockNotFound(parent_id.to_string()))?;
        if !parent.can_have_children() {
            return Err(BlockModelError::CannotHaveChildren(parent_id.to_string()));
        }
        parent.add_child(options)
    }

    /// Remove a block and its subtree.
    ///
    /// Selection and hover pointing into the removed subtree are cleared.
    pub fn remove_block(&mut self, id: &str, state: &mut EditorState) -> Result<Block> {
        if self.root.id() == id {
            return Err(BlockModelError::RootRemoval);
        }

        let parent_id = self
            .find_block(id)
            .and_then(Block::parent_id)
            .cloned()
            .ok_or_else(|| BlockModelError::BlockNotFound(id.to_string()))?;
        let removed = self
            .find_block_mut(parent_id.as_str())
            .and_then(|parent| parent.remove_child(id))
            .ok_or_else(|| BlockModelError::BlockNotFound(id.to_string()))?;

        let in_removed = |target: Option<&BlockId>| {
            target.is_some_and(|target| removed.iter().any(|(_, block)| block.id() == target))
        };
        if in_removed(state.selected_block()) {
            state.clear_selection();
        }
        if in_removed(state.hovered_block()) {
            state.set_hovered(None);
        }

        tracing::debug!("Removed block {} from {}", id, parent_id);
        Ok(removed)
    }

    /// Ids of blocks changed since the last call, clearing their flags
    pub fn take_dirty_blocks(&mut self) -> Vec<BlockId> {
        let mut dirty = Vec::new();
        collect_dirty(&mut self.root, &mut dirty);
        dirty
    }
}

fn find_mut<'a>(block: &'a mut Block, id: &str) -> Option<&'a mut Block> {
    if block.id() == id {
        return Some(block);
    }
    block.children.iter_mut().find_map(|child| find_mut(child, id))
}

fn collect_dirty(block: &mut Block, dirty: &mut Vec<BlockId>) {
    if block.take_dirty() {
        dirty.push(block.id().clone());
    }
    for child in block.children.iter_mut() {
        collect_dirty(child, dirty);
    }
}
