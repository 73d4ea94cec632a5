//! Shared editor state: active breakpoint, selection and hover
//!
//! Blocks read this context for breakpoint-aware style access and write it
//! only through [`crate::Block::select_block`]. Writes are last-write-wins.

use crate::{BlockId, Breakpoint, EditorSettings};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    active_breakpoint: Breakpoint,
    selected: Option<BlockId>,
    hovered: Option<BlockId>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the configured default breakpoint with nothing selected
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self::with_breakpoint(settings.default_breakpoint)
    }

    pub fn with_breakpoint(breakpoint: Breakpoint) -> Self {
        Self {
            active_breakpoint: breakpoint,
            ..Self::default()
        }
    }

    pub fn active_breakpoint(&self) -> Breakpoint {
        self.active_breakpoint
    }

    pub fn set_active_breakpoint(&mut self, breakpoint: Breakpoint) {
        tracing::debug!("Active breakpoint {} -> {}", self.active_breakpoint, breakpoint);
        self.active_breakpoint = breakpoint;
    }

    pub fn selected_block(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, id: BlockId) {
        tracing::debug!("Selected block {}", id);
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn hovered_block(&self) -> Option<&BlockId> {
        self.hovered.as_ref()
    }

    pub fn set_hovered(&mut self, id: Option<BlockId>) {
        self.hovered = id;
    }
}
