//! Block Model - Layout tree for the page builder
//!
//! This crate provides the in-memory model of a page being edited:
//! - `Block`, one layout element with per-breakpoint style layers
//! - Breakpoint-aware style resolution (mobile/tablet fall back to base)
//! - `PageTree`, the owning document with lookup and tree edits by id
//! - `EditorState`, the explicit context holding the active breakpoint,
//!   selection and hover
//!
//! Mutations mark blocks dirty instead of notifying observers; hosts call
//! [`PageTree::take_dirty_blocks`] after an edit to learn what to re-render.

mod block_id;
mod block;
mod editor_state;
mod error;
mod options;
pub mod settings;
pub mod style;
mod tree;

pub use block_id::*;
pub use block::*;
pub use editor_state::*;
pub use error::*;
pub use options::*;
pub use settings::*;
pub use style::*;
pub use tree::*;
