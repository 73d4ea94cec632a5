//! Block - one layout element in the page tree
//!
//! A block owns its children and keeps five style layers:
//! - `base`, `mobile`, `tablet`: user styles, resolved per breakpoint
//! - `raw`: user styles passed through untouched
//! - `editor`: editor-only affordances, never saved
//!
//! Style writes go through [`Block::set_style`], which routes to the layer of
//! the active breakpoint. Reads fall back from mobile or tablet to base, never
//! from one device layer to the other.

use crate::{
    get_number_from_px, AttributeMap, BlockId, BlockModelError, BlockOptions, Breakpoint,
    ComponentData, EditorState, PageTree, StyleMap, StyleValue, StylesSnapshot,
    DEFAULT_FONT_FAMILY, ROOT_ID,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `original_element` value of the page root
pub const ROOT_ELEMENT: &str = "body";

const TEXT_ELEMENTS: &[&str] = &[
    "span", "h1", "p", "b", "h2", "h3", "h4", "h5", "h6", "a", "label",
];
const CONTAINER_ELEMENTS: &[&str] = &["section", "div"];
const FONT_FAMILY: &str = "fontFamily";

/// Icon shown for a block in the layers panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIcon {
    Hash,
    Type,
    Image,
    Square,
    Link,
}

impl BlockIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockIcon::Hash => "hash",
            BlockIcon::Type => "type",
            BlockIcon::Image => "image",
            BlockIcon::Square => "square",
            BlockIcon::Link => "link",
        }
    }
}

impl std::fmt::Display for BlockIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for keyboard nudging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: BlockId,
    element: String,
    original_element: Option<String>,
    parent_id: Option<BlockId>,
    pub(crate) children: Vec<Block>,
    block_name: Option<String>,
    base_styles: StyleMap,
    raw_styles: StyleMap,
    mobile_styles: StyleMap,
    tablet_styles: StyleMap,
    editor_styles: StyleMap,
    attributes: AttributeMap,
    classes: Vec<String>,
    draggable: Option<bool>,
    resizable: Option<bool>,
    inner_text: Option<String>,
    component_data: ComponentData,
    is_component: Option<bool>,
    dirty: bool,
}

impl Block {
    /// Build a block and its subtree from a document-node description.
    ///
    /// Children are stamped with this block's id before they are built.
    /// Button and root defaults are applied last and override the input.
    pub fn new(options: BlockOptions) -> Self {
        let BlockOptions {
            element,
            block_id,
            block_name,
            styles,
            base_styles,
            raw_styles,
            mobile_styles,
            tablet_styles,
            editor_styles,
            attributes,
            classes,
            children,
            draggable,
            resizable,
            inner_text,
            component_data: _,
            is_component,
            original_element,
            parent_block_id,
            computed_styles: _,
        } = options;

        let is_root = original_element.as_deref() == Some(ROOT_ELEMENT);
        let id = if is_root {
            BlockId::root()
        } else {
            block_id
                .filter(|id| !id.is_empty())
                .map(BlockId::from)
                .unwrap_or_else(BlockId::generate)
        };

        let children = children
            .unwrap_or_default()
            .into_iter()
            .map(|mut child| {
                child.parent_block_id = Some(id.to_string());
                Block::new(child)
            })
            .collect();

        let mut attributes = attributes.unwrap_or_default();
        attributes.remove("style");

        let mut block = Self {
            id,
            element,
            original_element,
            parent_id: parent_block_id.filter(|id| !id.is_empty()).map(BlockId::from),
            children,
            component_data: ComponentData {
                name: block_name.clone(),
                is_dynamic: false,
            },
            block_name,
            base_styles: styles.or(base_styles).unwrap_or_default(),
            raw_styles: raw_styles.unwrap_or_default(),
            mobile_styles: mobile_styles.unwrap_or_default(),
            tablet_styles: tablet_styles.unwrap_or_default(),
            editor_styles: editor_styles.unwrap_or_default(),
            attributes,
            classes: classes.unwrap_or_default(),
            draggable,
            resizable,
            inner_text,
            is_component,
            dirty: false,
        };

        if block.is_button() {
            block.editor_styles.insert("display", "inline-block");
        }

        if block.is_root() {
            block.id = BlockId::root();
            block.editor_styles = [("width", "inherit"), ("overflow-x", "hidden")]
                .into_iter()
                .collect();
            block.draggable = Some(false);
        }

        block
    }

    /// Describe this block and its subtree for saving.
    ///
    /// Editor-only styles are left out; they are re-derived on load.
    pub fn to_options(&self) -> BlockOptions {
        BlockOptions {
            element: self.element.clone(),
            block_id: Some(self.id.to_string()),
            block_name: self.block_name.clone(),
            styles: None,
            base_styles: Some(self.base_styles.clone()),
            raw_styles: Some(self.raw_styles.clone()),
            mobile_styles: Some(self.mobile_styles.clone()),
            tablet_styles: Some(self.tablet_styles.clone()),
            editor_styles: None,
            attributes: Some(self.attributes.clone()),
            classes: Some(self.classes.clone()),
            children: Some(self.children.iter().map(Block::to_options).collect()),
            draggable: self.draggable,
            resizable: self.resizable,
            inner_text: self.inner_text.clone(),
            component_data: Some(self.component_data.clone()),
            is_component: self.is_component,
            original_element: self.original_element.clone(),
            parent_block_id: self.parent_id.as_ref().map(BlockId::to_string),
            computed_styles: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn original_element(&self) -> Option<&str> {
        self.original_element.as_deref()
    }

    pub fn parent_id(&self) -> Option<&BlockId> {
        self.parent_id.as_ref()
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    pub fn block_name(&self) -> Option<&str> {
        self.block_name.as_deref()
    }

    pub fn base_styles(&self) -> &StyleMap {
        &self.base_styles
    }

    pub fn mobile_styles(&self) -> &StyleMap {
        &self.mobile_styles
    }

    pub fn tablet_styles(&self) -> &StyleMap {
        &self.tablet_styles
    }

    pub fn raw_styles(&self) -> &StyleMap {
        &self.raw_styles
    }

    pub fn raw_styles_mut(&mut self) -> &mut StyleMap {
        self.dirty = true;
        &mut self.raw_styles
    }

    pub fn editor_styles(&self) -> &StyleMap {
        &self.editor_styles
    }

    pub fn editor_styles_mut(&mut self) -> &mut StyleMap {
        self.dirty = true;
        &mut self.editor_styles
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn draggable(&self) -> Option<bool> {
        self.draggable
    }

    pub fn resizable(&self) -> Option<bool> {
        self.resizable
    }

    pub fn inner_text(&self) -> Option<&str> {
        self.inner_text.as_deref()
    }

    pub fn set_inner_text(&mut self, text: Option<String>) {
        self.inner_text = text;
        self.dirty = true;
    }

    pub fn component_data(&self) -> &ComponentData {
        &self.component_data
    }

    pub fn is_component(&self) -> bool {
        self.is_component.unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    pub fn is_image(&self) -> bool {
        self.element == "img"
    }

    pub fn is_button(&self) -> bool {
        self.element == "button"
    }

    pub fn is_link(&self) -> bool {
        self.element == "a"
    }

    pub fn is_text(&self) -> bool {
        TEXT_ELEMENTS.contains(&self.element.as_str())
    }

    pub fn is_container(&self) -> bool {
        CONTAINER_ELEMENTS.contains(&self.element.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.original_element.as_deref() == Some(ROOT_ELEMENT)
    }

    pub fn is_div(&self) -> bool {
        self.element == "div"
    }

    pub fn can_have_children(&self) -> bool {
        self.is_container() || self.is_root() || self.is_div()
    }

    /// Tag to render; buttons render as styled divs
    pub fn get_tag(&self) -> &str {
        if self.is_button() {
            "div"
        } else {
            &self.element
        }
    }

    pub fn get_icon(&self) -> BlockIcon {
        if self.is_root() {
            BlockIcon::Hash
        } else if self.is_text() {
            BlockIcon::Type
        } else if self.is_image() {
            BlockIcon::Image
        } else if self.is_container() {
            BlockIcon::Square
        } else if self.is_link() {
            BlockIcon::Link
        } else {
            BlockIcon::Square
        }
    }

    // -------------------------------------------------------------------------
    // Styles
    // -------------------------------------------------------------------------

    /// Write a style into the layer of the active breakpoint.
    ///
    /// `None` or an empty string clears `name` from the base, mobile and
    /// tablet layers at once.
    pub fn set_style(&mut self, state: &EditorState, name: &str, value: Option<StyleValue>) {
        self.set_style_at(state.active_breakpoint(), name, value);
    }

    /// Write a style into the layer of `breakpoint`
    pub fn set_style_at(&mut self, breakpoint: Breakpoint, name: &str, value: Option<StyleValue>) {
        self.dirty = true;
        let value = match value {
            Some(value) if !value.is_unset() => value,
            _ => {
                self.clear_style(name);
                return;
            }
        };

        tracing::trace!("Block {} {} {}: {}", self.id, breakpoint, name, value);
        let layer = match breakpoint {
            Breakpoint::Mobile => &mut self.mobile_styles,
            Breakpoint::Tablet => &mut self.tablet_styles,
            Breakpoint::Base => &mut self.base_styles,
        };
        layer.insert(name, value);
    }

    /// Remove `name` from the base, mobile and tablet layers
    pub fn clear_style(&mut self, name: &str) {
        tracing::trace!("Block {} clear {}", self.id, name);
        self.base_styles.remove(name);
        self.mobile_styles.remove(name);
        self.tablet_styles.remove(name);
        self.dirty = true;
    }

    /// Resolve a style for the active breakpoint
    pub fn get_style(&self, state: &EditorState, name: &str) -> Option<&StyleValue> {
        self.get_style_at(state.active_breakpoint(), name)
    }

    /// Resolve a style for `breakpoint`.
    ///
    /// Mobile and tablet values that are empty, zero or NaN fall back to the
    /// base layer.
    pub fn get_style_at(&self, breakpoint: Breakpoint, name: &str) -> Option<&StyleValue> {
        let layer = match breakpoint {
            Breakpoint::Mobile => &self.mobile_styles,
            Breakpoint::Tablet => &self.tablet_styles,
            Breakpoint::Base => return self.base_styles.get(name),
        };
        layer
            .get(name)
            .filter(|value| value.is_truthy())
            .or_else(|| self.base_styles.get(name))
    }

    pub fn get_computed_style(&self, state: &EditorState, name: &str) -> Option<&StyleValue> {
        self.get_style(state, name)
    }

    pub fn set_computed_style(
        &mut self,
        state: &EditorState,
        name: &str,
        value: Option<StyleValue>,
    ) {
        self.set_style(state, name, value);
    }

    /// Read view of the breakpoint-resolved styles
    pub fn computed_styles(&self, state: &EditorState) -> ComputedStyles<'_> {
        ComputedStyles {
            block: self,
            breakpoint: state.active_breakpoint(),
        }
    }

    /// Write view of the breakpoint-resolved styles
    pub fn computed_styles_mut(&mut self, state: &EditorState) -> ComputedStylesMut<'_> {
        ComputedStylesMut {
            breakpoint: state.active_breakpoint(),
            block: self,
        }
    }

    /// Copy of the persisted style layers; later edits do not affect it
    pub fn get_styles_copy(&self) -> StylesSnapshot {
        StylesSnapshot {
            styles: self.base_styles.clone(),
            mobile_styles: self.mobile_styles.clone(),
            tablet_styles: self.tablet_styles.clone(),
        }
    }

    /// Font family, looked up base first, then mobile, then tablet.
    pub fn get_font_family(&self) -> String {
        self.get_font_family_or(DEFAULT_FONT_FAMILY)
    }

    pub fn get_font_family_or(&self, fallback: &str) -> String {
        [&self.base_styles, &self.mobile_styles, &self.tablet_styles]
            .into_iter()
            .filter_map(|layer| layer.get(FONT_FAMILY))
            .find(|value| value.is_truthy())
            .map(StyleValue::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------

    pub fn is_movable(&self, state: &EditorState) -> bool {
        self.get_style(state, "position").and_then(StyleValue::as_str) == Some("absolute")
    }

    /// Nudge an absolutely positioned block by one pixel.
    ///
    /// Returns `false` without touching styles when the block is not movable.
    pub fn nudge(&mut self, state: &EditorState, direction: Direction) -> bool {
        if !self.is_movable(state) {
            return false;
        }

        let (name, delta) = match direction {
            Direction::Up => ("top", -1.0),
            Direction::Down => ("top", 1.0),
            Direction::Left => ("left", -1.0),
            Direction::Right => ("left", 1.0),
        };
        let current = get_number_from_px(self.get_style(state, name));
        let value = builder_utils::add_px_to_number(current + delta, true);
        self.set_style(state, name, Some(StyleValue::Text(value)));
        true
    }

    // -------------------------------------------------------------------------
    // Attributes and classes
    // -------------------------------------------------------------------------

    /// Set an HTML attribute. Returns `false` for `style`, which is never
    /// stored as an attribute.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<serde_json::Value>) -> bool {
        if name == "style" {
            tracing::warn!("Ignoring inline style attribute on block {}", self.id);
            return false;
        }
        self.attributes.insert(name.to_string(), value.into());
        self.dirty = true;
        true
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<serde_json::Value> {
        let removed = self.attributes.remove(name);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
            self.dirty = true;
        }
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        let removed = self.classes.len() != before;
        self.dirty |= removed;
        removed
    }

    // -------------------------------------------------------------------------
    // Tree and editor integration
    // -------------------------------------------------------------------------

    /// Build a child from `options`, append it and return it.
    ///
    /// Fails if the new subtree contains a body block; a page has one root.
    pub fn add_child(&mut self, mut options: BlockOptions) -> crate::Result<&mut Block> {
        options.parent_block_id = Some(self.id.to_string());
        let child = Block::new(options);
        if child.iter().any(|(_, block)| block.is_root()) {
            return Err(BlockModelError::DuplicateRoot(self.id.to_string()));
        }
        tracing::debug!("Added block {} to {}", child.id, self.id);

        let index = self.children.len();
        self.children.push(child);
        self.dirty = true;
        Ok(&mut self.children[index])
    }

    /// Detach and return the direct child with `id`
    pub fn remove_child(&mut self, id: &str) -> Option<Block> {
        let index = self.children.iter().position(|child| child.id == id)?;
        self.dirty = true;
        Some(self.children.remove(index))
    }

    /// Look up the parent in `tree`; a block without a parent id resolves to
    /// the root.
    pub fn get_parent_block<'t>(&self, tree: &'t PageTree) -> Option<&'t Block> {
        let parent_id = self.parent_id.as_ref().map(BlockId::as_str).unwrap_or(ROOT_ID);
        tree.find_block(parent_id)
    }

    pub fn select_block(&self, state: &mut EditorState) {
        state.select(self.id.clone());
    }

    pub fn is_selected(&self, state: &EditorState) -> bool {
        state.selected_block() == Some(&self.id)
    }

    pub fn is_hovered(&self, state: &EditorState) -> bool {
        state.hovered_block() == Some(&self.id)
    }

    // -------------------------------------------------------------------------
    // Change tracking
    // -------------------------------------------------------------------------

    /// Whether this block changed since the last [`Block::take_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Pre-order iterator over this block and its descendants with depth
    pub fn iter(&self) -> BlockIter<'_> {
        BlockIter {
            stack: vec![(0, self)],
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_options().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BlockOptions::deserialize(deserializer).map(Block::new)
    }
}

/// Pre-order traversal yielding `(depth, block)`
pub struct BlockIter<'a> {
    stack: Vec<(usize, &'a Block)>,
}

impl<'a> Iterator for BlockIter<'a> {
    type Item = (usize, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, block) = self.stack.pop()?;
        self.stack
            .extend(block.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, block))
    }
}

/// Breakpoint-resolved style reads
pub struct ComputedStyles<'a> {
    block: &'a Block,
    breakpoint: Breakpoint,
}

impl<'a> ComputedStyles<'a> {
    pub fn get(&self, name: &str) -> Option<&'a StyleValue> {
        self.block.get_style_at(self.breakpoint, name)
    }
}

/// Breakpoint-routed style reads and writes
pub struct ComputedStylesMut<'a> {
    block: &'a mut Block,
    breakpoint: Breakpoint,
}

impl ComputedStylesMut<'_> {
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.block.get_style_at(self.breakpoint, name)
    }

    pub fn set(&mut self, name: &str, value: Option<StyleValue>) {
        self.block.set_style_at(self.breakpoint, name, value);
    }
}
