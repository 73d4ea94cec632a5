//! Serialized block description
//!
//! `BlockOptions` is the document-node shape read from and written to the
//! page persistence layer. Field names follow the stored JSON (camelCase).

use crate::StyleMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTML attributes of a block, excluding `style`
pub type AttributeMap = BTreeMap<String, serde_json::Value>;

/// Component identity metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_dynamic: bool,
}

/// Description of a block and its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOptions {
    #[serde(default = "default_element")]
    pub element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,
    /// Legacy name for `base_styles`; takes precedence when both are present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet_styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_styles: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_data: Option<ComponentData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_component: Option<bool>,
    /// `"body"` marks the page root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_block_id: Option<String>,
    /// Accepted for compatibility with older saves; always discarded
    #[serde(default, skip_serializing)]
    pub computed_styles: Option<serde_json::Value>,
}

fn default_element() -> String {
    "div".to_string()
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self::new(default_element())
    }
}

impl BlockOptions {
    /// Describe a block with the given element tag
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            block_id: None,
            block_name: None,
            styles: None,
            base_styles: None,
            raw_styles: None,
            mobile_styles: None,
            tablet_styles: None,
            editor_styles: None,
            attributes: None,
            classes: None,
            children: None,
            draggable: None,
            resizable: None,
            inner_text: None,
            component_data: None,
            is_component: None,
            original_element: None,
            parent_block_id: None,
            computed_styles: None,
        }
    }

    /// Describe an empty page body
    pub fn body() -> Self {
        Self::new("div").with_original_element(crate::ROOT_ELEMENT)
    }

    pub fn with_block_id(mut self, id: impl Into<String>) -> Self {
        self.block_id = Some(id.into());
        self
    }

    pub fn with_block_name(mut self, name: impl Into<String>) -> Self {
        self.block_name = Some(name.into());
        self
    }

    pub fn with_original_element(mut self, element: impl Into<String>) -> Self {
        self.original_element = Some(element.into());
        self
    }

    pub fn with_base_style(mut self, name: &str, value: impl Into<crate::StyleValue>) -> Self {
        self.base_styles.get_or_insert_with(StyleMap::new).insert(name, value);
        self
    }

    pub fn with_mobile_style(mut self, name: &str, value: impl Into<crate::StyleValue>) -> Self {
        self.mobile_styles.get_or_insert_with(StyleMap::new).insert(name, value);
        self
    }

    pub fn with_tablet_style(mut self, name: &str, value: impl Into<crate::StyleValue>) -> Self {
        self.tablet_styles.get_or_insert_with(StyleMap::new).insert(name, value);
        self
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.get_or_insert_with(AttributeMap::new).insert(name.into(), value.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.get_or_insert_with(Vec::new).push(class.into());
        self
    }

    pub fn with_inner_text(mut self, text: impl Into<String>) -> Self {
        self.inner_text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: BlockOptions) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn is_root(&self) -> bool {
        self.original_element.as_deref() == Some(crate::ROOT_ELEMENT)
    }
}
