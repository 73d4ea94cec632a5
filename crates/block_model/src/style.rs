//! Style values, style maps and breakpoints
//!
//! A block keeps one [`StyleMap`] per breakpoint layer. Values are either CSS
//! strings (`"10px"`, `"absolute"`) or bare numbers (`0.5` for opacity).

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Breakpoints
// =============================================================================

/// A responsive style layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Desktop layer; the fallback for every other breakpoint
    #[default]
    Base,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

/// Unknown names resolve to [`Breakpoint::Base`].
impl From<&str> for Breakpoint {
    fn from(name: &str) -> Self {
        match name {
            "mobile" => Breakpoint::Mobile,
            "tablet" => Breakpoint::Tablet,
            _ => Breakpoint::Base,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Style Values
// =============================================================================

/// A single CSS property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// An empty string means "unset"
    pub fn is_unset(&self) -> bool {
        matches!(self, StyleValue::Text(s) if s.is_empty())
    }

    /// False for empty strings, zero and NaN
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Text(s) => !s.is_empty(),
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    /// Numeric pixel value: numbers pass through, strings are parsed
    pub fn px(&self) -> f64 {
        match self {
            StyleValue::Number(n) if n.is_finite() => *n,
            StyleValue::Number(_) => 0.0,
            StyleValue::Text(s) => builder_utils::number_from_px(s),
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

/// Numeric value of an optional pixel style; missing values are `0`.
pub fn get_number_from_px(value: Option<&StyleValue>) -> f64 {
    value.map(StyleValue::px).unwrap_or(0.0)
}

// =============================================================================
// Style Maps
// =============================================================================

/// Mapping from CSS property name to value.
///
/// Deserialization is permissive: `null`, booleans, arrays and objects are
/// dropped instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.0.get(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of CSS property names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut map = BTreeMap::new();
                while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
                    match value {
                        serde_json::Value::String(s) => {
                            map.insert(name, StyleValue::Text(s));
                        }
                        serde_json::Value::Number(n) => {
                            if let Some(n) = n.as_f64() {
                                map.insert(name, StyleValue::Number(n));
                            }
                        }
                        other => {
                            tracing::trace!("Dropping style {} with non-CSS value {}", name, other);
                        }
                    }
                }
                Ok(StyleMap(map))
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// Snapshot of the persisted style layers of a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesSnapshot {
    /// Base layer, written under the legacy `styles` key
    pub styles: StyleMap,
    pub mobile_styles: StyleMap,
    pub tablet_styles: StyleMap,
}
