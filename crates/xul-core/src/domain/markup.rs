//! The parsed markup tree consumed by the engine.
//!
//! A [`MarkupNode`] is produced once by a [`MarkupSource`] and is never
//! mutated while a render pass walks it. Text content is modelled as a leaf
//! child carrying the reserved [`TEXT_TAG`], so mixed content keeps its
//! document order.
//!
//! [`MarkupSource`]: crate::application::ports::MarkupSource

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::error::DomainError;

/// Tag name reserved for text leaves.
pub const TEXT_TAG: &str = "#text";

// ── Attributes ───────────────────────────────────────────────────────────────

/// Ordered attribute set (name → raw value).
///
/// Document order is preserved; setting an existing name replaces the value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

// Serialized as a JSON object; serde_json keeps insertion order only with
// `preserve_order`, so consumers must not rely on key order.
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ── MarkupNode ───────────────────────────────────────────────────────────────

/// One element (or text leaf) of a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    tag: String,
    attributes: Attributes,
    children: Vec<MarkupNode>,
    text: Option<String>,
}

impl MarkupNode {
    /// Create an element. The tag name must not be empty.
    pub fn new(tag: impl Into<String>) -> Result<Self, DomainError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(DomainError::EmptyTagName);
        }
        Ok(Self {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
            text: None,
        })
    }

    /// Create a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            attributes: Attributes::new(),
            children: Vec::new(),
            text: Some(content.into()),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    /// Text content of a text leaf; `None` for elements.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MarkupNode::node_count).sum::<usize>()
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MarkupNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Visit every node of the subtree in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MarkupNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_rejected() {
        assert_eq!(MarkupNode::new(""), Err(DomainError::EmptyTagName));
        assert_eq!(MarkupNode::new("  "), Err(DomainError::EmptyTagName));
    }

    #[test]
    fn attributes_keep_document_order_and_replace_in_place() {
        let mut attrs: Attributes = [("b", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(attrs.set("b", "3"), Some("1".to_string()));
        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(attrs.get("b"), Some("3"));
    }

    #[test]
    fn remove_returns_value() {
        let mut attrs: Attributes = [("title", "Name"), ("width", "20")].into_iter().collect();
        assert_eq!(attrs.remove("title").as_deref(), Some("Name"));
        assert_eq!(attrs.remove("title"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn children_keep_order() {
        let node = MarkupNode::new("head")
            .unwrap()
            .with_child(MarkupNode::new("a").unwrap())
            .with_child(MarkupNode::text("x"))
            .with_child(MarkupNode::new("b").unwrap());
        let tags: Vec<_> = node.children().iter().map(MarkupNode::tag).collect();
        assert_eq!(tags, vec!["a", TEXT_TAG, "b"]);
        assert_eq!(node.node_count(), 4);
        assert_eq!(node.depth(), 2);
    }

    #[test]
    fn attributes_serialize_as_object() {
        let attrs: Attributes = [("width", "20")].into_iter().collect();
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json, serde_json::json!({ "width": "20" }));
    }
}
