//! Generic attribute tree consumed by graph construction.
//!
//! This is the whole surface the model needs from a document carrier:
//! named nodes, ordered attributes, child nodes, text content. Parsing and
//! serialization of concrete carriers live in sdf-file.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in an attribute tree.
///
/// Attribute and child order is preserved; construction walks children in
/// document order and assigns position-based ids from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<(String, String)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Tree>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub content: String,
}

impl Tree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Value of the named attribute, or `None` if absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an attribute, replacing an existing value of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// First child with the given node name, or `None`.
    pub fn child(&self, name: &str) -> Option<&Tree> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// All children with the given node name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tree> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn add_child(&mut self, child: Tree) -> &mut Tree {
        self.children.push(child);
        self.children.last_mut().expect("child was just pushed")
    }

    /// Remove the first child with the given node name. Returns it, or
    /// `None` if no such child exists.
    pub fn remove_child(&mut self, name: &str) -> Option<Tree> {
        let pos = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(pos))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(Tree::new("actor"));
        root.add_child(Tree::new("channel"));
        root.add_child(Tree::new("actor"));
        root
    }

    #[test]
    fn attribute_lookup_and_replace() {
        let mut t = sample();
        assert_eq!(t.attribute("name"), Some("g"));
        assert!(t.has_attribute("type"));
        assert_eq!(t.attribute("missing"), None);

        t.set_attribute("name", "g2");
        assert_eq!(t.attribute("name"), Some("g2"));
        // replaced, not duplicated
        assert_eq!(t.attributes.iter().filter(|(n, _)| n == "name").count(), 1);
    }

    #[test]
    fn children_preserve_document_order() {
        let t = sample();
        assert_eq!(t.children_named("actor").count(), 2);
        assert!(t.has_child("channel"));
        assert_eq!(t.child("actor").unwrap().name, "actor");

        let names: Vec<&str> = t.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["actor", "channel", "actor"]);
    }

    #[test]
    fn remove_child_takes_first_match() {
        let mut t = sample();
        assert!(t.remove_child("actor").is_some());
        assert_eq!(t.children_named("actor").count(), 1);
        assert!(t.remove_child("nope").is_none());
    }
}
