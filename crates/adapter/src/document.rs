//! Host page abstraction.
//!
//! The widget never reaches into a global document. Everything it needs
//! from the host goes through [`HostPage`]; [`Document`] is the in-memory
//! implementation used by the exporter and the tests.

use crate::tree::Element;
use crate::types::{HERO_CONTAINER_ID, REVEAL_TARGET_CLASS};

/// Operations the widget performs on its host.
///
/// Mutating calls return false when the target id does not exist.
pub trait HostPage {
    fn has_element(&self, id: &str) -> bool;
    fn append_child(&mut self, parent_id: &str, child: Element) -> bool;
    fn add_class(&mut self, id: &str, class: &str) -> bool;
    fn remove_class(&mut self, id: &str, class: &str) -> bool;
    fn set_style(&mut self, id: &str, prop: &str, value: &str) -> bool;
    /// Ids of every element carrying `class` (elements without an id are skipped).
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    /// Whether the host can report element visibility.
    fn supports_visibility_observer(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
    observer_support: bool,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            observer_support: true,
        }
    }

    /// `<body>` with an empty hero container.
    pub fn with_hero() -> Self {
        Self::new(
            Element::new("body").with_child(
                Element::new("section")
                    .with_id(HERO_CONTAINER_ID)
                    .with_class("hero"),
            ),
        )
    }

    /// [`Document::with_hero`] followed by `count` reveal cards `card-0..`.
    pub fn with_hero_and_cards(count: usize) -> Self {
        let mut doc = Self::with_hero();
        let mut grid = Element::new("section").with_class("card-grid");
        for i in 0..count {
            grid.push(
                Element::new("article")
                    .with_id(format!("card-{i}"))
                    .with_class(REVEAL_TARGET_CLASS),
            );
        }
        doc.root.push(grid);
        doc
    }

    pub fn with_observer_support(mut self, supported: bool) -> Self {
        self.observer_support = supported;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl HostPage for Document {
    fn has_element(&self, id: &str) -> bool {
        self.root.find(id).is_some()
    }

    fn append_child(&mut self, parent_id: &str, child: Element) -> bool {
        match self.root.find_mut(parent_id) {
            Some(parent) => {
                parent.push(child);
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.add_class(class);
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.remove_class(class);
                true
            }
            None => false,
        }
    }

    fn set_style(&mut self, id: &str, prop: &str, value: &str) -> bool {
        match self.root.find_mut(id) {
            Some(el) => {
                el.set_style(prop, value);
                true
            }
            None => false,
        }
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.root
            .find_by_class(class)
            .into_iter()
            .filter_map(|e| e.id.clone())
            .collect()
    }

    fn supports_visibility_observer(&self) -> bool {
        self.observer_support
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_document_has_container() {
        let doc = Document::with_hero();
        assert!(doc.has_element(HERO_CONTAINER_ID));
        assert!(!doc.has_element("nope"));
    }

    #[test]
    fn mutations_report_missing_targets() {
        let mut doc = Document::with_hero();
        assert!(!doc.append_child("nope", Element::div()));
        assert!(!doc.add_class("nope", "x"));
        assert!(!doc.set_style("nope", "left", "0"));

        assert!(doc.add_class(HERO_CONTAINER_ID, "x"));
        assert!(doc.element(HERO_CONTAINER_ID).unwrap().has_class("x"));
        assert!(doc.remove_class(HERO_CONTAINER_ID, "x"));
        assert!(!doc.element(HERO_CONTAINER_ID).unwrap().has_class("x"));
    }

    #[test]
    fn cards_are_queryable_by_class() {
        let doc = Document::with_hero_and_cards(3);
        assert_eq!(
            doc.ids_with_class(REVEAL_TARGET_CLASS),
            vec!["card-0", "card-1", "card-2"]
        );
    }

    #[test]
    fn observer_support_is_configurable() {
        assert!(Document::with_hero().supports_visibility_observer());
        assert!(!Document::with_hero()
            .with_observer_support(false)
            .supports_visibility_observer());
    }
}
