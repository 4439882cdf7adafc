//! Document-node abstraction.
//!
//! The colorizer and the identifier pass only need child enumeration, the id,
//! named attributes and inline style properties. Anything that can provide
//! those (the in-memory [`Element`] tree, a browser DOM element) can be
//! recolored.

use crate::element::Element;

/// A node in a document tree that can be read and rewritten in place.
pub trait DocumentNode {
    /// Tag name, used in diagnostics.
    fn tag_name(&self) -> String;

    /// Whether this node is a drawable graphics element. Colorizing must
    /// start at such a node.
    fn is_graphical(&self) -> bool;

    /// Visit each direct child element in document order.
    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut Self));

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&mut self, name: &str, value: &str);

    /// Inline style property (`style="fill: ..."`).
    fn style_property(&self, property: &str) -> Option<String>;

    fn set_style_property(&mut self, property: &str, value: &str);

    fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    fn set_id(&mut self, id: &str) {
        self.set_attribute("id", id);
    }
}

impl DocumentNode for Element {
    fn tag_name(&self) -> String {
        self.tag().to_string()
    }

    fn is_graphical(&self) -> bool {
        self.kind().is_some_and(|kind| kind.is_graphical())
    }

    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut Self)) {
        for child in self.child_elements_mut() {
            visit(child);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attr(name).map(str::to_string)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.set_attr(name, value);
    }

    fn style_property(&self, property: &str) -> Option<String> {
        Element::style_property(self, property)
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        Element::set_style_property(self, property, value);
    }
}
