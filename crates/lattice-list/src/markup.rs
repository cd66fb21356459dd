//! Markup produced by a render pass.
//!
//! Caller content is described with the owned [`Node`] tree. A render pass
//! adopts those nodes into a [`Document`], an arena of [`Element`]s keyed by
//! [`ElementId`], so that structural handles can point at individual
//! elements after the pass completes.
//!
//! # Example
//!
//! ```ignore
//! use lattice_list::markup::{Document, Node};
//!
//! let title = Node::element("a").attr("href", "https://example.com").text("Home");
//!
//! let mut doc = Document::new();
//! let root = doc.create("div");
//! doc.append_node(root, title.into());
//! assert_eq!(doc.to_html(root), r#"<div><a href="https://example.com">Home</a></div>"#);
//! ```

use std::fmt::Write as _;

use quick_xml::escape::escape;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of an element inside a [`Document`].
    ///
    /// Ids are only meaningful for the document (and therefore the render
    /// pass) that issued them.
    pub struct ElementId;
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "wbr"];

/// Attribute names must be non-empty and free of whitespace, quotes, `/`,
/// `=`, `<`, `>` and control characters.
fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '/' | '=' | '<' | '>')
        })
}

// ============================================================================
// Owned node tree (caller input)
// ============================================================================

/// A piece of caller-supplied content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A text run.
    Text(String),
    /// An element with children.
    Element(ElementNode),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Start building an element node.
    pub fn element(tag: impl Into<String>) -> ElementNode {
        ElementNode::new(tag)
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

/// Builder for an element [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name.
    pub tag: String,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Create an element node with no classes, attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an attribute.
    ///
    /// Malformed names are dropped when the element is serialized.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

// ============================================================================
// Document arena (render output)
// ============================================================================

/// A child slot of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Nested element.
    Element(ElementId),
    /// Text run.
    Text(String),
}

/// An element inside a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    children: Vec<Child>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Tag name.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// CSS classes in insertion order.
    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check if the element has a specific class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class unless already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value.
    ///
    /// Malformed names are dropped when the element is serialized.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Get an inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline style property, replacing any previous value.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.style.push((property, value)),
        }
    }

    /// Children in document order.
    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Parent element, `None` for roots.
    #[inline]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Ids of the element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.children.iter().filter_map(|c| match c {
            Child::Element(id) => Some(*id),
            Child::Text(_) => None,
        })
    }
}

/// Arena holding every element produced by one render pass.
#[derive(Debug, Default)]
pub struct Document {
    elements: SlotMap<ElementId, Element>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached element.
    pub fn create(&mut self, tag: impl Into<String>) -> ElementId {
        self.elements.insert(Element::new(tag))
    }

    /// Create a detached element carrying one class.
    pub fn create_with_class(&mut self, tag: impl Into<String>, class: impl Into<String>) -> ElementId {
        let id = self.create(tag);
        self.elements[id].add_class(class);
        id
    }

    /// Get an element.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get an element mutably.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Check if `id` refers to a live element carrying `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Append `child` to `parent`, reparenting it.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.elements.contains_key(parent) || !self.elements.contains_key(child) {
            return;
        }
        if let Some(old) = self.elements[child].parent.take() {
            self.elements[old]
                .children
                .retain(|c| *c != Child::Element(child));
        }
        self.elements[child].parent = Some(parent);
        self.elements[parent].children.push(Child::Element(child));
    }

    /// Append a text run to `parent`.
    pub fn append_text(&mut self, parent: ElementId, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(parent) {
            element.children.push(Child::Text(text.into()));
        }
    }

    /// Append an already adopted child to `parent`.
    pub fn append(&mut self, parent: ElementId, child: Child) {
        match child {
            Child::Element(id) => self.append_child(parent, id),
            Child::Text(text) => self.append_text(parent, text),
        }
    }

    /// Adopt an owned node into the arena without attaching it.
    pub fn adopt_node(&mut self, node: Node) -> Child {
        match node {
            Node::Text(text) => Child::Text(text),
            Node::Element(element) => Child::Element(self.adopt(element)),
        }
    }

    /// Adopt an owned node into the arena and append it to `parent`.
    pub fn append_node(&mut self, parent: ElementId, node: Node) {
        let child = self.adopt_node(node);
        self.append(parent, child);
    }

    /// Adopt an owned element tree into the arena as a detached element.
    pub fn adopt(&mut self, node: ElementNode) -> ElementId {
        let ElementNode {
            tag,
            classes,
            attrs,
            children,
        } = node;
        let id = self.create(tag);
        {
            let element = &mut self.elements[id];
            for class in classes {
                element.add_class(class);
            }
            for (name, value) in attrs {
                element.set_attr(name, value);
            }
        }
        for child in children {
            self.append_node(id, child);
        }
        id
    }

    /// Reverse the physical order of an element's children.
    pub fn reverse_children(&mut self, id: ElementId) {
        if let Some(element) = self.elements.get_mut(id) {
            element.children.reverse();
        }
    }

    /// All descendants of `root` (inclusive) carrying `class`, in pre-order.
    pub fn find_by_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(element) = self.get(id) else {
                continue;
            };
            if element.has_class(class) {
                found.push(id);
            }
            let children: Vec<ElementId> = element.child_elements().collect();
            stack.extend(children.into_iter().rev());
        }
        found
    }

    /// First descendant of `root` (inclusive) carrying `class`.
    pub fn first_by_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.find_by_class(root, class).into_iter().next()
    }

    /// Concatenated text under `id`.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(element) = self.get(id) else {
            return;
        };
        for child in &element.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(child) => self.collect_text(*child, out),
            }
        }
    }

    /// Serialize the subtree rooted at `id` as HTML.
    pub fn to_html(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: ElementId, out: &mut String) {
        let Some(element) = self.get(id) else {
            return;
        };

        out.push('<');
        out.push_str(&element.tag);
        if !element.classes.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape(element.classes.join(" ").as_str()));
        }
        for (name, value) in &element.attrs {
            if !is_attr_name(name) {
                tracing::warn!(
                    tag = %element.tag,
                    name = %name,
                    "skipping malformed attribute name"
                );
                continue;
            }
            let _ = write!(out, r#" {}="{}""#, name, escape(value.as_str()));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, r#" style="{}""#, escape(style.as_str()));
        }
        out.push('>');

        if VOID_TAGS.contains(&element.tag.as_str()) {
            return;
        }

        for child in &element.children {
            match child {
                Child::Text(text) => out.push_str(&escape(text.as_str())),
                Child::Element(child) => self.write_html(*child, out),
            }
        }

        let _ = write!(out, "</{}>", element.tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopt_preserves_structure() {
        let node = Node::element("p")
            .class("intro")
            .text("I am ")
            .child(Node::element("span").text("ant"))
            .text(" design list item");

        let mut doc = Document::new();
        let root = doc.create("li");
        doc.append_node(root, node.into());

        assert_eq!(
            doc.to_html(root),
            r#"<li><p class="intro">I am <span>ant</span> design list item</p></li>"#
        );
        assert_eq!(doc.text_content(root), "I am ant design list item");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut doc = Document::new();
        let root = doc.create("a");
        doc.get_mut(root).unwrap().set_attr("title", "\"quoted\" & <b>");
        doc.append_text(root, "1 < 2");

        assert_eq!(
            doc.to_html(root),
            r#"<a title="&quot;quoted&quot; &amp; &lt;b&gt;">1 &lt; 2</a>"#
        );
    }

    #[test]
    fn malformed_attribute_names_are_dropped() {
        let mut doc = Document::new();
        let root = doc.adopt(
            Node::element("a")
                .attr("href", "/home")
                .attr(r#"x" onclick="alert(1)"#, "1")
                .attr("data-x>", "2")
                .attr("", "3")
                .attr("aria-label", "Home"),
        );

        assert_eq!(
            doc.to_html(root),
            r#"<a href="/home" aria-label="Home"></a>"#
        );
        assert_eq!(doc.get(root).unwrap().attr("data-x>"), Some("2"));
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let mut doc = Document::new();
        let root = doc.create("span");
        doc.append_node(root, Node::element("img").attr("src", "a.png").into());
        assert_eq!(doc.to_html(root), r#"<span><img src="a.png"></span>"#);
    }

    #[test]
    fn append_child_reparents() {
        let mut doc = Document::new();
        assert!(doc.is_empty());
        let a = doc.create("div");
        let b = doc.create("div");
        let c = doc.create("span");

        doc.append_child(a, c);
        doc.append_child(b, c);

        assert!(doc.get(a).unwrap().children().is_empty());
        assert_eq!(doc.get(c).unwrap().parent(), Some(b));
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
    }

    #[test]
    fn find_by_class_is_pre_order() {
        let mut doc = Document::new();
        let root = doc.create_with_class("ul", "hit");
        let first = doc.create_with_class("li", "hit");
        let nested = doc.create_with_class("em", "hit");
        let second = doc.create_with_class("li", "hit");
        doc.append_child(root, first);
        doc.append_child(first, nested);
        doc.append_child(root, second);

        assert_eq!(doc.find_by_class(root, "hit"), vec![root, first, nested, second]);
        assert_eq!(doc.first_by_class(first, "hit"), Some(first));
    }

    #[test]
    fn style_serialization() {
        let mut doc = Document::new();
        let root = doc.create("div");
        let element = doc.get_mut(root).unwrap();
        element.set_style("margin-left", "16px");
        element.set_style("padding", "0 8px");
        element.set_style("margin-left", "24px");

        assert_eq!(
            doc.to_html(root),
            r#"<div style="margin-left: 24px; padding: 0 8px"></div>"#
        );
    }
}
