//! What a render callback returns for one record.
//!
//! The callback describes an item with a tagged [`ItemContent`] plus optional
//! [`ItemDecoration`] slots. The tag says up front whether the body is a run
//! of inline text or structured block content, so nothing downstream has to
//! inspect node trees to find out.

use crate::handle::ElementHandle;
use crate::markup::Node;

/// Primary content of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    /// Text, possibly with inline markup (`"I am <span>ant</span> design"`),
    /// at any nesting depth.
    Inline(Vec<Node>),
    /// Structured child content.
    Block(Vec<Node>),
}

impl ItemContent {
    /// Inline content consisting of one text run.
    pub fn text(text: impl Into<String>) -> Self {
        ItemContent::Inline(vec![Node::Text(text.into())])
    }

    /// Inline content from several nodes.
    pub fn inline(nodes: impl IntoIterator<Item = Node>) -> Self {
        ItemContent::Inline(nodes.into_iter().collect())
    }

    /// Block content from several nodes.
    pub fn block(nodes: impl IntoIterator<Item = Node>) -> Self {
        ItemContent::Block(nodes.into_iter().collect())
    }

    /// No primary content.
    pub fn empty() -> Self {
        ItemContent::Block(Vec::new())
    }

    /// Returns `true` for inline content.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self, ItemContent::Inline(_))
    }

    /// The content nodes.
    pub fn nodes(&self) -> &[Node] {
        match self {
            ItemContent::Inline(nodes) | ItemContent::Block(nodes) => nodes,
        }
    }

    /// Consume into the content nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            ItemContent::Inline(nodes) | ItemContent::Block(nodes) => nodes,
        }
    }
}

impl Default for ItemContent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Avatar, title and description shown before the item content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    pub avatar: Option<Node>,
    pub title: Option<Node>,
    pub description: Option<Node>,
}

impl Meta {
    /// Create an empty meta block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the avatar using builder pattern.
    pub fn with_avatar(mut self, avatar: impl Into<Node>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Set the title using builder pattern.
    pub fn with_title(mut self, title: impl Into<Node>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description using builder pattern.
    pub fn with_description(mut self, description: impl Into<Node>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the title or description is set.
    pub fn has_text(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// Optional decoration slots of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDecoration {
    /// Leading avatar/title/description block.
    pub meta: Option<Meta>,
    /// Row of actions, in display order.
    pub actions: Vec<Node>,
    /// Trailing content.
    pub extra: Option<Node>,
}

impl ItemDecoration {
    /// Returns `true` if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.meta.is_none() && self.actions.is_empty() && self.extra.is_none()
    }

    /// Returns `true` if trailing extra content is present.
    #[inline]
    pub fn has_extra(&self) -> bool {
        self.extra.is_some()
    }
}

/// One item as produced by the render callback.
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    pub content: ItemContent,
    pub decoration: ItemDecoration,
    /// Additional class on the item root.
    pub class: Option<String>,
    /// Bound to the item root once the pass completes.
    pub handle: Option<ElementHandle>,
}

impl ListItem {
    /// Item with the given content and no decoration.
    pub fn new(content: ItemContent) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    /// Item whose content is a single text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ItemContent::text(text))
    }

    /// Set the meta slot using builder pattern.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.decoration.meta = Some(meta);
        self
    }

    /// Append an action using builder pattern.
    pub fn with_action(mut self, action: impl Into<Node>) -> Self {
        self.decoration.actions.push(action.into());
        self
    }

    /// Replace all actions using builder pattern.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Node>) -> Self {
        self.decoration.actions = actions.into_iter().collect();
        self
    }

    /// Set the extra slot using builder pattern.
    pub fn with_extra(mut self, extra: impl Into<Node>) -> Self {
        self.decoration.extra = Some(extra.into());
        self
    }

    /// Add a class to the item root using builder pattern.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Bind `handle` to the item root using builder pattern.
    pub fn with_handle(mut self, handle: ElementHandle) -> Self {
        self.handle = Some(handle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_emptiness() {
        assert!(ItemDecoration::default().is_empty());

        let item = ListItem::text("plain").with_action(Node::element("a").text("Edit"));
        assert!(!item.decoration.is_empty());
        assert!(!item.decoration.has_extra());
    }

    #[test]
    fn content_tags() {
        assert!(ItemContent::text("hello").is_inline());
        assert!(!ItemContent::empty().is_inline());

        let content = ItemContent::inline([
            Node::text("I am "),
            Node::element("span").text("ant").into(),
            Node::text(" design list item"),
        ]);
        assert_eq!(content.nodes().len(), 3);
        assert_eq!(
            content
                .nodes()
                .iter()
                .map(Node::text_content)
                .collect::<String>(),
            "I am ant design list item"
        );
    }

    #[test]
    fn actions_keep_order() {
        let item = ListItem::default()
            .with_action("b")
            .with_action("a")
            .with_action("b");
        let labels: Vec<String> = item.decoration.actions.iter().map(Node::text_content).collect();
        assert_eq!(labels, vec!["b", "a", "b"]);
    }
}
