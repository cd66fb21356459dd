//! Item markup assembly.
//!
//! The composer turns one [`ListItem`] into an item root element:
//!
//! ```text
//! horizontal, or vertical without extra:
//!   li.item [meta] [content...] [ul.action] [div.extra]
//!
//! vertical with extra (flex):
//!   li.item
//!     div.main  [meta] [content...] [ul.action]
//!     div.extra
//! ```
//!
//! Under RTL the slots laid out along the inline axis are emitted in
//! mirrored physical order and directional spacing switches sides. Stacked
//! (block) content keeps its order. The logical slot order reported in
//! [`ComposedItem::slots`] never changes with direction.

use crate::classify::ItemClassification;
use crate::config::{Direction, ItemLayout, ItemSpacing};
use crate::content::{ListItem, Meta};
use crate::markup::{Child, Document, ElementId, Node};

/// A decoration or content region of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSlot {
    Meta,
    Content,
    Actions,
    Extra,
}

/// Settings shared by every item of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub layout: ItemLayout,
    pub direction: Direction,
    pub prefix: &'a str,
    pub spacing: ItemSpacing,
    /// Items sit in grid cells and use `div` roots.
    pub in_grid: bool,
}

impl ItemContext<'_> {
    fn class(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("{}-list-item", self.prefix)
        } else {
            format!("{}-list-item-{}", self.prefix, suffix)
        }
    }
}

/// Result of composing one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedItem {
    /// Item root element.
    pub root: ElementId,
    /// Filled slots in logical order.
    pub slots: Vec<ItemSlot>,
}

/// Build the markup for `item` under `classification`.
pub fn compose(
    doc: &mut Document,
    item: ListItem,
    classification: ItemClassification,
    ctx: &ItemContext<'_>,
) -> ComposedItem {
    let ListItem {
        content,
        decoration,
        class,
        handle: _,
    } = item;
    let rtl = ctx.direction.is_rtl();

    let root = doc.create_with_class(if ctx.in_grid { "div" } else { "li" }, ctx.class(""));
    if let Some(element) = doc.get_mut(root) {
        if !classification.is_flex() {
            element.add_class(ctx.class("no-flex"));
        }
        if rtl {
            element.add_class(ctx.class("rtl"));
        }
        if let Some(class) = class {
            element.add_class(class);
        }
    }

    // (slot, physical children) in logical order
    let mut groups: Vec<(ItemSlot, Vec<Child>)> = Vec::new();

    if let Some(meta) = decoration.meta {
        let meta = compose_meta(doc, meta, ctx);
        groups.push((ItemSlot::Meta, vec![Child::Element(meta)]));
    }

    let nodes = content.into_nodes();
    if !nodes.is_empty() {
        let children = nodes.into_iter().map(|n| doc.adopt_node(n)).collect();
        groups.push((ItemSlot::Content, children));
    }

    if !decoration.actions.is_empty() {
        let actions = compose_actions(doc, decoration.actions, ctx);
        groups.push((ItemSlot::Actions, vec![Child::Element(actions)]));
    }

    let extra = decoration.extra.map(|extra| {
        let region = doc.create_with_class("div", ctx.class("extra"));
        doc.append_node(region, extra);
        region
    });

    let mut slots: Vec<ItemSlot> = groups.iter().map(|(slot, _)| *slot).collect();
    if extra.is_some() {
        slots.push(ItemSlot::Extra);
    }

    match (ctx.layout, extra) {
        (ItemLayout::Vertical, Some(extra)) if classification.is_flex() => {
            let main = doc.create_with_class("div", ctx.class("main"));
            for (_, children) in groups {
                for child in children {
                    doc.append(main, child);
                }
            }
            if let Some(element) = doc.get_mut(extra) {
                element.set_style(
                    format!("margin-{}", ctx.direction.start_side()),
                    px(ctx.spacing.extra_gap),
                );
            }

            let mut columns = vec![main, extra];
            if rtl {
                columns.reverse();
            }
            for column in columns {
                doc.append_child(root, column);
            }
        }
        (_, extra) => {
            if let Some(extra) = extra {
                groups.push((ItemSlot::Extra, vec![Child::Element(extra)]));
            }
            if rtl && classification.is_flex() && ctx.layout == ItemLayout::Horizontal {
                groups.reverse();
            }
            for (_, children) in groups {
                for child in children {
                    doc.append(root, child);
                }
            }
        }
    }

    ComposedItem { root, slots }
}

fn compose_meta(doc: &mut Document, meta: Meta, ctx: &ItemContext<'_>) -> ElementId {
    let has_text = meta.has_text();
    let Meta {
        avatar,
        title,
        description,
    } = meta;

    let root = doc.create_with_class("div", ctx.class("meta"));

    if let Some(avatar) = avatar {
        let region = doc.create_with_class("div", ctx.class("meta-avatar"));
        if let Some(element) = doc.get_mut(region) {
            element.set_style(
                format!("margin-{}", ctx.direction.end_side()),
                px(ctx.spacing.avatar_gap),
            );
        }
        doc.append_node(region, avatar);
        doc.append_child(root, region);
    }

    if has_text {
        let body = doc.create_with_class("div", ctx.class("meta-content"));
        if let Some(title) = title {
            let region = doc.create_with_class("h4", ctx.class("meta-title"));
            doc.append_node(region, title);
            doc.append_child(body, region);
        }
        if let Some(description) = description {
            let region = doc.create_with_class("div", ctx.class("meta-description"));
            doc.append_node(region, description);
            doc.append_child(body, region);
        }
        doc.append_child(root, body);
    }

    if ctx.direction.is_rtl() {
        doc.reverse_children(root);
    }
    root
}

fn compose_actions(doc: &mut Document, actions: Vec<Node>, ctx: &ItemContext<'_>) -> ElementId {
    let list = doc.create_with_class("ul", ctx.class("action"));
    if ctx.layout == ItemLayout::Horizontal {
        if let Some(element) = doc.get_mut(list) {
            element.set_style(
                format!("margin-{}", ctx.direction.start_side()),
                px(ctx.spacing.actions_gap),
            );
        }
    }

    let last = actions.len().saturating_sub(1);
    for (i, action) in actions.into_iter().enumerate() {
        let entry = doc.create("li");
        if let Some(element) = doc.get_mut(entry) {
            let pad = px(ctx.spacing.action_padding);
            let leading = if i == 0 { px(0) } else { pad.clone() };
            element.set_style(format!("padding-{}", ctx.direction.start_side()), leading);
            element.set_style(format!("padding-{}", ctx.direction.end_side()), pad);
        }
        doc.append_node(entry, action);
        if i != last {
            let split = doc.create_with_class("em", ctx.class("action-split"));
            doc.append_child(entry, split);
        }
        if ctx.direction.is_rtl() {
            doc.reverse_children(entry);
        }
        doc.append_child(list, entry);
    }

    if ctx.direction.is_rtl() {
        doc.reverse_children(list);
    }
    list
}

fn px(value: u32) -> String {
    format!("{}px", value)
}
