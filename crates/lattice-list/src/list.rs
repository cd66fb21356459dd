//! The list container.
//!
//! [`ListContainer`] runs one render pass over a data source: it resolves a
//! key per record, calls the render callback, classifies and composes each
//! item, and wraps the items in the list chrome (header, footer, grid,
//! pagination summary, empty placeholder).
//!
//! A pass is a pure function of the data, the callback and the
//! configuration. Its output, [`RenderedList`], maps each resolved key to the
//! item's root element; keeping elements stable across passes is left to the
//! host.
//!
//! # Example
//!
//! ```ignore
//! use lattice_list::prelude::*;
//! use serde_json::json;
//!
//! let data = vec![json!({ "id": 1, "title": "ant design" })];
//! let config = ListConfig::new(ListOptions::new().with_row_key("id"))?;
//! let list = ListContainer::new(config);
//!
//! let rendered = list.render(&data, |record, _| {
//!     ListItem::new(ItemContent::text(record["title"].as_str().unwrap_or_default()))
//! });
//! assert_eq!(rendered.keys(), vec![&Key::Int(1)]);
//! ```

use std::collections::HashSet;

use crate::classify::{classify, ItemClassification};
use crate::compose::{compose, ItemContext, ItemSlot};
use crate::config::{Direction, ItemLayout, ListConfig, ListContext, ListSize, PaginationSpec};
use crate::content::ListItem;
use crate::grid::{GridLayoutEngine, GridPlacement};
use crate::handle::ElementHandle;
use crate::key::{resolve_key, Key, Record};
use crate::markup::{Document, ElementId};

/// One item of a completed render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Resolved key.
    pub key: Key,
    /// Position of the record in the full data source.
    pub index: usize,
    /// Item root element.
    pub element: ElementId,
    /// Flex/block mode of the root.
    pub classification: ItemClassification,
    /// Filled slots in logical order.
    pub slots: Vec<ItemSlot>,
    /// Grid cell, when the list is a grid.
    pub placement: Option<GridPlacement>,
}

/// Output of a render pass.
#[derive(Debug)]
pub struct RenderedList {
    document: Document,
    root: ElementId,
    items: Vec<RenderedItem>,
    layout: ItemLayout,
    direction: Direction,
}

impl RenderedList {
    /// The markup arena.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The list root element.
    #[inline]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Rendered items in data-source order.
    #[inline]
    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    /// Returns `true` if no item was rendered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolved keys in order.
    pub fn keys(&self) -> Vec<&Key> {
        self.items.iter().map(|item| &item.key).collect()
    }

    /// Find an item by key.
    pub fn item_by_key(&self, key: &Key) -> Option<&RenderedItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Layout used by the pass.
    #[inline]
    pub fn layout(&self) -> ItemLayout {
        self.layout
    }

    /// Direction used by the pass (explicit or inherited).
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Serialize the whole list as HTML.
    pub fn to_html(&self) -> String {
        self.document.to_html(self.root)
    }
}

/// Renders data sources as lists.
#[derive(Debug)]
pub struct ListContainer<R> {
    config: ListConfig<R>,
    context: ListContext,
}

impl<R: Record> ListContainer<R> {
    /// Create a container with the default ambient context.
    pub fn new(config: ListConfig<R>) -> Self {
        Self {
            config,
            context: ListContext::default(),
        }
    }

    /// Set the ambient context using builder pattern.
    pub fn with_context(mut self, context: ListContext) -> Self {
        self.context = context;
        self
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &ListConfig<R> {
        &self.config
    }

    /// The ambient context.
    #[inline]
    pub fn context(&self) -> &ListContext {
        &self.context
    }

    /// Run one render pass.
    ///
    /// `render_item` is called once per visible record, in order, with the
    /// record and its index in `data`. Handles on the configuration and on
    /// the returned items are bound when the pass completes.
    pub fn render<F>(&self, data: &[R], mut render_item: F) -> RenderedList
    where
        F: FnMut(&R, usize) -> ListItem,
    {
        let options = self.config.options();
        let layout = options.item_layout;
        let direction = self.config.resolve_direction(&self.context);
        let prefix = self.context.prefix.as_str();
        let list_class = |suffix: &str| format!("{}-list-{}", prefix, suffix);

        let range = options
            .pagination
            .as_ref()
            .map_or(0..data.len(), |p| p.range(data.len()));
        let grid = options
            .grid
            .clone()
            .map(|spec| GridLayoutEngine::new(spec, options.viewport_width));

        tracing::debug!(
            total = data.len(),
            visible = range.len(),
            layout = %layout,
            direction = %direction,
            grid_columns = grid.as_ref().map(GridLayoutEngine::columns),
            breakpoint = ?grid.as_ref().and_then(GridLayoutEngine::breakpoint),
            "rendering list"
        );

        let mut doc = Document::new();
        let root = doc.create_with_class("div", format!("{}-list", prefix));
        self.decorate_root(&mut doc, root, direction, grid.is_some());

        if let Some(pagination) = &options.pagination {
            if pagination.position.is_top() {
                let nav = pagination_summary(&mut doc, pagination, data.len(), prefix);
                doc.append_child(root, nav);
            }
        }

        if let Some(header) = self.config.header() {
            let region = doc.create_with_class("div", list_class("header"));
            doc.append_node(region, header.clone());
            doc.append_child(root, region);
        }

        let ctx = ItemContext {
            layout,
            direction,
            prefix,
            spacing: options.spacing,
            in_grid: grid.is_some(),
        };

        let mut items = Vec::with_capacity(range.len());
        let mut pending: Vec<(ElementHandle, ElementId)> = Vec::new();
        let mut seen = HashSet::with_capacity(range.len());

        let container = if range.is_empty() {
            None
        } else if let Some(grid) = &grid {
            let row = doc.create_with_class("div", format!("{}-row", prefix));
            if let Some(element) = doc.get_mut(row) {
                for (property, value) in grid.row_style() {
                    element.set_style(property, value);
                }
            }
            Some(row)
        } else {
            Some(doc.create_with_class("ul", list_class("items")))
        };

        for (offset, record) in data[range.clone()].iter().enumerate() {
            let index = range.start + offset;
            let key = resolve_key(record, self.config.row_key(), index);
            if !seen.insert(key.clone()) {
                tracing::warn!(%key, index, "duplicate list item key");
            }

            let mut item = render_item(record, index);
            let handle = item.handle.take();
            let classification = classify(&item.content, &item.decoration, layout);
            let composed = compose(&mut doc, item, classification, &ctx);
            if let Some(element) = doc.get_mut(composed.root) {
                element.set_attr("data-key", key.to_string());
            }

            tracing::trace!(
                %key,
                index,
                positional = key.is_index(),
                %classification,
                "composed list item"
            );

            let placement = grid.as_ref().map(|g| g.placement(offset, direction));
            if let Some(container) = container {
                match (&grid, placement) {
                    (Some(grid), Some(placement)) => {
                        let cell = doc.create_with_class("div", format!("{}-col", prefix));
                        if let Some(element) = doc.get_mut(cell) {
                            for (property, value) in grid.cell_style() {
                                element.set_style(property, value);
                            }
                            element.set_attr("data-row", placement.row.to_string());
                            element.set_attr("data-column", placement.column.to_string());
                        }
                        doc.append_child(cell, composed.root);
                        doc.append_child(container, cell);
                    }
                    _ => doc.append_child(container, composed.root),
                }
            }

            if let Some(handle) = handle {
                pending.push((handle, composed.root));
            }
            items.push(RenderedItem {
                key,
                index,
                element: composed.root,
                classification,
                slots: composed.slots,
                placement,
            });
        }

        match container {
            Some(container) => doc.append_child(root, container),
            None if !options.loading => {
                let empty = doc.create_with_class("div", list_class("empty-text"));
                doc.append_text(empty, options.empty_text.clone());
                doc.append_child(root, empty);
            }
            None => {}
        }

        if let Some(footer) = self.config.footer() {
            let region = doc.create_with_class("div", list_class("footer"));
            doc.append_node(region, footer.clone());
            doc.append_child(root, region);
        }

        if let Some(load_more) = self.config.load_more() {
            doc.append_node(root, load_more.clone());
        }

        if let Some(pagination) = &options.pagination {
            if pagination.position.is_bottom() {
                let nav = pagination_summary(&mut doc, pagination, data.len(), prefix);
                doc.append_child(root, nav);
            }
        }

        if let Some(handle) = self.config.handle() {
            handle.bind(root);
        }
        for (handle, element) in pending {
            handle.bind(element);
        }

        RenderedList {
            document: doc,
            root,
            items,
            layout,
            direction,
        }
    }

    fn decorate_root(&self, doc: &mut Document, root: ElementId, direction: Direction, grid: bool) {
        let options = self.config.options();
        let prefix = self.context.prefix.as_str();
        let Some(element) = doc.get_mut(root) else {
            return;
        };

        let mut modifier = |suffix: &str| element.add_class(format!("{}-list-{}", prefix, suffix));
        if options.item_layout == ItemLayout::Vertical {
            modifier("vertical");
        }
        match options.size {
            ListSize::Small => modifier("sm"),
            ListSize::Large => modifier("lg"),
            ListSize::Default => {}
        }
        if options.split {
            modifier("split");
        }
        if options.bordered {
            modifier("bordered");
        }
        if options.loading {
            modifier("loading");
        }
        if grid {
            modifier("grid");
        }
        let bottom_pagination = options
            .pagination
            .as_ref()
            .is_some_and(|p| p.position.is_bottom());
        if self.config.footer().is_some() || self.config.load_more().is_some() || bottom_pagination {
            modifier("something-after-last-item");
        }
        if direction.is_rtl() {
            modifier("rtl");
        }

        if direction.is_rtl() {
            element.set_attr("dir", "rtl");
        }
        if options.loading {
            element.set_attr("aria-busy", "true");
        }
    }
}

fn pagination_summary(
    doc: &mut Document,
    pagination: &PaginationSpec,
    total: usize,
    prefix: &str,
) -> ElementId {
    let current = pagination.effective_page(total);
    let pages = pagination.total_pages(total);

    let nav = doc.create_with_class("nav", format!("{}-list-pagination", prefix));
    if let Some(element) = doc.get_mut(nav) {
        element.set_attr("aria-label", "pagination");
        element.set_attr("data-current", current.to_string());
        element.set_attr("data-total-pages", pages.to_string());
    }
    doc.append_text(nav, format!("{} / {}", current, pages));
    nav
}
