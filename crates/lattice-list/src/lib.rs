//! Item layout classification and composition for styled data lists.
//!
//! This crate renders a data source as a list of items with optional
//! decorations, featuring:
//!
//! - **Classification**: decide per item whether its root is a flex row or
//!   a plain block, from tagged content and filled decoration slots
//! - **Composition**: meta (avatar/title/description), actions row and extra
//!   content, laid out horizontally or vertically
//! - **Direction**: right-to-left mirroring of slot order and spacing,
//!   inherited from an ambient context unless overridden
//! - **Keys**: per-record identity from a field, a closure, or position
//! - **Grid and pagination**: responsive column counts, page slicing
//! - **Configuration**: serde/TOML-loadable list options
//!
//! # Example
//!
//! ```ignore
//! use lattice_list::prelude::*;
//! use serde_json::json;
//!
//! let data = vec![
//!     json!({ "id": 1, "title": "ant design", "extra": "extra" }),
//! ];
//!
//! let config = ListConfig::new(
//!     ListOptions::new()
//!         .with_item_layout(ItemLayout::Vertical)
//!         .with_row_key("id"),
//! )?;
//! let list = ListContainer::new(config).with_context(ListContext::for_locale("en-US"));
//!
//! let rendered = list.render(&data, |record, _| {
//!     ListItem::default()
//!         .with_meta(Meta::new().with_title(record["title"].as_str().unwrap_or_default()))
//!         .with_extra(record["extra"].as_str().unwrap_or_default())
//! });
//!
//! assert_eq!(rendered.items()[0].classification, ItemClassification::Flex);
//! println!("{}", rendered.to_html());
//! ```

pub mod classify;
pub mod compose;
pub mod config;
pub mod content;
pub mod grid;
pub mod handle;
pub mod key;
pub mod list;
pub mod markup;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::classify::{classify, ItemClassification};
    pub use crate::compose::{compose, ComposedItem, ItemContext, ItemSlot};
    pub use crate::config::{
        Direction, ItemLayout, ItemSpacing, ListConfig, ListContext, ListOptions, ListSize,
        PaginationPosition, PaginationSpec,
    };
    pub use crate::content::{ItemContent, ItemDecoration, ListItem, Meta};
    pub use crate::grid::{Breakpoint, GridLayoutEngine, GridPlacement, GridSpec};
    pub use crate::handle::ElementHandle;
    pub use crate::key::{resolve_key, Key, Record, RowKey};
    pub use crate::list::{ListContainer, RenderedItem, RenderedList};
    pub use crate::markup::{Child, Document, Element, ElementId, ElementNode, Node};
    pub use crate::{Error, Result};
}
