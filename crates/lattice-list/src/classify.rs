//! Flex/block classification of an item's root container.

use std::fmt;

use crate::config::ItemLayout;
use crate::content::{ItemContent, ItemDecoration};

/// Presentational mode of an item's root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClassification {
    /// Children are aligned as flex columns.
    Flex,
    /// Children flow as a plain block.
    Block,
}

impl ItemClassification {
    /// Returns `true` for [`ItemClassification::Flex`].
    #[inline]
    pub fn is_flex(self) -> bool {
        matches!(self, ItemClassification::Flex)
    }
}

impl fmt::Display for ItemClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemClassification::Flex => write!(f, "flex"),
            ItemClassification::Block => write!(f, "block"),
        }
    }
}

/// Decide how an item's root container lays out its children.
///
/// - Vertical: flex exactly when extra content needs a side column.
/// - Horizontal: block when no decoration slot is filled, whatever the
///   content holds; any meta, action or extra makes it flex.
///
/// Direction plays no part.
pub fn classify(
    _content: &ItemContent,
    decoration: &ItemDecoration,
    layout: ItemLayout,
) -> ItemClassification {
    match layout {
        ItemLayout::Vertical => {
            if decoration.has_extra() {
                ItemClassification::Flex
            } else {
                ItemClassification::Block
            }
        }
        ItemLayout::Horizontal => {
            if decoration.is_empty() {
                ItemClassification::Block
            } else {
                ItemClassification::Flex
            }
        }
    }
}
