//! List configuration.
//!
//! Configuration is split in two:
//!
//! - [`ListOptions`] holds everything that can be written down in a settings
//!   file (layout, direction, grid, pagination, spacing...). It deserializes
//!   from TOML with kebab-case keys and every field defaulted.
//! - [`ListConfig`] wraps validated options together with the parts that
//!   only exist in code: a closure row key, header/footer nodes and the list
//!   structural handle.
//!
//! The text direction is *inherited*: when `direction` is unset the ambient
//! [`ListContext`] decides.
//!
//! # Example
//!
//! ```ignore
//! use lattice_list::config::{ListConfig, ListOptions};
//!
//! let options = ListOptions::from_toml_str(r#"
//! item-layout = "vertical"
//! row-key = "id"
//!
//! [grid]
//! column = 2
//! gutter = 16
//! "#)?;
//! let config: ListConfig<serde_json::Value> = ListConfig::new(options)?;
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::GridSpec;
use crate::handle::ElementHandle;
use crate::key::RowKey;
use crate::markup::Node;

/// Class prefix used when the ambient context does not set one.
pub const DEFAULT_PREFIX: &str = "lattice";

/// Placeholder shown for an empty list.
pub const DEFAULT_EMPTY_TEXT: &str = "No Data";

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "ku", "ps", "sd", "syr", "ug", "ur", "yi",
];

// ============================================================================
// Enumerated options
// ============================================================================

/// Orientation of each item's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemLayout {
    /// Meta, content, actions and extra laid out in one row.
    #[default]
    Horizontal,
    /// Content stacked top to bottom; extra becomes a side column.
    Vertical,
}

impl ItemLayout {
    /// Option spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemLayout::Horizontal => "horizontal",
            ItemLayout::Vertical => "vertical",
        }
    }
}

/// Text direction of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Option spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Direction conventionally used by a locale such as `"ar-SA"`.
    ///
    /// Only the primary language subtag is consulted.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale.trim().split(['-', '_']).next().unwrap_or_default();
        if RTL_LANGUAGES.iter().any(|l| l.eq_ignore_ascii_case(language)) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Returns true for right-to-left.
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Physical side where inline content starts.
    #[inline]
    pub fn start_side(self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    /// Physical side where inline content ends.
    #[inline]
    pub fn end_side(self) -> &'static str {
        match self {
            Direction::Ltr => "right",
            Direction::Rtl => "left",
        }
    }
}

/// Overall density of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ListSize {
    /// Compact padding.
    Small,
    /// Regular padding.
    #[default]
    Default,
    /// Roomy padding.
    Large,
}

impl ListSize {
    /// Option spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ListSize::Small => "small",
            ListSize::Default => "default",
            ListSize::Large => "large",
        }
    }
}

/// Where the pagination summary is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaginationPosition {
    /// Above the items.
    Top,
    /// Below the items.
    #[default]
    Bottom,
    /// Above and below.
    Both,
}

impl PaginationPosition {
    /// Option spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PaginationPosition::Top => "top",
            PaginationPosition::Bottom => "bottom",
            PaginationPosition::Both => "both",
        }
    }

    /// Renders above the items.
    pub fn is_top(self) -> bool {
        matches!(self, PaginationPosition::Top | PaginationPosition::Both)
    }

    /// Renders below the items.
    pub fn is_bottom(self) -> bool {
        matches!(self, PaginationPosition::Bottom | PaginationPosition::Both)
    }
}

macro_rules! option_enum {
    ($ty:ty, $option:literal, [$($variant:expr),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let lowered = s.trim().to_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|v: &$ty| v.as_str() == lowered)
                    .ok_or_else(|| {
                        let allowed = [$($variant.as_str()),+]
                            .iter()
                            .map(|v| format!("'{}'", v))
                            .collect::<Vec<_>>()
                            .join(", ");
                        Error::invalid_value($option, format!("got '{}', expected one of {}", s, allowed))
                    })
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum!(ItemLayout, "item-layout", [ItemLayout::Horizontal, ItemLayout::Vertical]);
option_enum!(Direction, "direction", [Direction::Ltr, Direction::Rtl]);
option_enum!(ListSize, "size", [ListSize::Small, ListSize::Default, ListSize::Large]);
option_enum!(
    PaginationPosition,
    "pagination.position",
    [
        PaginationPosition::Top,
        PaginationPosition::Bottom,
        PaginationPosition::Both,
    ]
);

// ============================================================================
// Structured options
// ============================================================================

/// Directional spacing (px) applied by the item composer.
///
/// Each gap sits on a logical side and is mirrored under RTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ItemSpacing {
    /// Gap after the meta avatar.
    pub avatar_gap: u32,
    /// Gap before the actions row in horizontal layout.
    pub actions_gap: u32,
    /// Inline padding of each action.
    pub action_padding: u32,
    /// Gap before the extra column in vertical layout.
    pub extra_gap: u32,
}

impl Default for ItemSpacing {
    fn default() -> Self {
        Self {
            avatar_gap: 16,
            actions_gap: 48,
            action_padding: 8,
            extra_gap: 40,
        }
    }
}

/// Page selection applied to the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PaginationSpec {
    /// One-based page number.
    pub current: usize,
    /// Items per page.
    pub page_size: usize,
    /// Where the summary element goes.
    pub position: PaginationPosition,
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 10,
            position: PaginationPosition::default(),
        }
    }
}

impl PaginationSpec {
    /// Pagination at `current` with `page_size` items per page.
    pub fn new(current: usize, page_size: usize) -> Self {
        Self {
            current,
            page_size,
            ..Default::default()
        }
    }

    /// Set the summary position using builder pattern.
    pub fn with_position(mut self, position: PaginationPosition) -> Self {
        self.position = position;
        self
    }

    /// Reject zero page numbers and sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPagination`].
    pub fn validate(&self) -> Result<()> {
        if self.current == 0 {
            return Err(Error::invalid_pagination("'current' is one-based"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_pagination("'page-size' must be at least 1"));
        }
        Ok(())
    }

    /// Number of pages needed for `total` items (at least one).
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// The page actually shown, clamped to the last page.
    pub fn effective_page(&self, total: usize) -> usize {
        self.current.clamp(1, self.total_pages(total))
    }

    /// Index range of the visible page within `total` items.
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let page_size = self.page_size.max(1);
        let start = (self.effective_page(total) - 1) * page_size;
        start.min(total)..(start + page_size).min(total)
    }
}

/// Ambient settings inherited by every list rendered under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContext {
    /// Inherited direction.
    pub direction: Direction,
    /// CSS class prefix.
    pub prefix: String,
}

impl Default for ListContext {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ListContext {
    /// Context with the given direction and the default prefix.
    pub fn with_direction(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Context whose direction follows a locale.
    pub fn for_locale(locale: &str) -> Self {
        Self::with_direction(Direction::for_locale(locale))
    }

    /// Set the class prefix using builder pattern.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Serializable list options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ListOptions {
    /// Item orientation.
    pub item_layout: ItemLayout,
    /// Explicit direction; `None` inherits from the context.
    pub direction: Option<Direction>,
    /// Grid arrangement.
    pub grid: Option<GridSpec>,
    /// Field used as the row key.
    pub row_key: Option<String>,
    /// Density.
    pub size: ListSize,
    /// Draw a border around the list.
    pub bordered: bool,
    /// Draw separators between items.
    pub split: bool,
    /// Show the loading state.
    pub loading: bool,
    /// Page selection.
    pub pagination: Option<PaginationSpec>,
    /// Directional spacing.
    pub spacing: ItemSpacing,
    /// Placeholder text for an empty list.
    pub empty_text: String,
    /// Viewport width (px) used to pick a grid breakpoint.
    pub viewport_width: Option<f32>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            item_layout: ItemLayout::default(),
            direction: None,
            grid: None,
            row_key: None,
            size: ListSize::default(),
            bordered: false,
            split: true,
            loading: false,
            pagination: None,
            spacing: ItemSpacing::default(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            viewport_width: None,
        }
    }
}

impl ListOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or unknown enumeration
    /// values, and the validation errors of [`ListOptions::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: ListOptions = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`ListOptions::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let options = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), layout = %options.item_layout, "loaded list options");
        Ok(options)
    }

    /// Check grid and pagination settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] or [`Error::InvalidPagination`].
    pub fn validate(&self) -> Result<()> {
        if let Some(grid) = &self.grid {
            grid.validate()?;
        }
        if let Some(pagination) = &self.pagination {
            pagination.validate()?;
        }
        Ok(())
    }

    /// Set the item layout using builder pattern.
    pub fn with_item_layout(mut self, layout: ItemLayout) -> Self {
        self.item_layout = layout;
        self
    }

    /// Override the inherited direction using builder pattern.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Arrange items in a grid using builder pattern.
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Use a named field as row key using builder pattern.
    pub fn with_row_key(mut self, field: impl Into<String>) -> Self {
        self.row_key = Some(field.into());
        self
    }

    /// Set the density using builder pattern.
    pub fn with_size(mut self, size: ListSize) -> Self {
        self.size = size;
        self
    }

    /// Toggle the border using builder pattern.
    pub fn with_bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Toggle item separators using builder pattern.
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Toggle the loading state using builder pattern.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Paginate the data source using builder pattern.
    pub fn with_pagination(mut self, pagination: PaginationSpec) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Set directional spacing using builder pattern.
    pub fn with_spacing(mut self, spacing: ItemSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the empty placeholder text using builder pattern.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Set the viewport width using builder pattern.
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = Some(width);
        self
    }
}

// ============================================================================
// Full configuration
// ============================================================================

/// Validated options plus code-only configuration for a list of `R`.
pub struct ListConfig<R> {
    options: ListOptions,
    row_key: RowKey<R>,
    header: Option<Node>,
    footer: Option<Node>,
    load_more: Option<Node>,
    handle: Option<ElementHandle>,
}

impl<R> ListConfig<R> {
    /// Validate `options` and build a configuration.
    ///
    /// A `row-key` field name in the options becomes [`RowKey::Field`].
    ///
    /// # Errors
    ///
    /// Propagates [`ListOptions::validate`].
    pub fn new(options: ListOptions) -> Result<Self> {
        options.validate()?;
        let row_key = match &options.row_key {
            Some(field) => RowKey::Field(field.clone()),
            None => RowKey::Default,
        };
        Ok(Self {
            options,
            row_key,
            header: None,
            footer: None,
            load_more: None,
            handle: None,
        })
    }

    /// Replace the row key (e.g. with a closure) using builder pattern.
    pub fn with_row_key(mut self, row_key: RowKey<R>) -> Self {
        self.row_key = row_key;
        self
    }

    /// Set the header node using builder pattern.
    pub fn with_header(mut self, header: impl Into<Node>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer node using builder pattern.
    pub fn with_footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the load-more node using builder pattern.
    pub fn with_load_more(mut self, load_more: impl Into<Node>) -> Self {
        self.load_more = Some(load_more.into());
        self
    }

    /// Bind `handle` to the list root after each render pass.
    pub fn with_handle(mut self, handle: ElementHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// The validated options.
    #[inline]
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// The row key.
    #[inline]
    pub fn row_key(&self) -> &RowKey<R> {
        &self.row_key
    }

    /// Header node.
    pub fn header(&self) -> Option<&Node> {
        self.header.as_ref()
    }

    /// Footer node.
    pub fn footer(&self) -> Option<&Node> {
        self.footer.as_ref()
    }

    /// Load-more node.
    pub fn load_more(&self) -> Option<&Node> {
        self.load_more.as_ref()
    }

    /// The list root handle.
    pub fn handle(&self) -> Option<&ElementHandle> {
        self.handle.as_ref()
    }

    /// The explicit direction if set, else the inherited one.
    pub fn resolve_direction(&self, context: &ListContext) -> Direction {
        self.options.direction.unwrap_or(context.direction)
    }
}

impl<R> Default for ListConfig<R> {
    fn default() -> Self {
        Self {
            options: ListOptions::default(),
            row_key: RowKey::Default,
            header: None,
            footer: None,
            load_more: None,
            handle: None,
        }
    }
}

impl<R> fmt::Debug for ListConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConfig")
            .field("options", &self.options)
            .field("row_key", &self.row_key)
            .field("header", &self.header.is_some())
            .field("footer", &self.footer.is_some())
            .field("load_more", &self.load_more.is_some())
            .finish()
    }
}
