//! Grid arrangement of list items.
//!
//! When a list carries a [`GridSpec`], items are wrapped in cells of a single
//! wrapping row. The column count may depend on the viewport width through
//! responsive breakpoints; everything else about an item (classification,
//! composition) is unaffected by the grid.

use serde::{Deserialize, Serialize};

use crate::config::Direction;
use crate::error::{Error, Result};

/// Responsive breakpoints, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below 576px.
    Xs,
    /// 576px and wider.
    Sm,
    /// 768px and wider.
    Md,
    /// 992px and wider.
    Lg,
    /// 1200px and wider.
    Xl,
    /// 1600px and wider.
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, smallest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Minimum viewport width (px) at which this breakpoint is active.
    pub fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 576.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1200.0,
            Breakpoint::Xxl => 1600.0,
        }
    }

    /// The widest breakpoint active at `width`.
    pub fn for_width(width: f32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }
}

/// Grid configuration of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GridSpec {
    /// Column count used when no breakpoint-specific count applies.
    pub column: Option<u32>,
    /// Horizontal space between cells in px.
    pub gutter: u32,
    /// Column count below 576px.
    pub xs: Option<u32>,
    /// Column count from 576px.
    pub sm: Option<u32>,
    /// Column count from 768px.
    pub md: Option<u32>,
    /// Column count from 992px.
    pub lg: Option<u32>,
    /// Column count from 1200px.
    pub xl: Option<u32>,
    /// Column count from 1600px.
    pub xxl: Option<u32>,
}

impl GridSpec {
    /// Grid with a fixed column count.
    pub fn columns(column: u32) -> Self {
        Self {
            column: Some(column),
            ..Default::default()
        }
    }

    /// Set the gutter using builder pattern.
    pub fn with_gutter(mut self, gutter: u32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the column count for one breakpoint using builder pattern.
    pub fn with_breakpoint(mut self, breakpoint: Breakpoint, column: u32) -> Self {
        *self.slot_mut(breakpoint) = Some(column);
        self
    }

    /// Column count configured for exactly `breakpoint`.
    pub fn breakpoint_columns(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<u32> {
        match breakpoint {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }

    /// Reject column counts of zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.column == Some(0) {
            return Err(Error::invalid_grid("'column' must be at least 1"));
        }
        for breakpoint in Breakpoint::ALL {
            if self.breakpoint_columns(breakpoint) == Some(0) {
                return Err(Error::invalid_grid(format!(
                    "'{}' must be at least 1",
                    breakpoint_name(breakpoint)
                )));
            }
        }
        Ok(())
    }
}

fn breakpoint_name(breakpoint: Breakpoint) -> &'static str {
    match breakpoint {
        Breakpoint::Xs => "xs",
        Breakpoint::Sm => "sm",
        Breakpoint::Md => "md",
        Breakpoint::Lg => "lg",
        Breakpoint::Xl => "xl",
        Breakpoint::Xxl => "xxl",
    }
}

/// Position of an item inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPlacement {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based physical column (mirrored under RTL).
    pub column: usize,
}

/// Computes column counts, cell placement and cell styling for a grid.
#[derive(Debug, Clone)]
pub struct GridLayoutEngine {
    spec: GridSpec,
    breakpoint: Option<Breakpoint>,
}

impl GridLayoutEngine {
    /// Create an engine for `spec`; `viewport_width` selects the breakpoint.
    pub fn new(spec: GridSpec, viewport_width: Option<f32>) -> Self {
        Self {
            spec,
            breakpoint: viewport_width.map(Breakpoint::for_width),
        }
    }

    /// The grid specification.
    #[inline]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The active breakpoint, if a viewport width was given.
    #[inline]
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.breakpoint
    }

    /// Column count in effect.
    ///
    /// The active breakpoint's count wins; otherwise `column`; otherwise 1.
    pub fn columns(&self) -> usize {
        self.breakpoint
            .and_then(|bp| self.spec.breakpoint_columns(bp))
            .or(self.spec.column)
            .map(|c| c.max(1) as usize)
            .unwrap_or(1)
    }

    /// Whether cells get an explicit width.
    fn has_column_count(&self) -> bool {
        self.breakpoint
            .and_then(|bp| self.spec.breakpoint_columns(bp))
            .or(self.spec.column)
            .is_some()
    }

    /// Place the item at `index`.
    pub fn placement(&self, index: usize, direction: Direction) -> GridPlacement {
        let columns = self.columns();
        let column = index % columns;
        GridPlacement {
            row: index / columns,
            column: if direction.is_rtl() {
                columns - 1 - column
            } else {
                column
            },
        }
    }

    /// Inline style of the row wrapping all cells.
    pub fn row_style(&self) -> Vec<(String, String)> {
        if self.spec.gutter == 0 {
            return Vec::new();
        }
        let half = format!("-{}px", self.spec.gutter as f32 / 2.0);
        vec![
            ("margin-left".to_string(), half.clone()),
            ("margin-right".to_string(), half),
        ]
    }

    /// Inline style of one cell.
    pub fn cell_style(&self) -> Vec<(String, String)> {
        let mut style = Vec::new();
        if self.has_column_count() {
            let width = format!("{}%", 100.0 / self.columns() as f64);
            style.push(("width".to_string(), width.clone()));
            style.push(("max-width".to_string(), width));
        }
        if self.spec.gutter > 0 {
            let half = format!("{}px", self.spec.gutter as f32 / 2.0);
            style.push(("padding-left".to_string(), half.clone()));
            style.push(("padding-right".to_string(), half));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(575.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(576.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(800.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1000.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1200.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Xxl);
    }

    #[test]
    fn fixed_columns() {
        let engine = GridLayoutEngine::new(GridSpec::columns(2), None);
        assert_eq!(engine.columns(), 2);
        assert_eq!(
            engine.placement(3, Direction::Ltr),
            GridPlacement { row: 1, column: 1 }
        );
    }

    #[test]
    fn breakpoint_overrides_column() {
        let spec = GridSpec::columns(4)
            .with_breakpoint(Breakpoint::Xs, 1)
            .with_breakpoint(Breakpoint::Md, 2);

        assert_eq!(GridLayoutEngine::new(spec.clone(), Some(320.0)).columns(), 1);
        assert_eq!(GridLayoutEngine::new(spec.clone(), Some(800.0)).columns(), 2);
        // lg has no count of its own, so `column` applies
        let lg = GridLayoutEngine::new(spec.clone(), Some(1000.0));
        assert_eq!(lg.breakpoint(), Some(Breakpoint::Lg));
        assert_eq!(lg.spec().breakpoint_columns(Breakpoint::Lg), None);
        assert_eq!(lg.columns(), 4);

        let unsized_engine = GridLayoutEngine::new(spec.clone(), None);
        assert_eq!(unsized_engine.breakpoint(), None);
        assert_eq!(unsized_engine.spec(), &spec);
        assert_eq!(unsized_engine.columns(), 4);
    }

    #[test]
    fn no_counts_means_one_column_without_width() {
        let engine = GridLayoutEngine::new(GridSpec::default().with_gutter(16), None);
        assert_eq!(engine.columns(), 1);
        let style = engine.cell_style();
        assert!(style.iter().all(|(p, _)| p != "width"));
        assert!(style.contains(&("padding-left".to_string(), "8px".to_string())));
    }

    #[test]
    fn rtl_mirrors_columns() {
        let engine = GridLayoutEngine::new(GridSpec::columns(3), None);
        assert_eq!(
            engine.placement(0, Direction::Rtl),
            GridPlacement { row: 0, column: 2 }
        );
        assert_eq!(
            engine.placement(4, Direction::Rtl),
            GridPlacement { row: 1, column: 1 }
        );
    }

    #[test]
    fn cell_width_and_gutter() {
        let engine = GridLayoutEngine::new(GridSpec::columns(4).with_gutter(16), None);
        assert_eq!(
            engine.cell_style(),
            vec![
                ("width".to_string(), "25%".to_string()),
                ("max-width".to_string(), "25%".to_string()),
                ("padding-left".to_string(), "8px".to_string()),
                ("padding-right".to_string(), "8px".to_string()),
            ]
        );
        assert_eq!(
            engine.row_style(),
            vec![
                ("margin-left".to_string(), "-8px".to_string()),
                ("margin-right".to_string(), "-8px".to_string()),
            ]
        );
    }

    #[test]
    fn zero_columns_rejected() {
        assert!(matches!(
            GridSpec::columns(0).validate(),
            Err(Error::InvalidGrid(_))
        ));
        let err = GridSpec::columns(2)
            .with_breakpoint(Breakpoint::Lg, 0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("'lg'"));
    }
}
