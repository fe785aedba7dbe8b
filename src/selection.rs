//! Rectangular cell selection over a fixed-size grid.
//!
//! Tracks an active cell and a selection rectangle, supports shift-click
//! extension and arrow-key navigation, and moves values in and out of the
//! selected rectangle through host-supplied accessors.
//!
//! # Coordinates
//! Rows and columns are 0-based and always clamped to the grid. A
//! [`SelectionRange`] stores anchor and head as given; every query
//! normalizes them to min/max bounds first.
//!
//! # Iteration Order
//! Bulk reads and writes walk the rectangle row-major: every column of a
//! row before the next row.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A grid cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

impl CellPosition {
    /// Creates a cell position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular selection between an anchor and a head cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    /// Anchor (fixed end during extension).
    pub start: CellPosition,
    /// Head (moving end during extension).
    pub end: CellPosition,
}

impl SelectionRange {
    /// Creates a range from anchor to head.
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one cell.
    pub fn single(cell: CellPosition) -> Self {
        Self::new(cell, cell)
    }

    /// Top-left corner of the normalized rectangle.
    pub fn top_left(&self) -> CellPosition {
        CellPosition::new(self.start.row.min(self.end.row), self.start.col.min(self.end.col))
    }

    /// Bottom-right corner of the normalized rectangle.
    pub fn bottom_right(&self) -> CellPosition {
        CellPosition::new(self.start.row.max(self.end.row), self.start.col.max(self.end.col))
    }

    /// Whether a cell lies inside the rectangle (inclusive on all bounds).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let tl = self.top_left();
        let br = self.bottom_right();
        (tl.row..=br.row).contains(&row) && (tl.col..=br.col).contains(&col)
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        let tl = self.top_left();
        let br = self.bottom_right();
        (br.row - tl.row + 1) * (br.col - tl.col + 1)
    }

    /// Cells of the rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellPosition> {
        let tl = self.top_left();
        let br = self.bottom_right();
        (tl.row..=br.row).flat_map(move |row| (tl.col..=br.col).map(move |col| CellPosition::new(row, col)))
    }
}

/// Arrow-key navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// Selection state for one grid instance.
///
/// Starts with neither an active cell nor a selection.
///
/// # Examples
///
/// ```
/// use u_timegrid::selection::SelectionModel;
///
/// let mut sel = SelectionModel::new(5, 5).unwrap();
/// sel.select_cell(2, 2, false);
/// sel.select_cell(0, 0, true);
/// assert!(sel.is_cell_selected(1, 1));
/// assert!(sel.is_cell_active(2, 2));
/// assert_eq!(sel.selected_cell_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    rows: usize,
    cols: usize,
    active: Option<CellPosition>,
    range: Option<SelectionRange>,
}

impl SelectionModel {
    /// Creates a selection model over a `rows x cols` grid.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if either axis is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            active: None,
            range: None,
        })
    }

    /// Grid size as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The active cell, if any.
    pub fn active_cell(&self) -> Option<CellPosition> {
        self.active
    }

    /// The current selection, if any.
    pub fn selected_range(&self) -> Option<SelectionRange> {
        self.range
    }

    /// Number of selected cells (0 without a selection).
    pub fn selected_cell_count(&self) -> usize {
        self.range.map_or(0, |r| r.cell_count())
    }

    /// Selects a cell.
    ///
    /// With `extend` and an existing active cell, the selection spans from
    /// the active cell to `(row, col)` and the active cell stays put.
    /// Otherwise `(row, col)` becomes the active cell and the only
    /// selected cell.
    pub fn select_cell(&mut self, row: usize, col: usize, extend: bool) {
        let target = self.clamp(row, col);
        match self.active {
            Some(anchor) if extend => {
                self.range = Some(SelectionRange::new(anchor, target));
            }
            _ => {
                self.active = Some(target);
                self.range = Some(SelectionRange::single(target));
            }
        }
    }

    /// Whether a cell is inside the current selection.
    pub fn is_cell_selected(&self, row: usize, col: usize) -> bool {
        self.range.is_some_and(|r| r.contains(row, col))
    }

    /// Whether a cell is the active cell.
    pub fn is_cell_active(&self, row: usize, col: usize) -> bool {
        self.active == Some(CellPosition::new(row, col))
    }

    /// Moves the active cell one step and collapses the selection onto it.
    ///
    /// Without an active cell, `(0, 0)` becomes active and the direction is
    /// not applied. Movement clamps at the grid edges.
    pub fn move_selection(&mut self, direction: Direction) {
        let Some(current) = self.active else {
            self.active = Some(CellPosition::default());
            return;
        };

        let next = match direction {
            Direction::Up => CellPosition::new(current.row.saturating_sub(1), current.col),
            Direction::Down => CellPosition::new((current.row + 1).min(self.rows - 1), current.col),
            Direction::Left => CellPosition::new(current.row, current.col.saturating_sub(1)),
            Direction::Right => CellPosition::new(current.row, (current.col + 1).min(self.cols - 1)),
        };

        self.active = Some(next);
        self.range = Some(SelectionRange::single(next));
    }

    /// Reads every selected cell through `reader`, row-major.
    ///
    /// Empty without a selection.
    pub fn get_selected_values<F>(&self, mut reader: F) -> Vec<String>
    where
        F: FnMut(usize, usize) -> String,
    {
        match self.range {
            Some(range) => range.cells().map(|c| reader(c.row, c.col)).collect(),
            None => Vec::new(),
        }
    }

    /// Writes `values` into the selected cells through `writer`, row-major.
    ///
    /// Stops when either the values or the cells run out; leftover cells
    /// are untouched and leftover values are dropped. Does nothing
    /// without a selection.
    pub fn set_selected_values<I, F>(&self, values: I, mut writer: F)
    where
        I: IntoIterator,
        F: FnMut(usize, usize, I::Item),
    {
        let Some(range) = self.range else {
            return;
        };
        for (cell, value) in range.cells().zip(values) {
            writer(cell.row, cell.col, value);
        }
    }

    fn clamp(&self, row: usize, col: usize) -> CellPosition {
        CellPosition::new(row.min(self.rows - 1), col.min(self.cols - 1))
    }
}
