use crate::error::WkbResult;
use crate::geometry::{check_layout, Coord};
use crate::layout::Layout;

/// An ordered sequence of coordinates.
///
/// Fewer than two coordinates is geometrically degenerate but representable.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    layout: Layout,
    coords: Vec<Coord>,
}

impl LineString {
    /// Create a line string, checking that every coordinate has `layout`.
    pub fn try_new(layout: Layout, coords: Vec<Coord>) -> WkbResult<Self> {
        for coord in &coords {
            check_layout(layout, coord.layout())?;
        }
        Ok(Self { layout, coords })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            coords: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, coords: Vec<Coord>) -> Self {
        Self { layout, coords }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The coordinates in order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The number of coordinates.
    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    /// Whether there are no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
