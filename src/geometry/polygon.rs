use crate::error::WkbResult;
use crate::geometry::{check_layout, LineString};
use crate::layout::Layout;

/// A polygon: an exterior ring followed by zero or more holes.
///
/// Rings are stored as [`LineString`]s; closure and orientation are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    layout: Layout,
    rings: Vec<LineString>,
}

impl Polygon {
    /// Create a polygon from its rings, exterior first.
    pub fn try_new(layout: Layout, rings: Vec<LineString>) -> WkbResult<Self> {
        for ring in &rings {
            check_layout(layout, ring.layout())?;
        }
        Ok(Self { layout, rings })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            rings: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, rings: Vec<LineString>) -> Self {
        Self { layout, rings }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The number of rings, including the exterior.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring, if there are any rings.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The holes. Empty if the polygon has no rings at all.
    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }
}
