use crate::error::WkbResult;
use crate::geometry::{check_layout, Geometry};
use crate::layout::Layout;

/// A heterogeneous collection of geometries sharing one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    layout: Layout,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Create the collection, checking that every member has `layout`.
    pub fn try_new(layout: Layout, geometries: Vec<Geometry>) -> WkbResult<Self> {
        for geometry in &geometries {
            check_layout(layout, geometry.layout())?;
        }
        Ok(Self { layout, geometries })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            geometries: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, geometries: Vec<Geometry>) -> Self {
        Self { layout, geometries }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The member geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// The number of member geometries.
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }
}
