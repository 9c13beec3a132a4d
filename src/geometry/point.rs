use crate::geometry::Coord;
use crate::layout::Layout;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Coord,
}

impl Point {
    /// A point at `coord`, taking its layout.
    pub fn new(coord: Coord) -> Self {
        Self { coord }
    }

    /// The layout of the point's coordinate.
    pub fn layout(&self) -> Layout {
        self.coord.layout()
    }

    /// The position of this point.
    pub fn coord(&self) -> &Coord {
        &self.coord
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::new(value)
    }
}
