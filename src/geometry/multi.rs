use crate::error::WkbResult;
use crate::geometry::{check_layout, LineString, Point, Polygon};
use crate::layout::Layout;

/// A collection of points sharing one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    layout: Layout,
    points: Vec<Point>,
}

impl MultiPoint {
    /// Create the collection, checking that every member has `layout`.
    pub fn try_new(layout: Layout, points: Vec<Point>) -> WkbResult<Self> {
        for point in &points {
            check_layout(layout, point.layout())?;
        }
        Ok(Self { layout, points })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            points: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, points: Vec<Point>) -> Self {
        Self { layout, points }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The member points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of member points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

/// A collection of line strings sharing one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    layout: Layout,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    /// Create the collection, checking that every member has `layout`.
    pub fn try_new(layout: Layout, line_strings: Vec<LineString>) -> WkbResult<Self> {
        for line_string in &line_strings {
            check_layout(layout, line_string.layout())?;
        }
        Ok(Self {
            layout,
            line_strings,
        })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            line_strings: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, line_strings: Vec<LineString>) -> Self {
        Self {
            layout,
            line_strings,
        }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The member line strings.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// The number of member line strings.
    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }
}

/// A collection of polygons sharing one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    layout: Layout,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Create the collection, checking that every member has `layout`.
    pub fn try_new(layout: Layout, polygons: Vec<Polygon>) -> WkbResult<Self> {
        for polygon in &polygons {
            check_layout(layout, polygon.layout())?;
        }
        Ok(Self { layout, polygons })
    }

    /// An empty value of `layout`.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            polygons: vec![],
        }
    }

    pub(crate) fn new_unchecked(layout: Layout, polygons: Vec<Polygon>) -> Self {
        Self { layout, polygons }
    }

    /// The layout shared by every coordinate.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The number of member polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }
}
