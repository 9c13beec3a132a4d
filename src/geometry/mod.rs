//! Owned geometry values encoded and decoded by this crate.
//!
//! Every value carries its [`Layout`]; constructors reject coordinates or children whose layout
//! differs from the container's.

mod collection;
mod coord;
mod linestring;
mod multi;
mod point;
mod polygon;

pub use collection::GeometryCollection;
pub use coord::Coord;
pub use linestring::LineString;
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

use crate::common::GeometryKind;
use crate::error::{WkbError, WkbResult};
use crate::layout::Layout;

pub(crate) fn check_layout(expected: Layout, found: Layout) -> WkbResult<()> {
    if expected != found {
        return Err(WkbError::LayoutMismatch { expected, found });
    }
    Ok(())
}

/// Any geometry that can be represented in WKB.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// WKB type 1.
    Point(Point),
    /// WKB type 2.
    LineString(LineString),
    /// WKB type 3.
    Polygon(Polygon),
    /// WKB type 4.
    MultiPoint(MultiPoint),
    /// WKB type 5.
    MultiLineString(MultiLineString),
    /// WKB type 6.
    MultiPolygon(MultiPolygon),
    /// WKB type 7.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The WKB base kind of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// The layout of this geometry and all of its parts.
    pub fn layout(&self) -> Layout {
        match self {
            Geometry::Point(g) => g.layout(),
            Geometry::LineString(g) => g.layout(),
            Geometry::Polygon(g) => g.layout(),
            Geometry::MultiPoint(g) => g.layout(),
            Geometry::MultiLineString(g) => g.layout(),
            Geometry::MultiPolygon(g) => g.layout(),
            Geometry::GeometryCollection(g) => g.layout(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
