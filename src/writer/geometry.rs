use std::io::Write;

use crate::byte_order::ByteOrder;
use crate::error::WkbResult;
use crate::geometry::Geometry;
use crate::writer::geometrycollection::{
    geometry_collection_wkb_size, write_geometry_collection_body,
};
use crate::writer::header::write_header;
use crate::writer::linestring::{line_string_wkb_size, write_line_string_body};
use crate::writer::multilinestring::{multi_line_string_wkb_size, write_multi_line_string_body};
use crate::writer::multipoint::{multi_point_wkb_size, write_multi_point_body};
use crate::writer::multipolygon::{multi_polygon_wkb_size, write_multi_polygon_body};
use crate::writer::point::{point_wkb_size, write_point_body};
use crate::writer::polygon::{polygon_wkb_size, write_polygon_body};

/// The byte length of a WKB geometry of any kind
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    use Geometry::*;
    match geom {
        Point(g) => point_wkb_size(g.layout()),
        LineString(g) => line_string_wkb_size(g),
        Polygon(g) => polygon_wkb_size(g),
        MultiPoint(g) => multi_point_wkb_size(g),
        MultiLineString(g) => multi_line_string_wkb_size(g),
        MultiPolygon(g) => multi_polygon_wkb_size(g),
        GeometryCollection(g) => geometry_collection_wkb_size(g),
    }
}

/// Write a geometry of any kind to a Writer encoded as WKB
pub fn write_geometry_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Geometry,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_geometry_with_srid(writer, geom, byte_order, None)
}

pub(crate) fn write_geometry_with_srid<W: Write>(
    writer: &mut W,
    geom: &Geometry,
    byte_order: ByteOrder,
    srid: Option<i32>,
) -> WkbResult<()> {
    write_header(writer, geom.kind(), geom.layout(), byte_order, srid)?;

    use Geometry::*;
    match geom {
        Point(g) => write_point_body(writer, g, byte_order),
        LineString(g) => write_line_string_body(writer, g, byte_order),
        Polygon(g) => write_polygon_body(writer, g, byte_order),
        MultiPoint(g) => write_multi_point_body(writer, g, byte_order),
        MultiLineString(g) => write_multi_line_string_body(writer, g, byte_order),
        MultiPolygon(g) => write_multi_polygon_body(writer, g, byte_order),
        GeometryCollection(g) => write_geometry_collection_body(writer, g, byte_order),
    }
}

