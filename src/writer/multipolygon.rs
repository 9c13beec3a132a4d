use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::MultiPolygon;
use crate::writer::header::{write_header, HEADER_BYTES};
use crate::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for polygon in geom.polygons() {
        sum += polygon_wkb_size(polygon);
    }
    sum
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPolygon,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(
        writer,
        GeometryKind::MultiPolygon,
        geom.layout(),
        byte_order,
        None,
    )?;
    write_multi_polygon_body(writer, geom, byte_order)
}

pub(crate) fn write_multi_polygon_body<W: Write>(
    writer: &mut W,
    geom: &MultiPolygon,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    // numPolygons
    write_count(writer, geom.num_polygons(), byte_order)?;

    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon, byte_order)?;
    }
    Ok(())
}
