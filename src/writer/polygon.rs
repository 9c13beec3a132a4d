use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::Polygon;
use crate::writer::coord::coord_wkb_size;
use crate::writer::header::{write_header, HEADER_BYTES};
use crate::writer::linestring::write_line_string_body;

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let each_coord = coord_wkb_size(geom.layout());
    let rings: usize = geom
        .rings()
        .iter()
        .map(|ring| 4 + ring.num_coords() * each_coord)
        .sum();
    HEADER_BYTES + 4 + rings
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Polygon,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(writer, GeometryKind::Polygon, geom.layout(), byte_order, None)?;
    write_polygon_body(writer, geom, byte_order)
}

pub(crate) fn write_polygon_body<W: Write>(
    writer: &mut W,
    geom: &Polygon,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    // numRings
    write_count(writer, geom.num_rings(), byte_order)?;

    for ring in geom.rings() {
        write_line_string_body(writer, ring, byte_order)?;
    }
    Ok(())
}
