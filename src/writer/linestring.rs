use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::LineString;
use crate::writer::coord::{coord_wkb_size, write_coords};
use crate::writer::header::{write_header, HEADER_BYTES};

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + 4 + geom.num_coords() * coord_wkb_size(geom.layout())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &LineString,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(writer, GeometryKind::LineString, geom.layout(), byte_order, None)?;
    write_line_string_body(writer, geom, byte_order)
}

/// numPoints followed by the coordinates. Also the encoding of a polygon ring.
pub(crate) fn write_line_string_body<W: Write>(
    writer: &mut W,
    geom: &LineString,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_count(writer, geom.num_coords(), byte_order)?;
    write_coords(writer, geom.coords(), byte_order)
}
