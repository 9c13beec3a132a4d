use std::io::Write;

use crate::byte_order::ByteOrder;
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::Point;
use crate::layout::Layout;
use crate::writer::coord::{coord_wkb_size, write_coords};
use crate::writer::header::{write_header, HEADER_BYTES};

/// The byte length of a WKBPoint
pub fn point_wkb_size(layout: Layout) -> usize {
    HEADER_BYTES + coord_wkb_size(layout)
}

/// Write a Point geometry to a Writer encoded as WKB
pub fn write_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Point,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(writer, GeometryKind::Point, geom.layout(), byte_order, None)?;
    write_point_body(writer, geom, byte_order)
}

pub(crate) fn write_point_body<W: Write>(
    writer: &mut W,
    geom: &Point,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_coords(writer, std::slice::from_ref(geom.coord()), byte_order)
}
