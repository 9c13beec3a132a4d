use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::MultiPoint;
use crate::writer::header::{write_header, HEADER_BYTES};
use crate::writer::point::{point_wkb_size, write_point_as_wkb};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + 4 + geom.num_points() * point_wkb_size(geom.layout())
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPoint,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(writer, GeometryKind::MultiPoint, geom.layout(), byte_order, None)?;
    write_multi_point_body(writer, geom, byte_order)
}

pub(crate) fn write_multi_point_body<W: Write>(
    writer: &mut W,
    geom: &MultiPoint,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    // numPoints
    write_count(writer, geom.num_points(), byte_order)?;

    // Each point is a full record with its own byte order and type code
    for point in geom.points() {
        write_point_as_wkb(writer, point, byte_order)?;
    }
    Ok(())
}
