use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::GeometryCollection;
use crate::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::writer::header::{write_header, HEADER_BYTES};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for inner_geom in geom.geometries() {
        sum += geometry_wkb_size(inner_geom);
    }
    sum
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write>(
    writer: &mut W,
    geom: &GeometryCollection,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(
        writer,
        GeometryKind::GeometryCollection,
        geom.layout(),
        byte_order,
        None,
    )?;
    write_geometry_collection_body(writer, geom, byte_order)
}

pub(crate) fn write_geometry_collection_body<W: Write>(
    writer: &mut W,
    geom: &GeometryCollection,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    // numGeometries
    write_count(writer, geom.num_geometries(), byte_order)?;

    for inner_geom in geom.geometries() {
        write_geometry_as_wkb(writer, inner_geom, byte_order)?;
    }
    Ok(())
}
