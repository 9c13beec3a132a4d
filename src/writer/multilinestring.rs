use std::io::Write;

use crate::byte_order::{write_count, ByteOrder};
use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::MultiLineString;
use crate::writer::header::{write_header, HEADER_BYTES};
use crate::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for line_string in geom.line_strings() {
        sum += line_string_wkb_size(line_string);
    }
    sum
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiLineString,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    write_header(
        writer,
        GeometryKind::MultiLineString,
        geom.layout(),
        byte_order,
        None,
    )?;
    write_multi_line_string_body(writer, geom, byte_order)
}

pub(crate) fn write_multi_line_string_body<W: Write>(
    writer: &mut W,
    geom: &MultiLineString,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    // numLineStrings
    write_count(writer, geom.num_line_strings(), byte_order)?;

    for line_string in geom.line_strings() {
        write_line_string_as_wkb(writer, line_string, byte_order)?;
    }
    Ok(())
}
