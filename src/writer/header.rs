use std::io::Write;

use crate::byte_order::{write_i32, write_u32, write_u8, ByteOrder};
use crate::common::{encode_type, GeometryKind, EWKB_SRID_FLAG};
use crate::error::WkbResult;
use crate::layout::Layout;

/// Byte order marker plus type code.
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// Byte length of the optional SRID field.
pub(crate) const SRID_BYTES: usize = 4;

/// Write the byte order marker, the type code and, if given, the SRID.
pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    kind: GeometryKind,
    layout: Layout,
    byte_order: ByteOrder,
    srid: Option<i32>,
) -> WkbResult<()> {
    write_u8(writer, byte_order.into())?;

    let code = encode_type(kind, layout);
    match srid {
        Some(srid) => {
            write_u32(writer, code | EWKB_SRID_FLAG, byte_order)?;
            write_i32(writer, srid, byte_order)?;
        }
        None => write_u32(writer, code, byte_order)?,
    }
    Ok(())
}
