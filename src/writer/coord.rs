use std::io::Write;

use crate::byte_order::{write_f64, ByteOrder};
use crate::error::WkbResult;
use crate::geometry::Coord;
use crate::layout::Layout;

/// The byte length of one coordinate.
pub(crate) fn coord_wkb_size(layout: Layout) -> usize {
    layout.size() * 8
}

/// Write each coordinate's ordinates in order. No count prefix is written.
pub(crate) fn write_coords<W: Write>(
    writer: &mut W,
    coords: &[Coord],
    byte_order: ByteOrder,
) -> WkbResult<()> {
    for coord in coords {
        for ordinate in coord.ordinates() {
            write_f64(writer, *ordinate, byte_order)?;
        }
    }
    Ok(())
}
