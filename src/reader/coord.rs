use crate::byte_order::ByteOrder;
use crate::error::{WkbError, WkbResult};
use crate::geometry::Coord;
use crate::layout::Layout;
use crate::limits::GeometryLimits;
use crate::reader::cursor::WkbCursor;

/// Read one coordinate of `layout`.
pub(crate) fn read_coord(
    cursor: &mut WkbCursor,
    layout: Layout,
    byte_order: ByteOrder,
) -> WkbResult<Coord> {
    let mut ordinates = [0.0; 4];
    for ordinate in ordinates.iter_mut().take(layout.size()) {
        *ordinate = cursor.read_f64(byte_order)?;
    }
    Ok(Coord { layout, ordinates })
}

/// Read `count` coordinates, after checking `count` against the guard at `level`.
pub(crate) fn read_coords(
    cursor: &mut WkbCursor,
    count: usize,
    level: usize,
    limits: &GeometryLimits,
    layout: Layout,
    byte_order: ByteOrder,
) -> WkbResult<Vec<Coord>> {
    limits.check(level, count)?;

    // The coordinate block has a fixed size, so a short buffer can be rejected before allocating.
    let needed = count
        .checked_mul(layout.size() * 8)
        .ok_or(WkbError::Truncated)?;
    if needed > cursor.remaining() {
        return Err(WkbError::Truncated);
    }

    let mut coords = Vec::with_capacity(count);
    for _ in 0..count {
        coords.push(read_coord(cursor, layout, byte_order)?);
    }
    Ok(coords)
}
