use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};
use crate::layout::Layout;

/// Type-code bit signalling a 4-byte SRID after the type code (EWKB).
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// The geometry kinds supported by WKB, with their ISO base type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryKind {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl Layout {
    /// The ISO dimensionality offset added to the base type code.
    pub fn wkb_offset(&self) -> u32 {
        match self {
            Layout::XY => 0,
            Layout::XYZ => 1000,
            Layout::XYM => 2000,
            Layout::XYZM => 3000,
        }
    }

    fn from_wkb_offset(offset: u32) -> Option<Self> {
        match offset {
            0 => Some(Layout::XY),
            1000 => Some(Layout::XYZ),
            2000 => Some(Layout::XYM),
            3000 => Some(Layout::XYZM),
            _ => None,
        }
    }
}

/// Combine a geometry kind and layout into an ISO WKB type code.
pub fn encode_type(kind: GeometryKind, layout: Layout) -> u32 {
    u32::from(kind) + layout.wkb_offset()
}

/// Split an ISO WKB type code into its geometry kind and layout.
pub fn decode_type(code: u32) -> WkbResult<(GeometryKind, Layout)> {
    let layout = Layout::from_wkb_offset(code / 1000 * 1000)
        .ok_or(WkbError::UnsupportedType { code })?;
    let kind = GeometryKind::try_from_primitive(code % 1000)
        .map_err(|_| WkbError::UnsupportedType { code })?;
    Ok((kind, layout))
}
