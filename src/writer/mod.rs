//! Encode geometries to ISO WKB, optionally carrying an EWKB SRID on the outermost record.

mod coord;
mod geometry;
mod geometrycollection;
mod header;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use crate::byte_order::ByteOrder;
use crate::error::WkbResult;
use crate::geometry::Geometry;

/// A configured WKB encoder.
///
/// Nested records (children of multi-part geometries and collections) are written in the same
/// byte order as the outermost record and never carry an SRID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WkbWriter {
    byte_order: ByteOrder,
    srid: Option<i32>,
}

impl WkbWriter {
    /// An ISO WKB writer using `byte_order` for every record.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            srid: None,
        }
    }

    /// Emit an EWKB SRID on the outermost record.
    pub fn with_srid(self, srid: i32) -> Self {
        Self {
            srid: Some(srid),
            ..self
        }
    }

    /// The byte order of every written record.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The SRID written on the outermost record, if any.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    /// The exact number of bytes [`Self::write`] produces for `geom`.
    pub fn encoded_size(&self, geom: &Geometry) -> usize {
        let srid_bytes = self.srid.map_or(0, |_| header::SRID_BYTES);
        geometry_wkb_size(geom) + srid_bytes
    }

    /// Write one record for `geom` to `writer`.
    pub fn write<W: Write>(&self, writer: &mut W, geom: &Geometry) -> WkbResult<()> {
        geometry::write_geometry_with_srid(writer, geom, self.byte_order, self.srid)
    }

    /// Encode `geom` into a new buffer.
    pub fn to_vec(&self, geom: &Geometry) -> WkbResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_size(geom));
        self.write(&mut buf, geom)?;
        Ok(buf)
    }
}
