//! One-call entry points using the default [`WkbReader`] and [`WkbWriter`] configuration.

use std::io::Write;

use crate::byte_order::ByteOrder;
use crate::error::WkbResult;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::reader::WkbReader;
use crate::writer::*;

/// Encode `geom` as ISO WKB in `byte_order`.
pub fn to_wkb(geom: &Geometry, byte_order: ByteOrder) -> WkbResult<Vec<u8>> {
    WkbWriter::new(byte_order).to_vec(geom)
}

/// Encode `geom` as ISO WKB in `byte_order` into `writer`.
pub fn write_wkb<W: Write>(
    writer: &mut W,
    geom: &Geometry,
    byte_order: ByteOrder,
) -> WkbResult<()> {
    WkbWriter::new(byte_order).write(writer, geom)
}

/// Decode one ISO WKB record with the default limits. Trailing bytes are ignored.
pub fn from_wkb(buf: &[u8]) -> WkbResult<Geometry> {
    WkbReader::new().read(buf)
}

/// Types that can be encoded as WKB.
pub trait ToWKB {
    /// Encode `self` as one ISO WKB record in `byte_order`.
    fn to_wkb(&self, byte_order: ByteOrder) -> WkbResult<Vec<u8>>;
}

impl ToWKB for Geometry {
    fn to_wkb(&self, byte_order: ByteOrder) -> WkbResult<Vec<u8>> {
        to_wkb(self, byte_order)
    }
}

impl ToWKB for Point {
    fn to_wkb(&self, byte_order: ByteOrder) -> WkbResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(point_wkb_size(self.layout()));
        write_point_as_wkb(&mut buf, self, byte_order)?;
        Ok(buf)
    }
}

macro_rules! impl_to_wkb {
    ($type:ty, $size_fn:ident, $write_fn:ident) => {
        impl ToWKB for $type {
            fn to_wkb(&self, byte_order: ByteOrder) -> WkbResult<Vec<u8>> {
                let mut buf = Vec::with_capacity($size_fn(self));
                $write_fn(&mut buf, self, byte_order)?;
                Ok(buf)
            }
        }
    };
}

impl_to_wkb!(LineString, line_string_wkb_size, write_line_string_as_wkb);
impl_to_wkb!(Polygon, polygon_wkb_size, write_polygon_as_wkb);
impl_to_wkb!(MultiPoint, multi_point_wkb_size, write_multi_point_as_wkb);
impl_to_wkb!(
    MultiLineString,
    multi_line_string_wkb_size,
    write_multi_line_string_as_wkb
);
impl_to_wkb!(MultiPolygon, multi_polygon_wkb_size, write_multi_polygon_as_wkb);
impl_to_wkb!(
    GeometryCollection,
    geometry_collection_wkb_size,
    write_geometry_collection_as_wkb
);

/// Types that can be decoded from WKB.
pub trait FromWKB: Sized {
    /// Decode one ISO WKB record from the front of `buf`.
    fn from_wkb(buf: &[u8]) -> WkbResult<Self>;
}

impl FromWKB for Geometry {
    fn from_wkb(buf: &[u8]) -> WkbResult<Self> {
        from_wkb(buf)
    }
}
