//! A Rust implementation of ISO-flavored
//! [Well-Known Binary](https://libgeos.org/specifications/wkb/) (WKB) encoding and decoding for
//! simple-feature geometries in XY, XYZ, XYM and XYZM layouts.
//!
//! Decoding checks every declared repetition count against a per-nesting-level ceiling
//! ([`GeometryLimits`]) before allocating, so crafted input cannot force huge reservations.
//!
//! ```
//! use geowkb::{from_wkb, to_wkb, ByteOrder, Coord, Geometry, Point};
//!
//! let point: Geometry = Point::new(Coord::xy(1., 2.)).into();
//! let buf = to_wkb(&point, ByteOrder::BigEndian).unwrap();
//! assert_eq!(buf.len(), 21);
//! assert_eq!(from_wkb(&buf).unwrap(), point);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use api::{from_wkb, to_wkb, write_wkb, FromWKB, ToWKB};
pub use byte_order::ByteOrder;
pub use common::{decode_type, encode_type, GeometryKind};
pub use error::{WkbError, WkbResult};
pub use geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
pub use layout::Layout;
pub use limits::{GeometryLimits, MAX_GEOMETRY_ELEMENTS, MAX_NESTING_DEPTH};
pub use reader::{Decoded, WkbReader};
pub use writer::WkbWriter;

pub mod api;
pub mod byte_order;
pub mod common;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod layout;
pub mod limits;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;
