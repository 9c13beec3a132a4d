//! Decode ISO WKB into owned geometries, guarding every declared count before allocating.

mod coord;
mod cursor;
mod geometry;

use serde::{Deserialize, Serialize};

use crate::error::WkbResult;
use crate::geometry::Geometry;
use crate::limits::GeometryLimits;
use crate::reader::geometry::GeometryReader;

/// The result of decoding one record from the front of a buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded geometry.
    pub geometry: Geometry,
    /// The EWKB SRID of the outermost record, if the reader accepts one and it was present.
    pub srid: Option<i32>,
    /// The number of bytes the record occupied. Anything after it is left to the caller.
    pub consumed: usize,
}

/// A configured WKB decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WkbReader {
    #[serde(default)]
    limits: GeometryLimits,
    #[serde(default)]
    allow_srid: bool,
}

impl WkbReader {
    /// A strict ISO WKB reader with the default [`GeometryLimits`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the count and depth ceilings.
    pub fn with_limits(self, limits: GeometryLimits) -> Self {
        Self { limits, ..self }
    }

    /// Accept the EWKB SRID flag (`0x2000_0000`) on the outermost record's type code.
    pub fn with_srid(self, allow_srid: bool) -> Self {
        Self { allow_srid, ..self }
    }

    /// The configured ceilings.
    pub fn limits(&self) -> &GeometryLimits {
        &self.limits
    }

    /// Decode one record from the front of `buf`.
    pub fn decode(&self, buf: &[u8]) -> WkbResult<Decoded> {
        let mut reader = GeometryReader::new(buf, &self.limits);
        let (geometry, srid) = reader.read_root(self.allow_srid)?;
        Ok(Decoded {
            geometry,
            srid,
            consumed: reader.position(),
        })
    }

    /// Decode one record from the front of `buf`, ignoring any trailing bytes.
    pub fn read(&self, buf: &[u8]) -> WkbResult<Geometry> {
        Ok(self.decode(buf)?.geometry)
    }

    /// Decode one record and report how many bytes it used.
    pub fn read_prefix(&self, buf: &[u8]) -> WkbResult<(Geometry, usize)> {
        let decoded = self.decode(buf)?;
        Ok((decoded.geometry, decoded.consumed))
    }
}
