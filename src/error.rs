//! Defines [`WkbError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::common::GeometryKind;
use crate::layout::Layout;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkbError {
    /// The first byte of a record is neither `0x00` (XDR) nor `0x01` (NDR).
    #[error("Unknown byte order marker: {value:#04x}")]
    UnknownByteOrder {
        /// The byte found where the marker was expected.
        value: u8,
    },

    /// The type code's base kind or dimensionality offset is not recognized.
    #[error("Unsupported WKB type code: {code}")]
    UnsupportedType {
        /// The raw 32-bit type code.
        code: u32,
    },

    /// A layout that cannot be expressed in the target representation.
    #[error("Unsupported layout: {layout}")]
    UnsupportedLayout {
        /// The offending layout.
        layout: Layout,
    },

    /// A declared repetition count exceeds the ceiling configured for its nesting level.
    ///
    /// This is what a crafted or corrupt input with an enormous length field produces.
    #[error("Geometry too large: declared count {n} at level {level} exceeds limit {limit}")]
    GeometryTooLarge {
        /// Nesting level of the count field, starting at 0 for the outermost one.
        level: usize,
        /// The declared count.
        n: usize,
        /// The ceiling for this level.
        limit: usize,
    },

    /// A record is nested deeper inside the outermost record than the configured maximum.
    #[error("Geometry nested too deeply: depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Nesting depth of the offending record, starting at 1 for children of the outermost one.
        depth: usize,
        /// The configured maximum depth.
        limit: usize,
    },

    /// Fewer bytes remain than a field or body requires.
    #[error("Unexpected end of WKB buffer")]
    Truncated,

    /// Coordinates or children of one geometry disagree on their layout.
    #[error("Layout mismatch: expected {expected}, found {found}")]
    LayoutMismatch {
        /// Layout of the enclosing geometry.
        expected: Layout,
        /// Layout of the offending coordinate or child.
        found: Layout,
    },

    /// A coordinate was built from the wrong number of ordinates for its layout.
    #[error("Layout {layout} needs {} ordinates, got {len}", layout.size())]
    InvalidCoord {
        /// Requested layout.
        layout: Layout,
        /// Number of ordinates supplied.
        len: usize,
    },

    /// A child record inside a multi-part geometry is of the wrong kind.
    #[error("Unexpected geometry type: expected {expected:?}, found {found:?}")]
    UnexpectedGeometryType {
        /// Kind required by the parent.
        expected: GeometryKind,
        /// Kind declared by the child record.
        found: GeometryKind,
    },

    /// A count does not fit in the 32-bit wire field.
    #[error("Overflow: count does not fit in a u32 WKB field.")]
    Overflow,

    /// [std::io::Error] from the sink during encoding.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Invalid limits configuration.
    #[error("Invalid limits configuration: {0}")]
    Config(String),
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;
