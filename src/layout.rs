use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which ordinates beyond X and Y a coordinate carries.
///
/// Ordinates are always stored in the order X, Y, [Z], [M].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Layout {
    /// All layouts, in type-code offset order.
    pub const ALL: [Layout; 4] = [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM];

    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Layout::XY => 2,
            Layout::XYZ => 3,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// Whether coordinates carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Layout::XYZ | Layout::XYZM)
    }

    /// Whether coordinates carry an M ordinate.
    pub fn has_m(&self) -> bool {
        matches!(self, Layout::XYM | Layout::XYZM)
    }

    /// Index of the Z ordinate within a coordinate, if present.
    pub fn z_index(&self) -> Option<usize> {
        self.has_z().then_some(2)
    }

    /// Index of the M ordinate within a coordinate, if present.
    pub fn m_index(&self) -> Option<usize> {
        match self {
            Layout::XYM => Some(2),
            Layout::XYZM => Some(3),
            _ => None,
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}
