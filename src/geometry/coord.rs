use crate::error::{WkbError, WkbResult};
use crate::layout::Layout;

/// A single coordinate: X, Y and, depending on its [`Layout`], Z and/or M.
///
/// Unused trailing ordinate slots are always zero, so derived equality compares only the
/// ordinates the layout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub(crate) layout: Layout,
    pub(crate) ordinates: [f64; 4],
}

impl Coord {
    /// Build a coordinate from exactly `layout.size()` ordinates.
    pub fn try_new(layout: Layout, ordinates: &[f64]) -> WkbResult<Self> {
        if ordinates.len() != layout.size() {
            return Err(WkbError::InvalidCoord {
                layout,
                len: ordinates.len(),
            });
        }
        let mut buf = [0.0; 4];
        buf[..ordinates.len()].copy_from_slice(ordinates);
        Ok(Self {
            layout,
            ordinates: buf,
        })
    }

    /// An XY coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            layout: Layout::XY,
            ordinates: [x, y, 0.0, 0.0],
        }
    }

    /// An XYZ coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            layout: Layout::XYZ,
            ordinates: [x, y, z, 0.0],
        }
    }

    /// An XYM coordinate.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            layout: Layout::XYM,
            ordinates: [x, y, m, 0.0],
        }
    }

    /// An XYZM coordinate.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            layout: Layout::XYZM,
            ordinates: [x, y, z, m],
        }
    }

    /// Which ordinates this coordinate carries.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The X ordinate.
    pub fn x(&self) -> f64 {
        self.ordinates[0]
    }

    /// The Y ordinate.
    pub fn y(&self) -> f64 {
        self.ordinates[1]
    }

    /// The Z ordinate, if the layout has one.
    pub fn z(&self) -> Option<f64> {
        self.layout.z_index().map(|i| self.ordinates[i])
    }

    /// The M ordinate, if the layout has one.
    pub fn m(&self) -> Option<f64> {
        self.layout.m_index().map(|i| self.ordinates[i])
    }

    /// The ordinates in wire order: X, Y, [Z], [M].
    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates[..self.layout.size()]
    }
}
