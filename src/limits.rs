//! Per-nesting-level ceilings on declared repetition counts.
//!
//! Every count field read while decoding (points in a line string, rings in a polygon, children
//! of a multi-part geometry) is checked against the ceiling for its nesting level before anything
//! sized by it is allocated or recursed into. Level 0 is the outermost count of a record; each
//! further count field along the path from the outermost record adds one.

use serde::{Deserialize, Serialize};

use crate::error::{WkbError, WkbResult};

/// The default ceiling per nesting level.
///
/// Levels deeper than this table reuse its last entry.
pub const MAX_GEOMETRY_ELEMENTS: [usize; 4] = [
    1 << 24, // a single LineString or MultiPoint, or the ring count of a Polygon
    1 << 22, // ring coordinates of a Polygon, members of a Multi*
    1 << 20, // ring coordinates inside a MultiPolygon
    1 << 16, // anything nested in a GeometryCollection
];

/// The default maximum number of records nested inside the outermost one.
pub const MAX_NESTING_DEPTH: usize = 64;

fn default_max_depth() -> usize {
    MAX_NESTING_DEPTH
}

/// Serialized form of [`GeometryLimits`]. Deserialization goes through [`GeometryLimits::try_new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LimitsConfig {
    levels: Vec<usize>,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

impl TryFrom<LimitsConfig> for GeometryLimits {
    type Error = WkbError;

    fn try_from(value: LimitsConfig) -> WkbResult<Self> {
        Ok(Self::try_new(value.levels)?.with_max_depth(value.max_depth))
    }
}

impl From<GeometryLimits> for LimitsConfig {
    fn from(value: GeometryLimits) -> Self {
        Self {
            levels: value.levels,
            max_depth: value.max_depth,
        }
    }
}

/// Ceilings on declared counts, indexed by nesting level, plus a ceiling on record nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LimitsConfig", into = "LimitsConfig")]
pub struct GeometryLimits {
    levels: Vec<usize>,
    max_depth: usize,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        Self {
            levels: MAX_GEOMETRY_ELEMENTS.to_vec(),
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl GeometryLimits {
    /// Create limits from an explicit table. The table must not be empty.
    pub fn try_new(levels: Vec<usize>) -> WkbResult<Self> {
        if levels.is_empty() {
            return Err(WkbError::Config(
                "at least one level must be configured".to_string(),
            ));
        }
        Ok(Self {
            levels,
            max_depth: MAX_NESTING_DEPTH,
        })
    }

    /// Limits that accept any count. Nesting depth stays bounded by [`MAX_NESTING_DEPTH`].
    pub fn unlimited() -> Self {
        Self {
            levels: vec![usize::MAX],
            max_depth: MAX_NESTING_DEPTH,
        }
    }

    /// Parse limits from JSON, e.g. `{"levels": [1024, 1024], "max_depth": 16}`.
    ///
    /// `max_depth` defaults to [`MAX_NESTING_DEPTH`] when omitted.
    pub fn from_json(json: &str) -> WkbResult<Self> {
        serde_json::from_str(json).map_err(|err| WkbError::Config(err.to_string()))
    }

    /// Replace the maximum nesting depth.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Replace the ceiling at `level`, extending the table with its current last entry if needed.
    pub fn with_level(mut self, level: usize, limit: usize) -> Self {
        if level >= self.levels.len() {
            let last = self.max_at_level(level);
            self.levels.resize(level + 1, last);
        }
        self.levels[level] = limit;
        self
    }

    /// The configured table.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// The maximum number of records nested inside the outermost one.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The ceiling applied to a count at `level`.
    pub fn max_at_level(&self, level: usize) -> usize {
        self.levels
            .get(level)
            .or(self.levels.last())
            .copied()
            .unwrap_or(0)
    }

    /// Check a declared count `n` at nesting `level`.
    pub fn check(&self, level: usize, n: usize) -> WkbResult<()> {
        let limit = self.max_at_level(level);
        if n > limit {
            tracing::debug!(level, n, limit, "rejecting oversized WKB count");
            return Err(WkbError::GeometryTooLarge { level, n, limit });
        }
        Ok(())
    }

    /// Check the nesting `depth` of a record about to be read.
    pub fn check_depth(&self, depth: usize) -> WkbResult<()> {
        if depth > self.max_depth {
            tracing::debug!(depth, limit = self.max_depth, "rejecting deeply nested WKB record");
            return Err(WkbError::NestingTooDeep {
                depth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}
