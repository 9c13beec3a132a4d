use crate::byte_order::ByteOrder;
use crate::common::{decode_type, GeometryKind, EWKB_SRID_FLAG};
use crate::error::{WkbError, WkbResult};
use crate::geometry::{
    check_layout, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::layout::Layout;
use crate::limits::GeometryLimits;
use crate::reader::coord::{read_coord, read_coords};
use crate::reader::cursor::WkbCursor;

/// The smallest possible nested record: header plus one count field.
const MIN_RECORD_BYTES: usize = 1 + 4 + 4;

/// Byte length of a ring or line string body with no coordinates.
const MIN_RING_BYTES: usize = 4;

/// The decoded header of one WKB record.
#[derive(Debug, Clone, Copy)]
struct Header {
    byte_order: ByteOrder,
    kind: GeometryKind,
    layout: Layout,
    srid: Option<i32>,
}

/// Reserve for at most as many elements as the remaining input could possibly hold.
fn bounded_capacity(count: usize, remaining: usize, min_bytes: usize) -> usize {
    count.min(remaining / min_bytes)
}

/// Recursive reader over one buffer.
///
/// `level` arguments are the nesting level of the first count field the record being read will
/// encounter. Each count field passed on the way down increments it by one. `depth` counts the
/// records currently open below the outermost one.
pub(crate) struct GeometryReader<'a, 'b> {
    cursor: WkbCursor<'a>,
    limits: &'b GeometryLimits,
    depth: usize,
}

impl<'a, 'b> GeometryReader<'a, 'b> {
    pub(crate) fn new(buf: &'a [u8], limits: &'b GeometryLimits) -> Self {
        Self {
            cursor: WkbCursor::new(buf),
            limits,
            depth: 0,
        }
    }

    /// The number of bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Read the outermost record, returning its SRID if `allow_srid` and one is present.
    pub(crate) fn read_root(&mut self, allow_srid: bool) -> WkbResult<(Geometry, Option<i32>)> {
        let header = self.read_header(allow_srid)?;
        let geometry = self.read_body(header, 0)?;
        Ok((geometry, header.srid))
    }

    fn read_nested(&mut self, level: usize) -> WkbResult<Geometry> {
        self.limits.check_depth(self.depth + 1)?;
        self.depth += 1;
        let geometry = self
            .read_header(false)
            .and_then(|header| self.read_body(header, level));
        self.depth -= 1;
        geometry
    }

    fn read_header(&mut self, allow_srid: bool) -> WkbResult<Header> {
        let marker = self.cursor.read_u8()?;
        let byte_order = ByteOrder::try_from(marker).map_err(|err| {
            tracing::debug!(marker, offset = self.cursor.position() - 1, "unknown WKB byte order");
            err
        })?;

        let mut code = self.cursor.read_u32(byte_order)?;
        let srid = if allow_srid && code & EWKB_SRID_FLAG != 0 {
            code &= !EWKB_SRID_FLAG;
            Some(self.cursor.read_i32(byte_order)?)
        } else {
            None
        };

        let (kind, layout) = decode_type(code).map_err(|err| {
            tracing::debug!(code, "unsupported WKB type code");
            err
        })?;
        tracing::trace!(?byte_order, ?kind, %layout, ?srid, "read WKB header");

        Ok(Header {
            byte_order,
            kind,
            layout,
            srid,
        })
    }

    /// Read a count field and check it against the guard for `level`.
    fn read_count(&mut self, byte_order: ByteOrder, level: usize) -> WkbResult<usize> {
        let n = self.cursor.read_u32(byte_order)? as usize;
        self.limits.check(level, n)?;
        Ok(n)
    }

    fn read_body(&mut self, header: Header, level: usize) -> WkbResult<Geometry> {
        let Header {
            byte_order,
            kind,
            layout,
            ..
        } = header;
        let geometry = match kind {
            GeometryKind::Point => {
                Geometry::Point(Point::new(read_coord(&mut self.cursor, layout, byte_order)?))
            }
            GeometryKind::LineString => {
                Geometry::LineString(self.read_line_string_body(layout, byte_order, level)?)
            }
            GeometryKind::Polygon => {
                Geometry::Polygon(self.read_polygon_body(layout, byte_order, level)?)
            }
            GeometryKind::MultiPoint => {
                Geometry::MultiPoint(self.read_multi_point_body(layout, byte_order, level)?)
            }
            GeometryKind::MultiLineString => Geometry::MultiLineString(
                self.read_multi_line_string_body(layout, byte_order, level)?,
            ),
            GeometryKind::MultiPolygon => {
                Geometry::MultiPolygon(self.read_multi_polygon_body(layout, byte_order, level)?)
            }
            GeometryKind::GeometryCollection => Geometry::GeometryCollection(
                self.read_geometry_collection_body(layout, byte_order, level)?,
            ),
        };
        Ok(geometry)
    }

    fn read_line_string_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<LineString> {
        let num_points = self.cursor.read_u32(byte_order)? as usize;
        let coords = read_coords(
            &mut self.cursor,
            num_points,
            level,
            self.limits,
            layout,
            byte_order,
        )?;
        Ok(LineString::new_unchecked(layout, coords))
    }

    fn read_polygon_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<Polygon> {
        let num_rings = self.read_count(byte_order, level)?;
        let mut rings = Vec::with_capacity(bounded_capacity(
            num_rings,
            self.cursor.remaining(),
            MIN_RING_BYTES,
        ));
        for _ in 0..num_rings {
            rings.push(self.read_line_string_body(layout, byte_order, level + 1)?);
        }
        Ok(Polygon::new_unchecked(layout, rings))
    }

    fn unexpected_child(expected: GeometryKind, found: &Geometry) -> WkbError {
        WkbError::UnexpectedGeometryType {
            expected,
            found: found.kind(),
        }
    }

    fn read_multi_point_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<MultiPoint> {
        let num_points = self.read_count(byte_order, level)?;
        let mut points = Vec::with_capacity(bounded_capacity(
            num_points,
            self.cursor.remaining(),
            MIN_RECORD_BYTES,
        ));
        for _ in 0..num_points {
            match self.read_nested(level + 1)? {
                Geometry::Point(point) => {
                    check_layout(layout, point.layout())?;
                    points.push(point);
                }
                other => return Err(Self::unexpected_child(GeometryKind::Point, &other)),
            }
        }
        Ok(MultiPoint::new_unchecked(layout, points))
    }

    fn read_multi_line_string_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<MultiLineString> {
        let num_line_strings = self.read_count(byte_order, level)?;
        let mut line_strings = Vec::with_capacity(bounded_capacity(
            num_line_strings,
            self.cursor.remaining(),
            MIN_RECORD_BYTES,
        ));
        for _ in 0..num_line_strings {
            match self.read_nested(level + 1)? {
                Geometry::LineString(line_string) => {
                    check_layout(layout, line_string.layout())?;
                    line_strings.push(line_string);
                }
                other => return Err(Self::unexpected_child(GeometryKind::LineString, &other)),
            }
        }
        Ok(MultiLineString::new_unchecked(layout, line_strings))
    }

    fn read_multi_polygon_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<MultiPolygon> {
        let num_polygons = self.read_count(byte_order, level)?;
        let mut polygons = Vec::with_capacity(bounded_capacity(
            num_polygons,
            self.cursor.remaining(),
            MIN_RECORD_BYTES,
        ));
        for _ in 0..num_polygons {
            match self.read_nested(level + 1)? {
                Geometry::Polygon(polygon) => {
                    check_layout(layout, polygon.layout())?;
                    polygons.push(polygon);
                }
                other => return Err(Self::unexpected_child(GeometryKind::Polygon, &other)),
            }
        }
        Ok(MultiPolygon::new_unchecked(layout, polygons))
    }

    fn read_geometry_collection_body(
        &mut self,
        layout: Layout,
        byte_order: ByteOrder,
        level: usize,
    ) -> WkbResult<GeometryCollection> {
        let num_geometries = self.read_count(byte_order, level)?;
        let mut geometries = Vec::with_capacity(bounded_capacity(
            num_geometries,
            self.cursor.remaining(),
            MIN_RECORD_BYTES,
        ));
        for _ in 0..num_geometries {
            let child = self.read_nested(level + 1)?;
            check_layout(layout, child.layout())?;
            geometries.push(child);
        }
        Ok(GeometryCollection::new_unchecked(layout, geometries))
    }
}
