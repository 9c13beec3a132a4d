//! Conversions to and from [`geo`] (geo-types) values.
//!
//! geo-types only models X and Y, so conversion into it is limited to [`Layout::XY`] geometries.
//! Values coming from geo-types are always XY.

use crate::error::{WkbError, WkbResult};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use crate::layout::Layout;

fn coord_from_geo(coord: &::geo::Coord<f64>) -> Coord {
    Coord::xy(coord.x, coord.y)
}

fn line_string_from_geo(line_string: &::geo::LineString<f64>) -> LineString {
    LineString::new_unchecked(Layout::XY, line_string.0.iter().map(coord_from_geo).collect())
}

fn polygon_from_geo(polygon: &::geo::Polygon<f64>) -> Polygon {
    let exterior = polygon.exterior();
    if exterior.0.is_empty() && polygon.interiors().is_empty() {
        return Polygon::empty(Layout::XY);
    }
    let rings = std::iter::once(exterior)
        .chain(polygon.interiors())
        .map(line_string_from_geo)
        .collect();
    Polygon::new_unchecked(Layout::XY, rings)
}

impl From<&::geo::Geometry<f64>> for Geometry {
    fn from(value: &::geo::Geometry<f64>) -> Self {
        match value {
            ::geo::Geometry::Point(point) => Point::new(coord_from_geo(&point.0)).into(),
            ::geo::Geometry::Line(line) => LineString::new_unchecked(
                Layout::XY,
                vec![coord_from_geo(&line.start), coord_from_geo(&line.end)],
            )
            .into(),
            ::geo::Geometry::LineString(line_string) => line_string_from_geo(line_string).into(),
            ::geo::Geometry::Polygon(polygon) => polygon_from_geo(polygon).into(),
            ::geo::Geometry::MultiPoint(multi_point) => MultiPoint::new_unchecked(
                Layout::XY,
                multi_point
                    .0
                    .iter()
                    .map(|point| Point::new(coord_from_geo(&point.0)))
                    .collect(),
            )
            .into(),
            ::geo::Geometry::MultiLineString(multi_line_string) => MultiLineString::new_unchecked(
                Layout::XY,
                multi_line_string.0.iter().map(line_string_from_geo).collect(),
            )
            .into(),
            ::geo::Geometry::MultiPolygon(multi_polygon) => MultiPolygon::new_unchecked(
                Layout::XY,
                multi_polygon.0.iter().map(polygon_from_geo).collect(),
            )
            .into(),
            ::geo::Geometry::GeometryCollection(collection) => GeometryCollection::new_unchecked(
                Layout::XY,
                collection.0.iter().map(Geometry::from).collect(),
            )
            .into(),
            ::geo::Geometry::Rect(rect) => polygon_from_geo(&rect.to_polygon()).into(),
            ::geo::Geometry::Triangle(triangle) => polygon_from_geo(&triangle.to_polygon()).into(),
        }
    }
}

impl From<::geo::Geometry<f64>> for Geometry {
    fn from(value: ::geo::Geometry<f64>) -> Self {
        Self::from(&value)
    }
}

fn coord_to_geo(coord: &Coord) -> ::geo::Coord<f64> {
    ::geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

fn line_string_to_geo(line_string: &LineString) -> ::geo::LineString<f64> {
    ::geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

fn polygon_to_geo(polygon: &Polygon) -> ::geo::Polygon<f64> {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| ::geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    ::geo::Polygon::new(exterior, interiors)
}

impl TryFrom<&Geometry> for ::geo::Geometry<f64> {
    type Error = WkbError;

    /// Fails with [`WkbError::UnsupportedLayout`] unless the geometry is XY.
    fn try_from(value: &Geometry) -> WkbResult<Self> {
        let layout = value.layout();
        if layout != Layout::XY {
            return Err(WkbError::UnsupportedLayout { layout });
        }
        let geom = match value {
            Geometry::Point(point) => {
                ::geo::Geometry::Point(::geo::Point(coord_to_geo(point.coord())))
            }
            Geometry::LineString(line_string) => {
                ::geo::Geometry::LineString(line_string_to_geo(line_string))
            }
            Geometry::Polygon(polygon) => ::geo::Geometry::Polygon(polygon_to_geo(polygon)),
            Geometry::MultiPoint(multi_point) => ::geo::Geometry::MultiPoint(::geo::MultiPoint::new(
                multi_point
                    .points()
                    .iter()
                    .map(|point| ::geo::Point(coord_to_geo(point.coord())))
                    .collect(),
            )),
            Geometry::MultiLineString(multi_line_string) => {
                ::geo::Geometry::MultiLineString(::geo::MultiLineString::new(
                    multi_line_string
                        .line_strings()
                        .iter()
                        .map(line_string_to_geo)
                        .collect(),
                ))
            }
            Geometry::MultiPolygon(multi_polygon) => {
                ::geo::Geometry::MultiPolygon(::geo::MultiPolygon::new(
                    multi_polygon.polygons().iter().map(polygon_to_geo).collect(),
                ))
            }
            Geometry::GeometryCollection(collection) => {
                let geometries = collection
                    .geometries()
                    .iter()
                    .map(::geo::Geometry::<f64>::try_from)
                    .collect::<WkbResult<Vec<_>>>()?;
                ::geo::Geometry::GeometryCollection(::geo::GeometryCollection(geometries))
            }
        };
        Ok(geom)
    }
}

impl TryFrom<Geometry> for ::geo::Geometry<f64> {
    type Error = WkbError;

    fn try_from(value: Geometry) -> WkbResult<Self> {
        Self::try_from(&value)
    }
}
