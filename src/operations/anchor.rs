use tracing::{debug, trace};

use crate::crs::{Crs, DistanceMeasurer, GeometryTransform};
use crate::error::{Result, SolveError};
use crate::geometry::{Geometry, GeometryKind, SegmentedPolyline};
use crate::math::polygon_2d::centroid_2d;
use crate::math::predicates::{point_in_vertex_set, points_equal};
use crate::math::{Point2, Vector2};

/// Computes a label anchor point for a reference geometry.
///
/// Points anchor at their first vertex, polygons at their centroid, lines
/// at their arc-length midpoint. For lines an optional offset, given in
/// meters, displaces the anchor perpendicular to the line's chord; the
/// offset is converted into destination-CRS units through a locally
/// measured planar/metric scale factor, so it comes out right even in
/// degree-based or distorted projections.
pub struct AnchorPosition<'a> {
    geometry: &'a Geometry,
    source_crs: &'a Crs,
    dest_crs: &'a Crs,
    offset_m: Option<f64>,
}

impl<'a> AnchorPosition<'a> {
    /// Creates a new `AnchorPosition` operation.
    ///
    /// `offset_m` of `None` or `0` means "no offset".
    #[must_use]
    pub fn new(
        geometry: &'a Geometry,
        source_crs: &'a Crs,
        dest_crs: &'a Crs,
        offset_m: Option<f64>,
    ) -> Self {
        Self {
            geometry,
            source_crs,
            dest_crs,
            offset_m,
        }
    }

    /// Executes the solve, returning the anchor in destination-CRS
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ReprojectionFailed`] when the transform
    /// fails, [`SolveError::EmptyGeometry`] when no usable part exists,
    /// [`SolveError::DegenerateTriangle`] when a requested offset has no
    /// well-defined perpendicular direction, and polyline errors from the
    /// midpoint construction.
    pub fn execute(
        &self,
        transform: &dyn GeometryTransform,
        measurer: &dyn DistanceMeasurer,
    ) -> Result<Point2> {
        let geometry = transform.reproject(self.geometry, self.source_crs, self.dest_crs)?;

        match geometry.kind() {
            GeometryKind::Point | GeometryKind::MultiPoint => {
                debug!(crs = self.dest_crs.auth_id(), "anchoring point geometry");
                geometry.first_point()
            }
            GeometryKind::Polygon => {
                debug!(crs = self.dest_crs.auth_id(), "anchoring polygon centroid");
                geometry
                    .parts()
                    .iter()
                    .find_map(|ring| centroid_2d(ring))
                    .ok_or_else(|| SolveError::EmptyGeometry.into())
            }
            GeometryKind::Line | GeometryKind::MultiLine => self.solve_line(&geometry, measurer),
        }
    }

    fn solve_line(&self, geometry: &Geometry, measurer: &dyn DistanceMeasurer) -> Result<Point2> {
        let part = geometry.line_part()?;
        let mut polyline = SegmentedPolyline::from_points(part)?;

        // Chord endpoints of the original, unsplit line.
        let start = part[0];
        let end = part[part.len() - 1];

        let midpoint = polyline.insert_point_in_line(polyline.total_length() / 2.0)?;

        let offset = match self.offset_m {
            None => return Ok(midpoint),
            Some(o) if o == 0.0 => return Ok(midpoint),
            Some(o) => o,
        };

        let epsilon = self.dest_crs.epsilon();
        if points_equal(&start, &end, epsilon) {
            return Err(SolveError::DegenerateTriangle("start and end coincide").into());
        }
        if point_in_vertex_set(&midpoint, &[start, end], epsilon) {
            return Err(
                SolveError::DegenerateTriangle("midpoint coincides with a chord endpoint").into(),
            );
        }

        let chord = end - start;
        let chord_length = chord.norm();

        // Perpendicular foot of the midpoint on the infinite line through
        // the chord.
        let t = (midpoint - start).dot(&chord) / (chord_length * chord_length);
        let foot = start + t * chord;

        let deviation = foot - midpoint;
        let deviation_length = deviation.norm();

        // The offset direction points from the midpoint toward the chord.
        // A straight line leaves the midpoint on the chord itself; the
        // direction then falls back to the chord's left normal and the
        // scale is probed over half the chord instead.
        let (direction, probe_length) = if deviation_length >= epsilon {
            (deviation / deviation_length, deviation_length)
        } else {
            let along = chord / chord_length;
            (Vector2::new(-along.y, along.x), chord_length / 2.0)
        };

        let probe = midpoint + probe_length * direction;
        let metric_length = measurer.measure(&midpoint, &probe);
        trace!(
            probe_length,
            metric_length,
            "probed local planar/metric scale"
        );
        if !metric_length.is_finite() || metric_length <= 0.0 {
            return Err(SolveError::DegenerateTriangle("zero metric distance").into());
        }

        let scale = probe_length / metric_length;
        debug!(
            offset_m = offset,
            scale,
            crs = self.dest_crs.auth_id(),
            "projecting offset anchor"
        );

        Ok(midpoint + (scale * offset) * direction)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::crs::{HaversineMeasurer, IdentityTransform, PlanarMeasurer};
    use crate::error::LabelisError;

    const TOL: f64 = 1e-9;

    /// Measurer that must never be consulted.
    struct PoisonMeasurer;

    impl DistanceMeasurer for PoisonMeasurer {
        fn measure(&self, _a: &Point2, _b: &Point2) -> f64 {
            f64::NAN
        }
    }

    /// Transform that always fails.
    struct FailingTransform;

    impl GeometryTransform for FailingTransform {
        fn reproject(&self, _g: &Geometry, _s: &Crs, _d: &Crs) -> Result<Geometry> {
            Err(SolveError::ReprojectionFailed("no transform path".into()).into())
        }
    }

    fn metric_crs() -> Crs {
        Crs::projected("EPSG:25832")
    }

    fn solve(geometry: &Geometry, offset: Option<f64>) -> Result<Point2> {
        let crs = metric_crs();
        AnchorPosition::new(geometry, &crs, &crs, offset)
            .execute(&IdentityTransform, &PlanarMeasurer)
    }

    #[test]
    fn straight_line_without_offset_anchors_at_midpoint() {
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let anchor = solve(&geom, None).unwrap();
        assert!((anchor.x - 5.0).abs() < TOL);
        assert!(anchor.y.abs() < TOL);
    }

    #[test]
    fn midpoint_ignores_measurer_entirely() {
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let crs = metric_crs();
        let anchor = AnchorPosition::new(&geom, &crs, &crs, Some(0.0))
            .execute(&IdentityTransform, &PoisonMeasurer)
            .unwrap();
        assert!((anchor.x - 5.0).abs() < TOL);
        assert!(anchor.y.abs() < TOL);
    }

    #[test]
    fn bent_line_midpoint_lands_on_vertex() {
        // Length 20, midpoint at distance 10 is exactly the corner vertex.
        let geom = Geometry::line(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ]);
        let anchor = solve(&geom, None).unwrap();
        assert!((anchor.x - 10.0).abs() < TOL);
        assert!(anchor.y.abs() < TOL);
    }

    #[test]
    fn straight_line_with_metric_offset() {
        // Planar units are meters, so scale is 1 and the anchor sits 5
        // units perpendicular to the line (left of its direction).
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let anchor = solve(&geom, Some(5.0)).unwrap();
        assert!((anchor.x - 5.0).abs() < TOL);
        assert!((anchor.y - 5.0).abs() < TOL);
    }

    #[test]
    fn bent_line_offset_moves_toward_chord() {
        let geom = Geometry::line(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ]);
        let midpoint = Point2::new(10.0, 0.0);
        let anchor = solve(&geom, Some(5.0)).unwrap();
        // Displaced exactly 5 units from the midpoint...
        assert!(((anchor - midpoint).norm() - 5.0).abs() < TOL);
        // ...along the direction toward the chord's foot at (5, 5).
        let expected = midpoint + 5.0 * (Vector2::new(-1.0, 1.0) / 2.0_f64.sqrt());
        assert!((anchor - expected).norm() < TOL);
    }

    #[test]
    fn offset_scales_with_crs_distortion() {
        // Same line, but a measurer that reports the world twice as large
        // as the plane: 1 planar unit = 2 meters, so a 5 m offset moves
        // the anchor only 2.5 planar units.
        struct DoubleMeasurer;
        impl DistanceMeasurer for DoubleMeasurer {
            fn measure(&self, a: &Point2, b: &Point2) -> f64 {
                2.0 * (b - a).norm()
            }
        }
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let crs = metric_crs();
        let anchor = AnchorPosition::new(&geom, &crs, &crs, Some(5.0))
            .execute(&IdentityTransform, &DoubleMeasurer)
            .unwrap();
        assert!((anchor.x - 5.0).abs() < TOL);
        assert!((anchor.y - 2.5).abs() < TOL);
    }

    #[test]
    fn geographic_offset_converts_meters_to_degrees() {
        // Equatorial west-east line in lon/lat degrees. A 100 m offset
        // must come out as roughly 100 / 111195 degrees of latitude.
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(0.1, 0.0)]);
        let wgs84 = Crs::geographic("EPSG:4326");
        let anchor = AnchorPosition::new(&geom, &wgs84, &wgs84, Some(100.0))
            .execute(&IdentityTransform, &HaversineMeasurer::default())
            .unwrap();
        assert!((anchor.x - 0.05).abs() < 1e-9);
        let expected_deg = 100.0 / 111_195.0;
        assert!(
            (anchor.y - expected_deg).abs() < expected_deg * 0.01,
            "anchor.y={}",
            anchor.y
        );
    }

    #[test]
    fn closed_loop_with_offset_is_degenerate() {
        let geom = Geometry::line(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 0.0),
        ]);
        let err = solve(&geom, Some(5.0)).unwrap_err();
        assert!(matches!(
            err,
            LabelisError::Solve(SolveError::DegenerateTriangle(_))
        ));
    }

    #[test]
    fn closed_loop_without_offset_still_solves() {
        let geom = Geometry::line(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 0.0),
        ]);
        assert!(solve(&geom, None).is_ok());
    }

    #[test]
    fn zero_metric_distance_is_degenerate() {
        struct ZeroMeasurer;
        impl DistanceMeasurer for ZeroMeasurer {
            fn measure(&self, _a: &Point2, _b: &Point2) -> f64 {
                0.0
            }
        }
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let crs = metric_crs();
        let err = AnchorPosition::new(&geom, &crs, &crs, Some(5.0))
            .execute(&IdentityTransform, &ZeroMeasurer)
            .unwrap_err();
        assert!(matches!(
            err,
            LabelisError::Solve(SolveError::DegenerateTriangle(_))
        ));
    }

    #[test]
    fn point_geometry_ignores_offset() {
        let geom = Geometry::point(Point2::new(7.0, 8.0));
        let anchor = solve(&geom, Some(50.0)).unwrap();
        assert_eq!(anchor, Point2::new(7.0, 8.0));
    }

    #[test]
    fn multipoint_anchors_at_first_point() {
        let geom = Geometry::new(
            GeometryKind::MultiPoint,
            vec![vec![Point2::new(1.0, 1.0), Point2::new(9.0, 9.0)]],
        );
        let anchor = solve(&geom, None).unwrap();
        assert_eq!(anchor, Point2::new(1.0, 1.0));
    }

    #[test]
    fn polygon_anchors_at_centroid() {
        let geom = Geometry::polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let anchor = solve(&geom, Some(50.0)).unwrap();
        assert!((anchor.x - 2.0).abs() < TOL);
        assert!((anchor.y - 2.0).abs() < TOL);
    }

    #[test]
    fn multiline_falls_back_to_second_part() {
        let geom = Geometry::new(
            GeometryKind::MultiLine,
            vec![vec![], vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)]],
        );
        let anchor = solve(&geom, None).unwrap();
        assert!((anchor.x - 2.0).abs() < TOL);
    }

    #[test]
    fn empty_line_geometry_fails() {
        let geom = Geometry::new(GeometryKind::Line, vec![vec![]]);
        let err = solve(&geom, None).unwrap_err();
        assert!(matches!(
            err,
            LabelisError::Solve(SolveError::EmptyGeometry)
        ));
    }

    #[test]
    fn single_vertex_line_fails() {
        let geom = Geometry::line(vec![Point2::new(1.0, 1.0)]);
        assert!(solve(&geom, None).is_err());
    }

    #[test]
    fn failed_reprojection_propagates() {
        let geom = Geometry::line(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let crs = metric_crs();
        let err = AnchorPosition::new(&geom, &crs, &crs, None)
            .execute(&FailingTransform, &PlanarMeasurer)
            .unwrap_err();
        assert!(matches!(
            err,
            LabelisError::Solve(SolveError::ReprojectionFailed(_))
        ));
    }
}
