use crate::math::Point2;

/// Mean earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Measures ground distance, in meters, between two points expressed in
/// the destination CRS.
///
/// Implementations are configured up front for the CRS and ellipsoid the
/// points live in. The solver only compares this against planar distance
/// over short spans, so local accuracy suffices, no full geodesic solving.
/// The result must be positive and finite for distinct points.
pub trait DistanceMeasurer {
    /// Returns the ground distance between `a` and `b` in meters.
    fn measure(&self, a: &Point2, b: &Point2) -> f64;
}

/// Measurer for projected CRSs whose native units are meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarMeasurer;

impl DistanceMeasurer for PlanarMeasurer {
    fn measure(&self, a: &Point2, b: &Point2) -> f64 {
        (b - a).norm()
    }
}

/// Great-circle measurer for geographic CRSs.
///
/// Points are interpreted as `(longitude, latitude)` in degrees on a
/// spherical earth. Accurate to a few parts per thousand against the
/// ellipsoid, which is ample for the short probe spans the solver uses.
#[derive(Debug, Clone, Copy)]
pub struct HaversineMeasurer {
    radius_m: f64,
}

impl Default for HaversineMeasurer {
    fn default() -> Self {
        Self {
            radius_m: EARTH_RADIUS_M,
        }
    }
}

impl HaversineMeasurer {
    /// Creates a measurer with a custom sphere radius in meters.
    #[must_use]
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }
}

impl DistanceMeasurer for HaversineMeasurer {
    fn measure(&self, a: &Point2, b: &Point2) -> f64 {
        let lat1 = a.y.to_radians();
        let lat2 = b.y.to_radians();
        let delta_lat = (b.y - a.y).to_radians();
        let delta_lon = (b.x - a.x).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().asin();

        self.radius_m * c
    }
}
