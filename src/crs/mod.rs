pub mod measure;
pub mod transform;

pub use measure::{DistanceMeasurer, HaversineMeasurer, PlanarMeasurer};
pub use transform::{GeometryTransform, IdentityTransform};

use crate::math::{EPSILON_GEOGRAPHIC, EPSILON_PROJECTED};

/// A coordinate reference system descriptor.
///
/// Only the properties the solver needs are carried: an authority id for
/// diagnostics and whether coordinates are geographic (degrees) or
/// projected (linear units). Reprojection itself lives behind
/// [`GeometryTransform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crs {
    auth_id: String,
    geographic: bool,
}

impl Crs {
    /// Creates a geographic (degree-based) CRS descriptor.
    #[must_use]
    pub fn geographic(auth_id: impl Into<String>) -> Self {
        Self {
            auth_id: auth_id.into(),
            geographic: true,
        }
    }

    /// Creates a projected (linear-unit) CRS descriptor.
    #[must_use]
    pub fn projected(auth_id: impl Into<String>) -> Self {
        Self {
            auth_id: auth_id.into(),
            geographic: false,
        }
    }

    /// Returns the authority identifier, e.g. `EPSG:4326`.
    #[must_use]
    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    /// Returns true for degree-based coordinate systems.
    #[must_use]
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }

    /// Returns the comparison tolerance for coordinates in this CRS.
    ///
    /// Selected once per solve and threaded through every predicate call.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        if self.geographic {
            EPSILON_GEOGRAPHIC
        } else {
            EPSILON_PROJECTED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_keyed_on_geographic_flag() {
        let wgs84 = Crs::geographic("EPSG:4326");
        let utm = Crs::projected("EPSG:32633");
        assert!(wgs84.is_geographic());
        assert!(!utm.is_geographic());
        assert!((wgs84.epsilon() - EPSILON_GEOGRAPHIC).abs() < f64::EPSILON);
        assert!((utm.epsilon() - EPSILON_PROJECTED).abs() < f64::EPSILON);
    }
}
