use super::Crs;
use crate::error::Result;
use crate::geometry::Geometry;

/// Reprojects geometries between coordinate reference systems.
///
/// Implementations must preserve part structure and vertex order; a failed
/// transform is reported as [`crate::error::SolveError::ReprojectionFailed`].
pub trait GeometryTransform {
    /// Reprojects `geometry` from `source` into `dest` coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying transform fails.
    fn reproject(&self, geometry: &Geometry, source: &Crs, dest: &Crs) -> Result<Geometry>;
}

/// Pass-through transform for geometries already in the destination CRS.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl GeometryTransform for IdentityTransform {
    fn reproject(&self, geometry: &Geometry, _source: &Crs, _dest: &Crs) -> Result<Geometry> {
        Ok(geometry.clone())
    }
}
