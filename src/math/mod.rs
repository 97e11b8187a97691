pub mod polygon_2d;
pub mod predicates;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Comparison tolerance for geographic (degree-based) coordinates.
///
/// 1e-8 degrees is roughly a millimetre on the ground, the coarser of the
/// two tolerances in real-world terms.
pub const EPSILON_GEOGRAPHIC: f64 = 1e-8;

/// Comparison tolerance for projected (metric) coordinates, in native units.
pub const EPSILON_PROJECTED: f64 = 1e-4;
