pub mod descriptor;
pub mod polyline;

pub use descriptor::{Geometry, GeometryKind};
pub use polyline::{Segment, SegmentedPolyline};
