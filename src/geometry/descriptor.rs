use crate::error::{Result, SolveError};
use crate::math::Point2;

/// Geometry type tag, mirroring the source feature's WKB class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    Line,
    MultiLine,
    Polygon,
}

/// A read-only geometry descriptor: a type tag plus ordered vertex
/// sequences, one per part.
///
/// This is the solver's entire view of a feature; it carries no attribute
/// or layer state. Polygons store their exterior ring as the first part.
#[derive(Debug, Clone)]
pub struct Geometry {
    kind: GeometryKind,
    parts: Vec<Vec<Point2>>,
}

impl Geometry {
    /// Creates a geometry from a type tag and its parts.
    #[must_use]
    pub fn new(kind: GeometryKind, parts: Vec<Vec<Point2>>) -> Self {
        Self { kind, parts }
    }

    /// Creates a single-point geometry.
    #[must_use]
    pub fn point(p: Point2) -> Self {
        Self::new(GeometryKind::Point, vec![vec![p]])
    }

    /// Creates a single-part line geometry.
    #[must_use]
    pub fn line(points: Vec<Point2>) -> Self {
        Self::new(GeometryKind::Line, vec![points])
    }

    /// Creates a polygon geometry from its exterior ring.
    #[must_use]
    pub fn polygon(ring: Vec<Point2>) -> Self {
        Self::new(GeometryKind::Polygon, vec![ring])
    }

    /// Returns the geometry's type tag.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Returns all parts in order.
    #[must_use]
    pub fn parts(&self) -> &[Vec<Point2>] {
        &self.parts
    }

    /// Returns the first point of the first non-empty part.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyGeometry`] if every part is empty.
    pub fn first_point(&self) -> Result<Point2> {
        self.parts
            .iter()
            .find_map(|part| part.first().copied())
            .ok_or_else(|| SolveError::EmptyGeometry.into())
    }

    /// Selects the polyline to anchor to.
    ///
    /// Uses the first part; when that part is empty and a second part
    /// exists, falls back to the second part.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyGeometry`] if no usable part remains.
    pub fn line_part(&self) -> Result<&[Point2]> {
        let selected = match self.parts.first() {
            Some(first) if !first.is_empty() => Some(first),
            Some(_) => self.parts.get(1),
            None => None,
        };
        match selected {
            Some(part) if !part.is_empty() => Ok(part),
            _ => Err(SolveError::EmptyGeometry.into()),
        }
    }
}
