use crate::error::{PolylineError, Result};
use crate::math::predicates::point_on_segment;
use crate::math::Point2;

/// A directional straight segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    /// Creates a new segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the planar length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// A simple polyline stored as a chain of two-point segments.
///
/// Adjacent segments share an endpoint exactly (`segments[i].b ==
/// segments[i + 1].a`, bitwise). The chain supports arc-length queries and
/// a single in-place vertex insertion; each instance is owned by one solve
/// and discarded afterwards.
#[derive(Debug, Clone)]
pub struct SegmentedPolyline {
    segments: Vec<Segment>,
}

impl SegmentedPolyline {
    /// Creates a polyline from an explicit segment chain.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::InsufficientVertices`] for an empty chain
    /// and [`PolylineError::DiscontinuousChain`] when adjacent segments do
    /// not share an endpoint exactly.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(PolylineError::InsufficientVertices(0).into());
        }
        for (i, pair) in segments.windows(2).enumerate() {
            if pair[0].b != pair[1].a {
                return Err(PolylineError::DiscontinuousChain { index: i + 1 }.into());
            }
        }
        Ok(Self { segments })
    }

    /// Creates a polyline from an ordered vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::InsufficientVertices`] if fewer than 2
    /// points are supplied.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.len() < 2 {
            return Err(PolylineError::InsufficientVertices(points.len()).into());
        }
        let segments = points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        Ok(Self { segments })
    }

    /// Returns the number of segments in the chain.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total arc length of the polyline.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Returns the arc length from the start of the polyline to `point`.
    ///
    /// Scans segments in order, accumulating lengths until the segment
    /// containing `point` (within `epsilon`) is found, then adds the
    /// partial distance from that segment's start.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::PointNotOnLine`] if `point` lies off every
    /// segment within `epsilon`.
    pub fn arc_length_to(&self, point: &Point2, epsilon: f64) -> Result<f64> {
        let mut distance = 0.0;
        for segment in &self.segments {
            if point_on_segment(point, &segment.a, &segment.b, epsilon) {
                return Ok(distance + (point - segment.a).norm());
            }
            distance += segment.length();
        }
        Err(PolylineError::PointNotOnLine {
            x: point.x,
            y: point.y,
        }
        .into())
    }

    /// Inserts a new vertex at the given arc-length `distance` from the
    /// start and returns it.
    ///
    /// Exact boundary distances (`0` and `total_length()`) return the
    /// existing start or end vertex without mutating the chain, as does a
    /// distance landing exactly on an interior vertex. Otherwise the
    /// containing segment is split in two; the total length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::DistanceExceedsLength`] if `distance` is
    /// negative or greater than the total length.
    pub fn insert_point_in_line(&mut self, distance: f64) -> Result<Point2> {
        let total = self.total_length();
        if !(0.0..=total).contains(&distance) {
            return Err(PolylineError::DistanceExceedsLength {
                distance,
                length: total,
            }
            .into());
        }
        if distance == 0.0 {
            return Ok(self.segments[0].a);
        }
        if distance == total {
            return Ok(self.segments[self.segments.len() - 1].b);
        }

        let mut remaining = distance;
        for i in 0..self.segments.len() {
            let segment = self.segments[i];
            let seg_length = segment.length();
            if remaining > seg_length {
                remaining -= seg_length;
                continue;
            }
            // Landing exactly on an existing vertex must not create a
            // zero-length segment.
            if remaining == 0.0 {
                return Ok(segment.a);
            }
            if remaining == seg_length {
                return Ok(segment.b);
            }
            let factor = remaining / seg_length;
            let new_point = segment.a + factor * (segment.b - segment.a);
            let old_end = segment.b;
            self.segments[i].b = new_point;
            self.segments.insert(i + 1, Segment::new(new_point, old_end));
            return Ok(new_point);
        }

        // Unreachable for consistent lengths, kept for float safety.
        Err(PolylineError::DistanceExceedsLength {
            distance,
            length: total,
        }
        .into())
    }

    /// Returns the chain's vertices in order.
    #[must_use]
    pub fn as_point_list(&self) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push(self.segments[0].a);
        points.extend(self.segments.iter().map(|s| s.b));
        points
    }
}
