use super::Point2;

/// Checks whether two points coincide within `epsilon`, per coordinate.
#[must_use]
pub fn points_equal(p: &Point2, q: &Point2, epsilon: f64) -> bool {
    (p.x - q.x).abs() < epsilon && (p.y - q.y).abs() < epsilon
}

/// Checks whether `p` lies on the segment from `a` to `b` within `epsilon`.
///
/// Uses the triangle-equality identity: `p` is on the segment exactly when
/// `dist(p, a) + dist(p, b) == dist(a, b)`. This covers both collinearity
/// and betweenness in one test and is symmetric under swapping `a` and `b`.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, epsilon: f64) -> bool {
    let via_p = (p - a).norm() + (p - b).norm();
    let direct = (b - a).norm();
    (via_p - direct).abs() < epsilon
}

/// Checks whether `p` coincides with any vertex in `points` within `epsilon`.
#[must_use]
pub fn point_in_vertex_set(p: &Point2, points: &[Point2], epsilon: f64) -> bool {
    points.iter().any(|q| points_equal(p, q, epsilon))
}
