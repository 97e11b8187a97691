use super::Point2;

/// Computes the signed area of a polygon ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring may be
/// open or explicitly closed; a trailing duplicate of the first vertex
/// contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the centroid of a polygon ring.
///
/// Uses the area-weighted centroid; for rings with (near-)zero area the
/// vertex mean is returned instead. Returns `None` for an empty ring.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }

    let area = signed_area_2d(points);
    if area.abs() > f64::EPSILON {
        let n = points.len();
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let cross = points[i].x * points[j].y - points[j].x * points[i].y;
            cx += (points[i].x + points[j].x) * cross;
            cy += (points[i].y + points[j].y) * cross;
        }
        let scale = 1.0 / (6.0 * area);
        return Some(Point2::new(cx * scale, cy * scale));
    }

    // Degenerate ring: fall back to the vertex mean.
    let mut mx = 0.0;
    let mut my = 0.0;
    for p in points {
        mx += p.x;
        my += p.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point2::new(mx / n, my / n))
}
