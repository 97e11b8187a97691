use thiserror::Error;

/// Top-level error type for the Labelis placement kernel.
#[derive(Debug, Error)]
pub enum LabelisError {
    #[error(transparent)]
    Polyline(#[from] PolylineError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Errors raised while building or querying a segmented polyline.
#[derive(Debug, Error)]
pub enum PolylineError {
    #[error("a polyline needs at least 2 vertices, got {0}")]
    InsufficientVertices(usize),

    #[error("segment {index} does not start where the previous segment ends")]
    DiscontinuousChain { index: usize },

    #[error("point ({x}, {y}) does not lie on the polyline")]
    PointNotOnLine { x: f64, y: f64 },

    #[error("distance {distance} exceeds polyline length {length}")]
    DistanceExceedsLength { distance: f64, length: f64 },
}

/// Errors raised while solving for an anchor position.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("geometry has no non-empty part to anchor to")]
    EmptyGeometry,

    #[error("degenerate triangle: {0}")]
    DegenerateTriangle(&'static str),

    #[error("reprojection failed: {0}")]
    ReprojectionFailed(String),
}

/// Convenience type alias for results using [`LabelisError`].
pub type Result<T> = std::result::Result<T, LabelisError>;
