use thiserror::Error;

/// Failures reported by the area engine.
///
/// Every failure is returned synchronously to the caller; the engine never
/// produces a partial result, and retrying a deterministic computation
/// changes nothing. The caller (typically a field record service) decides
/// how to surface these, e.g. as validation errors in an API response.
#[derive(Debug, Error)]
pub enum AreaError {
    /// Fewer than 3 distinct vertices remain after dropping the closing
    /// vertex and collapsing consecutive duplicates.
    #[error("boundary has {count} distinct vertices, need at least 3")]
    InsufficientVertices { count: usize },

    /// A vertex lies outside lon ∈ [-180, 180], lat ∈ [-90, 90], or is
    /// not finite.
    #[error("vertex ({lon}, {lat}) outside valid lon/lat ranges")]
    InvalidCoordinate { lon: f64, lat: f64 },

    /// The projected ring encloses (near-)zero area: collinear or otherwise
    /// collapsed input.
    #[error("boundary collapses to zero area after projection")]
    DegenerateGeometry,

    /// Consecutive vertices jump across the ±180° seam. Rejected outright
    /// rather than silently miscomputed.
    #[error("boundary crosses the antimeridian (±180° longitude)")]
    CrossesAntimeridian,

    /// Two non-adjacent boundary edges cross (a "bowtie"); the shoelace
    /// formula would report a misleading area for such a ring.
    #[error("boundary is self-intersecting")]
    SelfIntersecting,

    /// The lon/lat → UTM transform failed.
    #[error("CRS transform failed: {0}")]
    Projection(#[from] proj4rs::errors::Error),
}
