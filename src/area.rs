use geo::algorithm::geodesic_area::GeodesicArea;
use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::AreaError;
use crate::{proj, ring};

const M2_PER_HECTARE: f64 = 10_000.0;
const M2_PER_ACRE: f64 = 4_046.856_422_4;

/// Projected rings enclosing less than this are treated as degenerate
/// (collinear or otherwise collapsed input). A square meter is survey
/// noise, not a field.
const MIN_AREA_M2: f64 = 1.0;

/// A boundary's area in the three units a field record carries.
///
/// All three fields describe the same area: `hectares` and `acres` derive
/// from `square_meters` via the fixed conversion constants, then each is
/// rounded independently (2 / 4 / 4 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    pub square_meters: f64,
    pub hectares: f64,
    pub acres: f64,
}

impl AreaResult {
    fn from_square_meters(m2: f64) -> Self {
        Self {
            square_meters: round_to(m2, 2),
            hectares: round_to(m2 / M2_PER_HECTARE, 4),
            acres: round_to(m2 / M2_PER_ACRE, 4),
        }
    }
}

#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Compute the planar area of a lon/lat boundary ring (WGS84 degrees).
///
/// The ring is normalized (closing vertex dropped, consecutive duplicates
/// collapsed), validated, reprojected into the UTM zone containing its
/// center, and measured with the shoelace formula. Orientation-independent:
/// clockwise and counter-clockwise rings yield the same area.
///
/// Accuracy is sub-percent for polygons spanning a few kilometers within a
/// single UTM zone; rings straddling a zone boundary pick up a small,
/// bounded distortion. For a tighter answer use [`compute_area_geodesic`].
pub fn compute_area(boundary: &[Coord<f64>]) -> Result<AreaResult, AreaError> {
    let open = ring::normalize(boundary);
    ring::validate(&open)?;

    let projected = proj::reproject_to_metric(&open)?;
    let m2 = shoelace_area(&projected);
    if m2 < MIN_AREA_M2 {
        return Err(AreaError::DegenerateGeometry);
    }
    Ok(AreaResult::from_square_meters(m2))
}

/// Higher-accuracy mode: ellipsoidal geodesic area, no projection step.
///
/// Same validation pipeline and result contract as [`compute_area`], but the
/// area comes from geodesic integration on the WGS84 ellipsoid rather than
/// a zone-local planar approximation.
pub fn compute_area_geodesic(boundary: &[Coord<f64>]) -> Result<AreaResult, AreaError> {
    let open = ring::normalize(boundary);
    ring::validate(&open)?;

    let polygon = Polygon::new(LineString::from(open), vec![]);
    let m2 = polygon.geodesic_area_unsigned();
    if m2 < MIN_AREA_M2 {
        return Err(AreaError::DegenerateGeometry);
    }
    Ok(AreaResult::from_square_meters(m2))
}

/// Convenience wrapper: measure a `geo::Polygon`'s exterior ring.
/// Holes are not part of field outlines and are ignored.
pub fn compute_polygon_area(polygon: &Polygon<f64>) -> Result<AreaResult, AreaError> {
    compute_area(&polygon.exterior().0)
}

/// Unsigned shoelace area over an open ring; closure is implicit in the wrap.
fn shoelace_area(ring: &[Coord<f64>]) -> f64 {
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        sum += ring[i].x * ring[j].y - ring[j].x * ring[i].y;
    }
    (sum / 2.0).abs()
}
