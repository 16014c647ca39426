use geo::Coord;

use crate::error::AreaError;

/// Consecutive vertices further apart than this (in degrees of longitude)
/// are taken to wrap around the ±180° seam.
const ANTIMERIDIAN_JUMP: f64 = 180.0;

/// Drop the repeated closing vertex (if present) and collapse consecutive
/// duplicates, yielding an open ring. Tolerates both closed and open input.
pub(crate) fn normalize(ring: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let mut out: Vec<Coord<f64>> = Vec::with_capacity(ring.len());
    for &coord in ring {
        if out.last() != Some(&coord) {
            out.push(coord);
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Validate an open, deduplicated ring: coordinate ranges, vertex count,
/// antimeridian wrap, and simplicity.
pub(crate) fn validate(ring: &[Coord<f64>]) -> Result<(), AreaError> {
    for coord in ring {
        let in_range = coord.x.is_finite()
            && coord.y.is_finite()
            && (-180.0..=180.0).contains(&coord.x)
            && (-90.0..=90.0).contains(&coord.y);
        if !in_range {
            return Err(AreaError::InvalidCoordinate { lon: coord.x, lat: coord.y });
        }
    }

    if ring.len() < 3 {
        return Err(AreaError::InsufficientVertices { count: ring.len() });
    }

    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        if (ring[i].x - ring[j].x).abs() > ANTIMERIDIAN_JUMP {
            return Err(AreaError::CrossesAntimeridian);
        }
    }

    if !is_simple(ring) {
        return Err(AreaError::SelfIntersecting);
    }

    Ok(())
}

/// True if no two non-adjacent edges of the closed ring properly cross.
/// Pairwise O(n²) test, fine for boundaries of a few hundred vertices.
/// Collinear overlaps are not flagged here; they collapse the ring's area
/// and are caught by the degenerate-geometry check instead.
fn is_simple(ring: &[Coord<f64>]) -> bool {
    let n = ring.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // Edges sharing a vertex may touch at it; skip those pairs.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            let (c, d) = (ring[j], ring[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// Proper intersection test: each segment's endpoints straddle the other's
/// supporting line (strict orientation signs).
fn segments_cross(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>, d: Coord<f64>) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Signed area of the triangle (o, p, q); sign gives q's side of op.
#[inline]
fn orient(o: Coord<f64>, p: Coord<f64>, q: Coord<f64>) -> f64 {
    (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
}
