use geo::Coord;
use log::debug;
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::error::AreaError;

/// PROJ.4 string for the source geographic CRS (degrees → radians handled in code).
const SOURCE_GEOG_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// Build the PROJ.4 string for the UTM CRS covering a lon/lat center.
/// Zones band every 6° of longitude; `+south` keeps southern-hemisphere
/// northings positive.
fn utm_proj4(center: Coord<f64>) -> String {
    let zone = (((center.x + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60);
    let north = center.y >= 0.0;
    let south = if north { "" } else { " +south" };
    debug!("utm zone {zone} ({})", if north { "north" } else { "south" });

    format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs +type=crs")
}

/// Arithmetic mean of the ring's vertices. Used only to pick a projection
/// zone, not as a precise geometric centroid.
pub(crate) fn ring_center(ring: &[Coord<f64>]) -> Coord<f64> {
    let n = ring.len() as f64;
    let sum = ring.iter().fold(Coord { x: 0.0, y: 0.0 }, |acc, c| Coord {
        x: acc.x + c.x,
        y: acc.y + c.y,
    });
    Coord { x: sum.x / n, y: sum.y / n }
}

/// Reproject a lon/lat ring into UTM meters, zone chosen from the ring's center.
///
/// A ring straddling a zone boundary is still computed in the single
/// center-chosen zone; this introduces a small, bounded distortion that
/// grows with ring extent. Acceptable for farm-field-sized polygons.
pub(crate) fn reproject_to_metric(ring: &[Coord<f64>]) -> Result<Vec<Coord<f64>>, AreaError> {
    let from = Proj4::from_proj_string(SOURCE_GEOG_PROJ4)?;
    let to = Proj4::from_proj_string(&utm_proj4(ring_center(ring)))?;

    // Radians in, meters out.
    let mut projected = Vec::with_capacity(ring.len());
    for coord in ring {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(&from, &to, &mut point)?;
        projected.push(Coord { x: point.0, y: point.1 });
    }
    Ok(projected)
}
