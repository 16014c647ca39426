use anyhow::{Context, Result, ensure};
use geo::Coord;
use serde_json::Value;

/// Parse a GeoJSON `Polygon` geometry value into a boundary ring.
///
/// Reads the exterior ring only; field outlines carry no holes. The ring is
/// returned as-is (a repeated closing vertex, GeoJSON's convention, is fine:
/// the engine normalizes it away).
pub fn boundary_from_geojson(value: &Value) -> Result<Vec<Coord<f64>>> {
    let kind = value["type"].as_str().context("GeoJSON geometry missing \"type\"")?;
    ensure!(kind == "Polygon", "expected Polygon geometry, got {kind}");

    let rings = value["coordinates"]
        .as_array()
        .context("Polygon missing \"coordinates\"")?;
    let exterior = rings
        .first()
        .and_then(Value::as_array)
        .context("Polygon has no exterior ring")?;

    let mut boundary = Vec::with_capacity(exterior.len());
    for vertex in exterior {
        let pair = vertex.as_array().context("ring vertex is not an array")?;
        let lon = pair
            .first()
            .and_then(Value::as_f64)
            .context("vertex longitude must be a number")?;
        let lat = pair
            .get(1)
            .and_then(Value::as_f64)
            .context("vertex latitude must be a number")?;
        boundary.push(Coord { x: lon, y: lat });
    }
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::boundary_from_geojson;
    use crate::compute_area;

    #[test]
    fn polygon_geometry_parses_to_exterior_ring() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[
                [10.0, 45.0], [10.02, 45.0], [10.02, 45.02], [10.0, 45.02], [10.0, 45.0]
            ]]
        });
        let boundary = boundary_from_geojson(&value).unwrap();
        assert_eq!(boundary.len(), 5);
        assert_eq!(boundary[0], geo::Coord { x: 10.0, y: 45.0 });
    }

    #[test]
    fn parsed_boundary_measures_like_the_raw_ring() {
        let raw = [
            geo::Coord { x: 10.0, y: 45.0 },
            geo::Coord { x: 10.02, y: 45.0 },
            geo::Coord { x: 10.02, y: 45.02 },
            geo::Coord { x: 10.0, y: 45.02 },
        ];
        let value = json!({
            "type": "Polygon",
            "coordinates": [[
                [10.0, 45.0], [10.02, 45.0], [10.02, 45.02], [10.0, 45.02], [10.0, 45.0]
            ]]
        });
        let parsed = boundary_from_geojson(&value).unwrap();
        assert_eq!(compute_area(&parsed).unwrap(), compute_area(&raw).unwrap());
    }

    #[test]
    fn non_polygon_geometry_is_rejected() {
        let value = json!({ "type": "Point", "coordinates": [10.0, 45.0] });
        assert!(boundary_from_geojson(&value).is_err());
    }

    #[test]
    fn missing_exterior_ring_is_rejected() {
        let value = json!({ "type": "Polygon", "coordinates": [] });
        assert!(boundary_from_geojson(&value).is_err());
    }
}
