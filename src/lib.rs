#![doc = "Field-boundary area engine public API"]
mod area;
mod error;
mod io;
mod proj;
mod ring;

#[doc(inline)]
pub use area::{AreaResult, compute_area, compute_area_geodesic, compute_polygon_area};

#[doc(inline)]
pub use error::AreaError;

#[doc(inline)]
pub use io::geojson::boundary_from_geojson;
