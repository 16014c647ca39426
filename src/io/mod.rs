pub(crate) mod geojson;
