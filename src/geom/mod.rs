mod format;
mod parse;

pub use format::{point_to_geojson, point_to_wkt};
pub use parse::{parse_geojson_point, parse_lon_lat, parse_point, parse_wkt_point};
