use geo_types::{Coord, Point};

/// Center of the contiguous United States, used as the default map view.
pub const MIDDLE_OF_USA: Point<f64> = Point(Coord { x: -100.0, y: 40.0 });

/// Toronto area. Centering on Southern Ontario gives better radar coverage of the region.
pub const SOUTHERN_ONTARIO: Point<f64> = Point(Coord {
    x: -79.3832,
    y: 43.6532,
});

pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Latitude limit of the Web Mercator projection (EPSG:3857)
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;
