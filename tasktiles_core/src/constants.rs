//! Constants of the tiling scheme and of the Web Mercator projection it lives in.

/// Meters per pixel at zoom level 0.
pub const MAX_RESOLUTION: f64 = 156_543.033_9;

/// Half of the projection extent along one axis, in meters.
///
/// Projected coordinates range over `-GLOBAL_OFFSET..=GLOBAL_OFFSET`. Adding the
/// offset shifts them into the non-negative space used for tile counting.
pub const GLOBAL_OFFSET: f64 = MAX_RESOLUTION * 256.0 / 2.0;

/// Highest supported zoom level. Tile indices at this level still fit into `u32`.
pub const MAX_ZOOM_LEVEL: u8 = 31;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Maximum latitude in degrees for the Web Mercator projection (EPSG:3857).
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Maximum longitude in degrees for the Web Mercator projection (EPSG:3857).
pub const MAX_LON: f64 = 180.0;
