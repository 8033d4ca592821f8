//! Shared scenario data: the McKnight Prairie habitat and milkweed dispersal
//! parameters.
use glam::DVec2;
use seedloss::habitat::Polygon;

/// Average max windspeed near the seeding date at Cedar Creek E080 (m/s),
/// as computed by the `cedar-creek-wind` example.
pub const WINDSPEED: f64 = 4.23;

/// Seed release height for Asclepias syriaca L. (m), from Sullivan.
pub const RELEASE_HEIGHT: f64 = 0.866;

/// Seed terminal velocity (m/s), from Sullivan.
pub const TERMINAL_VELOCITY: f64 = 0.219;

/// Wald shape parameter lambda (m), from Sullivan's canopy-height and
/// dense-canopy scaling coefficient.
pub const MILKWEED_SHAPE: f64 = 2.50;

/// Bias magnitude used for the directional dispersal cases.
pub const NORTH_BIAS: f64 = 3.162_277_660_168_379_5; // sqrt(10)

/// Mean dispersal distance (m) by the ballistic equation:
/// release height times windspeed over terminal velocity.
pub fn mean_dispersal_distance() -> f64 {
    RELEASE_HEIGHT * WINDSPEED / TERMINAL_VELOCITY
}

/// Habitat polygon traced over a satellite image of McKnight Prairie, with
/// vertex coordinates in meters.
pub fn mcknight_prairie() -> Polygon {
    let verts = [
        [75.0, 142.0],
        [77.0, 160.0],
        [77.0, 305.0],
        [869.0, 291.0],
        [872.0, 122.0],
        [840.0, 108.0],
        [810.0, 100.0],
        [780.0, 101.0],
        [737.0, 118.0],
        [690.0, 128.0],
        [507.0, 125.0],
        [308.0, 132.0],
        [110.0, 131.0],
    ];
    Polygon::new(verts.iter().map(|v| DVec2::new(v[0], v[1])).collect())
        .expect("static vertex list is valid")
}

/// A thin 100 m bar near the image corner, drawn as a polygon so renders
/// carry their own scale reference.
pub fn scale_bar() -> Polygon {
    Polygon::new(vec![
        DVec2::new(15.0, 15.0),
        DVec2::new(115.0, 15.0),
        DVec2::new(115.0, 17.0),
        DVec2::new(15.0, 17.0),
    ])
    .expect("static vertex list is valid")
}
