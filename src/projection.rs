//! Cylindrical map projection
//!
//! Maps sphere points onto a W × W/2 pixel canvas: longitude is linear along
//! the horizontal axis, latitude passes through the Mercator vertical
//! transform, and both are affinely remapped from projection space into pixel
//! space. All arithmetic is `f64` so coordinates on the canvas edges are
//! reproducible bit-for-bit; the antimeridian splitter closes its fragments
//! against exactly x = 0 and x = width.

use glam::{DVec2, Vec3};
use std::f64::consts::{FRAC_PI_4, PI};

/// Mercator-style projection onto a fixed-size canvas
///
/// The canvas is `width` pixels wide and `width / 2` pixels tall, with the
/// origin at the top-left: longitude −π maps to x = 0, +π to x = width, and
/// northern latitudes map to smaller y. Latitudes beyond roughly ±66.5° leave
/// the canvas, and the poles themselves diverge, as usual for Mercator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    width: f64,
}

impl MapProjection {
    /// Projection onto a canvas of the given pixel width
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Canvas width in pixels
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels; always half the width
    #[inline]
    pub fn height(&self) -> f64 {
        self.width / 2.0
    }

    /// Project a sphere point to pixel coordinates
    pub fn project(&self, point: Vec3) -> DVec2 {
        let (lat, lng) = lat_lng_of(point);
        self.project_lat_lng(lat, lng)
    }

    /// Project (latitude, longitude) in radians to pixel coordinates
    ///
    /// Longitude ±π lands exactly on x = 0 / x = width: `lng / PI` is exactly
    /// ±1.0 there, and the remaining remap preserves that exactly.
    pub fn project_lat_lng(&self, lat: f64, lng: f64) -> DVec2 {
        let x = (lng / PI + 1.0) / 2.0 * self.width;

        let y_merc = (FRAC_PI_4 + lat / 2.0).tan().ln() / PI;
        let y = (0.5 - y_merc) * self.height();
        DVec2::new(x, y)
    }
}

/// (latitude, longitude) of a sphere point, in radians
///
/// z points at the north pole; longitude is measured from the +x axis toward
/// +y, in (−π, π].
pub fn lat_lng_of(point: Vec3) -> (f64, f64) {
    let (x, y, z) = (point.x as f64, point.y as f64, point.z as f64);
    let lat = z.atan2((x * x + y * y).sqrt());
    let lng = y.atan2(x);
    (lat, lng)
}

/// Unit-sphere point at (latitude, longitude) in radians
pub fn point_from_lat_lng(lat: f64, lng: f64) -> Vec3 {
    Vec3::new(
        (lat.cos() * lng.cos()) as f32,
        (lat.cos() * lng.sin()) as f32,
        lat.sin() as f32,
    )
}
