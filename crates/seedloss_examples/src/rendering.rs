//! Minimal PNG rendering for habitat outlines and landing points.
//!
//! The y-axis is flipped so world coordinates stay mathematical (y up) while
//! image rows grow downward.
use anyhow::Result;
use glam::DVec2;
use image::{Rgb, RgbImage};
use seedloss::habitat::Polygon;

/// Configuration for rendering a habitat scene to an image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// World meters covered by one pixel.
    pub meters_per_pixel: f64,
    /// Background color.
    pub background: [u8; 3],
    /// Outline color for polygons.
    pub outline: [u8; 3],
    /// Outline thickness in pixels.
    pub outline_thickness: u32,
    /// Fill color for landing points.
    pub point_color: [u8; 3],
    /// Landing point radius in pixels.
    pub point_radius: u32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), meters_per_pixel: f64) -> Self {
        Self {
            image_size,
            meters_per_pixel,
            background: [26, 26, 26],
            outline: [255, 255, 255],
            outline_thickness: 3,
            point_color: [235, 235, 80],
            point_radius: 2,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_color(mut self, point_color: [u8; 3]) -> Self {
        self.point_color = point_color;
        self
    }

    fn to_pixel(&self, p: DVec2) -> (f64, f64) {
        let x = p.x / self.meters_per_pixel;
        let y = self.image_size.1 as f64 - p.y / self.meters_per_pixel;
        (x, y)
    }
}

/// Render polygon outlines and landing points into a PNG at `path`.
pub fn render_habitat_to_png(
    polygons: &[&Polygon],
    points: &[DVec2],
    config: &RenderConfig,
    path: &str,
) -> Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for poly in polygons {
        let verts = poly.vertices();
        for i in 0..verts.len() {
            let a = config.to_pixel(verts[(i + verts.len() - 1) % verts.len()]);
            let b = config.to_pixel(verts[i]);
            draw_segment(&mut img, a, b, config.outline_thickness, config.outline);
        }
    }

    for &p in points {
        let (x, y) = config.to_pixel(p);
        stamp_disk(&mut img, x, y, config.point_radius, config.point_color);
    }

    img.save(path)?;
    Ok(())
}

fn draw_segment(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), thickness: u32, color: [u8; 3]) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let steps = dx.hypot(dy).ceil().max(1.0) as usize * 2;
    let radius = thickness.div_ceil(2);
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        stamp_disk(img, a.0 + dx * t, a.1 + dy * t, radius, color);
    }
}

fn stamp_disk(img: &mut RgbImage, cx: f64, cy: f64, radius: u32, color: [u8; 3]) {
    let r = radius as i64;
    let (cx, cy) = (cx.round() as i64, cy.round() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, Rgb(color));
            }
        }
    }
}
