//! In-memory pixel buffer with solid-fill rasterization

use libm::roundf;

use tessera_core::{Color, Point, Surface, SurfaceError};

/// Face canvas width in pixels
pub const FACE_WIDTH: usize = 144;

/// Face canvas height in pixels
pub const FACE_HEIGHT: usize = 168;

/// A fixed-size RGBA framebuffer, origin top-left
///
/// Roughly 95 KiB; on the device it lives in a static cell, never on
/// a task stack.
pub struct Framebuffer {
    pixels: [Color; FACE_WIDTH * FACE_HEIGHT],
}

impl Framebuffer {
    /// Create a framebuffer filled with the given color
    pub fn new(fill: Color) -> Self {
        Self {
            pixels: [fill; FACE_WIDTH * FACE_HEIGHT],
        }
    }

    /// Read one pixel; `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !Self::contains(x, y) {
            return None;
        }
        Some(self.pixels[y as usize * FACE_WIDTH + x as usize])
    }

    /// Raw pixel data in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn contains(x: i32, y: i32) -> bool {
        (0..FACE_WIDTH as i32).contains(&x) && (0..FACE_HEIGHT as i32).contains(&y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if Self::contains(x, y) {
            self.pixels[y as usize * FACE_WIDTH + x as usize] = color;
        }
    }

    /// Fill a horizontal span, clipped to the canvas
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= FACE_HEIGHT as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(FACE_WIDTH as i32 - 1);
        for x in x0..=x1 {
            self.pixels[y as usize * FACE_WIDTH + x as usize] = color;
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Surface for Framebuffer {
    fn dimensions(&self) -> (u32, u32) {
        (FACE_WIDTH as u32, FACE_HEIGHT as u32)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        for row in y..y + height as i32 {
            self.hline(x, x + width as i32 - 1, row, color);
        }
        Ok(())
    }

    fn fill_disc(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError> {
        if radius <= 0 {
            return Ok(());
        }
        let r_sq = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Color) -> Result<(), SurfaceError> {
        if vertices.len() < 3 {
            return Ok(());
        }

        // Convex scanline fill: for each row, the polygon covers a
        // single span bounded by the edge crossings.
        let min_y = vertices.iter().map(|v| v.y).min().unwrap_or(0).max(0);
        let max_y = vertices
            .iter()
            .map(|v| v.y)
            .max()
            .unwrap_or(0)
            .min(FACE_HEIGHT as i32 - 1);

        for y in min_y..=max_y {
            let mut span_min = i32::MAX;
            let mut span_max = i32::MIN;

            for i in 0..vertices.len() {
                let a = vertices[i];
                let b = vertices[(i + 1) % vertices.len()];
                let crosses = (a.y <= y && b.y > y) || (b.y <= y && a.y > y);
                if crosses {
                    let t = (y - a.y) as f32 / (b.y - a.y) as f32;
                    let x = roundf(a.x as f32 + t * (b.x - a.x) as f32) as i32;
                    span_min = span_min.min(x);
                    span_max = span_max.max(x);
                }
            }

            if span_min <= span_max {
                self.hline(span_min, span_max, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_new_is_uniform() {
        let fb = Framebuffer::new(Color::BLACK);
        assert!(fb.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(Color::WHITE);
        fb.fill_rect(-10, -10, 20, 20, RED).unwrap();

        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(9, 9), Some(RED));
        assert_eq!(fb.pixel(10, 10), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_disc_extent() {
        let mut fb = Framebuffer::new(Color::WHITE);
        let center = Point::new(72, 84);
        fb.fill_disc(center, 10, RED).unwrap();

        assert_eq!(fb.pixel(72, 84), Some(RED));
        assert_eq!(fb.pixel(82, 84), Some(RED)); // on the rim
        assert_eq!(fb.pixel(83, 84), Some(Color::WHITE)); // just outside
        assert_eq!(fb.pixel(80, 92), Some(Color::WHITE)); // corner of bounding box
    }

    #[test]
    fn test_fill_disc_zero_radius_paints_nothing() {
        let mut fb = Framebuffer::new(Color::WHITE);
        fb.fill_disc(Point::new(10, 10), 0, RED).unwrap();
        assert!(fb.pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut fb = Framebuffer::new(Color::WHITE);
        let square = [
            Point::new(10, 10),
            Point::new(20, 10),
            Point::new(20, 20),
            Point::new(10, 20),
        ];
        fb.fill_polygon(&square, RED).unwrap();

        assert_eq!(fb.pixel(15, 15), Some(RED));
        assert_eq!(fb.pixel(10, 10), Some(RED));
        assert_eq!(fb.pixel(25, 15), Some(Color::WHITE));
        assert_eq!(fb.pixel(15, 25), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_polygon_stays_in_bounding_circle() {
        let mut fb = Framebuffer::new(Color::WHITE);
        let center = Point::new(72, 84);
        let radius = 14;
        let vertices = tessera_core::polygon_vertices(center, radius * 2, 6);
        fb.fill_polygon(&vertices, RED).unwrap();

        assert_eq!(fb.pixel(72, 84), Some(RED));
        for (x, y) in [(72, 60), (95, 84), (72, 108), (49, 84)] {
            assert_eq!(fb.pixel(x, y), Some(Color::WHITE), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_degenerate_polygon_is_noop() {
        let mut fb = Framebuffer::new(Color::WHITE);
        fb.fill_polygon(&[Point::new(0, 0), Point::new(5, 5)], RED)
            .unwrap();
        assert!(fb.pixels().iter().all(|&p| p == Color::WHITE));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(Color::WHITE);
        fb.clear(RED).unwrap();
        assert!(fb.pixels().iter().all(|&p| p == RED));
    }
}
