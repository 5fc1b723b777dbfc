//! Drawing surface abstraction
//!
//! The face renders through this trait so the same logic drives the
//! software framebuffer on the host and the panel on the device.

use crate::color::Color;
use crate::geometry::Point;

/// Surface drawing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication error with a hardware-backed surface
    Communication,
    /// Polygon has too many vertices for the surface
    TooManyVertices,
}

/// A rectangular drawing surface with solid-fill primitives
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Implementations clip out-of-bounds geometry rather than erroring.
pub trait Surface {
    /// Surface size as (width, height) in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Fill an axis-aligned rectangle
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Fill a disc. A non-positive radius paints nothing.
    fn fill_disc(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError>;

    /// Fill a simple convex polygon given its vertices in order
    fn fill_polygon(&mut self, vertices: &[Point], color: Color) -> Result<(), SurfaceError>;

    /// Fill the entire surface
    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        let (width, height) = self.dimensions();
        self.fill_rect(0, 0, width, height, color)
    }
}
