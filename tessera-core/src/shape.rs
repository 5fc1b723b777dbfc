//! Shape rendering
//!
//! Maps an edge count to a drawing: 0 is nothing, 1 a filled disc,
//! 2 a ring, 3 and up a regular polygon with that many sides.

use crate::color::Color;
use crate::geometry::{polygon_vertices, Point};
use crate::surface::{Surface, SurfaceError};

/// Absolute pixel inset of the ring's inner disc (not scaled with the
/// shape diameter)
pub const RING_INSET: i32 = 6;

/// Draw one shape of the given edge count centered at `center`.
///
/// The ring (edge count 2) is a disc with a concentric background-
/// colored disc punched out; when the diameter is too small for the
/// inset, the inner disc degenerates and the ring renders solid.
/// A non-positive diameter draws nothing.
pub fn draw_shape<S: Surface>(
    surface: &mut S,
    center: Point,
    diameter: i32,
    color: Color,
    background: Color,
    edge_count: u8,
) -> Result<(), SurfaceError> {
    if edge_count == 0 || diameter <= 0 {
        return Ok(());
    }

    let radius = diameter / 2;
    match edge_count {
        1 => surface.fill_disc(center, radius, color),
        2 => {
            surface.fill_disc(center, radius, color)?;
            let inner = radius - RING_INSET;
            if inner > 0 {
                surface.fill_disc(center, inner, background)?;
            }
            Ok(())
        }
        n => {
            let vertices = polygon_vertices(center, diameter, n);
            surface.fill_polygon(&vertices, color)
        }
    }
}
