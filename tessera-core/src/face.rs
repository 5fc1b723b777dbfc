//! Face composition
//!
//! One render pass: fill the background, split the hour and minute
//! buckets into shape pairs, and draw the four shapes at fixed
//! fractional canvas positions.

use rand::RngCore;

use crate::geometry::Point;
use crate::settings::Palette;
use crate::shape::draw_shape;
use crate::split::{split, Bucket};
use crate::surface::{Surface, SurfaceError};

/// The wall-clock reading a render pass encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    /// Hour in 24-hour form, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

// Shape positions as fractions of the surface size
const LEFT_COL: f32 = 0.35;
const RIGHT_COL: f32 = 0.65;
const HOUR_ROW: f32 = 0.35;
const MINUTE_ROW: f32 = 0.65;

/// Each shape's diameter is a fifth of the smaller surface dimension
const DIAMETER_DIVISOR: u32 = 5;

/// Render the full face for the given time and palette.
///
/// Deterministic given `now` and `palette`, up to the randomized
/// choice of splits drawn from `rng`.
pub fn render_face<S: Surface>(
    surface: &mut S,
    now: TimeSample,
    palette: &Palette,
    rng: &mut impl RngCore,
) -> Result<(), SurfaceError> {
    let (width, height) = surface.dimensions();
    surface.clear(palette.background)?;

    let diameter = (width.min(height) / DIAMETER_DIVISOR) as i32;

    let hours = split(Bucket::from_hour(now.hour), rng);
    draw_shape(
        surface,
        position(width, height, LEFT_COL, HOUR_ROW),
        diameter,
        palette.hour,
        palette.background,
        hours.first,
    )?;
    draw_shape(
        surface,
        position(width, height, RIGHT_COL, HOUR_ROW),
        diameter,
        palette.hour,
        palette.background,
        hours.second,
    )?;

    let minutes = split(Bucket::from_minute(now.minute), rng);
    draw_shape(
        surface,
        position(width, height, LEFT_COL, MINUTE_ROW),
        diameter,
        palette.minute,
        palette.background,
        minutes.first,
    )?;
    draw_shape(
        surface,
        position(width, height, RIGHT_COL, MINUTE_ROW),
        diameter,
        palette.minute,
        palette.background,
        minutes.second,
    )?;

    Ok(())
}

/// A shape position as fractions of the surface size, truncated to
/// whole pixels
fn position(width: u32, height: u32, fx: f32, fy: f32) -> Point {
    Point::new((width as f32 * fx) as i32, (height as f32 * fy) as i32)
}
