//! Board-agnostic logic for the Tessera watch face
//!
//! The face encodes the current time as four abstract shapes: the hour
//! (mod 12) and the five-minute bucket are each split into a pair of
//! shape edge counts summing to the encoded value, then drawn at four
//! fixed canvas positions. This crate contains everything that does not
//! depend on specific hardware:
//!
//! - Shape-count splitting with injected randomness
//! - Regular-polygon vertex generation
//! - Shape rendering over the `Surface` abstraction
//! - Face composition (the full render pass)
//! - Palette and persisted-settings type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod face;
pub mod geometry;
pub mod settings;
pub mod shape;
pub mod split;
pub mod surface;

pub use color::Color;
pub use face::{render_face, TimeSample};
pub use geometry::{polygon_vertices, Point};
pub use settings::{FaceSettings, Palette};
pub use shape::draw_shape;
pub use split::{split, Bucket, ShapePair};
pub use surface::{Surface, SurfaceError};
