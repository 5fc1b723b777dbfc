//! Software framebuffer for the Tessera watch face
//!
//! Provides an in-memory pixel buffer implementing the core `Surface`
//! trait. The firmware renders the face into this buffer and flushes
//! it to the panel; host tests inspect it pixel by pixel.

#![no_std]
#![deny(unsafe_code)]

pub mod framebuffer;

pub use framebuffer::{Framebuffer, FACE_HEIGHT, FACE_WIDTH};
