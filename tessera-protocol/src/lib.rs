//! Settings message protocol for the Tessera watch face
//!
//! Configuration updates (the three face colors) arrive from the
//! companion as framed key-value messages:
//!
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–32B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! The payload of a settings message is a sequence of five-byte
//! entries: a key byte followed by a packed 0xRRGGBB color as a
//! little-endian u32. Any subset of keys may be present; unrecognized
//! keys are skipped so newer companions stay compatible.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{
    SettingsUpdate, KEY_BACKGROUND_COLOR, KEY_HOUR_COLOR, KEY_MINUTE_COLOR, MSG_SETTINGS,
};
