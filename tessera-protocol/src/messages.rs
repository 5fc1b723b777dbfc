//! Settings message encoding and decoding
//!
//! A settings message carries up to three optional color entries as
//! `(key, u32)` pairs. Absent keys leave the corresponding palette
//! color unchanged; unrecognized keys are skipped.

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use heapless::Vec;

/// Message type ID for a settings update
pub const MSG_SETTINGS: u8 = 0x01;

// Well-known entry keys
pub const KEY_BACKGROUND_COLOR: u8 = 0x01;
pub const KEY_HOUR_COLOR: u8 = 0x02;
pub const KEY_MINUTE_COLOR: u8 = 0x03;

/// Bytes per payload entry: key + little-endian u32 value
const ENTRY_LEN: usize = 5;

/// A decoded settings update
///
/// Each field holds a packed 0xRRGGBB color if the corresponding key
/// was present in the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsUpdate {
    pub background: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl SettingsUpdate {
    /// True if no entry is present
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.hour.is_none() && self.minute.is_none()
    }

    /// Encode this update into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
        for (key, value) in [
            (KEY_BACKGROUND_COLOR, self.background),
            (KEY_HOUR_COLOR, self.hour),
            (KEY_MINUTE_COLOR, self.minute),
        ] {
            if let Some(value) = value {
                payload.push(key).map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(&value.to_le_bytes())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
            }
        }
        Frame::new(MSG_SETTINGS, &payload)
    }

    /// Decode an update from a frame.
    ///
    /// A truncated trailing entry makes the whole frame invalid;
    /// entries with unknown keys are skipped. Duplicate keys keep the
    /// last value.
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        if frame.msg_type != MSG_SETTINGS {
            return Err(FrameError::UnknownMessage);
        }
        if frame.payload.len() % ENTRY_LEN != 0 {
            return Err(FrameError::InvalidFrame);
        }

        let mut update = SettingsUpdate::default();
        for entry in frame.payload.chunks_exact(ENTRY_LEN) {
            let value = u32::from_le_bytes([entry[1], entry[2], entry[3], entry[4]]);
            match entry[0] {
                KEY_BACKGROUND_COLOR => update.background = Some(value),
                KEY_HOUR_COLOR => update.hour = Some(value),
                KEY_MINUTE_COLOR => update.minute = Some(value),
                _ => {} // forward compatibility
            }
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_full() {
        let update = SettingsUpdate {
            background: Some(0xFFFFFF),
            hour: Some(0xCD2231),
            minute: Some(0x3122CD),
        };
        let frame = update.to_frame().unwrap();
        assert_eq!(frame.payload.len(), 3 * ENTRY_LEN);
        assert_eq!(SettingsUpdate::from_frame(&frame).unwrap(), update);
    }

    #[test]
    fn test_roundtrip_partial() {
        let update = SettingsUpdate {
            background: None,
            hour: Some(0x123456),
            minute: None,
        };
        let frame = update.to_frame().unwrap();
        assert_eq!(frame.payload.len(), ENTRY_LEN);
        assert_eq!(SettingsUpdate::from_frame(&frame).unwrap(), update);
    }

    #[test]
    fn test_empty_update() {
        let update = SettingsUpdate::default();
        assert!(update.is_empty());

        let frame = update.to_frame().unwrap();
        assert!(frame.payload.is_empty());
        assert!(SettingsUpdate::from_frame(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_skipped() {
        let mut payload = [0u8; 2 * ENTRY_LEN];
        payload[0] = 0x7F; // not a known key
        payload[1..5].copy_from_slice(&0xAABBCCu32.to_le_bytes());
        payload[5] = KEY_MINUTE_COLOR;
        payload[6..10].copy_from_slice(&0x010203u32.to_le_bytes());

        let frame = Frame::new(MSG_SETTINGS, &payload).unwrap();
        let update = SettingsUpdate::from_frame(&frame).unwrap();
        assert_eq!(
            update,
            SettingsUpdate {
                background: None,
                hour: None,
                minute: Some(0x010203),
            }
        );
    }

    #[test]
    fn test_truncated_entry_rejected() {
        let frame = Frame::new(MSG_SETTINGS, &[KEY_HOUR_COLOR, 0x01, 0x02]).unwrap();
        assert_eq!(
            SettingsUpdate::from_frame(&frame),
            Err(FrameError::InvalidFrame)
        );
    }

    #[test]
    fn test_wrong_message_type_rejected() {
        let frame = Frame::new(0x42, &[]).unwrap();
        assert_eq!(
            SettingsUpdate::from_frame(&frame),
            Err(FrameError::UnknownMessage)
        );
    }
}
