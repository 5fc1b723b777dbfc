//! Settings persistence
//!
//! Stores the postcard-serialized `FaceSettings` record under a single
//! key in a wear-leveled partition at the end of flash. A missing,
//! corrupt, or version-mismatched record falls back to defaults.

use defmt::*;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use tessera_core::FaceSettings;

/// Total flash size on the board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Size of the settings partition at the end of flash
const SETTINGS_PARTITION_SIZE: usize = 16 * 1024;

/// Flash range for the settings partition
const SETTINGS_RANGE: core::ops::Range<u32> =
    ((FLASH_SIZE - SETTINGS_PARTITION_SIZE) as u32)..(FLASH_SIZE as u32);

/// Storage key for the settings record
const SETTINGS_KEY: u8 = 1;

/// Scratch buffer size; the serialized record is a handful of bytes
const BUF_SIZE: usize = 64;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsStoreError {
    /// Flash operation failed
    Storage,
    /// Record does not fit the scratch buffer
    TooLarge,
}

/// Wear-leveled key-value store for the face settings
pub struct SettingsStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> SettingsStore<'d> {
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Load the persisted settings, falling back to defaults when the
    /// record is missing, undecodable, or from an incompatible version.
    /// Never fails: the face always renders with best-available data.
    pub async fn load(&mut self) -> FaceSettings {
        let mut data_buffer = [0u8; BUF_SIZE];

        let result = map::fetch_item::<u8, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &SETTINGS_KEY,
        )
        .await;

        match result {
            Ok(Some(data)) => match postcard::from_bytes::<FaceSettings>(data) {
                Ok(settings) if settings.is_supported() => {
                    info!("Loaded settings from flash");
                    settings
                }
                Ok(settings) => {
                    warn!("Settings version {} unsupported, using defaults", settings.version);
                    FaceSettings::default()
                }
                Err(_) => {
                    warn!("Settings record corrupt, using defaults");
                    FaceSettings::default()
                }
            },
            Ok(None) => {
                info!("No settings in flash, using defaults");
                FaceSettings::default()
            }
            Err(_) => {
                warn!("Flash read failed, using defaults");
                FaceSettings::default()
            }
        }
    }

    /// Write the full settings record
    pub async fn save(&mut self, settings: &FaceSettings) -> Result<(), SettingsStoreError> {
        let mut record = [0u8; BUF_SIZE];
        let serialized = postcard::to_slice(settings, &mut record)
            .map_err(|_| SettingsStoreError::TooLarge)?;

        let mut data_buffer = [0u8; BUF_SIZE];
        map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &SETTINGS_KEY,
            &&serialized[..],
        )
        .await
        .map_err(|_| SettingsStoreError::Storage)
    }
}
