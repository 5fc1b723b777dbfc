//! Inter-task communication channels
//!
//! Static embassy-sync primitives connecting the tick, settings-rx,
//! and controller tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use tessera_core::TimeSample;
use tessera_protocol::SettingsUpdate;

/// Capacity for pending settings updates from the companion
const SETTINGS_CHANNEL_SIZE: usize = 4;

/// Settings updates parsed from inbound frames
pub static SETTINGS_CHANNEL: Channel<
    CriticalSectionRawMutex,
    SettingsUpdate,
    SETTINGS_CHANNEL_SIZE,
> = Channel::new();

/// Request a repaint for the given time sample. A signal rather than a
/// channel: only the latest sample matters.
pub static REDRAW: Signal<CriticalSectionRawMutex, TimeSample> = Signal::new();
