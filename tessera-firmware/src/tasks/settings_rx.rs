//! Settings receive task
//!
//! Receives configuration frames from the companion link and feeds
//! decoded updates to the controller. Malformed frames are logged and
//! dropped; the parser resynchronizes on the next start byte.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use tessera_protocol::{FrameParser, SettingsUpdate};

use crate::channels::SETTINGS_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Settings RX task - parses inbound frames into palette updates
#[embassy_executor::task]
pub async fn settings_rx_task(mut rx: BufferedUartRx) {
    info!("Settings RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match SettingsUpdate::from_frame(&frame) {
                            Ok(update) => {
                                if SETTINGS_CHANNEL.try_send(update).is_err() {
                                    warn!("Settings channel full, dropping update");
                                }
                            }
                            Err(e) => {
                                warn!("Bad settings message: {:?}", e);
                            }
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
