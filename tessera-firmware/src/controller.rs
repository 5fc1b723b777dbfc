//! Controller task
//!
//! Owns the palette, the random stream, the framebuffer, and the
//! panel. Repaints on tick signals and applies inbound settings
//! updates; because both happen in this one task, a render pass never
//! interleaves with a palette mutation.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::SPI0;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tessera_core::{render_face, FaceSettings, TimeSample};
use tessera_display::Framebuffer;

use crate::channels::{REDRAW, SETTINGS_CHANNEL};
use crate::flash::SettingsStore;
use crate::panel::Panel;

/// Controller task - renders the face and applies settings updates
#[embassy_executor::task]
pub async fn controller_task(
    mut store: SettingsStore<'static>,
    mut panel: Panel<'static, SPI0>,
    framebuffer: &'static mut Framebuffer,
    settings: FaceSettings,
    seed: u64,
) {
    info!("Controller task started");

    let mut settings = settings;
    // Seeded once for the process lifetime; every split draws from
    // this one stream
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut last = TimeSample { hour: 0, minute: 0 };

    if let Err(e) = panel.init().await {
        warn!("Panel init failed: {:?}", e);
    }

    loop {
        match select(REDRAW.wait(), SETTINGS_CHANNEL.receive()).await {
            Either::First(now) => {
                last = now;
            }
            Either::Second(update) => {
                // Every received message persists and repaints, even
                // when it carries no known keys
                settings
                    .palette
                    .apply_hex(update.background, update.hour, update.minute);
                info!("Palette updated");

                // Persist the full record; a write failure costs only
                // the next boot's colors
                if store.save(&settings).await.is_err() {
                    warn!("Failed to persist settings");
                }
            }
        }

        if let Err(e) = render_face(framebuffer, last, &settings.palette, &mut rng) {
            warn!("Render failed: {:?}", e);
            continue;
        }
        if let Err(e) = panel.flush(framebuffer) {
            warn!("Panel flush failed: {:?}", e);
        }
    }
}
