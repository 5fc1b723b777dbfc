//! Tessera - abstract-shape watch face firmware
//!
//! Renders the current time as four abstract shapes on an RP2040-based
//! board: the hour (mod 12) and the five-minute bucket each split into
//! a pair of shapes whose edge counts sum to the encoded value.

#![no_std]
#![no_main]

mod channels;
mod controller;
mod flash;
mod panel;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tessera_display::Framebuffer;

use crate::flash::SettingsStore;
use crate::panel::Panel;

// Wall-clock epoch captured at build time (the board has no RTC)
include!(concat!(env!("OUT_DIR"), "/epoch.rs"));

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// The framebuffer is ~95 KiB; it lives here, never on a task stack
static FRAMEBUFFER: StaticCell<Framebuffer> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting");

    let p = embassy_rp::init(Default::default());

    // Load persisted settings; defaults when missing or corrupt
    let mut store = SettingsStore::new(p.FLASH, p.DMA_CH0);
    let settings = store.load().await;

    // Companion link (settings frames in, nothing out)
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    // Panel SPI: GPIO18 SCK, GPIO19 MOSI; DC/CS/RST on 20/17/21
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let panel = Panel::new(
        spi,
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_21, Level::High),
    );

    let framebuffer = FRAMEBUFFER.init(Framebuffer::new(settings.palette.background));

    info!("Initialization finished");

    spawner.spawn(tasks::tick_task(BUILD_EPOCH)).unwrap();
    spawner.spawn(tasks::settings_rx_task(rx)).unwrap();
    spawner
        .spawn(controller::controller_task(
            store,
            panel,
            framebuffer,
            settings,
            BUILD_EPOCH as u64,
        ))
        .unwrap();
}
