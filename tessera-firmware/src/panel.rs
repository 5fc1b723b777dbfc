//! SPI panel driver
//!
//! Minimal ST7789 driver for the face canvas. The controller renders
//! into the software framebuffer and this driver streams it out as
//! RGB565, addressing a 144x168 window on the panel.

use embassy_rp::gpio::Output;
use embassy_rp::spi::{Blocking, Instance, Spi};
use embassy_time::{Duration, Timer};

use tessera_core::Color;
use tessera_display::{Framebuffer, FACE_HEIGHT, FACE_WIDTH};

/// ST7789 commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// 16-bit 5-6-5 color mode
const COLMOD_16BPP: u8 = 0x55;

/// SPI panel with command/data and chip-select lines
pub struct Panel<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    reset: Output<'d>,
}

impl<'d, T: Instance> Panel<'d, T> {
    pub fn new(
        spi: Spi<'d, T, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
        reset: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs, reset }
    }

    /// Hardware reset and initialization sequence
    pub async fn init(&mut self) -> Result<(), spi::Error> {
        self.reset.set_low();
        Timer::after(Duration::from_millis(50)).await;
        self.reset.set_high();
        Timer::after(Duration::from_millis(150)).await;

        self.command(cmd::SWRESET, &[])?;
        Timer::after(Duration::from_millis(150)).await;
        self.command(cmd::SLPOUT, &[])?;
        Timer::after(Duration::from_millis(10)).await;
        self.command(cmd::COLMOD, &[COLMOD_16BPP])?;
        self.command(cmd::MADCTL, &[0x00])?;
        self.command(cmd::INVON, &[])?;
        self.command(cmd::NORON, &[])?;
        self.command(cmd::DISPON, &[])
    }

    /// Stream the full framebuffer to the panel
    pub fn flush(&mut self, framebuffer: &Framebuffer) -> Result<(), spi::Error> {
        self.set_window(0, 0, FACE_WIDTH as u16 - 1, FACE_HEIGHT as u16 - 1)?;

        self.command(cmd::RAMWR, &[])?;
        self.dc.set_high();
        self.cs.set_low();

        // One row at a time keeps the scratch buffer small
        let mut row = [0u8; FACE_WIDTH * 2];
        let mut result = Ok(());
        for y in 0..FACE_HEIGHT {
            let pixels = &framebuffer.pixels()[y * FACE_WIDTH..(y + 1) * FACE_WIDTH];
            for (chunk, &pixel) in row.chunks_exact_mut(2).zip(pixels) {
                chunk.copy_from_slice(&rgb565(pixel).to_be_bytes());
            }
            result = self.spi.blocking_write(&row);
            if result.is_err() {
                break;
            }
        }

        // Deselect even on a failed transfer
        self.cs.set_high();
        result
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), spi::Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])
    }

    fn command(&mut self, command: u8, args: &[u8]) -> Result<(), spi::Error> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.blocking_write(&[command]);
        if result.is_ok() && !args.is_empty() {
            self.dc.set_high();
            result = self.spi.blocking_write(args);
        }
        self.cs.set_high();
        result
    }
}

/// Pack a color into 5-6-5 format
fn rgb565(color: Color) -> u16 {
    ((color.r as u16 & 0xF8) << 8) | ((color.g as u16 & 0xFC) << 3) | (color.b as u16 >> 3)
}
