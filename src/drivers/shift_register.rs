//! 74HC595 shift-register chain on SPI0.
//!
//! Data is clocked out MSB-first on DS/SH_CP by the SPI block; the
//! storage register only changes on the rising edge of ST_CP, so outputs
//! stay glitch-free while a frame is being shifted in.
//!
//! Bytes shift through the chain, so the byte for the register furthest
//! from the MCU goes out first.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::{BusError, Result};

pub struct ShiftRegister<SPI, OUT> {
    spi: SPI,
    /// ST_CP, storage-register clock.
    latch: OUT,
    /// /OE, active low.
    output_enable: OUT,
    /// /MR, active low.
    reset: OUT,
    last_frame: [u8; 3],
}

impl<SPI, OUT> ShiftRegister<SPI, OUT>
where
    SPI: SpiBus,
    OUT: OutputPin,
{
    pub fn new(spi: SPI, latch: OUT, output_enable: OUT, reset: OUT) -> Self {
        Self {
            spi,
            latch,
            output_enable,
            reset,
            last_frame: [0; 3],
        }
    }

    /// Latch idle low, outputs enabled, reset released.
    pub fn init(&mut self) -> Result<()> {
        self.latch.set_low().map_err(|e| BusError::gpio(&e))?;
        self.output_enable.set_low().map_err(|e| BusError::gpio(&e))?;
        self.reset.set_high().map_err(|e| BusError::gpio(&e))?;
        Ok(())
    }

    /// Shift `frame` into the chain (`frame[0]` = register nearest the
    /// MCU) and latch it onto the outputs.
    pub fn write_chain(&mut self, frame: &[u8]) -> Result<()> {
        for byte in frame.iter().rev() {
            self.spi
                .write(core::slice::from_ref(byte))
                .map_err(|e| BusError::spi(&e))?;
        }
        self.spi.flush().map_err(|e| BusError::spi(&e))?;
        self.latch()?;

        let n = frame.len().min(self.last_frame.len());
        self.last_frame[..n].copy_from_slice(&frame[..n]);
        Ok(())
    }

    /// Pulse ST_CP to copy the shift stage to the outputs.
    pub fn latch(&mut self) -> Result<()> {
        self.latch.set_high().map_err(|e| BusError::gpio(&e))?;
        self.latch.set_low().map_err(|e| BusError::gpio(&e))?;
        Ok(())
    }

    /// Tri-state (`false`) or drive (`true`) the parallel outputs.
    pub fn output_enable(&mut self, enabled: bool) -> Result<()> {
        let r = if enabled {
            self.output_enable.set_low()
        } else {
            self.output_enable.set_high()
        };
        r.map_err(|e| BusError::gpio(&e).into())
    }

    /// Zero the shift stage with /MR and latch the zeros through.
    pub fn clear(&mut self) -> Result<()> {
        self.reset.set_low().map_err(|e| BusError::gpio(&e))?;
        self.reset.set_high().map_err(|e| BusError::gpio(&e))?;
        self.latch()?;
        self.last_frame = [0; 3];
        Ok(())
    }

    /// Frame most recently latched, nearest register first.
    pub fn last_frame(&self) -> [u8; 3] {
        self.last_frame
    }
}
