//! Writes through the bridge register
//!
//! The bridge forwards everything written to its write register to the SPI
//! side. The controller limits the size of one I2C write, so a frame goes out
//! as several writes of `[register, payload...]`.

use embedded_hal::i2c::{I2c, Operation};
use log::trace;

use crate::config::DeviceParameters;

/// I2C bus bound to one bridge
pub struct BridgeTransport<I2C> {
    i2c: I2C,
    address: u8,
    register: u8,
    max_chunk: usize,
    log_target: Option<&'static str>,
}

impl<I2C: I2c> BridgeTransport<I2C> {
    pub fn new(i2c: I2C, parameters: &DeviceParameters) -> Self {
        Self {
            i2c,
            address: parameters.address,
            register: parameters.write_register,
            max_chunk: parameters.max_chunk,
            log_target: parameters.log_target(),
        }
    }

    /// Payload bytes per I2C write, the register takes one byte
    ///
    /// `None` means the controller only accepts single-byte writes.
    pub fn payload_per_write(&self) -> Option<usize> {
        (self.max_chunk > 1).then(|| self.max_chunk - 1)
    }

    /// Push `buffer` to the bridge
    ///
    /// Every write blocks until the bus reports completion. The first failed
    /// write aborts the transfer; nothing is retried.
    pub fn write(&mut self, buffer: &[u8]) -> Result<(), I2C::Error> {
        match self.payload_per_write() {
            Some(payload) => {
                for (index, chunk) in buffer.chunks(payload).enumerate() {
                    if let Some(target) = self.log_target {
                        trace!(target: target, "chunk {}: {} bytes", index, chunk.len());
                    }
                    self.i2c.transaction(
                        self.address,
                        &mut [Operation::Write(&[self.register]), Operation::Write(chunk)],
                    )?;
                }
            }
            None => {
                if let Some(target) = self.log_target {
                    trace!(target: target, "writing {} bytes one at a time", buffer.len());
                }
                for byte in buffer {
                    self.i2c.write(self.address, &[self.register, *byte])?;
                }
            }
        }
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}
