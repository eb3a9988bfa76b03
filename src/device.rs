use dotstar_composer::{LedStrip, Pixel, Rgb};
use embedded_hal::i2c::I2c;
use log::debug;

use crate::{
    config::DeviceParameters,
    error::Error,
    frame::{self, encode_frame_into},
    transport::BridgeTransport,
};

/// Human-readable device name
pub const DEVICE_NAME: &str = "DotStar LED via I2C/SPI Bridge";

/// DotStar strip driven through an I2C/SPI bridge
///
/// The device owns the strip and a copy of its parameters. Pixels are only
/// written to the hardware by [`update`](Self::update).
///
/// The estimated current of a frame is capped at
/// [`DeviceParameters::max_output_amps`] by dimming the whole strip. Exceeding
/// what the controller can deliver may damage it; keep the budget honest.
pub struct DotStarBridgedLed<I2C> {
    parameters: DeviceParameters,
    pixels: Box<[Pixel]>,
    frame: Vec<u8>,
    transport: BridgeTransport<I2C>,
}

impl<I2C: I2c> DotStarBridgedLed<I2C> {
    /// Create a strip of `parameters.pixel_count` pixels, all off
    pub fn new(i2c: I2C, parameters: DeviceParameters) -> Self {
        let transport = BridgeTransport::new(i2c, &parameters);
        if let Some(target) = parameters.log_target() {
            debug!(
                target: target,
                "{}: {} pixels at {:#04x}, {} bytes per write, {} A budget",
                DEVICE_NAME,
                parameters.pixel_count,
                parameters.address,
                parameters.max_chunk,
                parameters.max_output_amps
            );
        }
        Self {
            parameters,
            pixels: vec![Pixel::OFF; parameters.pixel_count].into_boxed_slice(),
            frame: Vec::with_capacity(frame::frame_len(parameters.pixel_count)),
            transport,
        }
    }

    /// Switch every pixel off, without touching the hardware
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(Pixel::reset);
    }

    /// Set every pixel to `color`, without touching the hardware
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.into());
    }

    /// Encode the strip and write it to the bridge
    pub fn update(&mut self) -> Result<(), Error<I2C::Error>> {
        encode_frame_into(&self.pixels, self.parameters.max_output_amps, &mut self.frame);
        if let Some(target) = self.parameters.log_target() {
            debug!(
                target: target,
                "flush: {} pixels, {} bytes, {:.3} A estimated",
                self.pixels.len(),
                self.frame.len(),
                self.estimated_current()
            );
        }
        self.transport
            .write(&self.frame)
            .map_err(Error::Transport)
    }

    /// Write raw bytes to the bridge register in chunks
    pub fn write(&mut self, buffer: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.transport.write(buffer).map_err(Error::Transport)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn pixel_mut(&mut self, index: usize) -> Option<&mut Pixel> {
        self.pixels.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The device's own copy of its parameters
    pub fn parameters(&self) -> &DeviceParameters {
        &self.parameters
    }

    /// Estimated current of the strip before budget scaling, in amps
    pub fn estimated_current(&self) -> f64 {
        frame::total_current(&self.pixels)
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.transport.release()
    }
}

impl<I2C: I2c> LedStrip for DotStarBridgedLed<I2C> {
    type Error = Error<I2C::Error>;

    fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        DotStarBridgedLed::update(self)
    }
}
