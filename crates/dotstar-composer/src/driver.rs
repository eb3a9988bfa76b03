//! LED strip abstraction layer
//!
//! Provides a trait-based abstraction over a device that owns a strip of
//! pixels and knows how to flush them to hardware, allowing patterns and the
//! engine to be hardware-agnostic.

use core::fmt::Debug;

use crate::{color::Rgb, pixel::Pixel};

/// Abstract LED strip trait
///
/// Implement this trait to support different hardware backends.
/// Patterns render into [`pixels_mut`](LedStrip::pixels_mut) and call
/// [`update`](LedStrip::update) to push the frame out.
pub trait LedStrip {
    /// Error reported when a flush fails
    type Error: Debug;

    /// Pixels in strip order
    fn pixels(&self) -> &[Pixel];

    /// Mutable access to the pixels in strip order
    fn pixels_mut(&mut self) -> &mut [Pixel];

    /// Flush the current pixels to the hardware
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Number of pixels in the strip
    fn len(&self) -> usize {
        self.pixels().len()
    }

    fn is_empty(&self) -> bool {
        self.pixels().is_empty()
    }

    /// Reset every pixel to "off" without touching the hardware
    fn clear(&mut self) {
        for pixel in self.pixels_mut() {
            pixel.reset();
        }
    }

    /// Set every pixel to one color without touching the hardware
    fn fill(&mut self, color: Rgb) {
        for pixel in self.pixels_mut() {
            pixel.set_rgb(color);
        }
    }
}
