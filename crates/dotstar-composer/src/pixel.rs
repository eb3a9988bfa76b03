//! A single addressable LED
//!
//! Channels are stored as bytes but every write goes through [`clamp_channel`],
//! so callers can hand in any integer (sensor readings, arithmetic results)
//! without checking the range first.

use crate::color::Rgb;

/// Estimate of the maximum current drawn by one fully lit channel, in amps.
pub const AMPS_PER_CHANNEL: f64 = 0.02;

/// Clip a channel value to the nearest value in `0..=255`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// One pixel group of the strip, with red, green and blue intensities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    /// Pixel that is switched off
    pub const OFF: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Create a pixel, clamping each channel to `0..=255`
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    pub fn set_red(&mut self, value: i32) {
        self.red = clamp_channel(value);
    }

    pub fn set_green(&mut self, value: i32) {
        self.green = clamp_channel(value);
    }

    pub fn set_blue(&mut self, value: i32) {
        self.blue = clamp_channel(value);
    }

    /// Set all three channels at once
    pub fn set(&mut self, red: i32, green: i32, blue: i32) {
        *self = Self::new(red, green, blue);
    }

    /// Set the pixel from an 8-bit color
    pub fn set_rgb(&mut self, color: Rgb) {
        *self = color.into();
    }

    /// Reset the pixel to "off" (0, 0, 0)
    pub fn reset(&mut self) {
        *self = Self::OFF;
    }

    /// Estimated current (in amps) needed to display the pixel
    pub fn current(&self) -> f64 {
        let sum = u32::from(self.red) + u32::from(self.green) + u32::from(self.blue);
        f64::from(sum) / 255.0 * AMPS_PER_CHANNEL
    }

    pub const fn rgb(&self) -> Rgb {
        Rgb {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }
}

impl From<Rgb> for Pixel {
    fn from(color: Rgb) -> Self {
        Self {
            red: color.r,
            green: color.g,
            blue: color.b,
        }
    }
}

impl From<Pixel> for Rgb {
    fn from(pixel: Pixel) -> Self {
        pixel.rgb()
    }
}
