//! Bar graph driven by an external measurement
//!
//! The measured value (0.0 to 1.0, e.g. joystick magnitude or battery charge)
//! decides how many pixels are lit. Lit pixels take the low, mid or high color
//! depending on which third of the strip they sit in.

use super::{Pattern, PatternControls, PatternSettings};
use crate::{
    color::{Rgb, colors},
    driver::LedStrip,
};

const DEFAULT_COLORS: [Rgb; 3] = [colors::RED, colors::YELLOW, colors::GREEN];

/// Level indicator: colors are low, mid and high
#[derive(Debug, Clone)]
pub struct LevelIndicator {
    settings: PatternSettings,
}

impl Default for LevelIndicator {
    fn default() -> Self {
        Self {
            settings: PatternSettings::new(&DEFAULT_COLORS, true),
        }
    }
}

impl LevelIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lit pixels for a strip of `len` pixels
    ///
    /// Out-of-range and NaN measurements are clipped to `0.0..=1.0`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn lit_pixels(&self, len: usize) -> usize {
        let level = self.settings.measured_value();
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        ((level * len as f64).round() as usize).min(len)
    }
}

impl PatternControls for LevelIndicator {
    fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut PatternSettings {
        &mut self.settings
    }

    fn color_count(&self) -> usize {
        DEFAULT_COLORS.len()
    }
}

impl<D: LedStrip> Pattern<D> for LevelIndicator {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        let len = strip.len();
        let lit = self.lit_pixels(len);
        let bands = [
            self.settings.color(0),
            self.settings.color(1),
            self.settings.color(2),
        ];
        for (index, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            if index < lit {
                pixel.set_rgb(bands[index * bands.len() / len]);
            } else {
                pixel.reset();
            }
        }
        strip.update()
    }
}
