//! Moving rainbow
//!
//! Each pixel gets a hue from its position plus the time since the pattern
//! was (re)started, so the wave keeps moving regardless of frame rate.

use embassy_time::{Duration, Instant};

use super::{Pattern, PatternControls, PatternSettings};
use crate::{color::hue_wheel, driver::LedStrip};

/// Pixels per full trip around the color wheel (18 degrees per pixel)
const DEFAULT_SPACING: usize = 20;
/// Time for the wave to shift by a full wheel (72 degrees per second)
const DEFAULT_CYCLE_MS: u64 = 5_000;
/// Output value, a quarter of full brightness
const DEFAULT_VALUE: u8 = 64;

/// Rainbow wave
///
/// `spacing` is the number of pixels covering the full wheel, `delay` the
/// time the wave needs to shift by one full wheel.
#[derive(Debug, Clone)]
pub struct Rainbow {
    settings: PatternSettings,
    value: u8,
    started: Instant,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            settings: PatternSettings::new(&[], false)
                .with_spacing(DEFAULT_SPACING)
                .with_delay(Duration::from_millis(DEFAULT_CYCLE_MS)),
            value: DEFAULT_VALUE,
            started: Instant::now(),
        }
    }
}

impl Rainbow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness value
    #[must_use]
    pub fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn hue_at(&self, index: usize, elapsed: Duration) -> f64 {
        let degrees_per_pixel = 360.0 / self.settings.spacing() as f64;
        let cycle_ms = self.settings.delay().as_millis().max(1) as f64;
        let shift = elapsed.as_millis() as f64 / cycle_ms * 360.0;
        index as f64 * degrees_per_pixel + shift
    }
}

impl PatternControls for Rainbow {
    fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut PatternSettings {
        &mut self.settings
    }

    fn color_count(&self) -> usize {
        0
    }

    fn reset(&mut self) {
        self.started = Instant::now();
    }
}

impl<D: LedStrip> Pattern<D> for Rainbow {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        let elapsed = self.started.elapsed();
        for (index, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            pixel.set_rgb(hue_wheel(self.hue_at(index, elapsed), self.value));
        }
        strip.update()
    }
}
