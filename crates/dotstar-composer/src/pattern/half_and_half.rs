//! Split the strip into two solid halves
//!
//! Handy for showing the state of two independent things on one strip, e.g.
//! the contents of a left and a right collector.

use super::{Pattern, PatternControls, PatternSettings};
use crate::{
    color::{Rgb, colors},
    driver::LedStrip,
};

const DEFAULT_COLORS: [Rgb; 2] = [colors::GOLD, colors::SILVER];

/// First half of the strip in color 0, second half in color 1
///
/// With an odd pixel count the extra pixel belongs to the first half.
#[derive(Debug, Clone)]
pub struct HalfAndHalf {
    settings: PatternSettings,
}

impl Default for HalfAndHalf {
    fn default() -> Self {
        Self {
            settings: PatternSettings::new(&DEFAULT_COLORS, true),
        }
    }
}

impl HalfAndHalf {
    pub fn new(first: Rgb, second: Rgb) -> Self {
        let mut pattern = Self::default();
        pattern.settings.set_colors(&[first, second]);
        pattern
    }
}

impl PatternControls for HalfAndHalf {
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

impl<D: LedStrip> Pattern<D> for HalfAndHalf {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        let first = self.settings.color(0);
        let second = self.settings.color(1);
        let pixels = strip.pixels_mut();
        let split = pixels.len().div_ceil(2);
        for (index, pixel) in pixels.iter_mut().enumerate() {
            pixel.set_rgb(if index < split { first } else { second });
        }
        strip.update()
    }
}
