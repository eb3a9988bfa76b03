//! Solid color fill pattern

use super::{Pattern, PatternControls, PatternSettings};
use crate::{
    color::{Rgb, colors},
    driver::LedStrip,
};

const DEFAULT_COLORS: [Rgb; 1] = [colors::WHITE];

/// Fills every pixel with the first palette color
#[derive(Debug, Clone)]
pub struct SolidColor {
    settings: PatternSettings,
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            settings: PatternSettings::new(&DEFAULT_COLORS, true),
        }
    }
}

impl SolidColor {
    pub fn new(color: Rgb) -> Self {
        let mut pattern = Self::default();
        pattern.settings.set_colors(&[color]);
        pattern
    }
}

impl PatternControls for SolidColor {
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

impl<D: LedStrip> Pattern<D> for SolidColor {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        strip.fill(self.settings.color(0));
        strip.update()
    }
}
