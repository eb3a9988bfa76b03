//! Marquee-style chase
//!
//! Every `spacing`-th pixel is lit with the foreground color and the lit
//! pixels march one step along the strip each `delay`.

use embassy_time::Duration;

use super::{Pattern, PatternControls, PatternSettings, StepClock};
use crate::{
    color::{Rgb, colors},
    driver::LedStrip,
};

const DEFAULT_COLORS: [Rgb; 2] = [colors::BLACK, colors::RED];
const DEFAULT_SPACING: usize = 4;
const DEFAULT_DELAY_MS: u64 = 100;

/// Chase pattern: color 0 is the background, color 1 the moving dots
#[derive(Debug, Clone)]
pub struct Chase {
    settings: PatternSettings,
    clock: StepClock,
    offset: usize,
}

impl Default for Chase {
    fn default() -> Self {
        Self {
            settings: PatternSettings::new(&DEFAULT_COLORS, false)
                .with_spacing(DEFAULT_SPACING)
                .with_delay(Duration::from_millis(DEFAULT_DELAY_MS)),
            clock: StepClock::new(),
            offset: 0,
        }
    }
}

impl Chase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first lit pixel
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl PatternControls for Chase {
    fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut PatternSettings {
        &mut self.settings
    }

    fn color_count(&self) -> usize {
        DEFAULT_COLORS.len()
    }

    fn reset(&mut self) {
        self.clock.reset();
        self.offset = 0;
    }
}

impl<D: LedStrip> Pattern<D> for Chase {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        let spacing = self.settings.spacing();
        if self.clock.due(self.settings.delay()) {
            self.offset += 1;
        }
        self.offset %= spacing;
        let offset = self.offset;

        let background = self.settings.color(0);
        let foreground = self.settings.color(1);
        for (index, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            let lit = index % spacing == offset;
            pixel.set_rgb(if lit { foreground } else { background });
        }
        strip.update()
    }
}
