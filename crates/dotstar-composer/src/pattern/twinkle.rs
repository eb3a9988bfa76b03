//! Random sparkles fading over a background

use embassy_time::{Duration, Instant};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Pattern, PatternControls, PatternSettings, StepClock};
use crate::{
    color::{Rgb, blend_colors, colors, scale8},
    driver::LedStrip,
};

const DEFAULT_COLORS: [Rgb; 2] = [colors::BLACK, colors::WHITE];
const DEFAULT_SPACING: usize = 10;
const DEFAULT_DELAY_MS: u64 = 50;
/// Per-step decay of a sparkle (192/256 of its previous level)
const DECAY: u8 = 192;

/// Twinkle pattern: color 0 is the background, color 1 the sparkles
///
/// Every `delay` all sparkles fade and roughly one new sparkle per
/// `spacing` pixels lights up at a random position.
#[derive(Debug, Clone)]
pub struct Twinkle {
    settings: PatternSettings,
    clock: StepClock,
    rng: SmallRng,
    levels: Vec<u8>,
}

impl Default for Twinkle {
    fn default() -> Self {
        Self::with_seed(Instant::now().as_ticks())
    }
}

impl Twinkle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a twinkle pattern with a reproducible sparkle sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            settings: PatternSettings::new(&DEFAULT_COLORS, false)
                .with_spacing(DEFAULT_SPACING)
                .with_delay(Duration::from_millis(DEFAULT_DELAY_MS)),
            clock: StepClock::new(),
            rng: SmallRng::seed_from_u64(seed),
            levels: Vec::new(),
        }
    }

    fn step(&mut self) {
        for level in &mut self.levels {
            *level = scale8(*level, DECAY);
        }
        let len = self.levels.len();
        if len == 0 {
            return;
        }
        let sparkles = (len / self.settings.spacing()).max(1);
        for _ in 0..sparkles {
            let index = self.rng.gen_range(0..len);
            self.levels[index] = u8::MAX;
        }
    }
}

impl PatternControls for Twinkle {
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
        self.levels.clear();
    }
}

impl<D: LedStrip> Pattern<D> for Twinkle {
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error> {
        self.levels.resize(strip.len(), 0);
        if self.clock.due(self.settings.delay()) {
            self.step();
        }

        let background = self.settings.color(0);
        let sparkle = self.settings.color(1);
        for (pixel, level) in strip.pixels_mut().iter_mut().zip(&self.levels) {
            pixel.set_rgb(blend_colors(background, sparkle, *level));
        }
        strip.update()
    }
}
