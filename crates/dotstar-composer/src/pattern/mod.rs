//! Pattern system
//!
//! A pattern is a stateful animation routine that renders one frame into an
//! [`LedStrip`] per [`Pattern::update`] call. Patterns are open: any type that
//! implements the trait can be handed to the [`PatternEngine`](crate::PatternEngine).
//!
//! The common knobs (palette, static flag, delay, spacing, measured value) live
//! in [`PatternSettings`]; the trait provides accessors over it so concrete
//! patterns only implement rendering.

mod chase;
mod half_and_half;
mod level_indicator;
mod rainbow;
mod solid;
mod twinkle;

pub use chase::Chase;
pub use half_and_half::HalfAndHalf;
pub use level_indicator::LevelIndicator;
pub use rainbow::Rainbow;
pub use solid::SolidColor;
pub use twinkle::Twinkle;

use embassy_time::{Duration, Instant};

use crate::{color::Rgb, driver::LedStrip};

/// Maximum number of colors a pattern palette can hold
pub const PALETTE_CAPACITY: usize = 16;

/// Ordered list of colors used by a pattern
pub type Palette = heapless::Vec<Rgb, PALETTE_CAPACITY>;

/// Knobs every pattern exposes, independent of the strip type
///
/// Implementors provide [`settings`](PatternControls::settings) and
/// [`color_count`](PatternControls::color_count); the rest has defaults.
pub trait PatternControls {
    /// Shared pattern settings
    fn settings(&self) -> &PatternSettings;

    /// Mutable shared pattern settings
    fn settings_mut(&mut self) -> &mut PatternSettings;

    /// Number of colors the pattern uses from its palette
    fn color_count(&self) -> usize;

    /// Reset animation state
    ///
    /// Called when the engine adopts the pattern as the active one.
    fn reset(&mut self) {}

    /// Replace the palette
    ///
    /// The length is not checked against [`color_count`](PatternControls::color_count);
    /// missing entries fall back to the pattern defaults, extra entries are
    /// ignored by the pattern.
    fn set_colors(&mut self, colors: &[Rgb]) {
        self.settings_mut().set_colors(colors);
    }

    /// Current palette, the pattern defaults if none have been set
    fn colors(&self) -> &[Rgb] {
        self.settings().colors()
    }

    /// Static patterns render one frame per start, dynamic ones run until stopped
    fn set_static(&mut self, is_static: bool) {
        self.settings_mut().is_static = is_static;
    }

    fn is_static(&self) -> bool {
        self.settings().is_static
    }

    /// Pattern-defined delay, typically the time between animation steps
    fn set_delay(&mut self, delay: Duration) {
        self.settings_mut().delay = delay;
    }

    fn delay(&self) -> Duration {
        self.settings().delay
    }

    /// Pattern-defined spacing, typically pixels between repeated elements
    fn set_spacing(&mut self, spacing: usize) {
        self.settings_mut().spacing = spacing;
    }

    fn spacing(&self) -> usize {
        self.settings().spacing
    }

    /// External measurement rendered by live-input patterns
    fn set_measured_value(&mut self, measurement: f64) {
        self.settings_mut().measured_value = measurement;
    }

    fn measured_value(&self) -> f64 {
        self.settings().measured_value
    }
}

/// Trait for pattern implementations
///
/// `update` must return in bounded time: the engine only observes stop and
/// terminate requests between two `update` calls.
pub trait Pattern<D: LedStrip>: PatternControls + Send {
    /// Render exactly one frame into the strip and flush it
    fn update(&mut self, strip: &mut D) -> Result<(), D::Error>;
}

/// Settings shared by every pattern
#[derive(Debug, Clone)]
pub struct PatternSettings {
    defaults: &'static [Rgb],
    colors: Palette,
    is_static: bool,
    delay: Duration,
    spacing: usize,
    measured_value: f64,
}

impl PatternSettings {
    /// Create settings with a default palette
    pub fn new(defaults: &'static [Rgb], is_static: bool) -> Self {
        let mut settings = Self {
            defaults,
            colors: Palette::new(),
            is_static,
            delay: Duration::from_millis(0),
            spacing: 1,
            measured_value: 0.0,
        };
        settings.set_colors(defaults);
        settings
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replace the palette, keeping at most [`PALETTE_CAPACITY`] colors
    pub fn set_colors(&mut self, colors: &[Rgb]) {
        self.colors.clear();
        self.colors
            .extend(colors.iter().copied().take(PALETTE_CAPACITY));
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Palette entry at `index`, falling back to the default palette and then black
    pub fn color(&self, index: usize) -> Rgb {
        self.colors
            .get(index)
            .or_else(|| self.defaults.get(index))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spacing, never less than one pixel
    pub fn spacing(&self) -> usize {
        self.spacing.max(1)
    }

    pub fn measured_value(&self) -> f64 {
        self.measured_value
    }
}

/// Gate for patterns that advance one step per delay
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    last_step: Option<Instant>,
}

impl StepClock {
    pub const fn new() -> Self {
        Self { last_step: None }
    }

    /// Disarm the clock
    pub fn reset(&mut self) {
        self.last_step = None;
    }

    /// Returns `true` when a step should happen now
    ///
    /// The first call after a reset arms the clock and returns `false`, so the
    /// first frame shows the initial state. With a zero delay every later call
    /// steps.
    pub fn due(&mut self, delay: Duration) -> bool {
        let now = Instant::now();
        match self.last_step {
            None => {
                self.last_step = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) < delay => false,
            Some(_) => {
                self.last_step = Some(now);
                true
            }
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}
