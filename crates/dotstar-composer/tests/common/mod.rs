//! Test doubles shared by the composer integration tests.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::thread;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use dotstar_composer::{LedStrip, Pattern, PatternControls, PatternSettings, Pixel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushFailed;

/// In-memory strip that counts flushes
pub struct MemoryStrip {
    pub pixels: Vec<Pixel>,
    pub flushes: usize,
    pub fail_flushes: bool,
}

impl MemoryStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Pixel::OFF; len],
            flushes: 0,
            fail_flushes: false,
        }
    }

    pub fn failing(len: usize) -> Self {
        Self {
            fail_flushes: true,
            ..Self::new(len)
        }
    }
}

impl LedStrip for MemoryStrip {
    type Error = FlushFailed;

    fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    fn update(&mut self) -> Result<(), FlushFailed> {
        if self.fail_flushes {
            return Err(FlushFailed);
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Pattern that counts its updates through a shared counter
pub struct CountingPattern {
    settings: PatternSettings,
    updates: Arc<AtomicUsize>,
    resets: Arc<AtomicUsize>,
    /// Blocks the first update for this long
    stall: Option<StdDuration>,
}

impl CountingPattern {
    pub fn new(is_static: bool) -> Self {
        Self {
            settings: PatternSettings::new(&[], is_static),
            updates: Arc::new(AtomicUsize::new(0)),
            resets: Arc::new(AtomicUsize::new(0)),
            stall: None,
        }
    }

    /// Pattern whose first update takes `stall` to return
    pub fn stalling(is_static: bool, stall: StdDuration) -> Self {
        Self {
            stall: Some(stall),
            ..Self::new(is_static)
        }
    }

    pub fn updates(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.updates)
    }

    pub fn resets(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.resets)
    }
}

impl PatternControls for CountingPattern {
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
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

impl Pattern<MemoryStrip> for CountingPattern {
    fn update(&mut self, strip: &mut MemoryStrip) -> Result<(), FlushFailed> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if let Some(stall) = self.stall.take() {
            thread::sleep(stall);
        }
        strip.update()
    }
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Poll `condition` for up to two seconds
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = StdInstant::now() + StdDuration::from_secs(2);
    while StdInstant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(StdDuration::from_millis(1));
    }
    condition()
}

pub fn settle() {
    thread::sleep(StdDuration::from_millis(50));
}
