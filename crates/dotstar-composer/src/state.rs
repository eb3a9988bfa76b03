//! Shared engine state for external observation
//!
//! Provides a way to observe the worker from the caller's thread without
//! touching the worker itself. Only the worker drives transitions, except
//! for the stop request and termination which the caller records eagerly.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

/// Lifecycle of the pattern worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternState {
    /// Nothing is running, the worker waits for a start
    Idle = 0,
    /// The active pattern is being updated
    Running = 1,
    /// A stop was requested and the worker has not observed it yet
    StopRequested = 2,
    /// The worker is gone for good
    Terminated = 3,
}

impl From<u8> for PatternState {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Running,
            2 => Self::StopRequested,
            3 => Self::Terminated,
            _ => Self::Idle,
        }
    }
}

/// Engine state that can be observed from outside the worker
///
/// Uses atomics for lock-free thread-safe access.
pub struct EngineStatus {
    state: AtomicU8,
    /// `update` calls made, failed ones included
    frames: AtomicU32,
    /// Runs ended by a failed `update`
    failures: AtomicU32,
    /// Stop requests issued so far, read by the worker between updates
    stop_requests: AtomicU32,
}

impl EngineStatus {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(PatternState::Idle as u8),
            frames: AtomicU32::new(0),
            failures: AtomicU32::new(0),
            stop_requests: AtomicU32::new(0),
        }
    }

    // === Read methods (for external observation) ===

    pub fn state(&self) -> PatternState {
        self.state.load(Ordering::Acquire).into()
    }

    pub fn is_terminated(&self) -> bool {
        self.state() == PatternState::Terminated
    }

    /// Number of `update` calls made by the worker so far, failed ones included
    pub fn frames(&self) -> u32 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Number of runs that ended because `update` returned an error
    pub fn failures(&self) -> u32 {
        self.failures.load(Ordering::Relaxed)
    }

    // === Write methods ===

    /// Move to `next` unless the engine is already terminated
    pub(crate) fn set_state(&self, next: PatternState) {
        let _ = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current != PatternState::Terminated as u8).then_some(next as u8)
            });
    }

    /// Number of stop requests issued so far
    pub(crate) fn stop_requests(&self) -> u32 {
        self.stop_requests.load(Ordering::Acquire)
    }

    /// Record a stop request
    ///
    /// The worker compares the request count against the one captured by the
    /// last start, so a stop is honored even if its command never gets queued.
    pub(crate) fn request_stop(&self) {
        self.stop_requests.fetch_add(1, Ordering::AcqRel);
        let _ = self.state.compare_exchange(
            PatternState::Running as u8,
            PatternState::StopRequested as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    pub(crate) fn terminate(&self) {
        self.state
            .store(PatternState::Terminated as u8, Ordering::Release);
    }

    pub(crate) fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self::new()
    }
}
