use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::{driver::LedStrip, pattern::Pattern};

/// Command channel capacity
pub const COMMAND_CHANNEL_SIZE: usize = 4;

/// Commands that can be sent to the pattern worker
pub enum Command<D: LedStrip> {
    /// Stage a pattern for the next start
    SetPattern(Box<dyn Pattern<D>>),
    /// Adopt the staged pattern (or restart the active one) and run it
    ///
    /// Carries the stop request count seen by the caller when it started.
    Start { stops_seen: u32 },
    /// Stop the active pattern after its current update
    Stop,
    /// Forward an external measurement to the staged and active patterns
    SetMeasuredValue(f64),
    /// Stop and exit the worker for good
    Terminate,
}

impl<D: LedStrip> Command<D> {
    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetPattern(_) => "set_pattern",
            Self::Start { .. } => "start",
            Self::Stop => "stop",
            Self::SetMeasuredValue(_) => "set_measured_value",
            Self::Terminate => "terminate",
        }
    }
}

/// Type alias for the command channel
pub type CommandChannel<D> = Channel<CriticalSectionRawMutex, Command<D>, COMMAND_CHANNEL_SIZE>;
