//! DotStar pattern composer
//!
//! Architecture layers:
//! - `pixel` - Clamped RGB pixel with a current-draw estimate
//! - `driver` - Strip abstraction (`[LedStrip]` trait) implemented by devices
//! - `pattern` - Pattern contract ([`Pattern`]) and built-in routines
//! - `engine` - Background worker that runs one pattern at a time
//! - `command` - Messages from the caller to the worker
//! - `state` - Shared state for external observation
//!
//! The engine is generic over `LedStrip`, allowing different hardware backends.

pub mod color;
pub mod command;
pub mod driver;
pub mod engine;
pub mod pattern;
pub mod pixel;
pub mod state;

// Color exports
pub use color::Rgb;

// Driver exports
pub use driver::LedStrip;

// Engine exports
pub use engine::{EngineConfig, PatternEngine};

// Pattern exports
pub use pattern::{Palette, Pattern, PatternControls, PatternSettings};

// Pixel exports
pub use pixel::{AMPS_PER_CHANNEL, Pixel, clamp_channel};

// State exports
pub use state::{EngineStatus, PatternState};
