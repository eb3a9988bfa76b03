//! DotStar (APA102) LED strips behind an I2C/SPI bridge
//!
//! Layers:
//! - `config` - Copyable device parameters and controller presets
//! - `frame` - Wire framing and the current budget
//! - `transport` - Chunked writes through the bridge register
//! - `device` - [`DotStarBridgedLed`], the strip owner implementing [`LedStrip`]
//!
//! Patterns and the background engine live in [`dotstar_composer`].

pub mod config;
pub mod device;
pub mod error;
pub mod frame;
pub mod transport;

pub use config::{Controller, DeviceParameters};
pub use device::DotStarBridgedLed;
pub use error::Error;
pub use frame::{budget_scale, encode_frame, frame_len};

pub use dotstar_composer::{LedStrip, Pixel};
