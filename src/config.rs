#![allow(clippy::unreadable_literal)]

//! Device parameters
//!
//! Parameters are a plain `Copy` value: a device keeps its own copy, so
//! changing the caller's value after construction never reaches the device.

/// 7-bit address of the bridge (0x50 as an 8-bit write address)
pub const DEFAULT_ADDRESS: u8 = 0x28;

/// Bridge register that passes data through to the strip
pub const DEFAULT_WRITE_REGISTER: u8 = 0x01;

pub const DEFAULT_PIXEL_COUNT: usize = 30;

pub const DEFAULT_LOGGING_TAG: &str = "DotStarBridgedLED";

/// Controller hosting the I2C bus
///
/// Each controller limits the I2C transfer size and the current its IO
/// port can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Controller {
    /// Modern Robotics Core Device Interface Module, the lowest known limits
    #[default]
    ModernRoboticsDim,
    RevExpansionHub,
    /// Unknown controller, uses the conservative limits
    Other,
}

impl Controller {
    /// Largest I2C write the controller accepts, register byte included
    pub const fn max_chunk(self) -> usize {
        match self {
            Self::RevExpansionHub => 100,
            Self::ModernRoboticsDim | Self::Other => 27,
        }
    }

    /// Current the controller can supply to the strip, in amps
    pub const fn max_output_amps(self) -> f64 {
        match self {
            Self::RevExpansionHub => 1.5,
            Self::ModernRoboticsDim | Self::Other => 0.2,
        }
    }
}

/// How a strip is wired up and how much it may draw
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceParameters {
    /// 7-bit I2C address of the bridge
    pub address: u8,
    /// Largest I2C write in bytes, register byte included
    pub max_chunk: usize,
    pub pixel_count: usize,
    /// Budget for the estimated current of the whole strip, in amps
    pub max_output_amps: f64,
    /// Register prefixed to every write
    pub write_register: u8,
    pub logging_enabled: bool,
    /// `log` target used when logging is enabled
    #[cfg_attr(feature = "serde", serde(skip, default = "default_logging_tag"))]
    pub logging_tag: &'static str,
}

#[cfg(feature = "serde")]
fn default_logging_tag() -> &'static str {
    DEFAULT_LOGGING_TAG
}

impl Default for DeviceParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceParameters {
    /// Defaults for the Modern Robotics Core DIM
    pub const fn new() -> Self {
        let controller = Controller::ModernRoboticsDim;
        Self {
            address: DEFAULT_ADDRESS,
            max_chunk: controller.max_chunk(),
            pixel_count: DEFAULT_PIXEL_COUNT,
            max_output_amps: controller.max_output_amps(),
            write_register: DEFAULT_WRITE_REGISTER,
            logging_enabled: false,
            logging_tag: DEFAULT_LOGGING_TAG,
        }
    }

    /// Defaults with the transfer and current limits of `controller`
    pub const fn for_controller(controller: Controller) -> Self {
        Self::new().with_controller(controller)
    }

    /// Apply the limits of `controller`, keeping every other field
    #[must_use]
    pub const fn with_controller(mut self, controller: Controller) -> Self {
        self.max_chunk = controller.max_chunk();
        self.max_output_amps = controller.max_output_amps();
        self
    }

    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub const fn with_max_chunk(mut self, max_chunk: usize) -> Self {
        self.max_chunk = max_chunk;
        self
    }

    #[must_use]
    pub const fn with_pixel_count(mut self, pixel_count: usize) -> Self {
        self.pixel_count = pixel_count;
        self
    }

    #[must_use]
    pub const fn with_max_output_amps(mut self, max_output_amps: f64) -> Self {
        self.max_output_amps = max_output_amps;
        self
    }

    #[must_use]
    pub const fn with_write_register(mut self, write_register: u8) -> Self {
        self.write_register = write_register;
        self
    }

    /// Enable logging under `tag`
    #[must_use]
    pub const fn with_logging(mut self, tag: &'static str) -> Self {
        self.logging_enabled = true;
        self.logging_tag = tag;
        self
    }

    /// `log` target when logging is enabled
    pub const fn log_target(&self) -> Option<&'static str> {
        if self.logging_enabled {
            Some(self.logging_tag)
        } else {
            None
        }
    }
}
