mod utils;

use smart_leds::RGB8;

pub use utils::{blend_colors, hue_wheel, scale8};

pub type Rgb = RGB8;
pub use smart_leds::hsv::hsv2rgb;

/// Named colors used as pattern defaults
pub mod colors {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GOLD: Rgb = Rgb::new(255, 170, 0);
    pub const SILVER: Rgb = Rgb::new(160, 160, 160);
}
