use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::color::Rgb;

/// Fade `value` to `scale / 256` of its level
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * u16::from(scale)) >> 8) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(from: u8, to: u8, amount: u8) -> u8 {
    let from = i32::from(from);
    let delta = i32::from(to) - from;
    (from + ((delta * i32::from(amount)) >> 8)) as u8
}

/// Mix `to` into `from`
///
/// `amount` 0 keeps `from`, 255 is (almost) all `to`.
#[inline]
pub fn blend_colors(from: Rgb, to: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: mix(from.r, to.r, amount),
        g: mix(from.g, to.g, amount),
        b: mix(from.b, to.b, amount),
    }
}

/// Fully saturated color for a hue given in degrees
///
/// `degrees` wraps around 360; `value` is the 8-bit brightness.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_wheel(degrees: f64, value: u8) -> Rgb {
    let hue = (degrees.rem_euclid(360.0) / 360.0 * 256.0) as u32;
    hsv2rgb(Hsv {
        hue: hue.min(255) as u8,
        sat: 255,
        val: value,
    })
}
