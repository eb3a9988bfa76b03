//! APA102 framing
//!
//! A frame for `N` pixels is laid out as:
//!
//! ```text
//! [00 00 00 00] [FF b g r] x N [00] x ceil(N / 16)
//! ```
//!
//! The end frame is zeroes rather than the usual `0xFF`: with a longer strip
//! than configured this keeps the first unused pixels dark.

use dotstar_composer::Pixel;

/// Start frame: one word of zeroes
pub const HEADER_LEN: usize = 4;

/// Bytes per pixel word
pub const WORD_LEN: usize = 4;

/// One end-frame byte clocks out this many pixels
pub const PIXELS_PER_END_BYTE: usize = 16;

/// First byte of every pixel word: marker bits plus full global brightness
const WORD_START: u8 = 0xFF;

const END_BYTE: u8 = 0x00;

/// Length of the encoded frame for `pixel_count` pixels
pub const fn frame_len(pixel_count: usize) -> usize {
    HEADER_LEN + WORD_LEN * pixel_count + pixel_count.div_ceil(PIXELS_PER_END_BYTE)
}

/// Estimated current of the whole strip, in amps
pub fn total_current(pixels: &[Pixel]) -> f64 {
    pixels.iter().map(Pixel::current).sum()
}

/// Factor every channel must be multiplied by to stay within `max_output_amps`
///
/// `None` when the strip is already within budget.
pub fn budget_scale(pixels: &[Pixel], max_output_amps: f64) -> Option<f64> {
    let current = total_current(pixels);
    (current > max_output_amps).then(|| max_output_amps / current)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, scale: Option<f64>) -> u8 {
    match scale {
        Some(scale) => (f64::from(value) * scale).floor() as u8,
        None => value,
    }
}

/// Encode `pixels` into `frame`, replacing its contents
///
/// The budget is applied once to the whole strip before encoding, so all
/// channels are dimmed by the same factor.
pub fn encode_frame_into(pixels: &[Pixel], max_output_amps: f64, frame: &mut Vec<u8>) {
    let scale = budget_scale(pixels, max_output_amps);

    frame.clear();
    frame.reserve(frame_len(pixels.len()));
    frame.extend_from_slice(&[0; HEADER_LEN]);
    for pixel in pixels {
        frame.extend_from_slice(&[
            WORD_START,
            scale_channel(pixel.blue(), scale),
            scale_channel(pixel.green(), scale),
            scale_channel(pixel.red(), scale),
        ]);
    }
    frame.resize(frame_len(pixels.len()), END_BYTE);
}

/// Encode `pixels` into a new frame
pub fn encode_frame(pixels: &[Pixel], max_output_amps: f64) -> Vec<u8> {
    let mut frame = Vec::new();
    encode_frame_into(pixels, max_output_amps, &mut frame);
    frame
}
