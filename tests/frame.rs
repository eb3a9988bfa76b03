//! Wire framing and the current budget.

use dotstar_bridge::{
    Pixel, budget_scale, encode_frame,
    frame::{HEADER_LEN, total_current},
    frame_len,
};

fn words(frame: &[u8], pixels: usize) -> Vec<[u8; 4]> {
    frame[HEADER_LEN..HEADER_LEN + 4 * pixels]
        .chunks(4)
        .map(|word| [word[0], word[1], word[2], word[3]])
        .collect()
}

#[test]
fn frame_length_covers_header_words_and_end_frame() {
    assert_eq!(frame_len(0), 4);
    assert_eq!(frame_len(1), 9);
    assert_eq!(frame_len(16), 4 + 64 + 1);
    assert_eq!(frame_len(17), 4 + 68 + 2);
    assert_eq!(frame_len(30), 4 + 120 + 2);
}

#[test]
fn pixel_words_are_blue_green_red() {
    let pixels = [Pixel::new(10, 0, 0), Pixel::new(1, 2, 3)];
    let frame = encode_frame(&pixels, 10.0);

    assert_eq!(frame.len(), frame_len(2));
    assert_eq!(&frame[..4], &[0, 0, 0, 0]);
    assert_eq!(&frame[4..8], &[0xFF, 0, 0, 10]);
    assert_eq!(&frame[8..12], &[0xFF, 3, 2, 1]);
    assert_eq!(&frame[12..], &[0x00]);
}

#[test]
fn end_frame_is_zeroes() {
    let pixels = vec![Pixel::new(1, 1, 1); 33];
    let frame = encode_frame(&pixels, 10.0);
    assert_eq!(frame.len(), frame_len(33));
    assert_eq!(&frame[4 + 4 * 33..], &[0, 0, 0]);
}

#[test]
fn within_budget_is_not_scaled() {
    let pixels = vec![Pixel::new(200, 100, 50); 4];
    assert_eq!(budget_scale(&pixels, 1.0), None);

    let frame = encode_frame(&pixels, 1.0);
    assert!(words(&frame, 4).iter().all(|word| *word == [0xFF, 50, 100, 200]));
}

#[test]
fn thirty_white_pixels_are_dimmed_to_the_default_budget() {
    let pixels = vec![Pixel::new(255, 255, 255); 30];
    // 30 x 0.06 A = 1.8 A against 0.2 A
    assert!((total_current(&pixels) - 1.8).abs() < 1e-9);

    let frame = encode_frame(&pixels, 0.2);
    assert!(words(&frame, 30).iter().all(|word| *word == [0xFF, 28, 28, 28]));
}

#[test]
fn eighteen_amps_of_white_are_dimmed_to_two() {
    let pixels = vec![Pixel::new(255, 255, 255); 300];
    assert!((total_current(&pixels) - 18.0).abs() < 1e-9);

    let frame = encode_frame(&pixels, 0.2);
    assert_eq!(frame.len(), frame_len(300));
    assert!(words(&frame, 300).iter().all(|word| *word == [0xFF, 2, 2, 2]));
}

#[test]
fn scaling_floors_every_channel_by_the_same_factor() {
    let pixels = [
        Pixel::new(200, 100, 50),
        Pixel::new(255, 0, 17),
        Pixel::new(3, 250, 99),
        Pixel::OFF,
    ];
    let budget = 0.03;
    let scale = budget_scale(&pixels, budget).expect("over budget");
    assert!(scale < 1.0);

    let frame = encode_frame(&pixels, budget);
    let mut scaled = Vec::new();
    for (pixel, word) in pixels.iter().zip(words(&frame, pixels.len())) {
        let expect = |channel: u8| (f64::from(channel) * scale).floor() as u8;
        assert_eq!(
            word,
            [0xFF, expect(pixel.blue()), expect(pixel.green()), expect(pixel.red())]
        );
        scaled.push(Pixel::new(
            i32::from(word[3]),
            i32::from(word[2]),
            i32::from(word[1]),
        ));
    }
    assert!(total_current(&scaled) <= budget);
}

#[test]
fn empty_strip_is_only_a_header() {
    assert_eq!(encode_frame(&[], 0.2), vec![0, 0, 0, 0]);
}
