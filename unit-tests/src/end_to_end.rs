use std::{
    thread,
    time::{Duration as StdDuration, Instant as StdInstant},
};

use dotstar_bridge::{DeviceParameters, DotStarBridgedLed, frame_len};
use dotstar_composer::{
    EngineConfig, PatternControls, PatternEngine, PatternState,
    color::colors,
    pattern::{Chase, HalfAndHalf, SolidColor},
};
use embassy_time::Duration;

use crate::bus::Bus;

type Strip = DotStarBridgedLed<Bus>;

fn engine(pixels: usize) -> PatternEngine<Strip> {
    let parameters = DeviceParameters::new()
        .with_pixel_count(pixels)
        .with_max_output_amps(100.0);
    let strip = DotStarBridgedLed::new(Bus::default(), parameters);
    PatternEngine::spawn_with_config(strip, EngineConfig::with_fps(500)).expect("spawn worker")
}

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = StdInstant::now() + StdDuration::from_secs(2);
    while StdInstant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(StdDuration::from_millis(1));
    }
    condition()
}

#[test]
fn static_pattern_reaches_the_bus_once() {
    let engine = engine(4);
    engine.set_pattern(SolidColor::new(colors::BLUE));
    engine.start_pattern();
    assert!(wait_until(|| engine.status().frames() == 1));
    assert!(wait_until(|| engine.state() == PatternState::Idle));

    let bus = engine.join().expect("strip").release();
    let stream = bus.stream();
    assert_eq!(stream.len(), frame_len(4));
    for word in stream[4..20].chunks(4) {
        assert_eq!(word, &[0xFF, 255, 0, 0]);
    }
}

#[test]
fn switching_patterns_changes_the_frames() {
    let engine = engine(4);
    engine.set_pattern(SolidColor::new(colors::RED));
    engine.start_pattern();
    assert!(wait_until(|| engine.status().frames() == 1));

    engine.set_pattern(HalfAndHalf::new(colors::GREEN, colors::BLUE));
    engine.start_pattern();
    assert!(wait_until(|| engine.status().frames() == 2));

    let strip = engine.join().expect("strip");
    let frame = &strip.release().stream()[frame_len(4)..];
    assert_eq!(&frame[4..8], &[0xFF, 0, 255, 0]);
    assert_eq!(&frame[16..20], &[0xFF, 255, 0, 0]);
}

#[test]
fn dynamic_pattern_streams_until_stopped() {
    let engine = engine(8);
    let mut chase = Chase::new();
    chase.set_delay(Duration::from_millis(0));
    engine.set_pattern(chase);
    engine.start_pattern();
    assert!(wait_until(|| engine.status().frames() >= 5));

    engine.stop_pattern();
    assert!(wait_until(|| engine.state() == PatternState::Idle));
    let frames = engine.status().frames();

    let bus = engine.join().expect("strip").release();
    let frame_bytes = u32::try_from(bus.stream().len() / frame_len(8)).expect("frame count");
    assert_eq!(frame_bytes, frames);
}

#[test]
fn bus_failure_is_counted_and_the_engine_survives() {
    let parameters = DeviceParameters::new().with_pixel_count(4);
    let strip = DotStarBridgedLed::new(
        Bus {
            nack: true,
            ..Bus::default()
        },
        parameters,
    );
    let engine = PatternEngine::spawn(strip).expect("spawn worker");

    engine.set_pattern(SolidColor::default());
    engine.start_pattern();
    assert!(wait_until(|| engine.status().failures() == 1));
    assert!(wait_until(|| engine.state() == PatternState::Idle));

    engine.start_pattern();
    assert!(wait_until(|| engine.status().failures() == 2));
    assert!(engine.join().is_some());
}
