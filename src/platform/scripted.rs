//! Headless surface driven by a pre-recorded input script
//!
//! Each call to `process_events` consumes one [`InputFrame`]. The clock
//! advances by a fixed step per frame and random numbers come from a seeded
//! PCG, so a run is fully reproducible. The surface closes itself once the
//! script is exhausted.

use std::collections::{BTreeSet, VecDeque};

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{RandomSource, Surface, actions};
use crate::settings::Settings;

/// Input state for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub pressed: BTreeSet<String>,
    pub pointer: DVec2,
    pub pointer_down: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, action: &str) -> Self {
        self.pressed.insert(action.to_owned());
        self
    }

    pub fn pointer_at(mut self, x: f64, y: f64) -> Self {
        self.pointer = DVec2::new(x, y);
        self
    }

    pub fn pointer_down(mut self, down: bool) -> Self {
        self.pointer_down = down;
        self
    }
}

/// Deterministic, windowless [`Surface`]
#[derive(Debug)]
pub struct ScriptedSurface {
    script: VecDeque<InputFrame>,
    current: InputFrame,
    frame_dt: f64,
    open: bool,
    rng: Pcg32,
    frames_processed: u64,
}

impl ScriptedSurface {
    pub fn new<I>(script: I, frame_dt: f64, seed: u64) -> Self
    where
        I: IntoIterator<Item = InputFrame>,
    {
        Self {
            script: script.into_iter().collect(),
            current: InputFrame::default(),
            frame_dt: frame_dt.max(0.0),
            open: true,
            rng: Pcg32::seed_from_u64(seed),
            frames_processed: 0,
        }
    }

    /// Append frames to the end of the script
    pub fn extend<I>(&mut self, frames: I)
    where
        I: IntoIterator<Item = InputFrame>,
    {
        self.script.extend(frames);
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSurface {
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_int(low, high)
    }

    fn random_real(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_real(low, high)
    }
}

impl Surface for ScriptedSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn process_events(&mut self) {
        match self.script.pop_front() {
            Some(frame) => {
                self.current = frame;
                self.frames_processed += 1;
            }
            None => {
                log::debug!("Input script exhausted after {} frames", self.frames_processed);
                self.current = InputFrame::default();
                self.open = false;
            }
        }
    }

    fn is_key_pressed(&self, action: &str) -> bool {
        self.current.pressed.contains(action)
    }

    fn reset_clock(&mut self) -> f64 {
        self.frame_dt
    }

    fn pointer_position(&self) -> DVec2 {
        self.current.pointer
    }

    fn is_pointer_down(&self) -> bool {
        self.current.pointer_down
    }
}

/// Generate a demo script: the pointer sweeps a Lissajous curve around the
/// playfield, fire is held in bursts and the player weaves between the eight
/// directions. The last frame presses quit.
pub fn autopilot(settings: &Settings) -> Vec<InputFrame> {
    const MOVES: [&[&str]; 8] = [
        &[actions::RIGHT],
        &[actions::RIGHT, actions::DOWN],
        &[actions::DOWN],
        &[actions::DOWN, actions::LEFT],
        &[actions::LEFT],
        &[actions::LEFT, actions::UP],
        &[actions::UP],
        &[actions::UP, actions::RIGHT],
    ];
    // Frames per movement leg and per fire burst
    const LEG_FRAMES: u32 = 45;
    const BURST_FRAMES: u32 = 30;

    let center = settings.playfield.center();
    let reach = center * 0.8;
    let mut frames = Vec::with_capacity(settings.max_frames as usize + 1);

    for i in 0..settings.max_frames {
        let t = i as f64 * settings.frame_dt;
        let pointer = center + DVec2::new((t * 1.3).cos() * reach.x, (t * 0.9).sin() * reach.y);

        let mut frame = InputFrame::new().pointer_at(pointer.x, pointer.y);
        for action in MOVES[(i / LEG_FRAMES) as usize % MOVES.len()] {
            frame = frame.press(action);
        }
        match (i / BURST_FRAMES) % 3 {
            0 => frame = frame.press(actions::FIRE),
            1 => frame = frame.pointer_down(true),
            _ => {}
        }
        frames.push(frame);
    }

    frames.push(InputFrame::new().press(actions::QUIT));
    frames
}
