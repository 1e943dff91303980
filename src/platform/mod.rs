//! Platform abstraction layer
//!
//! The simulation consumes its window, input, clock and random numbers
//! through the [`Surface`] trait. Handles:
//! - Open/close lifecycle
//! - Input events mapped to named actions
//! - Frame clock
//! - Random numbers over inclusive ranges

use glam::DVec2;
use rand::Rng;
use rand_pcg::Pcg32;

pub mod scripted;

pub use scripted::{InputFrame, ScriptedSurface, autopilot};

/// Action names understood by [`Surface::is_key_pressed`]
pub mod actions {
    pub const QUIT: &str = "quit";
    pub const UP: &str = "up";
    pub const DOWN: &str = "down";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const FIRE: &str = "fire";

    pub const ALL: [&str; 6] = [QUIT, UP, DOWN, LEFT, RIGHT, FIRE];
}

/// Uniform random numbers over inclusive ranges.
///
/// Reversed bounds are swapped rather than rejected.
pub trait RandomSource {
    fn random_int(&mut self, low: i64, high: i64) -> i64;
    fn random_real(&mut self, low: f64, high: f64) -> f64;
}

impl RandomSource for Pcg32 {
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = (low.min(high), low.max(high));
        self.random_range(low..=high)
    }

    fn random_real(&mut self, low: f64, high: f64) -> f64 {
        let (low, high) = (low.min(high), low.max(high));
        self.random_range(low..=high)
    }
}

/// Window/context plus input provider
pub trait Surface: RandomSource {
    fn is_open(&self) -> bool;
    fn close(&mut self);
    /// Pump pending input and update pressed state
    fn process_events(&mut self);
    fn is_key_pressed(&self, action: &str) -> bool;
    /// Seconds since the previous call, never negative
    fn reset_clock(&mut self) -> f64;
    fn pointer_position(&self) -> DVec2;
    fn is_pointer_down(&self) -> bool;
}
