//! Tagged Shooter - a minimal top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Frame simulation (entities, collections, collision, frame step)
//! - `game`: Frame loop tying a surface, the simulation and a renderer together
//! - `platform`: Surface/input/random abstraction plus a headless implementation
//! - `renderer`: Draw list generation and the renderer interface
//! - `settings`: JSON-loadable tuning

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{InitError, SettingsError};
pub use game::{Game, RunSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::sim::KindDims;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f64 = 800.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Player defaults
    pub const PLAYER_DIMS: KindDims = KindDims::new(32.0, 32.0);
    pub const PLAYER_SPEED: f64 = 400.0;

    /// Projectile defaults
    pub const PROJECTILE_DIMS: KindDims = KindDims::new(8.0, 8.0);
    pub const PROJECTILE_SPEED: f64 = 500.0;
    /// Seconds between shots while fire is held
    pub const FIRE_INTERVAL: f64 = 0.1;

    /// Enemy defaults
    pub const NUM_ENEMIES: usize = 25;
    pub const ENEMY_DIMS: KindDims = KindDims::new(50.0, 50.0);
    pub const ENEMY_SPEED: f64 = 180.0;

    /// Longest frame the simulation will integrate in one step
    pub const MAX_FRAME_DELTA: f64 = 0.1;

    /// Headless run defaults
    pub const DEFAULT_SEED: u64 = 12345;
    pub const HEADLESS_FRAME_DT: f64 = 1.0 / 60.0;
    pub const HEADLESS_MAX_FRAMES: u32 = 1800;
}
