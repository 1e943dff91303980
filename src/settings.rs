//! Game settings and tuning
//!
//! Loaded from an optional JSON file; any field missing from the file keeps
//! its default from [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{InitError, SettingsError};
use crate::sim::{HitPolicy, KindDims, Playfield};

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub playfield: Playfield,

    // === Player ===
    pub player_dims: KindDims,
    /// Units per second
    pub player_speed: f64,

    // === Weapon ===
    pub projectile_dims: KindDims,
    pub projectile_speed: f64,
    /// Seconds between shots while the trigger is held
    pub fire_interval: f64,
    /// Whether a projectile keeps testing enemies after its first hit
    pub hit_policy: HitPolicy,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_dims: KindDims,
    pub enemy_speed: f64,

    // === Loop ===
    /// Frame deltas above this are clamped
    pub max_frame_delta: f64,
    /// Seed for the headless surface's random source
    pub seed: u64,
    /// Fixed clock step of the headless surface (seconds)
    pub frame_dt: f64,
    /// Frames the headless autopilot plays before quitting
    pub max_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),

            player_dims: PLAYER_DIMS,
            player_speed: PLAYER_SPEED,

            projectile_dims: PROJECTILE_DIMS,
            projectile_speed: PROJECTILE_SPEED,
            fire_interval: FIRE_INTERVAL,
            hit_policy: HitPolicy::SingleKill,

            enemy_count: NUM_ENEMIES,
            enemy_dims: ENEMY_DIMS,
            enemy_speed: ENEMY_SPEED,

            max_frame_delta: MAX_FRAME_DELTA,
            seed: DEFAULT_SEED,
            frame_dt: HEADLESS_FRAME_DT,
            max_frames: HEADLESS_MAX_FRAMES,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), InitError> {
        let Playfield { width, height } = self.playfield;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(InitError::InvalidPlayfield { width, height });
        }

        for (kind, dims) in [
            ("player", self.player_dims),
            ("projectile", self.projectile_dims),
            ("enemy", self.enemy_dims),
        ] {
            if !dims.is_valid() {
                return Err(InitError::InvalidDimensions {
                    kind,
                    width: dims.width,
                    height: dims.height,
                });
            }
        }

        check_non_negative("player_speed", self.player_speed)?;
        check_non_negative("projectile_speed", self.projectile_speed)?;
        check_non_negative("enemy_speed", self.enemy_speed)?;
        check_non_negative("frame_dt", self.frame_dt)?;
        check_positive("fire_interval", self.fire_interval)?;
        check_positive("max_frame_delta", self.max_frame_delta)?;
        Ok(())
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), InitError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InitError::InvalidTuning { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), InitError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InitError::InvalidTuning { name, value })
    }
}
