//! Game state and spawning
//!
//! `GameState` owns every entity: the player directly, enemies and
//! projectiles through their collections. It also owns the id generator,
//! so ids are unique across all three.

use glam::DVec2;
use serde::Serialize;

use super::collection::EntityCollection;
use super::entity::{Entity, EntityId, IdGenerator, tags};
use crate::error::InitError;
use crate::platform::RandomSource;
use crate::settings::Settings;

/// Lifecycle of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimPhase {
    Running,
    /// Terminal: no further updates or renders
    Closed,
}

/// Trigger state of the player's weapon
#[derive(Debug, Clone, Default, Serialize)]
pub struct Weapon {
    /// Fire key held last frame
    pub key_held: bool,
    /// Pointer button held last frame
    pub pointer_held: bool,
    /// Time accumulated toward the next repeat shot. Kept across releases.
    pub charge: f64,
}

impl Weapon {
    /// Advance the trigger by one frame. Returns whether a shot fires.
    ///
    /// Each device fires on its own press edge, so clicking while the fire
    /// key is held still shoots at once. While either is held, `dt`
    /// accumulates (press frame included) and every full `interval` yields a
    /// repeat shot. At most one shot per frame.
    pub fn pull(&mut self, key: bool, pointer: bool, dt: f64, interval: f64) -> bool {
        let pressed = (key && !self.key_held) || (pointer && !self.pointer_held);
        self.key_held = key;
        self.pointer_held = pointer;

        let mut repeat = false;
        if key || pointer {
            self.charge += dt;
            if self.charge >= interval {
                self.charge -= interval;
                repeat = true;
            }
        }

        pressed || repeat
    }
}

/// Complete simulation state
#[derive(Debug, Serialize)]
pub struct GameState {
    pub phase: SimPhase,
    /// Frames simulated so far
    pub frame: u64,
    pub player: Entity,
    pub enemies: EntityCollection,
    pub projectiles: EntityCollection,
    pub weapon: Weapon,
    #[serde(skip)]
    pub settings: Settings,
    #[serde(skip)]
    ids: IdGenerator,
}

impl GameState {
    /// Create the player at the playfield center and spawn the configured
    /// number of enemies at random positions with random velocities.
    pub fn new(settings: Settings, random: &mut impl RandomSource) -> Result<Self, InitError> {
        settings.validate()?;

        let mut ids = IdGenerator::new();
        let player = Entity::new(&mut ids)
            .with_position(settings.playfield.center())
            .with_tags([tags::PLAYER]);

        let mut state = Self {
            phase: SimPhase::Running,
            frame: 0,
            player,
            enemies: EntityCollection::with_capacity(settings.enemy_count),
            projectiles: EntityCollection::new(),
            weapon: Weapon::default(),
            settings,
            ids,
        };

        for _ in 0..state.settings.enemy_count {
            state.spawn_random_enemy(random);
        }

        log::info!(
            "Spawned player {} and {} enemies on a {}x{} playfield",
            state.player.id(),
            state.enemies.len(),
            state.settings.playfield.width,
            state.settings.playfield.height
        );

        Ok(state)
    }

    /// Allocate a new entity with a fresh id
    pub fn new_entity(&mut self) -> Entity {
        Entity::new(&mut self.ids)
    }

    /// Duplicate an entity under a fresh id from this state's generator
    pub fn clone_entity(&mut self, entity: &Entity) -> Entity {
        entity.clone_with_new_identity(&mut self.ids)
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    pub fn close(&mut self) {
        if self.phase != SimPhase::Closed {
            log::info!("Simulation closed after {} frames", self.frame);
        }
        self.phase = SimPhase::Closed;
    }

    /// Spawn an enemy at an explicit position and velocity
    pub fn spawn_enemy(&mut self, pos: DVec2, vel: DVec2) -> EntityId {
        let enemy = self
            .new_entity()
            .with_position(pos)
            .with_velocity(vel)
            .with_tags([tags::ENEMY]);
        self.enemies.spawn(enemy)
    }

    /// Enemy at a random whole-unit position inside the playfield, moving
    /// with each velocity component drawn from `[-1, 1] * enemy_speed`
    pub fn spawn_random_enemy(&mut self, random: &mut impl RandomSource) -> EntityId {
        let field = self.settings.playfield;
        let speed = self.settings.enemy_speed;
        let pos = DVec2::new(
            random.random_int(0, field.width as i64) as f64,
            random.random_int(0, field.height as i64) as f64,
        );
        let vel = DVec2::new(
            random.random_real(-1.0, 1.0) * speed,
            random.random_real(-1.0, 1.0) * speed,
        );
        self.spawn_enemy(pos, vel)
    }

    /// Spawn a player projectile with an explicit velocity
    pub fn spawn_projectile(&mut self, pos: DVec2, vel: DVec2) -> EntityId {
        let projectile = self
            .new_entity()
            .with_position(pos)
            .with_velocity(vel)
            .with_tags([tags::PROJECTILE, tags::PLAYER]);
        self.projectiles.spawn(projectile)
    }

    /// Fire a projectile from `weapon` toward `target` at projectile speed.
    ///
    /// A target on top of the weapon fires along +X.
    pub fn fire_at(&mut self, weapon: DVec2, target: DVec2) -> EntityId {
        let to_target = target - weapon;
        let angle = to_target.y.atan2(to_target.x);
        let vel = DVec2::from_angle(angle) * self.settings.projectile_speed;
        self.spawn_projectile(weapon, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn settings_with_enemies(count: usize) -> Settings {
        Settings {
            enemy_count: count,
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_spawns_player_and_enemies() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let state = GameState::new(Settings::default(), &mut rng).expect("valid settings");

        assert_eq!(state.phase, SimPhase::Running);
        assert_eq!(state.player.pos, DVec2::new(400.0, 300.0));
        assert!(state.player.has_tag(tags::PLAYER));
        assert_eq!(state.enemies.len(), 25);
        assert!(state.projectiles.is_empty());

        let field = state.settings.playfield;
        let speed = state.settings.enemy_speed;
        for enemy in &state.enemies {
            assert!(enemy.has_tag(tags::ENEMY));
            assert!(field.contains(enemy.pos));
            assert_eq!(enemy.pos.x.fract(), 0.0);
            assert!(enemy.vel.x.abs() <= speed && enemy.vel.y.abs() <= speed);
        }
    }

    #[test]
    fn test_ids_unique_across_kinds() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(settings_with_enemies(5), &mut rng).expect("valid settings");
        state.fire_at(DVec2::ZERO, DVec2::X);
        state.fire_at(DVec2::ZERO, DVec2::Y);

        let mut ids: Vec<u64> = state
            .enemies
            .iter()
            .chain(state.projectiles.iter())
            .chain(std::iter::once(&state.player))
            .map(|e| e.id().get())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::new(Settings::default(), &mut Pcg32::seed_from_u64(3)).expect("valid");
        let b = GameState::new(Settings::default(), &mut Pcg32::seed_from_u64(3)).expect("valid");
        let pa: Vec<(DVec2, DVec2)> = a.enemies.iter().map(|e| (e.pos, e.vel)).collect();
        let pb: Vec<(DVec2, DVec2)> = b.enemies.iter().map(|e| (e.pos, e.vel)).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_invalid_settings_fail_init() {
        let mut settings = Settings::default();
        settings.playfield.height = -1.0;
        let result = GameState::new(settings, &mut Pcg32::seed_from_u64(0));
        assert!(matches!(result, Err(InitError::InvalidPlayfield { .. })));
    }

    #[test]
    fn test_fire_at_aims_at_target() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(settings_with_enemies(0), &mut rng).expect("valid");
        let id = state.fire_at(DVec2::new(100.0, 100.0), DVec2::new(100.0, 400.0));
        let projectile = state.projectiles.get(id).expect("spawned");

        assert_eq!(projectile.pos, DVec2::new(100.0, 100.0));
        assert!(projectile.has_tag(tags::PROJECTILE));
        assert!(projectile.has_tag(tags::PLAYER));
        assert!(projectile.vel.x.abs() < 1e-9);
        assert!((projectile.vel.y - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_fire_at_own_position_goes_right() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(settings_with_enemies(0), &mut rng).expect("valid");
        let pos = DVec2::new(50.0, 50.0);
        let id = state.fire_at(pos, pos);
        let vel = state.projectiles.get(id).map(|p| p.vel);
        assert_eq!(vel, Some(DVec2::new(500.0, 0.0)));
    }

    #[test]
    fn test_weapon_fires_on_press_then_repeats() {
        let mut weapon = Weapon::default();
        let interval = 0.125;
        let dt = 0.03125;

        assert!(!weapon.pull(false, false, dt, interval));
        assert_eq!(weapon.charge, 0.0);
        // Press fires and already accumulates its frame
        assert!(weapon.pull(true, false, dt, interval));
        assert_eq!(weapon.charge, 0.03125);
        assert!(!weapon.pull(true, false, dt, interval));
        assert!(!weapon.pull(true, false, dt, interval));
        // Fourth held frame reaches the interval
        assert!(weapon.pull(true, false, dt, interval));
        assert_eq!(weapon.charge, 0.0);
    }

    #[test]
    fn test_weapon_charge_survives_release() {
        let mut weapon = Weapon::default();
        let interval = 0.125;
        let dt = 0.03125;

        assert!(weapon.pull(true, false, dt, interval));
        assert!(!weapon.pull(true, false, dt, interval));
        assert!(!weapon.pull(false, false, dt, interval));
        assert_eq!(weapon.charge, 0.0625);

        // New press fires, then only two more held frames complete the interval
        assert!(weapon.pull(false, true, dt, interval));
        assert!(weapon.pull(false, true, dt, interval));
        assert_eq!(weapon.charge, 0.0);
    }

    #[test]
    fn test_weapon_pointer_press_while_key_held() {
        let mut weapon = Weapon::default();
        assert!(weapon.pull(true, false, 0.03125, 0.125));
        assert!(weapon.pull(true, true, 0.03125, 0.125));
        // Both held, no new edge
        assert!(!weapon.pull(true, true, 0.03125, 0.125));
        // Key re-press while the pointer stays down
        assert!(!weapon.pull(false, true, 0.0, 0.125));
        assert!(weapon.pull(true, true, 0.0, 0.125));
    }

    #[test]
    fn test_weapon_one_shot_per_frame() {
        let mut weapon = Weapon::default();
        // Press edge and a full interval in the same frame
        assert!(weapon.pull(true, true, 0.25, 0.25));
        assert_eq!(weapon.charge, 0.0);
        // A long frame still yields a single shot
        assert!(weapon.pull(true, true, 1.0, 0.25));
        assert_eq!(weapon.charge, 0.75);
    }

    #[test]
    fn test_close_is_terminal() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(settings_with_enemies(0), &mut rng).expect("valid");
        assert!(state.is_running());
        state.close();
        state.close();
        assert_eq!(state.phase, SimPhase::Closed);
    }

    #[test]
    fn test_clone_entity_uses_state_ids() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(settings_with_enemies(1), &mut rng).expect("valid");
        let original = state.new_entity().with_tags([tags::ENEMY]);
        let copy = state.clone_entity(&original);
        assert_ne!(copy, original);
        assert_ne!(copy.id(), state.player.id());
        assert!(copy.has_tag(tags::ENEMY));
    }
}
