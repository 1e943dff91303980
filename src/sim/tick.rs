//! Per-frame simulation step
//!
//! Order within a frame is fixed:
//! 1. quit check
//! 2. player movement, then weapon
//! 3. projectile integration
//! 4. collision resolution (marks only)
//! 5. cull dead enemies and off-playfield projectiles
//! 6. enemy integration with wall bounce

use glam::DVec2;

use super::bounds::Playfield;
use super::collision::{Hit, resolve_collisions};
use super::entity::{Entity, tags};
use super::state::{GameState, SimPhase};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire action (keyboard)
    pub fire: bool,
    /// Primary pointer button
    pub pointer_down: bool,
    /// Aim target in world coordinates
    pub pointer: DVec2,
    pub quit: bool,
}

impl TickInput {
    /// Unit movement direction, or zero when idle.
    ///
    /// Up wins over down and left wins over right when both are held.
    pub fn move_direction(&self) -> DVec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        DVec2::new(x, y).normalize_or_zero()
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub fired: u32,
    pub hits: Vec<Hit>,
    pub enemies_culled: usize,
    pub projectiles_culled: usize,
}

/// Clamp a frame delta into `[0, max]`. Non-finite deltas become zero.
pub fn clamp_delta(dt: f64, max: f64) -> f64 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Discarding invalid frame delta {}", dt);
        return 0.0;
    }
    if dt > max {
        log::debug!("Clamping frame delta {:.4}s to {:.4}s", dt, max);
        return max;
    }
    dt
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> FrameReport {
    let mut report = FrameReport::default();

    if state.phase == SimPhase::Closed {
        return report;
    }
    if input.quit {
        state.close();
        return report;
    }

    let dt = clamp_delta(dt, state.settings.max_frame_delta);
    state.frame += 1;

    // Player
    state.player.vel = input.move_direction() * state.settings.player_speed;
    state.player.apply_velocity(dt);

    if state
        .weapon
        .pull(input.fire, input.pointer_down, dt, state.settings.fire_interval)
    {
        let id = state.fire_at(state.player.pos, input.pointer);
        report.fired += 1;
        log::debug!(
            "Fired projectile {} toward ({:.1}, {:.1})",
            id,
            input.pointer.x,
            input.pointer.y
        );
    }

    // Projectiles fly straight, no bouncing
    for projectile in state.projectiles.iter_mut() {
        projectile.apply_velocity(dt);
    }

    report.hits = resolve_collisions(
        &mut state.projectiles,
        &mut state.enemies,
        state.settings.projectile_dims,
        state.settings.enemy_dims,
        state.settings.hit_policy,
    );
    for hit in &report.hits {
        log::debug!("Projectile {} hit enemy {}", hit.projectile, hit.enemy);
    }

    // Cull
    let playfield = state.settings.playfield;
    report.enemies_culled = state.enemies.remove_where(|e| e.has_tag(tags::DEAD));
    report.projectiles_culled = state
        .projectiles
        .remove_where(|p| !playfield.contains(p.pos));
    if report.enemies_culled + report.projectiles_culled > 0 {
        log::debug!(
            "Culled {} enemies, {} projectiles",
            report.enemies_culled,
            report.projectiles_culled
        );
    }

    for enemy in state.enemies.iter_mut() {
        update_enemy(enemy, playfield, dt);
    }

    report
}

/// Integrate an enemy and reflect it off the playfield walls.
///
/// On leaving the playfield along an axis, that velocity component is
/// inverted and the whole velocity is integrated once more with the same
/// delta. The result can overshoot by up to one frame; it is not corrected.
pub fn update_enemy(enemy: &mut Entity, playfield: Playfield, dt: f64) {
    enemy.apply_velocity(dt);

    if playfield.outside_x(enemy.pos.x) {
        enemy.vel.x = -enemy.vel.x;
        enemy.apply_velocity(dt);
    }
    if playfield.outside_y(enemy.pos.y) {
        enemy.vel.y = -enemy.vel.y;
        enemy.apply_velocity(dt);
    }
}
