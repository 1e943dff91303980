//! Draw list generation for 2D primitives
//!
//! Turns a read-only view of the game state into filled rectangles: one per
//! visible entity, plus a crosshair through the pointer.

use glam::DVec2;

use crate::sim::{Entity, GameState, KindDims};

/// Colors for game elements (RGBA, 0-1)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CROSSHAIR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// What a rectangle in the draw list represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Enemy,
    Projectile,
    Player,
    Crosshair,
}

/// Axis-aligned filled rectangle, top-left anchored, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: [f32; 4],
}

impl DrawRect {
    /// Rectangle of `dims` centered on `center`, truncated to pixels
    pub fn centered(kind: ShapeKind, center: DVec2, dims: KindDims, color: [f32; 4]) -> Self {
        Self {
            kind,
            x: (center.x - dims.width * 0.5) as i32,
            y: (center.y - dims.height * 0.5) as i32,
            w: dims.width as i32,
            h: dims.height as i32,
            color,
        }
    }
}

fn entity_rect(
    kind: ShapeKind,
    entity: &Entity,
    dims: KindDims,
    color: [f32; 4],
) -> Option<DrawRect> {
    entity
        .is_visible()
        .then(|| DrawRect::centered(kind, entity.pos, dims, color))
}

/// One-pixel lines through the pointer spanning the whole playfield
pub fn crosshair(pointer: DVec2, width: f64, height: f64) -> [DrawRect; 2] {
    [
        DrawRect {
            kind: ShapeKind::Crosshair,
            x: pointer.x as i32,
            y: 0,
            w: 1,
            h: height as i32,
            color: colors::CROSSHAIR,
        },
        DrawRect {
            kind: ShapeKind::Crosshair,
            x: 0,
            y: pointer.y as i32,
            w: width as i32,
            h: 1,
            color: colors::CROSSHAIR,
        },
    ]
}

/// Build the frame's draw list: enemies, then projectiles, then the player,
/// with the crosshair always on top
pub fn draw_list(state: &GameState, pointer: DVec2) -> Vec<DrawRect> {
    let settings = &state.settings;
    let mut rects = Vec::with_capacity(state.enemies.len() + state.projectiles.len() + 3);

    rects.extend(
        state
            .enemies
            .iter()
            .filter_map(|e| entity_rect(ShapeKind::Enemy, e, settings.enemy_dims, colors::ENEMY)),
    );
    rects.extend(state.projectiles.iter().filter_map(|p| {
        entity_rect(ShapeKind::Projectile, p, settings.projectile_dims, colors::PROJECTILE)
    }));
    let player = entity_rect(
        ShapeKind::Player,
        &state.player,
        settings.player_dims,
        colors::PLAYER,
    );
    rects.extend(player);
    let field = settings.playfield;
    rects.extend(crosshair(pointer, field.width, field.height));

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_with(enemies: &[(f64, f64)]) -> GameState {
        let settings = Settings {
            enemy_count: 0,
            ..Settings::default()
        };
        let mut state = GameState::new(settings, &mut Pcg32::seed_from_u64(0)).expect("valid");
        for &(x, y) in enemies {
            state.spawn_enemy(DVec2::new(x, y), DVec2::ZERO);
        }
        state
    }

    #[test]
    fn test_rect_is_centered_on_position() {
        let r = DrawRect::centered(
            ShapeKind::Enemy,
            DVec2::new(400.0, 300.0),
            KindDims::new(50.0, 50.0),
            colors::ENEMY,
        );
        assert_eq!((r.x, r.y, r.w, r.h), (375, 275, 50, 50));
    }

    #[test]
    fn test_draw_order_and_counts() {
        let mut state = state_with(&[(100.0, 100.0), (200.0, 200.0)]);
        state.spawn_projectile(DVec2::new(50.0, 60.0), DVec2::ZERO);

        let rects = draw_list(&state, DVec2::new(10.0, 20.0));
        let kinds: Vec<ShapeKind> = rects.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::Enemy,
                ShapeKind::Enemy,
                ShapeKind::Projectile,
                ShapeKind::Player,
                ShapeKind::Crosshair,
                ShapeKind::Crosshair,
            ]
        );
        assert_eq!(rects[2].color, colors::PROJECTILE);
        assert_eq!((rects[3].x, rects[3].y), (384, 284));
    }

    #[test]
    fn test_crosshair_spans_playfield() {
        let [vertical, horizontal] = crosshair(DVec2::new(10.5, 20.5), 800.0, 600.0);
        assert_eq!((vertical.x, vertical.y, vertical.w, vertical.h), (10, 0, 1, 600));
        assert_eq!((horizontal.x, horizontal.y, horizontal.w, horizontal.h), (0, 20, 800, 1));
    }

    #[test]
    fn test_hidden_entities_are_skipped() {
        let mut state = state_with(&[(100.0, 100.0), (200.0, 200.0)]);
        if let Some(e) = state.enemies.iter_mut().next() {
            e.hide();
        }
        let rects = draw_list(&state, DVec2::ZERO);
        assert_eq!(rects.iter().filter(|r| r.kind == ShapeKind::Enemy).count(), 1);

        state.player.hide();
        let rects = draw_list(&state, DVec2::ZERO);
        assert!(rects.iter().all(|r| r.kind != ShapeKind::Player));
    }

    #[test]
    fn test_crosshair_drawn_without_player() {
        let mut state = state_with(&[]);
        state.player.hide();
        let rects = draw_list(&state, DVec2::new(30.0, 40.0));
        let kinds: Vec<ShapeKind> = rects.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Crosshair, ShapeKind::Crosshair]);
        assert_eq!((rects[0].x, rects[1].y), (30, 40));
    }
}
