//! Projectile vs enemy collision resolution
//!
//! Resolution is two-phase. During traversal a hit only *marks* state: the
//! enemy gets the `DEAD` tag and the projectile is moved far outside the
//! playfield. Nothing is removed until the frame's cull pass, so neither
//! collection is structurally modified while it is being iterated.

use serde::{Deserialize, Serialize};

use super::bounds::{Aabb, KindDims};
use super::collection::EntityCollection;
use super::entity::{EntityId, tags};

/// X coordinate a spent projectile is moved to. Far outside any playfield,
/// so the off-playfield cull removes it.
pub const SPENT_PROJECTILE_X: f64 = -9999.0;

/// What a projectile does after its first hit within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Stop testing further enemies once the projectile has hit one
    #[default]
    SingleKill,
    /// Keep testing the remaining enemies against the box computed before
    /// the projectile was relocated, so one projectile can kill several
    /// overlapping enemies in the same frame
    MultiKill,
}

/// A projectile/enemy overlap found during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub projectile: EntityId,
    pub enemy: EntityId,
}

/// Test every projectile against every enemy, both in insertion order.
///
/// Enemies that are already marked dead still absorb projectiles; the tag
/// is simply not added twice.
pub fn resolve_collisions(
    projectiles: &mut EntityCollection,
    enemies: &mut EntityCollection,
    projectile_dims: KindDims,
    enemy_dims: KindDims,
    policy: HitPolicy,
) -> Vec<Hit> {
    let mut hits = Vec::new();

    for projectile in projectiles.iter_mut() {
        let projectile_box = Aabb::of(projectile, projectile_dims);

        for enemy in enemies.iter_mut() {
            let enemy_box = Aabb::of(enemy, enemy_dims);
            if !projectile_box.intersects(&enemy_box) {
                continue;
            }

            enemy.set_tag(tags::DEAD);
            projectile.pos.x = SPENT_PROJECTILE_X;
            hits.push(Hit {
                projectile: projectile.id(),
                enemy: enemy.id(),
            });

            if policy == HitPolicy::SingleKill {
                break;
            }
        }
    }

    hits
}
