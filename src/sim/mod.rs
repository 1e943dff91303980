//! Frame simulation module
//!
//! All gameplay logic lives here:
//! - Entities with tags, flags and velocity integration
//! - Insertion-ordered collections with stable culling
//! - Axis-aligned projectile/enemy collision (mark now, cull later)
//! - The fixed-order per-frame step
//!
//! Nothing in here draws or polls input.

pub mod bounds;
pub mod collection;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use bounds::{Aabb, KindDims, Playfield};
pub use collection::EntityCollection;
pub use collision::{Hit, HitPolicy, SPENT_PROJECTILE_X, resolve_collisions};
pub use entity::{Entity, EntityId, IdGenerator, tags};
pub use state::{GameState, SimPhase, Weapon};
pub use tick::{FrameReport, TickInput, clamp_delta, tick, update_enemy};
