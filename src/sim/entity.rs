//! Simulated entities
//!
//! Every object in the game is an `Entity`:
//! - a world position and a velocity (pixels per second), both double precision
//! - a unique id, handed out by an [`IdGenerator`]
//! - a set of string tags for classification/grouping
//! - independent `active` (simulated) and `visible` (rendered) flags
//!
//! Entities are deliberately not `Clone`. Duplicating one goes through
//! [`Entity::clone_with_new_identity`] and moving its contents into a new
//! owner goes through [`Entity::transfer`]; both hand out a fresh id so two
//! live entities never compare equal.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use glam::DVec2;
use serde::Serialize;

/// Tags used for classification and transient markers
pub mod tags {
    pub const PLAYER: &str = "Player";
    pub const ENEMY: &str = "Enemy";
    pub const PROJECTILE: &str = "Projectile";
    /// Set by collision resolution, culled at the end of the frame
    pub const DEAD: &str = "DEAD";
}

/// Unique entity identifier. Only meaningful for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source. Ids are never reused by the same generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate a new entity ID
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// A simulated object
#[derive(Debug, Serialize)]
pub struct Entity {
    id: EntityId,
    /// World position
    pub pos: DVec2,
    /// Velocity in world units per second
    pub vel: DVec2,
    active: bool,
    visible: bool,
    tags: BTreeSet<String>,
}

impl Entity {
    /// Entity at the world origin with no velocity, no tags, active and visible
    pub fn new(ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            active: true,
            visible: true,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_position(mut self, pos: DVec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Copy position, velocity, flags and tags into a new entity with its own id
    pub fn clone_with_new_identity(&self, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            pos: self.pos,
            vel: self.vel,
            active: self.active,
            visible: self.visible,
            tags: self.tags.clone(),
        }
    }

    /// Move this entity's contents into a new entity with its own id.
    ///
    /// The source keeps its id but is left logically empty (origin, no
    /// velocity, no tags, default flags). It should only be reassigned after.
    pub fn transfer(&mut self, ids: &mut IdGenerator) -> Self {
        let moved = Self {
            id: ids.next_id(),
            pos: self.pos,
            vel: self.vel,
            active: self.active,
            visible: self.visible,
            tags: std::mem::take(&mut self.tags),
        };
        self.pos = DVec2::ZERO;
        self.vel = DVec2::ZERO;
        self.active = true;
        self.visible = true;
        moved
    }

    /// Simple linear integration of velocity. Inactive entities don't move.
    ///
    /// `dt` is expected to be non-negative; the frame loop clamps it.
    pub fn apply_velocity(&mut self, dt: f64) {
        if self.active {
            self.pos.x += self.vel.x * dt;
            self.pos.y += self.vel.y * dt;
        }
    }

    pub fn cancel_velocity(&mut self) {
        self.vel = DVec2::ZERO;
    }

    /// Add a tag (no-op if already present)
    pub fn set_tag(&mut self, tag: &str) {
        if !self.tags.contains(tag) {
            self.tags.insert(tag.to_owned());
        }
    }

    /// Remove a tag (no-op if absent)
    pub fn untag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Identity-based: position, velocity and tags are ignored.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

/// Weak, component-wise comparison of world positions.
///
/// `a < b` only when `a` is strictly smaller on both axes (and `>` likewise).
/// Entities ahead on one axis but behind on the other are incomparable, so
/// this is not a total order and must not be used for sorting.
impl PartialOrd for Entity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.id == other.id {
            return Some(Ordering::Equal);
        }
        if self.pos.x < other.pos.x && self.pos.y < other.pos.y {
            Some(Ordering::Less)
        } else if self.pos.x > other.pos.x && self.pos.y > other.pos.y {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
