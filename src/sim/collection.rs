//! Insertion-ordered entity collections
//!
//! One collection per entity kind (enemies, projectiles). Entities may be
//! mutated freely while iterating, but structural removal only happens
//! through [`EntityCollection::remove_where`], after traversal.

use serde::Serialize;

use super::entity::{Entity, EntityId};

/// Growable sequence of entities that exclusively owns its members
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct EntityCollection {
    entities: Vec<Entity>,
}

impl EntityCollection {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of a newly constructed entity, appending it
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        self.entities.push(entity);
        id
    }

    /// Remove every entity matching `predicate` in one stable pass.
    ///
    /// Survivors keep their relative order. Returns the number removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Entity) -> bool,
    {
        let before = self.entities.len();
        self.entities.retain(|e| !predicate(e));
        before - self.entities.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.entities.iter_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut EntityCollection {
    type Item = &'a mut Entity;
    type IntoIter = std::slice::IterMut<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{IdGenerator, tags};
    use glam::DVec2;

    fn collection_of(ids: &mut IdGenerator, xs: &[f64]) -> EntityCollection {
        let mut c = EntityCollection::new();
        for &x in xs {
            c.spawn(Entity::new(ids).with_position(DVec2::new(x, 0.0)));
        }
        c
    }

    #[test]
    fn test_spawn_preserves_insertion_order() {
        let mut ids = IdGenerator::new();
        let c = collection_of(&mut ids, &[3.0, 1.0, 2.0]);
        let xs: Vec<f64> = c.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_remove_where_is_stable() {
        let mut ids = IdGenerator::new();
        let mut c = collection_of(&mut ids, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let removed = c.remove_where(|e| e.pos.x as i64 % 2 == 0);
        assert_eq!(removed, 3);
        let xs: Vec<f64> = c.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_remove_where_no_match() {
        let mut ids = IdGenerator::new();
        let mut c = collection_of(&mut ids, &[1.0, 2.0]);
        assert_eq!(c.remove_where(|_| false), 0);
        assert_eq!(c.len(), 2);
        assert_eq!(c.remove_where(|_| true), 2);
        assert!(c.is_empty());
    }

    #[test]
    fn test_mutation_during_iteration_then_cull() {
        let mut ids = IdGenerator::new();
        let mut c = collection_of(&mut ids, &[1.0, 2.0, 3.0]);
        for e in &mut c {
            if e.pos.x > 1.5 {
                e.set_tag(tags::DEAD);
            }
        }
        assert_eq!(c.len(), 3);
        c.remove_where(|e| e.has_tag(tags::DEAD));
        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().map(|e| e.pos.x), Some(1.0));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut ids = IdGenerator::new();
        let mut c = EntityCollection::with_capacity(2);
        let id = c.spawn(Entity::new(&mut ids).with_tags([tags::ENEMY]));
        assert!(c.contains(id));
        if let Some(e) = c.get_mut(id) {
            e.pos = DVec2::new(9.0, 9.0);
        }
        assert_eq!(c.get(id).map(|e| e.pos), Some(DVec2::new(9.0, 9.0)));
        c.remove_where(|e| e.id() == id);
        assert!(!c.contains(id));
    }
}
