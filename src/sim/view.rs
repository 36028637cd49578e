//! Combat views over ECS entities.
use bevy::prelude::*;

use crate::combat::{Combatant, Damageable};
use crate::components::Health;

/// Snapshot of an actor read from its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    /// The entity.
    pub entity: Entity,
    /// Position taken from the entity's [`Transform`].
    pub position: Vec2,
    /// Dead when its [`Health`] is at zero.
    pub dead: bool,
}

impl ActorView {
    /// Reads an actor from its transform and health.
    #[must_use]
    pub fn new(entity: Entity, transform: &Transform, health: &Health) -> Self {
        Self {
            entity,
            position: transform.translation.truncate(),
            dead: health.is_dead(),
        }
    }
}

impl Combatant for ActorView {
    type Id = Entity;

    fn id(&self) -> Entity {
        self.entity
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_dead(&self) -> bool {
        self.dead
    }
}

/// Mutable view letting combat code damage an entity's [`Health`].
pub struct HealthTarget<'a> {
    entity: Entity,
    position: Vec2,
    health: Mut<'a, Health>,
}

impl<'a> HealthTarget<'a> {
    /// Wraps the target's health.
    #[must_use]
    pub fn new(entity: Entity, transform: &Transform, health: Mut<'a, Health>) -> Self {
        Self {
            entity,
            position: transform.translation.truncate(),
            health,
        }
    }
}

impl Combatant for HealthTarget<'_> {
    type Id = Entity;

    fn id(&self) -> Entity {
        self.entity
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

impl Damageable for HealthTarget<'_> {
    fn take_damage(&mut self, amount: u32) {
        self.health.apply_damage(amount);
    }
}
