//! ECS component types used by the simulation.
//! Covers actors, motion, presentation flags, and the effects summoners spawn.
use bevy::prelude::*;

use crate::combat::Fighter;
use crate::constants::{DEFAULT_FRICTION, DEFAULT_MASS};
use crate::summoner::SummonerBrain;

/// Marks the actor summoners attack.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Hit points of an actor; dead at zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Remaining points.
    pub current: u32,
    /// Points at full health.
    pub max: u32,
}

impl Health {
    /// Full health of `max` points.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` at zero health.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount` points.
    pub const fn apply_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Summoner AI state for an entity.
///
/// Removing the component, or despawning its entity, releases every effect
/// the brain still owns.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct Summoner(pub SummonerBrain<Entity, Entity>);

/// Melee attacker attached to an entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct FighterComp(pub Fighter);

/// Impulse requested for the current tick.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct MovementIntent(pub Vec2);

/// Planar velocity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityComp {
    /// Horizontal component.
    pub vx: f32,
    /// Vertical component.
    pub vy: f32,
}

/// How impulses and friction act on a body.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    /// Horizontal friction coefficient.
    pub friction: f32,
    /// Body mass.
    pub mass: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            mass: DEFAULT_MASS,
        }
    }
}

/// Horizontal sprite orientation.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Facing {
    /// `true` when facing left.
    pub flip_x: bool,
}

/// Animation flag mirrored from the summoner's state.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackAnimation {
    /// `true` while an attack plays.
    pub is_attacking: bool,
}

/// An effect entity spawned by a summoner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    /// The summoner that spawned it.
    pub owner: Entity,
}

/// A rune marking where an attack lands.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneEffect {
    /// Sprite variant.
    pub variant: usize,
}

/// An effect that damages its bound target once while armed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamagingEffect {
    /// Damage fixed at spawn time.
    pub damage: u32,
    /// Target fixed at spawn time.
    pub target: Entity,
    /// Cleared once the damage has been applied.
    pub armed: bool,
}
