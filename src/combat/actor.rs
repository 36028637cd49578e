//! Host-facing view of the actors combat logic reads and damages.
use glam::Vec2;

/// Read-only view of an actor that can be targeted.
///
/// Hosts implement this over whatever owns positions and health; the combat
/// and summoner logic never stores the actor itself, only its [`Self::Id`].
pub trait Combatant {
    /// Identity used to bind spawned effects to this actor.
    type Id: Copy + Eq + std::fmt::Debug;

    /// Returns the actor's identity.
    fn id(&self) -> Self::Id;

    /// Returns the actor's position on the play plane.
    fn position(&self) -> Vec2;

    /// Returns `true` once the actor has no health left.
    fn is_dead(&self) -> bool;
}

/// A [`Combatant`] whose health can be reduced.
pub trait Damageable: Combatant {
    /// Applies `amount` points of damage.
    fn take_damage(&mut self, amount: u32);
}

/// Minimal actor used by simple hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor<Id = u32> {
    /// Identity reported through [`Combatant::id`].
    pub id: Id,
    /// Current position.
    pub position: Vec2,
    /// Remaining health; the actor is dead at zero.
    pub health: u32,
}

impl<Id> Actor<Id> {
    /// Creates an actor at `position` with `health` points.
    #[must_use]
    pub const fn new(id: Id, position: Vec2, health: u32) -> Self {
        Self {
            id,
            position,
            health,
        }
    }
}

impl<Id: Copy + Eq + std::fmt::Debug> Combatant for Actor<Id> {
    type Id = Id;

    fn id(&self) -> Id {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_dead(&self) -> bool {
        self.health == 0
    }
}

impl<Id: Copy + Eq + std::fmt::Debug> Damageable for Actor<Id> {
    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn damage_saturates_at_zero() {
        let mut actor = Actor::new(1_u32, Vec2::ZERO, 2);
        actor.take_damage(5);
        assert_eq!(actor.health, 0);
        assert!(actor.is_dead());
    }
}
