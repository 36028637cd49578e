//! Melee attacker that owns its profile and cooldown.
use glam::Vec2;

use super::{attack, can_attack, AttackProfile, AttackResult, AttackTimer, Combatant, Damageable};

/// An actor able to attack on request.
///
/// The timer starts [`AttackTimer::ready`], so a freshly spawned fighter can
/// strike immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    profile: AttackProfile,
    timer: AttackTimer,
}

impl Fighter {
    /// Creates a fighter that has not attacked yet.
    #[must_use]
    pub const fn new(profile: AttackProfile) -> Self {
        Self {
            profile,
            timer: AttackTimer::ready(),
        }
    }

    /// The fighter's attack profile.
    #[must_use]
    pub const fn profile(&self) -> &AttackProfile {
        &self.profile
    }

    /// The fighter's cooldown timer.
    #[must_use]
    pub const fn timer(&self) -> &AttackTimer {
        &self.timer
    }

    /// Advances the cooldown timer.
    pub fn tick(&mut self, dt: f32) {
        self.timer.advance(dt);
    }

    /// See [`can_attack`].
    #[must_use]
    pub fn can_attack<T: Combatant + ?Sized>(&self, position: Vec2, target: Option<&T>) -> bool {
        can_attack(position, target, &self.profile, &self.timer)
    }

    /// See [`attack`].
    pub fn attack<T: Damageable + ?Sized>(&mut self, target: Option<&mut T>) -> AttackResult {
        attack(target, &self.profile, &mut self.timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Actor;
    use rstest::rstest;

    #[rstest]
    fn fighter_waits_out_its_cooldown() {
        let profile = AttackProfile::new(2, 1.5, 1.0).expect("valid profile");
        let mut fighter = Fighter::new(profile);
        let mut target = Actor::new(3_u32, Vec2::new(1.0, 0.0), 5);

        assert!(fighter.can_attack(Vec2::ZERO, Some(&target)));
        assert_eq!(fighter.attack(Some(&mut target)), AttackResult::Applied);
        assert!(!fighter.can_attack(Vec2::ZERO, Some(&target)));

        fighter.tick(0.5);
        assert_eq!(fighter.attack(Some(&mut target)), AttackResult::NotReady);
        fighter.tick(0.5);
        assert_eq!(fighter.attack(Some(&mut target)), AttackResult::Applied);
        assert_eq!(target.health, 1);
    }
}
