//! Attack eligibility and resolution.
use glam::Vec2;
use log::debug;

use super::{AttackProfile, AttackTimer, Combatant, Damageable};
use crate::vector_math::planar_distance;

/// Outcome of an [`attack`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Damage was applied and the timer restarted.
    Applied,
    /// The cooldown has not elapsed; nothing changed.
    NotReady,
    /// There was no target; nothing changed.
    NoTarget,
}

/// Returns `true` when `target` is strictly closer than the profile's range.
///
/// A target sitting exactly on the range boundary is out of range.
#[must_use]
pub fn is_in_range<T: Combatant + ?Sized>(
    attacker: Vec2,
    target: &T,
    profile: &AttackProfile,
) -> bool {
    planar_distance(attacker, target.position()) < profile.range()
}

/// Decides whether an attacker at `attacker` may hit `target` now.
///
/// False when the target is absent or dead, when it is not strictly inside
/// the attack range, or while the cooldown is still running.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use summoner::combat::{can_attack, Actor, AttackProfile, AttackTimer};
/// let profile = AttackProfile::new(1, 1.0, 1.0).expect("valid profile");
/// let timer = AttackTimer::with_elapsed(1.0);
/// let near = Actor::new(1_u32, Vec2::new(0.5, 0.0), 3);
/// let edge = Actor::new(2_u32, Vec2::new(1.0, 0.0), 3);
/// assert!(can_attack(Vec2::ZERO, Some(&near), &profile, &timer));
/// assert!(!can_attack(Vec2::ZERO, Some(&edge), &profile, &timer));
/// ```
#[must_use]
pub fn can_attack<T: Combatant + ?Sized>(
    attacker: Vec2,
    target: Option<&T>,
    profile: &AttackProfile,
    timer: &AttackTimer,
) -> bool {
    let Some(actor) = target else {
        return false;
    };
    !actor.is_dead() && is_in_range(attacker, actor, profile) && timer.is_ready(profile)
}

/// Attempts an attack, damaging `target` when the cooldown allows it.
///
/// The cooldown is checked before the target, so an attack issued too early
/// reports [`AttackResult::NotReady`] even without a target. Range and
/// death are not rechecked here; callers gate on [`can_attack`] when they
/// need those.
pub fn attack<T: Damageable + ?Sized>(
    target: Option<&mut T>,
    profile: &AttackProfile,
    timer: &mut AttackTimer,
) -> AttackResult {
    if !timer.is_ready(profile) {
        return AttackResult::NotReady;
    }
    let Some(victim) = target else {
        return AttackResult::NoTarget;
    };
    timer.reset();
    victim.take_damage(profile.damage());
    debug!("applied {} damage to {:?}", profile.damage(), victim.id());
    AttackResult::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Actor;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> AttackProfile {
        AttackProfile::new(1, 1.0, 1.0).expect("valid profile")
    }

    fn target_at(x: f32) -> Actor<u32> {
        Actor::new(7, Vec2::new(x, 0.0), 3)
    }

    #[rstest]
    #[case(0.5, true)]
    #[case(0.999, true)]
    #[case(1.0, false)]
    #[case(1.5, false)]
    fn range_boundary_is_exclusive(
        profile: AttackProfile,
        #[case] distance: f32,
        #[case] expected: bool,
    ) {
        let timer = AttackTimer::with_elapsed(1.0);
        let target = target_at(distance);
        assert_eq!(
            can_attack(Vec2::ZERO, Some(&target), &profile, &timer),
            expected
        );
    }

    #[rstest]
    fn absent_target_cannot_be_attacked(profile: AttackProfile) {
        let timer = AttackTimer::ready();
        assert!(!can_attack::<Actor<u32>>(Vec2::ZERO, None, &profile, &timer));
    }

    #[rstest]
    fn dead_target_cannot_be_attacked(profile: AttackProfile) {
        let timer = AttackTimer::ready();
        let mut target = target_at(0.1);
        target.health = 0;
        assert!(!can_attack(Vec2::ZERO, Some(&target), &profile, &timer));
    }

    #[rstest]
    fn cooldown_blocks_eligibility(profile: AttackProfile) {
        let timer = AttackTimer::with_elapsed(0.99);
        let target = target_at(0.1);
        assert!(!can_attack(Vec2::ZERO, Some(&target), &profile, &timer));
    }

    #[rstest]
    fn applied_attack_damages_and_resets(profile: AttackProfile) {
        let mut timer = AttackTimer::with_elapsed(1.0);
        let mut target = target_at(0.5);
        let result = attack(Some(&mut target), &profile, &mut timer);
        assert_eq!(result, AttackResult::Applied);
        assert_eq!(target.health, 2);
        assert!(timer.elapsed().abs() < f32::EPSILON);
    }

    #[rstest]
    fn early_attack_is_ignored(profile: AttackProfile) {
        let mut timer = AttackTimer::with_elapsed(0.5);
        let mut target = target_at(0.5);
        assert_eq!(
            attack(Some(&mut target), &profile, &mut timer),
            AttackResult::NotReady
        );
        assert_eq!(target.health, 3);
        assert!((timer.elapsed() - 0.5).abs() < f32::EPSILON);
    }

    #[rstest]
    fn missing_target_leaves_timer_untouched(profile: AttackProfile) {
        let mut timer = AttackTimer::with_elapsed(2.0);
        assert_eq!(
            attack::<Actor<u32>>(None, &profile, &mut timer),
            AttackResult::NoTarget
        );
        assert!((timer.elapsed() - 2.0).abs() < f32::EPSILON);
    }

    #[rstest]
    fn second_attack_in_window_applies_once(profile: AttackProfile) {
        let mut timer = AttackTimer::ready();
        let mut target = target_at(0.5);
        assert_eq!(
            attack(Some(&mut target), &profile, &mut timer),
            AttackResult::Applied
        );
        timer.advance(0.5);
        assert_eq!(
            attack(Some(&mut target), &profile, &mut timer),
            AttackResult::NotReady
        );
        assert_eq!(target.health, 2);
    }
}
