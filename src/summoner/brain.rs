//! Patrol and attack state machine driven once per tick.
use glam::Vec2;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{PatrolPath, PatrolSettings};
use crate::combat::{can_attack, AttackProfile, AttackTimer, Combatant};
use crate::constants::DEFAULT_RUNE_VARIANTS;
use crate::sequence::{
    AttackPhase, AttackSequence, AttackSequenceSettings, EffectHost, EffectLedger,
};
use crate::vector_math::{horizontal_intent, planar_distance};

/// Everything needed to build a [`SummonerBrain`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummonerSettings {
    /// Patrol behaviour.
    pub patrol: PatrolSettings,
    /// The rune attack's damage, range and cooldown.
    pub profile: AttackProfile,
    /// Timing and scales of the rune attack.
    pub sequence: AttackSequenceSettings,
    /// Number of rune sprites to choose from.
    pub rune_variants: usize,
}

impl Default for SummonerSettings {
    fn default() -> Self {
        Self {
            patrol: PatrolSettings::default(),
            profile: AttackProfile::default(),
            sequence: AttackSequenceSettings::default(),
            rune_variants: DEFAULT_RUNE_VARIANTS,
        }
    }
}

/// Observable state of a [`SummonerBrain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonerState {
    /// Walking the path or holding the guard position.
    Patrolling,
    /// Playing a rune attack.
    Attacking,
}

/// What the host should do after a [`SummonerBrain::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummonerIntent {
    /// Impulse to apply this tick. Zero while attacking.
    pub movement: Vec2,
    /// An attack started during this tick.
    pub attack_started: bool,
    /// The attack animation flag after this tick.
    pub attacking: bool,
    /// Index of the waypoint reached during this tick.
    pub arrived_at: Option<usize>,
    /// The attack in flight finished during this tick.
    pub attack_finished: bool,
}

#[derive(Debug)]
enum Mode<H, T> {
    Patrolling,
    Attacking(Box<AttackSequence<H, T>>),
}

/// Decision state of one summoner.
///
/// `H` is the host's effect handle type and `T` the identity of the actors
/// the summoner attacks. The brain never holds the target itself; the host
/// passes the current view of it into every [`Self::tick`].
#[derive(Debug)]
pub struct SummonerBrain<H, T> {
    settings: SummonerSettings,
    path: Option<PatrolPath>,
    guard_position: Vec2,
    waypoint_index: usize,
    time_since_waypoint: f32,
    attack_timer: AttackTimer,
    mode: Mode<H, T>,
    ledger: EffectLedger<H>,
    rng: ChaCha8Rng,
}

impl<H, T> SummonerBrain<H, T>
where
    H: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    T: Copy + Eq + std::fmt::Debug,
{
    /// Creates a patrolling brain.
    ///
    /// `guard_position` is where a summoner without a path holds; `seed`
    /// makes rune variant choices reproducible.
    #[must_use]
    pub fn new(
        settings: SummonerSettings,
        guard_position: Vec2,
        path: Option<PatrolPath>,
        seed: u64,
    ) -> Self {
        Self {
            settings,
            path,
            guard_position,
            waypoint_index: 0,
            time_since_waypoint: f32::INFINITY,
            attack_timer: AttackTimer::new(),
            mode: Mode::Patrolling,
            ledger: EffectLedger::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Runs one decision step for a summoner standing at `position`.
    ///
    /// A patrolling summoner that can hit `target` starts an attack and does
    /// not move this tick. Otherwise it walks its path. An attacking summoner
    /// stands still while the sequence plays. Both timers advance at the end
    /// of every tick.
    pub fn tick<C, X>(
        &mut self,
        dt: f32,
        position: Vec2,
        target: Option<&C>,
        host: &mut X,
    ) -> SummonerIntent
    where
        C: Combatant<Id = T> + ?Sized,
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let step = sanitise(dt);
        let mut intent = SummonerIntent::default();

        if matches!(self.mode, Mode::Patrolling) {
            let profile = &self.settings.profile;
            let engaged = target.filter(|candidate| {
                can_attack(position, Some(*candidate), profile, &self.attack_timer)
            });
            if let Some(candidate) = engaged {
                self.begin_attack(candidate.id(), candidate.position(), host);
                intent.attack_started = true;
            } else {
                let (destination, arrived) = self.patrol_destination(position);
                intent.arrived_at = arrived;
                if self.time_since_waypoint > self.settings.patrol.dwell_time {
                    intent.movement =
                        horizontal_intent(position.x, destination.x, self.settings.patrol.speed);
                }
            }
        } else {
            intent.attack_finished = self.advance_attack(step, host);
        }

        self.time_since_waypoint += step;
        self.attack_timer.advance(step);
        intent.attacking = self.is_attacking();
        intent
    }

    /// Advances an in-flight attack without making any decision.
    ///
    /// Used once the owner is dead: nothing new starts and nothing moves,
    /// but a running attack still plays out and releases its effects.
    pub fn wind_down<X>(&mut self, dt: f32, host: &mut X) -> SummonerIntent
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let attack_finished = self.advance_attack(sanitise(dt), host);
        SummonerIntent {
            attack_finished,
            attacking: self.is_attacking(),
            ..SummonerIntent::default()
        }
    }

    /// Releases every effect the summoner still owns.
    ///
    /// Drops any in-flight attack. Calling it again releases nothing and
    /// returns zero.
    pub fn teardown<X>(&mut self, host: &mut X) -> usize
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        self.mode = Mode::Patrolling;
        let released = self.ledger.release_all(host);
        if released > 0 {
            debug!("summoner teardown released {released} effect(s)");
        }
        released
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SummonerState {
        match self.mode {
            Mode::Patrolling => SummonerState::Patrolling,
            Mode::Attacking(_) => SummonerState::Attacking,
        }
    }

    /// The animation flag: `true` while an attack is playing.
    #[must_use]
    pub const fn is_attacking(&self) -> bool {
        matches!(self.mode, Mode::Attacking(_))
    }

    /// Phase of the attack in flight, if any.
    #[must_use]
    pub fn attack_phase(&self) -> Option<AttackPhase> {
        match &self.mode {
            Mode::Patrolling => None,
            Mode::Attacking(sequence) => Some(sequence.phase()),
        }
    }

    /// The attack in flight, if any.
    #[must_use]
    pub fn attack_sequence(&self) -> Option<&AttackSequence<H, T>> {
        match &self.mode {
            Mode::Patrolling => None,
            Mode::Attacking(sequence) => Some(sequence),
        }
    }

    /// Index of the waypoint currently walked towards.
    #[must_use]
    pub const fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    /// Seconds since the last waypoint was reached; infinite before the first.
    #[must_use]
    pub const fn time_since_waypoint(&self) -> f32 {
        self.time_since_waypoint
    }

    /// The summoner's attack cooldown timer.
    #[must_use]
    pub const fn attack_timer(&self) -> &AttackTimer {
        &self.attack_timer
    }

    /// Effects the summoner is currently responsible for.
    #[must_use]
    pub const fn ledger(&self) -> &EffectLedger<H> {
        &self.ledger
    }

    /// The settings the brain was built with.
    #[must_use]
    pub const fn settings(&self) -> &SummonerSettings {
        &self.settings
    }

    fn begin_attack<X>(&mut self, target: T, target_position: Vec2, host: &mut X)
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        self.attack_timer.reset();
        let variant = match self.settings.rune_variants {
            0 => 0,
            variants => self.rng.gen_range(0..variants),
        };
        let sequence = AttackSequence::start(
            &self.settings.sequence,
            self.settings.profile.damage(),
            target,
            target_position,
            variant,
            &mut self.ledger,
            host,
        );
        self.mode = Mode::Attacking(Box::new(sequence));
        debug!("summoner attacking {target:?} at {target_position}");
    }

    fn advance_attack<X>(&mut self, dt: f32, host: &mut X) -> bool
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let Mode::Attacking(sequence) = &mut self.mode else {
            return false;
        };
        if !sequence.advance(dt, &mut self.ledger, host) {
            return false;
        }
        self.mode = Mode::Patrolling;
        debug!("summoner attack finished; back to patrol");
        true
    }

    fn patrol_destination(&mut self, position: Vec2) -> (Vec2, Option<usize>) {
        let Some(path) = &self.path else {
            return (self.guard_position, None);
        };
        let mut arrived = None;
        if let Some(waypoint) = path.waypoint(self.waypoint_index) {
            if planar_distance(position, waypoint) < self.settings.patrol.tolerance {
                self.time_since_waypoint = 0.0;
                arrived = Some(self.waypoint_index);
                self.waypoint_index = path.next_index(self.waypoint_index);
            }
        }
        let destination = path
            .waypoint(self.waypoint_index)
            .unwrap_or(self.guard_position);
        (destination, arrived)
    }
}

fn sanitise(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Actor;
    use crate::sequence::MockEffectHost;
    use rstest::{fixture, rstest};

    type Brain = SummonerBrain<u32, u8>;

    #[fixture]
    fn host() -> MockEffectHost<u8> {
        let mut host = MockEffectHost::<u8>::new();
        let mut next = 0_u32;
        host.expect_spawn_effect().returning(move |_| {
            next += 1;
            next
        });
        host.expect_effect_exists().return_const(true);
        host.expect_set_effect_scale().return_const(());
        host.expect_destroy_effect().return_const(());
        host
    }

    fn brain(path: Option<Vec<Vec2>>) -> Brain {
        SummonerBrain::new(
            SummonerSettings::default(),
            Vec2::new(-2.0, 0.0),
            path.and_then(PatrolPath::new),
            7,
        )
    }

    #[rstest]
    fn guard_position_is_used_without_a_path(mut host: MockEffectHost<u8>) {
        let mut brain = brain(None);
        let intent = brain.tick::<Actor<u8>, _>(0.1, Vec2::new(3.0, 0.0), None, &mut host);
        assert!(intent.movement.x < 0.0);
        assert_eq!(intent.arrived_at, None);
    }

    #[rstest]
    fn attack_timer_starts_at_zero(mut host: MockEffectHost<u8>) {
        let mut brain = brain(None);
        let player = Actor::new(1_u8, Vec2::new(-2.5, 0.0), 3);
        for _ in 0..2 {
            let intent = brain.tick(0.5, Vec2::new(-2.0, 0.0), Some(&player), &mut host);
            assert!(!intent.attack_started);
        }
        let intent = brain.tick(0.5, Vec2::new(-2.0, 0.0), Some(&player), &mut host);
        assert!(intent.attack_started);
        assert_eq!(intent.movement, Vec2::ZERO);
        assert_eq!(brain.state(), SummonerState::Attacking);
    }

    #[rstest]
    fn dead_target_is_ignored(mut host: MockEffectHost<u8>) {
        let mut brain = brain(None);
        let corpse = Actor::new(1_u8, Vec2::new(-2.0, 0.0), 0);
        for _ in 0..5 {
            let intent = brain.tick(1.0, Vec2::new(-2.0, 0.0), Some(&corpse), &mut host);
            assert!(!intent.attack_started);
        }
    }

    #[rstest]
    fn teardown_is_idempotent(mut host: MockEffectHost<u8>) {
        let mut brain = brain(None);
        let player = Actor::new(1_u8, Vec2::new(-2.0, 0.0), 3);
        brain.tick(1.0, Vec2::new(-2.0, 0.0), Some(&player), &mut host);
        brain.tick(1.0, Vec2::new(-2.0, 0.0), Some(&player), &mut host);
        assert!(brain.is_attacking());
        assert_eq!(brain.teardown(&mut host), 1);
        assert_eq!(brain.teardown(&mut host), 0);
        assert!(!brain.is_attacking());
    }
}
