//! The summoner's rune-and-laser attack.
//!
//! Three steps play back to back:
//!
//! 1. **Telegraph**: the rune spawned on the target grows from its base
//!    scale to [`RUNE_PEAK_FACTOR`] times that scale.
//! 2. **Discharge**: a laser bound to the target is spawned on the rune and
//!    held for [`DISCHARGE_HOLD_TIME`].
//! 3. **Resolve**: the rune shrinks to nothing while the laser collapses to
//!    [`LASER_COLLAPSED_SCALE`].
//!
//! Interpolation always runs between fixed start and end scales, evaluated
//! with the same eased fraction for both effects.
use glam::{Vec2, Vec3};
use log::{debug, warn};

use super::{EffectHost, EffectKind, EffectLedger, EffectSpawn, Step, StepEvent, TimedSequence};
use crate::constants::{
    DEFAULT_RUNE_BASE_SCALE, DEFAULT_RUNE_SCALE_TIME, DISCHARGE_HOLD_TIME, LASER_COLLAPSED_SCALE,
    RUNE_PEAK_FACTOR,
};
use crate::easing::Curve;

const TELEGRAPH: usize = 0;
const DISCHARGE: usize = 1;
const RESOLVE: usize = 2;

/// Tunables for [`AttackSequence`].
#[derive(Debug, Clone, PartialEq)]
pub struct AttackSequenceSettings {
    /// Duration of both the telegraph and the resolve step.
    pub rune_scale_time: f32,
    /// Curve shared by the telegraph and resolve steps.
    pub curve: Curve,
    /// Uniform scale the rune is spawned with.
    pub rune_base_scale: f32,
    /// Scale the laser is spawned with.
    pub laser_base_scale: Vec3,
}

impl Default for AttackSequenceSettings {
    fn default() -> Self {
        Self {
            rune_scale_time: DEFAULT_RUNE_SCALE_TIME,
            curve: Curve::default(),
            rune_base_scale: DEFAULT_RUNE_BASE_SCALE,
            laser_base_scale: Vec3::ONE,
        }
    }
}

impl AttackSequenceSettings {
    fn steps(&self) -> Vec<Step> {
        vec![
            Step::new(self.rune_scale_time, self.curve.clone()),
            Step::hold(DISCHARGE_HOLD_TIME),
            Step::new(self.rune_scale_time, self.curve.clone()),
        ]
    }
}

/// Which part of the attack is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    /// The rune is growing.
    Telegraph,
    /// The laser is armed.
    Discharge,
    /// Both effects are fading out.
    Resolve,
    /// Every step has completed and the effects were released.
    Finished,
}

#[derive(Debug)]
struct Stage<H, T> {
    target: T,
    damage: u32,
    anchor_position: Vec2,
    anchor: Option<H>,
    anchor_base: Vec3,
    anchor_scale: Vec3,
    laser: Option<H>,
    laser_base: Vec3,
    laser_scale: Vec3,
    laser_spawned: bool,
}

/// One in-flight rune attack.
///
/// Handles spawned by the sequence are recorded in the caller's
/// [`EffectLedger`] and released through it when the resolve step ends.
#[derive(Debug)]
pub struct AttackSequence<H, T> {
    timeline: TimedSequence,
    stage: Stage<H, T>,
}

impl<H, T> AttackSequence<H, T>
where
    H: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    T: Copy + std::fmt::Debug,
{
    /// Spawns the rune on the target and starts the telegraph.
    pub fn start<X>(
        settings: &AttackSequenceSettings,
        damage: u32,
        target: T,
        target_position: Vec2,
        variant: usize,
        ledger: &mut EffectLedger<H>,
        host: &mut X,
    ) -> Self
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let anchor_base = Vec3::splat(settings.rune_base_scale);
        let anchor = host.spawn_effect(EffectSpawn {
            kind: EffectKind::Rune { variant },
            position: target_position,
            scale: anchor_base,
        });
        ledger.track(anchor);
        debug!("rune {anchor:?} (variant {variant}) spawned on {target:?}");

        Self {
            timeline: TimedSequence::new(settings.steps()),
            stage: Stage {
                target,
                damage,
                anchor_position: target_position,
                anchor: Some(anchor),
                anchor_base,
                anchor_scale: anchor_base,
                laser: None,
                laser_base: settings.laser_base_scale,
                laser_scale: settings.laser_base_scale,
                laser_spawned: false,
            },
        }
    }

    /// Advances the attack by `dt` seconds.
    ///
    /// Returns `true` once the attack has finished and released its effects.
    pub fn advance<X>(&mut self, dt: f32, ledger: &mut EffectLedger<H>, host: &mut X) -> bool
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let stage = &mut self.stage;
        self.timeline
            .advance(dt, |event| stage.apply(event, ledger, &mut *host));
        self.timeline.is_finished()
    }

    /// The step currently playing.
    #[must_use]
    pub fn phase(&self) -> AttackPhase {
        match self.timeline.current_step() {
            Some(TELEGRAPH) => AttackPhase::Telegraph,
            Some(DISCHARGE) => AttackPhase::Discharge,
            Some(_) => AttackPhase::Resolve,
            None => AttackPhase::Finished,
        }
    }

    /// Returns `true` once every step has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished()
    }

    /// The actor the attack is bound to.
    #[must_use]
    pub const fn target(&self) -> T {
        self.stage.target
    }

    /// Handle of the rune while the sequence still owns it.
    #[must_use]
    pub const fn anchor(&self) -> Option<H> {
        self.stage.anchor
    }

    /// Handle of the laser while the sequence still owns it.
    #[must_use]
    pub const fn laser(&self) -> Option<H> {
        self.stage.laser
    }

    /// Last scale computed for the rune.
    #[must_use]
    pub const fn anchor_scale(&self) -> Vec3 {
        self.stage.anchor_scale
    }

    /// Last scale computed for the laser.
    #[must_use]
    pub const fn laser_scale(&self) -> Vec3 {
        self.stage.laser_scale
    }
}

impl<H, T> Stage<H, T>
where
    H: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    T: Copy + std::fmt::Debug,
{
    fn apply<X>(&mut self, event: StepEvent, ledger: &mut EffectLedger<H>, host: &mut X)
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        match event {
            StepEvent::Entered(DISCHARGE) => self.discharge(ledger, host),
            StepEvent::Progress {
                step: TELEGRAPH,
                fraction,
                eased,
            } => {
                let peak = self.anchor_base * RUNE_PEAK_FACTOR;
                self.anchor_scale = interpolate(self.anchor_base, peak, fraction, eased);
                scale_if_present(host, self.anchor, self.anchor_scale);
            }
            StepEvent::Progress {
                step: RESOLVE,
                fraction,
                eased,
            } => {
                let peak = self.anchor_base * RUNE_PEAK_FACTOR;
                let collapsed = Vec3::from_array(LASER_COLLAPSED_SCALE);
                self.anchor_scale = interpolate(peak, Vec3::ZERO, fraction, eased);
                self.laser_scale = interpolate(self.laser_base, collapsed, fraction, eased);
                scale_if_present(host, self.anchor, self.anchor_scale);
                scale_if_present(host, self.laser, self.laser_scale);
            }
            StepEvent::Completed(RESOLVE) => self.release(ledger, host),
            _ => {}
        }
    }

    fn discharge<X>(&mut self, ledger: &mut EffectLedger<H>, host: &mut X)
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        if self.laser_spawned {
            return;
        }
        self.laser_spawned = true;
        let laser = host.spawn_effect(EffectSpawn {
            kind: EffectKind::Laser {
                damage: self.damage,
                target: self.target,
            },
            position: self.anchor_position,
            scale: self.laser_base,
        });
        ledger.track(laser);
        self.laser = Some(laser);
        debug!(
            "laser {laser:?} armed against {:?} for {} damage",
            self.target, self.damage
        );
    }

    fn release<X>(&mut self, ledger: &mut EffectLedger<H>, host: &mut X)
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        for handle in [self.anchor.take(), self.laser.take()].into_iter().flatten() {
            ledger.release(handle, host);
        }
    }
}

fn interpolate(from: Vec3, to: Vec3, fraction: f32, eased: f32) -> Vec3 {
    if fraction >= 1.0 {
        to
    } else {
        from.lerp(to, eased)
    }
}

fn scale_if_present<H, T, X>(host: &mut X, effect: Option<H>, scale: Vec3)
where
    H: Copy + std::fmt::Debug,
    X: EffectHost<T, Handle = H> + ?Sized,
{
    let Some(handle) = effect else {
        return;
    };
    if host.effect_exists(handle) {
        host.set_effect_scale(handle, scale);
    } else {
        warn!("effect {handle:?} vanished mid-attack; skipping its scale");
    }
}
