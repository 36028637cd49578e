//! Per-frame systems driving summoners, fighters and motion.
use bevy::prelude::*;
use log::{debug, warn};

use super::{
    ActorView, CommandsEffectHost, EffectTransforms, SimulationClock, SummonerAttackStarted,
};
use crate::components::{
    AttackAnimation, DamagingEffect, Effect, Facing, FighterComp, Health, MotionSettings,
    MovementIntent, Player, Summoner, VelocityComp,
};
use crate::constants::FACING_DEADZONE;

type SummonerRow<'w> = (
    Entity,
    &'w mut Summoner,
    &'w Transform,
    Option<&'w Health>,
    &'w mut MovementIntent,
    &'w mut AttackAnimation,
);

type MotionRow<'w> = (
    &'w MovementIntent,
    &'w mut VelocityComp,
    &'w MotionSettings,
    &'w mut Transform,
);

/// Advances every fighter's cooldown.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn advance_fighter_timers(clock: Res<SimulationClock>, mut fighters: Query<&mut FighterComp>) {
    for mut fighter in &mut fighters {
        fighter.tick(clock.delta());
    }
}

/// Ticks every summoner's brain against the player and stores its intent.
///
/// Dead summoners only wind down an attack already in flight.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn drive_summoners(
    mut commands: Commands,
    clock: Res<SimulationClock>,
    mut summoners: Query<SummonerRow<'_>, Without<Effect>>,
    players: Query<(Entity, &Transform, &Health), (With<Player>, Without<Effect>)>,
    mut effects: EffectTransforms,
) {
    let dt = clock.delta();
    let player = players
        .iter()
        .next()
        .map(|(entity, transform, health)| ActorView::new(entity, transform, health));

    for (entity, mut summoner, transform, health, mut movement, mut animation) in &mut summoners {
        let intent = {
            let mut host = CommandsEffectHost::new(&mut commands, &mut effects, entity);
            if health.is_some_and(Health::is_dead) {
                summoner.wind_down(dt, &mut host)
            } else {
                let position = transform.translation.truncate();
                summoner.tick(dt, position, player.as_ref(), &mut host)
            }
        };

        movement.0 = intent.movement;
        if animation.is_attacking != intent.attacking {
            animation.is_attacking = intent.attacking;
        }
        if intent.attack_started {
            if let Some(target) = player {
                commands.trigger(SummonerAttackStarted {
                    summoner: entity,
                    target: target.entity,
                });
            }
        }
        if let Some(index) = intent.arrived_at {
            debug!("summoner {entity:?} reached waypoint {index}");
        }
    }
}

/// Applies the damage of freshly armed effects to their targets, once.
pub fn apply_damaging_effects(
    mut effects: Query<(Entity, &mut DamagingEffect)>,
    mut targets: Query<&mut Health>,
) {
    for (entity, mut effect) in &mut effects {
        if !effect.armed {
            continue;
        }
        effect.armed = false;
        match targets.get_mut(effect.target) {
            Ok(mut health) if !health.is_dead() => {
                health.apply_damage(effect.damage);
                debug!(
                    "effect {entity:?} dealt {} damage to {:?}; {} left",
                    effect.damage, effect.target, health.current
                );
            }
            Ok(_) => debug!("effect {entity:?} target {:?} already dead", effect.target),
            Err(_) => warn!(
                "effect {entity:?} target {:?} no longer exists",
                effect.target
            ),
        }
    }
}

/// Applies movement impulses and horizontal friction, then integrates.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn apply_movement(
    clock: Res<SimulationClock>,
    mut bodies: Query<MotionRow<'_>, Without<Effect>>,
) {
    let dt = clock.delta();
    for (intent, mut velocity, settings, mut transform) in &mut bodies {
        let friction = -velocity.vx * settings.friction;
        velocity.vx += intent.x / settings.mass + friction / settings.mass * dt;
        velocity.vy += intent.y / settings.mass;
        transform.translation.x += velocity.vx * dt;
        transform.translation.y += velocity.vy * dt;
    }
}

/// Flips sprites to face the direction of travel.
///
/// Near-zero horizontal speeds keep the previous orientation.
pub fn update_facing(mut bodies: Query<(&VelocityComp, &mut Facing)>) {
    for (velocity, mut facing) in &mut bodies {
        if velocity.vx.abs() < FACING_DEADZONE {
            continue;
        }
        let flip_x = velocity.vx < 0.0;
        if facing.flip_x != flip_x {
            facing.flip_x = flip_x;
        }
    }
}
