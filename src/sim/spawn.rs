//! Component bundles for spawning simulation actors.
use bevy::prelude::*;

use crate::combat::{AttackProfile, Fighter};
use crate::components::{
    AttackAnimation, Facing, FighterComp, Health, MotionSettings, MovementIntent, Player,
    Summoner, VelocityComp,
};
use crate::summoner::SummonerBrain;

/// Components of a summoner standing at `position`.
#[must_use]
pub fn summoner_bundle(
    brain: SummonerBrain<Entity, Entity>,
    position: Vec2,
    health: u32,
    motion: MotionSettings,
) -> impl Bundle {
    (
        Summoner(brain),
        Transform::from_translation(position.extend(0.0)),
        Health::new(health),
        MovementIntent::default(),
        VelocityComp::default(),
        motion,
        Facing::default(),
        AttackAnimation::default(),
    )
}

/// Components of the player at `position`, armed with a melee attack.
#[must_use]
pub fn player_bundle(position: Vec2, health: u32, profile: AttackProfile) -> impl Bundle {
    (
        Player,
        Transform::from_translation(position.extend(0.0)),
        Health::new(health),
        FighterComp(Fighter::new(profile)),
    )
}
