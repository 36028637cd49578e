//! [`EffectHost`] backed by Bevy [`Commands`].
use bevy::prelude::*;
use hashbrown::HashMap;
use log::debug;

use crate::components::{DamagingEffect, Effect, Player, RuneEffect, Summoner};
use crate::sequence::{EffectHost, EffectKind, EffectSpawn};

/// Filter selecting effect transforms disjoint from actor transforms.
pub type EffectFilter = (With<Effect>, Without<Summoner>, Without<Player>);

/// Query over the transforms of live effect entities.
pub type EffectTransforms<'w, 's> = Query<'w, 's, &'static mut Transform, EffectFilter>;

/// Spawns, scales and despawns effect entities for one summoner.
///
/// Spawns go through [`Commands`] and only become visible to queries once
/// the commands are applied, so transforms of effects spawned through this
/// host are kept aside until then.
pub struct CommandsEffectHost<'a, 'cw, 'cs, 'qw, 'qs> {
    commands: &'a mut Commands<'cw, 'cs>,
    effects: &'a mut EffectTransforms<'qw, 'qs>,
    owner: Entity,
    pending: HashMap<Entity, Transform>,
}

impl<'a, 'cw, 'cs, 'qw, 'qs> CommandsEffectHost<'a, 'cw, 'cs, 'qw, 'qs> {
    /// Creates a host spawning effects on behalf of `owner`.
    #[must_use]
    pub fn new(
        commands: &'a mut Commands<'cw, 'cs>,
        effects: &'a mut EffectTransforms<'qw, 'qs>,
        owner: Entity,
    ) -> Self {
        Self {
            commands,
            effects,
            owner,
            pending: HashMap::new(),
        }
    }
}

impl EffectHost<Entity> for CommandsEffectHost<'_, '_, '_, '_, '_> {
    type Handle = Entity;

    fn spawn_effect(&mut self, spawn: EffectSpawn<Entity>) -> Entity {
        let transform = Transform::from_translation(spawn.position.extend(0.0))
            .with_scale(spawn.scale);
        let mut entity = self.commands.spawn((Effect { owner: self.owner }, transform));
        match spawn.kind {
            EffectKind::Rune { variant } => {
                entity.insert(RuneEffect { variant });
            }
            EffectKind::Laser { damage, target } => {
                entity.insert(DamagingEffect {
                    damage,
                    target,
                    armed: true,
                });
            }
        }
        let id = entity.id();
        self.pending.insert(id, transform);
        id
    }

    fn destroy_effect(&mut self, handle: Entity) {
        self.pending.remove(&handle);
        self.commands.entity(handle).try_despawn();
        debug!("despawned effect {handle:?} of {:?}", self.owner);
    }

    fn effect_exists(&self, handle: Entity) -> bool {
        self.pending.contains_key(&handle) || self.effects.contains(handle)
    }

    fn set_effect_scale(&mut self, handle: Entity, scale: Vec3) {
        if let Some(transform) = self.pending.get_mut(&handle) {
            transform.scale = scale;
            self.commands.entity(handle).insert(*transform);
        } else if let Ok(mut transform) = self.effects.get_mut(handle) {
            transform.scale = scale;
        }
    }
}
