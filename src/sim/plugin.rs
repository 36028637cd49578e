//! Bevy plugin wiring the summoner simulation into the schedule.

use bevy::ecs::lifecycle::Remove;
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error};

use super::{
    advance_fighter_timers, apply_damaging_effects, apply_movement, drive_summoners, sync_clock,
    update_facing, CommandsEffectHost, DespawnSummoner, EffectTransforms, HealthTarget,
    MeleeAttackRequested, SimulationClock, SimulationError, SimulationErrorContext,
};
use crate::components::{FighterComp, Health, Summoner};

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_simulation_error(event: On<SimulationError>) {
    let SimulationError { context, detail } = event.event();
    error!("simulation error during {context:?}: {detail}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn resolve_melee_attack(
    event: On<MeleeAttackRequested>,
    mut commands: Commands,
    mut fighters: Query<&mut FighterComp>,
    mut targets: Query<(&Transform, &mut Health)>,
) {
    let MeleeAttackRequested { attacker, target } = *event.event();
    let Ok(mut fighter) = fighters.get_mut(attacker) else {
        commands.trigger(SimulationError::new(
            SimulationErrorContext::Melee,
            format!("{attacker:?} has no fighter"),
        ));
        return;
    };
    let mut view = target.and_then(|entity| {
        targets
            .get_mut(entity)
            .ok()
            .map(|(transform, health)| HealthTarget::new(entity, transform, health))
    });
    let result = fighter.attack(view.as_mut());
    debug!("melee attack by {attacker:?} on {target:?}: {result:?}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn despawn_summoner(
    event: On<DespawnSummoner>,
    mut commands: Commands,
    summoners: Query<(), With<Summoner>>,
) {
    let DespawnSummoner { entity } = *event.event();
    if !summoners.contains(entity) {
        commands.trigger(SimulationError::new(
            SimulationErrorContext::Teardown,
            format!("{entity:?} is not a summoner"),
        ));
        return;
    }
    commands.entity(entity).try_despawn();
}

/// Releases a summoner's effects whenever its [`Summoner`] component goes
/// away, whether the entity was despawned or only the component removed.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn release_summoner_effects(
    remove: On<Remove, Summoner>,
    mut commands: Commands,
    mut summoners: Query<&mut Summoner>,
    mut effects: EffectTransforms,
) {
    let entity = remove.entity;
    let Ok(mut summoner) = summoners.get_mut(entity) else {
        return;
    };
    let released = {
        let mut host = CommandsEffectHost::new(&mut commands, &mut effects, entity);
        summoner.teardown(&mut host)
    };
    debug!("summoner {entity:?} removed; released {released} effect(s)");
}

/// Bevy plugin installing the summoner simulation.
///
/// Systems run chained in [`Update`]: clock, fighter cooldowns, summoner
/// decisions, damage from armed effects, movement, then facing. Insert a
/// [`SimulationClock`] before adding the plugin to choose the time step.
#[derive(Default)]
pub struct SummonerPlugin;

impl Plugin for SummonerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>();
        app.add_observer(log_simulation_error);
        app.add_observer(resolve_melee_attack);
        app.add_observer(despawn_summoner);
        app.add_observer(release_summoner_effects);
        app.add_systems(
            Update,
            (
                sync_clock,
                advance_fighter_timers,
                drive_summoners,
                apply_damaging_effects,
                apply_movement,
                update_facing,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ClockMode;
    use rstest::rstest;

    #[rstest]
    fn plugin_installs_default_clock() {
        let mut app = App::new();
        app.add_plugins(SummonerPlugin);
        let clock = app.world().resource::<SimulationClock>();
        assert!(matches!(clock.mode(), ClockMode::Fixed(_)));
    }

    #[rstest]
    fn preinserted_clock_is_kept() {
        let mut app = App::new();
        app.insert_resource(SimulationClock::fixed(0.5));
        app.add_plugins(SummonerPlugin);
        app.update();
        let clock = app.world().resource::<SimulationClock>();
        assert!((clock.delta() - 0.5).abs() < f32::EPSILON);
    }
}
