//! Headless runner playing one summoner scenario and logging the outcome.
use std::path::PathBuf;

use anyhow::Context;
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use summoner::components::{Health, MotionSettings};
use summoner::config::{load_scenario, Scenario};
use summoner::prelude::*;
use summoner::init_logging;

/// Runs a summoner patrol-and-attack scenario without rendering
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file in JSON; the built-in scenario is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Override the number of ticks to simulate
    #[arg(long)]
    ticks: Option<u32>,
    /// Override the seconds per tick
    #[arg(long)]
    dt: Option<f32>,
    /// Override the rune RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Resource, Default)]
struct AttackTally(u32);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn count_attack(event: On<SummonerAttackStarted>, mut tally: ResMut<AttackTally>) {
    let SummonerAttackStarted { summoner, target } = *event.event();
    tally.0 += 1;
    info!("summoner {summoner:?} attacks {target:?}");
}

fn scenario_from(args: &Args) -> anyhow::Result<Scenario> {
    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::default(),
    };
    if let Some(ticks) = args.ticks {
        scenario.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        scenario.dt = dt;
    }
    if let Some(seed) = args.seed {
        scenario.seed = seed;
    }
    Ok(scenario)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = scenario_from(&args)?;
    let settings = scenario.validate().context("invalid scenario")?;

    let mut app = App::new();
    app.insert_resource(SimulationClock::fixed(scenario.dt))
        .init_resource::<AttackTally>()
        .add_plugins(SummonerPlugin)
        .add_observer(count_attack);

    let player = app
        .world_mut()
        .spawn(player_bundle(
            scenario.player_position(),
            scenario.player_health,
            AttackProfile::default(),
        ))
        .id();
    let brain = SummonerBrain::new(
        settings,
        scenario.summoner_position(),
        scenario.patrol_path(),
        scenario.seed,
    );
    let motion = MotionSettings {
        friction: scenario.summoner.friction,
        mass: scenario.summoner.mass,
    };
    let summoner = app
        .world_mut()
        .spawn(summoner_bundle(
            brain,
            scenario.summoner_position(),
            scenario.summoner.health,
            motion,
        ))
        .id();

    info!("running {} ticks of {}s", scenario.ticks, scenario.dt);
    for _ in 0..scenario.ticks {
        app.update();
    }

    let world = app.world();
    let attacks = world.resource::<AttackTally>().0;
    let player_health = world.get::<Health>(player).map_or(0, |health| health.current);
    let summoner_x = world
        .get::<Transform>(summoner)
        .map_or(f32::NAN, |transform| transform.translation.x);
    info!("attacks started: {attacks}");
    info!("player health: {player_health}/{}", scenario.player_health);
    info!("summoner position: x = {summoner_x:.2}");

    app.world_mut().trigger(DespawnSummoner { entity: summoner });
    app.update();
    Ok(())
}
