//! Observer and motion behaviour of `SummonerPlugin`.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use rstest::{fixture, rstest};
use summoner::components::{Facing, Health, MotionSettings, MovementIntent, VelocityComp};
use summoner::prelude::*;
use summoner::sim::{SimulationError, SimulationErrorContext};
use summoner::summoner::PatrolPath;
use test_utils::fixed_step_app;

#[derive(Resource, Default)]
struct CapturedErrors(Vec<SimulationErrorContext>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn capture_error(event: On<SimulationError>, mut errors: ResMut<CapturedErrors>) {
    errors.0.push(event.event().context);
}

#[fixture]
fn app() -> App {
    let mut app = fixed_step_app(0.25);
    app.init_resource::<CapturedErrors>();
    app.add_observer(capture_error);
    app
}

fn spawn_dummy(app: &mut App, x: f32) -> Entity {
    app.world_mut()
        .spawn((Transform::from_xyz(x, 0.0, 0.0), Health::new(3)))
        .id()
}

fn health(app: &App, entity: Entity) -> u32 {
    app.world()
        .get::<Health>(entity)
        .map_or(0, |health| health.current)
}

#[rstest]
fn melee_request_hits_once_per_cooldown(mut app: App) {
    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::ZERO, 3, AttackProfile::default()))
        .id();
    let dummy = spawn_dummy(&mut app, 0.5);
    let request = MeleeAttackRequested {
        attacker: player,
        target: Some(dummy),
    };

    app.world_mut().trigger(request);
    assert_eq!(health(&app, dummy), 2);

    app.world_mut().trigger(request);
    assert_eq!(health(&app, dummy), 2);

    for _ in 0..4 {
        app.update();
    }
    app.world_mut().trigger(request);
    assert_eq!(health(&app, dummy), 1);
}

#[rstest]
fn melee_request_without_fighter_reports_an_error(mut app: App) {
    let dummy = spawn_dummy(&mut app, 0.5);
    app.world_mut().trigger(MeleeAttackRequested {
        attacker: dummy,
        target: None,
    });
    app.update();
    let errors = &app.world().resource::<CapturedErrors>().0;
    assert_eq!(errors, &vec![SimulationErrorContext::Melee]);
}

#[rstest]
fn despawning_a_non_summoner_reports_an_error(mut app: App) {
    let dummy = spawn_dummy(&mut app, 0.0);
    app.world_mut().trigger(DespawnSummoner { entity: dummy });
    app.update();
    assert!(app.world().get_entity(dummy).is_ok());
    let errors = &app.world().resource::<CapturedErrors>().0;
    assert_eq!(errors, &vec![SimulationErrorContext::Teardown]);
}

#[rstest]
fn patrolling_summoner_walks_and_faces_its_waypoint(mut app: App) {
    let brain = SummonerBrain::new(
        SummonerSettings::default(),
        Vec2::new(3.0, 0.0),
        PatrolPath::new(vec![Vec2::ZERO]),
        1,
    );
    let bundle = summoner_bundle(brain, Vec2::new(3.0, 0.0), 3, MotionSettings::default());
    let summoner = app.world_mut().spawn(bundle).id();
    app.update();

    let world = app.world();
    let velocity = world.get::<VelocityComp>(summoner).expect("velocity");
    let facing = world.get::<Facing>(summoner).expect("facing");
    let transform = world.get::<Transform>(summoner).expect("transform");
    assert!((velocity.vx + 5.6).abs() < 1e-5);
    assert!(facing.flip_x);
    assert!(transform.translation.x < 3.0);
}

#[rstest]
fn slow_drift_keeps_previous_facing(mut app: App) {
    let entity = app
        .world_mut()
        .spawn((
            Transform::default(),
            MovementIntent::default(),
            VelocityComp { vx: 0.05, vy: 0.0 },
            MotionSettings::default(),
            Facing { flip_x: true },
        ))
        .id();
    app.update();
    let facing = app.world().get::<Facing>(entity).expect("facing");
    assert!(facing.flip_x);
}
