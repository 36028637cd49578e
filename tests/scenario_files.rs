//! The scenario files shipped in `scenarios/` load and validate.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use rstest::rstest;
use summoner::config::load_scenario;
use summoner::easing::Curve;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[rstest]
fn guard_post_scenario_has_no_path() -> Result<()> {
    let scenario = load_scenario(&scenario_path("guard_post.json"))?;
    ensure!(scenario.patrol_path().is_none(), "expected no patrol path");
    ensure!(scenario.seed == 7, "seed should be read from file");
    scenario.validate()?;
    Ok(())
}

#[rstest]
fn patrol_scenario_uses_a_keyframe_curve() -> Result<()> {
    let scenario = load_scenario(&scenario_path("patrol.json"))?;
    let settings = scenario.validate()?;
    ensure!(
        matches!(settings.sequence.curve, Curve::Keyframes { .. }),
        "expected keyframe curve"
    );
    ensure!(
        scenario.patrol_path().map(|path| path.len()) == Some(2),
        "expected two waypoints"
    );
    Ok(())
}
