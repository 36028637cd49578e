//! JSON configuration for summoners and headless scenarios.
//!
//! Every field has a default, so an empty object is a valid file. Unknown
//! fields are rejected to catch typos in hand-written scenarios.
use std::fs;
use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::{AttackProfile, ProfileError};
use crate::constants::{
    DEFAULT_ATTACK_COOLDOWN, DEFAULT_ATTACK_RANGE, DEFAULT_DAMAGE, DEFAULT_FRICTION,
    DEFAULT_HEALTH, DEFAULT_MASS, DEFAULT_RUNE_BASE_SCALE, DEFAULT_RUNE_SCALE_TIME,
    DEFAULT_RUNE_VARIANTS, DEFAULT_SPEED, DEFAULT_TICK_SECONDS, DEFAULT_WAYPOINT_DWELL_TIME,
    DEFAULT_WAYPOINT_TOLERANCE,
};
use crate::easing::{Curve, CurveError};
use crate::sequence::AttackSequenceSettings;
use crate::summoner::{PatrolPath, PatrolSettings, SummonerSettings};

/// Reasons a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid JSON for the expected shape.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Damage, range or cooldown are invalid.
    #[error(transparent)]
    Profile(#[from] ProfileError),
    /// The rune curve is malformed.
    #[error("rune curve: {0}")]
    Curve(#[from] CurveError),
    /// A value that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// A value that must be non-negative is not.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// At least one rune sprite is required.
    #[error("rune_variants must be at least 1")]
    NoRuneVariants,
}

/// Tunables of one summoner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummonerConfig {
    /// Seconds to wait at each waypoint.
    pub waypoint_dwell_time: f32,
    /// Distance under which a waypoint counts as reached.
    pub waypoint_tolerance: f32,
    /// Walking speed.
    pub speed: f32,
    /// Horizontal friction coefficient.
    pub friction: f32,
    /// Body mass used when applying movement impulses.
    pub mass: f32,
    /// Rune attack damage.
    pub damage: u32,
    /// Rune attack range.
    pub attack_range: f32,
    /// Seconds between rune attacks.
    pub attack_cooldown: f32,
    /// Duration of the rune telegraph and resolve steps.
    pub rune_scale_time: f32,
    /// Curve shaping both rune scaling steps.
    pub rune_curve: Curve,
    /// Number of rune sprites to choose from.
    pub rune_variants: usize,
    /// Uniform scale runes spawn with.
    pub rune_base_scale: f32,
    /// Starting health.
    pub health: u32,
}

impl Default for SummonerConfig {
    fn default() -> Self {
        Self {
            waypoint_dwell_time: DEFAULT_WAYPOINT_DWELL_TIME,
            waypoint_tolerance: DEFAULT_WAYPOINT_TOLERANCE,
            speed: DEFAULT_SPEED,
            friction: DEFAULT_FRICTION,
            mass: DEFAULT_MASS,
            damage: DEFAULT_DAMAGE,
            attack_range: DEFAULT_ATTACK_RANGE,
            attack_cooldown: DEFAULT_ATTACK_COOLDOWN,
            rune_scale_time: DEFAULT_RUNE_SCALE_TIME,
            rune_curve: Curve::default(),
            rune_variants: DEFAULT_RUNE_VARIANTS,
            rune_base_scale: DEFAULT_RUNE_BASE_SCALE,
            health: DEFAULT_HEALTH,
        }
    }
}

impl SummonerConfig {
    /// Checks every value and builds the typed settings in one pass.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<SummonerSettings, ConfigError> {
        positive("waypoint_tolerance", self.waypoint_tolerance)?;
        positive("mass", self.mass)?;
        positive("rune_base_scale", self.rune_base_scale)?;
        non_negative("waypoint_dwell_time", self.waypoint_dwell_time)?;
        non_negative("speed", self.speed)?;
        non_negative("friction", self.friction)?;
        non_negative("rune_scale_time", self.rune_scale_time)?;
        if self.rune_variants == 0 {
            return Err(ConfigError::NoRuneVariants);
        }
        self.rune_curve.validate()?;
        Ok(SummonerSettings {
            patrol: self.patrol_settings(),
            profile: self.attack_profile()?,
            sequence: self.sequence_settings(),
            rune_variants: self.rune_variants,
        })
    }

    /// The rune attack's profile.
    ///
    /// # Errors
    /// Returns [`ConfigError::Profile`] for an invalid range or cooldown.
    pub fn attack_profile(&self) -> Result<AttackProfile, ConfigError> {
        Ok(AttackProfile::new(self.damage, self.attack_range, self.attack_cooldown)?)
    }

    /// Patrol tunables.
    #[must_use]
    pub const fn patrol_settings(&self) -> PatrolSettings {
        PatrolSettings {
            dwell_time: self.waypoint_dwell_time,
            tolerance: self.waypoint_tolerance,
            speed: self.speed,
        }
    }

    /// Attack sequence tunables.
    #[must_use]
    pub fn sequence_settings(&self) -> AttackSequenceSettings {
        AttackSequenceSettings {
            rune_scale_time: self.rune_scale_time,
            curve: self.rune_curve.clone(),
            rune_base_scale: self.rune_base_scale,
            laser_base_scale: Vec3::ONE,
        }
    }
}

/// A headless run: one summoner, one player, a fixed number of ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// The summoner's tunables.
    pub summoner: SummonerConfig,
    /// Where the summoner spawns; also its guard position.
    pub summoner_position: [f32; 2],
    /// Waypoints to patrol. Empty means hold the guard position.
    pub patrol_path: Vec<[f32; 2]>,
    /// Where the player stands.
    pub player_position: [f32; 2],
    /// The player's starting health.
    pub player_health: u32,
    /// Number of simulation ticks to run.
    pub ticks: u32,
    /// Seconds per tick.
    pub dt: f32,
    /// Seed for rune variant choice.
    pub seed: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            summoner: SummonerConfig::default(),
            summoner_position: [0.0, 0.0],
            patrol_path: vec![[0.0, 0.0], [5.0, 0.0]],
            player_position: [4.0, 0.0],
            player_health: DEFAULT_HEALTH,
            ticks: 600,
            dt: DEFAULT_TICK_SECONDS,
            seed: 0,
        }
    }
}

impl Scenario {
    /// Parses and validates a scenario from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed input and any validation
    /// error from [`Self::validate`].
    ///
    /// # Examples
    /// ```
    /// use summoner::config::Scenario;
    /// let scenario = Scenario::from_json(r#"{"ticks": 10}"#).expect("valid scenario");
    /// assert_eq!(scenario.ticks, 10);
    /// assert!(Scenario::from_json(r#"{"tick": 10}"#).is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let scenario: Self = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Validates the scenario and returns the summoner's typed settings.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the summoner config or `dt` is invalid.
    pub fn validate(&self) -> Result<SummonerSettings, ConfigError> {
        positive("dt", self.dt)?;
        self.summoner.validate()
    }

    /// The summoner's spawn position.
    #[must_use]
    pub const fn summoner_position(&self) -> Vec2 {
        Vec2::from_array(self.summoner_position)
    }

    /// The player's position.
    #[must_use]
    pub const fn player_position(&self) -> Vec2 {
        Vec2::from_array(self.player_position)
    }

    /// The patrol path, or `None` when no waypoints are configured.
    #[must_use]
    pub fn patrol_path(&self) -> Option<PatrolPath> {
        PatrolPath::new(self.patrol_path.iter().copied().map(Vec2::from_array).collect())
    }
}

/// Reads and validates a scenario file.
///
/// # Errors
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// errors of [`Scenario::from_json`].
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Scenario::from_json(&text)
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_object_yields_defaults() {
        let scenario = Scenario::from_json("{}").expect("defaults are valid");
        assert_eq!(scenario, Scenario::default());
        let settings = scenario.validate().expect("defaults are valid");
        assert_eq!(settings.rune_variants, DEFAULT_RUNE_VARIANTS);
        assert_eq!(settings.profile.damage(), DEFAULT_DAMAGE);
    }

    #[rstest]
    #[case(r#"{"waypoint_tolerance": 0.0}"#, "waypoint_tolerance")]
    #[case(r#"{"mass": -1.0}"#, "mass")]
    fn non_positive_fields_are_named(#[case] json: &str, #[case] expected: &str) {
        let config: SummonerConfig = serde_json::from_str(json).expect("json parses");
        match config.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected NonPositive, got {other:?}"),
        }
    }

    #[rstest]
    fn negative_durations_are_rejected() {
        let config = SummonerConfig {
            rune_scale_time: -0.5,
            ..SummonerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "rune_scale_time",
                ..
            })
        ));
    }

    #[rstest]
    fn zero_rune_variants_are_rejected() {
        let config = SummonerConfig {
            rune_variants: 0,
            ..SummonerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoRuneVariants)));
    }

    #[rstest]
    fn invalid_range_surfaces_profile_error() {
        let config = SummonerConfig {
            attack_range: 0.0,
            ..SummonerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Profile(ProfileError::Range(_)))
        ));
    }

    #[rstest]
    fn empty_keyframe_curve_is_rejected() {
        let json = r#"{"summoner": {"rune_curve": {"kind": "keyframes", "points": []}}}"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(ConfigError::Curve(CurveError::Empty))
        ));
    }

    #[rstest]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Scenario::from_json(r#"{"summoner": {"sped": 3.0}}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[rstest]
    fn empty_patrol_path_means_no_path() {
        let scenario = Scenario::from_json(r#"{"patrol_path": []}"#).expect("valid scenario");
        assert!(scenario.patrol_path().is_none());
    }

    #[rstest]
    fn missing_file_reports_path() {
        let path = Path::new("definitely/not/here.json");
        let err = load_scenario(path).expect_err("missing file must fail");
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
