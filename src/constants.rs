//! Gameplay tuning constants shared across the summoner and fighter logic.
//!
//! Defaults mirror the values the game ships with; scenario files can
//! override most of them through [`SummonerConfig`](crate::config::SummonerConfig).

/// Seconds an actor waits at a waypoint before walking on.
pub const DEFAULT_WAYPOINT_DWELL_TIME: f32 = 1.0;
/// Distance under which a waypoint counts as reached.
pub const DEFAULT_WAYPOINT_TOLERANCE: f32 = 0.6;
/// Base walking speed of the summoner.
pub const DEFAULT_SPEED: f32 = 7.0;
/// Horizontal friction coefficient applied against the summoner's velocity.
pub const DEFAULT_FRICTION: f32 = 2.0;
/// Fraction of the walking speed used while patrolling.
pub const PATROL_SPEED_FACTOR: f32 = 0.8;

/// Damage dealt by a single hit.
pub const DEFAULT_DAMAGE: u32 = 1;
/// Reach of an attack; targets exactly this far away are out of range.
pub const DEFAULT_ATTACK_RANGE: f32 = 1.0;
/// Minimum seconds between two attacks.
pub const DEFAULT_ATTACK_COOLDOWN: f32 = 1.0;
/// Health given to actors spawned without an explicit value.
pub const DEFAULT_HEALTH: u32 = 3;

/// Duration of the rune scale-up and scale-down steps.
pub const DEFAULT_RUNE_SCALE_TIME: f32 = 2.0;
/// Number of rune sprites the summoner picks from.
pub const DEFAULT_RUNE_VARIANTS: usize = 3;
/// Uniform scale a rune is spawned with.
pub const DEFAULT_RUNE_BASE_SCALE: f32 = 1.0;
/// Multiplier applied to the rune's base scale at the end of the telegraph.
pub const RUNE_PEAK_FACTOR: f32 = 1.2;
/// Seconds the laser stays armed between the telegraph and the resolve.
pub const DISCHARGE_HOLD_TIME: f32 = 1.0;
/// Scale the laser collapses to while the rune fades out.
pub const LASER_COLLAPSED_SCALE: [f32; 3] = [0.0, 1.0, 1.0];

/// Mass used when integrating movement impulses.
pub const DEFAULT_MASS: f32 = 1.0;
/// Horizontal speed under which an actor keeps its current facing.
pub const FACING_DEADZONE: f32 = 0.1;
/// Step length used by the headless runner when none is configured.
pub const DEFAULT_TICK_SECONDS: f32 = 1.0 / 60.0;
