#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the summoner combat logic.
//! Re-exports the engine-independent core and the Bevy plugin hosting it.
pub mod combat;
pub mod components;
pub mod config;
pub mod constants;
pub mod easing;
pub mod logging;
pub mod sequence;
pub mod sim;
pub mod summoner;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use combat::{attack, can_attack, Actor, AttackProfile, AttackResult, AttackTimer, Fighter};
pub use config::{load_scenario, ConfigError, Scenario, SummonerConfig};
pub use easing::Curve;
pub use logging::init as init_logging;
pub use sequence::{AttackSequence, EffectHost, EffectLedger, TimedSequence};
pub use sim::{SimulationClock, SummonerPlugin};
pub use summoner::{PatrolPath, SummonerBrain, SummonerIntent, SummonerState};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use summoner::prelude::*;
    //! ```

    pub use crate::combat::{Combatant, Damageable};
    pub use crate::components::{Health, Player, Summoner};
    pub use crate::sim::{
        player_bundle, summoner_bundle, DespawnSummoner, MeleeAttackRequested,
        SummonerAttackStarted,
    };
    pub use crate::summoner::SummonerSettings;
    pub use crate::{AttackProfile, SimulationClock, SummonerBrain, SummonerPlugin};
}
