//! Timed sequences and the effects they own.
//!
//! [`TimedSequence`] replaces frame-yielding coroutines with an explicit
//! step cursor advanced by elapsed time. [`AttackSequence`] specialises it
//! into the summoner's telegraph, discharge, and resolve steps, spawning and
//! scaling effects through an [`EffectHost`] and tracking every spawned
//! handle in an [`EffectLedger`] until it is released.

mod attack;
mod host;
mod ledger;
mod timeline;

pub use attack::{AttackPhase, AttackSequence, AttackSequenceSettings};
pub use host::{EffectHost, EffectKind, EffectSpawn};
#[cfg(test)]
pub(crate) use host::MockEffectHost;
pub use ledger::EffectLedger;
pub use timeline::{Step, StepEvent, TimedSequence};
