//! Engine-independent combat decisions.
//!
//! [`can_attack`] and [`attack`] answer "can this attacker hit that target"
//! and "is it time to attack again" for any host that implements
//! [`Combatant`] and [`Damageable`]. [`Fighter`] bundles a profile with its
//! cooldown timer for actors that attack on request.

mod actor;
mod decider;
mod fighter;
mod profile;

pub use actor::{Actor, Combatant, Damageable};
pub use decider::{attack, can_attack, is_in_range, AttackResult};
pub use fighter::Fighter;
pub use profile::{AttackProfile, AttackTimer, ProfileError};
