//! The seam through which sequences create and manipulate visual effects.
use glam::{Vec2, Vec3};

/// What kind of effect to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind<T> {
    /// The rune marking where the attack lands.
    Rune {
        /// Which rune sprite to use.
        variant: usize,
    },
    /// The laser that damages its bound target while armed.
    Laser {
        /// Damage fixed at spawn time.
        damage: u32,
        /// Target fixed at spawn time.
        target: T,
    },
}

/// Request to spawn one effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpawn<T> {
    /// Effect kind and payload.
    pub kind: EffectKind<T>,
    /// Spawn position on the play plane.
    pub position: Vec2,
    /// Initial scale.
    pub scale: Vec3,
}

/// Host services for effect lifecycle and presentation.
///
/// `T` is the identity type of the actors effects can be bound to.
#[cfg_attr(test, mockall::automock(type Handle = u32;))]
pub trait EffectHost<T> {
    /// Opaque handle to a spawned effect.
    type Handle: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Spawns an effect and returns its handle.
    fn spawn_effect(&mut self, spawn: EffectSpawn<T>) -> Self::Handle;

    /// Destroys an effect. Called at most once per handle by the ledger.
    fn destroy_effect(&mut self, handle: Self::Handle);

    /// Returns `false` once the host has removed the effect on its own.
    fn effect_exists(&self, handle: Self::Handle) -> bool;

    /// Updates an effect's scale.
    fn set_effect_scale(&mut self, handle: Self::Handle, scale: Vec3);
}
