//! Mutex-guarded Bevy `App` shareable by `rspec` environments.

use bevy::prelude::{App, Component, Entity};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Wrapper that forwards `Send` and `Sync` because access is mutex-guarded.
pub struct ThreadSafeApp(pub App);

// SAFETY: rspec environments must be `Send + Sync`, the suites run serially,
// and every access to the wrapped `App` goes through the mutex below.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared handle to a wrapped app.
#[derive(Clone)]
pub struct SharedApp(Arc<Mutex<ThreadSafeApp>>);

impl std::fmt::Debug for SharedApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedApp")
    }
}

impl SharedApp {
    /// Wraps `app`.
    pub fn new(app: App) -> Self {
        Self(Arc::new(Mutex::new(ThreadSafeApp(app))))
    }

    /// Locks the app, recovering from a poisoned mutex.
    pub fn lock(&self) -> MutexGuard<'_, ThreadSafeApp> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `frames` updates.
    pub fn update(&self, frames: usize) {
        let mut guard = self.lock();
        for _ in 0..frames {
            guard.0.update();
        }
    }

    /// Number of entities carrying `C`.
    pub fn count<C: Component>(&self) -> usize {
        let mut guard = self.lock();
        let world = guard.0.world_mut();
        let mut query = world.query::<&C>();
        query.iter(world).count()
    }

    /// A copy of `entity`'s `C`, if present.
    pub fn get<C: Component + Clone>(&self, entity: Entity) -> Option<C> {
        self.lock().0.world().get::<C>(entity).cloned()
    }
}
