//! Utility helpers for tests.
//!
//! [`RecordingHost`] is an in-memory [`EffectHost`] that records every call
//! so tests can assert on spawns, scale writes and destroys. [`fixed_step_app`]
//! builds a Bevy app with the summoner plugin and a fixed clock.

use bevy::prelude::App;
use glam::Vec3;
use hashbrown::HashMap;
use summoner::sequence::{EffectHost, EffectKind, EffectSpawn};
use summoner::{SimulationClock, SummonerPlugin};

/// An effect currently alive in a [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveEffect<T> {
    /// What was spawned.
    pub spawn: EffectSpawn<T>,
    /// Latest scale written.
    pub scale: Vec3,
}

/// In-memory effect host with handles counting up from 1.
#[derive(Debug, Clone)]
pub struct RecordingHost<T> {
    next: u32,
    live: HashMap<u32, LiveEffect<T>>,
    /// Every spawn request, in order.
    pub spawned: Vec<(u32, EffectSpawn<T>)>,
    /// Every destroy call, in order.
    pub destroyed: Vec<u32>,
    /// Every scale write, in order.
    pub scale_writes: Vec<(u32, Vec3)>,
}

impl<T> Default for RecordingHost<T> {
    fn default() -> Self {
        Self {
            next: 0,
            live: HashMap::new(),
            spawned: Vec::new(),
            destroyed: Vec::new(),
            scale_writes: Vec::new(),
        }
    }
}

impl<T: Copy> RecordingHost<T> {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes an effect without going through [`EffectHost::destroy_effect`],
    /// as a scene unload or collision would.
    pub fn remove_externally(&mut self, handle: u32) {
        self.live.remove(&handle);
    }

    /// Number of effects still alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// The live effect behind `handle`.
    #[must_use]
    pub fn live(&self, handle: u32) -> Option<&LiveEffect<T>> {
        self.live.get(&handle)
    }

    /// How many times `handle` was destroyed.
    #[must_use]
    pub fn destroy_count(&self, handle: u32) -> usize {
        self.destroyed.iter().filter(|&&h| h == handle).count()
    }

    /// Handles of every rune spawned so far.
    #[must_use]
    pub fn runes(&self) -> Vec<u32> {
        self.spawned
            .iter()
            .filter(|(_, spawn)| matches!(spawn.kind, EffectKind::Rune { .. }))
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Handles of every laser spawned so far.
    #[must_use]
    pub fn lasers(&self) -> Vec<u32> {
        self.spawned
            .iter()
            .filter(|(_, spawn)| matches!(spawn.kind, EffectKind::Laser { .. }))
            .map(|(handle, _)| *handle)
            .collect()
    }
}

impl<T: Copy> EffectHost<T> for RecordingHost<T> {
    type Handle = u32;

    fn spawn_effect(&mut self, spawn: EffectSpawn<T>) -> u32 {
        self.next += 1;
        let handle = self.next;
        self.live.insert(
            handle,
            LiveEffect {
                spawn,
                scale: spawn.scale,
            },
        );
        self.spawned.push((handle, spawn));
        handle
    }

    fn destroy_effect(&mut self, handle: u32) {
        self.live.remove(&handle);
        self.destroyed.push(handle);
    }

    fn effect_exists(&self, handle: u32) -> bool {
        self.live.contains_key(&handle)
    }

    fn set_effect_scale(&mut self, handle: u32, scale: Vec3) {
        if let Some(effect) = self.live.get_mut(&handle) {
            effect.scale = scale;
        }
        self.scale_writes.push((handle, scale));
    }
}

/// A Bevy app with [`SummonerPlugin`] stepping `dt` seconds per update.
///
/// # Examples
/// ```
/// use test_utils::fixed_step_app;
/// let mut app = fixed_step_app(0.1);
/// app.update();
/// ```
#[must_use]
pub fn fixed_step_app(dt: f32) -> App {
    let mut app = App::new();
    app.insert_resource(SimulationClock::fixed(dt));
    app.add_plugins(SummonerPlugin);
    app
}
