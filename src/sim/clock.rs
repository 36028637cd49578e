//! Per-frame time step shared by every simulation system.
use bevy::prelude::*;

use crate::constants::DEFAULT_TICK_SECONDS;

/// Where the simulation takes its time step from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// The same step every frame; used headless and in tests.
    Fixed(f32),
    /// Bevy's frame delta from [`Time`], or zero when no clock is installed.
    Frame,
}

/// Seconds the current frame advances the simulation by.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    mode: ClockMode,
    delta: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::fixed(DEFAULT_TICK_SECONDS)
    }
}

impl SimulationClock {
    /// A clock stepping `seconds` every frame.
    #[must_use]
    pub const fn fixed(seconds: f32) -> Self {
        Self {
            mode: ClockMode::Fixed(seconds),
            delta: seconds,
        }
    }

    /// A clock following Bevy's frame time.
    #[must_use]
    pub const fn frame() -> Self {
        Self {
            mode: ClockMode::Frame,
            delta: 0.0,
        }
    }

    /// The configured mode.
    #[must_use]
    pub const fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Seconds to advance this frame.
    #[must_use]
    pub const fn delta(&self) -> f32 {
        self.delta
    }
}

/// Refreshes [`SimulationClock::delta`] at the start of the frame.
pub fn sync_clock(mut clock: ResMut<SimulationClock>, time: Option<Res<Time>>) {
    clock.delta = match clock.mode {
        ClockMode::Fixed(seconds) => seconds,
        ClockMode::Frame => time.map_or(0.0, |frame_time| frame_time.delta_secs()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn clock_app(clock: SimulationClock) -> App {
        let mut app = App::new();
        app.insert_resource(clock);
        app.add_systems(Update, sync_clock);
        app
    }

    #[rstest]
    fn frame_clock_follows_time_delta() {
        let mut app = clock_app(SimulationClock::frame());
        app.init_resource::<Time>();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(250));
        app.update();
        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.mode(), ClockMode::Frame);
        assert!((clock.delta() - 0.25).abs() < f32::EPSILON);
    }

    #[rstest]
    fn frame_clock_without_time_stands_still() {
        let mut app = clock_app(SimulationClock::frame());
        app.update();
        let clock = app.world().resource::<SimulationClock>();
        assert!(clock.delta().abs() < f32::EPSILON);
    }

    #[rstest]
    fn fixed_clock_ignores_time() {
        let mut app = clock_app(SimulationClock::fixed(0.5));
        app.init_resource::<Time>();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(100));
        app.update();
        let clock = app.world().resource::<SimulationClock>();
        assert!((clock.delta() - 0.5).abs() < f32::EPSILON);
    }
}
