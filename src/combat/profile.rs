//! Attack configuration and the cooldown timer it is checked against.
use thiserror::Error;

use crate::constants::{DEFAULT_ATTACK_COOLDOWN, DEFAULT_ATTACK_RANGE, DEFAULT_DAMAGE};

/// Reasons an [`AttackProfile`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    /// Range must be finite and strictly positive.
    #[error("attack range must be positive, got {0}")]
    Range(f32),
    /// Cooldown must be finite and non-negative.
    #[error("attack cooldown must be non-negative, got {0}")]
    Cooldown(f32),
}

/// Immutable description of one kind of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    damage: u32,
    range: f32,
    cooldown: f32,
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self {
            damage: DEFAULT_DAMAGE,
            range: DEFAULT_ATTACK_RANGE,
            cooldown: DEFAULT_ATTACK_COOLDOWN,
        }
    }
}

impl AttackProfile {
    /// Builds a validated profile.
    ///
    /// # Errors
    /// Returns [`ProfileError::Range`] when `range` is not strictly positive
    /// and [`ProfileError::Cooldown`] when `cooldown` is negative. Non-finite
    /// values are rejected as well.
    ///
    /// # Examples
    /// ```
    /// use summoner::combat::AttackProfile;
    /// let profile = AttackProfile::new(1, 1.0, 1.0).expect("valid profile");
    /// assert_eq!(profile.damage(), 1);
    /// assert!(AttackProfile::new(1, 0.0, 1.0).is_err());
    /// ```
    pub fn new(damage: u32, range: f32, cooldown: f32) -> Result<Self, ProfileError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(ProfileError::Range(range));
        }
        if !cooldown.is_finite() || cooldown < 0.0 {
            return Err(ProfileError::Cooldown(cooldown));
        }
        Ok(Self {
            damage,
            range,
            cooldown,
        })
    }

    /// Damage applied by one hit.
    #[must_use]
    pub const fn damage(&self) -> u32 {
        self.damage
    }

    /// Exclusive reach of the attack.
    #[must_use]
    pub const fn range(&self) -> f32 {
        self.range
    }

    /// Minimum seconds between two attacks.
    #[must_use]
    pub const fn cooldown(&self) -> f32 {
        self.cooldown
    }
}

/// Seconds elapsed since the owner last attacked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttackTimer {
    elapsed: f32,
}

impl AttackTimer {
    /// Timer that starts at zero, so the first attack waits a full cooldown.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Timer that has never fired; any cooldown is already satisfied.
    #[must_use]
    pub const fn ready() -> Self {
        Self {
            elapsed: f32::INFINITY,
        }
    }

    /// Timer with an explicit elapsed value.
    #[must_use]
    pub const fn with_elapsed(elapsed: f32) -> Self {
        Self { elapsed }
    }

    /// Seconds since the last attack.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advances the timer by `dt` seconds. Negative steps are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Restarts the timer after an attack.
    pub const fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Returns `true` when at least `profile.cooldown()` seconds have passed.
    #[must_use]
    pub fn is_ready(&self, profile: &AttackProfile) -> bool {
        self.elapsed >= profile.cooldown()
    }
}
