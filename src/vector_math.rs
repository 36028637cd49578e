//! Planar vector helpers.
//! Distances and horizontal steering used by the combat and patrol logic.
use glam::Vec2;

use crate::constants::PATROL_SPEED_FACTOR;

/// Returns the Euclidean distance between two points on the play plane.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use summoner::vector_math::planar_distance;
/// let distance = planar_distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
/// assert!((distance - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn planar_distance(from: Vec2, to: Vec2) -> f32 {
    from.distance(to)
}

/// Computes a horizontal movement intent towards `target_x`.
///
/// The offset is clamped to `[-1, 1]` before scaling, so the actor walks at
/// full patrol speed until it is within one unit of the target and slows
/// down proportionally inside that band. The vertical component is always
/// zero: patrols are constrained to the ground line.
///
/// Non-finite offsets produce no movement.
///
/// # Examples
/// ```
/// use summoner::vector_math::horizontal_intent;
/// let intent = horizontal_intent(0.0, 5.0, 10.0);
/// assert!((intent.x - 8.0).abs() < 1e-6);
/// assert_eq!(intent.y, 0.0);
/// ```
#[must_use]
pub fn horizontal_intent(from_x: f32, target_x: f32, speed: f32) -> Vec2 {
    let offset = target_x - from_x;
    if !offset.is_finite() {
        return Vec2::ZERO;
    }
    Vec2::new(offset.clamp(-1.0, 1.0) * speed * PATROL_SPEED_FACTOR, 0.0)
}
