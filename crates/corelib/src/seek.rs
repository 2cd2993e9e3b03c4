//! Damped target-seeking motion for scene objects.
//! One step per frame: proportional acceleration toward the target,
//! multiplicative velocity decay, snap when close enough.

use crate::Vec3;

/// Distance below which position is forced exactly onto the target.
pub const SNAP_DISTANCE: f32 = 0.001;

/// Proportional gain applied to the target offset each step.
const ACCEL_GAIN: f32 = 0.5;

/// Spring-like follower. Owns its velocity and damping; the position it
/// drives belongs to the caller and is mutated in place.
///
/// All operations are total over real-valued state. Non-finite targets are
/// the caller's problem and propagate through the math unchecked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seek {
    target: Vec3,
    velocity: Vec3,
    damping: Vec3,
}

impl Seek {
    /// New follower at rest, targeting the origin.
    /// Damping is one decay factor per axis; useful values sit in (0, 1).
    pub fn new(damping: Vec3) -> Self {
        Self {
            target: Vec3::ZERO,
            velocity: Vec3::ZERO,
            damping,
        }
    }

    /// Replace the target immediately. No interpolation of the target
    /// itself; the next `step` accelerates toward the new value.
    #[inline]
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advance `position` by one frame.
    ///
    /// Exactly on target (all three axes) the step is a no-op: velocity is
    /// not decayed either, it keeps its last value until a retarget
    /// displaces the object again. Within [`SNAP_DISTANCE`] of the target
    /// after integration, position snaps exactly onto the target to kill
    /// residual float drift; velocity is deliberately left as computed.
    pub fn step(&mut self, position: &mut Vec3) {
        if *position == self.target {
            return;
        }

        let accel = (self.target - *position) * ACCEL_GAIN;
        self.velocity = (self.velocity + accel) * self.damping;
        *position += self.velocity;

        if position.distance(self.target) < SNAP_DISTANCE {
            *position = self.target;
        }
    }
}

impl Default for Seek {
    /// The demo configuration: damping 0.5 on every axis.
    fn default() -> Self {
        Self::new(Vec3::splat(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn worked_two_step_scenario() {
        // (0,0,0) -> (10,0,0), damping 0.5. All values are exact in f32.
        let mut seek = Seek::default();
        seek.set_target(vec3(10.0, 0.0, 0.0));
        let mut pos = Vec3::ZERO;

        seek.step(&mut pos);
        assert_eq!(seek.velocity(), vec3(2.5, 0.0, 0.0));
        assert_eq!(pos, vec3(2.5, 0.0, 0.0));

        seek.step(&mut pos);
        assert_eq!(seek.velocity(), vec3(3.125, 0.0, 0.0));
        assert_eq!(pos, vec3(5.625, 0.0, 0.0));
    }

    #[test]
    fn rest_state_is_idempotent() {
        let mut seek = Seek::default();
        seek.set_target(vec3(3.0, -7.0, 1.5));
        let mut pos = vec3(3.0, -7.0, 1.5);
        for _ in 0..10 {
            seek.step(&mut pos);
            assert_eq!(pos, vec3(3.0, -7.0, 1.5));
        }
    }

    #[test]
    fn converges_and_snaps_exactly() {
        let mut seek = Seek::default();
        let target = vec3(10.0, -4.0, 2.0);
        seek.set_target(target);
        let mut pos = Vec3::ZERO;

        let mut reached = false;
        for _ in 0..200 {
            seek.step(&mut pos);
            if pos == target {
                reached = true;
                break;
            }
        }
        // Bitwise equality on all axes, not approximate closeness.
        assert!(reached, "did not reach target, stuck at {pos:?}");
        assert_eq!(pos, target);
    }

    #[test]
    fn snap_keeps_residual_velocity() {
        // Start a hair away from the target: one step lands inside the snap
        // radius, position becomes the target exactly, velocity survives.
        let mut seek = Seek::default();
        seek.set_target(vec3(0.00048828125, 0.0, 0.0)); // 2^-11
        let mut pos = Vec3::ZERO;

        seek.step(&mut pos);
        assert_eq!(pos, seek.target());
        assert_ne!(seek.velocity(), Vec3::ZERO);

        // Now exactly on target: further steps change nothing, including
        // the leftover velocity.
        let vel = seek.velocity();
        seek.step(&mut pos);
        assert_eq!(pos, seek.target());
        assert_eq!(seek.velocity(), vel);
    }

    #[test]
    fn retarget_redirects_next_step() {
        let mut seek = Seek::default();
        seek.set_target(vec3(10.0, 0.0, 0.0));
        let mut pos = Vec3::ZERO;
        seek.step(&mut pos);
        assert_eq!(pos.x, 2.5);

        // Mid-flight retarget behind the object: the very next step is
        // computed from the new target. accel = (-10 - 2.5) * 0.5 = -6.25,
        // vel = (2.5 - 6.25) * 0.5 = -1.875, pos = 0.625.
        seek.set_target(vec3(-10.0, 0.0, 0.0));
        seek.step(&mut pos);
        assert_eq!(seek.velocity().x, -1.875);
        assert_eq!(pos.x, 0.625);
    }

    #[test]
    fn z_axis_uses_its_own_damping() {
        let mut seek = Seek::new(vec3(0.9, 0.8, 0.25));
        seek.set_target(vec3(0.0, 0.0, 8.0));
        let mut pos = Vec3::ZERO;
        seek.step(&mut pos);
        // accel.z = 4.0; with damping.z = 0.25 the step is exactly 1.0.
        // The y factor (0.8) would have produced 3.2.
        assert_eq!(pos.z, 1.0);
    }

    #[test]
    fn deterministic_across_runs() {
        let run = || {
            let mut seek = Seek::new(vec3(0.5, 0.6, 0.7));
            let mut pos = vec3(1.0, 2.0, 3.0);
            let mut trace = Vec::new();
            seek.set_target(vec3(-5.0, 4.0, 0.25));
            for i in 0..50 {
                if i == 20 {
                    seek.set_target(vec3(9.0, -9.0, 9.0));
                }
                seek.step(&mut pos);
                trace.push((pos, seek.velocity()));
            }
            trace
        };
        assert_eq!(run(), run());
    }
}
