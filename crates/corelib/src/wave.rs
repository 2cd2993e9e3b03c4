//! Sine bob used by the cube/sphere demos.

use crate::transform::Transform;

/// Oscillates a transform on Y: translation follows `A * sin(t)`, rotation
/// follows `sin(t + lead)`. Stateless; `t` is elapsed seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    /// Phase lead of the rotation term relative to the translation term.
    pub rotation_lead: f32,
}

impl Wave {
    pub fn apply(&self, t: f32, transform: &mut Transform) {
        transform.translation.y = self.amplitude * t.sin();
        transform.rotation_euler.y = (t + self.rotation_lead).sin();
    }
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            rotation_lead: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_sits_at_origin_height() {
        let wave = Wave::default();
        let mut t = Transform::identity();
        wave.apply(0.0, &mut t);
        assert_eq!(t.translation.y, 0.0);
        assert_eq!(t.rotation_euler.y, 1f32.sin());
    }

    #[test]
    fn amplitude_scales_translation_only() {
        let wave = Wave {
            amplitude: 3.0,
            rotation_lead: 0.0,
        };
        let mut t = Transform::identity();
        let at = std::f32::consts::FRAC_PI_2;
        wave.apply(at, &mut t);
        assert!((t.translation.y - 3.0).abs() < 1e-6);
        assert!((t.rotation_euler.y - 1.0).abs() < 1e-6);
    }
}
