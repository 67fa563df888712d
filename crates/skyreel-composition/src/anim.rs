//! Frame-indexed animation math.
//!
//! Two primitives drive every animation in the composition: clamped
//! piecewise-linear interpolation and a damped spring. Both are pure
//! functions of their inputs, which keeps scene evaluation deterministic
//! and order-independent.

/// Piecewise-linear interpolation with clamping on both ends.
///
/// Maps `input` from `input_range` to `output_range`, where both ranges have
/// the same length (at least 2) and `input_range` is monotonically
/// increasing. Inputs outside the range clamp to the boundary output values.
///
/// # Panics
/// Panics if the ranges differ in length or have fewer than two stops.
pub fn interpolate(input: f64, input_range: &[f64], output_range: &[f64]) -> f64 {
    assert_eq!(
        input_range.len(),
        output_range.len(),
        "input and output ranges must have the same length"
    );
    assert!(input_range.len() >= 2, "ranges need at least two stops");

    if input <= input_range[0] {
        return output_range[0];
    }
    let last = input_range.len() - 1;
    if input >= input_range[last] {
        return output_range[last];
    }

    // Find the segment containing the input.
    let mut i = 0;
    while i < last - 1 && input >= input_range[i + 1] {
        i += 1;
    }

    let (x0, x1) = (input_range[i], input_range[i + 1]);
    let (y0, y1) = (output_range[i], output_range[i + 1]);
    if x1 <= x0 {
        return y1;
    }
    let t = (input - x0) / (x1 - x0);
    y0 + (y1 - y0) * t
}

/// Physical parameters of a damped spring animating from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Mass of the oscillating body.
    pub mass: f64,
    /// Spring stiffness constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
        }
    }
}

impl SpringConfig {
    /// Default mass and stiffness with the given damping.
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Default::default()
        }
    }
}

/// Evaluates a damped spring at the given frame.
///
/// The spring starts at 0 with zero velocity and settles at 1. Negative
/// frames evaluate to 0, so `spring(frame - delay, ...)` delays the
/// animation by `delay` frames. The closed-form solution of the spring ODE
/// is used, so evaluation cost is independent of the frame index.
pub fn spring(frame: f64, fps: f64, config: SpringConfig) -> f64 {
    if frame <= 0.0 {
        return 0.0;
    }
    let t = frame / fps;
    let m = config.mass;
    let k = config.stiffness;
    let c = config.damping;

    let disc = c * c - 4.0 * m * k;
    let value = if disc > f64::EPSILON {
        // Overdamped: two real roots.
        let sq = disc.sqrt();
        let r1 = (-c + sq) / (2.0 * m);
        let r2 = (-c - sq) / (2.0 * m);
        1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
    } else if disc < -f64::EPSILON {
        // Underdamped: decaying oscillation.
        let omega0 = (k / m).sqrt();
        let zeta = c / (2.0 * (k * m).sqrt());
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else {
        // Critically damped.
        let omega = c / (2.0 * m);
        1.0 - (1.0 + omega * t) * (-omega * t).exp()
    };

    // Numerical noise near the endpoints.
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_two_stop() {
        assert_eq!(interpolate(20.0, &[20.0, 40.0], &[0.0, 1.0]), 0.0);
        assert_eq!(interpolate(30.0, &[20.0, 40.0], &[0.0, 1.0]), 0.5);
        assert_eq!(interpolate(40.0, &[20.0, 40.0], &[0.0, 1.0]), 1.0);
    }

    #[test]
    fn interpolate_clamps_both_ends() {
        assert_eq!(interpolate(-10.0, &[0.0, 10.0], &[2.0, 4.0]), 2.0);
        assert_eq!(interpolate(99.0, &[0.0, 10.0], &[2.0, 4.0]), 4.0);
    }

    #[test]
    fn interpolate_multi_stop() {
        // The trapezoid shape used by the audio envelope.
        let xs = [0.0, 30.0, 620.0, 680.0];
        let ys = [0.0, 0.3, 0.3, 0.0];
        assert_eq!(interpolate(0.0, &xs, &ys), 0.0);
        assert_eq!(interpolate(15.0, &xs, &ys), 0.15);
        assert_eq!(interpolate(300.0, &xs, &ys), 0.3);
        assert_eq!(interpolate(680.0, &xs, &ys), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn interpolate_rejects_mismatched_ranges() {
        interpolate(0.0, &[0.0, 1.0], &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn spring_starts_at_zero_and_settles_at_one() {
        let config = SpringConfig::with_damping(200.0);
        assert_eq!(spring(0.0, 30.0, config), 0.0);
        assert_eq!(spring(-5.0, 30.0, config), 0.0);
        // After plenty of frames the spring has converged.
        let settled = spring(600.0, 30.0, config);
        assert!((settled - 1.0).abs() < 1e-6, "settled = {settled}");
    }

    #[test]
    fn spring_is_monotone_when_overdamped() {
        // damping 200 with stiffness 100 / mass 1 is heavily overdamped, so
        // the response must rise without overshoot.
        let config = SpringConfig::with_damping(200.0);
        let mut prev = 0.0;
        for frame in 1..300 {
            let v = spring(frame as f64, 30.0, config);
            assert!(v >= prev, "not monotone at frame {frame}");
            assert!(v <= 1.0 + 1e-9, "overshoot at frame {frame}");
            prev = v;
        }
    }

    #[test]
    fn spring_is_deterministic() {
        let config = SpringConfig::with_damping(100.0);
        for frame in [1.0, 7.0, 33.0, 120.0] {
            assert_eq!(spring(frame, 30.0, config), spring(frame, 30.0, config));
        }
    }
}
