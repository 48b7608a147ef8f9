//! Open/close motion for the modal panel
//!
//! Two curves mirror the two layouts: a short tween for the phone bottom
//! sheet (slide-up-and-fade) and an underdamped spring for the desktop
//! popup (scale/slide with a slight settle). Motion is purely cosmetic -
//! state changes never wait on it - and it is interruptible: reversing
//! mid-flight starts from the current value, not from an endpoint.

use std::time::{Duration, Instant};

/// Curve shapes for panel motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCurve {
    /// Fixed-duration ease-out tween
    Tween { duration: Duration },
    /// Unit-mass spring; progress follows the closed-form step response
    Spring { stiffness: f32, damping: f32 },
}

impl MotionCurve {
    /// Phone sheet: ~180ms slide
    pub fn sheet() -> Self {
        Self::Tween {
            duration: Duration::from_millis(180),
        }
    }

    /// Desktop popup: spring with a visible but quick settle
    pub fn popup() -> Self {
        Self::Spring {
            stiffness: 260.0,
            damping: 24.0,
        }
    }

    /// Normalized progress toward 1.0 at `elapsed`
    fn progress(&self, elapsed: Duration) -> f32 {
        match self {
            Self::Tween { duration } => {
                if duration.is_zero() {
                    return 1.0;
                }
                let t = (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
                // ease-out cubic
                1.0 - (1.0 - t).powi(3)
            }
            Self::Spring { stiffness, damping } => {
                let t = elapsed.as_secs_f32();
                let omega = stiffness.sqrt();
                let zeta = damping / (2.0 * omega);
                if zeta >= 1.0 {
                    // Critically/over-damped: exponential approach
                    return (1.0 - (-omega * t).exp() * (1.0 + omega * t)).clamp(0.0, 1.0);
                }
                let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                let decay = (-zeta * omega * t).exp();
                let x = 1.0
                    - decay * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin());
                x.clamp(0.0, 1.2)
            }
        }
    }

    fn settle_time(&self) -> Duration {
        match self {
            Self::Tween { duration } => *duration,
            Self::Spring { .. } => Duration::from_millis(600),
        }
    }
}

/// An in-flight interpolation from `from` to `to`
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    curve: MotionCurve,
    started: Instant,
    from: f32,
    to: f32,
}

impl Motion {
    /// Start an opening motion (0 -> 1)
    pub fn opening(curve: MotionCurve, now: Instant) -> Self {
        Self {
            curve,
            started: now,
            from: 0.0,
            to: 1.0,
        }
    }

    /// Current value in [from, to] space (may overshoot slightly on springs)
    pub fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        self.from + (self.to - self.from) * self.curve.progress(elapsed)
    }

    /// Redirect toward a new target, starting from the current value
    pub fn redirect(&mut self, to: f32, now: Instant) {
        self.from = self.value(now);
        self.to = to;
        self.started = now;
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.curve.settle_time()
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_starts_at_from_and_settles_at_to() {
        let start = Instant::now();
        let motion = Motion::opening(MotionCurve::sheet(), start);

        assert!(motion.value(start).abs() < 0.001);
        let end = start + Duration::from_millis(200);
        assert!((motion.value(end) - 1.0).abs() < 0.001);
        assert!(motion.is_settled(end));
    }

    #[test]
    fn test_tween_is_monotonic() {
        let start = Instant::now();
        let motion = Motion::opening(MotionCurve::sheet(), start);

        let mut last = -1.0;
        for ms in (0..=180).step_by(15) {
            let v = motion.value(start + Duration::from_millis(ms));
            assert!(v >= last, "tween regressed at {}ms", ms);
            last = v;
        }
    }

    #[test]
    fn test_spring_settles_near_target() {
        let start = Instant::now();
        let motion = Motion::opening(MotionCurve::popup(), start);

        let v = motion.value(start + Duration::from_millis(600));
        assert!((v - 1.0).abs() < 0.05, "spring far from target: {}", v);
    }

    #[test]
    fn test_redirect_starts_from_current_value() {
        let start = Instant::now();
        let mut motion = Motion::opening(MotionCurve::sheet(), start);

        // Interrupt mid-flight and head back to zero
        let mid = start + Duration::from_millis(90);
        let at_interrupt = motion.value(mid);
        assert!(at_interrupt > 0.0 && at_interrupt < 1.0);

        motion.redirect(0.0, mid);
        assert!((motion.value(mid) - at_interrupt).abs() < 0.001);
        assert_eq!(motion.target(), 0.0);

        let later = mid + Duration::from_millis(250);
        assert!(motion.value(later).abs() < 0.001);
    }
}
