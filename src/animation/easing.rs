use std::f64::consts::PI;

/// Easing curves shared by the Rust-driven tweens and the CSS transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power3Out,
    SineInOut,
    CubicInOut,
}

impl Ease {
    /// Progress along the curve for `t` in [0, 1]; `t` outside that range is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// CSS timing function approximating the same curve.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power3Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::SineInOut => "cubic-bezier(0.37, 0, 0.63, 1)",
            Ease::CubicInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ease;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::Power3Out, Ease::SineInOut, Ease::CubicInOut];

    #[test]
    fn curves_pin_both_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at 1", ease);
        }
    }

    #[test]
    fn power3_out_front_loads_progress() {
        assert!((Ease::Power3Out.apply(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn symmetric_curves_cross_half_at_midpoint() {
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::CubicInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(7.5), 1.0);
    }
}
