use super::easing::Ease;
use super::geometry::Offset;

/// Time-based interpolation of an offset. Times are in seconds on the
/// caller's clock (the page uses `performance.now() / 1000`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Offset,
    to: Offset,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    /// A tween that has already settled on `value`.
    pub fn at_rest(value: Offset, ease: Ease) -> Self {
        Self::new(value, value, 0.0, 0.0, ease)
    }

    pub fn new(from: Offset, to: Offset, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
            ease,
        }
    }

    pub fn target(&self) -> Offset {
        self.to
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> Offset {
        self.from.lerp(self.to, self.ease.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Replaces the in-flight target. The new segment starts from wherever
    /// the old one currently is, so motion stays continuous.
    pub fn retarget(&mut self, to: Offset, now: f64, duration: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_from_start_to_target() {
        let tween = Tween::new(Offset::ZERO, Offset::new(10.0, -4.0), 1.0, 0.5, Ease::Linear);
        assert_eq!(tween.value_at(0.0), Offset::ZERO);
        assert_eq!(tween.value_at(1.25), Offset::new(5.0, -2.0));
        assert_eq!(tween.value_at(3.0), Offset::new(10.0, -4.0));
        assert!(!tween.is_finished(1.4));
        assert!(tween.is_finished(1.5));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut tween = Tween::new(Offset::ZERO, Offset::new(10.0, 0.0), 0.0, 1.0, Ease::Linear);
        tween.retarget(Offset::new(-10.0, 0.0), 0.5, 1.0);
        assert_eq!(tween.value_at(0.5), Offset::new(5.0, 0.0));
        assert_eq!(tween.target(), Offset::new(-10.0, 0.0));
        assert_eq!(tween.value_at(1.0), Offset::new(-2.5, 0.0));
        assert!(tween.is_finished(1.5));
    }

    #[test]
    fn zero_duration_snaps() {
        let tween = Tween::new(Offset::ZERO, Offset::new(1.0, 1.0), 2.0, 0.0, Ease::Power3Out);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.value_at(0.0), Offset::new(1.0, 1.0));
    }
}
