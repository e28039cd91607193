use super::easing::Ease;

/// Starting pose of a "from" animation. Every step animates from this pose
/// back to the element's natural one (no offset, fully opaque, unscaled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Keyframe {
    pub const NATURAL: Keyframe = Keyframe { y: 0.0, opacity: 1.0, scale: 1.0 };

    pub fn rise(y: f64) -> Self {
        Self { y, opacity: 0.0, scale: 1.0 }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn transform_css(&self) -> String {
        if self.scale == 1.0 {
            format!("translate3d(0, {}px, 0)", self.y)
        } else {
            format!("translate3d(0, {}px, 0) scale({})", self.y, self.scale)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    AfterPrevious,
    /// Starts this many seconds before the previous step ends.
    Overlap(f64),
    At(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub target: T,
    pub from: Keyframe,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T> Step<T> {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// CSS `transition` value playing this step from a zero-based clock.
    pub fn transition_css(&self) -> String {
        let ease = self.ease.css();
        format!(
            "transform {d}s {e} {s}s, opacity {d}s {e} {s}s",
            d = self.duration,
            e = ease,
            s = round_ms(self.start)
        )
    }
}

fn round_ms(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

pub struct Timeline<T> {
    duration: f64,
    ease: Ease,
    steps: Vec<Step<T>>,
}

impl<T> Timeline<T> {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            steps: Vec::new(),
        }
    }

    fn previous_end(&self) -> f64 {
        self.steps.last().map_or(0.0, Step::end)
    }

    pub fn from(self, target: T, from: Keyframe, position: Position) -> Self {
        let duration = self.duration;
        self.from_with(target, from, position, duration)
    }

    pub fn from_with(mut self, target: T, from: Keyframe, position: Position, duration: f64) -> Self {
        let start = match position {
            Position::AfterPrevious => self.previous_end(),
            Position::Overlap(secs) => self.previous_end() - secs,
            Position::At(secs) => secs,
        }
        .max(0.0);
        self.steps.push(Step {
            target,
            from,
            start,
            duration,
            ease: self.ease,
        });
        self
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn total_duration(&self) -> f64 {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Timeline<&'static str> {
        Timeline::new(0.8, Ease::Power3Out)
            .from("pill", Keyframe::rise(20.0), Position::AfterPrevious)
            .from("heading", Keyframe::rise(40.0), Position::Overlap(0.4))
            .from("sub", Keyframe::rise(30.0), Position::Overlap(0.5))
            .from("cta", Keyframe::rise(20.0), Position::Overlap(0.4))
            .from("card", Keyframe::rise(60.0).with_scale(0.9), Position::Overlap(0.2))
    }

    #[test]
    fn overlapping_steps_pull_start_times_back() {
        let timeline = hero();
        let starts: Vec<f64> = timeline.steps().iter().map(|s| round_ms(s.start)).collect();
        assert_eq!(starts, vec![0.0, 0.4, 0.7, 1.1, 1.7]);
        assert!((timeline.total_duration() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn start_never_goes_negative() {
        let timeline = Timeline::new(0.3, Ease::Linear).from("a", Keyframe::rise(10.0), Position::Overlap(1.0));
        assert_eq!(timeline.steps()[0].start, 0.0);
    }

    #[test]
    fn absolute_position_ignores_previous_steps() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .from("a", Keyframe::rise(10.0), Position::AfterPrevious)
            .from_with("b", Keyframe::rise(10.0), Position::At(0.25), 0.5);
        assert_eq!(timeline.steps()[1].start, 0.25);
        assert_eq!(timeline.steps()[1].end(), 0.75);
        assert_eq!(timeline.total_duration(), 1.0);
    }

    #[test]
    fn css_renders_delay_and_scale() {
        let timeline = hero();
        let card = &timeline.steps()[4];
        assert_eq!(card.from.transform_css(), "translate3d(0, 60px, 0) scale(0.9)");
        assert_eq!(
            card.transition_css(),
            "transform 0.8s cubic-bezier(0.33, 1, 0.68, 1) 1.7s, opacity 0.8s cubic-bezier(0.33, 1, 0.68, 1) 1.7s"
        );
        assert_eq!(Keyframe::NATURAL.transform_css(), "translate3d(0, 0px, 0)");
    }
}
