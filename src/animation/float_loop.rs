use super::easing::Ease;

/// Endless yoyo on translateY, rendered as a CSS keyframe animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLoop {
    pub distance_px: f64,
    /// Seconds for one leg (there, not there-and-back).
    pub duration: f64,
    pub ease: Ease,
}

impl FloatLoop {
    pub fn new(distance_px: f64, duration: f64) -> Self {
        Self {
            distance_px,
            duration,
            ease: Ease::SineInOut,
        }
    }

    /// Stable keyframe name, one per distance.
    pub fn name(&self) -> String {
        let sign = if self.distance_px < 0.0 { "up" } else { "down" };
        format!("float-{}-{}", sign, self.distance_px.abs().round() as i64)
    }

    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ transform: translate3d(0, 0, 0); }} to {{ transform: translate3d(0, {}px, 0); }} }}",
            self.name(),
            self.distance_px
        )
    }

    pub fn animation_css(&self) -> String {
        format!(
            "{} {}s {} infinite alternate",
            self.name(),
            (self.duration * 1000.0).round() / 1000.0,
            self.ease.css()
        )
    }
}

/// The mini cards beside the dashboard drift at slightly different rates.
pub fn staggered(distance_px: f64, base_duration: f64, step: f64, count: usize) -> Vec<FloatLoop> {
    (0..count)
        .map(|idx| FloatLoop::new(distance_px, base_duration + idx as f64 * step))
        .collect()
}

/// Every distinct keyframe block needed by `loops`, once each.
pub fn keyframes_for(loops: &[FloatLoop]) -> String {
    let mut names = Vec::new();
    let mut css = String::new();
    for float in loops {
        let name = float.name();
        if names.contains(&name) {
            continue;
        }
        css.push_str(&float.keyframes_css());
        css.push('\n');
        names.push(name);
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_card_floats_up() {
        let float = FloatLoop::new(-18.0, 3.0);
        assert_eq!(float.name(), "float-up-18");
        assert_eq!(
            float.animation_css(),
            "float-up-18 3s cubic-bezier(0.37, 0, 0.63, 1) infinite alternate"
        );
        assert!(float.keyframes_css().contains("translate3d(0, -18px, 0)"));
    }

    #[test]
    fn stagger_slows_each_following_card() {
        let loops = staggered(12.0, 2.6, 0.3, 2);
        assert_eq!(loops.len(), 2);
        assert_eq!(loops[0].duration, 2.6);
        assert!((loops[1].duration - 2.9).abs() < 1e-9);
        assert!(loops[1].animation_css().starts_with("float-down-12 2.9s "));
    }

    #[test]
    fn shared_keyframes_are_emitted_once() {
        let mut loops = staggered(12.0, 2.6, 0.3, 2);
        loops.push(FloatLoop::new(-18.0, 3.0));
        let css = keyframes_for(&loops);
        assert_eq!(css.matches("@keyframes float-down-12").count(), 1);
        assert_eq!(css.matches("@keyframes float-up-18").count(), 1);
    }
}
