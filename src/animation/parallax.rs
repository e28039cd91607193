//! Pointer-driven parallax over the hero section.
//!
//! Every pointer sample is measured against the centre of the reference
//! region, divided by a damping denominator, and fanned out to the
//! registered layers through their signed scale coefficients. Each layer
//! owns a single tween that is retargeted by new samples, so rapid movement
//! never builds up a backlog.

use std::collections::BTreeMap;

use crate::config;

use super::easing::Ease;
use super::geometry::{Offset, PointerSample, Rect};
use super::tween::Tween;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerId {
    GlowBack,
    GlowFront,
    ForegroundCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxConfig {
    pub damping: f64,
    pub tween_secs: f64,
    pub ease: Ease,
    pub layers: Vec<(LayerId, f64)>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            damping: config::PARALLAX_DAMPING,
            tween_secs: config::PARALLAX_TWEEN_SECS,
            ease: Ease::Power3Out,
            layers: vec![
                (LayerId::GlowBack, config::GLOW_BACK_SCALE),
                (LayerId::GlowFront, config::GLOW_FRONT_SCALE),
                (LayerId::ForegroundCard, config::FOREGROUND_CARD_SCALE),
            ],
        }
    }
}

/// Displacement of the pointer from the region centre, divided by `damping`.
pub fn base_offset(region: Rect, pointer: PointerSample, damping: f64) -> Offset {
    let (cx, cy) = region.center();
    Offset::new((pointer.x - cx) / damping, (pointer.y - cy) / damping)
}

pub fn layer_offsets(
    config: &ParallaxConfig,
    region: Rect,
    pointer: PointerSample,
) -> Vec<(LayerId, Offset)> {
    let base = base_offset(region, pointer, config.damping);
    config
        .layers
        .iter()
        .map(|(layer, scale)| (*layer, base.scale(*scale)))
        .collect()
}

/// Where the animator reads the region box from and writes layer offsets to.
/// Both ends may be unmounted at any moment.
pub trait LayerSurface {
    fn region_rect(&self) -> Option<Rect>;

    fn has_layer(&self, layer: LayerId) -> bool;

    /// Returns false when the layer element is not mounted.
    fn apply(&self, layer: LayerId, offset: Offset) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Listening,
    Detached,
}

pub struct ParallaxAnimator {
    config: ParallaxConfig,
    state: AnimatorState,
    tweens: BTreeMap<LayerId, Tween>,
}

impl ParallaxAnimator {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config,
            state: AnimatorState::Listening,
            tweens: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn is_listening(&self) -> bool {
        self.state == AnimatorState::Listening
    }

    pub fn target(&self, layer: LayerId) -> Option<Offset> {
        self.tweens.get(&layer).map(Tween::target)
    }

    /// Retargets every mounted layer from one pointer sample. Returns the
    /// number of layers retargeted; zero when detached or when the region
    /// itself is gone.
    pub fn pointer_moved<S: LayerSurface>(
        &mut self,
        surface: &S,
        pointer: PointerSample,
        now: f64,
    ) -> usize {
        if !self.is_listening() {
            return 0;
        }
        let Some(region) = surface.region_rect() else {
            return 0;
        };

        let duration = self.config.tween_secs;
        let ease = self.config.ease;
        let mut retargeted = 0;
        for (layer, offset) in layer_offsets(&self.config, region, pointer) {
            if !surface.has_layer(layer) {
                continue;
            }
            self.tweens
                .entry(layer)
                .or_insert_with(|| Tween::at_rest(Offset::ZERO, ease))
                .retarget(offset, now, duration);
            retargeted += 1;
        }
        retargeted
    }

    /// Writes the current interpolated value of each tween to the surface.
    /// Returns true while any tween is still in flight.
    pub fn frame<S: LayerSurface>(&mut self, surface: &S, now: f64) -> bool {
        if !self.is_listening() {
            return false;
        }
        let mut in_flight = false;
        for (layer, tween) in &self.tweens {
            surface.apply(*layer, tween.value_at(now));
            in_flight |= !tween.is_finished(now);
        }
        in_flight
    }

    /// Safe to call any number of times.
    pub fn detach(&mut self) {
        if self.state == AnimatorState::Detached {
            return;
        }
        self.state = AnimatorState::Detached;
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    struct FakeSurface {
        region: Option<Rect>,
        mounted: BTreeSet<LayerId>,
        applied: RefCell<BTreeMap<LayerId, Vec<Offset>>>,
    }

    impl FakeSurface {
        fn hero() -> Self {
            Self {
                region: Some(Rect::new(100.0, 50.0, 800.0, 500.0)),
                mounted: [LayerId::GlowBack, LayerId::GlowFront, LayerId::ForegroundCard]
                    .into_iter()
                    .collect(),
                applied: RefCell::new(BTreeMap::new()),
            }
        }

        fn writes(&self, layer: LayerId) -> usize {
            self.applied.borrow().get(&layer).map_or(0, Vec::len)
        }

        fn last(&self, layer: LayerId) -> Option<Offset> {
            self.applied.borrow().get(&layer).and_then(|v| v.last().copied())
        }
    }

    impl LayerSurface for FakeSurface {
        fn region_rect(&self) -> Option<Rect> {
            self.region
        }

        fn has_layer(&self, layer: LayerId) -> bool {
            self.mounted.contains(&layer)
        }

        fn apply(&self, layer: LayerId, offset: Offset) -> bool {
            if !self.mounted.contains(&layer) {
                return false;
            }
            self.applied.borrow_mut().entry(layer).or_default().push(offset);
            true
        }
    }

    fn close(a: Offset, b: Offset) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn hero_scenario_offsets() {
        let config = ParallaxConfig::default();
        let region = Rect::new(100.0, 50.0, 800.0, 500.0);
        let offsets: BTreeMap<_, _> = layer_offsets(&config, region, PointerSample::new(540.0, 320.0))
            .into_iter()
            .collect();

        assert!(close(offsets[&LayerId::GlowFront], Offset::new(1.0, 0.5)));
        assert!(close(offsets[&LayerId::GlowBack], Offset::new(0.6, 0.3)));
        assert!(close(offsets[&LayerId::ForegroundCard], Offset::new(-0.6, -0.3)));
    }

    #[test]
    fn base_offset_is_linear_in_displacement() {
        let region = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let single = base_offset(region, PointerSample::new(530.0, 290.0), 40.0);
        let double = base_offset(region, PointerSample::new(560.0, 280.0), 40.0);
        assert!(close(double, single.scale(2.0)));
        assert!(close(single, Offset::new(0.75, -0.25)));
    }

    #[test]
    fn centred_pointer_yields_zero_everywhere() {
        let config = ParallaxConfig::default();
        let region = Rect::new(20.0, 30.0, 400.0, 200.0);
        for (_, offset) in layer_offsets(&config, region, PointerSample::new(220.0, 130.0)) {
            assert!(close(offset, Offset::ZERO));
        }
    }

    #[test]
    fn card_moves_against_pointer_and_front_glow_with_it() {
        let config = ParallaxConfig::default();
        let region = Rect::new(0.0, 0.0, 800.0, 800.0);
        for pointer in [
            PointerSample::new(10.0, 790.0),
            PointerSample::new(700.0, 20.0),
            PointerSample::new(401.0, 399.0),
        ] {
            let base = base_offset(region, pointer, config.damping);
            let offsets: BTreeMap<_, _> = layer_offsets(&config, region, pointer).into_iter().collect();
            let card = offsets[&LayerId::ForegroundCard];
            let front = offsets[&LayerId::GlowFront];
            assert!(card.x * base.x < 0.0 && card.y * base.y < 0.0);
            assert!(front.x * base.x > 0.0 && front.y * base.y > 0.0);
            assert!(close(card, base.scale(-0.6)));
        }
    }

    #[test]
    fn offsets_are_not_clamped_at_region_edges() {
        let config = ParallaxConfig::default();
        let region = Rect::new(0.0, 0.0, 400.0, 400.0);
        let far = base_offset(region, PointerSample::new(4200.0, 200.0), config.damping);
        assert!(close(far, Offset::new(100.0, 0.0)));
    }

    #[test]
    fn rapid_samples_leave_one_target_per_layer() {
        let surface = FakeSurface::hero();
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());

        assert_eq!(animator.pointer_moved(&surface, PointerSample::new(900.0, 550.0), 0.0), 3);
        assert_eq!(animator.pointer_moved(&surface, PointerSample::new(540.0, 320.0), 0.016), 3);

        assert!(close(animator.target(LayerId::GlowFront).unwrap(), Offset::new(1.0, 0.5)));
        assert!(close(animator.target(LayerId::ForegroundCard).unwrap(), Offset::new(-0.6, -0.3)));

        // Once the retargeted tween settles the layer sits on the second target only.
        assert!(!animator.frame(&surface, 1.0));
        assert!(close(surface.last(LayerId::GlowBack).unwrap(), Offset::new(0.6, 0.3)));
    }

    #[test]
    fn tween_eases_towards_target_instead_of_snapping() {
        let surface = FakeSurface::hero();
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());
        animator.pointer_moved(&surface, PointerSample::new(540.0, 320.0), 1.0);

        assert!(animator.frame(&surface, 1.3));
        let mid = surface.last(LayerId::GlowFront).unwrap();
        assert!(mid.x > 0.0 && mid.x < 1.0);
        assert!(close(mid, Offset::new(0.875, 0.4375)));
    }

    #[test]
    fn unmounted_layer_is_skipped_and_others_update() {
        let mut surface = FakeSurface::hero();
        surface.mounted.remove(&LayerId::GlowBack);
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());

        assert_eq!(animator.pointer_moved(&surface, PointerSample::new(540.0, 320.0), 0.0), 2);
        animator.frame(&surface, 1.0);

        assert_eq!(animator.target(LayerId::GlowBack), None);
        assert_eq!(surface.writes(LayerId::GlowBack), 0);
        assert_eq!(surface.writes(LayerId::GlowFront), 1);
        assert_eq!(surface.writes(LayerId::ForegroundCard), 1);
    }

    #[test]
    fn missing_region_skips_the_sample() {
        let mut surface = FakeSurface::hero();
        surface.region = None;
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());
        assert_eq!(animator.pointer_moved(&surface, PointerSample::new(540.0, 320.0), 0.0), 0);
        assert!(!animator.frame(&surface, 0.1));
    }

    #[test]
    fn detach_stops_updates_and_is_idempotent() {
        let surface = FakeSurface::hero();
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());
        animator.pointer_moved(&surface, PointerSample::new(540.0, 320.0), 0.0);

        animator.detach();
        animator.detach();
        assert!(!animator.is_listening());

        assert_eq!(animator.pointer_moved(&surface, PointerSample::new(10.0, 10.0), 0.1), 0);
        assert!(!animator.frame(&surface, 0.2));
        assert_eq!(surface.writes(LayerId::GlowFront), 0);
    }

    #[test]
    fn detach_without_any_samples_is_fine() {
        let mut animator = ParallaxAnimator::new(ParallaxConfig::default());
        animator.detach();
        assert!(!animator.is_listening());
    }
}
