use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::disposer::Disposers;
use crate::animation::dom::{clear_motion, play_from};
use crate::animation::easing::Ease;
use crate::animation::timeline::{Keyframe, Position, Timeline};
use crate::config;

/// Elements animated by the hero entrance, in playing order.
#[derive(Clone, PartialEq, Default)]
pub struct HeroTargets {
    pub pill: NodeRef,
    pub heading: NodeRef,
    pub sub: NodeRef,
    pub cta: NodeRef,
    pub card: NodeRef,
    pub floating_cards: Vec<NodeRef>,
}

pub fn hero_timeline(targets: &HeroTargets) -> Timeline<NodeRef> {
    Timeline::new(config::ENTRANCE_DURATION_SECS, Ease::Power3Out)
        .from(targets.pill.clone(), Keyframe::rise(20.0), Position::AfterPrevious)
        .from(targets.heading.clone(), Keyframe::rise(40.0), Position::Overlap(0.4))
        .from(targets.sub.clone(), Keyframe::rise(30.0), Position::Overlap(0.5))
        .from(targets.cta.clone(), Keyframe::rise(20.0), Position::Overlap(0.4))
        .from(
            targets.card.clone(),
            Keyframe::rise(60.0).with_scale(0.9),
            Position::Overlap(0.2),
        )
}

/// The side cards enter on their own clock, staggered by index.
pub fn floating_cards_timeline(cards: &[NodeRef]) -> Timeline<NodeRef> {
    cards.iter().enumerate().fold(
        Timeline::new(config::FLOATING_CARD_ENTRANCE_SECS, Ease::Power3Out),
        |timeline, (idx, card)| {
            let delay = config::FLOATING_CARD_BASE_DELAY_SECS
                + idx as f64 * config::FLOATING_CARD_STAGGER_SECS;
            timeline.from(
                card.clone(),
                Keyframe::rise(40.0).with_scale(0.95),
                Position::At(delay),
            )
        },
    )
}

fn play(timeline: &Timeline<NodeRef>, disposers: &mut Disposers) -> usize {
    let mut played = 0;
    for step in timeline.steps() {
        let Some(el) = step.target.cast::<HtmlElement>() else { continue };
        play_from(&el, step);
        disposers.push(move || clear_motion(&el));
        played += 1;
    }
    played
}

/// Plays the hero entrance once per mount and reverts every inline style it
/// wrote when the hero unmounts.
#[hook]
pub fn use_hero_entrance(targets: HeroTargets) {
    use_effect_with_deps(
        move |_| {
            let mut disposers = Disposers::new();
            let played = play(&hero_timeline(&targets), &mut disposers)
                + play(&floating_cards_timeline(&targets.floating_cards), &mut disposers);
            debug!("Hero entrance playing on {} elements", played);
            move || disposers.dispose()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(secs: f64) -> i64 {
        (secs * 1000.0).round() as i64
    }

    #[test]
    fn hero_steps_overlap_like_a_cascade() {
        let timeline = hero_timeline(&HeroTargets::default());
        let starts: Vec<i64> = timeline.steps().iter().map(|step| ms(step.start)).collect();
        assert_eq!(starts, vec![0, 400, 700, 1100, 1700]);
        assert_eq!(ms(timeline.total_duration()), 2500);
        assert_eq!(timeline.steps()[4].from.scale, 0.9);
    }

    #[test]
    fn floating_cards_are_staggered_by_index() {
        let cards = vec![NodeRef::default(), NodeRef::default()];
        let timeline = floating_cards_timeline(&cards);
        let starts: Vec<i64> = timeline.steps().iter().map(|step| ms(step.start)).collect();
        assert_eq!(starts, vec![400, 520]);
        assert!(timeline.steps().iter().all(|step| step.duration == 0.9));
    }

    #[test]
    fn unmounted_targets_are_skipped() {
        let mut disposers = Disposers::new();
        assert_eq!(play(&hero_timeline(&HeroTargets::default()), &mut disposers), 0);
        assert!(disposers.is_empty());
    }
}
