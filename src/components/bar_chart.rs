use yew::prelude::*;

/// When the bars grow: straight away, or once an `is-revealed` section
/// around them has scrolled into view.
#[derive(Clone, Copy, PartialEq)]
pub enum GrowOn {
    Mount,
    Reveal,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub heights: Vec<u32>,
    pub base_delay: f64,
    pub stagger: f64,
    pub grow_on: GrowOn,
}

pub fn bar_delays(count: usize, base_delay: f64, stagger: f64) -> Vec<f64> {
    (0..count)
        .map(|idx| ((base_delay + idx as f64 * stagger) * 1000.0).round() / 1000.0)
        .collect()
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let mode = match props.grow_on {
        GrowOn::Mount => "grow-on-mount",
        GrowOn::Reveal => "grow-on-reveal",
    };
    let delays = bar_delays(props.heights.len(), props.base_delay, props.stagger);

    html! {
        <div class={classes!("bar-chart", mode)}>
            {
                props.heights.iter().zip(delays).map(|(height, delay)| {
                    html! {
                        <div
                            class="bar"
                            style={format!("height: {}%; animation-delay: {}s;", (*height).min(100), delay)}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::bar_delays;

    #[test]
    fn delays_step_evenly_from_base() {
        assert_eq!(bar_delays(6, 0.2, 0.06), vec![0.2, 0.26, 0.32, 0.38, 0.44, 0.5]);
        assert_eq!(bar_delays(3, 0.1, 0.05), vec![0.1, 0.15, 0.2]);
        assert!(bar_delays(0, 0.1, 0.05).is_empty());
    }
}
