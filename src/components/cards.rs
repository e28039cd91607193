use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Accent {
    Up,
    Neutral,
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub label: String,
    pub value: String,
    pub trend: String,
    pub accent: Accent,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="summary-card lift-sm">
            <div class="summary-card-head">
                <span>{ &props.label }</span>
                <span class={classes!("trend-pill", (props.accent == Accent::Up).then_some("up"))}>
                    { &props.trend }
                </span>
            </div>
            <div class="summary-card-value">{ &props.value }</div>
            <div class="summary-card-track">
                <div class="summary-card-fill"></div>
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct Activity {
    pub name: &'static str,
    pub time: &'static str,
    pub value: &'static str,
    pub status: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ActivityRowProps {
    pub activity: Activity,
}

#[function_component(ActivityRow)]
pub fn activity_row(props: &ActivityRowProps) -> Html {
    let Activity { name, time, value, status } = props.activity.clone();
    html! {
        <div class="activity-row lift-xs">
            <div>
                <p class="activity-name">{ name }</p>
                <p class="activity-time">{ time }</p>
            </div>
            <div class="activity-meta">
                <p class="activity-value">{ value }</p>
                <p class="activity-status">{ status }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatPillProps {
    pub label: String,
}

#[function_component(StatPill)]
pub fn stat_pill(props: &StatPillProps) -> Html {
    html! {
        <div class="stat-pill">
            <span class="stat-pill-icon">{"👥"}</span>
            <span>{ &props.label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionRowProps {
    pub title: String,
    pub tag: String,
}

#[function_component(SuggestionRow)]
pub fn suggestion_row(props: &SuggestionRowProps) -> Html {
    html! {
        <div class="suggestion-row">
            <div class="suggestion-title">{ &props.title }</div>
            <span class="suggestion-tag">{ &props.tag }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card lift-md">
            <div class="feature-card-icon">{ &props.icon }</div>
            <h3>{ &props.title }</h3>
            <p>{ &props.body }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridCardProps {
    pub title: String,
    pub body: String,
    pub badge: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FeatureGridCard)]
pub fn feature_grid_card(props: &FeatureGridCardProps) -> Html {
    html! {
        <article class="feature-grid-card lift-spring">
            <div class="feature-grid-card-glow"></div>
            <div class="feature-grid-card-body">
                <div class="feature-grid-card-head">
                    <span class="feature-grid-badge">{ &props.badge }</span>
                    <span class="feature-grid-kind">{"Workflow"}</span>
                </div>
                { for props.children.iter() }
                <div>
                    <h3>{ &props.title }</h3>
                    <p>{ &props.body }</p>
                </div>
            </div>
        </article>
    }
}
