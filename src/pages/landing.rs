use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::float_loop::{self, FloatLoop};
use crate::animation::parallax::LayerId;
use crate::components::bar_chart::{BarChart, GrowOn};
use crate::components::cards::{
    Accent, Activity, ActivityRow, FeatureCard, FeatureGridCard, StatPill, SuggestionRow,
    SummaryCard,
};
use crate::components::footer::Footer;
use crate::config;
use crate::hooks::{use_hero_entrance, use_parallax, use_scroll_reveal, HeroTargets};

const SIDEBAR_ITEMS: [&str; 6] = ["Home", "Dashboard", "Projects", "Wallet", "Analytics", "Users"];
const ACTIVE_SIDEBAR_ITEM: usize = 1;

const ACTIVITIES: [Activity; 3] = [
    Activity { name: "Activation boost play", time: "Just now", value: "+$12,800", status: "Completed" },
    Activity { name: "Churn guardrail", time: "12 min ago", value: "- 23 risks", status: "Monitoring" },
    Activity { name: "Expansion nudges", time: "1 hr ago", value: "+$4,390", status: "Running" },
];

struct Plan {
    name: &'static str,
    badge: &'static str,
    highlight: bool,
    perks: [&'static str; 3],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        badge: "For early teams",
        highlight: false,
        perks: ["Single workspace", "Core automations & insights", "Email support"],
    },
    Plan {
        name: "Growth",
        badge: "Most flexible",
        highlight: true,
        perks: ["Multiple workspaces", "Advanced routing & experiments", "Priority support & onboarding"],
    },
    Plan {
        name: "Enterprise",
        badge: "Custom rollouts",
        highlight: false,
        perks: ["Dedicated CSM", "Security reviews & SSO", "Custom data residency"],
    },
];

const FLOATING_CARD_COUNT: usize = 2;
const REVEAL_SECTION_COUNT: usize = 5;

fn dashboard_float() -> FloatLoop {
    FloatLoop::new(-18.0, 3.0)
}

fn floating_card_floats() -> Vec<FloatLoop> {
    float_loop::staggered(12.0, 2.6, 0.3, FLOATING_CARD_COUNT)
}

fn cta_bob() -> FloatLoop {
    FloatLoop::new(-3.0, 1.2)
}

fn animation_style(float: &FloatLoop) -> String {
    format!("animation: {};", float.animation_css())
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let glow_back_ref = use_node_ref();
    let glow_front_ref = use_node_ref();
    let card_parallax_ref = use_node_ref();

    let targets = use_memo(
        |_| HeroTargets {
            floating_cards: (0..FLOATING_CARD_COUNT).map(|_| NodeRef::default()).collect(),
            ..HeroTargets::default()
        },
        (),
    );
    let sections = use_memo(
        |_| (0..REVEAL_SECTION_COUNT).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    use_hero_entrance((*targets).clone());
    use_scroll_reveal((*sections).clone());
    use_parallax(
        hero_ref.clone(),
        vec![
            (LayerId::GlowBack, glow_back_ref.clone()),
            (LayerId::GlowFront, glow_front_ref.clone()),
            (LayerId::ForegroundCard, card_parallax_ref.clone()),
        ],
    );

    let mut all_floats = floating_card_floats();
    all_floats.push(dashboard_float());
    all_floats.push(cta_bob());
    let keyframes = float_loop::keyframes_for(&all_floats);

    html! {
        <div
            class="landing-page"
            style={format!("--brand: {}; --brand-dark: {};", config::BRAND, config::BRAND_DARK)}
        >
            <main>
                <section class="hero" ref={hero_ref}>
                    <div class="hero-dots"></div>
                    <div class="hero-glow back" ref={glow_back_ref}></div>
                    <div class="hero-glow front" ref={glow_front_ref}></div>
                    <div class="hero-top-fade"></div>

                    <div class="hero-text">
                        <span class="hero-pill" ref={targets.pill.clone()}>
                            {"✨ Explified Labs"}
                        </span>
                        <h1 class="hero-heading" ref={targets.heading.clone()}>
                            {"Simplifying growth for"}
                            <br />
                            <span class="hero-heading-accent">{"futuristic teams."}</span>
                        </h1>
                        <p class="hero-sub" ref={targets.sub.clone()}>
                            {"From automation to engagement, NovaLabs brings every workflow into one intelligent, real-time dashboard so your team can move faster and scale with confidence."}
                        </p>
                        <div class="hero-cta-row">
                            <a
                                href={config::app_link("expli")}
                                target="_blank"
                                rel="noreferrer"
                                class="hero-cta"
                                ref={targets.cta.clone()}
                            >
                                <div class="hero-cta-lift">
                                    <div
                                        class="hero-cta-glow"
                                        style={format!("animation: cta-pulse 2.5s {} infinite;", Ease::CubicInOut.css())}
                                    ></div>
                                    <div class="hero-cta-button" style={animation_style(&cta_bob())}>
                                        <span>{"Coming Soon"}</span>
                                    </div>
                                </div>
                            </a>
                        </div>
                    </div>

                    <div class="hero-stage">
                        {
                            targets.floating_cards.iter().zip(floating_card_floats()).enumerate().map(|(idx, (card_ref, float))| {
                                let side = if idx == 0 { "left" } else { "right" };
                                html! {
                                    <div class={classes!("floating-card", side)} ref={card_ref.clone()}>
                                        <div class="floating-card-inner" style={animation_style(&float)}>
                                            { floating_card_body(idx) }
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }

                        <div class="dashboard-parallax" ref={card_parallax_ref}>
                            <div class="dashboard-entrance" ref={targets.card.clone()}>
                                <div class="dashboard-card" style={animation_style(&dashboard_float())}>
                                    { dashboard() }
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="logos reveal-section" ref={sections[0].clone()}>
                    <span>{"Trusted by visionary teams worldwide"}</span>
                    <div class="logo-row">
                        <span>{"TechCrunch"}</span>
                        <span>{"GIZMODO"}</span>
                        <span>{"Bloomberg"}</span>
                        <span>{"Forbes"}</span>
                    </div>
                </section>

                <section id="about" class="about reveal-section" ref={sections[1].clone()}>
                    <div class="about-copy">
                        <p class="eyebrow">{"About NovaLabs"}</p>
                        <h2>{"Simplifying automation with the power of AI."}</h2>
                        <p class="section-lead">
                            {"NovaLabs helps teams automate complex workflows without adding complexity to their day-to-day. Our AI assistant understands your goals, connects the right tools and keeps every workflow observable end-to-end."}
                        </p>
                        <div class="stat-row">
                            <StatPill label="45+ integrations" />
                            <StatPill label="1.2M+ workflows executed" />
                            <StatPill label="96% satisfaction rate" />
                        </div>
                    </div>
                    <div class="suggestions-panel">
                        <div class="suggestions-head">
                            <span>{"Playbook suggestions"}</span>
                            <span class="suggestions-badge">{"AI generated"}</span>
                        </div>
                        <SuggestionRow title="Onboard new users in 7 days" tag="Activation" />
                        <SuggestionRow title="Catch churn risks before renewal" tag="Retention" />
                        <SuggestionRow title="Auto-upgrade power users" tag="Expansion" />
                    </div>
                </section>

                <section id="features" class="features reveal-section" ref={sections[2].clone()}>
                    <div class="section-head">
                        <div>
                            <p class="eyebrow">{"What we propose"}</p>
                            <h2>{"Built for teams who live in the data."}</h2>
                        </div>
                        <p class="section-lead">
                            {"From ops to product to revenue, everyone gets the same live view of what's working and what's not. No more scattered tools or invisible automation."}
                        </p>
                    </div>
                    <div class="feature-cards">
                        <FeatureCard icon="⚡" title="End-to-end automation" body="Trigger flows from any event, across any tool, with full visibility into every step." />
                        <FeatureCard icon="📈" title="Live growth insights" body="Understand impact in real time with AI-written summaries and clean dashboards." />
                        <FeatureCard icon="🛡" title="Enterprise-level trust" body="Role-based access, audit logs and SOC2-ready infrastructure from day one." />
                    </div>
                </section>

                <section id="feature-grid" class="feature-grid reveal-section" ref={sections[3].clone()}>
                    <div class="section-head">
                        <div>
                            <p class="eyebrow">{"Key capabilities"}</p>
                            <h2>{"Everything you expect from a modern automation studio."}</h2>
                        </div>
                        <p class="section-lead">
                            {"Visual, powerful and explainable. Each card below represents a full workflow you can switch on in minutes."}
                        </p>
                    </div>
                    <div class="feature-grid-cards">
                        <FeatureGridCard title="Personalized prospecting" body="Use AI to tailor every outreach sequence to each lead, across channels." badge="Outreach">
                            <div class="handle-cloud">
                                <span class="handle primary">{"@samuel"}</span>
                                <div class="handle-row">
                                    { for ["@jim", "@alex", "@kelly", "@mehme"].iter().map(|h| html! { <span class="handle">{ *h }</span> }) }
                                </div>
                            </div>
                        </FeatureGridCard>
                        <FeatureGridCard title="Find contact info" body="Automatically enrich records and find verified emails and roles." badge="Enrichment">
                            <div class="search-mock">
                                <div class="search-mock-field"></div>
                                <div class="search-mock-button">{"Search"}</div>
                            </div>
                        </FeatureGridCard>
                        <FeatureGridCard title="Scale your outreach" body="Trigger multi-step sequences at scale while keeping everything measurable." badge="Scale">
                            <div class="chart-mock">
                                <div class="chart-mock-head">
                                    <span>{"Last 30 days"}</span>
                                    <span>{"Total emails"}</span>
                                </div>
                                <BarChart heights={vec![25, 40, 55, 70, 90]} base_delay={0.1} stagger={0.05} grow_on={GrowOn::Reveal} />
                            </div>
                        </FeatureGridCard>
                    </div>
                </section>

                <section id="pricing" class="pricing reveal-section" ref={sections[4].clone()}>
                    <div class="pricing-head">
                        <p class="eyebrow">{"Pricing"}</p>
                        <h2>{"Simple plans, coming soon."}</h2>
                        <p class="section-lead">
                            {"We're finalising pricing that works for solo builders, fast-growing teams and enterprises. No opaque add-ons or surprise fees."}
                        </p>
                    </div>
                    <div class="plans">
                        {
                            PLANS.iter().map(|plan| html! {
                                <div class={classes!("plan", "lift-lg", plan.highlight.then_some("highlight"))}>
                                    if plan.highlight {
                                        <span class="plan-recommended">{"Recommended"}</span>
                                    }
                                    <div class="plan-badge">{ plan.badge }</div>
                                    <div class="plan-name">{ plan.name }</div>
                                    <div class="plan-price">{"Coming soon"}</div>
                                    <ul class="plan-perks">
                                        { for plan.perks.iter().map(|perk| html! { <li><span class="perk-dot"></span><span>{ *perk }</span></li> }) }
                                    </ul>
                                    <button class="plan-button">{"Coming soon →"}</button>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            </main>

            <Footer />

            <style>{ keyframes }</style>
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #02030a;
                        color: #f8fafc;
                        font-family: Inter, system-ui, sans-serif;
                        overflow-x: hidden;
                    }

                    .hero {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        min-height: 90vh;
                        padding: 7rem 1rem 6rem;
                        overflow: hidden;
                        background:
                            radial-gradient(circle at 0% 0%, rgba(35, 181, 181, 0.25), transparent 55%),
                            radial-gradient(circle at 100% 0%, rgba(7, 88, 91, 0.7), transparent 60%),
                            linear-gradient(to bottom, #050816, #02030a);
                    }

                    .hero-dots {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background-image: radial-gradient(circle, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
                        background-size: 26px 26px;
                        opacity: 0.2;
                    }

                    .hero-glow {
                        position: absolute;
                        pointer-events: none;
                        border-radius: 50%;
                        will-change: transform;
                    }

                    .hero-glow.back {
                        bottom: -26%;
                        left: calc(50% - 590px);
                        width: 1180px;
                        height: 520px;
                        background: radial-gradient(circle at top, rgba(8, 214, 214, 0.4), transparent 65%);
                        opacity: 0.9;
                        filter: blur(64px);
                    }

                    .hero-glow.front {
                        bottom: -24%;
                        left: calc(50% - 440px);
                        width: 880px;
                        height: 420px;
                        background: radial-gradient(circle at top, rgba(12, 231, 231, 0.6), transparent 65%);
                        opacity: 0.95;
                        filter: blur(40px);
                    }

                    .hero-top-fade {
                        position: absolute;
                        inset: 0 0 auto 0;
                        height: 10rem;
                        pointer-events: none;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), transparent);
                    }

                    .hero-text {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .hero-pill {
                        display: inline-block;
                        padding: 0.25rem 0.9rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.05);
                        font-size: 0.7rem;
                        color: #cbd5e1;
                    }

                    .hero-heading {
                        margin-top: 1.25rem;
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 600;
                        line-height: 1.15;
                        letter-spacing: -0.02em;
                    }

                    .hero-heading-accent {
                        background: linear-gradient(to right, #fff, #fff, var(--brand));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-sub {
                        margin-top: 1rem;
                        max-width: 42rem;
                        font-size: 0.9rem;
                        line-height: 1.7;
                        color: rgba(226, 232, 240, 0.8);
                    }

                    .hero-cta-row {
                        margin-top: 1.75rem;
                    }

                    .hero-cta {
                        position: relative;
                        display: inline-flex;
                        text-decoration: none;
                    }

                    .hero-cta-lift {
                        position: relative;
                        transition: transform 0.25s cubic-bezier(0.33, 1, 0.68, 1);
                    }

                    .hero-cta:hover .hero-cta-lift {
                        transform: translateY(-2px) scale(1.05);
                    }

                    .hero-cta:active .hero-cta-lift {
                        transform: scale(0.97);
                    }

                    .hero-cta-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 999px;
                    }

                    @keyframes cta-pulse {
                        0%, 100% { box-shadow: 0 0 10px rgba(14, 101, 101, 0.4); transform: scale(1); }
                        50% { box-shadow: 0 0 26px rgba(14, 101, 101, 0.9); transform: scale(1.03); }
                    }

                    .hero-cta-button {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.65rem 1.75rem;
                        border-radius: 999px;
                        background: #0e6565;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 600;
                        box-shadow: 0 18px 60px rgba(0, 0, 0, 0.8);
                    }

                    .hero-stage {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 64rem;
                        margin-top: 3rem;
                    }

                    .floating-card {
                        position: absolute;
                        z-index: 2;
                        width: 13rem;
                        pointer-events: none;
                    }

                    .floating-card.left { left: -1rem; top: 1.5rem; }
                    .floating-card.right { right: -1rem; bottom: 1rem; }

                    .floating-card-inner {
                        padding: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.7);
                        font-size: 0.7rem;
                        color: #e2e8f0;
                        box-shadow: 0 18px 60px rgba(0, 0, 0, 0.9);
                    }

                    .floating-card-label { font-size: 0.62rem; color: #94a3b8; }
                    .floating-card-line { display: flex; justify-content: space-between; margin-top: 0.35rem; }
                    .floating-card-amount {
                        padding: 0.1rem 0.5rem;
                        border-radius: 999px;
                        background: rgba(35, 181, 181, 0.18);
                        color: var(--brand);
                    }
                    .floating-card-progress { margin-top: 0.5rem; height: 6px; border-radius: 999px; background: #1e293b; overflow: hidden; }
                    .floating-card-progress div { width: 72%; height: 100%; background: var(--brand); box-shadow: 0 0 12px var(--brand); }
                    .floating-card-accent { color: var(--brand); }
                    .floating-card-warn { color: #fcd34d; }

                    .dashboard-parallax { will-change: transform; }

                    .dashboard-card {
                        margin: 0 auto;
                        overflow: hidden;
                        border-radius: 30px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom, #050915, #050915, #02030a);
                        box-shadow: 0 40px 120px rgba(0, 0, 0, 0.9);
                    }

                    .dashboard-layout { display: flex; }

                    .dashboard-sidebar {
                        width: 10rem;
                        padding: 1.25rem 1rem;
                        border-right: 1px solid rgba(255, 255, 255, 0.05);
                        background: radial-gradient(circle at top, rgba(35, 181, 181, 0.2), transparent 60%);
                        font-size: 0.7rem;
                        color: #cbd5e1;
                    }

                    .sidebar-title { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1.5rem; font-weight: 600; }
                    .sidebar-item {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        width: 100%;
                        padding: 0.35rem 0.6rem;
                        margin-bottom: 0.35rem;
                        border: 0;
                        border-radius: 0.75rem;
                        background: transparent;
                        color: inherit;
                        transition: transform 0.2s ease;
                    }
                    .sidebar-item:hover { transform: translateX(4px); }
                    .sidebar-item.active {
                        background: rgba(255, 255, 255, 0.1);
                        color: var(--brand);
                        box-shadow: 0 0 18px rgba(35, 181, 181, 0.6);
                    }
                    .sidebar-dot { width: 6px; height: 6px; border-radius: 50%; background: var(--brand); }

                    .dashboard-main { flex: 1; padding: 1.25rem 1.5rem; background: #050915; }
                    .dashboard-top { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
                    .dashboard-greeting { font-size: 0.7rem; color: #94a3b8; }
                    .dashboard-title { font-size: 0.9rem; font-weight: 600; }
                    .range-button {
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #cbd5e1;
                        font-size: 0.7rem;
                    }
                    .range-button.muted { background: transparent; border-color: transparent; color: #94a3b8; }

                    .summary-cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-top: 1rem; }
                    .summary-card {
                        padding: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .summary-card-head { display: flex; justify-content: space-between; font-size: 0.68rem; color: #cbd5e1; }
                    .trend-pill { padding: 0.1rem 0.5rem; border-radius: 999px; background: rgba(255, 255, 255, 0.1); }
                    .trend-pill.up { background: rgba(35, 181, 181, 0.15); color: var(--brand); }
                    .summary-card-value { margin-top: 0.5rem; font-size: 1.1rem; font-weight: 600; }
                    .summary-card-track { margin-top: 0.5rem; height: 4px; border-radius: 999px; background: #1e293b; overflow: hidden; }
                    .summary-card-fill { width: 66%; height: 100%; background: linear-gradient(to right, var(--brand), var(--brand-dark)); }

                    .dashboard-lower { display: grid; grid-template-columns: 1.6fr 1fr; gap: 1rem; margin-top: 1.25rem; }
                    .panel { padding: 0.75rem; border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.08); background: rgba(0, 0, 0, 0.4); }
                    .panel-head { display: flex; justify-content: space-between; font-size: 0.7rem; color: #cbd5e1; }
                    .panel-head .muted { color: #64748b; }
                    .panel-note { margin-top: 0.75rem; font-size: 0.68rem; color: #94a3b8; }
                    .panel-note .accent { color: var(--brand); }

                    .activity-row {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 0.5rem;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                        font-size: 0.7rem;
                    }
                    .activity-time, .activity-status { color: #64748b; font-size: 0.62rem; }
                    .activity-meta { text-align: right; }
                    .activity-value { color: var(--brand); }

                    .bar-chart {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.4rem;
                        height: 7rem;
                        margin-top: 0.75rem;
                    }
                    .bar-chart .bar {
                        flex: 1;
                        border-radius: 0.4rem 0.4rem 0 0;
                        background: linear-gradient(to top, var(--brand-dark), var(--brand));
                        transform: scaleY(0);
                        transform-origin: bottom;
                    }
                    .bar-chart.grow-on-mount .bar,
                    .is-revealed .bar-chart.grow-on-reveal .bar {
                        animation: bar-grow 0.6s cubic-bezier(0.33, 1, 0.68, 1) forwards;
                    }
                    @keyframes bar-grow {
                        from { transform: scaleY(0); }
                        to { transform: scaleY(1); }
                    }

                    .reveal-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }

                    .logos { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 3rem 1.5rem; font-size: 0.75rem; color: #94a3b8; }
                    .logo-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 2.5rem; font-size: 1rem; font-weight: 600; color: #cbd5e1; opacity: 0.7; }

                    .eyebrow { font-size: 0.7rem; font-weight: 600; letter-spacing: 0.2em; text-transform: uppercase; color: var(--brand); }
                    .reveal-section h2 { margin-top: 0.75rem; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 600; line-height: 1.2; }
                    .section-lead { margin-top: 1rem; max-width: 36rem; font-size: 0.9rem; line-height: 1.7; color: rgba(226, 232, 240, 0.75); }
                    .section-head { display: flex; justify-content: space-between; align-items: flex-end; gap: 2rem; }

                    .about { display: grid; grid-template-columns: 1.1fr 1fr; gap: 3rem; align-items: center; }
                    .stat-row { display: flex; flex-wrap: wrap; gap: 0.6rem; margin-top: 1.5rem; }
                    .stat-pill {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.4rem;
                        padding: 0.35rem 0.8rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                        font-size: 0.7rem;
                    }
                    .suggestions-panel { padding: 1.25rem; border-radius: 1.5rem; border: 1px solid rgba(255, 255, 255, 0.1); background: #050915; }
                    .suggestions-head { display: flex; justify-content: space-between; font-size: 0.75rem; margin-bottom: 0.75rem; }
                    .suggestions-badge { color: var(--brand); }
                    .suggestion-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.5rem;
                        padding: 0.65rem 0.9rem;
                        border-radius: 0.9rem;
                        background: rgba(255, 255, 255, 0.03);
                        font-size: 0.75rem;
                    }
                    .suggestion-tag { padding: 0.1rem 0.55rem; border-radius: 999px; background: rgba(35, 181, 181, 0.15); color: var(--brand); font-size: 0.65rem; }

                    .feature-cards, .feature-grid-cards, .plans { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.25rem; margin-top: 2.5rem; }
                    .feature-card, .feature-grid-card, .plan {
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: #050915;
                        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.8);
                    }
                    .feature-card-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.9rem;
                        background: rgba(35, 181, 181, 0.15);
                    }
                    .feature-card h3, .feature-grid-card h3 { margin-top: 1rem; font-size: 0.95rem; font-weight: 600; }
                    .feature-card p, .feature-grid-card p { margin-top: 0.5rem; font-size: 0.8rem; line-height: 1.6; color: #94a3b8; }

                    .feature-grid-card { position: relative; overflow: hidden; }
                    .feature-grid-card-glow { position: absolute; inset: -40% -20% auto; height: 60%; background: radial-gradient(circle, rgba(35, 181, 181, 0.2), transparent 70%); pointer-events: none; }
                    .feature-grid-card-body { position: relative; display: flex; flex-direction: column; gap: 1rem; }
                    .feature-grid-card-head { display: flex; justify-content: space-between; font-size: 0.68rem; }
                    .feature-grid-badge { padding: 0.1rem 0.6rem; border-radius: 999px; background: rgba(35, 181, 181, 0.15); color: var(--brand); }
                    .feature-grid-kind { color: #64748b; }
                    .handle-cloud { display: flex; flex-direction: column; align-items: center; gap: 0.6rem; }
                    .handle-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.4rem; }
                    .handle { padding: 0.2rem 0.6rem; border-radius: 999px; background: rgba(255, 255, 255, 0.06); font-size: 0.7rem; }
                    .handle.primary { background: rgba(35, 181, 181, 0.25); color: #fff; }
                    .search-mock { display: flex; gap: 0.5rem; padding: 0.6rem; border-radius: 1rem; background: rgba(0, 0, 0, 0.4); }
                    .search-mock-field { flex: 1; border-radius: 0.6rem; background: rgba(255, 255, 255, 0.06); }
                    .search-mock-button { padding: 0.35rem 0.8rem; border-radius: 0.6rem; background: #0e6565; font-size: 0.7rem; }
                    .chart-mock-head { display: flex; justify-content: space-between; font-size: 0.65rem; color: #94a3b8; }

                    .pricing-head { text-align: center; display: flex; flex-direction: column; align-items: center; }
                    .plan { position: relative; }
                    .plan.highlight { border-color: var(--brand); box-shadow: 0 0 45px rgba(35, 181, 181, 0.5); }
                    .plan-recommended { position: absolute; top: -0.7rem; right: 1.25rem; padding: 0.15rem 0.7rem; border-radius: 999px; background: var(--brand); color: #02030a; font-size: 0.65rem; font-weight: 600; }
                    .plan-badge { font-size: 0.7rem; color: #94a3b8; }
                    .plan-name { margin-top: 0.25rem; font-size: 1.1rem; font-weight: 600; }
                    .plan-price { margin-top: 1rem; font-size: 1.4rem; font-weight: 600; }
                    .plan-perks { margin-top: 1rem; padding: 0; list-style: none; font-size: 0.78rem; color: #cbd5e1; }
                    .plan-perks li { display: flex; align-items: center; gap: 0.5rem; margin-top: 0.45rem; }
                    .perk-dot { width: 6px; height: 6px; border-radius: 50%; background: var(--brand); }
                    .plan-button {
                        width: 100%;
                        margin-top: 1.25rem;
                        padding: 0.55rem 1rem;
                        border: 0;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.05);
                        color: #f1f5f9;
                        font-size: 0.75rem;
                        font-weight: 600;
                        transition: transform 0.2s ease;
                    }
                    .plan.highlight .plan-button { background: var(--brand); color: #02030a; }
                    .plan-button:hover { transform: translateY(-2px) scale(1.04); }
                    .plan-button:active { transform: scale(0.97); }

                    .lift-xs, .lift-sm, .lift-md, .lift-lg { transition: transform 0.25s cubic-bezier(0.33, 1, 0.68, 1); }
                    .lift-spring { transition: transform 0.35s cubic-bezier(0.34, 1.56, 0.64, 1); }
                    .lift-xs:hover { transform: translateY(-2px); }
                    .lift-sm:hover { transform: translateY(-4px) scale(1.01); }
                    .lift-md:hover { transform: translateY(-4px) scale(1.02); }
                    .lift-lg:hover, .lift-spring:hover { transform: translateY(-6px) scale(1.01); }

                    @media (max-width: 768px) {
                        .floating-card, .dashboard-sidebar { display: none; }
                        .summary-cards, .dashboard-lower, .about, .feature-cards, .feature-grid-cards, .plans {
                            grid-template-columns: 1fr;
                        }
                        .section-head, .dashboard-top { flex-direction: column; align-items: flex-start; }
                    }
                "#}
            </style>
        </div>
    }
}

fn floating_card_body(idx: usize) -> Html {
    if idx == 0 {
        html! {
            <>
                <p class="floating-card-label">{"Next best action"}</p>
                <div class="floating-card-line">
                    <span>{"Upsell expansion"}</span>
                    <span class="floating-card-amount">{"+$9.3k"}</span>
                </div>
                <div class="floating-card-progress"><div></div></div>
            </>
        }
    } else {
        html! {
            <>
                <p class="floating-card-label">{"Automation health"}</p>
                <div class="floating-card-line">
                    <span>{"Flows passing"}</span>
                    <span class="floating-card-accent">{"98%"}</span>
                </div>
                <div class="floating-card-line">
                    <span>{"Alerts"}</span>
                    <span class="floating-card-warn">{"3"}</span>
                </div>
            </>
        }
    }
}

fn dashboard() -> Html {
    html! {
        <div class="dashboard-layout">
            <aside class="dashboard-sidebar">
                <div class="sidebar-title">{"Nova OS"}</div>
                {
                    SIDEBAR_ITEMS.iter().enumerate().map(|(idx, item)| {
                        let active = idx == ACTIVE_SIDEBAR_ITEM;
                        html! {
                            <button class={classes!("sidebar-item", active.then_some("active"))}>
                                <span>{ *item }</span>
                                if active {
                                    <span class="sidebar-dot"></span>
                                }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </aside>

            <div class="dashboard-main">
                <div class="dashboard-top">
                    <div>
                        <p class="dashboard-greeting">{"Welcome back, Sky ✨"}</p>
                        <h3 class="dashboard-title">{"Growth overview"}</h3>
                    </div>
                    <div>
                        <button class="range-button">{"This month"}</button>
                        <button class="range-button muted">{"Last quarter"}</button>
                    </div>
                </div>

                <div class="summary-cards">
                    <SummaryCard label="Total revenue" value="$124,560" trend="+18.4%" accent={Accent::Up} />
                    <SummaryCard label="Active workflows" value="320" trend="+42" accent={Accent::Neutral} />
                    <SummaryCard label="Automation coverage" value="73%" trend="+9.1%" accent={Accent::Up} />
                </div>

                <div class="dashboard-lower">
                    <div class="panel">
                        <div class="panel-head">
                            <span>{"Recent activity"}</span>
                            <span class="muted">{"Last 7 days · All segments"}</span>
                        </div>
                        { for ACTIVITIES.iter().map(|activity| html! { <ActivityRow activity={activity.clone()} /> }) }
                    </div>
                    <div class="panel">
                        <div class="panel-head">
                            <span>{"Automation impact"}</span>
                            <span class="muted">{"MRR vs. manual"}</span>
                        </div>
                        <BarChart heights={vec![40, 55, 70, 65, 80, 88]} base_delay={0.2} stagger={0.06} grow_on={GrowOn::Mount} />
                        <p class="panel-note">
                            {"Teams see "}
                            <span class="accent">{"+38% faster"}</span>
                            {" experiment cycles after week two."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
