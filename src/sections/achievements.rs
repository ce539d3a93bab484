use yew::prelude::*;

use crate::animation::counter::{parse_target, DEFAULT_COUNTER_DURATION};
use crate::animation::dom::{query_all, query_one};
use crate::animation::hooks::{use_counter, use_scenes, SceneBuilder};
use crate::animation::{CounterTween, Cue, Ease, Edge, Position, ScrollTrigger, StyleState, TriggerPoint, Tween};
use crate::content::{use_section_data, Achievement};

const TRIGGER_START: &str = "top 70%";

/// Plays on the way down and reverses only once the section has left
/// the screen, or when scrolling back up above the start.
fn section_trigger() -> ScrollTrigger {
    ScrollTrigger::reversible(TRIGGER_START).end(TriggerPoint::new(Edge::Bottom, 0.0))
}

fn header_tween() -> Tween {
    Tween::new(StyleState::hidden().y(50.0), StyleState::REST, 0.8)
}

#[derive(Properties, PartialEq)]
struct StatProps {
    value: &'static str,
    label: &'static str,
}

/// A headline number that counts up to `value` ("50+") on first view.
#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    let number = use_node_ref();
    use_counter(
        number.clone(),
        CounterTween::new(parse_target(props.value)).suffix("+"),
        TRIGGER_START,
    );

    html! {
        <div class="achievement-stat">
            <h3 ref={number} class="stat-number">{props.value}</h3>
            <p>{props.label}</p>
        </div>
    }
}

fn card(item: &Achievement) -> Html {
    html! {
        <div class="achievement-card">
            <div class="achievement-glow"></div>
            <div class="achievement-body">
                if let Some(image) = &item.image {
                    <img class="achievement-logo" src={image.clone()} alt={item.title.clone()} />
                }
                if let Some(year) = &item.year {
                    <span class="achievement-year">{year}</span>
                }
                <h4>{&item.title}</h4>
                if let Some(description) = &item.description {
                    <p>{description}</p>
                }
            </div>
        </div>
    }
}

#[function_component(Achievements)]
pub fn achievements() -> Html {
    let container = use_node_ref();
    let achievements = use_section_data::<Achievement>();
    let count = achievements.items().len();

    use_scenes(container.clone(), (), |root| {
        let header = SceneBuilder::new().add(query_one(root, ".section-header"), header_tween(), Position::At(0.0));
        if header.is_empty() {
            return Vec::new();
        }
        vec![header
            .build(Cue::Scroll(section_trigger()))
            .triggered_by(root.clone())]
    });

    // The counters run alongside the header; cards land half a second
    // before they finish.
    use_scenes(container.clone(), count, |root| {
        let cards = Tween::new(StyleState::hidden().y(100.0).scale(0.9), StyleState::REST, 0.8)
            .ease(Ease::back_out(1.2));
        let grid = SceneBuilder::new().stagger(
            query_all(root, ".achievement-card"),
            cards,
            0.1,
            Position::At(DEFAULT_COUNTER_DURATION - 0.5),
        );
        if grid.is_empty() {
            return Vec::new();
        }
        vec![grid
            .build(Cue::Scroll(section_trigger()))
            .triggered_by(root.clone())]
    });

    html! {
        <section ref={container} id="awards" class="achievements">
            <div class="achievements-bg"></div>
            <div class="achievements-inner">
                <div class="section-header">
                    <div class="achievements-title">
                        <p class="eyebrow">{"Recognition"}</p>
                        <h2>{"Award-winning "}<span class="muted">{"excellence"}</span>{" recognized globally."}</h2>
                    </div>
                    <div class="achievement-stats">
                        <Stat value="50+" label="Awards Won" />
                        <Stat value="200+" label="Projects" />
                    </div>
                </div>
                <div class="achievement-grid">
                    { for achievements.items().iter().map(card) }
                </div>
            </div>
            <style>
                {r#"
                .achievements {
                    position: relative;
                    padding: 8rem 2rem;
                    background: #0a0a0a;
                    overflow: hidden;
                }
                .achievements-bg {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    width: 1000px;
                    height: 1000px;
                    transform: translateX(-50%);
                    border-radius: 9999px;
                    background: linear-gradient(to bottom, rgba(16, 185, 129, 0.1), transparent);
                    filter: blur(64px);
                    opacity: 0.3;
                    pointer-events: none;
                }
                .achievements-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                }
                .section-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2.5rem;
                    padding-bottom: 3rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .achievements-title {
                    max-width: 42rem;
                    color: #fff;
                }
                .eyebrow {
                    color: #10b981;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .muted {
                    font-style: italic;
                    font-family: serif;
                    color: #6b7280;
                }
                .achievement-stats {
                    display: flex;
                    gap: 3rem;
                }
                .stat-number {
                    font-size: 3rem;
                    color: #fff;
                    margin: 0;
                }
                .achievement-stat p {
                    font-size: 0.875rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .achievement-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                    gap: 3rem;
                }
                .achievement-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: border-color 0.3s;
                }
                .achievement-card:hover {
                    border-color: rgba(16, 185, 129, 0.3);
                }
                .achievement-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, rgba(16, 185, 129, 0.05), transparent);
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .achievement-card:hover .achievement-glow {
                    opacity: 1;
                }
                .achievement-body {
                    position: relative;
                    z-index: 10;
                    color: #fff;
                }
                .achievement-logo {
                    height: 2.5rem;
                    margin-bottom: 1rem;
                }
                .achievement-year {
                    font-family: monospace;
                    color: #10b981;
                }
                .achievement-body p {
                    color: rgba(255, 255, 255, 0.6);
                }
                @media (max-width: 768px) {
                    .section-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::trigger::Bounds;
    use crate::animation::{Scene, Timeline};

    const VH: f64 = 900.0;

    // a 1200px tall section
    fn at(top: f64) -> Bounds {
        Bounds::new(0.0, top, 1200.0, 1200.0)
    }

    fn settle(scene: &mut Scene) {
        while scene.advance(1.0 / 60.0) {}
    }

    #[test]
    fn stays_revealed_until_the_section_leaves_the_screen() {
        let mut scene = Scene::new(Timeline::single(header_tween()), Cue::Scroll(section_trigger()));
        scene.on_scroll(&at(600.0), VH);
        settle(&mut scene);
        assert_eq!(scene.frame()[0].1, StyleState::REST);

        // the bottom 150px of the section still in view
        scene.on_scroll(&at(-1050.0), VH);
        settle(&mut scene);
        assert_eq!(scene.frame()[0].1, StyleState::REST);

        // fully scrolled past
        scene.on_scroll(&at(-1300.0), VH);
        settle(&mut scene);
        assert_eq!(scene.frame()[0].1, header_tween().from);
    }

    #[test]
    fn scrolling_back_above_the_start_reverses() {
        let mut scene = Scene::new(Timeline::single(header_tween()), Cue::Scroll(section_trigger()));
        scene.on_scroll(&at(600.0), VH);
        settle(&mut scene);
        scene.on_scroll(&at(700.0), VH);
        settle(&mut scene);
        assert_eq!(scene.frame()[0].1, header_tween().from);
    }
}
