use yew::prelude::*;

use crate::animation::dom::{query_all, query_one};
use crate::animation::hooks::{use_counter, use_scenes, SceneBuilder};
use crate::animation::{CounterTween, Cue, Ease, Position, ScrollTrigger, StyleState, Tween};
use crate::content::{use_section_data, WebResultTag};

const PROJECTS_COMPLETED: i64 = 15;
const YEARS_OF_EXPERIENCE: i64 = 6;
const COUNTER_SECONDS: f64 = 2.5;
const STATS_START: &str = "top 80%";

#[function_component(WebResult)]
pub fn web_result() -> Html {
    let container = use_node_ref();
    let projects = use_node_ref();
    let years = use_node_ref();
    let tags = use_section_data::<WebResultTag>();
    let count = tags.items().len();

    use_counter(
        projects.clone(),
        CounterTween::new(PROJECTS_COMPLETED).duration(COUNTER_SECONDS),
        STATS_START,
    );
    use_counter(
        years.clone(),
        CounterTween::new(YEARS_OF_EXPERIENCE).duration(COUNTER_SECONDS),
        STATS_START,
    );

    use_scenes(container.clone(), (), |root| {
        let mut staged = Vec::new();

        if let Some(heading) = query_one(root, ".main-heading") {
            let tween = Tween::new(StyleState::hidden().y(50.0).blur(10.0), StyleState::REST, 1.0);
            staged.push(
                SceneBuilder::new()
                    .add(Some(heading.clone()), tween, Position::At(0.0))
                    .build(Cue::Scroll(ScrollTrigger::once("top 85%")))
                    .triggered_by(heading),
            );
        }

        if let Some(stats) = query_one(root, ".stats") {
            let scale_in = Tween::new(StyleState::hidden().scale(0.9), StyleState::REST, 0.8);
            let divider = Tween::new(StyleState::hidden().scale_y(0.0), StyleState::REST, 0.8).delay(0.3);
            staged.push(
                SceneBuilder::new()
                    .add(Some(stats.clone()), scale_in, Position::At(0.0))
                    .add(query_one(root, ".stat-divider"), divider, Position::At(0.0))
                    .build(Cue::Scroll(ScrollTrigger::once(STATS_START)))
                    .triggered_by(stats),
            );
        }
        staged
    });

    use_scenes(container.clone(), count, |root| {
        let pills = query_all(root, ".tag-pill");
        let Some(first) = pills.first().cloned() else {
            return Vec::new();
        };
        let tween = Tween::new(
            StyleState::hidden().scale(0.5).y(30.0).rotate_x(-45.0),
            StyleState::REST,
            0.6,
        )
        .ease(Ease::back_out(1.5));
        vec![SceneBuilder::new()
            .stagger(pills, tween, 0.08, Position::At(0.0))
            .build(Cue::Scroll(ScrollTrigger::once("top 85%")))
            .triggered_by(first)]
    });

    html! {
        <section ref={container} id="aboutus" class="web-result">
            <div class="web-result-head">
                <h2 class="main-heading">
                    {"Crafting exceptional, well experienced & technology driven strategies to drive impactful results with"}
                </h2>
                <h2 class="tag-list">
                    { for tags.items().iter().map(|tag| html! {
                        <span class="tag-pill">
                            <span class="tag-icon">
                                <img src={tag.image.clone()} alt={tag.name.clone()} />
                            </span>
                            <span class="tag-name">{&tag.name}</span>
                        </span>
                    }) }
                </h2>
            </div>
            <div class="stats">
                <div class="stat">
                    <h2><sup>{"+"}</sup><span ref={projects}>{"0"}</span></h2>
                    <p>{"Total Projects Completed"}</p>
                    <div class="stat-divider"></div>
                </div>
                <div class="stat">
                    <h2><sup>{"+"}</sup><span ref={years}>{"0"}</span></h2>
                    <p>{"Years of Experience"}</p>
                </div>
            </div>
            <style>
                {r#"
                .web-result {
                    padding: 5rem 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .web-result-head {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 0.75rem;
                    color: #fff;
                }
                .main-heading {
                    max-width: 72rem;
                    opacity: 0;
                }
                .tag-list {
                    perspective: 1000px;
                }
                .tag-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin: 0.5rem;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: pointer;
                    opacity: 0;
                    transition: background 0.3s, border-color 0.3s;
                }
                .tag-pill:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(16, 185, 129, 0.3);
                }
                .tag-icon img {
                    width: 2rem;
                    height: 2rem;
                    object-fit: contain;
                    filter: invert(1);
                    opacity: 0.7;
                }
                .tag-name {
                    font-style: italic;
                    font-weight: 400;
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .stats {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    opacity: 0;
                }
                .stat {
                    position: relative;
                    padding: 2rem 4rem;
                }
                .stat h2 {
                    font-size: clamp(3.75rem, 10vw, 10rem);
                    font-weight: 700;
                    margin: 0;
                    color: transparent;
                    background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.2));
                    -webkit-background-clip: text;
                    background-clip: text;
                }
                .stat sup {
                    font-size: 0.4em;
                    color: #34d399;
                }
                .stat p {
                    margin-top: 0.5rem;
                    font-size: 1.125rem;
                    font-family: monospace;
                    color: rgba(52, 211, 153, 0.8);
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .stat-divider {
                    position: absolute;
                    right: 0;
                    top: 50%;
                    height: 10rem;
                    width: 1px;
                    margin-top: -5rem;
                    background: linear-gradient(to bottom, transparent, rgba(16, 185, 129, 0.3), transparent);
                }
                @media (max-width: 768px) {
                    .stats {
                        flex-direction: column;
                    }
                    .stat-divider {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
