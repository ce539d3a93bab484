use yew::prelude::*;

use crate::animation::dom::{query_all, query_one};
use crate::animation::follow::DEFAULT_STRENGTH;
use crate::animation::hooks::{use_scenes, SceneBuilder};
use crate::animation::text::split_words;
use crate::animation::{Cue, Ease, Position, ScrollTrigger, StyleState, Tween};
use crate::components::collaborate::Collaborate;

fn words(text: &str) -> Html {
    split_words(text)
        .into_iter()
        .map(|word| html! { <span class="word-span">{word}</span> })
        .collect()
}

#[function_component(Solutions)]
pub fn solutions() -> Html {
    let container = use_node_ref();

    use_scenes(container.clone(), (), |root| {
        let Some(card) = query_one(root, ".solution-card") else {
            return Vec::new();
        };

        let reveal = Tween::new(
            StyleState::hidden().y(80.0).scale(0.95).rotate_x(-5.0),
            StyleState::REST,
            1.0,
        );
        let card_scene = SceneBuilder::new()
            .add(Some(card.clone()), reveal, Position::At(0.0))
            .build(Cue::Scroll(ScrollTrigger::once("top 85%")))
            .triggered_by(card.clone());

        let word = Tween::new(StyleState::hidden().y(30.0), StyleState::REST, 0.5);
        let description = Tween::new(StyleState::hidden().y(20.0).blur(5.0), StyleState::REST, 0.8);
        let button = Tween::new(StyleState::hidden().y(20.0).scale(0.9), StyleState::REST, 0.6)
            .ease(Ease::back_out(1.5));
        let content_scene = SceneBuilder::new()
            .stagger(query_all(root, ".word-span"), word, 0.05, Position::At(0.0))
            .add(query_one(root, ".solution-description"), description, Position::At(0.4))
            .add(query_one(root, ".solution-cta"), button, Position::At(0.6))
            .build(Cue::Scroll(ScrollTrigger::once("top 80%")))
            .triggered_by(card);

        vec![card_scene, content_scene]
    });

    html! {
        <section ref={container} class="solutions">
            <div class="solution-card">
                <div class="solution-inner">
                    <h2 class="solution-heading">
                        { words("Innovative Solutions for") }
                        <span class="accent">{ words("Bold Brands") }</span>
                    </h2>
                    <p class="solution-description">
                        {"Looking to elevate your brand? We craft immersive experiences that captivate, engage, and make your business unforgettable in every interaction."}
                    </p>
                    <div class="solution-cta">
                        <Collaborate strength={DEFAULT_STRENGTH} pulse=true class="dark" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .solutions {
                    padding: 5rem 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .solution-card {
                    padding: 7rem 1.5rem;
                    border: 1px solid rgba(27, 29, 30, 0.1);
                    border-radius: 1.5rem;
                    background: linear-gradient(90deg, #CDEFFB 0%, #FFFFFF 33.23%, #FFFFFF 65.77%, #FDEECB 100%);
                    background-size: 200% 100%;
                    animation: solution-ambient 8s ease-in-out infinite alternate;
                    opacity: 0;
                }
                .solution-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #1b1d1e;
                }
                .solution-heading {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                }
                .word-span {
                    display: inline-block;
                    margin-right: 0.5rem;
                    opacity: 0;
                }
                .solution-heading .accent {
                    font-style: italic;
                    font-weight: 400;
                    color: rgba(0, 0, 0, 0.7);
                }
                .solution-description, .solution-cta {
                    opacity: 0;
                }
                @keyframes solution-ambient {
                    from { background-position: 0% 50%; }
                    to { background-position: 200% 50%; }
                }
                "#}
            </style>
        </section>
    }
}
