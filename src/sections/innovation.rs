use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::dom::{query_all, query_one};
use crate::animation::hooks::{use_scenes, SceneBuilder, Staged};
use crate::animation::{Cue, Position, ScrollTrigger, StyleState, Tween};
use crate::components::collaborate::Collaborate;
use crate::content::{use_section_data, Innovation as Service};

const CTA_STRENGTH: f64 = 0.25;
/// Total spread of the card cascade, however many cards there are.
const CARD_STAGGER_AMOUNT: f64 = 0.6;

/// Per-card offset that spreads `count` starts over `amount` seconds.
pub fn stagger_each(amount: f64, count: usize) -> f64 {
    if count < 2 {
        0.0
    } else {
        amount / (count - 1) as f64
    }
}

fn once(builder: SceneBuilder, start: &str, trigger: HtmlElement) -> Staged {
    builder
        .build(Cue::Scroll(ScrollTrigger::once(start)))
        .triggered_by(trigger)
}

fn title_lines(title: &str) -> Html {
    title
        .split('\n')
        .map(|line| html! { <>{line.to_string()}<br /></> })
        .collect()
}

#[function_component(Innovation)]
pub fn innovation() -> Html {
    let container = use_node_ref();
    let services = use_section_data::<Service>();
    let count = services.items().len();

    use_scenes(container.clone(), (), |root| {
        let mut staged = Vec::new();

        if let Some(heading) = query_one(root, ".section-heading") {
            let tween = Tween::new(StyleState::hidden().y(60.0).scale(0.95), StyleState::REST, 1.0);
            let builder = SceneBuilder::new().add(Some(heading.clone()), tween, Position::At(0.0));
            staged.push(once(builder, "top 85%", heading));
        }

        if let Some(cta) = query_one(root, ".innovation-cta") {
            let tween = Tween::new(StyleState::hidden().y(50.0).scale(0.98), StyleState::REST, 0.8);
            let builder = SceneBuilder::new().add(Some(cta.clone()), tween, Position::At(0.0));
            staged.push(once(builder, "top 85%", cta));
        }
        staged
    });

    use_scenes(container.clone(), count, |root| {
        let cards = query_all(root, ".innovation-card");
        match (cards.is_empty(), query_one(root, ".innovation-grid")) {
            (false, Some(grid)) => {
                let each = stagger_each(CARD_STAGGER_AMOUNT, cards.len());
                let tween = Tween::new(
                    StyleState::hidden().y(80.0).rotate_x(-15.0).scale(0.9),
                    StyleState::REST,
                    0.8,
                );
                let builder = SceneBuilder::new().stagger(cards, tween, each, Position::At(0.0));
                vec![once(builder, "top 80%", grid)]
            }
            _ => Vec::new(),
        }
    });

    html! {
        <section ref={container} id="services" class="innovation">
            <div class="section-heading">
                <h2>{"Where innovation meets "}<span class="accent">{"aesthetics"}</span></h2>
            </div>
            <div class="innovation-grid">
                { for services.items().iter().map(|service| html! {
                    <div
                        class="innovation-card"
                        style={service.bg_color.as_ref().map(|c| format!("--card-tint: {};", c))}
                    >
                        <div class="card-shine"></div>
                        if let Some(image) = &service.image {
                            <div class="card-icon">
                                <img src={image.clone()} alt="" />
                            </div>
                        }
                        <h5>{ title_lines(&service.title) }</h5>
                    </div>
                }) }
            </div>
            <div class="innovation-cta">
                <h4>{"See Our Work in Action."}<br />{"Start Your Creative Journey with Us!"}</h4>
                <Collaborate strength={CTA_STRENGTH} />
            </div>
            <style>
                {r#"
                .innovation {
                    padding: 5rem 2rem;
                    max-width: 90rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 4rem;
                }
                .innovation .section-heading {
                    text-align: center;
                    color: #fff;
                    opacity: 0;
                }
                .innovation .accent {
                    font-style: italic;
                    font-weight: 400;
                    color: rgba(255, 255, 255, 0.7);
                }
                .innovation-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
                    gap: 1.5rem;
                    width: 100%;
                }
                .innovation-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 2.25rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card-tint, rgba(255, 255, 255, 0.05));
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    cursor: pointer;
                    opacity: 0;
                    transition: border-color 0.3s, background 0.3s, box-shadow 0.3s;
                }
                .innovation-card:hover {
                    border-color: rgba(16, 185, 129, 0.3);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .card-shine {
                    position: absolute;
                    top: 0;
                    left: -100%;
                    width: 50%;
                    height: 100%;
                    transform: skewX(-12deg);
                    background: linear-gradient(to right, transparent, #fff);
                    opacity: 0.1;
                }
                .innovation-card:hover .card-shine {
                    animation: card-shine 1s;
                }
                .card-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: transform 0.4s;
                }
                .innovation-card:hover .card-icon {
                    transform: scale(1.2) rotate(10deg);
                }
                .card-icon img {
                    width: 28px;
                    height: 28px;
                    filter: invert(1);
                    opacity: 0.8;
                }
                .innovation-card h5 {
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 1.125rem;
                    font-weight: 500;
                    line-height: 1.6;
                    margin: 0;
                }
                .innovation-card:hover h5 {
                    color: #6ee7b7;
                }
                .innovation-cta {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 2rem 3rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    box-sizing: border-box;
                    opacity: 0;
                }
                .innovation-cta h4 {
                    color: #fff;
                }
                @keyframes card-shine {
                    to { left: 125%; }
                }
                @media (max-width: 1280px) {
                    .innovation-cta {
                        flex-direction: column;
                        text-align: center;
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

    #[test]
    fn cascade_spreads_over_the_amount() {
        assert_eq!(stagger_each(0.6, 0), 0.0);
        assert_eq!(stagger_each(0.6, 1), 0.0);
        assert_eq!(stagger_each(0.6, 2), 0.6);
        assert!((stagger_each(0.6, 4) - 0.2).abs() < 1e-12);
    }
}
