use yew::prelude::*;

use crate::animation::dom::query_all;
use crate::animation::hooks::{split_text, use_parallax, use_scenes, use_text_reveal, use_tilt, SceneBuilder};
use crate::animation::{Cue, Ease, Position, ScrollTrigger, ScrubRange, StyleState, Tween};

const MAX_TILT: f64 = 5.0;
const TILT_LIFT: f64 = 1.02;

const QUOTE_PATH: &str = "M14.017 21L14.017 18C14.017 16.896 14.353 15.925 15.025 15.087C15.697 14.249 16.713 13.593 18.073 13.119C17.737 13.167 17.353 13.191 16.921 13.191C15.529 13.191 14.281 12.699 13.177 11.715C12.073 10.731 11.521 9.499 11.521 8.019C11.521 6.555 12.061 5.303 13.141 4.263C14.221 3.223 15.529 2.703 17.065 2.703C18.673 2.703 20.005 3.267 21.061 4.395C22.117 5.523 22.645 6.947 22.645 8.667C22.645 10.987 22.045 13.187 20.845 15.267C19.645 17.347 17.369 19.259 14.017 21ZM2.009 21L2.009 18C2.009 16.896 2.345 15.925 3.017 15.087C3.689 14.249 4.705 13.593 6.065 13.119C5.729 13.167 5.345 13.191 4.913 13.191C3.521 13.191 2.273 12.699 1.169 11.715C0.065 10.731 -0.487 9.499 -0.487 8.019C-0.487 6.555 0.053 5.303 1.133 4.263C2.213 3.223 3.521 2.703 5.057 2.703C6.665 2.703 7.997 3.267 9.053 4.395C10.109 5.523 10.637 6.947 10.637 8.667C10.637 10.987 10.037 13.187 8.837 15.267C7.637 17.347 5.361 19.259 2.009 21Z";

#[derive(Properties, PartialEq)]
struct StoryCardProps {
    #[prop_or_default]
    class: Classes,
    children: Children,
}

/// The outer element takes the scroll reveal; the inner one tilts.
#[function_component(StoryCard)]
fn story_card(props: &StoryCardProps) -> Html {
    let tilt = use_node_ref();
    use_tilt(tilt.clone(), MAX_TILT, TILT_LIFT);

    html! {
        <div class="story-card">
            <div ref={tilt} class={classes!("story-tilt", props.class.clone())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn quote_mark(class: &'static str) -> Html {
    html! {
        <svg class={class} fill="currentColor" viewBox="0 0 24 24">
            <path d={QUOTE_PATH} />
        </svg>
    }
}

#[function_component(CustomerStories)]
pub fn customer_stories() -> Html {
    let container = use_node_ref();
    let eyebrow = use_node_ref();
    let glow_left = use_node_ref();
    let glow_right = use_node_ref();

    use_text_reveal(eyebrow.clone());
    use_parallax(glow_left.clone(), 0.2);
    use_parallax(glow_right.clone(), -0.15);

    use_scenes(container.clone(), (), |root| {
        let mut staged = Vec::new();

        let columns = [(".parallax-col-odd", -100.0, 1.5), (".parallax-col-even", 50.0, 1.0)];
        for (selector, drift, lag) in columns {
            for column in query_all(root, selector) {
                let tween = Tween::new(StyleState::REST, StyleState::REST.y(drift), 1.0).ease(Ease::Linear);
                let range = ScrubRange::new("top bottom", "bottom top");
                staged.push(
                    SceneBuilder::new()
                        .add(Some(column), tween, Position::At(0.0))
                        .build(Cue::Scrub { range, lag })
                        .triggered_by(root.clone()),
                );
            }
        }

        for card in query_all(root, ".story-card") {
            let reveal = Tween::new(StyleState::hidden().scale(0.9).y(50.0), StyleState::REST, 0.8);
            staged.push(
                SceneBuilder::new()
                    .add(Some(card.clone()), reveal, Position::At(0.0))
                    .build(Cue::Scroll(ScrollTrigger::once("top 85%")))
                    .triggered_by(card),
            );
        }
        staged
    });

    html! {
        <section ref={container} class="customer-stories">
            <div ref={glow_left} class="stories-glow stories-glow-left"></div>
            <div ref={glow_right} class="stories-glow stories-glow-right"></div>

            <div class="stories-header">
                <h2 ref={eyebrow}>{ split_text("Testimonials") }</h2>
                <h3>{"Voices of "}<span class="stories-accent">{"satisfaction"}</span>{" from our partners."}</h3>
            </div>

            <div class="stories-grid">
                <div class="parallax-col-odd">
                    <StoryCard class="story-quote">
                        <div class="story-stars">
                            { for (0..5).map(|_| html! { <span>{"★"}</span> }) }
                        </div>
                        <h4>{"\"Ronminco's expertise transformed my vision into success! The attention to detail is unmatched.\""}</h4>
                        <div class="story-author">
                            <div class="story-avatar gradient"></div>
                            <div>
                                <p class="story-name">{"Phoebe Jiao"}</p>
                                <p class="story-role">{"Founder, Propeak Finance"}</p>
                            </div>
                        </div>
                    </StoryCard>

                    <StoryCard class="story-image">
                        <img src="/images/home/customerStories/creativity_img.jpg" alt="Creative Work" />
                        <div class="story-image-caption">
                            <p>{"\"A game changer for our brand identity.\""}</p>
                        </div>
                    </StoryCard>
                </div>

                <div class="parallax-col-even">
                    <StoryCard class="story-stat">
                        <div>
                            <p class="story-stat-label">{"Client Retention"}</p>
                            <h2 class="story-stat-value">{"98%"}</h2>
                        </div>
                        <p class="story-stat-note">{"Of our clients choose to work with us on multiple projects."}</p>
                    </StoryCard>

                    <StoryCard class="story-main">
                        <div class="story-quote-bg">{ quote_mark("quote-large") }</div>
                        <div>
                            { quote_mark("quote-small") }
                            <h3>{"\"Exceptional creativity and precision. They didn't just build a website; they built a legacy.\""}</h3>
                        </div>
                        <div class="story-author bordered">
                            <div class="story-avatar">
                                <img src="/images/home/avatar_1.jpg" alt="Michelle Tan" />
                            </div>
                            <div>
                                <p class="story-name">{"Michelle Tan"}</p>
                                <p class="story-role">{"CEO, Ronminco"}</p>
                            </div>
                        </div>
                    </StoryCard>
                </div>
            </div>

            <style>
                {r#"
                .customer-stories {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 2rem;
                    overflow: hidden;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .stories-glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(100px);
                    pointer-events: none;
                }
                .stories-glow-left {
                    top: 5rem;
                    left: 2.5rem;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(16, 185, 129, 0.1);
                }
                .stories-glow-right {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(59, 130, 246, 0.1);
                }
                .stories-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }
                .stories-header h2 {
                    font-size: 0.875rem;
                    font-family: monospace;
                    color: #10b981;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .stories-header h3 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    color: #fff;
                }
                .stories-header .split-char {
                    display: inline-block;
                }
                .stories-accent {
                    font-style: italic;
                    font-family: serif;
                    color: #34d399;
                }
                .stories-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .parallax-col-odd, .parallax-col-even {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .parallax-col-odd {
                    margin-top: 5rem;
                }
                .story-card {
                    opacity: 0;
                    perspective: 1000px;
                }
                .story-tilt {
                    position: relative;
                    padding: 2.5rem;
                    border-radius: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                    color: #fff;
                    transition: border-color 0.3s, background 0.3s;
                }
                .story-tilt:hover {
                    border-color: rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.01);
                }
                .story-stars {
                    color: #facc15;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .story-quote h4 {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .story-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .story-author.bordered {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 1.5rem;
                    margin-top: auto;
                }
                .story-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .story-avatar.gradient {
                    background: linear-gradient(135deg, #34d399, #3b82f6);
                }
                .story-avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .story-name {
                    font-weight: 700;
                    margin: 0;
                }
                .story-role {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin: 0.25rem 0 0;
                }
                .story-image {
                    height: 500px;
                    padding: 0;
                    border: none;
                }
                .story-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .story-image:hover img {
                    transform: scale(1.1);
                }
                .story-image-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    font-size: 1.25rem;
                    font-style: italic;
                    font-weight: 300;
                }
                .story-stat {
                    min-height: 300px;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    border-color: rgba(16, 185, 129, 0.1);
                }
                .story-stat-label {
                    color: #34d399;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .story-stat-value {
                    font-size: 6rem;
                    color: #d1fae5;
                    margin: 0 0 1rem;
                    transform-origin: left;
                    transition: transform 0.5s;
                }
                .story-stat:hover .story-stat-value {
                    transform: scale(1.1);
                }
                .story-stat-note {
                    color: rgba(209, 250, 229, 0.6);
                }
                .story-main {
                    min-height: 400px;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: 3rem;
                }
                .story-main h3 {
                    font-size: clamp(1.875rem, 3.5vw, 3rem);
                    line-height: 1.1;
                }
                .story-quote-bg {
                    position: absolute;
                    top: -2.5rem;
                    right: -2.5rem;
                    color: rgba(16, 185, 129, 0.1);
                }
                .quote-large {
                    width: 200px;
                    height: 200px;
                }
                .quote-small {
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-bottom: 2rem;
                    color: #10b981;
                }
                @media (max-width: 1024px) {
                    .stories-grid {
                        grid-template-columns: 1fr;
                    }
                    .parallax-col-odd {
                        margin-top: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
