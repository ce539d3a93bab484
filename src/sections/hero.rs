use log::{debug, warn};
use web_sys::{Element, Event, HtmlElement, HtmlVideoElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::dom::{query_all, query_one};
use crate::animation::follow::DEFAULT_STRENGTH;
use crate::animation::hooks::{split_text, use_magnetic, use_scenes, SceneBuilder, Staged};
use crate::animation::{Cue, Ease, Position, Scene, ScrubRange, StyleState, Timeline, Tween};
use crate::state::{VideoAction, VideoState};

const COMPANY_VALUES: [&str; 4] = [
    "INNOVATIVE SOLUTIONS",
    "TECHNICAL EXCELLENCE",
    "CLIENT FOCUSED",
    "FUTURE READY",
];

fn intro(root: &Element) -> SceneBuilder {
    let logo = Tween::new(StyleState::hidden().x(-50.0).scale(0.8), StyleState::REST, 0.8);
    let chars = Tween::new(
        StyleState::hidden().y(100.0).rotate_x(-90.0),
        StyleState::REST,
        0.8,
    )
    .ease(Ease::back_out(1.2));
    let values = Tween::new(
        StyleState::hidden().x(-30.0).scale(0.9),
        StyleState::REST.opacity(0.8),
        0.6,
    )
    .ease(Ease::elastic_out(1.0, 0.5));
    let subtitle = Tween::new(StyleState::hidden().y(30.0).blur(10.0), StyleState::REST, 0.8);
    let bottom = Tween::new(StyleState::hidden().y(30.0), StyleState::REST, 0.6);

    SceneBuilder::new()
        .add(query_one(root, ".hero-logo"), logo, Position::At(0.2))
        .stagger(query_all(root, ".hero-title .split-char"), chars, 0.04, Position::At(0.4))
        .stagger(query_all(root, ".company-value"), values, 0.1, Position::At(0.6))
        .add(query_one(root, ".hero-subtitle"), subtitle, Position::At(1.2))
        .add(query_one(root, ".bottom-info"), bottom, Position::At(1.4))
}

/// Ties `element` to the hero's scroll-out, from rest to `to`.
fn scrubbed(element: Option<HtmlElement>, to: StyleState, root: &Element) -> Option<Staged> {
    let element = element?;
    let tween = Tween::new(StyleState::REST, to, 1.0).ease(Ease::Linear);
    let range = ScrubRange::new("top top", "bottom top");
    let scene = Scene::new(Timeline::single(tween), Cue::Scrub { range, lag: 0.0 });
    Some(Staged::new(scene, vec![element]).triggered_by(root.clone()))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();
    let video_ref = use_node_ref();
    let cta = use_node_ref();
    let video = use_reducer(VideoState::default);

    {
        let video = video.clone();
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                    element.set_muted(true);
                    video.dispatch(VideoAction::Observed(element.ready_state()));
                }
                || ()
            },
            (),
        );
    }
    {
        let video = video.clone();
        use_event(video_ref.clone(), "canplay", move |_: Event| {
            video.dispatch(VideoAction::CanPlay);
        });
    }
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                        debug!("Hero video ready, starting playback");
                        if let Err(e) = element.play() {
                            warn!("Video autoplay failed: {:?}", e);
                        }
                    }
                }
                || ()
            },
            video.is_ready(),
        );
    }

    use_scenes(container.clone(), (), move |root| {
        let mut staged = vec![intro(root).build(Cue::Mount)];

        if let Some(button) = query_one(root, ".hero-cta") {
            let pulse = Tween::new(StyleState::REST, StyleState::REST.scale(1.02), 1.5)
                .ease(Ease::SineInOut);
            staged.push(
                SceneBuilder::new()
                    .add(Some(button), pulse, Position::At(0.0))
                    .build(Cue::Loop { yoyo: true }),
            );
        }

        staged.extend(scrubbed(
            query_one(root, ".hero-overlay"),
            StyleState::REST.opacity(0.8),
            root,
        ));
        staged.extend(scrubbed(
            query_one(root, ".hero-title"),
            StyleState::REST.y(100.0).opacity(0.3).scale(0.95),
            root,
        ));
        staged
    });
    use_magnetic(cta.clone(), DEFAULT_STRENGTH);

    html! {
        <section ref={container} class="hero">
            <div class="hero-background">
                <video
                    ref={video_ref}
                    class={classes!("hero-video", video.is_ready().then(|| "loaded"))}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    preload="auto"
                >
                    <source src="/videos/Hero.mp4" type="video/mp4" />
                </video>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <div class="hero-logo">
                    <a href="/">
                        <img src="/logos/Logo_dark.png" alt="Ronminco Logo" />
                    </a>
                </div>

                <div class="hero-main">
                    <div class="company-values">
                        { for COMPANY_VALUES.iter().map(|value| html! {
                            <div class="company-value">{*value}</div>
                        }) }
                    </div>
                    <div class="hero-center">
                        <h1 class="hero-title">{ split_text("RONMINCO") }</h1>
                        <div class="hero-subtitle">
                            {"A software studio crafting innovative solutions that transform businesses through cutting-edge technology and forward-thinking development."}
                        </div>
                    </div>
                    <div class="hero-spacer"></div>
                </div>

                <div class="bottom-info">
                    <div class="bottom-facts">
                        <div>{"EST. 2025"}</div>
                        <div>{"FOUNDED BY ROBERT & MICHELLE"}</div>
                        <div>{"SOFTWARE SOLUTIONS"}</div>
                    </div>
                    <a ref={cta} href="/#contact" class="hero-cta">{"GET IN TOUCH"}</a>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .hero-video.loaded {
                    opacity: 1;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.6));
                }
                .hero-content {
                    position: relative;
                    z-index: 20;
                    height: 100%;
                    width: 100%;
                }
                .hero-logo {
                    position: absolute;
                    top: 0;
                    left: 0;
                    padding: 2.5rem;
                }
                .hero-logo img {
                    height: 48px;
                    width: auto;
                }
                .hero-main {
                    height: 100%;
                    display: grid;
                    grid-template-columns: 3fr 6fr 3fr;
                    align-items: center;
                    gap: 3rem;
                    padding: 0 5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .company-values {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .company-value {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    opacity: 0;
                }
                .hero-center {
                    text-align: center;
                }
                .hero-title {
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    line-height: 1;
                    white-space: nowrap;
                    perspective: 1000px;
                }
                .hero-title .split-char {
                    display: inline-block;
                    opacity: 0;
                }
                .hero-subtitle {
                    margin-top: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    opacity: 0;
                }
                .bottom-info {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 2.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    opacity: 0;
                }
                .bottom-facts {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                }
                .hero-cta {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    color: #fff;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .hero-cta:hover {
                    background: rgba(255, 255, 255, 0.2);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                @media (max-width: 1024px) {
                    .hero-main {
                        grid-template-columns: 1fr;
                        padding: 0 1.5rem;
                    }
                    .hero-spacer {
                        display: none;
                    }
                }
                @media (max-width: 768px) {
                    .hero-cta {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
