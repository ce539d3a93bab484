use web_sys::Element;
use yew::prelude::*;

use crate::animation::dom::{query_all, query_one, viewport_width};
use crate::animation::hooks::{use_path_draw, use_scenes, PathDraw, SceneBuilder};
use crate::animation::{Cue, Ease, Edge, Position, ScrollTrigger, ScrubRange, StyleState, TriggerPoint, Tween};
use crate::content::{use_section_data, Project};

const SLIDE_WIDTH: f64 = 1000.0;
const VINE_HEIGHT: f64 = 800.0;
const VINE_AMPLITUDE: f64 = 100.0;
/// Scroll smoothing for the track and vine, in seconds.
const SCRUB_LAG: f64 = 1.0;

/// A wave through 60% of the height, one bezier per slide, alternating
/// between a trough and a crest.
pub fn vine_path(slides: usize) -> String {
    if slides == 0 {
        return String::new();
    }
    let base = VINE_HEIGHT * 3.0 / 5.0;
    let mut d = format!("M 0 {}", base);
    for i in 0..slides {
        let start = i as f64 * SLIDE_WIDTH;
        let end = start + SLIDE_WIDTH;
        let control = if i % 2 == 0 {
            base + VINE_AMPLITUDE
        } else {
            base - VINE_AMPLITUDE
        };
        d.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            start + SLIDE_WIDTH * 2.0 / 5.0,
            control,
            start + SLIDE_WIDTH * 3.0 / 5.0,
            control,
            end,
            base
        ));
    }
    d
}

/// Shows a project's text while its marker spans the top of the
/// viewport, hiding it again once the marker has scrolled past in either
/// direction.
fn project_trigger() -> ScrollTrigger {
    ScrollTrigger::reversible("top top").end(TriggerPoint::new(Edge::Bottom, 0.0))
}

/// Horizontal scroll distance for `slides` full-width slides.
fn travel(slides: usize) -> f64 {
    slides.saturating_sub(1) as f64 * viewport_width()
}

#[function_component(OnlinePresence)]
pub fn online_presence() -> Html {
    let container = use_node_ref();
    let projects = use_section_data::<Project>();
    let count = projects.items().len();

    use_scenes(container.clone(), count, move |root| {
        if count == 0 {
            return Vec::new();
        }
        let distance = travel(count);
        let mut staged = Vec::new();

        let slide = Tween::new(StyleState::REST, StyleState::REST.x(-distance), 1.0).ease(Ease::Linear);
        let track = SceneBuilder::new().add(query_one(root, ".project-track"), slide, Position::At(0.0));
        if !track.is_empty() {
            let range = ScrubRange::span("top top", distance);
            staged.push(
                track
                    .build(Cue::Scrub { range, lag: SCRUB_LAG })
                    .triggered_by(root.clone()),
            );
        }

        // Each marker starts where its slide reaches the middle of the
        // screen and spans one slide of scrolling.
        let markers = query_all(root, ".project-marker");
        let contents = query_all(root, ".project-content");
        for (marker, content) in markers.into_iter().zip(contents) {
            let reveal = Tween::new(StyleState::hidden().y(50.0), StyleState::REST, 0.8);
            staged.push(
                SceneBuilder::new()
                    .add(Some(content), reveal, Position::At(0.0))
                    .build(Cue::Scroll(project_trigger()))
                    .triggered_by(marker),
            );
        }
        staged
    });

    use_path_draw(container.clone(), count, move |root: &Element| {
        let path = root.query_selector(".vine-path").ok().flatten()?;
        Some(PathDraw::new(
            path,
            root.clone(),
            ScrubRange::span("top top", travel(count)),
            SCRUB_LAG,
        ))
    });

    let items = projects.items();
    let view_box = format!("0 0 {} {}", (count.max(1) as f64) * SLIDE_WIDTH, VINE_HEIGHT);

    html! {
        <section
            ref={container}
            id="work"
            class="online-presence"
            style={format!("height: calc(100vh + {} * 100vw);", count.saturating_sub(1))}
        >
            <div class="project-markers">
                { for (0..count).map(|i| html! {
                    <div
                        class="project-marker"
                        style={format!("top: max(0px, calc({} * 100vw - 50vw - 200px));", i)}
                    ></div>
                }) }
            </div>
            <div class="presence-viewport">
                <div class="project-track">
                    <div class="vine-layer">
                        <svg class="vine-svg" viewBox={view_box} preserveAspectRatio="none">
                            <defs>
                                <linearGradient id="vine-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                                    <stop offset="0%" stop-color="#059669" />
                                    <stop offset="50%" stop-color="#34d399" />
                                    <stop offset="100%" stop-color="#10b981" />
                                </linearGradient>
                            </defs>
                            <path
                                class="vine-path"
                                d={vine_path(count)}
                                pathLength="1"
                                fill="none"
                                stroke="url(#vine-gradient)"
                                stroke-width="8"
                                stroke-linecap="round"
                            />
                        </svg>
                    </div>

                    { for items.iter().enumerate().map(|(index, project)| html! {
                        <div class={classes!("project-item", (index % 2 == 1).then(|| "flipped"))}>
                            <div class="project-visual">
                                <div class="project-frame"></div>
                                <div class="project-image">
                                    <img src={project.image.clone()} alt={project.title.clone()} />
                                </div>
                            </div>
                            <div class="project-content">
                                <div class="project-label">
                                    <span class="project-rule"></span>
                                    <span>{format!("Project {:02}", index + 1)}</span>
                                </div>
                                <h3>{&project.title}</h3>
                                <p>
                                    {format!("Crafting digital experiences that transcend the ordinary. We built a robust, scalable solution for {}.", project.title)}
                                </p>
                                <a
                                    href={project.link.clone().unwrap_or_else(|| "#".to_string())}
                                    target="_blank"
                                    class="case-study-link"
                                >
                                    <span>{"View Case Study"}</span>
                                    <span class="case-study-arrow">{"→"}</span>
                                </a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .online-presence {
                    position: relative;
                }
                .project-markers {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .project-marker {
                    position: absolute;
                    left: 0;
                    width: 1px;
                    height: 100vw;
                }
                .presence-viewport {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }
                .project-track {
                    position: relative;
                    display: flex;
                    height: 100%;
                    width: fit-content;
                    will-change: transform;
                }
                .vine-layer {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 10;
                }
                .vine-svg {
                    width: 100%;
                    height: 100%;
                }
                .vine-path {
                    filter: drop-shadow(0 0 15px rgba(52, 211, 153, 0.8));
                }
                .project-item {
                    position: relative;
                    z-index: 20;
                    width: 100vw;
                    height: 100%;
                    flex-shrink: 0;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    align-items: center;
                    gap: 5rem;
                    padding: 3rem;
                    box-sizing: border-box;
                }
                .project-item.flipped .project-visual {
                    order: 2;
                }
                .project-item.flipped .project-content {
                    order: 1;
                    text-align: right;
                    align-items: flex-end;
                }
                .project-visual {
                    position: relative;
                    aspect-ratio: 4 / 3;
                }
                .project-frame {
                    position: absolute;
                    inset: 0;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    transition: border-color 0.5s;
                }
                .project-visual:hover .project-frame {
                    border-color: rgba(255, 255, 255, 0.3);
                }
                .project-image {
                    position: absolute;
                    inset: 0.5rem;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .project-content {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    opacity: 0;
                }
                .project-label {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    color: #34d399;
                    font-family: monospace;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .project-rule {
                    height: 1px;
                    width: 3rem;
                    background: rgba(16, 185, 129, 0.5);
                }
                .project-content h3 {
                    font-size: clamp(3rem, 6vw, 6rem);
                    color: #fff;
                    line-height: 0.9;
                    margin: 0 0 1.5rem;
                }
                .project-content p {
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 28rem;
                    margin-bottom: 2rem;
                }
                .case-study-link {
                    display: inline-flex;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    background: #fff;
                    color: #000;
                    border-radius: 9999px;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .project-item {
                        grid-template-columns: 1fr;
                        gap: 2rem;
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
    fn vine_alternates_between_trough_and_crest() {
        assert_eq!(vine_path(0), "");
        assert_eq!(
            vine_path(2),
            "M 0 480 C 400 580, 600 580, 1000 480 C 1400 380, 1600 380, 2000 480"
        );
    }

    #[test]
    fn project_text_shows_while_its_marker_crosses_the_top() {
        use crate::animation::trigger::{Bounds, TriggerAction};

        // a marker one slide of scrolling tall, on a 1440x900 screen
        let mut trigger = project_trigger();
        let mut actions = Vec::new();
        for step in 0..=800 {
            let top = 2000.0 - step as f64 * 5.0;
            if let Some(a) = trigger.update(&Bounds::new(0.0, top, 1.0, 1440.0), 900.0) {
                actions.push((top, a));
            }
        }
        assert_eq!(
            actions,
            vec![(0.0, TriggerAction::Play), (-1440.0, TriggerAction::Reverse)]
        );
    }

    #[test]
    fn vine_has_one_curve_per_slide() {
        assert_eq!(vine_path(5).matches(" C ").count(), 5);
        assert!(vine_path(5).ends_with("5000 480"));
    }
}
