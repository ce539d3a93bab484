use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::hooks::{use_magnetic, use_scenes, SceneBuilder};
use crate::animation::{Cue, Ease, Position, StyleState, Tween};

#[derive(Properties, PartialEq)]
pub struct CollaborateProps {
    /// Pull toward the pointer, as a fraction of its distance.
    pub strength: f64,
    /// Breathe slowly while idle.
    #[prop_or_default]
    pub pulse: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// The "Let's Collaborate" call to action.
#[function_component(Collaborate)]
pub fn collaborate(props: &CollaborateProps) -> Html {
    let link = use_node_ref();
    let pulse = props.pulse;

    use_magnetic(link.clone(), props.strength);
    use_scenes(link.clone(), pulse, move |root| {
        if !pulse {
            return Vec::new();
        }
        let breathe = Tween::new(StyleState::REST, StyleState::REST.scale(1.02), 1.5).ease(Ease::SineInOut);
        let link = root.clone().dyn_into::<HtmlElement>().ok();
        vec![SceneBuilder::new()
            .add(link, breathe, Position::At(0.0))
            .build(Cue::Loop { yoyo: true })]
    });

    html! {
        <a ref={link} href="/#contact" class={classes!("cta-button", props.class.clone())}>
            <span class="cta-label">{"Let's Collaborate"}</span>
            <svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg" class="cta-arrow">
                <rect width="32" height="32" rx="16" fill="white" />
                <path
                    d="M11.832 11.3334H20.1654M20.1654 11.3334V19.6668M20.1654 11.3334L11.832 19.6668"
                    stroke="#1B1D1E"
                    stroke-width="1.66667"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
            <style>
                {r#"
                .cta-button {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: fit-content;
                    padding: 0.5rem 0.5rem 0.5rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid #fff;
                    background: #fff;
                    color: #1b1d1e;
                    font-weight: 500;
                    text-decoration: none;
                    overflow: hidden;
                    transition: background 0.2s, color 0.2s;
                }
                .cta-button:hover {
                    background: transparent;
                    color: #fff;
                }
                .cta-label, .cta-arrow {
                    transition: transform 0.2s ease-in-out;
                }
                .cta-button:hover .cta-label {
                    transform: translateX(2.25rem);
                }
                .cta-button:hover .cta-arrow {
                    transform: translateX(-9rem) rotate(45deg);
                }
                .cta-button.dark {
                    background: #1b1d1e;
                    border-color: #1b1d1e;
                    color: #fff;
                }
                .cta-button.dark:hover {
                    background: transparent;
                    color: #1b1d1e;
                }
                "#}
            </style>
        </a>
    }
}
