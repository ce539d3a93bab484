use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::dom::{query_all, query_one};
use crate::animation::hooks::{use_scenes, SceneBuilder};
use crate::animation::{Cue, Position, ScrollTrigger, StyleState, Tween};
use crate::content::{use_section_data, FaqEntry};
use crate::state::{Accordion, AccordionAction};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <h4 class="question-text">{&props.question}</h4>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

/// Slide-in direction for the entry at `index`: even from the left.
fn entry_offset(index: usize) -> f64 {
    if index % 2 == 0 {
        -50.0
    } else {
        50.0
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let container = use_node_ref();
    let entries = use_section_data::<FaqEntry>();
    let accordion = use_reducer(Accordion::default);
    let count = entries.items().len();

    use_scenes(container.clone(), (), |root| {
        let Some(heading) = query_one(root, ".section-heading") else {
            return Vec::new();
        };
        let tween = Tween::new(StyleState::hidden().y(50.0), StyleState::REST, 1.0);
        vec![SceneBuilder::new()
            .add(Some(heading.clone()), tween, Position::At(0.0))
            .build(Cue::Scroll(ScrollTrigger::once("top 85%")))
            .triggered_by(heading)]
    });

    use_scenes(container.clone(), count, |root| {
        // All entries share the list's trigger and cascade by index.
        let mut items = SceneBuilder::new();
        for (index, item) in query_all(root, ".faq-item").into_iter().enumerate() {
            let tween = Tween::new(
                StyleState::hidden().x(entry_offset(index)).scale(0.95),
                StyleState::REST,
                0.6,
            )
            .delay(index as f64 * 0.1);
            items = items.add(Some(item), tween, Position::At(0.0));
        }
        match (items.is_empty(), query_one(root, ".faq-container")) {
            (false, Some(list)) => vec![items
                .build(Cue::Scroll(ScrollTrigger::once("top 80%")))
                .triggered_by(list)],
            _ => Vec::new(),
        }
    });

    html! {
        <section ref={container} class="faq">
            <div class="section-heading">
                <h2>{"Got questions? We've got "}<span class="accent">{"answers"}</span></h2>
            </div>
            <div class="faq-container">
                { for entries.items().iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| accordion.dispatch(AccordionAction::Toggle(index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                            open={accordion.is_open(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq {
                    padding: 5rem 2rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .faq .section-heading {
                    max-width: 28rem;
                    margin: 0 auto 5rem;
                    text-align: center;
                    color: #fff;
                    opacity: 0;
                }
                .faq .accent {
                    font-style: italic;
                    font-weight: 400;
                    color: rgba(255, 255, 255, 0.7);
                }
                .faq-container {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    padding: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    border-radius: 0.75rem;
                    opacity: 0;
                    transition: border-color 0.3s, box-shadow 0.3s;
                }
                .faq-item:hover {
                    border-color: rgba(255, 255, 255, 0.7);
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.15);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: rgba(255, 255, 255, 0.8);
                    text-align: left;
                    padding: 0;
                }
                .question-text {
                    margin: 0;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }
                .faq-answer p {
                    margin: 1rem 0 0;
                    color: rgba(255, 255, 255, 0.6);
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
    fn entries_alternate_sides() {
        assert_eq!(entry_offset(0), -50.0);
        assert_eq!(entry_offset(1), 50.0);
        assert_eq!(entry_offset(4), -50.0);
    }
}
