use yew::prelude::*;

use crate::content::{use_section_data, Brand as BrandLogo};

const MARQUEE_SECONDS: u32 = 20;

#[function_component(Brand)]
pub fn brand() -> Html {
    let brands = use_section_data::<BrandLogo>();
    let items = brands.items();

    if items.is_empty() {
        return html! {};
    }

    // The track holds the list twice so the loop point is seamless.
    let logo = |brand: &BrandLogo| {
        html! {
            <div class="brand-item">
                <img src={brand.image.clone()} alt={brand.name.clone().unwrap_or_else(|| "brand".to_string())} />
            </div>
        }
    };

    html! {
        <section class="brand">
            <div class="brand-marquee">
                <div class="brand-track" style={format!("animation-duration: {}s;", MARQUEE_SECONDS)}>
                    { for items.iter().map(logo) }
                    { for items.iter().map(logo) }
                </div>
            </div>
            <style>
                {r#"
                .brand {
                    padding: 3rem 0;
                }
                .brand-marquee {
                    overflow: hidden;
                    width: 100%;
                }
                .brand-track {
                    display: flex;
                    width: max-content;
                    animation-name: brand-scroll;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                .brand-marquee:hover .brand-track {
                    animation-play-state: paused;
                }
                .brand-item {
                    width: 200px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.75rem 1.5rem;
                }
                .brand-item img {
                    max-width: 100%;
                    max-height: 48px;
                    opacity: 0.7;
                    filter: grayscale(1) invert(1);
                }
                @keyframes brand-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </section>
    }
}
