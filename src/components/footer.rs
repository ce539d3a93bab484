use chrono::Datelike;
use yew::prelude::*;

use super::header::NAV_LINKS;
use crate::animation::hooks::{use_scroll_animation, use_stagger_animation, RevealOptions};

fn copyright(year: i32) -> String {
    format!("© {} Ronminco. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer = use_node_ref();
    let links = use_node_ref();
    let year = chrono::Local::now().year();

    use_scroll_animation(footer.clone(), RevealOptions::default(), ());
    use_stagger_animation(links.clone(), 0.1, ());

    html! {
        <footer ref={footer} id="contact" class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand" data-animate="fade-up">
                    <img src="/logos/Logo_dark.png" alt="Ronminco Logo" />
                    <p>{"A software studio founded by Robert and Michelle, crafting innovative solutions that transform businesses through cutting-edge technology."}</p>
                </div>
                <nav ref={links} class="footer-links">
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} data-stagger="">{*label}</a>
                    }) }
                </nav>
                <a class="footer-mail" href="mailto:hello@ronminco.com" data-animate="fade-left" data-delay="0.2">
                    {"hello@ronminco.com"}
                </a>
            </div>
            <p class="footer-copy">{copyright(year)}</p>
            <style>
                {r#"
                .site-footer {
                    padding: 4rem 2rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .footer-brand {
                    max-width: 24rem;
                }
                .footer-brand img {
                    height: 40px;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a, .footer-mail {
                    color: #fff;
                    text-decoration: none;
                }
                .footer-copy {
                    text-align: center;
                    margin-top: 3rem;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Ronminco. All rights reserved.");
    }
}
