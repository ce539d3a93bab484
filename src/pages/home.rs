use yew::prelude::*;

use crate::sections::{
    achievements::Achievements, brand::Brand, customer_stories::CustomerStories, faq::Faq,
    hero::Hero, innovation::Innovation, online_presence::OnlinePresence, solutions::Solutions,
    web_result::WebResult,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            // Fixed background for everything below the hero
            <div class="page-background">
                <video autoplay=true muted=true loop=true playsinline=true>
                    <source src="/videos/main.mp4" type="video/mp4" />
                </video>
                <div class="page-background-dim"></div>
            </div>

            <Hero />
            <div class="hero-transition"></div>

            <Brand />
            <WebResult />
            <Innovation />
            <OnlinePresence />
            <CustomerStories />
            <Faq />
            <Achievements />
            <Solutions />

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    font-family: system-ui, -apple-system, sans-serif;
                }
                .home {
                    position: relative;
                }
                .page-background {
                    position: fixed;
                    inset: 0;
                    z-index: -50;
                }
                .page-background video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .page-background-dim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .hero-transition {
                    position: absolute;
                    top: 100vh;
                    left: 0;
                    width: 100%;
                    height: 33vh;
                    background: linear-gradient(to bottom, #000, rgba(0, 0, 0, 0.5), transparent);
                    z-index: 40;
                    pointer-events: none;
                }
                "#}
            </style>
        </main>
    }
}
