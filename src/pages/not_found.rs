use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of view."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Ronminco"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: #0a0a0a;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                }
                .not-found-link {
                    color: #34d399;
                }
                "#}
            </style>
        </div>
    }
}
