//! Postview: a Yew single-page app that shows one blog post fetched by slug.

mod api;
mod components;
mod config;
mod hooks;
mod models;
mod pages;
mod router;
mod seo;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
