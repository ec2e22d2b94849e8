use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[cfg(feature = "mock")]
    #[at("/postview/blog/:slug")]
    BlogPost { slug: String },

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/postview/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::BlogPost {
            slug,
        } => {
            html! { <pages::blog_post::BlogPostPage slug={slug} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
