use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="min-h-screen bg-white py-24 text-center">
            <h2 class="text-2xl font-light">{"404 - Page not found"}</h2>
            <p class="text-gray-600">{"Sorry, the page you are looking for does not exist."}</p>
        </main>
    }
}
