use postview_shared::{PostState, RequestTracker, SlugState};
use yew::prelude::*;

use crate::api::fetch_blog_post;

/// Fetch the post for `slug` on mount and whenever `slug` changes.
///
/// Each fetch runs under a ticket from a [`RequestTracker`]; a response that
/// arrives after the slug changed (or after unmount) is dropped instead of
/// overwriting newer state. Until the current slug's own outcome lands the
/// hook reports `Loading`, even on the first render after a slug change.
///
/// # Example
/// ```rust,ignore
/// #[function_component(Preview)]
/// fn preview() -> Html {
///     match use_blog_post("hello-world".to_string()) {
///         PostState::Loaded(post) => html! { <h1>{ post.title }</h1> },
///         _ => Html::default(),
///     }
/// }
/// ```
#[hook]
pub fn use_blog_post(slug: String) -> PostState {
    let committed = use_state_eq(SlugState::default);
    let tracker = use_mut_ref(RequestTracker::new);

    {
        let committed = committed.clone();
        use_effect_with(slug.clone(), move |slug| {
            let ticket = tracker.borrow_mut().begin(slug);

            {
                let tracker = tracker.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_blog_post(ticket.slug()).await;
                    if let Err(e) = &result {
                        web_sys::console::error_1(
                            &format!("Failed to fetch blog post `{}`: {}", ticket.slug(), e)
                                .into(),
                        );
                    }

                    let next = tracker.borrow().complete(&ticket, result);
                    match next {
                        Some(next) => committed.set(next),
                        None => web_sys::console::debug_1(
                            &format!("Dropped stale response for `{}`", ticket.slug()).into(),
                        ),
                    }
                });
            }

            move || tracker.borrow_mut().invalidate()
        });
    }

    committed.view_for(&slug)
}

/// Jump the viewport back to the top whenever `key` changes, so opening
/// another post starts at its headline.
#[hook]
pub fn use_scroll_top_on<K>(key: K)
where
    K: PartialEq + 'static,
{
    use_effect_with(key, |_| {
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });
}
