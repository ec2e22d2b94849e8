use postview_shared::{PostState, PostView};
use yew::prelude::*;

use crate::{
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner, tag_list::TagList},
    hooks::{use_blog_post, use_scroll_top_on},
    seo,
    utils::locale_date,
};

#[derive(Properties, Clone, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

fn page_shell(inner: Html) -> Html {
    html! {
        <div class="min-h-screen bg-white py-24">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                { inner }
            </div>
        </div>
    }
}

fn render_post(view: &PostView) -> Html {
    html! {
        <div class="min-h-screen bg-white py-24">
            <article class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <div class="text-sm text-gray-600 mb-4">{ view.meta_line() }</div>
                    <h1 class="text-4xl font-light mb-6">{ view.title.clone() }</h1>
                    <div class="flex items-center text-gray-600">
                        <span>{ view.byline.clone() }</span>
                    </div>
                </div>

                <div class="mb-12">
                    <img
                        src={view.image_src.clone()}
                        alt={view.image_alt.clone()}
                        class="w-full h-[500px] object-cover"
                    />
                </div>

                <div class="prose prose-lg max-w-none">
                    { for view.paragraphs.iter().enumerate().map(|(index, paragraph)| html! {
                        <p key={index} class="mb-6 text-gray-800 leading-relaxed">
                            { paragraph.clone() }
                        </p>
                    }) }
                </div>

                <div class="mt-12 pt-8 border-t">
                    <TagList tags={view.tags.clone()} />
                </div>
            </article>
        </div>
    }
}

/// One of the three mutually exclusive views for `state`.
fn render_state(state: &PostState, format_date: fn(&str) -> String) -> Html {
    match state {
        PostState::Loading => page_shell(html! { <LoadingSpinner /> }),
        PostState::Errored(message) => {
            page_shell(html! { <ErrorBanner message={message.clone()} /> })
        },
        PostState::Loaded(post) => {
            render_post(&PostView::with_date(post, format_date(&post.created_at)))
        },
    }
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    use_scroll_top_on(props.slug.clone());
    let state = use_blog_post(props.slug.clone());

    use_effect_with(state.clone(), |state| {
        match state.post() {
            Some(post) => seo::apply_post_seo(post),
            None => seo::apply_fallback_seo(),
        }
        || ()
    });

    render_state(&state, locale_date)
}
