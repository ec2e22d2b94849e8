use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Centered alert text. The failure is terminal for the current slug, so the
/// banner has no dismiss control.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div
            class={classes!("error-banner", "text-center", "text-red-600")}
            role="alert"
            aria-live="assertive"
        >
            { props.message.clone() }
        </div>
    }
}
