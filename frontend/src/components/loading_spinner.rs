use yew::prelude::*;

const SPINNER_SIZE_PX: u32 = 40;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

/// Centered spinner with a visible label.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", SPINNER_SIZE_PX);

    html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-4", "p-6", "text-center")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-gray-200",
                    "border-t-gray-600",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
                aria-hidden="true"
            />
            <span class={classes!("text-gray-600")}>{ props.label.clone() }</span>
        </div>
    }
}
