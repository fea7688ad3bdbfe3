use leptos::prelude::*;

use super::theme::use_theme;

/// Hint shown under a demo button while it is hovered.
#[component]
pub fn VideoTooltip(
    is_visible: ReadSignal<bool>,
    #[prop(default = "Watch Demo Video")] text: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <Show when=move || is_visible.get()>
            <div
                role="tooltip"
                class=move || {
                    if theme.is_dark() {
                        "absolute -bottom-10 left-1/2 -translate-x-1/2 px-3 py-1.5 rounded-md whitespace-nowrap text-xs font-medium z-10 bg-black border border-indigo-500/30 text-indigo-400"
                    } else {
                        "absolute -bottom-10 left-1/2 -translate-x-1/2 px-3 py-1.5 rounded-md whitespace-nowrap text-xs font-medium z-10 bg-white border border-indigo-300/50 text-indigo-600"
                    }
                }
            >
                "▶ "
                {text}
            </div>
        </Show>
    }
}
