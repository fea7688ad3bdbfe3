use leptos::prelude::*;

use crate::highlight::{highlight, RuleSet};

use super::theme::use_theme;

/// Renders `text` with keywords from `rules` styled by category.
#[component]
pub fn HighlightedText(text: &'static str, rules: &'static RuleSet) -> impl IntoView {
    let theme = use_theme();
    highlight(text, rules)
        .into_iter()
        .map(|token| {
            let category = token.category;
            view! {
                <span class=move || {
                    category.map(|c| c.classes(theme.is_dark())).unwrap_or_default()
                }>{token.text}</span>
            }
        })
        .collect_view()
}
