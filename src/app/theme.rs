use leptos::prelude::*;

/// Light/dark mode, shared with every component through context.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    is_dark: RwSignal<bool>,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        self.is_dark.update(|dark| *dark = !*dark);
        log::debug!("theme switched, dark = {}", self.is_dark.get_untracked());
    }

    pub fn page_classes(&self) -> &'static str {
        page_classes(self.is_dark())
    }
}

fn page_classes(is_dark: bool) -> &'static str {
    if is_dark {
        "min-h-screen flex flex-col bg-black text-gray-100"
    } else {
        "min-h-screen flex flex-col bg-white text-gray-900"
    }
}

pub fn provide_theme() -> Theme {
    let theme = Theme {
        is_dark: RwSignal::new(true),
    };
    provide_context(theme);
    theme
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-full border border-gray-500/40"
            aria-label=move || {
                if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_classes() {
        assert!(page_classes(true).contains("bg-black"));
        assert!(page_classes(false).contains("bg-white"));
    }
}
