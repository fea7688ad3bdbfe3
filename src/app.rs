mod certificates;
mod games;
mod highlighted;
mod homepage;
mod projects;
mod tech_stack;
mod theme;
mod video_player;
mod video_tooltip;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;
use theme::{provide_theme, ThemeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title formatter=|title| format!("Abhinav Dixit - {title}") />
        <Router>
            <div class=move || theme.page_classes()>
                <header class="flex justify-end mx-auto px-4 py-4 max-w-7xl">
                    <ThemeToggle />
                </header>
                <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl px-4">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    view! {
        <footer class="py-6 text-center text-xs opacity-60">
            <span>"Built " {built}</span>
        </footer>
    }
}
