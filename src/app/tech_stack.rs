use leptos::prelude::*;

use crate::data::{tech_category, DEFAULT_TECH_CATEGORY, TECH_STACKS};

use super::theme::use_theme;

#[component]
pub fn TechStackShowcase() -> impl IntoView {
    let theme = use_theme();
    let (active_category, set_active_category) = signal(DEFAULT_TECH_CATEGORY);

    view! {
        <section id="tech-stack" class="my-12">
            <h2 class="text-3xl font-bold mb-8 text-center">"Tech Stack"</h2>
            <div class="flex flex-col md:flex-row gap-6">
                <nav class="flex md:flex-col flex-wrap gap-2 md:w-1/3">
                    {TECH_STACKS
                        .iter()
                        .map(|category| {
                            let title = category.title;
                            view! {
                                <button
                                    class=move || {
                                        match (active_category.get() == title, theme.is_dark()) {
                                            (true, true) => "px-4 py-2 rounded-lg text-left bg-indigo-500/20 text-indigo-300",
                                            (true, false) => "px-4 py-2 rounded-lg text-left bg-indigo-100 text-indigo-700",
                                            (false, _) => "px-4 py-2 rounded-lg text-left opacity-70 hover:opacity-100",
                                        }
                                    }
                                    aria-pressed=move || (active_category.get() == title).to_string()
                                    on:click=move |_| set_active_category(title)
                                >
                                    {title}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-2 md:w-2/3">
                    {move || {
                        tech_category(active_category.get())
                            .map(|category| {
                                category
                                    .skills
                                    .iter()
                                    .copied()
                                    .map(|skill| {
                                        view! {
                                            <div class="p-2.5 rounded-lg border border-indigo-500/30 font-medium">
                                                {skill}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </div>
            </div>
        </section>
    }
}
