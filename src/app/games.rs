use leptos::prelude::*;

use crate::data::{Game, GAMES};
use crate::highlight::{RuleSet, GAME_RULES};

use super::highlighted::HighlightedText;
use super::theme::use_theme;

#[component]
pub fn GamesShowcase() -> impl IntoView {
    view! {
        <section id="games" class="my-12">
            <h2 class="text-3xl font-bold mb-8 text-center">"Games"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {GAMES.iter().map(|game| view! { <GameCard game /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GameCard(game: &'static Game) -> impl IntoView {
    let theme = use_theme();
    let rules: &'static RuleSet = &GAME_RULES;
    view! {
        <a
            href=game.path
            class=move || {
                if theme.is_dark() {
                    "block relative p-6 rounded-lg border h-full bg-black/90 border-indigo-500/30 hover:border-indigo-400"
                } else {
                    "block relative p-6 rounded-lg border h-full bg-white/90 border-indigo-300/50 hover:border-indigo-500"
                }
            }
        >
            <h3 class="text-2xl font-extrabold tracking-tight mb-5">{game.title}</h3>
            <div class="space-y-3 mb-6">
                {game
                    .description
                    .iter()
                    .copied()
                    .map(|text| {
                        view! {
                            <p class="text-sm leading-relaxed">
                                <HighlightedText text rules />
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-2 mb-6">
                {game
                    .tech
                    .iter()
                    .copied()
                    .map(|tech| view! { <span class="px-2 py-1 text-xs rounded-md font-mono">{tech}</span> })
                    .collect_view()}
            </div>
            <span class="text-sm font-semibold">"Play now →"</span>
        </a>
    }
}
