use leptos::prelude::*;

use crate::data::{Project, PROJECTS};
use crate::highlight::{RuleSet, PROJECT_RULES};
use crate::video::resolve;

use super::highlighted::HighlightedText;
use super::theme::use_theme;
use super::video_player::{VideoFrame, VideoPlayer};
use super::video_tooltip::VideoTooltip;

const VISIBLE_TECH: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="my-12">
            <h2 class="text-3xl font-bold mb-8 text-center">"Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();
    let rules: &'static RuleSet = &PROJECT_RULES;
    let (is_expanded, set_is_expanded) = signal(false);
    let (is_video_open, set_is_video_open) = signal(false);
    let (is_demo_hovered, set_is_demo_hovered) = signal(false);
    let on_close = Callback::new(move |_: ()| set_is_video_open(false));

    let hidden_tech = project.tech.len().saturating_sub(VISIBLE_TECH);
    let summary = project.description.first().copied().unwrap_or_default();

    view! {
        <article class=move || {
            if theme.is_dark() {
                "relative p-6 rounded-lg border bg-black/90 border-indigo-500/30"
            } else {
                "relative p-6 rounded-lg border bg-white/90 border-indigo-300/50"
            }
        }>
            <h3 class="text-2xl font-extrabold tracking-tight mb-4">{project.title}</h3>
            <p class="text-sm leading-relaxed mb-4">
                <HighlightedText text=summary rules />
            </p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .copied()
                    .take(VISIBLE_TECH)
                    .map(|tech| view! { <span class="px-2 py-1 text-xs rounded-md font-mono">{tech}</span> })
                    .collect_view()}
                {(hidden_tech > 0)
                    .then(|| view! { <span class="px-2 py-1 text-xs opacity-70">"+" {hidden_tech}</span> })}
            </div>
            <div class="flex gap-4 text-sm">
                <a href=project.github target="_blank" rel="noopener noreferrer">"Code"</a>
                {project
                    .live
                    .map(|href| view! { <a href=href target="_blank" rel="noopener noreferrer">"Live"</a> })}
                {project
                    .video_url
                    .map(|_| {
                        view! {
                            <span class="relative">
                                <button
                                    on:click=move |_| set_is_video_open(true)
                                    on:mouseenter=move |_| set_is_demo_hovered(true)
                                    on:mouseleave=move |_| set_is_demo_hovered(false)
                                >
                                    "Watch demo"
                                </button>
                                <VideoTooltip is_visible=is_demo_hovered />
                            </span>
                        }
                    })}
                <button on:click=move |_| set_is_expanded.update(|e| *e = !*e)>
                    {move || if is_expanded.get() { "Less" } else { "Details" }}
                </button>
            </div>
            <Show when=move || is_expanded.get()>
                <ul class="mt-4 space-y-2 text-sm">
                    {project
                        .description
                        .iter()
                        .copied()
                        .skip(1)
                        .map(|text| view! { <li><HighlightedText text rules /></li> })
                        .collect_view()}
                </ul>
                {project.video_url.map(|url| view! { <InPlaceVideoPlayer video_url=url /> })}
            </Show>
            <VideoPlayer video_url=project.video_url title=project.title is_open=is_video_open on_close />
        </article>
    }
}

/// Thumbnail that swaps itself for the embedded player on click.
#[component]
fn InPlaceVideoPlayer(video_url: &'static str) -> impl IntoView {
    let theme = use_theme();
    let (is_playing, set_is_playing) = signal(false);
    let video = resolve(Some(video_url));
    let thumbnail = video.id().map(|id| id.thumbnail_url());

    view! {
        <div class="pt-4">
            <div class=move || {
                if theme.is_dark() {
                    "relative aspect-video rounded-lg overflow-hidden bg-gray-800/80"
                } else {
                    "relative aspect-video rounded-lg overflow-hidden bg-gray-100"
                }
            }>
                <Show
                    when=move || is_playing.get()
                    fallback=move || {
                        let thumbnail = thumbnail.clone();
                        view! {
                            <button
                                class="absolute inset-0 w-full h-full flex items-center justify-center cursor-pointer"
                                aria-label="Play demo"
                                on:click=move |_| set_is_playing(true)
                            >
                                {thumbnail
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt="Demo thumbnail"
                                                class="absolute inset-0 w-full h-full object-cover"
                                            />
                                        }
                                    })}
                                <span class="relative text-4xl">"▶"</span>
                            </button>
                        }
                    }
                >
                    <VideoFrame video=video.clone() title="Project Demo" />
                </Show>
            </div>
        </div>
    }
}
