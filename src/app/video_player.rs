use leptos::{ev, prelude::*};

use crate::video::{resolve, VideoReference};

use super::theme::use_theme;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen";

/// Iframe for a resolved link, or the fallback message for anything else.
#[component]
pub fn VideoFrame(video: VideoReference, title: &'static str) -> impl IntoView {
    let theme = use_theme();
    match video.embed_url() {
        Some(src) => view! {
            <iframe
                src=src.to_string()
                title=title
                class="absolute inset-0 w-full h-full"
                allow=IFRAME_ALLOW
            ></iframe>
        }
        .into_any(),
        None => view! {
            <div class="w-full h-full flex items-center justify-center">
                <p class=move || {
                    if theme.is_dark() { "text-lg text-gray-400" } else { "text-lg text-gray-300" }
                }>"Invalid video URL or format"</p>
            </div>
        }
        .into_any(),
    }
}

/// Modal demo player. Closes on backdrop click, the close button, or Escape.
#[component]
pub fn VideoPlayer(
    video_url: Option<&'static str>,
    #[prop(optional)] title: Option<&'static str>,
    is_open: ReadSignal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let (is_fullscreen, set_is_fullscreen) = signal(false);
    let title = title.unwrap_or("Project Demo");
    let video = resolve(video_url);

    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let button_class = move || {
        if theme.is_dark() {
            "p-2 rounded-full transition-colors hover:bg-gray-800 text-gray-400 hover:text-white"
        } else {
            "p-2 rounded-full transition-colors hover:bg-gray-200 text-gray-600 hover:text-gray-900"
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class=move || {
                    format!(
                        "fixed inset-0 z-50 flex items-center justify-center backdrop-blur-md overflow-y-auto {}",
                        if theme.is_dark() { "bg-black/90" } else { "bg-gray-800/80" },
                    )
                }
                on:click=move |_| on_close.run(())
            >
                <div
                    class=move || {
                        format!(
                            "relative w-full mx-auto my-4 rounded-lg shadow-2xl overflow-hidden {}",
                            if is_fullscreen.get() { "h-[85vh] max-h-[85vh]" } else { "max-w-4xl" },
                        )
                    }
                    on:click=|e| e.stop_propagation()
                >
                    <div class=move || {
                        if theme.is_dark() {
                            "flex items-center justify-between px-4 py-3 bg-gray-900 border-b border-gray-700"
                        } else {
                            "flex items-center justify-between px-4 py-3 bg-gray-100 border-b border-gray-300"
                        }
                    }>
                        <h3 class="font-semibold truncate max-w-[60%]">{title}</h3>
                        <div class="flex items-center gap-2">
                            <button
                                class=button_class
                                aria-label=move || {
                                    if is_fullscreen.get() { "Exit fullscreen" } else { "Enter fullscreen" }
                                }
                                on:click=move |_| set_is_fullscreen.update(|f| *f = !*f)
                            >
                                {move || if is_fullscreen.get() { "⤡" } else { "⤢" }}
                            </button>
                            {video_url
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=button_class
                                            aria-label="Open in new tab"
                                        >
                                            "↗"
                                        </a>
                                    }
                                })}
                            <button
                                class=button_class
                                aria-label="Close"
                                on:click=move |_| on_close.run(())
                            >
                                "✕"
                            </button>
                        </div>
                    </div>
                    <div class=move || {
                        format!(
                            "relative overflow-hidden {} {}",
                            if is_fullscreen.get() { "h-full w-full" } else { "aspect-video" },
                            if theme.is_dark() { "bg-black" } else { "bg-gray-900" },
                        )
                    }>
                        <VideoFrame video=video.clone() title />
                    </div>
                </div>
            </div>
        </Show>
    }
}
