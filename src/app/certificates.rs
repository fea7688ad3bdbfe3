use leptos::{ev, prelude::*};

use crate::data::{displayed_certificates, Certificate, CERTIFICATES, COLLAPSED_CERTIFICATES};

use super::theme::use_theme;

#[component]
pub fn Certificates() -> impl IntoView {
    let (is_expanded, set_is_expanded) = signal(false);
    let selected = RwSignal::new(None::<&'static Certificate>);

    let handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <section id="certificates" class="my-12">
            <h2 class="text-3xl font-bold mb-8 text-center">"Certificates & Achievements"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {move || {
                    displayed_certificates(is_expanded.get())
                        .iter()
                        .map(|certificate| {
                            view! {
                                <CertificateCard
                                    certificate
                                    on_select=Callback::new(move |_: ()| {
                                        selected.set(Some(certificate))
                                    })
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            {(CERTIFICATES.len() > COLLAPSED_CERTIFICATES)
                .then(|| {
                    view! {
                        <div class="flex justify-center mt-8">
                            <button
                                class="px-6 py-2 rounded-lg border border-indigo-500/40"
                                on:click=move |_| set_is_expanded.update(|e| *e = !*e)
                            >
                                {move || if is_expanded.get() { "Show Less" } else { "Show All" }}
                            </button>
                        </div>
                    }
                })}
            {move || {
                selected
                    .get()
                    .map(|certificate| {
                        view! {
                            <CertificateModal
                                certificate
                                on_close=Callback::new(move |_: ()| selected.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn CertificateCard(certificate: &'static Certificate, on_select: Callback<()>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class=move || {
                if theme.is_dark() {
                    "text-left p-6 rounded-xl border bg-black/80 border-indigo-500/30"
                } else {
                    "text-left p-6 rounded-xl border bg-white/80 border-indigo-300/50"
                }
            }
            on:click=move |_| on_select.run(())
        >
            <h3 class="text-lg font-bold mb-2">{certificate.title}</h3>
            <p class="text-sm opacity-70 mb-4">{certificate.organization} " · " {certificate.date}</p>
            <div class="flex flex-wrap gap-2">
                {certificate
                    .skills
                    .iter()
                    .copied()
                    .take(2)
                    .map(|skill| view! { <span class="px-2 py-1 text-xs rounded-md">{skill}</span> })
                    .collect_view()}
            </div>
        </button>
    }
}

#[component]
fn CertificateModal(certificate: &'static Certificate, on_close: Callback<()>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-md"
            on:click=move |_| on_close.run(())
        >
            <div
                class=move || {
                    if theme.is_dark() {
                        "relative max-w-lg w-full mx-4 p-6 rounded-2xl bg-gray-900 text-gray-100"
                    } else {
                        "relative max-w-lg w-full mx-4 p-6 rounded-2xl bg-white text-gray-900"
                    }
                }
                on:click=|e| e.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <h3 class="text-2xl font-bold mb-2 pr-8">{certificate.title}</h3>
                <p class="opacity-70 mb-4">{certificate.organization} " · " {certificate.date}</p>
                <ul class="flex flex-wrap gap-2 mb-6">
                    {certificate
                        .skills
                        .iter()
                        .copied()
                        .map(|skill| view! { <li class="px-2 py-1 text-xs rounded-md border">{skill}</li> })
                        .collect_view()}
                </ul>
                <a
                    href=certificate.credential_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="font-semibold text-indigo-400"
                >
                    "View Credential ↗"
                </a>
            </div>
        </div>
    }
}
