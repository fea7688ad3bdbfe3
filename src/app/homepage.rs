use leptos::prelude::*;
use leptos_meta::Title;

use super::certificates::Certificates;
use super::games::GamesShowcase;
use super::projects::Projects;
use super::tech_stack::TechStackShowcase;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="flex flex-col justify-center items-center text-center gap-4 my-16">
                <h1 class="text-4xl font-bold">"Hi, I'm Abhinav Dixit"</h1>
                <p class="text-lg max-w-2xl">
                    "Full-stack developer building responsive web apps with React, Node.js and Go."
                </p>
                <div class="flex gap-4 mt-4">
                    <a
                        href="https://github.com/DixitAbhinav"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://www.linkedin.com/in/abhinav-dixit-81851b252"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                    >
                        "LinkedIn"
                    </a>
                </div>
            </section>
            <Projects />
            <TechStackShowcase />
            <GamesShowcase />
            <Certificates />
        </div>
    }
}
