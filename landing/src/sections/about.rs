use leptos::prelude::*;

use crate::particles::ParticleBackground;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about">
            <ParticleBackground />
            <div class="container about-content">
                <div class="about-grid">
                    <div class="about-copy">
                        <span class="about-eyebrow">"Why choose us"</span>
                        <h2 class="section-title">"About our product"</h2>
                        <p class="about-lead">
                            "We combine performance and usability to help you get to market "
                            "faster — with clean APIs and a delightful developer experience."
                        </p>
                        <ul class="about-checklist">
                            <CheckItem text="Production-ready components" />
                            <CheckItem text="Developer-friendly APIs" />
                            <CheckItem text="Lightweight and extensible" />
                        </ul>
                        <a href="#features" class="btn btn-primary">
                            "Explore features"
                        </a>
                    </div>
                    <div class="about-illustration glass-card">
                        <span>"Illustration"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CheckItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="about-check">
            <span class="about-check-mark">"✓"</span>
            <span>{text}</span>
        </li>
    }
}
