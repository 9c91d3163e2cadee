use leptos::prelude::*;

use crate::particles::ParticleBackground;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <ParticleBackground />
            <div class="container hero-content">
                <span class="hero-badge">"✨ New • Modern UI Kit"</span>
                <h1 class="hero-title">
                    "Build beautiful, fast &"
                    <br />
                    "cutting-edge experiences"
                </h1>
                <p class="hero-description">
                    "Ship faster with a modern, responsive landing layout — accessible "
                    "and delightful. Production-ready components with a clean API."
                </p>
                <div class="hero-actions">
                    <a href="#cta" class="btn btn-primary">
                        "Get Started Today →"
                    </a>
                    <a href="#features" class="btn btn-secondary">
                        "Explore Features"
                    </a>
                </div>
                <div class="hero-trusted">
                    <p class="hero-trusted-label">"TRUSTED BY GLOBAL LEADERS"</p>
                    <div class="hero-trusted-logos">
                        <TrustedLogo name="Acme" />
                        <TrustedLogo name="Globex" />
                        <TrustedLogo name="Umbrella" />
                        <TrustedLogo name="Initech" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TrustedLogo(name: &'static str) -> impl IntoView {
    view! {
        <span class="hero-trusted-logo">
            <span class="hero-trusted-dot"></span>
            {name}
        </span>
    }
}
