use leptos::prelude::*;

use crate::particles::ParticleBackground;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div class="features">
            <ParticleBackground />
            <div class="container features-content">
                <div class="section-header">
                    <h2 class="section-title">"Features"</h2>
                    <p class="section-description">
                        "Powerful building blocks to ship faster with great DX."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        title="Fast Performance"
                        description="Optimized bundles and minimal runtime overhead."
                    />
                    <FeatureCard
                        title="Accessible"
                        description="Built with semantics and keyboard-first interactions."
                    />
                    <FeatureCard
                        title="Responsive"
                        description="Looks great on phones, tablets and desktops."
                    />
                    <FeatureCard
                        title="Customizable"
                        description="Easy to adapt colors, spacing and components."
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card glass-card">
            <div class="feature-icon">"■"</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
