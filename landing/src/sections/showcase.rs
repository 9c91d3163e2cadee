use leptos::prelude::*;

use crate::particles::ParticleBackground;

#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <div class="showcase">
            <ParticleBackground />
            <div class="container showcase-content">
                <div class="section-header">
                    <h2 class="section-title">"Key Platform Features"</h2>
                    <p class="section-description">
                        "A few highlights demonstrating what you can build and customize."
                    </p>
                </div>
                <div class="showcase-grid">
                    <ShowcaseCard
                        icon="👥"
                        title="Real-time Collaboration"
                        description="Work together in real time with presence and cursors. Experience zero latency across all devices."
                    />
                    <ShowcaseCard
                        icon="🎨"
                        title="Custom Themes"
                        description="Change colors, fonts and spacing with a few tokens. Integrates with your existing theme system."
                    />
                    <ShowcaseCard
                        icon="🧩"
                        title="Extensible Plugins"
                        description="Add small plugins to extend functionality as needed. Supports modular and scalable architecture."
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ShowcaseCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="showcase-card glass-card">
            <div class="showcase-icon">{icon}</div>
            <h3 class="showcase-card-title">{title}</h3>
            <p class="showcase-card-description">{description}</p>
        </article>
    }
}
