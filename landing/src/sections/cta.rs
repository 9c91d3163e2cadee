use leptos::prelude::*;

use crate::particles::ParticleBackground;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <div class="cta">
            <ParticleBackground />
            <div class="container cta-content">
                <div class="cta-card glass-card">
                    <h3 class="cta-title">"Ready to Build Something Amazing?"</h3>
                    <p class="cta-description">
                        "Join hundreds of teams shipping faster with a great developer experience."
                    </p>
                    <a href="#home" class="btn btn-primary cta-button">
                        "Get Started Now →"
                    </a>
                </div>
            </div>
        </div>
    }
}
