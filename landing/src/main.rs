// Lumina UI Landing Page — Leptos 0.8 Edition

mod particles;
mod sections;
mod theme;

use drift_field::{FieldConfig, SizingPolicy};
use leptos::prelude::*;
use particles::ParticleBackground;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        // Page-level backdrop: fixed full-viewport field behind everything.
        <ParticleBackground
            config=FieldConfig::page()
            sizing=SizingPolicy::Viewport
            fixed=true
            glow=12.0
        />
        <Nav />
        <main>
            <section id="home" class="section-gradient">
                <Hero />
            </section>
            <section id="showcase" class="section-gradient">
                <Showcase />
            </section>
            <section id="features" class="section-gradient">
                <Features />
            </section>
            <section id="about" class="section-gradient">
                <About />
            </section>
            <section id="testimonials" class="section-gradient">
                <Testimonials />
            </section>
            <section id="cta" class="section-gradient">
                <Cta />
            </section>
        </main>
        <Footer />
    }
}
