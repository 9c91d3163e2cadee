use std::time::Duration;

use leptos::prelude::*;

use crate::particles::ParticleBackground;

struct Testimonial {
    name: &'static str,
    title: &'static str,
    text: &'static str,
}

const ITEMS: [Testimonial; 4] = [
    Testimonial {
        name: "Alice R.",
        title: "Lead Developer, TechCorp",
        text: "This product saved us weeks of work! The documentation is superb, and the code quality is top-notch.",
    },
    Testimonial {
        name: "Brian K.",
        title: "CTO, InnovateX",
        text: "Beautifully designed and extremely easy to customize. It integrated flawlessly into our existing pipeline.",
    },
    Testimonial {
        name: "Carmen V.",
        title: "Product Manager, GlobalTech",
        text: "Reliable and fast — great DX and performance. Our users noticed the speed increase immediately.",
    },
    Testimonial {
        name: "David M.",
        title: "Senior Engineer, WebFlow",
        text: "Highly scalable architecture. It allows our team to focus purely on feature development, not boilerplate.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    let (idx, set_idx) = signal(0usize);

    // Auto-advance every 4 seconds; stopped with the section.
    if let Ok(interval) = set_interval_with_handle(
        move || set_idx.update(|i| *i = (*i + 1) % ITEMS.len()),
        Duration::from_millis(4000),
    ) {
        on_cleanup(move || interval.clear());
    }

    let track_style = move || {
        let offset = idx.get() as f64 * (100.0 / 3.0);
        let gap = idx.get() * 8;
        format!("transform: translateX(calc(-{offset}% - {gap}px));")
    };

    view! {
        <div class="testimonials">
            <ParticleBackground />
            <div class="container testimonials-content">
                <div class="section-header">
                    <h2 class="section-title">"Trusted by the Best"</h2>
                    <p class="section-description">
                        "Hear what our customers have to say about their experience."
                    </p>
                </div>

                <div class="carousel-viewport">
                    <div class="carousel-track" style=track_style>
                        {ITEMS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <article
                                        class=move || {
                                            if idx.get() == i {
                                                "testimonial-card glass-card active"
                                            } else {
                                                "testimonial-card glass-card"
                                            }
                                        }
                                        aria-hidden=move || if idx.get() == i { "false" } else { "true" }
                                    >
                                        <div class="testimonial-quote-mark">"“"</div>
                                        <p class="testimonial-text">{item.text}</p>
                                        <div class="testimonial-rule"></div>
                                        <div class="testimonial-author">
                                            <div class="testimonial-name">{item.name}</div>
                                            <div class="testimonial-title">{item.title}</div>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="carousel-dots">
                    {(0..ITEMS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if idx.get() == i { "carousel-dot active" } else { "carousel-dot" }
                                    }
                                    aria-label=format!("Go to testimonial {}", i + 1)
                                    on:click=move |_| set_idx.set(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
