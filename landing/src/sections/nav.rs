use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::BRAND;
use crate::theme;

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (dark, set_dark) = signal(theme::stored_dark());

    // Drop a shadow under the bar once the page scrolls off the top. The
    // navbar lives as long as the page, so the listener is never removed.
    Effect::new(move || {
        if let Some(window) = web_sys::window() {
            set_scrolled.set(window.scroll_y().unwrap_or(0.0) > 5.0);
            let on_scroll = Closure::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    set_scrolled.set(window.scroll_y().unwrap_or(0.0) > 5.0);
                }
            }) as Box<dyn FnMut()>);
            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        }
    });

    // Theme flag -> document class + localStorage.
    Effect::new(move || theme::apply_dark(dark.get()));

    // Lock page scroll behind the open mobile menu.
    Effect::new(move || {
        let open = menu_open.get();
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if open { "hidden" } else { "auto" });
        }
    });

    view! {
        <header class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#home" class="nav-brand" aria-label="Go to homepage">
                    <span class="nav-logo">"LU"</span>
                    <span class="nav-title">{BRAND}</span>
                </a>

                // Desktop links and actions
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#testimonials" class="nav-link">"Testimonials"</a>
                    <a href="#cta" class="nav-cta">"Get Started"</a>
                    <ThemeToggle dark=dark set_dark=set_dark />
                </div>

                // Mobile: theme toggle + hamburger
                <div class="nav-mobile-actions">
                    <ThemeToggle dark=dark set_dark=set_dark />
                    <button
                        class="nav-burger"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile menu overlay
            <Show when=move || menu_open.get()>
                <div class="nav-overlay" on:click=move |_| set_menu_open.set(false)>
                    <nav class="nav-drawer" role="menu">
                        <a href="#features" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "Features"
                        </a>
                        <a href="#about" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "About"
                        </a>
                        <a href="#testimonials" class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                            "Testimonials"
                        </a>
                        <div class="nav-drawer-footer">
                            <a href="#cta" class="nav-drawer-cta" on:click=move |_| set_menu_open.set(false)>
                                "Get Started Free"
                            </a>
                        </div>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle(dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| set_dark.update(|d| *d = !*d)
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
