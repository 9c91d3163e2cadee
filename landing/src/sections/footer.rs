use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">"LU"</span>
                    <span class="footer-copyright">
                        {format!("© {year} {BRAND}. All rights reserved.")}
                    </span>
                </div>
                <nav class="footer-links">
                    <a href="#about" class="footer-link">"About Us"</a>
                    <a href="#features" class="footer-link">"Features"</a>
                    <a href="#cta" class="footer-link">"Contact"</a>
                    <a href="#home" class="footer-link">"Privacy Policy"</a>
                </nav>
            </div>
        </footer>
    }
}
