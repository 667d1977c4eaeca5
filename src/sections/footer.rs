use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container footer-inner">
                <span class="footer-brand">{BRAND}</span>
                <div class="footer-links">
                    <a href="#features" class="footer-link">"Features"</a>
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                    <a href="#about" class="footer-link">"About"</a>
                    <a href="#contact" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">
                    "© 2025 AUREVO – Business. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
