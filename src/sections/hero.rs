use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content reveal">
                    <h1 class="hero-title">
                        "Your Business Website, "
                        <span class="hero-title-accent">"Live in Minutes"</span>
                    </h1>
                    <p class="hero-description">
                        "Focus on growing your business. We handle hosting, security, and speed."
                    </p>
                    <div class="hero-actions">
                        <a href="#pricing" class="btn btn-primary btn-lg">"Start Today"</a>
                        <a href="#contact" class="btn btn-secondary btn-lg">"Book a Demo"</a>
                    </div>
                </div>
                <div class="hero-visual reveal">
                    <img
                        src="assets/hero-illustration.svg"
                        alt="AUREVO Business Platform"
                        class="hero-image"
                    />
                </div>
            </div>
        </section>
    }
}
