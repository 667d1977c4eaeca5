use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="about" class="cta">
            <div class="container">
                <div class="cta-inner reveal">
                    <h2 class="section-title">"Ready to Grow Your Business?"</h2>
                    <p class="section-description">
                        "Join thousands of businesses that trust AUREVO for their online presence."
                    </p>
                    <a href="#pricing" class="btn btn-primary btn-lg">
                        "Get Started with AUREVO"
                    </a>
                </div>
            </div>
        </section>
    }
}
