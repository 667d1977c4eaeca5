use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Everything You Need to Succeed"</h2>
                    <p class="section-description">
                        "Powerful features designed to help your business grow faster and more efficiently."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon_path="M13 2 3 14h9l-1 8 10-12h-9l1-8z"
                        title="Fast Hosting"
                        description="Lightning-fast loading speeds with global CDN and optimized infrastructure."
                    />
                    <FeatureCard
                        icon_path="M12 2l8 4v6c0 5.25-3.5 8.5-8 10-4.5-1.5-8-4.75-8-10V6l8-4z"
                        title="Security"
                        description="Enterprise-grade security with SSL certificates and regular backups."
                    />
                    <FeatureCard
                        icon_path="M18 20V10M12 20V4M6 20v-6"
                        title="Analytics"
                        description="Detailed insights into your website performance and visitor behavior."
                    />
                    <FeatureCard
                        icon_path="M12 8V4M8 4h8M5 8h14a1 1 0 0 1 1 1v9a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V9a1 1 0 0 1 1-1zM9 13h.01M15 13h.01"
                        title="AI Assistance"
                        description="Smart chatbot integration to help your customers 24/7."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon_path: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card reveal">
            <div class="feature-icon">
                <svg
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <path d=icon_path />
                </svg>
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
