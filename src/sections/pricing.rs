//! Pricing section: billing toggle plus the three plan cards.
//!
//! All price math lives in [`crate::pricing`]; the components here only pick
//! what to show for the current billing period.

use leptos::prelude::*;

use crate::pricing::{format_inr, price_for, Plan, PLANS};

#[component]
pub fn Pricing() -> impl IntoView {
    // Starts on monthly billing; flipped only by the toggle below.
    let annual = RwSignal::new(false);

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Simple, Transparent Pricing"</h2>
                    <p class="section-description">
                        "Choose the perfect plan for your business needs. All plans include hosting and security."
                    </p>
                </div>

                <BillingToggle annual=annual />

                <div class="pricing-grid">
                    {PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=plan annual=annual /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BillingToggle(annual: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="billing-toggle reveal">
            <span class=move || if annual.get() { "toggle-label" } else { "toggle-label active" }>
                "Monthly"
            </span>
            <button
                class="toggle-switch"
                role="switch"
                aria-label="Bill annually"
                aria-checked=move || annual.get().to_string()
                on:click=move |_| annual.update(|a| *a = !*a)
            >
                <span class=move || if annual.get() { "toggle-thumb right" } else { "toggle-thumb" }></span>
            </button>
            <span class=move || if annual.get() { "toggle-label active" } else { "toggle-label" }>
                "Annual"
            </span>
            <Show when=move || annual.get()>
                <span class="save-badge">"Save 20%"</span>
            </Show>
        </div>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, annual: RwSignal<bool>) -> impl IntoView {
    let display = move || price_for(plan, annual.get());

    view! {
        <article class=if plan.popular { "plan-card popular reveal" } else { "plan-card reveal" }>
            {plan.popular.then(|| view! { <div class="popular-badge">"Most Popular"</div> })}

            <div class="plan-header">
                <h3 class="plan-name">{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
                <div class="plan-price">
                    <span class="plan-amount">{move || format_inr(display().amount)}</span>
                    <span class="plan-period">{move || display().period}</span>
                </div>
                <Show when=move || annual.get()>
                    <p class="plan-savings">
                        {move || {
                            display()
                                .savings
                                .map(|saved| format!("Save {} a year", format_inr(saved)))
                                .unwrap_or_default()
                        }}
                    </p>
                </Show>
            </div>

            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="plan-feature">
                            <svg
                                class="check-icon"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                aria-hidden="true"
                            >
                                <path d="M20 6 9 17l-5-5" />
                            </svg>
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <a
                href="#contact"
                class=if plan.popular { "btn btn-primary btn-block" } else { "btn btn-secondary btn-block" }
            >
                "Get Started"
            </a>
        </article>
    }
}
