// AUREVO – Business landing page, Leptos 0.8, client-side rendered

mod pricing;
mod reveal;
mod sections;

use leptos::prelude::*;
use reveal::RevealObserver;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    debug_assert!(pricing::validate().is_ok(), "plan table is inconsistent");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <RevealObserver />
        <Nav />
        <main>
            <Hero />
            <Features />
            <Pricing />
            <Cta />
        </main>
        <Footer />
    }
}
