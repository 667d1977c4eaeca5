use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">{BRAND}</a>
                <nav class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
                <div class="nav-actions">
                    <a href="#pricing" class="btn btn-primary">"Get Started"</a>
                    <button
                        class=move || if menu_open.get() { "nav-menu-btn open" } else { "nav-menu-btn" }
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile dropdown, mirrors the inline links
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    <a href="#features" class="nav-link" on:click=move |_| set_menu_open.set(false)>"Features"</a>
                    <a href="#pricing" class="nav-link" on:click=move |_| set_menu_open.set(false)>"Pricing"</a>
                    <a href="#about" class="nav-link" on:click=move |_| set_menu_open.set(false)>"About"</a>
                    <a href="#contact" class="nav-link" on:click=move |_| set_menu_open.set(false)>"Contact"</a>
                </div>
            </Show>
        </header>
    }
}
