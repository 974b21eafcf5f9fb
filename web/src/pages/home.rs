//! Landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Renders inside the theme provider, so the mode it shows is
//! always the settled one.

use leptos::prelude::*;

use crate::components::theme_provider::{ThemeGate, use_theme};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeMode;

/// Landing page with title, theme toggle, and welcome card.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let mode = move || theme.with(|s| s.current_mode().map(ThemeMode::as_str).unwrap_or_default());

    view! {
        <ThemeGate>
            <main class="home-page">
                <header class="home-page__header">
                    <h1 class="home-page__title">"ProvisionHub"</h1>
                    <ThemeToggle/>
                </header>

                <section class="card">
                    <h2 class="card__title">"Welcome to ProvisionHub"</h2>
                    <p class="card__subtitle">"Self-service Platform Provisioning • Git-native • Async"</p>
                    <p class="card__body">"Current theme: " <strong>{mode}</strong></p>
                </section>
            </main>
        </ThemeGate>
    }
}
