//! Light/dark toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless: reads the mode from the provided theme store and calls
//! `toggle()` on click. The icon and label describe the mode a click switches
//! *to*, not the current one.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::state::theme::{ThemeEnvironment, ThemeMode, ThemeStore};

/// Icon and label for the toggle, derived from the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    /// Mode the next click switches to.
    pub target: ThemeMode,
}

impl ToggleAffordance {
    pub fn for_mode(current: ThemeMode) -> Self {
        Self { target: current.toggled() }
    }

    pub fn icon(self) -> &'static str {
        match self.target {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        }
    }

    pub fn label(self) -> String {
        format!("Switch to {} mode", self.target)
    }
}

/// Click handler body: flip the store's mode. A store that is not yet
/// initialized is left untouched and the error is logged.
pub fn toggle_theme<E>(theme: RwSignal<ThemeStore<E>>)
where
    E: ThemeEnvironment + Send + Sync + 'static,
{
    theme.update(|store| {
        if let Err(e) = store.toggle() {
            log::error!("theme toggle: {e}");
        }
    });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let affordance = move || theme.with(|s| s.current_mode().ok().map(ToggleAffordance::for_mode));

    let on_toggle = move |_| toggle_theme(theme);

    view! {
        <button
            class="btn theme-toggle"
            on:click=on_toggle
            aria-label="toggle theme"
            title=move || affordance().map(ToggleAffordance::label).unwrap_or_default()
            disabled=move || affordance().is_none()
        >
            {move || affordance().map(ToggleAffordance::icon)}
        </button>
    }
}
