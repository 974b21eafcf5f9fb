//! Root theme context: owns the store; [`ThemeGate`] holds back themed content
//! until initialization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once around the router. Children read the store with
//! [`use_theme`]; nothing else constructs a mode. Pages wrap their content in
//! [`ThemeGate`], so the server renders a placeholder and the browser settles
//! the real mode after hydration; the first painted frame already uses the
//! right palette.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeEnvironment, ThemeStore};
use crate::util::dark_mode::{self, BrowserEnvironment};
use crate::util::palette::Palette;

pub type BrowserThemeStore = ThemeStore<BrowserEnvironment>;

/// Theme store provided by the nearest [`ThemeProvider`].
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider`].
pub fn use_theme() -> RwSignal<BrowserThemeStore> {
    expect_context::<RwSignal<BrowserThemeStore>>()
}

/// Inline `--theme-*` declarations for the store's current palette, empty
/// until the store is initialized.
pub fn root_style<E>(store: &ThemeStore<E>) -> String {
    store.current_palette().map(Palette::css_variables).unwrap_or_default()
}

/// Settle the store's mode. Browser-only in practice; the provider runs it
/// from an effect after hydration.
pub fn initialize_theme<E>(theme: RwSignal<ThemeStore<E>>)
where
    E: ThemeEnvironment + Send + Sync + 'static,
{
    theme.update(|store| {
        store.initialize();
    });
}

/// Provides the theme store to `children` and applies the palette.
///
/// Children always render, so the router and its route list are visible to
/// SSR. Themed content waits for a settled mode inside [`ThemeGate`].
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(ThemeStore::new(BrowserEnvironment));
    provide_context(theme);

    // Browser-only: runs once after hydration.
    Effect::new(move || initialize_theme(theme));

    // Keep `<html data-theme>` in step so page-level backgrounds follow.
    Effect::new(move || {
        if let Ok(mode) = theme.with(ThemeStore::current_mode) {
            dark_mode::apply(mode);
        }
    });

    let mode = move || theme.with(|s| s.current_mode().unwrap_or_default().as_str());
    let status = move || theme.with(|s| s.status().as_str());
    let style = move || theme.with(root_style);

    view! {
        <div class="theme-root" data-theme=mode data-theme-status=status style=style>
            {children()}
        </div>
    }
}

/// Renders `children` once the theme store has a mode, a blank placeholder
/// before that.
#[component]
pub fn ThemeGate(children: ChildrenFn) -> impl IntoView {
    let theme = use_theme();
    let ready = move || theme.with(ThemeStore::is_initialized);

    view! {
        <Show when=ready fallback=|| view! { <div class="theme-placeholder" aria-busy="true"></div> }>
            {children()}
        </Show>
    }
}
