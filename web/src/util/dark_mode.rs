//! Browser side of the theme: `localStorage`, the OS color-scheme query, and
//! the `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Every call is best-effort browser-only behavior; SSR and native test
//! builds compile these to no-ops so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{ThemeEnvironment, ThemeError, ThemeMode};
#[cfg(feature = "hydrate")]
use crate::state::theme::STORAGE_KEY;

/// [`ThemeEnvironment`] backed by the current browser window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserEnvironment;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::StorageUnavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(ThemeError::StorageUnavailable("localStorage disabled".to_owned())),
        Err(e) => Err(ThemeError::StorageUnavailable(format!("{e:?}"))),
    }
}

impl ThemeEnvironment for BrowserEnvironment {
    fn load_preference(&self) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn store_preference(&self, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, value)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
