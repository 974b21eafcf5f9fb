//! Theme mode state: the current light/dark selection and its persistence.
//!
//! DESIGN
//! ======
//! `ThemeStore` owns the mode and every transition of it. Browser access goes
//! through the [`ThemeEnvironment`] seam so the store itself never touches
//! `web_sys`; the provider plugs in
//! [`BrowserEnvironment`](crate::util::dark_mode::BrowserEnvironment) and
//! tests plug in [`MemoryEnvironment`].
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A failed read counts as "nothing stored" and a
//! failed write is dropped, so a browser with storage disabled falls back to
//! OS detection on every visit instead of erroring.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::util::palette::{self, Palette};

/// `localStorage` key holding the persisted mode.
pub const STORAGE_KEY: &str = "themeMode";

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme mode: {0:?}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(ParseThemeModeError(s.to_owned()))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The store was read or mutated before [`ThemeStore::initialize`].
    #[error("theme store is not initialized; call initialize() before reading or changing the mode")]
    NotInitialized,
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Lifecycle of a [`ThemeStore`], exposed so the presentation layer can hold
/// back rendering until a definitive mode exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeStatus {
    #[default]
    Uninitialized,
    Ready,
    /// No host environment was reachable. The store still holds the default
    /// mode, so rendering can proceed.
    Failed(String),
}

impl ThemeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

/// Host capabilities the store needs: one durable string slot and the OS
/// color-scheme query.
pub trait ThemeEnvironment {
    /// Read the persisted preference. `Ok(None)` means nothing is stored.
    fn load_preference(&self) -> Result<Option<String>, ThemeError>;

    /// Persist `value` under [`STORAGE_KEY`].
    fn store_preference(&self, value: &str) -> Result<(), ThemeError>;

    /// Whether the OS prefers dark presentation, `None` if it cannot be asked.
    fn prefers_dark(&self) -> Option<bool>;

    /// Whether a host (browser window) exists at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Where the initial mode came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Stored,
    OsPreference,
    Default,
}

#[derive(Clone, Debug)]
pub struct ThemeStore<E> {
    env: E,
    status: ThemeStatus,
    mode: Option<ThemeMode>,
    source: Option<ModeSource>,
}

impl<E: ThemeEnvironment> ThemeStore<E> {
    /// Create an uninitialized store over `env`.
    pub fn new(env: E) -> Self {
        Self { env, status: ThemeStatus::Uninitialized, mode: None, source: None }
    }

    /// Settle the session's mode: stored preference, else OS preference,
    /// else [`ThemeMode::default`]. Reads only; nothing is written back.
    ///
    /// Repeated calls keep the mode chosen by the first one.
    pub fn initialize(&mut self) -> ThemeMode {
        if let Some(mode) = self.mode {
            return mode;
        }

        if !self.env.is_available() {
            log::warn!("theme: no host environment, using default mode");
            let status = ThemeStatus::Failed("host environment unavailable".to_owned());
            return self.settle(ThemeMode::default(), ModeSource::Default, status);
        }

        let (mode, source) = match self.stored_mode() {
            Some(mode) => (mode, ModeSource::Stored),
            None => match self.env.prefers_dark() {
                Some(true) => (ThemeMode::Dark, ModeSource::OsPreference),
                Some(false) => (ThemeMode::Light, ModeSource::OsPreference),
                None => (ThemeMode::default(), ModeSource::Default),
            },
        };
        log::debug!("theme: initialized mode={mode} source={source:?}");
        self.settle(mode, source, ThemeStatus::Ready)
    }

    fn settle(&mut self, mode: ThemeMode, source: ModeSource, status: ThemeStatus) -> ThemeMode {
        self.mode = Some(mode);
        self.source = Some(source);
        self.status = status;
        mode
    }

    fn stored_mode(&self) -> Option<ThemeMode> {
        match self.env.load_preference() {
            Ok(Some(raw)) => match raw.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log::debug!("theme: ignoring stored value: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::debug!("theme: {e}; falling back to OS preference");
                None
            }
        }
    }

    /// Flip the mode and persist it. Returns the new mode.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] before [`Self::initialize`].
    pub fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        let next = self.current_mode()?.toggled();
        self.write(next);
        Ok(next)
    }

    /// Set the mode explicitly and persist it.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] before [`Self::initialize`].
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.current_mode()?;
        self.write(mode);
        Ok(())
    }

    fn write(&mut self, mode: ThemeMode) {
        self.mode = Some(mode);
        if let Err(e) = self.env.store_preference(mode.as_str()) {
            log::debug!("theme: preference not saved: {e}");
        }
    }
}

impl<E> ThemeStore<E> {
    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] before initialization.
    pub fn current_mode(&self) -> Result<ThemeMode, ThemeError> {
        self.mode.ok_or(ThemeError::NotInitialized)
    }

    /// # Errors
    ///
    /// [`ThemeError::NotInitialized`] before initialization.
    pub fn current_palette(&self) -> Result<&'static Palette, ThemeError> {
        self.current_mode().map(palette::resolve)
    }

    pub fn status(&self) -> &ThemeStatus {
        &self.status
    }

    /// True once a definitive mode exists (ready or failed-with-default).
    pub fn is_initialized(&self) -> bool {
        self.mode.is_some()
    }

    pub fn source(&self) -> Option<ModeSource> {
        self.source
    }

    pub fn environment(&self) -> &E {
        &self.env
    }
}

/// In-process environment for non-browser hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    stored: Mutex<Option<String>>,
    prefers_dark: Option<bool>,
    storage_disabled: bool,
    detached: bool,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stored(mut self, value: &str) -> Self {
        self.stored = Mutex::new(Some(value.to_owned()));
        self
    }

    #[must_use]
    pub fn with_os_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = Some(prefers_dark);
        self
    }

    /// Every storage read and write fails.
    #[must_use]
    pub fn without_storage(mut self) -> Self {
        self.storage_disabled = true;
        self
    }

    /// Behave as if no host exists.
    #[must_use]
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    pub fn stored(&self) -> Option<String> {
        self.stored.lock().ok().and_then(|slot| slot.clone())
    }
}

impl ThemeEnvironment for MemoryEnvironment {
    fn load_preference(&self) -> Result<Option<String>, ThemeError> {
        if self.storage_disabled {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_owned()));
        }
        Ok(self.stored())
    }

    fn store_preference(&self, value: &str) -> Result<(), ThemeError> {
        if self.storage_disabled {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_owned()));
        }
        let mut slot = self
            .stored
            .lock()
            .map_err(|_| ThemeError::StorageUnavailable("storage lock poisoned".to_owned()))?;
        *slot = Some(value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn is_available(&self) -> bool {
        !self.detached
    }
}
