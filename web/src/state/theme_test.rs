use super::*;

fn initialized(env: MemoryEnvironment) -> ThemeStore<MemoryEnvironment> {
    let mut store = ThemeStore::new(env);
    store.initialize();
    store
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn theme_mode_toggled_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_ne!(mode.toggled(), mode);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn theme_mode_parses_literal_values() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
}

#[test]
fn theme_mode_rejects_other_values() {
    assert_eq!("sepia".parse::<ThemeMode>(), Err(ParseThemeModeError("sepia".to_owned())));
    assert!("".parse::<ThemeMode>().is_err());
    assert!("true".parse::<ThemeMode>().is_err());
}

#[test]
fn theme_mode_text_forms_agree() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::Light.as_str(), "light");
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<ThemeMode>("\"light\"").unwrap(), ThemeMode::Light);
}

// =============================================================
// Uninitialized store
// =============================================================

#[test]
fn new_store_is_uninitialized() {
    let store = ThemeStore::new(MemoryEnvironment::new());
    assert_eq!(store.status(), &ThemeStatus::Uninitialized);
    assert!(!store.is_initialized());
    assert_eq!(store.source(), None);
}

#[test]
fn accessors_fail_fast_before_initialize() {
    let mut store = ThemeStore::new(MemoryEnvironment::new().with_stored("dark"));
    assert_eq!(store.current_mode(), Err(ThemeError::NotInitialized));
    assert_eq!(store.current_palette(), Err(ThemeError::NotInitialized));
    assert_eq!(store.toggle(), Err(ThemeError::NotInitialized));
    assert_eq!(store.set_mode(ThemeMode::Light), Err(ThemeError::NotInitialized));
    assert_eq!(store.environment().stored().as_deref(), Some("dark"));
}

// =============================================================
// initialize()
// =============================================================

#[test]
fn stored_dark_wins_over_os_preference() {
    for os_dark in [true, false] {
        let store = initialized(MemoryEnvironment::new().with_stored("dark").with_os_dark(os_dark));
        assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
        assert_eq!(store.source(), Some(ModeSource::Stored));
    }
}

#[test]
fn stored_light_wins_even_if_os_prefers_dark() {
    let store = initialized(MemoryEnvironment::new().with_stored("light").with_os_dark(true));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Light));
    assert_eq!(store.status(), &ThemeStatus::Ready);
}

#[test]
fn no_stored_value_follows_os_preference() {
    let dark = initialized(MemoryEnvironment::new().with_os_dark(true));
    assert_eq!(dark.current_mode(), Ok(ThemeMode::Dark));
    assert_eq!(dark.source(), Some(ModeSource::OsPreference));

    let light = initialized(MemoryEnvironment::new().with_os_dark(false));
    assert_eq!(light.current_mode(), Ok(ThemeMode::Light));
}

#[test]
fn fresh_session_with_dark_os_resolves_dark_palette() {
    let store = initialized(MemoryEnvironment::new().with_os_dark(true));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
    let palette = store.current_palette().unwrap();
    assert_eq!(palette.mode, ThemeMode::Dark);
    assert_eq!(palette.background.default, "#121212");
}

#[test]
fn no_stored_value_and_no_os_query_defaults_to_light() {
    let store = initialized(MemoryEnvironment::new());
    assert_eq!(store.current_mode(), Ok(ThemeMode::Light));
    assert_eq!(store.source(), Some(ModeSource::Default));
    assert_eq!(store.status(), &ThemeStatus::Ready);
}

#[test]
fn invalid_stored_value_falls_back_to_os_preference() {
    let store = initialized(MemoryEnvironment::new().with_stored("purple").with_os_dark(true));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
    assert_eq!(store.source(), Some(ModeSource::OsPreference));
}

#[test]
fn initialize_does_not_write_storage() {
    let store = initialized(MemoryEnvironment::new().with_os_dark(true));
    assert_eq!(store.environment().stored(), None);
}

#[test]
fn initialize_twice_keeps_first_mode() {
    let mut store = initialized(MemoryEnvironment::new().with_os_dark(true));
    store.set_mode(ThemeMode::Light).unwrap();
    assert_eq!(store.initialize(), ThemeMode::Light);
}

#[test]
fn unavailable_storage_falls_back_to_os_preference() {
    let store = initialized(MemoryEnvironment::new().without_storage().with_os_dark(true));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
    assert_eq!(store.status(), &ThemeStatus::Ready);
}

#[test]
fn detached_environment_fails_with_usable_default() {
    let store = initialized(MemoryEnvironment::new().with_os_dark(true).detached());
    assert!(matches!(store.status(), ThemeStatus::Failed(_)));
    assert!(store.is_initialized());
    assert_eq!(store.current_mode(), Ok(ThemeMode::Light));
}

// =============================================================
// toggle() / set_mode()
// =============================================================

#[test]
fn toggle_twice_restores_original_mode() {
    let mut store = initialized(MemoryEnvironment::new().with_stored("dark"));
    assert_eq!(store.toggle(), Ok(ThemeMode::Light));
    assert_eq!(store.toggle(), Ok(ThemeMode::Dark));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
    assert_eq!(store.environment().stored().as_deref(), Some("dark"));
}

#[test]
fn toggle_from_light_persists_dark() {
    let mut store = initialized(MemoryEnvironment::new().with_os_dark(false));
    assert_eq!(store.toggle(), Ok(ThemeMode::Dark));
    assert_eq!(store.environment().stored().as_deref(), Some("dark"));
    assert_eq!(store.current_palette().unwrap().background.default, "#121212");
}

#[test]
fn set_mode_persists_literal_value() {
    let mut store = initialized(MemoryEnvironment::new().with_stored("dark"));
    store.set_mode(ThemeMode::Light).unwrap();
    assert_eq!(store.environment().stored().as_deref(), Some("light"));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Light));
}

#[test]
fn set_mode_to_current_value_still_persists() {
    let mut store = initialized(MemoryEnvironment::new().with_os_dark(true));
    store.set_mode(ThemeMode::Dark).unwrap();
    assert_eq!(store.environment().stored().as_deref(), Some("dark"));
}

#[test]
fn writes_are_dropped_when_storage_unavailable() {
    let mut store = initialized(MemoryEnvironment::new().without_storage());
    assert_eq!(store.toggle(), Ok(ThemeMode::Dark));
    assert_eq!(store.current_mode(), Ok(ThemeMode::Dark));
    assert_eq!(store.environment().stored(), None);
}

#[test]
fn persisted_value_seeds_next_session() {
    let mut first = initialized(MemoryEnvironment::new().with_os_dark(false));
    first.toggle().unwrap();
    let saved = first.environment().stored().unwrap();

    let second = initialized(MemoryEnvironment::new().with_stored(&saved).with_os_dark(false));
    assert_eq!(second.current_mode(), Ok(ThemeMode::Dark));
}
