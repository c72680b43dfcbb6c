use super::*;

#[test]
fn unknown_values_parse_as_light() {
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("sepia"), Theme::Light);
}

#[test]
fn restore_defaults_to_light() {
    storage::remove(THEME_KEY);
    assert_eq!(ThemeState::restore().theme, Theme::Light);
}

#[test]
fn toggle_persists_choice() {
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(storage::load_raw(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(ThemeState::restore().theme, Theme::Dark);
    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(ThemeState::restore().theme, Theme::Light);
}
