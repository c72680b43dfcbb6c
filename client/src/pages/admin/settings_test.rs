use super::*;

#[test]
fn parse_count_zeroes_junk() {
    assert_eq!(parse_count(" 30 "), 30);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("ten"), 0);
}

#[test]
fn cleared_timeout_fails_validation() {
    let mut settings = PortalSettings::default();
    settings.system.session_timeout = parse_count("");
    assert!(settings.validate().is_err());
}

#[test]
fn every_tab_has_a_label() {
    let labels: Vec<_> = SettingsTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Notifications", "Fee Configuration", "System"]);
    assert_eq!(SettingsTab::default(), SettingsTab::Notifications);
}
