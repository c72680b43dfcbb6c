use super::*;

#[test]
fn defaults_are_valid() {
    let settings = PortalSettings::default();
    assert_eq!(settings.validate(), Ok(()));
    assert_eq!(settings.system.rows_per_page, 10);
    assert_eq!(settings.fees.late_charge_percentage, 5);
}

#[test]
fn out_of_range_values_are_rejected() {
    let mut settings = PortalSettings::default();
    settings.fees.late_charge_percentage = 101;
    assert_eq!(settings.validate(), Err("Late charge must be between 0 and 100 percent".to_owned()));

    let mut settings = PortalSettings::default();
    settings.system.session_timeout = 4;
    assert!(settings.validate().unwrap_err().contains("at least 5 minutes"));

    let mut settings = PortalSettings::default();
    settings.system.rows_per_page = 15;
    assert!(settings.save().is_err());
}

#[test]
fn save_restore_reset() {
    let mut settings = PortalSettings::default();
    settings.system.rows_per_page = 25;
    settings.fees.rounding = Rounding::Up;
    settings.save().unwrap();
    assert_eq!(PortalSettings::restore(), settings);

    assert_eq!(PortalSettings::reset(), PortalSettings::default());
    assert_eq!(PortalSettings::restore(), PortalSettings::default());
}

#[test]
fn rounding_parse_matches_labels() {
    for rounding in Rounding::ALL {
        assert_eq!(Rounding::parse(rounding.as_str()), Some(rounding));
    }
    assert_eq!(Rounding::parse("banker"), None);
}
