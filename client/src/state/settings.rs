//! Admin portal settings: notification switches, fee rules, and session
//! options, persisted under the `settings` storage key.
//!
//! The table page size chosen here becomes the default for every
//! [`crate::components::data_table::DataTable`] that does not pin its own.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

pub const SETTINGS_KEY: &str = "settings";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_receipts: bool,
    pub email_reminders: bool,
    pub email_fee_updates: bool,
    pub email_system: bool,
    pub sms_receipts: bool,
    pub sms_reminders: bool,
    pub sms_fee_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_receipts: true,
            email_reminders: true,
            email_fee_updates: true,
            email_system: false,
            sms_receipts: false,
            sms_reminders: true,
            sms_fee_updates: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    None,
    Nearest,
    Up,
    Down,
}

impl Rounding {
    pub const ALL: [Self; 4] = [Self::None, Self::Nearest, Self::Up, Self::Down];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Nearest => "nearest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No Rounding",
            Self::Nearest => "Round to Nearest Rupee",
            Self::Up => "Round Up",
            Self::Down => "Round Down",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSettings {
    pub allow_partial_payment: bool,
    pub auto_apply_late_charge: bool,
    pub late_charge_percentage: u32,
    pub late_charge_grace_days: u32,
    pub rounding: Rounding,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            allow_partial_payment: true,
            auto_apply_late_charge: true,
            late_charge_percentage: 5,
            late_charge_grace_days: 5,
            rounding: Rounding::None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    /// Minutes.
    pub session_timeout: u32,
    /// Months.
    pub data_retention: u32,
    pub rows_per_page: usize,
    pub allow_multiple_logins: bool,
    pub enable_audit_log: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            session_timeout: 30,
            data_retention: 36,
            rows_per_page: grid::page::DEFAULT_ROWS_PER_PAGE,
            allow_multiple_logins: false,
            enable_audit_log: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    pub notifications: NotificationSettings,
    pub fees: FeeSettings,
    pub system: SystemSettings,
}

impl PortalSettings {
    pub const MIN_SESSION_TIMEOUT: u32 = 5;

    /// Saved settings, or defaults when nothing valid is stored.
    #[must_use]
    pub fn restore() -> Self {
        storage::load_json::<Self>(SETTINGS_KEY)
            .filter(|s| s.validate().is_ok())
            .unwrap_or_default()
    }

    /// Field-level check run before saving.
    ///
    /// # Errors
    ///
    /// Returns the message for the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.fees.late_charge_percentage > 100 {
            return Err("Late charge must be between 0 and 100 percent".to_owned());
        }
        if self.system.session_timeout < Self::MIN_SESSION_TIMEOUT {
            return Err(format!("Session timeout must be at least {} minutes", Self::MIN_SESSION_TIMEOUT));
        }
        if self.system.data_retention == 0 {
            return Err("Data retention must be at least 1 month".to_owned());
        }
        if !grid::page::DEFAULT_ROWS_PER_PAGE_OPTIONS.contains(&self.system.rows_per_page) {
            return Err("Choose one of the offered page sizes".to_owned());
        }
        Ok(())
    }

    /// Validate and persist.
    ///
    /// # Errors
    ///
    /// Returns the validation message; nothing is written in that case.
    pub fn save(&self) -> Result<(), String> {
        self.validate()?;
        storage::save_json(SETTINGS_KEY, self);
        Ok(())
    }

    /// Forget the saved settings and return the defaults.
    pub fn reset() -> Self {
        storage::remove(SETTINGS_KEY);
        Self::default()
    }
}
