//! View-level filters that run before rows reach a table.
//!
//! DESIGN
//! ======
//! These are the dropdown/date/search filters each page applies on top of
//! fetched data; the table's own free-text search runs afterwards on
//! whatever survives. "All" (or an empty string) never filters.
//!
//! Date presets are computed from an explicit `now` and produce a half-open
//! window, so `lastMonth` ends where `thisMonth` begins.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

use crate::format::{days_remaining, parse_date, parse_date_time, DUE_SOON_DAYS};
use crate::model::{ALL, Payment, PaymentStatus, PendingFee, Transaction};

fn selected(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty() && value != ALL && value != "all").then_some(value)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// DATE PRESETS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRangePreset {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "yesterday")]
    Yesterday,
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "thisYear")]
    ThisYear,
}

impl DateRangePreset {
    /// Presets offered by the payment-tracking ledger.
    pub const TRACKING: [Self; 6] =
        [Self::All, Self::Today, Self::Yesterday, Self::Last7Days, Self::ThisMonth, Self::LastMonth];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7Days => "last7days",
            Self::ThisMonth => "thisMonth",
            Self::LastMonth => "lastMonth",
            Self::ThisYear => "thisYear",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7Days => "Last 7 Days",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::ThisYear => "This Year",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        [
            Self::All,
            Self::Today,
            Self::Yesterday,
            Self::Last7Days,
            Self::ThisMonth,
            Self::LastMonth,
            Self::ThisYear,
        ]
        .into_iter()
        .find(|p| p.as_str() == raw)
    }

    /// Window relative to `now`; `None` for [`Self::All`].
    #[must_use]
    pub fn window(self, now: PrimitiveDateTime) -> Option<DateWindow> {
        let midnight = PrimitiveDateTime::new(now.date(), Time::MIDNIGHT);
        let month_start = PrimitiveDateTime::new(first_of_month(now.date()), Time::MIDNIGHT);
        let window = match self {
            Self::All => return None,
            Self::Today => DateWindow::from(midnight),
            Self::Yesterday => DateWindow { start: midnight - Duration::days(1), end: Some(midnight) },
            Self::Last7Days => DateWindow::from(now - Duration::days(7)),
            Self::ThisMonth => DateWindow::from(month_start),
            Self::LastMonth => DateWindow {
                start: PrimitiveDateTime::new(first_of_previous_month(now.date()), Time::MIDNIGHT),
                end: Some(month_start),
            },
            Self::ThisYear => DateWindow::from(PrimitiveDateTime::new(
                first_of_year(now.date()),
                Time::MIDNIGHT,
            )),
        };
        Some(window)
    }

    /// Inclusive start/end dates used to prefill the report form.
    #[must_use]
    pub fn report_dates(self, today: Date) -> (Date, Date) {
        match self {
            Self::All | Self::ThisMonth => (first_of_month(today), today),
            Self::Today => (today, today),
            Self::Yesterday => (today - Duration::days(1), today),
            Self::Last7Days => (today - Duration::days(7), today),
            Self::LastMonth => (first_of_previous_month(today), first_of_month(today) - Duration::days(1)),
            Self::ThisYear => (first_of_year(today), today),
        }
    }
}

/// Half-open `[start, end)` window; no `end` means open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: PrimitiveDateTime,
    pub end: Option<PrimitiveDateTime>,
}

impl From<PrimitiveDateTime> for DateWindow {
    fn from(start: PrimitiveDateTime) -> Self {
        Self { start, end: None }
    }
}

impl DateWindow {
    #[must_use]
    pub fn contains(&self, at: PrimitiveDateTime) -> bool {
        at >= self.start && self.end.is_none_or(|end| at < end)
    }
}

fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

fn first_of_previous_month(date: Date) -> Date {
    let first = first_of_month(date);
    first_of_month(first - Duration::days(1))
}

fn first_of_year(date: Date) -> Date {
    Date::from_calendar_date(date.year(), Month::January, 1).unwrap_or(date)
}

// =============================================================================
// STUDENT PAYMENT HISTORY
// =============================================================================

/// Payment-history filters: fee type, inclusive paid-date range, search over
/// receipt number, fee type, and reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub fee_type: String,
    pub start_date: String,
    pub end_date: String,
    pub search: String,
}

impl HistoryFilter {
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        if let Some(fee_type) = selected(&self.fee_type) {
            if payment.fee_type != fee_type {
                return false;
            }
        }
        let paid = parse_date(&payment.paid_date);
        if let (Some(start), Some(paid)) = (parse_date(&self.start_date), paid) {
            if paid < start {
                return false;
            }
        }
        if let (Some(end), Some(paid)) = (parse_date(&self.end_date), paid) {
            if paid > end {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || contains_ci(&payment.id, &term)
            || contains_ci(&payment.fee_type, &term)
            || contains_ci(&payment.reference, &term)
    }

    #[must_use]
    pub fn apply(&self, payments: &[Payment]) -> Vec<Payment> {
        payments.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        selected(&self.fee_type).is_some()
            || !self.start_date.is_empty()
            || !self.end_date.is_empty()
            || !self.search.trim().is_empty()
    }
}

/// Sum of `amount` over `payments`.
#[must_use]
pub fn total_paid(payments: &[Payment]) -> u64 {
    payments.iter().map(|p| p.amount).sum()
}

// =============================================================================
// STUDENT PENDING FEES
// =============================================================================

/// Pending-fee filters: fee type and search over type and description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingFilter {
    pub fee_type: String,
    pub search: String,
}

impl PendingFilter {
    #[must_use]
    pub fn matches(&self, fee: &PendingFee) -> bool {
        if let Some(fee_type) = selected(&self.fee_type) {
            if fee.fee_type != fee_type {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        term.is_empty() || contains_ci(&fee.fee_type, &term) || contains_ci(&fee.description, &term)
    }

    #[must_use]
    pub fn apply(&self, fees: &[PendingFee]) -> Vec<PendingFee> {
        fees.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Amount plus late charge, summed.
#[must_use]
pub fn total_due(fees: &[PendingFee]) -> u64 {
    fees.iter().map(PendingFee::total_due).sum()
}

/// Overdue / due-soon / upcoming counts relative to `today`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DueCounts {
    pub overdue: usize,
    pub due_soon: usize,
    pub upcoming: usize,
}

impl DueCounts {
    #[must_use]
    pub fn tally(fees: &[PendingFee], today: Date) -> Self {
        let mut counts = Self::default();
        for fee in fees {
            let days = days_remaining(&fee.due_date, today);
            if days < 0 {
                counts.overdue += 1;
            } else if days <= DUE_SOON_DAYS {
                counts.due_soon += 1;
            } else {
                counts.upcoming += 1;
            }
        }
        counts
    }
}

/// Distinct values in first-seen order, for filter dropdowns.
#[must_use]
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_owned());
        }
    }
    seen
}

// =============================================================================
// ADMIN PAYMENT TRACKING
// =============================================================================

/// Payment-tracking ledger filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub branch: String,
    pub fee_type: String,
    pub mode: String,
    pub status: Option<PaymentStatus>,
    pub preset: DateRangePreset,
    pub search: String,
}

impl TransactionFilter {
    #[must_use]
    pub fn matches(&self, tx: &Transaction, window: Option<&DateWindow>) -> bool {
        if selected(&self.branch).is_some_and(|b| tx.branch != b)
            || selected(&self.fee_type).is_some_and(|f| tx.fee_type != f)
            || selected(&self.mode).is_some_and(|m| tx.mode != m)
            || self.status.is_some_and(|s| tx.status != s)
        {
            return false;
        }
        if let Some(window) = window {
            match parse_date_time(&tx.date) {
                Some(at) if window.contains(at) => {}
                _ => return false,
            }
        }
        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || contains_ci(&tx.id, &term)
            || contains_ci(&tx.student_name, &term)
            || contains_ci(&tx.roll_number, &term)
            || contains_ci(&tx.reference, &term)
    }

    #[must_use]
    pub fn apply(&self, transactions: &[Transaction], now: PrimitiveDateTime) -> Vec<Transaction> {
        let window = self.preset.window(now);
        transactions
            .iter()
            .filter(|tx| self.matches(tx, window.as_ref()))
            .cloned()
            .collect()
    }
}

/// Ledger headline figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionStats {
    /// Sum over successful transactions only.
    pub total_amount: u64,
    pub successful: usize,
    pub pending: usize,
    pub failed: usize,
}

impl TransactionStats {
    #[must_use]
    pub fn tally(transactions: &[Transaction]) -> Self {
        let mut stats = Self::default();
        for tx in transactions {
            match tx.status {
                PaymentStatus::Success => {
                    stats.successful += 1;
                    stats.total_amount += tx.amount;
                }
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Failed => stats.failed += 1,
            }
        }
        stats
    }
}
