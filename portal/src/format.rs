//! Display formatting for amounts, dates, and payment inputs.
//!
//! All functions are pure. Anything that depends on "today" takes it as an
//! argument; the caller decides which clock to read.
//!
//! Unparseable dates are returned unchanged rather than reported, so a bad
//! fixture value shows up verbatim in the UI instead of blanking a cell.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Default length for [`truncate_text`].
pub const DEFAULT_TRUNCATE: usize = 30;

/// Days or fewer before the due date at which a fee counts as due soon.
pub const DUE_SOON_DAYS: i64 = 5;

// =============================================================================
// CURRENCY
// =============================================================================

/// `₹` with Indian digit grouping: `7250000` → `₹72,50,000`.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// As [`format_currency`], with a missing amount shown as `₹0`.
#[must_use]
pub fn format_currency_opt(amount: Option<u64>) -> String {
    format_currency(amount.unwrap_or(0))
}

/// Last three digits, then groups of two.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

// =============================================================================
// DATES
// =============================================================================

/// Parse the date part of an ISO date or date-time string.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let head = raw.get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`, or the `T`-separated form.
/// Date-only input is midnight; a trailing fraction or zone is ignored.
#[must_use]
pub fn parse_date_time(raw: &str) -> Option<PrimitiveDateTime> {
    let date = parse_date(raw)?;
    let rest = &raw[10..];
    if rest.is_empty() {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
    }
    if !(rest.starts_with(' ') || rest.starts_with('T')) {
        return None;
    }
    let hour: u8 = rest.get(1..3)?.parse().ok()?;
    let minute: u8 = rest.get(4..6)?.parse().ok()?;
    let second: u8 = match rest.get(7..9) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    let time = Time::from_hms(hour, minute, second).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

/// `2025-01-15` → `15 Jan 2025`. Empty input gives an empty string.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    parse_date(raw)
        .and_then(|d| d.format(format_description!("[day padding:none] [month repr:short] [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `2025-01-15 09:30:22` → `15 Jan 2025, 09:30`.
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    parse_date_time(raw)
        .and_then(|dt| {
            dt.format(format_description!("[day padding:none] [month repr:short] [year], [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}

/// Whole days from `today` until `due`; negative once overdue, zero when
/// `due` does not parse.
#[must_use]
pub fn days_remaining(due: &str, today: Date) -> i64 {
    parse_date(due).map_or(0, |d| (d - today).whole_days())
}

/// True when `raw` is a date strictly before `today`.
#[must_use]
pub fn is_date_past(raw: &str, today: Date) -> bool {
    parse_date(raw).is_some_and(|d| d < today)
}

/// Urgency bucket for a due date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl DueStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
            Self::Upcoming => "upcoming",
        }
    }
}

#[must_use]
pub fn status_from_due_date(due: &str, today: Date) -> DueStatus {
    let days = days_remaining(due, today);
    if days < 0 {
        DueStatus::Overdue
    } else if days <= DUE_SOON_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

/// Human label for a days-remaining count, as shown on upcoming dues.
#[must_use]
pub fn days_remaining_label(days: i64) -> String {
    if days < 0 {
        format!("Overdue by {} days", -days)
    } else {
        format!("Due in {days} days")
    }
}

/// `1` → `January`; out-of-range months give an empty string.
#[must_use]
pub fn month_name(month: u8) -> &'static str {
    match Month::try_from(month) {
        Ok(Month::January) => "January",
        Ok(Month::February) => "February",
        Ok(Month::March) => "March",
        Ok(Month::April) => "April",
        Ok(Month::May) => "May",
        Ok(Month::June) => "June",
        Ok(Month::July) => "July",
        Ok(Month::August) => "August",
        Ok(Month::September) => "September",
        Ok(Month::October) => "October",
        Ok(Month::November) => "November",
        Ok(Month::December) => "December",
        Err(_) => "",
    }
}

/// Academic years start in July: March 2025 is `2024-2025`.
#[must_use]
pub fn academic_year(date: Date) -> String {
    let year = date.year();
    if u8::from(date.month()) >= 7 {
        format!("{year}-{}", year + 1)
    } else {
        format!("{}-{year}", year - 1)
    }
}

// =============================================================================
// PAYMENT INPUTS
// =============================================================================

/// Group card digits in fours, keeping at most 16. Input with fewer than
/// four digits is returned as typed.
#[must_use]
pub fn format_card_number(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).take(16).collect();
    if digits.len() < 4 {
        return value.to_owned();
    }
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1225` → `12/25` once three digits are typed.
#[must_use]
pub fn format_expiry(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 3 {
        let year_end = digits.len().min(4);
        format!("{}/{}", &digits[..2], &digits[2..year_end])
    } else {
        value.to_owned()
    }
}

// =============================================================================
// TEXT & NUMBERS
// =============================================================================

/// Cut `text` to `length` characters and append `...` when it was longer.
#[must_use]
pub fn truncate_text(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_owned();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{cut}...")
}

/// Rounded `value / total` percentage; zero when either side is zero.
#[must_use]
pub fn calculate_percentage(value: u64, total: u64) -> u64 {
    if value == 0 || total == 0 {
        return 0;
    }
    let scaled = u128::from(value) * 100;
    let total = u128::from(total);
    u64::try_from((scaled + total / 2) / total).unwrap_or(u64::MAX)
}

/// `1536` → `1.5 KB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit + 1 < UNITS.len() && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let scaled = bytes as f64 / 1024_f64.powi(unit as i32);
    let fixed = format!("{scaled:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Receipt number for a payment made on `date`: `SVIT` + `yymmdd` + fee id.
#[must_use]
pub fn receipt_id(date: Date, fee_id: u32) -> String {
    format!(
        "SVIT{:02}{:02}{:02}{fee_id}",
        date.year().rem_euclid(100),
        u8::from(date.month()),
        date.day()
    )
}

/// Transaction reference from a millisecond timestamp: `TXN` followed by the
/// timestamp with its first six digits dropped.
#[must_use]
pub fn transaction_id(unix_millis: u128) -> String {
    let stamp = unix_millis.to_string();
    let tail = stamp.get(6..).unwrap_or(&stamp);
    format!("TXN{tail}")
}

/// Upper-case base-36 id: `prefix`, the timestamp, then five digits of
/// `entropy`.
#[must_use]
pub fn generate_id(prefix: &str, unix_millis: u128, entropy: u64) -> String {
    let suffix: String = base36(u128::from(entropy)).chars().take(5).collect();
    format!("{prefix}{}{suffix}", base36(unix_millis)).to_uppercase()
}

fn base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[usize::try_from(value % 36).unwrap_or(0)]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
