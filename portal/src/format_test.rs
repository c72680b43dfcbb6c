use super::*;
use time::macros::date;

#[test]
fn currency_uses_indian_grouping() {
    assert_eq!(format_currency(0), "₹0");
    assert_eq!(format_currency(999), "₹999");
    assert_eq!(format_currency(2500), "₹2,500");
    assert_eq!(format_currency(25000), "₹25,000");
    assert_eq!(format_currency(1_850_000), "₹18,50,000");
    assert_eq!(format_currency(7_250_000), "₹72,50,000");
    assert_eq!(format_currency(123_456_789), "₹12,34,56,789");
}

#[test]
fn missing_currency_is_zero() {
    assert_eq!(format_currency_opt(None), "₹0");
    assert_eq!(format_currency_opt(Some(8000)), "₹8,000");
}

#[test]
fn dates_format_short_month() {
    assert_eq!(format_date("2025-01-15"), "15 Jan 2025");
    assert_eq!(format_date("2025-03-05 10:12:55"), "5 Mar 2025");
    assert_eq!(format_date(""), "");
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_date("2025-13-40"), "2025-13-40");
    assert_eq!(format_date_time("whenever"), "whenever");
}

#[test]
fn date_time_includes_hours_and_minutes() {
    assert_eq!(format_date_time("2025-01-15 09:30:22"), "15 Jan 2025, 09:30");
    assert_eq!(format_date_time("2025-03-19T14:23:10.000Z"), "19 Mar 2025, 14:23");
    assert_eq!(format_date_time("2025-03-19"), "19 Mar 2025, 00:00");
}

#[test]
fn days_remaining_counts_calendar_days() {
    let today = date!(2025 - 04 - 10);
    assert_eq!(days_remaining("2025-04-15", today), 5);
    assert_eq!(days_remaining("2025-04-10", today), 0);
    assert_eq!(days_remaining("2025-03-30", today), -11);
    assert_eq!(days_remaining("", today), 0);
}

#[test]
fn due_status_buckets() {
    let today = date!(2025 - 04 - 10);
    assert_eq!(status_from_due_date("2025-04-09", today), DueStatus::Overdue);
    assert_eq!(status_from_due_date("2025-04-15", today), DueStatus::DueSoon);
    assert_eq!(status_from_due_date("2025-04-16", today), DueStatus::Upcoming);
    assert_eq!(DueStatus::DueSoon.as_str(), "due-soon");
}

#[test]
fn days_label_reads_naturally() {
    assert_eq!(days_remaining_label(-3), "Overdue by 3 days");
    assert_eq!(days_remaining_label(0), "Due in 0 days");
    assert_eq!(days_remaining_label(12), "Due in 12 days");
}

#[test]
fn past_dates() {
    let today = date!(2025 - 04 - 10);
    assert!(is_date_past("2025-04-09", today));
    assert!(!is_date_past("2025-04-10", today));
    assert!(!is_date_past("not a date", today));
}

#[test]
fn card_number_groups_of_four() {
    assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
    assert_eq!(format_card_number("4111-1111 11"), "4111 1111 11");
    assert_eq!(format_card_number("41111111111111119999"), "4111 1111 1111 1111");
    assert_eq!(format_card_number("41"), "41");
    assert_eq!(format_card_number(""), "");
}

#[test]
fn expiry_inserts_slash() {
    assert_eq!(format_expiry("1225"), "12/25");
    assert_eq!(format_expiry("122"), "12/2");
    assert_eq!(format_expiry("12"), "12");
    assert_eq!(format_expiry("12/259"), "12/25");
}

#[test]
fn truncate_appends_ellipsis() {
    let long = "Transportation fee for April-June 2025";
    assert_eq!(truncate_text(long, DEFAULT_TRUNCATE), "Transportation fee for April-J...");
    assert_eq!(truncate_text("Library", DEFAULT_TRUNCATE), "Library");
}

#[test]
fn percentage_rounds() {
    assert_eq!(calculate_percentage(1875, 2500), 75);
    assert_eq!(calculate_percentage(1, 3), 33);
    assert_eq!(calculate_percentage(2, 3), 67);
    assert_eq!(calculate_percentage(0, 10), 0);
    assert_eq!(calculate_percentage(10, 0), 0);
}

#[test]
fn file_sizes() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
}

#[test]
fn month_names() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}

#[test]
fn academic_year_starts_in_july() {
    assert_eq!(academic_year(date!(2025 - 03 - 20)), "2024-2025");
    assert_eq!(academic_year(date!(2025 - 07 - 01)), "2025-2026");
}

#[test]
fn identifiers() {
    assert_eq!(receipt_id(date!(2025 - 01 - 05), 3), "SVIT2501053");
    assert_eq!(transaction_id(1_742_460_323_123), "TXN0323123");
}

#[test]
fn generated_ids_are_prefixed_base36() {
    assert_eq!(generate_id("UPI", 35, 0), "UPIZ0");
    assert_eq!(generate_id("REF", 36, 36 * 36 * 36 * 36 * 36), "REF1010000");
    let id = generate_id("CARD", 1_742_460_323_123, u64::MAX);
    assert!(id.starts_with("CARD"));
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}
