//! Formatting rules: currency, free-entry wording, dates, progress clamping.

use charityevents_client::format;
use pretty_assertions::assert_eq;
use time::macros::datetime;

#[test]
fn progress_percent_is_rounded_share_of_goal() {
    assert_eq!(format::progress_percent(250.0, 500.0), 50);
    assert_eq!(format::progress_percent(333.0, 1000.0), 33);
    assert_eq!(format::progress_percent(335.0, 1000.0), 34);
}

#[test]
fn progress_percent_never_exceeds_100() {
    assert_eq!(format::progress_percent(750.0, 500.0), 100);
    assert_eq!(format::progress_percent(500.0, 500.0), 100);
}

#[test]
fn progress_percent_handles_zero_goal() {
    assert_eq!(format::progress_percent(0.0, 0.0), 0);
    assert_eq!(format::progress_percent(10.0, 0.0), 100);
}

#[test]
fn currency_renders_two_decimals() {
    assert_eq!(format::currency(250.0), "$250.00");
    assert_eq!(format::currency(12.5), "$12.50");
    assert_eq!(format::currency(0.0), "$0.00");
}

#[test]
fn zero_ticket_price_is_free_entry() {
    assert_eq!(
        format::ticket_price_label(0.0),
        "Free Entry (Donations Encouraged)"
    );
    assert_eq!(
        format::detail_ticket_price_label(0.0),
        "Free Entry (Donations Encouraged)"
    );
}

#[test]
fn positive_ticket_price_is_currency_per_ticket() {
    assert_eq!(format::ticket_price_label(12.5), "$12.50 per ticket");
    assert_eq!(
        format::detail_ticket_price_label(12.5),
        "$12.50 per ticket (100% goes to charity)"
    );
}

#[test]
fn dates_format_long_and_short() {
    let date = datetime!(2026-10-03 19:30 UTC);
    assert_eq!(format::long_date(date), "3 October 2026");
    assert_eq!(format::short_time(date), "07:30 PM");
    assert_eq!(format::date_time(date), "3 October 2026, 07:30 PM");
}

#[test]
fn morning_times_use_am() {
    let date = datetime!(2026-01-09 08:05 UTC);
    assert_eq!(format::short_time(date), "08:05 AM");
}

#[test]
fn progress_complete_label_matches_percent() {
    assert_eq!(format::progress_complete_label(250.0, 500.0), "50% Complete");
    assert_eq!(
        format::progress_complete_label(900.0, 500.0),
        "100% Complete"
    );
}
