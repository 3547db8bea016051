//! Formatting shared by the card and detail views.

use time::macros::format_description;
use time::OffsetDateTime;

/// Funding progress as a whole percentage, clamped to 0..=100 so the bar
/// never overflows when more than the goal has been raised.
pub fn progress_percent(current: f64, goal: f64) -> u8 {
    if goal <= 0.0 {
        return if current > 0.0 { 100 } else { 0 };
    }
    (current / goal * 100.0).round().clamp(0.0, 100.0) as u8
}

/// "$250.00"
pub fn currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Ticket price line for event cards.
pub fn ticket_price_label(price: f64) -> String {
    if price == 0.0 {
        "Free Entry (Donations Encouraged)".into()
    } else {
        format!("{} per ticket", currency(price))
    }
}

/// Ticket price line for the detail page.
pub fn detail_ticket_price_label(price: f64) -> String {
    if price == 0.0 {
        "Free Entry (Donations Encouraged)".into()
    } else {
        format!("{} per ticket (100% goes to charity)", currency(price))
    }
}

/// "3 October 2026"
pub fn long_date(date: OffsetDateTime) -> String {
    let fmt = format_description!("[day padding:none] [month repr:long] [year]");
    date.format(&fmt).unwrap_or_else(|_| date.to_string())
}

/// "07:30 PM"
pub fn short_time(date: OffsetDateTime) -> String {
    let fmt = format_description!("[hour repr:12]:[minute] [period]");
    date.format(&fmt).unwrap_or_else(|_| date.to_string())
}

/// "3 October 2026, 07:30 PM" — the combined form shown on cards.
pub fn date_time(date: OffsetDateTime) -> String {
    format!("{}, {}", long_date(date), short_time(date))
}

/// "50% Complete"
pub fn progress_complete_label(current: f64, goal: f64) -> String {
    format!("{}% Complete", progress_percent(current, goal))
}
