use serde::Deserialize;
use time::OffsetDateTime;

/// An event as returned by the list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct EventSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub purpose: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub ticket_price: f64,
    pub goal_amount: f64,
    pub current_amount: f64,
    pub category_id: i32,
    pub organization_id: i32,
    pub category_name: String,
    pub org_name: String,
}

/// An event as returned by the detail endpoint, with the full organization
/// record flattened in.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub purpose: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub ticket_price: f64,
    pub goal_amount: f64,
    pub current_amount: f64,
    pub category_id: i32,
    pub organization_id: i32,
    pub category_name: String,
    pub org_name: String,
    pub mission: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
