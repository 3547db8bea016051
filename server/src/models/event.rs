use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

/// An event joined with its category name and organization name, as served
/// by the list endpoints. Money fields serialize as JSON numbers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EventSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub purpose: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub ticket_price: Decimal,
    pub goal_amount: Decimal,
    pub current_amount: Decimal,
    pub is_suspended: bool,
    pub category_id: i32,
    pub organization_id: i32,
    pub category_name: String,
    pub org_name: String,
}

/// A single event with the full organization record flattened in, as served
/// by the detail endpoint.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EventDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub purpose: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub ticket_price: Decimal,
    pub goal_amount: Decimal,
    pub current_amount: Decimal,
    pub is_suspended: bool,
    pub category_id: i32,
    pub organization_id: i32,
    pub category_name: String,
    pub org_name: String,
    pub mission: String,
    pub contact_email: String,
    pub contact_phone: String,
}
