use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::event::{EventDetail, EventSummary},
};

/// Optional filters for the search endpoint. Filters AND together; an
/// absent filter imposes no constraint.
#[derive(Debug, serde::Deserialize)]
pub struct EventSearchParams {
    /// Calendar-day match on the event date, ignoring time-of-day.
    pub date: Option<time::Date>,
    /// Case-insensitive substring match.
    pub location: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl EventSearchParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 500)
    }
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

const SUMMARY_COLUMNS: &str = r#"
    e.id, e.name, e.description, e.purpose, e.date, e.location,
    e.ticket_price, e.goal_amount, e.current_amount, e.is_suspended,
    e.category_id, e.organization_id,
    c.name AS category_name,
    o.name AS org_name
"#;

pub async fn upcoming(State(pool): State<PgPool>) -> Result<Json<Vec<EventSummary>>> {
    let events = sqlx::query_as::<_, EventSummary>(&format!(
        r#"
        SELECT {SUMMARY_COLUMNS}
        FROM events e
        JOIN categories c ON c.id = e.category_id
        JOIN organizations o ON o.id = e.organization_id
        WHERE e.is_suspended = false
          AND e.date > NOW()
        ORDER BY e.date
        "#
    ))
    .fetch_all(&pool)
    .await?;

    Ok(Json(events))
}

pub async fn search(
    State(pool): State<PgPool>,
    Query(params): Query<EventSearchParams>,
) -> Result<Json<Vec<EventSummary>>> {
    let events = sqlx::query_as::<_, EventSummary>(&format!(
        r#"
        SELECT {SUMMARY_COLUMNS}
        FROM events e
        JOIN categories c ON c.id = e.category_id
        JOIN organizations o ON o.id = e.organization_id
        WHERE e.is_suspended = false
          AND ($1::date IS NULL OR (e.date AT TIME ZONE 'UTC')::date = $1)
          AND ($2::text IS NULL OR e.location ILIKE '%' || $2 || '%')
          AND ($3::int4 IS NULL OR e.category_id = $3)
        ORDER BY e.date
        LIMIT $4 OFFSET $5
        "#
    ))
    .bind(params.date)
    .bind(params.location.as_deref())
    .bind(params.category_id)
    .bind(params.limit())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Json(events))
}

pub async fn get_one(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<EventDetail>> {
    let event = sqlx::query_as::<_, EventDetail>(&format!(
        r#"
        SELECT {SUMMARY_COLUMNS},
               o.mission, o.contact_email, o.contact_phone
        FROM events e
        JOIN categories c ON c.id = e.category_id
        JOIN organizations o ON o.id = e.organization_id
        WHERE e.id = $1 AND e.is_suspended = false
        "#
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Event {} not found or suspended", id)))?;

    Ok(Json(event))
}
