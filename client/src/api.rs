//! HTTP client for the events API.

use std::time::Duration;

use crate::models::{Category, EventDetail, EventSummary};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors surfaced by API calls, classified so pages can render the right
/// state.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404 — the event does not exist or has been suspended.
    #[error("not found")]
    NotFound,
    /// Any other non-success status.
    #[error("API request failed: {0}")]
    Status(reqwest::StatusCode),
    /// Connection, DNS, or timeout failure.
    #[error("network error: {0}")]
    Network(reqwest::Error),
    /// Response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e)
        } else {
            ApiError::Network(e)
        }
    }
}

/// User-supplied search filters; only supplied values appear in the query
/// string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub date: Option<time::Date>,
    pub location: Option<String>,
    pub category_id: Option<i32>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.location.is_none() && self.category_id.is_none()
    }

    /// `?date=...&location=...&categoryId=...`, or empty when no filters are
    /// supplied.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(date) = self.date {
            pairs.push(format!("date={}", date));
        }
        if let Some(location) = &self.location {
            pairs.push(format!("location={}", urlencoding::encode(location)));
        }
        if let Some(id) = self.category_id {
            pairs.push(format!("categoryId={}", id));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(resp.json::<T>().await?)
    }

    /// GET /api/events/upcoming
    pub async fn upcoming_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        self.get_json("/api/events/upcoming").await
    }

    /// GET /api/events/search
    pub async fn search_events(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<EventSummary>, ApiError> {
        self.get_json(&format!("/api/events/search{}", filters.query_string()))
            .await
    }

    /// GET /api/events/:id
    pub async fn event_detail(&self, id: i32) -> Result<EventDetail, ApiError> {
        self.get_json(&format!("/api/events/{}", id)).await
    }

    /// GET /api/categories
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories").await
    }
}
