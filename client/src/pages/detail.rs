//! Event detail page.

use crate::api::{ApiClient, ApiError};
use crate::pages::PageView;
use crate::view;

pub const MISSING_ID_MESSAGE: &str =
    "Invalid request: No event ID provided. Please navigate from the Home or Search page.";
pub const NOT_FOUND_MESSAGE: &str =
    "Event not found or has been suspended. Please try another event.";

/// Extract the numeric event id from a page query string such as `?id=5`
/// or `id=5&ref=home`.
pub fn event_id_from_query(query: &str) -> Option<i32> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "id")
        .and_then(|(_, value)| value.parse().ok())
}

/// Load the page from the query string. A missing or malformed id never
/// reaches the network.
pub async fn load(api: &ApiClient, query: &str) -> PageView {
    let Some(id) = event_id_from_query(query) else {
        return PageView::Error {
            message: MISSING_ID_MESSAGE.into(),
        };
    };
    load_by_id(api, id).await
}

pub async fn load_by_id(api: &ApiClient, id: i32) -> PageView {
    match api.event_detail(id).await {
        Ok(event) => PageView::Loaded(view::event_detail_view(&event)),
        Err(ApiError::NotFound) => PageView::Error {
            message: NOT_FOUND_MESSAGE.into(),
        },
        Err(err) => {
            tracing::error!("Load event detail error: {}", err);
            PageView::Error {
                message: format!(
                    "Error loading event details: {}. Please check the API server.",
                    err
                ),
            }
        }
    }
}

/// Registration modal visibility; toggled entirely client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterModal {
    pub open: bool,
}

impl RegisterModal {
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
