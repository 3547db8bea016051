//! Home page: the upcoming events list.

use crate::api::{ApiClient, ApiError};
use crate::models::EventSummary;
use crate::pages::PageView;
use crate::view::{self, EventStatus, ViewNode};

pub const EMPTY_MESSAGE: &str = "No upcoming charity events at the moment. Check back soon!";

/// Fetch upcoming events and build the page view.
pub async fn load(api: &ApiClient) -> PageView {
    match api.upcoming_events().await {
        Ok(events) => view_from(events),
        Err(err) => {
            tracing::error!("Home page error: {}", err);
            PageView::Error {
                message: error_message(&err),
            }
        }
    }
}

/// Pure part of the load: build the view from already-fetched events. The
/// upcoming endpoint only returns future events, so every badge is
/// "Upcoming".
pub fn view_from(events: Vec<EventSummary>) -> PageView {
    if events.is_empty() {
        return PageView::Empty {
            message: EMPTY_MESSAGE.into(),
        };
    }
    let cards = events
        .iter()
        .map(|e| view::event_card(e, EventStatus::Upcoming))
        .collect();
    PageView::Loaded(ViewNode::el("div", cards).with_class("events-grid"))
}

fn error_message(err: &ApiError) -> String {
    format!(
        "Failed to load events: {}. Please ensure the API server is running.",
        err
    )
}
