//! Search page: category selector, filter form, result cards.

use crate::api::{ApiClient, ApiError, SearchFilters};
use crate::clock::Clock;
use crate::models::{Category, EventSummary};
use crate::pages::PageView;
use crate::view::{self, EventStatus, ViewNode};

pub const PROMPT_MESSAGE: &str =
    "Please enter search criteria and click \"Search Events\" to find relevant charity events.";
pub const NO_RESULTS_MESSAGE: &str =
    "No events found matching your criteria. Try adjusting your filters (e.g., remove the date or location)!";
pub const LOADING_MESSAGE: &str = "Searching for events...";

/// Raw form fields as the user supplied them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub date: Option<time::Date>,
    pub location: String,
    pub category_id: Option<i32>,
}

impl SearchForm {
    /// Normalized filters: a whitespace-only location is no filter at all.
    pub fn filters(&self) -> SearchFilters {
        let location = self.location.trim();
        SearchFilters {
            date: self.date,
            location: (!location.is_empty()).then(|| location.to_string()),
            category_id: self.category_id,
        }
    }

    /// "Clear filters": reset the form and show the prompt, without touching
    /// the API.
    pub fn clear(&mut self) -> PageView {
        *self = SearchForm::default();
        PageView::Empty {
            message: PROMPT_MESSAGE.into(),
        }
    }
}

/// Shown between submitting the form and receiving a response.
pub fn loading_view() -> PageView {
    PageView::Loading {
        message: LOADING_MESSAGE.into(),
    }
}

/// The category selector options, headed by an unfiltered default.
pub fn category_options(categories: &[Category]) -> ViewNode {
    let mut options = vec![
        ViewNode::el("option", vec![ViewNode::text("All Categories")]).with_attr("value", "")
    ];
    options.extend(categories.iter().map(|c| {
        ViewNode::el("option", vec![ViewNode::text(c.name.as_str())])
            .with_attr("value", c.id.to_string())
    }));
    ViewNode::el("select", options).with_class("category-select")
}

/// Load the options for the category selector.
pub async fn load_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.categories().await.map_err(|err| {
        tracing::error!("Load categories error: {}", err);
        err
    })
}

/// Banner text when the selector cannot be populated.
pub fn categories_error_message(err: &ApiError) -> String {
    format!(
        "Error loading categories: {}. Please check the API server.",
        err
    )
}

/// Submit the form: fetch matching events and render them.
pub async fn submit(api: &ApiClient, form: &SearchForm, clock: &dyn Clock) -> PageView {
    match api.search_events(&form.filters()).await {
        Ok(results) => results_view(results, clock),
        Err(err) => {
            tracing::error!("Search error: {}", err);
            PageView::Error {
                message: format!(
                    "Search error: {}. Please ensure the API server is running and try again.",
                    err
                ),
            }
        }
    }
}

/// Pure rendering of fetched results; the badge distinguishes upcoming from
/// past against the injected clock.
pub fn results_view(results: Vec<EventSummary>, clock: &dyn Clock) -> PageView {
    if results.is_empty() {
        return PageView::Empty {
            message: NO_RESULTS_MESSAGE.into(),
        };
    }
    let cards = results
        .iter()
        .map(|e| view::event_card(e, EventStatus::of(e.date, clock)))
        .collect();
    PageView::Loaded(ViewNode::el("div", cards).with_class("events-grid"))
}
