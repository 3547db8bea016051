//! Declarative view trees. Pages build these from API data and `html`
//! renders them, so every builder is testable without a live document.

use time::OffsetDateTime;

use crate::clock::Clock;
use crate::format;
use crate::models::{EventDetail, EventSummary};

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/400x250?text=Charity+Event";
pub const HERO_PLACEHOLDER: &str = "https://via.placeholder.com/1200x400?text=Event+Detail";

/// Delay before a progress bar animates to its fill width.
pub const CARD_PROGRESS_DELAY_MS: u32 = 300;
pub const HERO_PROGRESS_DELAY_MS: u32 = 500;

/// Image fit applied to whichever source ends up displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    Cover,
    Contain,
}

/// An image with its load-failure contract: when `src` fails, swap in
/// `fallback_src` and switch to `fallback_fit` so the placeholder is not
/// cropped. A dimmed image drops its filter along with the swap.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    pub src: String,
    pub alt: String,
    pub fit: ImageFit,
    pub dimmed: bool,
    pub fallback_src: String,
    pub fallback_fit: ImageFit,
}

/// Deterministic per-event thumbnail path.
pub fn event_image_path(event_id: i32) -> String {
    format!("images/event-{}.jpg", event_id)
}

pub fn card_image(event_id: i32, alt: &str) -> ImageSpec {
    ImageSpec {
        src: event_image_path(event_id),
        alt: alt.to_string(),
        fit: ImageFit::Cover,
        dimmed: false,
        fallback_src: CARD_PLACEHOLDER.to_string(),
        fallback_fit: ImageFit::Contain,
    }
}

pub fn hero_image(event_id: i32, name: &str) -> ImageSpec {
    ImageSpec {
        src: event_image_path(event_id),
        alt: format!("{} - Hero Image", name),
        fit: ImageFit::Cover,
        dimmed: true,
        fallback_src: HERO_PLACEHOLDER.to_string(),
        fallback_fit: ImageFit::Contain,
    }
}

/// Renderer-independent view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element {
        tag: &'static str,
        class: Option<&'static str>,
        attrs: Vec<(String, String)>,
        children: Vec<ViewNode>,
    },
    Text(String),
    Image(ImageSpec),
}

impl ViewNode {
    pub fn el(tag: &'static str, children: Vec<ViewNode>) -> Self {
        ViewNode::Element {
            tag,
            class: None,
            attrs: Vec::new(),
            children,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ViewNode::Text(value.into())
    }

    pub fn with_class(mut self, value: &'static str) -> Self {
        if let ViewNode::Element { class, .. } = &mut self {
            *class = Some(value);
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let ViewNode::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.into()));
        }
        self
    }
}

/// Card status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    /// Classify an event date against the injected clock; strictly-future
    /// dates are upcoming.
    pub fn of(date: OffsetDateTime, clock: &dyn Clock) -> Self {
        if date > clock.now() {
            EventStatus::Upcoming
        } else {
            EventStatus::Past
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Past",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "#27ae60",
            EventStatus::Past => "#7f8c8d",
        }
    }
}

fn badge(status: EventStatus) -> ViewNode {
    ViewNode::el("span", vec![ViewNode::text(status.label())])
        .with_class("status-badge")
        .with_attr("style", format!("background-color: {}", status.color()))
}

/// A funding progress bar whose fill animates to `percent` after the given
/// delay.
pub fn progress_bar(percent: u8, reveal_delay_ms: u32) -> ViewNode {
    ViewNode::el(
        "div",
        vec![ViewNode::el("div", vec![])
            .with_class("progress-fill")
            .with_attr("data-percent", percent.to_string())
            .with_attr("data-reveal-delay-ms", reveal_delay_ms.to_string())],
    )
    .with_class("progress")
}

fn progress_text(current: f64, goal: f64) -> ViewNode {
    ViewNode::el(
        "div",
        vec![
            ViewNode::el(
                "span",
                vec![ViewNode::text(format!(
                    "Raised: {}",
                    format::currency(current)
                ))],
            ),
            ViewNode::el(
                "span",
                vec![ViewNode::text(format!("Goal: {}", format::currency(goal)))],
            ),
        ],
    )
    .with_class("progress-text")
}

/// One event card, structurally shared by the home and search pages.
pub fn event_card(event: &EventSummary, status: EventStatus) -> ViewNode {
    let percent = format::progress_percent(event.current_amount, event.goal_amount);
    ViewNode::el(
        "div",
        vec![
            ViewNode::Image(card_image(event.id, &event.name)),
            badge(status),
            ViewNode::el("span", vec![ViewNode::text(event.category_name.as_str())])
                .with_class("category"),
            ViewNode::el("h3", vec![ViewNode::text(event.name.as_str())]),
            ViewNode::el("p", vec![ViewNode::text(format::date_time(event.date))])
                .with_class("date"),
            ViewNode::el("p", vec![ViewNode::text(event.location.as_str())])
                .with_class("location"),
            ViewNode::el(
                "p",
                vec![ViewNode::text(format::ticket_price_label(
                    event.ticket_price,
                ))],
            )
            .with_class("price"),
            progress_bar(percent, CARD_PROGRESS_DELAY_MS),
            progress_text(event.current_amount, event.goal_amount),
            ViewNode::el("a", vec![ViewNode::text("View Details")])
                .with_class("view-details")
                .with_attr("href", format!("event-detail.html?id={}", event.id)),
        ],
    )
    .with_class("event-card card")
}

fn section(heading: &'static str, children: Vec<ViewNode>) -> ViewNode {
    let mut nodes = vec![ViewNode::el("h2", vec![ViewNode::text(heading)])];
    nodes.extend(children);
    ViewNode::el("section", nodes)
}

/// The detail page body: hero, story, organization, ticket and progress.
pub fn event_detail_view(event: &EventDetail) -> ViewNode {
    let percent = format::progress_percent(event.current_amount, event.goal_amount);
    ViewNode::el(
        "article",
        vec![
            ViewNode::el(
                "div",
                vec![
                    ViewNode::Image(hero_image(event.id, &event.name)),
                    ViewNode::el("span", vec![ViewNode::text(event.category_name.as_str())])
                        .with_class("category"),
                    ViewNode::el("h1", vec![ViewNode::text(event.name.as_str())]),
                    ViewNode::el(
                        "div",
                        vec![
                            ViewNode::el(
                                "span",
                                vec![ViewNode::text(format::long_date(event.date))],
                            )
                            .with_class("date"),
                            ViewNode::el(
                                "span",
                                vec![ViewNode::text(format::short_time(event.date))],
                            )
                            .with_class("time"),
                            ViewNode::el("span", vec![ViewNode::text(event.location.as_str())])
                                .with_class("location"),
                            ViewNode::el("span", vec![ViewNode::text(event.org_name.as_str())])
                                .with_class("org"),
                        ],
                    )
                    .with_class("event-meta"),
                ],
            )
            .with_class("event-hero"),
            section(
                "About This Event",
                vec![ViewNode::el(
                    "p",
                    vec![ViewNode::text(event.description.as_str())],
                )],
            ),
            section(
                "Our Purpose",
                vec![ViewNode::el(
                    "p",
                    vec![ViewNode::text(event.purpose.as_str())],
                )],
            ),
            section(
                "About the Organiser",
                vec![
                    ViewNode::el("p", vec![ViewNode::text(event.mission.as_str())])
                        .with_class("org-mission"),
                    ViewNode::el(
                        "p",
                        vec![ViewNode::text(format!(
                            "{} | {}",
                            event.contact_email, event.contact_phone
                        ))],
                    )
                    .with_class("org-contact"),
                ],
            ),
            ViewNode::el(
                "p",
                vec![ViewNode::text(format::detail_ticket_price_label(
                    event.ticket_price,
                ))],
            )
            .with_class("ticket-price"),
            section(
                "Funding Progress",
                vec![
                    progress_text(event.current_amount, event.goal_amount),
                    progress_bar(percent, HERO_PROGRESS_DELAY_MS),
                    ViewNode::el(
                        "div",
                        vec![ViewNode::text(format::progress_complete_label(
                            event.current_amount,
                            event.goal_amount,
                        ))],
                    )
                    .with_class("progress-percent"),
                ],
            ),
        ],
    )
    .with_class("event-detail")
}
