pub mod detail;
pub mod home;
pub mod search;

use crate::view::ViewNode;

/// Outcome of one page load. Every failure becomes a rendered state; nothing
/// propagates past the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Content is ready to render.
    Loaded(ViewNode),
    /// A request is in flight.
    Loading { message: String },
    /// The load succeeded but there is nothing to show.
    Empty { message: String },
    /// The load failed; shown as an inline banner.
    Error { message: String },
}
