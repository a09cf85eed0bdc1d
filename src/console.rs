//! Project screen state and the rules that reconcile it with the server.

mod derived;
mod detail_cache;
mod execute;
mod learning;
mod refresh;
mod request;
mod selection;
mod session;
mod view;

pub use self::derived::{
    EMPTY_CHECKLIST_HINT, Progress, domain_counts, evidence_preview, item_detail_lines,
    latest_targets, latest_version, progress, rounded_percent, selection_signature,
    selections_equal, unavailable_selected,
};
pub use self::detail_cache::PackDetailCache;
pub use self::execute::execute;
pub use self::learning::{LearningEntry, LearningGroup, NO_SOURCE_URL, learning_center};
pub use self::refresh::RefreshSequencer;
pub use self::request::{EnrichPass, Request, Response, Settle};
pub use self::selection::{PackSelection, Toggle};
pub use self::session::Session;
pub use self::view::ProjectView;
