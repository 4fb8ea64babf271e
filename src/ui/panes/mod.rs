//! Stateless render functions, one per visible pane

mod form;
mod listing;
mod status;

pub use form::render_form_pane;
pub use listing::render_listing_pane;
pub use status::render_status_bar;
