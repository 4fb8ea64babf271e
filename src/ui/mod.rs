//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for the form, the listing and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it from a [`RecordStore`], an [`EntryForm`] and a
//! [`ListingView`], then call [`App::run`] to start the event loop.
//!
//! [`RecordStore`]: crate::store::RecordStore
//! [`EntryForm`]: crate::form::EntryForm
//! [`ListingView`]: crate::listing::ListingView
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
