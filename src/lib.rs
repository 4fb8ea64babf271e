#![doc = include_str!("../README.md")]

pub mod config;
pub mod database;
pub mod engine;
mod error;
pub mod event;
pub mod form;
pub mod listing;
pub mod record;
pub mod store;
pub mod ui;
mod utils;

pub use error::{Error, Result};
pub(crate) use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use crate::{
        config::StoreConfig,
        database::*,
        engine::*,
        event::{StoreEvent, store_events},
        form::{EntryForm, FormField, Submission},
        listing::{ListingTab, ListingView, ViewState},
        record::*,
        store::RecordStore,
    };
}
