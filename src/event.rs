use std::sync::mpsc::{self, Receiver, Sender};

/// Published after the record files change, so views can reload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    RecordsAppended { students: usize, courses: usize },
}

/// Creates a connected publisher/subscriber pair
///
/// Either end can be built first; events queue until the subscriber drains them.
pub fn store_events() -> (Sender<StoreEvent>, Receiver<StoreEvent>) { mpsc::channel() }
