mod classify;
mod date_key;
mod error;
mod filter;
mod store;
mod structs;
mod view;

pub use classify::classify;
pub use date_key::{date_key, parse_date_key};
pub use error::StoreError;
pub use filter::{filter_events, TimeFilters};
pub use store::{EventSource, EventStore};
pub use structs::{Event, TimePeriod};
pub use view::{Agenda, View};
