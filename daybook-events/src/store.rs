use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::Event;

/// Read-only lookup of the events on a calendar day.
pub trait EventSource {
    /// Events stored under `date_key`, in authored order. Unknown keys,
    /// including the empty key, yield nothing.
    fn events_on(&self, date_key: &str) -> &[Event];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    days: HashMap<String, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table served when no fixture is configured.
    pub fn sample() -> &'static EventStore {
        static SAMPLE: Lazy<EventStore> = Lazy::new(sample_events);
        &SAMPLE
    }

    /// Appends `event` to the end of the day stored under `date_key`.
    pub fn insert<S: Into<String>>(&mut self, date_key: S, event: Event) {
        self.days.entry(date_key.into()).or_default().push(event);
    }

    /// Number of days with at least one entry.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> Vec<&str> {
        let mut dates = self.days.keys().map(String::as_str).collect::<Vec<_>>();
        dates.sort_unstable();
        dates
    }
}

impl EventSource for EventStore {
    fn events_on(&self, date_key: &str) -> &[Event] {
        self.days.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<(String, Vec<Event>)> for EventStore {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Event>)>>(iter: I) -> Self {
        let mut store = EventStore::new();
        for (date_key, events) in iter {
            store.days.entry(date_key).or_default().extend(events);
        }
        store
    }
}

#[cfg(feature = "serde")]
mod json {
    use std::{fs, path::Path};

    use super::*;
    use crate::{parse_date_key, StoreError};

    impl EventStore {
        /// Loads a store from `{ "YYYY-MM-DD": [event, ...], ... }`.
        pub fn from_json<S: AsRef<str>>(s: S) -> Result<Self, StoreError> {
            let days: HashMap<String, Vec<Event>> = serde_json::from_str(s.as_ref())?;

            if let Some(bad) = days.keys().find(|key| parse_date_key(key).is_none()) {
                return Err(StoreError::InvalidDateKey(bad.clone()));
            }

            Ok(EventStore { days })
        }

        pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
            Self::from_json(fs::read_to_string(path)?)
        }
    }
}

fn sample_events() -> EventStore {
    fn day(date_key: &str, events: &[(u32, &str, &str, &str)]) -> (String, Vec<Event>) {
        let events = events
            .iter()
            .map(|&(id, title, time, description)| {
                Event::new(id, title, time).with_description(description)
            })
            .collect();
        (date_key.to_string(), events)
    }

    [
        day(
            "2025-05-15",
            &[
                (1, "Project kickoff", "9:00 AM", "Start new project"),
                (2, "Lunch with Sarah", "12:30 PM", "Discuss collaboration"),
                (3, "Evening yoga class", "6:00 PM", "Relax and stretch"),
            ],
        ),
        day(
            "2025-05-02",
            &[
                (4, "Team meeting", "10:00 AM", "Weekly sync"),
                (5, "Doctor's appointment", "2:00 PM", "Routine check-up"),
                (6, "Dinner with family", "7:00 PM", "Family time"),
            ],
        ),
        day(
            "2025-05-27",
            &[
                (1, "Meeting with team", "10:00 AM", "Discuss project updates"),
                (2, "Doctor Appointment", "3:00 PM", "Annual check-up"),
                (3, "Dinner with friends", "7:30 PM", "Catch up over dinner"),
            ],
        ),
        day(
            "2025-05-28",
            &[(4, "Project deadline", "All day", "Submit final report")],
        ),
        day(
            "2025-05-10",
            &[
                (5, "Gym session", "6:00 AM", "Morning workout"),
                (6, "Conference call", "1:00 PM", "Weekly sync with client"),
                (6, "Conference call", "1:00 PM", "Weekly sync with client"),
            ],
        ),
        day(
            "2025-05-30",
            &[
                (7, "Lunch with client", "12:00 PM", "Discuss project requirements"),
                (8, "Evening walk", "5:30 PM", "Relax and unwind"),
                (9, "Movie night", "8:00 PM", "Watch the latest release"),
            ],
        ),
        day(
            "2025-05-31",
            &[
                (10, "Weekend getaway", "All day", "Trip to the mountains"),
                (11, "Grocery shopping", "2:00 PM", "Buy weekly groceries"),
                (12, "Family dinner", "6:00 PM", "Dinner with family"),
            ],
        ),
    ]
    .into_iter()
    .collect()
}
