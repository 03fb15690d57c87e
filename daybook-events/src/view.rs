use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{date_key, filter_events, Event, EventSource, TimeFilters, TimePeriod};

const SELECT_PROMPT: &str = "Select a date to see events";
const NO_DATE_MESSAGE: &str = "No date selected.";
const NO_EVENTS_MESSAGE: &str = "No events for this date and time filter.";

/// Selection and filter state behind the page.
///
/// A date, once picked, can be replaced but never cleared. Each filter flag
/// toggles on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    selected: Option<DateTime<FixedOffset>>,
    filters: TimeFilters,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: TimeFilters) -> Self {
        Agenda {
            selected: None,
            filters,
        }
    }

    pub fn selected(&self) -> Option<&DateTime<FixedOffset>> {
        self.selected.as_ref()
    }

    pub fn filters(&self) -> &TimeFilters {
        &self.filters
    }

    /// Selection callback of the calendar control.
    pub fn select(&mut self, date: DateTime<FixedOffset>) {
        self.selected = Some(date);
    }

    /// Selects local midnight of `day` in `offset`, the way a date picker
    /// hands out a picked day.
    pub fn select_day(&mut self, day: NaiveDate, offset: FixedOffset) {
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| offset.from_local_datetime(&naive).single());

        if let Some(midnight) = midnight {
            self.select(midnight);
        }
    }

    pub fn toggle(&mut self, period: TimePeriod) {
        self.filters.toggle(period);
    }

    pub fn date_key(&self) -> String {
        date_key(self.selected.as_ref())
    }

    /// Everything stored for the selected day, before filtering.
    pub fn all_events<'s, S: EventSource + ?Sized>(&self, source: &'s S) -> &'s [Event] {
        match self.selected {
            Some(_) => source.events_on(&self.date_key()),
            None => &[],
        }
    }

    pub fn compose<'s, S: EventSource + ?Sized>(&self, source: &'s S) -> View<'s> {
        let Some(selected) = &self.selected else {
            return View::NoDateSelected;
        };

        let heading = format!("Events on {}", selected.format("%a %b %d %Y"));
        let events = filter_events(self.all_events(source), &self.filters);

        if events.is_empty() {
            View::NoEvents { heading }
        } else {
            View::Events { heading, events }
        }
    }
}

/// What the event list shows for a given [`Agenda`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "state", rename_all = "snake_case")
)]
pub enum View<'a> {
    NoDateSelected,
    NoEvents {
        heading: String,
    },
    Events {
        heading: String,
        events: Vec<&'a Event>,
    },
}

impl<'a> View<'a> {
    pub fn heading(&self) -> &str {
        match self {
            View::NoDateSelected => SELECT_PROMPT,
            View::NoEvents { heading } | View::Events { heading, .. } => heading,
        }
    }

    /// Placeholder text shown instead of a list.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            View::NoDateSelected => Some(NO_DATE_MESSAGE),
            View::NoEvents { .. } => Some(NO_EVENTS_MESSAGE),
            View::Events { .. } => None,
        }
    }

    pub fn events(&self) -> &[&'a Event] {
        match self {
            View::Events { events, .. } => events,
            _ => &[],
        }
    }
}
