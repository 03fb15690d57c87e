#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{classify, Event, TimePeriod};

/// The three time-of-day checkboxes. All of them start checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeFilters {
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
}

impl Default for TimeFilters {
    fn default() -> Self {
        TimeFilters::all(true)
    }
}

impl TimeFilters {
    pub const fn all(enabled: bool) -> Self {
        TimeFilters {
            morning: enabled,
            afternoon: enabled,
            evening: enabled,
        }
    }

    /// `Other` has no checkbox and is never enabled.
    pub fn is_enabled(&self, period: TimePeriod) -> bool {
        match period {
            TimePeriod::Morning => self.morning,
            TimePeriod::Afternoon => self.afternoon,
            TimePeriod::Evening => self.evening,
            TimePeriod::Other => false,
        }
    }

    pub fn set(&mut self, period: TimePeriod, enabled: bool) {
        match period {
            TimePeriod::Morning => self.morning = enabled,
            TimePeriod::Afternoon => self.afternoon = enabled,
            TimePeriod::Evening => self.evening = enabled,
            TimePeriod::Other => {}
        }
    }

    pub fn toggle(&mut self, period: TimePeriod) {
        self.set(period, !self.is_enabled(period));
    }

    pub fn all_off(&self) -> bool {
        !(self.morning || self.afternoon || self.evening)
    }

    /// Checkbox states in sidebar order.
    pub fn iter(&self) -> impl Iterator<Item = (TimePeriod, bool)> + '_ {
        TimePeriod::FILTERABLE
            .into_iter()
            .map(move |period| (period, self.is_enabled(period)))
    }
}

/// Narrows a day's events down to the checked periods, keeping their order.
///
/// With every checkbox cleared nothing is filtered at all. Otherwise events
/// whose time does not classify into a checked period are dropped, which
/// always includes `All day` and unparsable times.
pub fn filter_events<'a>(events: &'a [Event], filters: &TimeFilters) -> Vec<&'a Event> {
    if filters.all_off() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|event| filters.is_enabled(classify(&event.time)))
        .collect()
}
