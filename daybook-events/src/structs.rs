use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    /// Not unique, not even within a single day.
    pub id: u32,
    pub title: String,
    /// Free-form, e.g. `9:00 AM` or `All day`.
    pub time: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "Desc", skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl Event {
    pub fn new<T, S>(id: u32, title: T, time: S) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Event {
            id,
            title: title.into(),
            time: time.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Other,
}

impl TimePeriod {
    /// The periods offered as filter toggles, in sidebar order.
    pub const FILTERABLE: [TimePeriod; 3] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Other => "Other",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
