use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::{FixedOffset, NaiveDate, Utc};
use daybook_events::{parse_date_key, Agenda, EventSource, TimeFilters, View};
use log::debug;
use serde::Serialize;

use crate::calendar::MonthGrid;
use crate::page;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventSource + Send + Sync>,
    /// Offset of the timezone a picked day is taken to be midnight in.
    pub utc_offset: FixedOffset,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_agenda))
        .fallback(|| async { Redirect::permanent("/") })
        .with_state(state)
}

#[derive(Debug, Default)]
struct AgendaQuery {
    date: Option<String>,
    month: Option<String>,
    // Set by the filter form, unchecked boxes are simply absent.
    filters: Option<String>,
    morning: Option<String>,
    afternoon: Option<String>,
    evening: Option<String>,
    json: bool,
}

impl AgendaQuery {
    /// Reads the query leniently: the first occurrence of a parameter wins
    /// and values that make no sense are treated as absent.
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let value = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        AgendaQuery {
            date: value("date"),
            month: value("month"),
            filters: value("filters"),
            morning: value("morning"),
            afternoon: value("afternoon"),
            evening: value("evening"),
            json: value("json")
                .is_some_and(|json| json == "1" || json.eq_ignore_ascii_case("true")),
        }
    }

    fn selected_day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_key)
    }

    fn month(&self) -> Option<MonthGrid> {
        self.month.as_deref().and_then(MonthGrid::parse)
    }

    fn filters(&self) -> TimeFilters {
        if self.filters.is_none() {
            return TimeFilters::default();
        }

        TimeFilters {
            morning: self.morning.is_some(),
            afternoon: self.afternoon.is_some(),
            evening: self.evening.is_some(),
        }
    }
}

#[derive(Serialize)]
struct AgendaJson<'a> {
    date_key: String,
    filters: &'a TimeFilters,
    view: &'a View<'a>,
    message: Option<&'static str>,
}

async fn handle_agenda(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let query = pairs
        .map(|Query(pairs)| AgendaQuery::from_pairs(&pairs))
        .unwrap_or_default();

    let mut agenda = Agenda::with_filters(query.filters());

    let selected_day = query.selected_day();
    if let Some(day) = selected_day {
        agenda.select_day(day, state.utc_offset);
    }

    let view = agenda.compose(state.events.as_ref());
    debug!(
        "Rendering {:?} for key {:?} with {:?}",
        view.heading(),
        agenda.date_key(),
        agenda.filters()
    );

    if query.json {
        return Json(AgendaJson {
            date_key: agenda.date_key(),
            filters: agenda.filters(),
            view: &view,
            message: view.message(),
        })
        .into_response();
    }

    let grid = query
        .month()
        .or_else(|| selected_day.map(MonthGrid::containing))
        .unwrap_or_else(|| {
            MonthGrid::containing(Utc::now().with_timezone(&state.utc_offset).date_naive())
        });

    Html(page::render(&agenda, &view, &grid)).into_response()
}
