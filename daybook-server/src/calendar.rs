//! Single-date month calendar, rendered as links.

use std::fmt::Write;

use chrono::{Datelike, Months, NaiveDate};

use crate::page::escape;

/// A month laid out in Sunday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
}

impl MonthGrid {
    /// The month containing `day`.
    pub fn containing(day: NaiveDate) -> Self {
        MonthGrid {
            first: day.with_day(1).unwrap_or(day),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 7 {
            return None;
        }

        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .ok()
            .map(Self::containing)
    }

    pub fn key(&self) -> String {
        self.first.format("%Y-%m").to_string()
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn previous(&self) -> Option<Self> {
        self.first.checked_sub_months(Months::new(1)).map(Self::containing)
    }

    pub fn next(&self) -> Option<Self> {
        self.first.checked_add_months(Months::new(1)).map(Self::containing)
    }

    pub fn days_in_month(&self) -> usize {
        match self.next() {
            Some(next) => (next.first - self.first).num_days() as usize,
            None => 31,
        }
    }

    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut column = self.first.weekday().num_days_from_sunday() as usize;

        for day in self.first.iter_days().take(self.days_in_month()) {
            week[column] = Some(day);
            column += 1;

            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }

        if column > 0 {
            weeks.push(week);
        }

        weeks
    }
}

/// Renders `grid` with `selected` highlighted.
///
/// Picking a day follows `on_select(day)`, the month arrows follow
/// `on_navigate(month)`.
pub fn render<S, N>(
    grid: &MonthGrid,
    selected: Option<NaiveDate>,
    on_select: S,
    on_navigate: N,
) -> String
where
    S: Fn(NaiveDate) -> String,
    N: Fn(&MonthGrid) -> String,
{
    let mut html = String::new();

    html.push_str(r#"<div class="calendar" data-mode="single"><nav>"#);
    if let Some(previous) = grid.previous() {
        let _ = write!(
            html,
            r#"<a class="previous" href="{}">&lsaquo;</a>"#,
            escape(&on_navigate(&previous))
        );
    }
    let _ = write!(html, "<strong>{}</strong>", grid.title());
    if let Some(next) = grid.next() {
        let _ = write!(
            html,
            r#"<a class="next" href="{}">&rsaquo;</a>"#,
            escape(&on_navigate(&next))
        );
    }
    html.push_str("</nav><table><thead><tr>");

    for weekday in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        let _ = write!(html, "<th>{weekday}</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for week in grid.weeks() {
        html.push_str("<tr>");
        for day in week {
            match day {
                Some(day) => {
                    let class = if Some(day) == selected {
                        r#" class="selected" aria-selected="true""#
                    } else {
                        ""
                    };
                    let _ = write!(
                        html,
                        r#"<td{class}><a href="{}">{}</a></td>"#,
                        escape(&on_select(day)),
                        day.day()
                    );
                }
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}
