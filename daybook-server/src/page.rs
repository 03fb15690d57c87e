use std::fmt::Write;

use chrono::NaiveDate;
use daybook_events::{Agenda, TimeFilters, View};

use crate::calendar::{self, MonthGrid};

const STYLE: &str = "\
body{font-family:sans-serif;background:#f9fafb;margin:0;padding:1.5rem}\
.top{display:flex;gap:1.5rem;margin-bottom:1.5rem}\
aside,section{background:#fff;padding:1.5rem;border-radius:.25rem;box-shadow:0 1px 3px #0002}\
aside{width:18rem}aside label{display:flex;gap:.5rem;margin-bottom:.75rem}\
.calendar-panel{flex-grow:1}.calendar td{text-align:center}\
.calendar .selected a{font-weight:bold;background:#2563eb;color:#fff;border-radius:.25rem}\
ul{list-style:none;padding:0}li{padding:.75rem;background:#f3f4f6;margin-bottom:.75rem}\
.time,.description,.empty{color:#4b5563}.title{font-weight:600}";

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Link back to the page with the given state. Default filters are left
/// out of the query entirely.
pub fn agenda_href(
    date: Option<NaiveDate>,
    month: Option<&MonthGrid>,
    filters: &TimeFilters,
) -> String {
    let mut params = Vec::new();

    if let Some(date) = date {
        params.push(format!("date={}", date.format("%Y-%m-%d")));
    }

    if let Some(month) = month {
        params.push(format!("month={}", month.key()));
    }

    if *filters != TimeFilters::default() {
        params.push("filters=1".to_string());
        for (period, enabled) in filters.iter() {
            if enabled {
                params.push(format!("{}=on", period.as_str().to_lowercase()));
            }
        }
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

pub fn render(agenda: &Agenda, view: &View<'_>, grid: &MonthGrid) -> String {
    let selected = agenda.selected().map(|date| date.date_naive());
    let filters = agenda.filters();

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{}</title><style>{STYLE}</style></head><body><div class=\"top\">",
        escape(view.heading())
    );

    render_filters(&mut html, filters, selected, grid);

    html.push_str(r#"<section class="calendar-panel">"#);
    html.push_str(&calendar::render(
        grid,
        selected,
        |day| agenda_href(Some(day), None, filters),
        |month| agenda_href(selected, Some(month), filters),
    ));
    html.push_str("</section></div>");

    render_events(&mut html, view);

    html.push_str("</body></html>");
    html
}

fn render_filters(
    html: &mut String,
    filters: &TimeFilters,
    selected: Option<NaiveDate>,
    grid: &MonthGrid,
) {
    html.push_str(r#"<aside><h2>Filter by Time</h2><form method="get" action="/">"#);
    html.push_str(r#"<input type="hidden" name="filters" value="1">"#);

    if let Some(date) = selected {
        let _ = write!(
            html,
            r#"<input type="hidden" name="date" value="{}">"#,
            date.format("%Y-%m-%d")
        );
    }
    let _ = write!(
        html,
        r#"<input type="hidden" name="month" value="{}">"#,
        grid.key()
    );

    for (period, enabled) in filters.iter() {
        let _ = write!(
            html,
            concat!(
                r#"<label><input type="checkbox" name="{}"{} onchange="this.form.submit()">"#,
                "<span>{}</span></label>",
            ),
            period.as_str().to_lowercase(),
            if enabled { " checked" } else { "" },
            period,
        );
    }

    html.push_str(r#"<noscript><button type="submit">Apply</button></noscript></form></aside>"#);
}

fn render_events(html: &mut String, view: &View<'_>) {
    let _ = write!(
        html,
        r#"<section class="events"><h2>{}</h2>"#,
        escape(view.heading())
    );

    if let Some(message) = view.message() {
        let _ = write!(html, r#"<p class="empty">{message}</p>"#);
    } else {
        html.push_str("<ul>");
        // Ids repeat within a day, so items are keyed by position.
        for (index, event) in view.events().iter().enumerate() {
            let _ = write!(
                html,
                r#"<li data-index="{index}"><p class="title">{}</p><p class="time">{}</p>"#,
                escape(&event.title),
                escape(&event.time)
            );
            if let Some(description) = &event.description {
                let _ = write!(html, r#"<p class="description">{}</p>"#, escape(description));
            }
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }

    html.push_str("</section>");
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use daybook_events::{Event, EventStore, TimePeriod};

    use super::*;

    fn may_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn hrefs_omit_default_state() {
        assert_eq!(agenda_href(None, None, &TimeFilters::default()), "/");
        assert_eq!(
            agenda_href(Some(may_15()), None, &TimeFilters::default()),
            "/?date=2025-05-15"
        );
    }

    #[test]
    fn hrefs_carry_changed_filters() {
        let mut filters = TimeFilters::default();
        filters.toggle(TimePeriod::Afternoon);
        let month = MonthGrid::containing(may_15());

        assert_eq!(
            agenda_href(Some(may_15()), Some(&month), &filters),
            "/?date=2025-05-15&month=2025-05&filters=1&morning=on&evening=on"
        );
        assert_eq!(
            agenda_href(None, None, &TimeFilters::all(false)),
            "/?filters=1"
        );
    }

    #[test]
    fn renders_checkbox_states() {
        let mut agenda = Agenda::new();
        agenda.toggle(TimePeriod::Morning);
        let view = agenda.compose(EventStore::sample());
        let html = render(&agenda, &view, &MonthGrid::containing(may_15()));

        assert!(html.contains(r#"<input type="checkbox" name="morning" onchange"#));
        assert!(html.contains(r#"<input type="checkbox" name="afternoon" checked onchange"#));
        assert!(html.contains(r#"<input type="checkbox" name="evening" checked onchange"#));
        assert!(html.contains("No date selected."));
        assert!(!html.contains(r#"name="date""#));
    }

    #[test]
    fn renders_items_by_position_with_escaping() {
        let mut store = EventStore::new();
        store.insert("2025-05-15", Event::new(7, "Tea & <cake>", "3:00 PM"));
        store.insert(
            "2025-05-15",
            Event::new(7, "Tea again", "4:00 PM").with_description("Same id"),
        );

        let mut agenda = Agenda::new();
        agenda.select_day(may_15(), FixedOffset::east_opt(0).unwrap());
        let view = agenda.compose(&store);
        let html = render(&agenda, &view, &MonthGrid::containing(may_15()));

        assert!(html.contains(r#"<li data-index="0"><p class="title">Tea &amp; &lt;cake&gt;</p>"#));
        assert!(html.contains(r#"<li data-index="1"><p class="title">Tea again</p>"#));
        assert!(html.contains(r#"<p class="description">Same id</p>"#));
        assert_eq!(html.matches(r#"class="description""#).count(), 1);
        assert!(html.contains("<h2>Events on Thu May 15 2025</h2>"));
        assert!(html.contains(r#"<input type="hidden" name="date" value="2025-05-15">"#));
    }
}
