use crate::kb::models::TimetableRow;
use crate::text::capitalize;

pub const NO_TIMETABLE: &str = "Timetable information is not available.";

/// Render a full week as an HTML table. The header carries P1..Pn for the
/// widest row; ragged rows are padded with "-" cells up to that width, so
/// every rendered row has exactly `max_periods` period cells.
pub fn render_full_week(rows: &[TimetableRow], section: &str) -> String {
    if rows.is_empty() {
        return NO_TIMETABLE.to_string();
    }

    let max_periods = rows.iter().map(|r| r.periods.len()).max().unwrap_or(0);
    let header = period_header(max_periods);

    let mut body = String::new();
    for row in rows {
        let mut cells = String::new();
        for period in &row.periods {
            cells.push_str(&format!("<td>{period}</td>"));
        }
        for _ in row.periods.len()..max_periods {
            cells.push_str("<td>-</td>");
        }
        body.push_str(&format!("<tr><td>{}</td>{}</tr>", row.day, cells));
    }

    let heading = format!("📅 7th Semester {} Timetable", section.to_uppercase());
    wrap_table(&heading, &header, &body)
}

/// Render one day. The header width is this row's own period count, not the
/// week-wide maximum.
pub fn render_single_day(row: &TimetableRow, section: &str) -> String {
    if row.periods.is_empty() {
        let day = if row.day.is_empty() { "this day" } else { &row.day };
        return format!("No timetable available for {day}.");
    }

    let header = period_header(row.periods.len());
    let mut cells = String::new();
    for period in &row.periods {
        cells.push_str(&format!("<td>{period}</td>"));
    }
    let body = format!("<tr><td>{}</td>{}</tr>", row.day, cells);

    let heading = format!("📋 {} - 7th Sem {}", capitalize(&row.day), section.to_uppercase());
    wrap_table(&heading, &header, &body)
}

fn period_header(count: usize) -> String {
    let mut header = String::new();
    for i in 1..=count {
        header.push_str(&format!("<th>P{i}</th>"));
    }
    header
}

fn wrap_table(heading: &str, header: &str, body: &str) -> String {
    format!(
        "<div class=\"timetable-container\">\
         <strong>{heading}</strong>\
         <table class=\"timetable\">\
         <thead><tr><th>Day</th>{header}</tr></thead>\
         <tbody>{body}</tbody>\
         </table>\
         </div>"
    )
}
