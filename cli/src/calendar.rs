use diamondlog_core::{CalendarEntry, MonthView};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Note")]
    note: String,
}

fn describe(entry: &CalendarEntry) -> (String, String, String, String) {
    match entry {
        CalendarEntry::Schedule(schedule) => {
            let event = &schedule.event;
            let title = if schedule.is_middle_day {
                format!("{} (cont.)", event.title)
            } else {
                event.title.clone()
            };
            let time = match (&event.start_time, &event.end_time) {
                _ if event.is_all_day => "all day".to_string(),
                (Some(start), Some(end)) => format!("{}-{}", start, end),
                (Some(start), None) => start.clone(),
                _ => String::new(),
            };
            let note = match &event.game_result {
                Some(result) => format!(
                    "{:?} {}-{}",
                    result.team_result.result, result.team_result.our_score, result.team_result.opponent_score
                ),
                None => event.location.clone().unwrap_or_default(),
            };
            (event.event_type.display_name().to_string(), title, time, note)
        }
        CalendarEntry::PracticeRecord(record) => (
            "Practice log".to_string(),
            record.label.clone(),
            record.time_window.clone(),
            format!("condition {}/5", record.practice.condition),
        ),
    }
}

pub fn show_month(view: &MonthView) {
    println!("\n\x1b[1;36m{:04}-{:02}\x1b[0m", view.year, view.month);

    let mut rows = Vec::new();
    for day in view.busy_days() {
        for (i, entry) in day.entries.iter().enumerate() {
            let (kind, title, time, note) = describe(entry);
            // Date column: Only show on first row of the day group
            let date = if i == 0 {
                format!("{} ({})", day.date.format("%Y-%m-%d"), day.date.format("%a"))
            } else {
                String::new()
            };
            rows.push(DayRow { date, kind, title, time, note });
        }
    }

    if rows.is_empty() {
        println!("Nothing scheduled or logged this month.");
        return;
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
