mod calendar;
mod records;
mod stats;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use diamondlog_core::config::{DATA_DIR_ENV, USER_ENV};
use diamondlog_core::export::{google_calendar_url, to_ics_event};
use diamondlog_core::service::game_result_service::GameResultService;
use diamondlog_core::service::practice_service::PracticeService;
use diamondlog_core::service::schedule_service::ScheduleService;
use diamondlog_core::service::stats_service::StatsService;
use diamondlog_core::{parse_period, Collections, Config, FileEventStore, MonthViewUseCase};

#[derive(Parser)]
#[command(name = "diamondlog")]
#[command(about = "Log practices, schedules and game results; view them by day and by month", long_about = None)]
struct Cli {
    /// Data directory (default: ~/.diamondlog)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// User whose records are read and written
    #[arg(long, global = true, env = USER_ENV)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily practice log
    Practice {
        #[command(subcommand)]
        action: PracticeAction,
    },
    /// Scheduled practices, games, meetings and events
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
    /// Game results
    Game {
        #[command(subcommand)]
        action: GameAction,
    },
    /// Show everything on the calendar for a month (YYYY-MM, default: this month)
    Calendar { period: Option<String> },
    /// Monthly team, batting and pitching stats (YYYY-MM, default: this month)
    Stats {
        period: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a schedule event as an iCalendar VEVENT
    Export {
        id: String,
        /// Print a Google Calendar link instead
        #[arg(long)]
        google: bool,
    },
}

#[derive(Subcommand)]
enum PracticeAction {
    /// Log a practice (usage: practice add cat:batting date:today start:18:00 end:20:00 cond:4 menu:"Tee=100 swings")
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List logged practices
    List,
    /// Delete a practice by ID
    Delete { id: String },
}

#[derive(Subcommand)]
enum ScheduleAction {
    /// Add an event (usage: schedule add Game vs Hawks type:game date:sat start:13:00 loc:Park)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List events from today on
    List {
        /// Include past events
        #[arg(long)]
        all: bool,
    },
    /// Delete an event by ID
    Delete { id: String },
}

#[derive(Subcommand)]
enum GameAction {
    /// Record or replace the result of a scheduled game (usage: game record <id> score:5-3 ab:4 h:2 ip:6.1 er:2)
    Record {
        game_id: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List recorded results
    List,
}

fn period_or_current(period: Option<String>, today: NaiveDate) -> Result<(i32, u32)> {
    match period {
        Some(p) => parse_period(&p),
        None => Ok((today.year(), today.month())),
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.user)?;
    log::debug!("using {} for user {}", config.data_dir.display(), config.user);
    let store = FileEventStore::new(&config.data_dir, &config.user)?;
    let collections = Collections::new(store);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Practice { action } => {
            let service = PracticeService::new(&collections);
            match action {
                PracticeAction::Add { args } => {
                    let practice = service.add(records::build_practice(&args, today)?)?;
                    println!("Practice logged: {} (ID: {})", practice.category.display_name(), practice.id);
                    if let Some(date) = practice.date {
                        println!("  Date: {}", date);
                    }
                    if !practice.time_window().is_empty() {
                        println!("  Time: {}", practice.time_window());
                    }
                    println!("  Condition: {}/5", practice.condition);
                }
                PracticeAction::List => {
                    let practices = service.list()?;
                    if practices.is_empty() {
                        println!("No practices found.");
                    } else {
                        println!("{:<10} {:<12} {:<14} {:<12} {:<5} {}", "ID", "Date", "Category", "Time", "Cond", "Menu");
                        println!("{:-<10} {:-<12} {:-<14} {:-<12} {:-<5} {:-<20}", "", "", "", "", "", "");
                        for p in practices {
                            let date = p.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
                            let menu: Vec<String> = p
                                .menu
                                .iter()
                                .map(|m| format!("{} {}{}", m.name, m.value, m.unit))
                                .collect();
                            println!(
                                "{:<10} {:<12} {:<14} {:<12} {:<5} {}",
                                short_id(&p.id),
                                date,
                                p.category.display_name(),
                                p.time_window(),
                                p.condition,
                                menu.join(", ")
                            );
                        }
                    }
                }
                PracticeAction::Delete { id } => {
                    service.delete(&id)?;
                    println!("Practice {} deleted.", id);
                }
            }
        }
        Commands::Schedule { action } => {
            let service = ScheduleService::new(&collections);
            match action {
                ScheduleAction::Add { args } => {
                    let event = service.add(records::build_schedule(&args, today)?)?;
                    println!("Event added: {} (ID: {})", event.title, event.id);
                    if let Some(span) = event.span() {
                        if span.first_day() == span.last_day() {
                            println!("  Date: {}", span.first_day());
                        } else {
                            println!("  Dates: {} to {}", span.first_day(), span.last_day());
                        }
                    }
                    println!("  Type: {}", event.event_type.display_name());
                }
                ScheduleAction::List { all } => {
                    let events = if all { service.list()? } else { service.upcoming(today)? };
                    if events.is_empty() {
                        println!("No events found.");
                    } else {
                        println!("{:<38} {:<10} {:<24} {:<10} {}", "ID", "Type", "Dates", "Result", "Title");
                        println!("{:-<38} {:-<10} {:-<24} {:-<10} {:-<20}", "", "", "", "", "");
                        for event in events {
                            let dates = match event.span() {
                                Some(span) if span.first_day() != span.last_day() => {
                                    format!("{} - {}", span.first_day(), span.last_day())
                                }
                                Some(span) => span.first_day().to_string(),
                                None => "-".to_string(),
                            };
                            let result = event
                                .game_result
                                .as_ref()
                                .map(|r| format!("{}-{}", r.team_result.our_score, r.team_result.opponent_score))
                                .unwrap_or_else(|| "-".to_string());
                            println!(
                                "{:<38} {:<10} {:<24} {:<10} {}",
                                event.id,
                                event.event_type.display_name(),
                                dates,
                                result,
                                event.title
                            );
                        }
                    }
                }
                ScheduleAction::Delete { id } => {
                    service.delete(&id)?;
                    println!("Event {} deleted.", id);
                }
            }
        }
        Commands::Game { action } => {
            let service = GameResultService::new(&collections);
            match action {
                GameAction::Record { game_id, args } => {
                    let result = service.record(records::build_game_result(&game_id, &args, today)?)?;
                    let team = &result.team_result;
                    println!(
                        "Result recorded for {}: {:?} {}-{}",
                        result.game_id, team.result, team.our_score, team.opponent_score
                    );
                }
                GameAction::List => {
                    let results = service.list()?;
                    if results.is_empty() {
                        println!("No results recorded.");
                    } else {
                        println!("{:<38} {:<12} {:<6} {:<8} {}", "Game", "Date", "Result", "Score", "AB-H");
                        for r in results {
                            let date = r.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
                            println!(
                                "{:<38} {:<12} {:<6} {:<8} {}-{}",
                                r.game_id,
                                date,
                                format!("{:?}", r.team_result.result),
                                format!("{}-{}", r.team_result.our_score, r.team_result.opponent_score),
                                r.batting_stats.at_bats,
                                r.batting_stats.hits
                            );
                        }
                    }
                }
            }
        }
        Commands::Calendar { period } => {
            let (year, month) = period_or_current(period, today)?;
            let view = MonthViewUseCase::new(&collections).get(year, month)?;
            calendar::show_month(&view);
        }
        Commands::Stats { period, json } => {
            let (year, month) = period_or_current(period, today)?;
            let summary = StatsService::new(&collections).monthly(year, month)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                stats::show_summary(&summary);
            }
        }
        Commands::Export { id, google } => {
            let event = ScheduleService::new(&collections).get(&id)?;
            if google {
                println!("{}", google_calendar_url(&event)?);
            } else {
                println!("{}", to_ics_event(&event, Utc::now())?);
            }
        }
    }
    Ok(())
}
