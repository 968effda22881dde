pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::EngineError;
pub use model::calendar::{CalendarDateIndex, CalendarEntry};
pub use model::game_result::{BattingStats, GameResult, Outcome, PitchingStats, TeamResult};
pub use model::practice::{MenuItem, Practice, PracticeCategory};
pub use model::schedule::{EventSpan, EventType, ScheduleEvent};
pub use model::summary::MonthlySummary;
pub use repository::{Collections, EventStore, FileEventStore, MemoryEventStore};
pub use input::{parse_args, expand_key, ParsedInput};
pub use time::{parse_human_date, parse_period};
pub use service::calendar_service::build_calendar_index;
pub use service::stats_service::aggregate_monthly;
pub use service::game_result_service::{attach_to_schedule, upsert_game_result};
pub use usecase::month_view::{MonthView, MonthViewUseCase};
