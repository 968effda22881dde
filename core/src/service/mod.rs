pub mod calendar_service;
pub mod game_result_service;
pub mod practice_service;
pub mod schedule_service;
pub mod stats_service;
