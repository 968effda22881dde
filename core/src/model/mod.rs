pub mod calendar;
pub mod coerce;
pub mod game_result;
pub mod practice;
pub mod schedule;
pub mod summary;
