pub mod collections;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use collections::{Collections, GAME_RESULTS_KEY, PRACTICES_KEY, SCHEDULES_KEY};
pub use file::FileEventStore;
pub use memory::MemoryEventStore;
pub use traits::EventStore;
