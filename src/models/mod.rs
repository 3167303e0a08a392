pub mod day_marker;
pub mod entry_kind;
pub mod entry_log;
pub mod snapshot;
pub mod time_entry;
