pub mod calculator;
pub mod clock;
pub mod day_guard;
pub mod log;
pub mod store;
pub mod ticker;
pub mod tracker;
pub mod watch;
