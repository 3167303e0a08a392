pub mod duration;
pub mod limit;

pub use duration::{Totals, compute, remaining_seconds, span, total_millis, total_seconds};
pub use limit::{DAILY_LIMIT_SECONDS, DailyLimit};
