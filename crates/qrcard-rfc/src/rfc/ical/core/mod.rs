pub mod datetime;
pub mod event;

pub use datetime::{DateToken, format_utc_stamp, next_day, parse_date, parse_time};
pub use event::{EventRecord, Schedule, is_all_day};
