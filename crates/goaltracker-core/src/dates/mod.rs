mod milestone;
mod store;

pub use milestone::{MilestoneDate, FIELD_DELIMITER};
pub use store::{select_date, DateLine, DateStore};
