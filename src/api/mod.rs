// Time API module
// JSON endpoints reporting the current UTC instant

mod handlers;
mod types;

pub use handlers::{current_date, current_datetime};
