//! `gridfill-engine` — type-dispatched fill engine and driver.
//!
//! Pure engine crate: receives a form page and a fill request, mutates the
//! page, returns an aggregated result. No IO, no logging, no timers — the
//! session crate owns those.

pub mod apply;
pub mod date;
pub mod driver;
pub mod error;
pub mod select;

pub use apply::apply_value;
pub use date::convert_date_format;
pub use driver::fill;
pub use error::FillError;
