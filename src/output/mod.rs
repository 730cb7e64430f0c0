//! Output formatting for calculation results.
//!
//! - [`report`] - the values shown to the user
//! - [`terminal`] - text or JSON rendering

mod report;
mod terminal;

pub use report::SubnetReport;
pub use terminal::write_report;
