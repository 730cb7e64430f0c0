//! Interactive input collection.
//!
//! - [`parse`] - pure shape checks for each answer
//! - [`session`] - the retry-until-valid prompt loop

mod parse;
mod session;

pub use parse::{parse_count, parse_ip_address, parse_partitioning_type, parse_prefix_length};
pub use session::{
    collect_input, Prompter, SessionInput, ASK_COUNT, ASK_IP, ASK_PARTITION, ASK_PREFIX,
    RETRY_COUNT, RETRY_IP, RETRY_PARTITION, RETRY_PREFIX,
};
