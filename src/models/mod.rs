//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetCalculator`] - mask, network, broadcast and counts for one block
//! - [`PartitionRequest`] - the captured (and unused) partitioning choice

mod calculator;
mod ipv4;
mod partition;

// Re-export public types
pub use calculator::{compute_subnet_mask, SubnetCalculator};
pub use ipv4::{get_cidr_mask, Ipv4, MAX_LENGTH};
pub use partition::{PartitionRequest, PartitionType};
