//! Partitioning request captured by the prompt session.
//!
//! The calculator does not consult this value. Deriving a prefix length from
//! a wanted host or subnet count is not implemented.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartitionType {
    Hosts,
    Subnets,
}

impl fmt::Display for PartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionType::Hosts => write!(f, "hosts"),
            PartitionType::Subnets => write!(f, "subnets"),
        }
    }
}

/// What the user asked to partition by, and how many.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct PartitionRequest {
    pub kind: PartitionType,
    pub count: u64,
}

impl fmt::Display for PartitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.kind)
    }
}
