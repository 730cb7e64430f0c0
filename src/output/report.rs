//! Values shown to the user after a calculation.

use crate::models::{Ipv4, SubnetCalculator};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The six reported values, plus the block in CIDR notation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub subnet_mask: Ipv4Addr,
    pub prefix_length: u8,
    /// Signed, negative for /32.
    pub total_hosts: i64,
    pub block_size: u64,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub network: Ipv4,
}

impl From<&SubnetCalculator> for SubnetReport {
    fn from(calc: &SubnetCalculator) -> Self {
        SubnetReport {
            subnet_mask: calc.subnet_mask(),
            prefix_length: calc.prefix_length(),
            total_hosts: calc.total_hosts(),
            block_size: calc.block_size(),
            network_address: calc.network_address(),
            broadcast_address: calc.broadcast_address(),
            network: calc.network(),
        }
    }
}

impl SubnetReport {
    /// Numbered lines in the order they are printed.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("1. Subnet mask (in mask decimal format): {}", self.subnet_mask),
            format!("2. Subnet in CIDR: {}", self.prefix_length),
            format!("3. Number of hosts: {}", self.total_hosts),
            format!("4. Number of subnets: {}", self.block_size),
            format!("5. Network address: {}", self.network_address),
            format!("   Broadcast address: {}", self.broadcast_address),
        ]
    }
}
