//! Syntactic validation of raw prompt answers.
//!
//! Only the shape of the text is checked here. Range checks (octet <= 255,
//! prefix <= 32) belong to [`crate::models::SubnetCalculator`].

use crate::error::{Result, SubnetError};
use crate::models::PartitionType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_IP: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
    static ref RE_PREFIX: Regex = Regex::new(r"^\d{1,2}$").expect("Invalid Regex?");
    static ref RE_COUNT: Regex = Regex::new(r"^\d+$").expect("Invalid Regex?");
}

/// Parse a dotted quad such as `192.168.1.10` into its four integers.
///
/// Values above 255 pass; `999.1.1.1` is well formed.
pub fn parse_ip_address(input: &str) -> Result<[u32; 4]> {
    let caps = RE_IP
        .captures(input)
        .ok_or_else(|| SubnetError::malformed("IP address", input))?;
    let mut octets = [0u32; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // at most three digits, always fits
        *octet = caps[i + 1]
            .parse()
            .map_err(|_| SubnetError::malformed("IP address", input))?;
    }
    Ok(octets)
}

/// Parse a 1-2 digit prefix length. An empty answer yields `default`.
pub fn parse_prefix_length(input: &str, default: u8) -> Result<u8> {
    if input.is_empty() {
        log::debug!("empty prefix length, using default /{default}");
        return Ok(default);
    }
    if !RE_PREFIX.is_match(input) {
        return Err(SubnetError::malformed("subnet mask", input));
    }
    input
        .parse()
        .map_err(|_| SubnetError::malformed("subnet mask", input))
}

/// Accept `hosts` or `subnets` in any letter case.
pub fn parse_partitioning_type(input: &str) -> Result<PartitionType> {
    match input.to_lowercase().as_str() {
        "hosts" => Ok(PartitionType::Hosts),
        "subnets" => Ok(PartitionType::Subnets),
        _ => Err(SubnetError::malformed("partitioning type", input)),
    }
}

/// Parse a non-negative decimal count.
pub fn parse_count(input: &str) -> Result<u64> {
    if !RE_COUNT.is_match(input) {
        return Err(SubnetError::malformed("number", input));
    }
    // digits only, so the sole failure left is overflow
    input
        .parse()
        .map_err(|_| SubnetError::malformed("number", input))
}
