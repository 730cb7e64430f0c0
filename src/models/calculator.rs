//! Subnet arithmetic for a single address and prefix length.

use super::ipv4::{get_cidr_mask, Ipv4, MAX_LENGTH};
use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;

/// Derived parameters of the block containing `address` under `prefix_length`.
///
/// Every field is computed once in the constructor; the value never changes
/// afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetCalculator {
    address: [u8; 4],
    prefix_length: u8,
    subnet_mask: [u8; 4],
    network_address: [u8; 4],
    broadcast_address: [u8; 4],
    total_hosts: i64,
    total_subnets: u64,
}

/// Subnet mask for `prefix_length` as four octets.
///
/// # Examples
/// ```
/// use subnet_calculator::models::compute_subnet_mask;
/// assert_eq!(compute_subnet_mask(20).unwrap(), [255, 255, 240, 0]);
/// ```
pub fn compute_subnet_mask(prefix_length: u8) -> Result<[u8; 4]> {
    Ok(get_cidr_mask(prefix_length)?.to_be_bytes())
}

/// Narrow four integers to octets, or `InvalidArgument` naming the first
/// one above 255.
pub(crate) fn checked_octets(octets: [u32; 4]) -> Result<[u8; 4]> {
    let mut address = [0u8; 4];
    for (i, octet) in octets.iter().enumerate() {
        address[i] = u8::try_from(*octet).map_err(|_| {
            SubnetError::InvalidArgument(format!("octet {i} value {octet} is outside 0..=255"))
        })?;
    }
    Ok(address)
}

pub(crate) fn checked_prefix_length(prefix_length: u32) -> Result<u8> {
    u8::try_from(prefix_length)
        .ok()
        .filter(|p| *p <= MAX_LENGTH)
        .ok_or_else(|| {
            SubnetError::InvalidArgument(format!(
                "prefix length {prefix_length} is outside 0..={MAX_LENGTH}"
            ))
        })
}

impl SubnetCalculator {
    pub fn new(address: Ipv4Addr, prefix_length: u8) -> Result<Self> {
        if prefix_length > MAX_LENGTH {
            return Err(SubnetError::InvalidArgument(format!(
                "prefix length {prefix_length} is outside 0..={MAX_LENGTH}"
            )));
        }
        let address = address.octets();
        let subnet_mask = compute_subnet_mask(prefix_length)?;

        let mut network_address = [0u8; 4];
        let mut broadcast_address = [0u8; 4];
        for i in 0..4 {
            network_address[i] = address[i] & subnet_mask[i];
            broadcast_address[i] = address[i] | (255 - subnet_mask[i]);
        }

        let host_bits = u32::from(MAX_LENGTH - prefix_length);
        let calc = SubnetCalculator {
            address,
            prefix_length,
            subnet_mask,
            network_address,
            broadcast_address,
            total_hosts: (1i64 << host_bits) - 2,
            total_subnets: 1u64 << prefix_length,
        };
        log::trace!("SubnetCalculator::new() {calc:?}");
        Ok(calc)
    }

    /// Build from raw integers, rejecting any octet above 255 or a prefix
    /// length above 32.
    pub fn from_octets(octets: [u32; 4], prefix_length: u32) -> Result<Self> {
        let address = checked_octets(octets)?;
        let prefix_length = checked_prefix_length(prefix_length)?;
        SubnetCalculator::new(Ipv4Addr::from(address), prefix_length)
    }

    pub fn address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.subnet_mask)
    }

    pub fn network_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.network_address)
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.broadcast_address)
    }

    /// Usable hosts, `2^(32-p) - 2`. Not clamped: /31 gives 0 and /32 gives -1.
    pub fn total_hosts(&self) -> i64 {
        self.total_hosts
    }

    /// `2^p`. Not shown in the report.
    pub fn total_subnets(&self) -> u64 {
        self.total_subnets
    }

    /// Number of addresses in the block, `2^(32-p)`.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_length)
    }

    /// The containing block in CIDR notation.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network_address(),
            mask: self.prefix_length,
        }
    }
}

impl TryFrom<Ipv4> for SubnetCalculator {
    type Error = SubnetError;

    fn try_from(cidr: Ipv4) -> Result<Self> {
        SubnetCalculator::new(cidr.addr, cidr.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(addr: &str) -> SubnetCalculator {
        SubnetCalculator::try_from(Ipv4::new(addr).unwrap()).unwrap()
    }

    #[test]
    fn test_scenario_slash_24() {
        let c = calc("192.168.1.10/24");
        assert_eq!(c.subnet_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(c.network_address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(c.broadcast_address(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(c.total_hosts(), 254);
        assert_eq!(c.block_size(), 256);
        assert_eq!(c.total_subnets(), 1 << 24);
    }

    #[test]
    fn test_scenario_slash_20() {
        let c = calc("10.0.5.200/20");
        assert_eq!(c.subnet_mask().to_string(), "255.255.240.0");
        assert_eq!(c.network_address().to_string(), "10.0.0.0");
        assert_eq!(c.broadcast_address().to_string(), "10.0.15.255");
        assert_eq!(c.total_hosts(), 4094);
        assert_eq!(c.network().to_string(), "10.0.0.0/20");
    }

    #[test]
    fn test_prefix_zero() {
        let c = calc("172.16.4.9/0");
        assert_eq!(c.subnet_mask(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(c.network_address(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(c.broadcast_address(), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(c.total_hosts(), (1i64 << 32) - 2);
        assert_eq!(c.block_size(), 1u64 << 32);
        assert_eq!(c.total_subnets(), 1);
    }

    #[test]
    fn test_prefix_31_and_32_keep_raw_host_count() {
        let c = calc("172.16.4.9/31");
        assert_eq!(c.total_hosts(), 0);
        assert_eq!(c.network_address(), Ipv4Addr::new(172, 16, 4, 8));
        assert_eq!(c.broadcast_address(), Ipv4Addr::new(172, 16, 4, 9));

        let c = calc("172.16.4.9/32");
        assert_eq!(c.subnet_mask(), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(c.network_address(), c.address());
        assert_eq!(c.broadcast_address(), c.address());
        assert_eq!(c.total_hosts(), -1);
        assert_eq!(c.block_size(), 1);
    }

    #[test]
    fn test_mask_is_contiguous_for_every_prefix() {
        for p in 0..=MAX_LENGTH {
            let mask = u32::from_be_bytes(compute_subnet_mask(p).unwrap());
            assert_eq!(mask.leading_ones(), u32::from(p), "prefix {p}");
            assert_eq!(mask.count_ones(), u32::from(p), "prefix {p}");
        }
        assert!(compute_subnet_mask(33).is_err());
    }

    #[test]
    fn test_mask_matches_octet_closed_form() {
        for p in 0..=MAX_LENGTH {
            let mask = compute_subnet_mask(p).unwrap();
            for (k, octet) in mask.iter().enumerate() {
                let ones = (i32::from(p) - 8 * k as i32).clamp(0, 8) as u32;
                let expected = if ones == 0 { 0 } else { (0xFFu32 << (8 - ones)) & 0xFF };
                assert_eq!(u32::from(*octet), expected, "prefix {p} octet {k}");
            }
        }
    }

    #[test]
    fn test_network_and_broadcast_bound_the_address() {
        let addrs = [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(10, 0, 5, 200),
            Ipv4Addr::new(192, 168, 77, 1),
            Ipv4Addr::new(255, 255, 255, 255),
        ];
        for addr in addrs {
            for p in 0..=MAX_LENGTH {
                let c = SubnetCalculator::new(addr, p).unwrap();
                let mask = c.subnet_mask().octets();
                let net = c.network_address().octets();
                let bcast = c.broadcast_address().octets();
                let a = addr.octets();
                for i in 0..4 {
                    assert_eq!(net[i] & !mask[i], 0);
                    assert_eq!(bcast[i] | mask[i], 255);
                    assert!(net[i] <= a[i] && a[i] <= bcast[i]);
                }
            }
        }
    }

    #[test]
    fn test_construction_is_repeatable() {
        let a = SubnetCalculator::new(Ipv4Addr::new(10, 1, 2, 3), 27).unwrap();
        let b = SubnetCalculator::new(Ipv4Addr::new(10, 1, 2, 3), 27).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_arguments() {
        let err = SubnetCalculator::new(Ipv4Addr::new(10, 0, 0, 1), 33).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = SubnetCalculator::from_octets([10, 0, 0, 256], 24).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument: octet 3 value 256 is outside 0..=255"
        );

        assert!(SubnetCalculator::from_octets([10, 0, 0, 1], 33)
            .unwrap_err()
            .is_invalid_argument());
        assert!(SubnetCalculator::from_octets([10, 0, 0, 1], 300)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_from_octets() {
        let c = SubnetCalculator::from_octets([192, 168, 1, 10], 24).unwrap();
        assert_eq!(c, calc("192.168.1.10/24"));
        assert_eq!(c.prefix_length(), 24);
    }
}
