use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::error::Error;
use crate::mask::{block_size, mask_to_wildcard, prefix_to_mask};

/// The computed facts for one subnet: boundary addresses, masks,
/// and host capacity.
///
/// Host accounting follows RFC 3021 at the small end:
///
/// - prefix <= 30: network and broadcast are reserved, usable
///   hosts are `total - 2` over `base+1 ..= broadcast-1`;
/// - prefix 31: both addresses are assignable, no reservation;
/// - prefix 32: a single host route; reported as zero usable
///   hosts with the host range pinned to the base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetDescriptor {
    network: Ipv4Addr,
    prefix: u8,
    subnet_mask: Ipv4Addr,
    wildcard_mask: Ipv4Addr,
    broadcast: Ipv4Addr,
    first_host: Ipv4Addr,
    last_host: Ipv4Addr,
    total_addresses: u64,
    usable_hosts: u64,
}

impl SubnetDescriptor {
    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        self.wildcard_mask
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.broadcast
    }

    /// First assignable host address (the network address itself
    /// for /31 and /32).
    pub fn first_host(&self) -> Ipv4Addr {
        self.first_host
    }

    /// Last assignable host address.
    pub fn last_host(&self) -> Ipv4Addr {
        self.last_host
    }

    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }
}

impl fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// Computes the [`SubnetDescriptor`] for a (base address, prefix)
/// pair.
///
/// The base must be the true network address for the prefix;
/// otherwise the error names the corrected address so a caller can
/// surface a "use X instead" message.
///
/// # Examples:
///
/// ```
/// use std::net::Ipv4Addr;
/// use ipcalc::subnet::describe;
///
/// let subnet = describe(Ipv4Addr::new(192, 168, 1, 0), 24).unwrap();
/// assert!(subnet.broadcast() == Ipv4Addr::new(192, 168, 1, 255));
/// assert!(subnet.usable_hosts() == 254);
/// ```
pub fn describe(base: Ipv4Addr, prefix: u8) -> Result<SubnetDescriptor, Error> {
    if prefix > 32 {
        return Err(Error::InvalidFormat(format!("/{}", prefix)));
    }

    let mask = prefix_to_mask(prefix);
    let base_bits = u32::from(base);
    if base_bits & mask != base_bits {
        return Err(Error::NotNetworkAddress {
            given: base,
            corrected: Ipv4Addr::from(base_bits & mask),
            prefix,
        });
    }

    let total = block_size(prefix);
    let broadcast_bits = (base_bits as u64 + total - 1) as u32;
    let broadcast = Ipv4Addr::from(broadcast_bits);

    let (usable_hosts, first_host, last_host) = match prefix {
        32 => (0, base, base),
        31 => (2, base, broadcast),
        _ => (
            total - 2,
            Ipv4Addr::from(base_bits + 1),
            Ipv4Addr::from(broadcast_bits - 1),
        ),
    };

    Ok(SubnetDescriptor {
        network: base,
        prefix,
        subnet_mask: Ipv4Addr::from(mask),
        wildcard_mask: Ipv4Addr::from(mask_to_wildcard(mask)),
        broadcast,
        first_host,
        last_host,
        total_addresses: total,
        usable_hosts,
    })
}
