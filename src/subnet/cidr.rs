use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::addr::codec::parse_ipv4;
use crate::error::Error;
use crate::mask::{block_size, prefix_to_mask};
use crate::subnet::descriptor::{describe, SubnetDescriptor};

/// An IPv4 CIDR block: a base address and a prefix length.
///
/// The base address is kept exactly as given; whether it is the
/// true network address of the block is the caller's concern
/// (see [`CidrV4::is_network_address`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CidrV4 {
    addr: Ipv4Addr,
    prefix: u8,
}

impl CidrV4 {
    /// Creates a block, rejecting prefixes above 32.
    ///
    /// # Examples:
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use ipcalc::subnet::CidrV4;
    ///
    /// let block = CidrV4::new(Ipv4Addr::new(192, 168, 0, 0), 24).unwrap();
    /// assert!(block.prefix() == 24);
    /// assert!(CidrV4::new(Ipv4Addr::new(192, 168, 0, 0), 33).is_err());
    /// ```
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, Error> {
        if prefix > 32 {
            return Err(Error::InvalidFormat(format!("{}/{}", addr, prefix)));
        }
        Ok(Self { addr, prefix })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Returns the base address with its host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & prefix_to_mask(self.prefix))
    }

    /// True when the base address carries no host bits.
    pub fn is_network_address(&self) -> bool {
        self.network() == self.addr
    }

    /// Returns the last address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !prefix_to_mask(self.prefix))
    }

    /// Number of addresses in the block.
    pub fn address_count(&self) -> u64 {
        block_size(self.prefix)
    }

    /// Check if a given [`Ipv4Addr`] belongs to this block.
    ///
    /// # Examples:
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use ipcalc::subnet::CidrV4;
    ///
    /// let block: CidrV4 = "192.168.0.0/24".parse().unwrap();
    /// assert!(block.contains(Ipv4Addr::new(192, 168, 0, 3)));
    /// assert!(!block.contains(Ipv4Addr::new(192, 168, 1, 0)));
    /// ```
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & prefix_to_mask(self.prefix) == u32::from(self.network())
    }

    /// Computes the full [`SubnetDescriptor`] for this block.
    ///
    /// Fails with [`Error::NotNetworkAddress`] when the base
    /// address has host bits set.
    pub fn describe(&self) -> Result<SubnetDescriptor, Error> {
        describe(self.addr, self.prefix)
    }
}

impl FromStr for CidrV4 {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFormat(text.to_string());

        let (addr, prefix) = text.split_once('/').ok_or_else(invalid)?;
        let addr = parse_ipv4(addr)?;
        if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let prefix: u8 = prefix.parse().map_err(|_| invalid())?;

        Self::new(addr, prefix).map_err(|_| invalid())
    }
}

impl fmt::Display for CidrV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

// Plan files carry blocks in their "a.b.c.d/p" text form.
impl Serialize for CidrV4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrV4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: String = Deserialize::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
