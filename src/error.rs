use std::net::Ipv4Addr;

use thiserror::Error;

use crate::planner::vlsm::PlannedSubnet;

/// Errors reported by the subnetting core.
///
/// Every variant is a deterministic validation failure: the same
/// inputs always produce the same error, and nothing is retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Text that does not parse as a dotted quad, a CIDR block,
    /// or a prefix length.
    #[error("invalid IPv4 notation: {0:?}")]
    InvalidFormat(String),

    /// A mask whose bit pattern is not a run of ones followed
    /// by a run of zeros (e.g. 255.255.0.255).
    #[error("non-contiguous subnet mask: {0}")]
    NonContiguousMask(Ipv4Addr),

    /// The given base address has host bits set for the given prefix.
    /// `corrected` is the address with the host bits cleared.
    #[error("{given}/{prefix} is not a network address, use {corrected} instead")]
    NotNetworkAddress {
        given: Ipv4Addr,
        corrected: Ipv4Addr,
        prefix: u8,
    },

    /// The major network handed to the VLSM allocator is not itself
    /// a network address.
    #[error("major network address {given} has host bits set, use {corrected} instead")]
    InvalidMajorNetwork {
        given: Ipv4Addr,
        corrected: Ipv4Addr,
    },

    /// No subnet request carried a positive host count.
    #[error("no subnet request with a positive host count")]
    NoValidRequests,

    /// The major network ran out of space while placing `request`.
    /// The subnets placed before the failure are carried along so a
    /// caller can still display the partial plan.
    #[error("address space exhausted while placing request {request:?}")]
    AddressSpaceExhausted {
        request: String,
        allocated: Vec<PlannedSubnet>,
    },

    /// Plan file could not be read or parsed.
    #[error("plan config error: {0}")]
    Cfg(String),
}
