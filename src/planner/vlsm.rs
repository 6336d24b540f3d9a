use std::cmp::Reverse;
use std::net::Ipv4Addr;

use itertools::Itertools;
use log::{debug, trace};
use serde::Serialize;

use crate::error::Error;
use crate::mask::block_size;
use crate::planner::request::{required_prefix, SubnetRequest};
use crate::subnet::cidr::CidrV4;
use crate::subnet::descriptor::{describe, SubnetDescriptor};

/// One fulfilled request: the computed subnet plus the label and
/// host count it was sized for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSubnet {
    name: String,
    requested_hosts: u32,
    subnet: SubnetDescriptor,
}

impl PlannedSubnet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requested_hosts(&self) -> u32 {
        self.requested_hosts
    }

    pub fn subnet(&self) -> &SubnetDescriptor {
        &self.subnet
    }
}

/// A contiguous leftover range of the major network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnallocatedBlock {
    first: Ipv4Addr,
    last: Ipv4Addr,
    addresses: u64,
}

impl UnallocatedBlock {
    pub fn first(&self) -> Ipv4Addr {
        self.first
    }

    pub fn last(&self) -> Ipv4Addr {
        self.last
    }

    pub fn addresses(&self) -> u64 {
        self.addresses
    }
}

/// A complete VLSM plan. The allocated subnets and the leftover
/// blocks together tile the major network exactly, with no gaps
/// and no overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    subnets: Vec<PlannedSubnet>,
    unallocated: Vec<UnallocatedBlock>,
}

impl AllocationResult {
    /// Fulfilled requests, in allocation order (largest demand
    /// first, input order on ties).
    pub fn subnets(&self) -> &[PlannedSubnet] {
        &self.subnets
    }

    pub fn unallocated(&self) -> &[UnallocatedBlock] {
        &self.unallocated
    }
}

/// Carves `major` into minimal-prefix subnets for `requests`,
/// packing greedily from the largest demand down.
///
/// Largest-first packing into a linear address space is exact for
/// power-of-two blocks: every block placed divides the sizes of
/// all blocks placed before it, so the cursor stays aligned and no
/// request is ever blocked by fragmentation.
///
/// Requests with zero hosts are dropped up front; if none remain
/// the call fails with [`Error::NoValidRequests`]. When the major
/// network runs out of room, the call fails with
/// [`Error::AddressSpaceExhausted`] naming the request that did
/// not fit and carrying the subnets already placed.
///
/// # Examples:
///
/// ```
/// use ipcalc::planner::{allocate, SubnetRequest};
/// use ipcalc::subnet::CidrV4;
///
/// let major: CidrV4 = "192.168.0.0/24".parse().unwrap();
/// let requests = vec![
///     SubnetRequest::new("A", 55),
///     SubnetRequest::new("B", 20),
/// ];
/// let plan = allocate(major, &requests).unwrap();
/// assert!(plan.subnets().len() == 2);
/// assert!(plan.subnets()[0].subnet().prefix() == 26);
/// ```
pub fn allocate(major: CidrV4, requests: &[SubnetRequest]) -> Result<AllocationResult, Error> {
    if !major.is_network_address() {
        return Err(Error::InvalidMajorNetwork {
            given: major.addr(),
            corrected: major.network(),
        });
    }

    let valid: Vec<&SubnetRequest> = requests.iter().filter(|r| r.hosts > 0).collect();
    if valid.is_empty() {
        return Err(Error::NoValidRequests);
    }

    let major_base = u64::from(u32::from(major.network()));
    let major_end = major_base + major.address_count();

    let mut subnets: Vec<PlannedSubnet> = Vec::with_capacity(valid.len());
    let mut cursor = major_base;

    // Stable sort: equal demands keep their input order.
    for request in valid.into_iter().sorted_by_key(|r| Reverse(r.hosts)) {
        let fitting = required_prefix(request.hosts)
            .map(|prefix| (prefix, block_size(prefix)))
            .filter(|(_, block)| cursor + block <= major_end);

        let (prefix, block) = match fitting {
            Some(found) => found,
            None => {
                debug!(
                    "vlsm: {} exhausted after {} subnets, request {:?} ({} hosts) does not fit",
                    major,
                    subnets.len(),
                    request.name,
                    request.hosts
                );
                return Err(Error::AddressSpaceExhausted {
                    request: request.name.clone(),
                    allocated: subnets,
                });
            }
        };

        // The cursor is aligned to every block size already placed,
        // and sizes only shrink, so this base is always a network
        // address for `prefix`.
        let subnet = describe(Ipv4Addr::from(cursor as u32), prefix)?;
        trace!(
            "vlsm: placed {:?} ({} hosts) at {}",
            request.name,
            request.hosts,
            subnet
        );
        subnets.push(PlannedSubnet {
            name: request.name.clone(),
            requested_hosts: request.hosts,
            subnet,
        });
        cursor += block;
    }

    let mut unallocated = Vec::new();
    if cursor < major_end {
        unallocated.push(UnallocatedBlock {
            first: Ipv4Addr::from(cursor as u32),
            last: Ipv4Addr::from((major_end - 1) as u32),
            addresses: major_end - cursor,
        });
    }

    debug!(
        "vlsm: {} -> {} subnets, {} addresses left over",
        major,
        subnets.len(),
        major_end - cursor
    );

    Ok(AllocationResult {
        subnets,
        unallocated,
    })
}
