use std::net::Ipv4Addr;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::mask::prefix_to_mask;

/// Classful address category, derived from the leading octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental.
    E,
}

/// Routing scope of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressScope {
    Public,
    /// RFC 1918.
    Private,
    Loopback,
    LinkLocal,
    /// RFC 6598 shared address space (100.64.0.0/10).
    CarrierGradeNat,
    Multicast,
    Reserved,
    Broadcast,
}

lazy_static! {
    /// Special-purpose ranges, checked in order; first match wins.
    static ref SPECIAL_RANGES: Vec<(Ipv4Addr, u8, AddressScope)> = vec![
        (Ipv4Addr::new(255, 255, 255, 255), 32, AddressScope::Broadcast),
        (Ipv4Addr::new(127, 0, 0, 0), 8, AddressScope::Loopback),
        (Ipv4Addr::new(169, 254, 0, 0), 16, AddressScope::LinkLocal),
        (Ipv4Addr::new(100, 64, 0, 0), 10, AddressScope::CarrierGradeNat),
        (Ipv4Addr::new(10, 0, 0, 0), 8, AddressScope::Private),
        (Ipv4Addr::new(172, 16, 0, 0), 12, AddressScope::Private),
        (Ipv4Addr::new(192, 168, 0, 0), 16, AddressScope::Private),
        (Ipv4Addr::new(224, 0, 0, 0), 4, AddressScope::Multicast),
        (Ipv4Addr::new(240, 0, 0, 0), 4, AddressScope::Reserved),
    ];
}

/// Returns the classful category of `addr`.
pub fn class_of(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        0..=127 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        _ => AddressClass::E,
    }
}

/// Returns the routing scope of `addr`, [`AddressScope::Public`]
/// unless it falls in one of the special-purpose ranges.
pub fn scope_of(addr: Ipv4Addr) -> AddressScope {
    let bits = u32::from(addr);
    for (network, prefix, scope) in SPECIAL_RANGES.iter() {
        if bits & prefix_to_mask(*prefix) == u32::from(*network) {
            return *scope;
        }
    }
    AddressScope::Public
}

/// Convenience wrapper: true for RFC 1918 addresses only.
pub fn is_private(addr: Ipv4Addr) -> bool {
    scope_of(addr) == AddressScope::Private
}
