use serde::{Deserialize, Serialize};

/// One named subnet demand: a label (free-form, possibly empty,
/// not necessarily unique) and the number of hosts it must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRequest {
    #[serde(default)]
    pub name: String,
    pub hosts: u32,
}

impl SubnetRequest {
    pub fn new(name: impl Into<String>, hosts: u32) -> Self {
        Self {
            name: name.into(),
            hosts,
        }
    }
}

/// Smallest prefix whose block holds `hosts` usable addresses
/// plus network and broadcast, i.e. `32 - ceil(log2(hosts + 2))`.
///
/// Returns `None` for zero hosts and for demands that not even a
/// /0 block can hold.
///
/// The two reserved addresses are charged uniformly: one and two
/// hosts both size to a /30, never to the /32 host route or the
/// /31 point-to-point block RFC 3021 would permit.
///
/// # Examples:
///
/// ```
/// use ipcalc::planner::required_prefix;
///
/// assert!(required_prefix(55) == Some(26));
/// assert!(required_prefix(2) == Some(30));
/// assert!(required_prefix(0) == None);
/// ```
pub fn required_prefix(hosts: u32) -> Option<u8> {
    if hosts == 0 {
        return None;
    }
    let block = (hosts as u64 + 2).next_power_of_two();
    if block > 1u64 << 32 {
        return None;
    }
    Some(32 - block.trailing_zeros() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_prefix() {
        assert_eq!(required_prefix(55), Some(26));
        assert_eq!(required_prefix(20), Some(27));
        assert_eq!(required_prefix(12), Some(28));
        assert_eq!(required_prefix(254), Some(24));
        assert_eq!(required_prefix(255), Some(23));
        assert_eq!(required_prefix(62), Some(26));
        assert_eq!(required_prefix(63), Some(25));
    }

    #[test]
    fn test_small_requests_always_reserve_two() {
        // One- and two-host demands still charge network and
        // broadcast, so neither /32 nor /31 is ever produced.
        assert_eq!(required_prefix(1), Some(30));
        assert_eq!(required_prefix(2), Some(30));
    }

    #[test]
    fn test_degenerate_requests() {
        assert_eq!(required_prefix(0), None);
        assert_eq!(required_prefix(u32::MAX), None);
        // 2^32 - 2 hosts exactly fill a /0.
        assert_eq!(required_prefix(u32::MAX - 1), Some(0));
    }
}
