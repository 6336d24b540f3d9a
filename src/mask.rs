//! Subnet mask algebra: CIDR prefix, dotted mask, and wildcard
//! (inverse) mask conversions over raw 32-bit values.

use std::net::Ipv4Addr;

use crate::error::Error;

/// Returns the subnet mask for a prefix length.
///
/// Prefix 0 is an explicit branch: shifting a `u32` by 32 places
/// is not defined, so the all-zero mask cannot come out of the
/// shift formula.
///
/// # Examples:
///
/// ```
/// use ipcalc::mask::prefix_to_mask;
///
/// assert!(prefix_to_mask(24) == 0xFFFFFF00);
/// assert!(prefix_to_mask(0) == 0);
/// assert!(prefix_to_mask(32) == u32::MAX);
/// ```
pub fn prefix_to_mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else if prefix >= 32 {
        u32::MAX
    } else {
        u32::MAX << (32 - prefix)
    }
}

/// Returns the prefix length encoded by a subnet mask.
///
/// A legal mask is a run of ones followed by a run of zeros;
/// anything else (255.255.0.255) is rejected.
///
/// # Examples:
///
/// ```
/// use ipcalc::mask::{mask_to_prefix, prefix_to_mask};
///
/// assert!(mask_to_prefix(0xFFFFFF00).unwrap() == 24);
/// assert!(mask_to_prefix(0xFFFF00FF).is_err());
/// ```
pub fn mask_to_prefix(mask: u32) -> Result<u8, Error> {
    let prefix = mask.leading_ones() as u8;
    if prefix_to_mask(prefix) != mask {
        return Err(Error::NonContiguousMask(Ipv4Addr::from(mask)));
    }
    Ok(prefix)
}

/// True when the bit pattern is a valid subnet mask.
pub fn is_contiguous(mask: u32) -> bool {
    prefix_to_mask(mask.leading_ones() as u8) == mask
}

/// Returns the wildcard (ACL) mask: the bitwise complement.
pub fn mask_to_wildcard(mask: u32) -> u32 {
    !mask
}

/// Inverse of [`mask_to_wildcard`]; complement is its own inverse.
pub fn wildcard_to_mask(wildcard: u32) -> u32 {
    !wildcard
}

/// Number of addresses in a block of the given prefix, as `u64`
/// because a /0 block holds 2^32 addresses.
pub fn block_size(prefix: u8) -> u64 {
    if prefix >= 32 {
        1
    } else {
        1u64 << (32 - prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for prefix in 0..=32u8 {
            assert_eq!(mask_to_prefix(prefix_to_mask(prefix)).unwrap(), prefix);
        }
    }

    #[test]
    fn test_known_masks() {
        assert!(prefix_to_mask(8) == u32::from(Ipv4Addr::new(255, 0, 0, 0)));
        assert!(prefix_to_mask(19) == u32::from(Ipv4Addr::new(255, 255, 224, 0)));
        assert!(prefix_to_mask(30) == u32::from(Ipv4Addr::new(255, 255, 255, 252)));
    }

    #[test]
    fn test_non_contiguous_rejected() {
        let holed = u32::from(Ipv4Addr::new(255, 255, 0, 255));
        assert!(mask_to_prefix(holed) == Err(Error::NonContiguousMask(Ipv4Addr::new(255, 255, 0, 255))));
        assert!(!is_contiguous(holed));
        assert!(is_contiguous(u32::from(Ipv4Addr::new(255, 255, 255, 0))));
    }

    #[test]
    fn test_wildcard_involution() {
        for prefix in 0..=32u8 {
            let mask = prefix_to_mask(prefix);
            assert_eq!(wildcard_to_mask(mask_to_wildcard(mask)), mask);
        }
        assert_eq!(
            mask_to_wildcard(prefix_to_mask(24)),
            u32::from(Ipv4Addr::new(0, 0, 0, 255))
        );
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(32), 1);
        assert_eq!(block_size(31), 2);
        assert_eq!(block_size(24), 256);
        assert_eq!(block_size(0), 1u64 << 32);
    }
}
