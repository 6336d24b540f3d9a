use std::net::Ipv4Addr;

use crate::error::Error;

/// Parses a dotted-quad IPv4 address.
///
/// The text must consist of exactly four dot-separated decimal
/// octets, each in 0-255, with no extraneous characters. Leading
/// zeros are tolerated on input and normalized away on output, so
/// `format_ipv4(to_u32(parse_ipv4(s)?))` yields the canonical form
/// of any accepted `s`.
///
/// # Examples:
///
/// ```
/// use std::net::Ipv4Addr;
/// use ipcalc::addr::codec::parse_ipv4;
///
/// assert!(parse_ipv4("192.168.000.001").unwrap() == Ipv4Addr::new(192, 168, 0, 1));
/// assert!(parse_ipv4("192.168.0").is_err());
/// assert!(parse_ipv4("192.168.0.256").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, Error> {
    let invalid = || Error::InvalidFormat(text.to_string());

    let mut octets = [0u8; 4];
    let mut parts = text.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u16 = part.parse().map_err(|_| invalid())?;
        if value > 255 {
            return Err(invalid());
        }
        *octet = value as u8;
    }

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Ipv4Addr::from(octets))
}

/// Returns the 32-bit integer form of an address,
/// first octet in the most significant byte.
///
/// # Examples:
///
/// ```
/// use std::net::Ipv4Addr;
/// use ipcalc::addr::codec::to_u32;
///
/// assert!(to_u32(Ipv4Addr::new(192, 168, 1, 0)) == 0xC0A80100);
/// ```
pub fn to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`to_u32`].
pub fn from_u32(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Formats a 32-bit address value as a canonical dotted quad
/// (no leading zeros).
///
/// # Examples:
///
/// ```
/// use ipcalc::addr::codec::format_ipv4;
///
/// assert!(format_ipv4(0xC0A80101) == "192.168.1.1");
/// ```
pub fn format_ipv4(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(parse_ipv4("0.0.0.0").unwrap() == Ipv4Addr::new(0, 0, 0, 0));
        assert!(parse_ipv4("255.255.255.255").unwrap() == Ipv4Addr::new(255, 255, 255, 255));
        assert!(parse_ipv4("10.0.42.7").unwrap() == Ipv4Addr::new(10, 0, 42, 7));
    }

    #[test]
    fn test_parse_normalizes_leading_zeros() {
        let addr = parse_ipv4("010.001.000.009").unwrap();
        assert_eq!(format_ipv4(to_u32(addr)), "10.1.0.9");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.256",
            "1.2.3.-4",
            "1.2.3.4 ",
            " 1.2.3.4",
            "1.2..4",
            "a.b.c.d",
            "1.2.3.0x4",
            "1234.2.3.4",
        ] {
            assert!(
                matches!(parse_ipv4(bad), Err(Error::InvalidFormat(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_round_trip() {
        for text in ["0.0.0.0", "127.0.0.1", "172.16.254.1", "255.255.255.255"] {
            let addr = parse_ipv4(text).unwrap();
            assert_eq!(format_ipv4(to_u32(addr)), text);
        }
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(to_u32(Ipv4Addr::new(1, 2, 3, 4)), 0x01020304);
        assert_eq!(from_u32(0x01020304), Ipv4Addr::new(1, 2, 3, 4));
    }
}
