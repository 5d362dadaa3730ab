//! Dotted-quad address codec.
//!
//! Addresses travel through the generator as plain `u32` values; the
//! dotted-quad string is a presentation form only. Both directions are
//! total and exact inverses of each other for canonical input.

use crate::error::NetError;

/// Decodes a dotted-quad string into its integer representation.
///
/// Fails with [`NetError::InvalidAddress`] on a wrong octet count or an
/// octet that is not a decimal value in `0..=255`.
pub fn to_integer(s: &str) -> Result<u32, NetError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(NetError::InvalidAddress {
            addr: s.to_string(),
            reason: format!("expected 4 octets, got {}", parts.len()),
        });
    }

    let mut value: u32 = 0;
    for part in &parts {
        let octet = part.parse::<u8>().map_err(|e| NetError::InvalidAddress {
            addr: s.to_string(),
            reason: format!("bad octet '{}': {}", part, e),
        })?;
        value = (value << 8) | u32::from(octet);
    }

    Ok(value)
}

/// Renders an integer address as a dotted-quad string.
pub fn to_dotted_quad(n: u32) -> String {
    let octets = n.to_be_bytes();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Last two octets of an address, reversed.
///
/// This is the relative reverse-zone label used for PTR records
/// (`192.168.100.37` becomes `37.100`).
pub fn reverse_label(n: u32) -> String {
    let octets = n.to_be_bytes();
    format!("{}.{}", octets[3], octets[2])
}
