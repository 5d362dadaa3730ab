//! # Netmask Analysis
//!
//! Decodes a dotted-quad IPv4 netmask into its bit counts and the
//! cardinality of the address block it describes.
//!
//! Only classful-table octets are accepted: every octet must be one of
//! the nine values with contiguous leading set bits. The position of an
//! octet inside that table *is* its count of leading ones, which keeps
//! the whole analysis a table lookup rather than bit twiddling.

use std::fmt;
use std::str::FromStr;

use crate::error::NetError;

/// Valid mask octets, ordered by their count of leading set bits.
///
/// The index of a value in this table is significant: index 8 marks a
/// fully saturated octet (255).
const MASK_TABLE: [u8; 9] = [0, 128, 192, 224, 240, 248, 252, 254, 255];

/// A validated IPv4 network mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Netmask {
    octets: [u8; 4],
}

/// The derived shape of the address block a [`Netmask`] describes.
///
/// Computed once up front and read-only for the rest of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskProfile {
    /// Leading network bits of the mask.
    pub total_bits: u32,
    /// Remaining host bits (`32 - total_bits`).
    pub host_bits: u32,
    /// Number of subnets the mask carves out of its classful parent.
    pub subnet_count: u64,
    /// Number of addresses in the block, including network and broadcast.
    pub range_size: u64,
}

impl FromStr for Netmask {
    type Err = NetError;

    /// Parses a dotted-quad mask such as `255.255.255.128`.
    ///
    /// Fails with [`NetError::InvalidMask`] when the string does not have
    /// four octets or when any octet is absent from the mask table
    /// (including non-numeric octets).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(NetError::InvalidMask {
                mask: s.to_string(),
                detail: format!("expected 4 octets, got {}", parts.len()),
            });
        }

        let mut octets = [0u8; 4];
        for (i, part) in parts.iter().enumerate() {
            let value = part.parse::<u8>().ok().filter(|v| MASK_TABLE.contains(v));
            match value {
                Some(v) => octets[i] = v,
                None => {
                    return Err(NetError::InvalidMask {
                        mask: s.to_string(),
                        detail: format!("octet '{}' is not a valid mask octet", part),
                    });
                }
            }
        }

        Ok(Netmask { octets })
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl Netmask {
    /// Table index of each octet, i.e. its count of leading set bits.
    fn bit_counts(&self) -> [u32; 4] {
        self.octets.map(|octet| {
            // Membership was validated at parse time.
            MASK_TABLE.iter().position(|&v| v == octet).unwrap() as u32
        })
    }

    /// Derives the [`MaskProfile`] for this mask.
    pub fn profile(&self) -> MaskProfile {
        let counts = self.bit_counts();
        let total_bits: u32 = counts.iter().sum();
        let host_bits = 32 - total_bits;

        // Subnet bits are contributed by every octet that is not fully
        // saturated (table index 8).
        let subnet_bits: u32 = counts.iter().filter(|&&c| c != 8).sum();

        MaskProfile {
            total_bits,
            host_bits,
            subnet_count: 1u64 << subnet_bits,
            range_size: 1u64 << host_bits,
        }
    }
}

impl MaskProfile {
    /// Width of the zero padding applied to host ordinals: the number of
    /// decimal digits of the range size.
    pub fn padding_width(&self) -> usize {
        self.range_size.to_string().len()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_of_class_c_mask() {
        let mask: Netmask = "255.255.255.0".parse().unwrap();
        let profile = mask.profile();

        assert_eq!(profile.total_bits, 24);
        assert_eq!(profile.host_bits, 8);
        assert_eq!(profile.subnet_count, 1);
        assert_eq!(profile.range_size, 256);
        assert_eq!(profile.padding_width(), 3);
    }

    #[test]
    fn profile_of_split_class_c_mask() {
        let mask: Netmask = "255.255.255.128".parse().unwrap();
        let profile = mask.profile();

        assert_eq!(profile.total_bits, 25);
        assert_eq!(profile.host_bits, 7);
        assert_eq!(profile.subnet_count, 2);
        assert_eq!(profile.range_size, 128);
    }

    #[test]
    fn profile_of_class_b_mask() {
        let mask: Netmask = "255.255.0.0".parse().unwrap();
        let profile = mask.profile();

        assert_eq!(profile.total_bits, 16);
        assert_eq!(profile.host_bits, 16);
        assert_eq!(profile.subnet_count, 1);
        assert_eq!(profile.range_size, 65536);
        assert_eq!(profile.padding_width(), 5);
    }

    #[test]
    fn degenerate_host_mask_is_accepted() {
        // /32 parses fine; the usable range downstream is simply empty.
        let mask: Netmask = "255.255.255.255".parse().unwrap();
        let profile = mask.profile();

        assert_eq!(profile.total_bits, 32);
        assert_eq!(profile.range_size, 1);
    }

    #[test]
    fn rejects_octet_outside_the_table() {
        let err = "255.255.255.3".parse::<Netmask>().unwrap_err();
        assert_eq!(
            err,
            NetError::InvalidMask {
                mask: "255.255.255.3".to_string(),
                detail: "octet '3' is not a valid mask octet".to_string(),
            }
        );
    }

    #[test]
    fn rejects_malformed_masks() {
        assert!("255.255.255".parse::<Netmask>().is_err());
        assert!("255.255.255.0.0".parse::<Netmask>().is_err());
        assert!("255.255.abc.0".parse::<Netmask>().is_err());
        assert!("".parse::<Netmask>().is_err());
    }

    #[test]
    fn displays_as_dotted_quad() {
        let mask: Netmask = "255.255.240.0".parse().unwrap();
        assert_eq!(mask.to_string(), "255.255.240.0");
    }
}
