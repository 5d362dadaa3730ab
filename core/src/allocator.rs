//! # Host Allocation
//!
//! Turns the raw usable-address interval into a lazy sequence of
//! [`Host`] identities: exactly one per address, in increasing address
//! order, with the gateway singled out and every other address given a
//! dense ordinal, a derived hardware address, and a padded name.
//!
//! The ordinal counter lives inside the iterator; one pass over it is
//! one complete allocation run.

use netforge_common::config::RunConfig;
use netforge_common::network::host::Host;
use netforge_common::network::mac;
use netforge_common::network::mask::MaskProfile;
use netforge_common::network::range::UsableRange;

/// Lazy, forward-only producer of [`Host`] values.
pub struct HostAllocator<I> {
    addrs: I,
    gateway_addr: u32,
    gateway_name: String,
    host_base: String,
    pad_width: usize,
    next_ordinal: u64,
}

/// Allocates hosts over the usable interval of `range`.
///
/// `profile` supplies the range size whose decimal digit count fixes
/// the hostname padding width.
pub fn allocate(
    range: &UsableRange,
    profile: &MaskProfile,
    cfg: &RunConfig,
) -> HostAllocator<impl Iterator<Item = u32> + use<>> {
    HostAllocator {
        addrs: range.iter(),
        gateway_addr: cfg.gateway,
        gateway_name: cfg.gateway_name.clone(),
        host_base: cfg.host_base.clone(),
        pad_width: profile.padding_width(),
        next_ordinal: 0,
    }
}

impl<I> Iterator for HostAllocator<I>
where
    I: Iterator<Item = u32>,
{
    type Item = Host;

    fn next(&mut self) -> Option<Host> {
        let addr = self.addrs.next()?;

        if addr == self.gateway_addr {
            return Some(Host {
                ordinal: None,
                addr,
                hw_addr: mac::GATEWAY,
                hostname: self.gateway_name.clone(),
                is_gateway: true,
            });
        }

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        Some(Host {
            ordinal: Some(ordinal),
            addr,
            hw_addr: mac::HOST_BASE.offset(ordinal),
            hostname: format!("{}{:0width$}", self.host_base, ordinal, width = self.pad_width),
            is_gateway: false,
        })
    }
}
