//! # Record Emission
//!
//! Pure projection of a [`Host`] into the semantic fields of every
//! artifact that mentions it. No text formatting and no I/O happens
//! here; rendering is a separate layer so the output syntax can change
//! without touching the identity derivation.

use std::path::{Path, PathBuf};

use netforge_common::network::addr;
use netforge_common::network::host::Host;
use netforge_common::network::mac::HwAddr;

/// Naming context shared by every record of a run.
#[derive(Debug, Clone)]
pub struct ZoneIdentity {
    pub domain: String,
    pub gateway_name: String,
    /// `YYYYMMDD`, the base of every zone serial.
    pub serial_date: String,
}

/// A fixed-address DHCP reservation. Gateways never get one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpReservation {
    pub hostname: String,
    pub hw_addr: HwAddr,
    pub addr: String,
}

/// Declaration of a per-host forward zone in the name daemon config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDecl {
    /// Fully qualified zone name, `<hostname>.<domain>`.
    pub zone: String,
    /// Zone file backing the declaration.
    pub file: PathBuf,
}

/// One PTR line of the reverse zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtrRecord {
    /// Relative label: the last two address octets, reversed.
    pub label: String,
    /// Target name with trailing root dot, `<hostname>.<domain>.`.
    pub fqdn: String,
}

/// Body fields of a per-host authoritative forward zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardZone {
    pub hostname: String,
    pub domain: String,
    pub addr: String,
    pub gateway_name: String,
    pub serial_date: String,
}

/// Everything the artifacts need to know about one host.
#[derive(Debug, Clone)]
pub struct HostRecords {
    /// Absent for the gateway.
    pub dhcp: Option<DhcpReservation>,
    pub zone_decl: ZoneDecl,
    pub ptr: PtrRecord,
    pub forward: ForwardZone,
}

/// File name of a host's forward zone inside the zone directory.
pub fn forward_zone_path(host: &Host, identity: &ZoneIdentity, dir: &Path) -> PathBuf {
    dir.join(format!("{}.{}.zone", host.hostname, identity.domain))
}

/// Projects `host` into its full record set.
pub fn emit(host: &Host, identity: &ZoneIdentity, zone_dir: &Path) -> HostRecords {
    let addr_dotted = addr::to_dotted_quad(host.addr);

    let dhcp = if host.is_gateway {
        None
    } else {
        Some(DhcpReservation {
            hostname: host.hostname.clone(),
            hw_addr: host.hw_addr,
            addr: addr_dotted.clone(),
        })
    };

    HostRecords {
        dhcp,
        zone_decl: ZoneDecl {
            zone: format!("{}.{}", host.hostname, identity.domain),
            file: forward_zone_path(host, identity, zone_dir),
        },
        ptr: PtrRecord {
            label: addr::reverse_label(host.addr),
            fqdn: format!("{}.{}.", host.hostname, identity.domain),
        },
        forward: ForwardZone {
            hostname: host.hostname.clone(),
            domain: identity.domain.clone(),
            addr: addr_dotted,
            gateway_name: identity.gateway_name.clone(),
            serial_date: identity.serial_date.clone(),
        },
    }
}
