use std::path::PathBuf;

use crate::network::addr;
use crate::network::mask::Netmask;

/// Immutable description of one generation run.
///
/// Built once from the command line and passed by reference into every
/// component; nothing downstream mutates it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Network mask of the managed block.
    pub netmask: Netmask,
    /// Subnet base address (all host bits zero).
    pub subnet: u32,
    /// Router/gateway address inside the block.
    pub gateway: u32,
    /// DNS name of the gateway.
    pub gateway_name: String,
    /// Domain the generated hosts live under.
    pub domain: String,
    /// Base name token for regular hosts; the padded ordinal is appended.
    pub host_base: String,
    /// Hypervisor bridge interface name.
    pub bridge: String,
    /// Nameservers to forward to; empty means no forwarding directive.
    pub nameservers: Vec<String>,
    /// Generation date as `YYYYMMDD`, captured once so every zone serial
    /// in the run agrees.
    pub serial_date: String,
    pub paths: OutputPaths,
}

/// Target locations of the generated artifacts.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// DHCP daemon configuration.
    pub dhcpd: PathBuf,
    /// Name daemon configuration.
    pub named: PathBuf,
    /// Reverse zone file.
    pub reverse_zone: PathBuf,
    /// Directory receiving one forward zone file per host.
    pub forward_zone_dir: PathBuf,
    /// Hypervisor network descriptor.
    pub network_xml: PathBuf,
}

impl RunConfig {
    pub fn subnet_dotted(&self) -> String {
        addr::to_dotted_quad(self.subnet)
    }

    pub fn gateway_dotted(&self) -> String {
        addr::to_dotted_quad(self.gateway)
    }

    /// `subnet/bits` notation of the managed block.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.subnet_dotted(), self.netmask.profile().total_bits)
    }
}
