//! Host identity model.

use crate::network::mac::HwAddr;

/// One derived host: the agreed identity of a single usable address.
///
/// Every artifact (DHCP reservation, zone declaration, PTR record,
/// forward zone) is a projection of this value, so producing it in one
/// place is what keeps the generated files consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    /// Dense sequence number over regular hosts, starting at 0.
    /// The gateway never consumes one.
    pub ordinal: Option<u64>,
    /// Address as an unsigned 32-bit integer.
    pub addr: u32,
    /// Derived hardware address (base + ordinal), or the fixed gateway
    /// constant for the gateway.
    pub hw_addr: HwAddr,
    /// Unqualified host name (padded ordinal name, or the configured
    /// gateway name).
    pub hostname: String,
    pub is_gateway: bool,
}
