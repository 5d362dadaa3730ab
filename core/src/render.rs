//! # Artifact Rendering
//!
//! The swappable text layer: turns structured records into the literal
//! daemon configuration syntax. Everything here is a pure function of
//! its inputs, so two runs over the same derivation produce identical
//! bytes.

use netforge_common::config::RunConfig;
use netforge_common::network::mac;
use netforge_common::network::range::UsableRange;

use crate::records::{DhcpReservation, ForwardZone, PtrRecord, ZoneDecl, ZoneIdentity};

/// Header block of `dhcpd.conf`: the subnet declaration with its options.
pub fn dhcp_header(cfg: &RunConfig, range: &UsableRange) -> String {
    let netmask = cfg.netmask.to_string();
    let gateway = cfg.gateway_dotted();
    let broadcast = netforge_common::network::addr::to_dotted_quad(range.broadcast());

    format!(
        "# Generated by netforge
ddns-update-style none;
ignore client-updates;

subnet {subnet} netmask {netmask} {{
        option domain-name \"{domain}\";
        option routers {gateway};
        option ip-forwarding off;
        option broadcast-address {broadcast};
        option subnet-mask {netmask};
        option ntp-servers {gateway};
        option domain-name-servers {gateway};
}}
",
        subnet = cfg.subnet_dotted(),
        netmask = netmask,
        domain = cfg.domain,
        gateway = gateway,
        broadcast = broadcast,
    )
}

/// One fixed-address reservation stanza.
pub fn dhcp_reservation(r: &DhcpReservation) -> String {
    format!(
        "\nhost {} {{\n\thardware ethernet {};\n\tfixed-address {};\n}}\n",
        r.hostname, r.hw_addr, r.addr
    )
}

/// Header of `named.conf`: options, logging, the root hint and the
/// master reverse zone. Per-host zone declarations are appended after
/// this block.
pub fn named_header(cfg: &RunConfig, range: &UsableRange) -> String {
    let gateway = cfg.gateway_dotted();

    format!(
        "// Generated by netforge
options {{
        listen-on port 53 {{ 127.0.0.1; {gateway}; }};
        listen-on-v6 port 53 {{ ::1; }};
        directory       \"/var/named\";
        dump-file       \"/var/named/data/cache_dump.db\";
        statistics-file \"/var/named/data/named_stats.txt\";
        memstatistics-file \"/var/named/data/named_mem_stats.txt\";
        allow-query     {{ any; }};
        allow-recursion {{ {cidr}; 127.0.0.1; }};
        recursion yes;

        dnssec-enable yes;
        dnssec-validation yes;
        dnssec-lookaside auto;

        /* Path to ISC DLV key */
        bindkeys-file \"/etc/named.iscdlv.key\";

        managed-keys-directory \"/var/named/dynamic\";{forwarders}
}};

logging {{
        channel default_debug {{
                file \"data/named.run\";
                severity dynamic;
        }};
}};

zone \".\" IN {{
        type hint;
        file \"named.ca\";
}};

zone \"{in_arpa}\" {{
        type master;
        notify no;
        allow-query {{ any; }};
        file \"{reverse_zone}\";
}};

// Per-host zones, declared explicitly to avoid name collisions.
",
        gateway = gateway,
        cidr = cfg.cidr(),
        forwarders = forwarders_block(&cfg.nameservers),
        in_arpa = range.reverse_zone_origin(),
        reverse_zone = cfg.paths.reverse_zone.display(),
    )
}

/// The `forward first` directive when nameservers are configured, or
/// nothing at all when the list is empty.
fn forwarders_block(nameservers: &[String]) -> String {
    if nameservers.is_empty() {
        return String::new();
    }

    let list = nameservers.join("; ");
    format!("\n\n        forward first;\n        forwarders {{ {list}; }};\n")
}

/// One per-host zone declaration for `named.conf`.
pub fn zone_decl(d: &ZoneDecl) -> String {
    format!(
        "\nzone \"{}\" {{type master; notify no; file \"{}\";}};",
        d.zone,
        d.file.display()
    )
}

/// SOA header of the reverse zone file.
pub fn reverse_header(identity: &ZoneIdentity) -> String {
    format!(
        ";
; Generated by netforge
;
$TTL 3D
@       IN        SOA       {gateway}.{domain}. hostmaster.{domain}. (
                            {date}01           ; serial number
                            28800              ; 8H refresh, seconds
                            7200               ; 2H retry, seconds
                            2419200            ; 4W expire, seconds
                            86400 )            ; 1D minimum, seconds

                  NS        {gateway}.{domain}.   ; Nameserver Address

",
        gateway = identity.gateway_name,
        domain = identity.domain,
        date = identity.serial_date,
    )
}

/// One PTR line of the reverse zone.
pub fn ptr_line(p: &PtrRecord) -> String {
    format!("{}\t\tPTR\t{}\n", p.label, p.fqdn)
}

/// A complete minimal authoritative forward zone for one host.
pub fn forward_zone(z: &ForwardZone) -> String {
    format!(
        ";
; Generated by netforge
;
$TTL 3D
@       IN      SOA    {gateway}.{domain}. hostmaster.{domain}. (
                       {date}01           ; serial number
                       28800              ; 8H refresh, seconds
                       7200               ; 2H retry, seconds
                       2419200            ; 4W expire, seconds
                       86400 )            ; 1D minimum, seconds

\t\tNS\t{gateway}.{domain}. ; Inet Address of nameserver

\t\tA\t{addr}
{hostname}\tIN\tA\t{addr}
",
        gateway = z.gateway_name,
        domain = z.domain,
        date = z.serial_date,
        addr = z.addr,
        hostname = z.hostname,
    )
}

/// The hypervisor network descriptor, produced once per run.
pub fn network_xml(cfg: &RunConfig) -> String {
    format!(
        "<!--
Generated by netforge
-->

<network>
  <name>default</name>
  <uuid>3f967f6a-c1ab-afac-564a-649208fc8394</uuid>
  <forward mode='nat'/>
  <bridge name='{bridge}' stp='on' delay='0' />
  <mac address='{gateway_mac}'/>
  <ip address='{gateway}' netmask='{netmask}'>
  </ip>
</network>
",
        bridge = cfg.bridge,
        gateway_mac = mac::GATEWAY,
        gateway = cfg.gateway_dotted(),
        netmask = cfg.netmask,
    )
}
