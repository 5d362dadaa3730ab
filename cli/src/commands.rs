pub mod generate;
pub mod plan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use netforge_common::config::{OutputPaths, RunConfig};
use netforge_common::network::addr;
use netforge_common::network::mask::Netmask;

#[derive(Parser)]
#[command(name = "netforge")]
#[command(version)]
#[command(about = "Derives DHCP, DNS and hypervisor network configuration from a subnet.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write every artifact for the configured subnet
    #[command(alias = "g")]
    Generate(NetworkArgs),
    /// Derive the host plan and print it without writing anything
    #[command(alias = "p")]
    Plan(PlanArgs),
}

/// The subnet description and output locations shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    /// Network mask
    #[arg(long, default_value = "255.255.255.0")]
    pub netmask: String,

    /// Start of the network range
    #[arg(long, default_value = "192.168.100.0")]
    pub subnet: String,

    /// Router/gateway address
    #[arg(long, default_value = "192.168.100.1", overrides_with = "gateway")]
    pub gateway: String,

    /// DNS entry for the gateway
    #[arg(long, default_value = "gateway")]
    pub gateway_name: String,

    /// Domain for the generated hosts
    #[arg(long, default_value = "example.com")]
    pub domain: String,

    /// Comma-separated nameservers for forwarding (omit for none)
    #[arg(long)]
    pub nameservers: Option<String>,

    /// Base DNS name of the generated hosts
    #[arg(long, default_value = "vm")]
    pub host_base: String,

    /// Hypervisor bridge interface
    #[arg(long, default_value = "virbr0")]
    pub bridge: String,

    /// Location of the DHCP daemon config
    #[arg(long, default_value = "/etc/dhcp/dhcpd.conf")]
    pub dhcpd: PathBuf,

    /// Location of the name daemon config
    #[arg(long, default_value = "/etc/named.conf")]
    pub named: PathBuf,

    /// Reverse zone file
    #[arg(long, default_value = "/var/named/reverse.zone")]
    pub reverse_zone: PathBuf,

    /// Directory for the per-host forward zone files
    #[arg(long, default_value = "/var/named/virtual")]
    pub zone_dir: PathBuf,

    /// Location of the hypervisor network descriptor
    #[arg(long, default_value = "/etc/libvirt/qemu/networks/default.xml")]
    pub network_xml: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Print every derived host, not just the summary
    #[arg(long)]
    pub detail: bool,
}

impl NetworkArgs {
    /// Validates the address inputs and freezes them into a [`RunConfig`].
    ///
    /// The serial date is captured here, once, so every zone written by
    /// the run carries the same serial.
    pub fn to_config(&self) -> anyhow::Result<RunConfig> {
        let netmask: Netmask = self.netmask.parse()?;

        let nameservers: Vec<String> = self
            .nameservers
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(RunConfig {
            netmask,
            subnet: addr::to_integer(&self.subnet)?,
            gateway: addr::to_integer(&self.gateway)?,
            gateway_name: self.gateway_name.clone(),
            domain: self.domain.clone(),
            host_base: self.host_base.clone(),
            bridge: self.bridge.clone(),
            nameservers,
            serial_date: chrono::Local::now().format("%Y%m%d").to_string(),
            paths: OutputPaths {
                dhcpd: self.dhcpd.clone(),
                named: self.named.clone(),
                reverse_zone: self.reverse_zone.clone(),
                forward_zone_dir: self.zone_dir.clone(),
                network_xml: self.network_xml.clone(),
            },
        })
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    CommandLine::command().debug_assert()
}
