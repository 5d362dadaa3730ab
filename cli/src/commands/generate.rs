use colored::*;
use tracing::info;

use netforge_core::writer;

use crate::commands::NetworkArgs;
use crate::terminal::print;

pub fn generate(args: &NetworkArgs) -> anyhow::Result<()> {
    let cfg = args.to_config()?;

    print::header("generating network configuration");
    let summary = writer::generate(&cfg)?;

    let hosts = summary.hosts.to_string().green().bold();
    let reservations = summary.reservations.to_string().green().bold();
    info!(
        "{} hosts derived for {}, {} DHCP reservations",
        hosts,
        cfg.cidr(),
        reservations
    );

    if !summary.gateway_present {
        tracing::warn!(
            "gateway {} lies outside the usable range; no gateway records were generated",
            cfg.gateway_dotted()
        );
    }

    Ok(())
}
