use colored::*;

use netforge_common::network::addr;
use netforge_common::network::host::Host;
use netforge_common::network::range::UsableRange;
use netforge_core::allocator;

use crate::commands::PlanArgs;
use crate::terminal::print;

/// Derives the full host plan and prints it; nothing touches the disk.
pub fn plan(args: &PlanArgs) -> anyhow::Result<()> {
    let cfg = args.network.to_config()?;
    let profile = cfg.netmask.profile();
    let range = UsableRange::new(cfg.subnet, profile.range_size);

    print::header("address space");
    print::aligned("network", addr::to_dotted_quad(range.network()).normal());
    print::aligned("broadcast", addr::to_dotted_quad(range.broadcast()).normal());
    print::aligned("cidr", cfg.cidr().normal());
    print::aligned("network bits", profile.total_bits.to_string().normal());
    print::aligned("host bits", profile.host_bits.to_string().normal());
    print::aligned("subnets", profile.subnet_count.to_string().normal());
    print::aligned("addresses", profile.range_size.to_string().normal());
    print::aligned("reverse zone", range.reverse_zone_origin().normal());

    let mut hosts: u64 = 0;
    let mut reservations: u64 = 0;
    let mut gateway: Option<Host> = None;

    for host in allocator::allocate(&range, &profile, &cfg) {
        if host.is_gateway {
            gateway = Some(host.clone());
        } else {
            reservations += 1;
        }
        hosts += 1;

        if args.detail {
            print_host(&host);
        }
    }

    print::header("plan");
    print::aligned("hosts", hosts.to_string().green().bold());
    print::aligned("reservations", reservations.to_string().green().bold());
    match gateway {
        Some(gw) => print::aligned(
            "gateway",
            format!(
                "{}.{} at {} ({})",
                gw.hostname,
                cfg.domain,
                addr::to_dotted_quad(gw.addr),
                gw.hw_addr
            )
            .normal(),
        ),
        None => print::aligned("gateway", "outside the usable range".yellow()),
    }

    Ok(())
}

fn print_host(host: &Host) {
    let name = if host.is_gateway {
        host.hostname.cyan().bold()
    } else {
        host.hostname.normal()
    };

    println!(
        "  {:<16} {:<16} {}",
        name,
        addr::to_dotted_quad(host.addr),
        host.hw_addr.to_string().bright_black()
    );
}
