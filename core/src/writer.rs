//! # Artifact Writing
//!
//! Drives one complete generation run: a single forward pass over the
//! host allocator, streaming stanzas into the shared artifacts and one
//! forward zone file per host. Strictly sequential; the first failed
//! write aborts the run and earlier artifacts stay where they are.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use netforge_common::config::RunConfig;
use netforge_common::network::addr;
use netforge_common::network::range::UsableRange;

use crate::allocator;
use crate::records::{self, ZoneIdentity};
use crate::render;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Hosts derived, gateway included.
    pub hosts: u64,
    /// DHCP reservations written (regular hosts only).
    pub reservations: u64,
    /// Whether the gateway address fell inside the usable range.
    pub gateway_present: bool,
}

/// The naming context every record of this run shares.
pub fn identity_of(cfg: &RunConfig) -> ZoneIdentity {
    ZoneIdentity {
        domain: cfg.domain.clone(),
        gateway_name: cfg.gateway_name.clone(),
        serial_date: cfg.serial_date.clone(),
    }
}

/// Generates every artifact described by `cfg`.
///
/// Write order is fixed: network descriptor, artifact headers, then per
/// host (in address order) the forward zone file, the DHCP reservation,
/// the zone declaration and the PTR line. Two runs over the same config
/// produce byte-identical files.
pub fn generate(cfg: &RunConfig) -> Result<RunSummary> {
    let profile = cfg.netmask.profile();
    let range = UsableRange::new(cfg.subnet, profile.range_size);
    let identity = identity_of(cfg);

    debug!(
        "analyzed netmask {}: /{} with {} addresses",
        cfg.netmask, profile.total_bits, profile.range_size
    );

    fs::create_dir_all(&cfg.paths.forward_zone_dir).with_context(|| {
        format!(
            "failed to create zone directory {}",
            cfg.paths.forward_zone_dir.display()
        )
    })?;

    write_file(cfg, &cfg.paths.network_xml, render::network_xml(cfg))?;

    let mut dhcpd = create(cfg, &cfg.paths.dhcpd)?;
    let mut named = create(cfg, &cfg.paths.named)?;
    let mut reverse = create(cfg, &cfg.paths.reverse_zone)?;

    append(&mut dhcpd, &cfg.paths.dhcpd, render::dhcp_header(cfg, &range))?;
    append(&mut named, &cfg.paths.named, render::named_header(cfg, &range))?;
    append(&mut reverse, &cfg.paths.reverse_zone, render::reverse_header(&identity))?;

    let mut summary = RunSummary {
        hosts: 0,
        reservations: 0,
        gateway_present: false,
    };

    for host in allocator::allocate(&range, &profile, cfg) {
        let host_records = records::emit(&host, &identity, &cfg.paths.forward_zone_dir);

        fs::write(
            &host_records.zone_decl.file,
            render::forward_zone(&host_records.forward),
        )
        .with_context(|| {
            format!(
                "failed to write forward zone {} for {}",
                host_records.zone_decl.file.display(),
                addr::to_dotted_quad(host.addr)
            )
        })?;

        if let Some(reservation) = &host_records.dhcp {
            append(&mut dhcpd, &cfg.paths.dhcpd, render::dhcp_reservation(reservation))?;
            summary.reservations += 1;
        }

        append(&mut named, &cfg.paths.named, render::zone_decl(&host_records.zone_decl))?;
        append(&mut reverse, &cfg.paths.reverse_zone, render::ptr_line(&host_records.ptr))?;

        summary.gateway_present |= host.is_gateway;
        summary.hosts += 1;
    }

    flush(dhcpd, &cfg.paths.dhcpd)?;
    flush(named, &cfg.paths.named)?;
    flush(reverse, &cfg.paths.reverse_zone)?;

    info!(
        "generated {} hosts ({} reservations) for {}",
        summary.hosts,
        summary.reservations,
        cfg.cidr()
    );

    Ok(summary)
}

fn write_file(cfg: &RunConfig, path: &std::path::Path, contents: String) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} for {}", path.display(), cfg.cidr());
    Ok(())
}

fn create(cfg: &RunConfig, path: &std::path::Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    info!("writing {} for {}", path.display(), cfg.cidr());
    Ok(BufWriter::new(file))
}

fn append(out: &mut BufWriter<File>, path: &std::path::Path, text: String) -> Result<()> {
    out.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}

fn flush(mut out: BufWriter<File>, path: &std::path::Path) -> Result<()> {
    out.flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}
