use std::fs;
use std::path::Path;

use tempdir::TempDir;

use netforge_common::config::{OutputPaths, RunConfig};
use netforge_common::network::addr::to_integer;
use netforge_core::writer;

/// A fully deterministic class C run writing into `dir`.
fn config_in(dir: &Path) -> RunConfig {
    RunConfig {
        netmask: "255.255.255.0".parse().unwrap(),
        subnet: to_integer("192.168.100.0").unwrap(),
        gateway: to_integer("192.168.100.1").unwrap(),
        gateway_name: "gateway".to_string(),
        domain: "example.com".to_string(),
        host_base: "vm".to_string(),
        bridge: "virbr0".to_string(),
        nameservers: Vec::new(),
        serial_date: "20260806".to_string(),
        paths: OutputPaths {
            dhcpd: dir.join("dhcpd.conf"),
            named: dir.join("named.conf"),
            reverse_zone: dir.join("reverse.zone"),
            forward_zone_dir: dir.join("zones"),
            network_xml: dir.join("default.xml"),
        },
    }
}

#[test]
fn full_class_c_run_produces_every_artifact() {
    let dir = TempDir::new("netforge").unwrap();
    let cfg = config_in(dir.path());

    let summary = writer::generate(&cfg).expect("generation failed");

    assert_eq!(summary.hosts, 254, "one host per usable address");
    assert_eq!(summary.reservations, 253, "all but the gateway reserved");
    assert!(summary.gateway_present);

    for path in [
        &cfg.paths.dhcpd,
        &cfg.paths.named,
        &cfg.paths.reverse_zone,
        &cfg.paths.network_xml,
    ] {
        assert!(path.exists(), "missing artifact {}", path.display());
    }

    // One forward zone per host, gateway included.
    let zones = fs::read_dir(&cfg.paths.forward_zone_dir).unwrap().count();
    assert_eq!(zones, 254);
}

#[test]
fn artifacts_agree_on_host_identity() {
    let dir = TempDir::new("netforge").unwrap();
    let cfg = config_in(dir.path());
    writer::generate(&cfg).unwrap();

    let dhcpd = fs::read_to_string(&cfg.paths.dhcpd).unwrap();
    let named = fs::read_to_string(&cfg.paths.named).unwrap();
    let reverse = fs::read_to_string(&cfg.paths.reverse_zone).unwrap();

    // .2 is the first regular host: ordinal 0 everywhere.
    assert!(dhcpd.contains(
        "\nhost vm000 {\n\thardware ethernet 66:61:00:00:00:00;\n\tfixed-address 192.168.100.2;\n}\n"
    ));
    assert!(named.contains("zone \"vm000.example.com\""));
    assert!(reverse.contains("2.100\t\tPTR\tvm000.example.com.\n"));

    let zone_file = cfg.paths.forward_zone_dir.join("vm000.example.com.zone");
    let zone = fs::read_to_string(zone_file).unwrap();
    assert!(zone.contains("vm000\tIN\tA\t192.168.100.2"));
    assert!(zone.contains("2026080601"));
}

#[test]
fn gateway_has_dns_but_no_reservation() {
    let dir = TempDir::new("netforge").unwrap();
    let cfg = config_in(dir.path());
    writer::generate(&cfg).unwrap();

    let dhcpd = fs::read_to_string(&cfg.paths.dhcpd).unwrap();
    let named = fs::read_to_string(&cfg.paths.named).unwrap();
    let reverse = fs::read_to_string(&cfg.paths.reverse_zone).unwrap();

    assert!(!dhcpd.contains("host gateway"));
    assert!(named.contains("zone \"gateway.example.com\""));
    assert!(reverse.contains("1.100\t\tPTR\tgateway.example.com.\n"));
    assert!(cfg
        .paths
        .forward_zone_dir
        .join("gateway.example.com.zone")
        .exists());
}

#[test]
fn no_address_is_skipped_or_duplicated() {
    let dir = TempDir::new("netforge").unwrap();
    let cfg = config_in(dir.path());
    writer::generate(&cfg).unwrap();

    let dhcpd = fs::read_to_string(&cfg.paths.dhcpd).unwrap();
    let reverse = fs::read_to_string(&cfg.paths.reverse_zone).unwrap();

    // Anchor each label at its line start so e.g. "4.100" does not also
    // count inside "24.100".
    for last_octet in 1..=254u32 {
        let label = format!("\n{}.100\t\tPTR\t", last_octet);
        assert_eq!(
            reverse.matches(&label).count(),
            1,
            "expected exactly one PTR for .{last_octet}"
        );
    }

    assert_eq!(dhcpd.matches("fixed-address").count(), 253);
    assert_eq!(reverse.matches("PTR").count(), 254);
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new("netforge").unwrap();
    let cfg = config_in(dir.path());

    writer::generate(&cfg).unwrap();
    let first: Vec<Vec<u8>> = artifact_bytes(&cfg);

    writer::generate(&cfg).unwrap();
    let second: Vec<Vec<u8>> = artifact_bytes(&cfg);

    assert_eq!(first, second, "identical input must produce identical bytes");
}

fn artifact_bytes(cfg: &RunConfig) -> Vec<Vec<u8>> {
    let mut all = vec![
        fs::read(&cfg.paths.dhcpd).unwrap(),
        fs::read(&cfg.paths.named).unwrap(),
        fs::read(&cfg.paths.reverse_zone).unwrap(),
        fs::read(&cfg.paths.network_xml).unwrap(),
    ];

    let mut zone_paths: Vec<_> = fs::read_dir(&cfg.paths.forward_zone_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    zone_paths.sort();
    all.extend(zone_paths.iter().map(|p| fs::read(p).unwrap()));

    all
}

#[test]
fn forwarders_are_emitted_only_when_configured() {
    let dir = TempDir::new("netforge").unwrap();
    let mut cfg = config_in(dir.path());
    writer::generate(&cfg).unwrap();

    let named = fs::read_to_string(&cfg.paths.named).unwrap();
    assert!(!named.contains("forwarders"));

    cfg.nameservers = vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()];
    writer::generate(&cfg).unwrap();

    let named = fs::read_to_string(&cfg.paths.named).unwrap();
    assert!(named.contains("forward first;"));
    assert!(named.contains("forwarders { 8.8.8.8; 1.1.1.1; };"));
}

#[test]
fn degenerate_mask_writes_headers_but_no_hosts() {
    let dir = TempDir::new("netforge").unwrap();
    let mut cfg = config_in(dir.path());
    cfg.netmask = "255.255.255.254".parse().unwrap();

    let summary = writer::generate(&cfg).unwrap();

    assert_eq!(summary.hosts, 0);
    assert_eq!(summary.reservations, 0);
    assert!(!summary.gateway_present);

    let dhcpd = fs::read_to_string(&cfg.paths.dhcpd).unwrap();
    assert!(dhcpd.contains("subnet 192.168.100.0 netmask 255.255.255.254"));
    assert!(!dhcpd.contains("fixed-address"));

    assert_eq!(fs::read_dir(&cfg.paths.forward_zone_dir).unwrap().count(), 0);
}

#[test]
fn split_class_c_covers_the_smaller_range() {
    let dir = TempDir::new("netforge").unwrap();
    let mut cfg = config_in(dir.path());
    cfg.netmask = "255.255.255.128".parse().unwrap();

    let summary = writer::generate(&cfg).unwrap();

    // 128 addresses minus network, broadcast and the gateway.
    assert_eq!(summary.hosts, 126);
    assert_eq!(summary.reservations, 125);

    let dhcpd = fs::read_to_string(&cfg.paths.dhcpd).unwrap();
    assert!(dhcpd.contains("option broadcast-address 192.168.100.127;"));
}
