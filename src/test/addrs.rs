use crate::net::{HostAddr, MacAddr, host_ip, host_mac};
use std::net::Ipv4Addr;
use std::str::FromStr;

#[test]
fn mac_uses_decimal_index_encoding() {
    assert_eq!(host_mac(1).to_string(), "00:00:00:00:00:01");
    assert_eq!(host_mac(9).to_string(), "00:00:00:00:00:09");
    assert_eq!(host_mac(10).to_string(), "00:00:00:00:00:10");
    assert_eq!(host_mac(18).to_string(), "00:00:00:00:00:18");
}

#[test]
fn mac_display_round_trips_through_parse() {
    let mac = MacAddr::from_str("00:00:00:00:00:12").expect("valid MAC");
    assert_eq!(mac.to_string(), "00:00:00:00:00:12");

    assert!(MacAddr::from_str("00:00:00:00:00").is_err());
    assert!(MacAddr::from_str("00:00:00:00:00:00:00").is_err());
    assert!(MacAddr::from_str("00:00:00:00:00:zz").is_err());
}

#[test]
fn host_addr_displays_with_prefix() {
    let addr = HostAddr::new(Ipv4Addr::new(10, 0, 0, 18), 24);
    assert_eq!(addr.to_string(), "10.0.0.18/24");
    assert_eq!(HostAddr::from_str("10.0.0.18/24").expect("parses"), addr);

    assert!(HostAddr::from_str("10.0.0.18").is_err());
    assert!(HostAddr::from_str("10.0.0.18/33").is_err());
}

#[test]
fn host_ip_maps_index_to_subnet() {
    assert_eq!(host_ip(5), Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(host_ip(18), Ipv4Addr::new(10, 0, 0, 18));
}
