use crate::attack::{AttackProfile, FloodMode, ScenarioSpec, Target, default_attacks};

#[test]
fn minimal_scenario_falls_back_to_builtin_sequence() {
    let spec: ScenarioSpec =
        serde_json::from_str(r#"{ "schema_version": 1 }"#).expect("parses minimal scenario");
    assert_eq!(spec.cooldown_secs, None);
    assert_eq!(spec.burst_timeout_secs, None);

    let attacks = spec.attacks();
    assert_eq!(attacks.len(), 4);
    assert_eq!(attacks, default_attacks());
}

#[test]
fn scenario_overrides_attacks_and_timing() {
    let spec: ScenarioSpec = serde_json::from_str(
        r#"
        {
            "schema_version": 1,
            "cooldown_secs": 5,
            "burst_timeout_secs": 2,
            "attacks": [
                { "name": "UDP only", "mode": "udp", "spoof": "random" }
            ]
        }
        "#,
    )
    .expect("parses scenario");

    assert_eq!(spec.cooldown_secs, Some(5));
    assert_eq!(spec.burst_timeout_secs, Some(2));

    let attacks = spec.attacks();
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].mode, FloodMode::Udp);
    // packet parameters default to the capture-script values
    assert_eq!(attacks[0].data_bytes, 120);
    assert_eq!(attacks[0].win_bytes, 64);
    assert_eq!(attacks[0].dest_port, None);
    assert_eq!(attacks[0].target, Target::RandomHost);
}

#[test]
fn fixed_target_round_trips_through_json() {
    let syn = default_attacks().remove(2);
    let json = serde_json::to_string(&syn).expect("serializes");
    let back: AttackProfile = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, syn);
    assert_eq!(
        back.target,
        Target::Fixed {
            ip: "10.0.0.1".parse().expect("valid IP")
        }
    );
}

#[test]
fn explicit_target_kinds_parse() {
    let profile: AttackProfile = serde_json::from_str(
        r#"
        {
            "name": "syn",
            "mode": "syn",
            "spoof": "random",
            "dest_port": 80,
            "target": { "kind": "fixed", "ip": "10.0.0.3" }
        }
        "#,
    )
    .expect("parses fixed target");
    assert_eq!(
        profile.target,
        Target::Fixed {
            ip: "10.0.0.3".parse().expect("valid IP")
        }
    );

    let profile: AttackProfile = serde_json::from_str(
        r#"
        {
            "name": "icmp",
            "mode": "icmp",
            "spoof": "random",
            "target": { "kind": "random_host" }
        }
        "#,
    )
    .expect("parses random target");
    assert_eq!(profile.target, Target::RandomHost);
}
