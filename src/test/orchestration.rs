use crate::attack::{Orchestrator, random_host_ip};
use crate::emu::{PlanEntry, PlanNet, RunningNet};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::time::Duration;

fn plan_net() -> PlanNet {
    PlanNet::new((1..=18).map(|k| format!("h{k}")).collect())
}

#[test]
fn random_destinations_stay_in_the_host_pool() {
    let mut rng = StdRng::seed_from_u64(7);
    let allowed: HashSet<Ipv4Addr> = (1..=18u8).map(|n| Ipv4Addr::new(10, 0, 0, n)).collect();
    for _ in 0..1000 {
        assert!(allowed.contains(&random_host_ip(&mut rng, 18)));
    }
}

#[test]
fn scripted_sequence_issues_four_floods_in_order() {
    let mut net = plan_net();
    let orch = Orchestrator {
        cooldown: Duration::ZERO,
        ..Orchestrator::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    orch.run(&mut net, &mut rng).expect("plan run succeeds");

    // the backgrounded web server on h1 comes first
    assert_eq!(net.entries[0].host, "h1");
    assert!(net.entries[0].background);
    assert!(net.entries[0].command.contains("SimpleHTTPServer 80"));

    let floods: Vec<&PlanEntry> = net.entries.iter().filter(|e| !e.background).collect();
    assert_eq!(floods.len(), 4);
    assert!(
        floods[0]
            .command
            .starts_with("timeout 20s hping3 -1 -V -d 120 -w 64 -p 80 --rand-source --flood 10.0.0."),
        "{}",
        floods[0].command
    );
    assert!(
        floods[1]
            .command
            .starts_with("timeout 20s hping3 -2 -V -d 120 -w 64 --rand-source --flood 10.0.0."),
        "{}",
        floods[1].command
    );
    assert_eq!(
        floods[2].command,
        "timeout 20s hping3 -S -V -d 120 -w 64 -p 80 --rand-source --flood 10.0.0.1"
    );
    assert!(
        floods[3]
            .command
            .starts_with("timeout 20s hping3 -1 -V -d 120 -w 64 --flood -a 10.0.0."),
        "{}",
        floods[3].command
    );

    // LAND spoofs the source address to equal the destination
    let dst = floods[3].command.rsplit(' ').next().expect("has dst");
    assert!(floods[3].command.ends_with(&format!("-a {dst} {dst}")));

    // sources are real hosts
    let hosts = net.host_names();
    for entry in &net.entries {
        assert!(hosts.contains(&entry.host), "unknown source {}", entry.host);
    }

    assert!(net.stopped());
    assert_eq!(net.stats().issued, 5);
    assert_eq!(net.stats().failed, 0);
}

#[test]
fn empty_host_list_still_reaches_stopped() {
    let mut net = PlanNet::new(Vec::new());
    let orch = Orchestrator {
        cooldown: Duration::ZERO,
        ..Orchestrator::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    orch.run(&mut net, &mut rng).expect("stops cleanly");
    assert!(net.stopped());
    assert!(net.entries.is_empty());
}

#[test]
fn single_host_pool_sources_every_flood_from_it() {
    let mut net = PlanNet::new(vec!["h1".to_string()]);
    let orch = Orchestrator {
        cooldown: Duration::ZERO,
        ..Orchestrator::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    orch.run(&mut net, &mut rng).expect("completes");
    assert!(net.stopped());
    // web server plus four floods, all on the only host
    assert_eq!(net.entries.len(), 5);
    assert!(net.entries.iter().all(|e| e.host == "h1"));
}
