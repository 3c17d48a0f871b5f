use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use mnflood_rs::attack::{Orchestrator, ScenarioSpec};
use mnflood_rs::emu::{DEFAULT_EXEC_PREFIX, Engine, PlanEngine, ProcessEngine};
use mnflood_rs::net::{ControllerRef, Topology};
use mnflood_rs::topo::chain::{ChainOpts, build_chain};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(
    name = "generate-traffic",
    about = "Run the scripted DDoS flood sequence on the emulated chain topology"
)]
struct Args {
    /// Remote SDN controller address
    #[arg(long, default_value = "192.168.0.101")]
    controller_ip: Ipv4Addr,

    /// Remote SDN controller port
    #[arg(long, default_value_t = 6653)]
    controller_port: u16,

    /// Seed for source/destination selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Scenario JSON overriding the built-in attack sequence
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Seconds to wait between attack bursts
    #[arg(long)]
    cooldown_secs: Option<u64>,

    /// Directory served by the static file server on the first host
    #[arg(long, default_value = "/home/mininet/webserver")]
    webserver_dir: String,

    /// Per-host command prefix template ({host} is substituted)
    #[arg(long, default_value = DEFAULT_EXEC_PREFIX)]
    exec_prefix: String,

    /// Print the command plan without starting the network
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let start = Instant::now();

    if let Err(err) = run(&args) {
        eprintln!("generate-traffic failed: {err}");
        std::process::exit(1);
    }

    println!("{:?}", start.elapsed());
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match &args.scenario {
        Some(path) => serde_json::from_str::<ScenarioSpec>(&std::fs::read_to_string(path)?)?,
        None => ScenarioSpec::default(),
    };

    let mut topo = Topology::default();
    let chain = build_chain(&mut topo, &ChainOpts::default());

    let mut orch = Orchestrator {
        attacks: scenario.attacks(),
        host_count: chain.hosts.len() as u8,
        webserver_dir: args.webserver_dir.clone(),
        ..Orchestrator::default()
    };
    if let Some(secs) = scenario.burst_timeout_secs {
        orch.burst_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = args.cooldown_secs.or(scenario.cooldown_secs) {
        orch.cooldown = Duration::from_secs(secs);
    }
    if args.dry_run {
        orch.cooldown = Duration::ZERO;
    }

    let controller = ControllerRef::new("c0", args.controller_ip, args.controller_port);

    let mut engine: Box<dyn Engine> = if args.dry_run {
        Box::new(PlanEngine)
    } else {
        Box::new(ProcessEngine {
            exec_prefix: args.exec_prefix.clone(),
        })
    };
    let mut net = engine.start(&topo, &controller)?;

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    orch.run(net.as_mut(), &mut rng)?;
    Ok(())
}
