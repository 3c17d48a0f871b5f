use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

use clap::Parser;
use mnflood_rs::emu::{DEFAULT_EXEC_PREFIX, Engine, ProcessEngine};
use mnflood_rs::net::{ControllerRef, Topology};
use mnflood_rs::topo::chain::{ChainOpts, build_chain};

#[derive(Debug, Parser)]
#[command(
    name = "lab-cli",
    about = "Start the emulated chain topology and run an interactive host shell"
)]
struct Args {
    /// Remote SDN controller address
    #[arg(long, default_value = "192.168.0.101")]
    controller_ip: Ipv4Addr,

    /// Remote SDN controller port
    #[arg(long, default_value_t = 6653)]
    controller_port: u16,

    /// Per-host command prefix template ({host} is substituted)
    #[arg(long, default_value = DEFAULT_EXEC_PREFIX)]
    exec_prefix: String,
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
    if let Err(err) = run(&args) {
        eprintln!("lab-cli failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut topo = Topology::default();
    build_chain(&mut topo, &ChainOpts::default());

    let controller = ControllerRef::new("c0", args.controller_ip, args.controller_port);
    let mut engine = ProcessEngine {
        exec_prefix: args.exec_prefix.clone(),
    };
    let mut net = engine.start(&topo, &controller)?;

    println!("hosts: {}", net.host_names().join(" "));
    println!("usage: <host> <command>, or exit");

    let stdin = io::stdin();
    loop {
        print!("mnflood> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        let Some((host, command)) = line.split_once(' ') else {
            eprintln!("usage: <host> <command>");
            continue;
        };
        match net.run(host, command) {
            Ok(report) => {
                if let Some(code) = report.exit_code {
                    if code != 0 {
                        eprintln!("exit {code}");
                    }
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    net.stop()?;
    Ok(())
}
