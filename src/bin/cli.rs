//! source-rcon CLI Client
//!
//! Run one command, or read commands from stdin one per line.

use std::io::{self, BufRead};
use std::process;
use std::time::Duration;

use clap::Parser;
use source_rcon::{Client, Config, PacketMode};
use tracing_subscriber::{fmt, EnvFilter};

/// source-rcon CLI
#[derive(Parser, Debug)]
#[command(name = "rcon-cli")]
#[command(about = "Execute RCON commands on a Source-compatible game server")]
#[command(version)]
struct Args {
    /// Server address (host or host:port; default port 27015)
    #[arg(short, long, default_value = "127.0.0.1:27015")]
    address: String,

    /// RCON password
    #[arg(short, long, env = "RCON_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Dial / read / write timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    /// Disable multi-packet responses (Minecraft, Starbound)
    #[arg(short, long)]
    single_packet: bool,

    /// Command to run; reads commands from stdin when omitted
    command: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> source_rcon::Result<()> {
    let mut builder = Config::builder()
        .address(&args.address)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(password) = args.password {
        builder = builder.password(password);
    }
    if args.single_packet {
        builder = builder.packet_mode(PacketMode::Single);
    }
    let config = builder.build()?;

    tracing::info!("source-rcon CLI v{}", source_rcon::VERSION);
    tracing::info!("Connecting to {}", config.address);

    let mut client = Client::connect(&config)?;

    if !args.command.is_empty() {
        let response = client.exec(&args.command.join(" "))?;
        println!("{}", response);
        return client.close();
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        let response = client.exec(command)?;
        println!("{}", response);
    }

    client.close()
}
