use clap::{Parser, Subcommand};

/// CLI command
#[derive(Debug, Clone)]
pub enum Command {
    On,
    Off,
    Status { json: bool },
}

/// Parsed command line: which outlet, and what to do with it
#[derive(Debug, Clone)]
pub struct Invocation {
    pub power_outlet: String,
    pub command: Command,
}

/// PDU outlet power control tool
#[derive(Parser, Debug)]
#[command(name = "pductl")]
#[command(about = "Control power distribution unit outlets", long_about = None)]
struct Cli {
    /// Power outlet URI, e.g. "aten:192.168.0.10:3" or "file:/tmp/outlet"
    #[arg(long, value_name = "URI")]
    power_outlet: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn the outlet on
    On,
    /// Turn the outlet off
    Off,
    /// Show outlet power status
    Status {
        /// Output status as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse command-line arguments and return the Invocation
pub fn parse() -> Invocation {
    invocation_from_cli(Cli::parse())
}

/// Convert internal Cli struct to public Invocation
fn invocation_from_cli(cli: Cli) -> Invocation {
    let command = match cli.command {
        Commands::On => Command::On,
        Commands::Off => Command::Off,
        Commands::Status { json } => Command::Status { json },
    };
    Invocation {
        power_outlet: cli.power_outlet,
        command,
    }
}
