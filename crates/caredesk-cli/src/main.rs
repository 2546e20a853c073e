use std::path::PathBuf;

use caredesk::{Config, Desk};
use caredesk_cli::commands::{
    ConfigCommand, IntakeCommand, InventoryCommand, RotationCommand, StatsCommand, TriageCommand,
};
use caredesk_cli::error::CliResult;
use caredesk_cli::output::OutputFormat;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "caredesk")]
#[command(about = "Caredesk - hospital front desk records")]
#[command(version)]
pub struct Cli {
    #[clap(long, short, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[clap(long, short = 'd', global = true, help = "Path to data directory")]
    pub data_dir: Option<PathBuf>,

    #[clap(long, short = 'c', global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Patient intake queue")]
    Intake(IntakeCommand),

    #[clap(about = "Medical supply stack")]
    Inventory(InventoryCommand),

    #[clap(about = "Emergency triage")]
    Triage(TriageCommand),

    #[clap(about = "Ambulance duty rotation")]
    Rotation(RotationCommand),

    #[clap(about = "Show record counts per role")]
    Stats(StatsCommand),

    #[clap(about = "Configuration commands")]
    Config(ConfigCommand),
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    let open_desk = || Desk::open(&config);

    match &cli.command {
        Command::Intake(cmd) => cmd.execute(&mut open_desk()?.0, format),
        Command::Inventory(cmd) => cmd.execute(&mut open_desk()?.0, format),
        Command::Triage(cmd) => cmd.execute(&mut open_desk()?.0, format),
        Command::Rotation(cmd) => cmd.execute(&mut open_desk()?.0, format),
        Command::Stats(cmd) => {
            let (desk, report) = open_desk()?;
            cmd.execute(&desk, &report, format)
        }
        Command::Config(cmd) => cmd.execute(&config, cli.config.as_deref(), format),
    }
}
