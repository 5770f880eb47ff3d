use crate::commands::{run_badge, BadgeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use discharge_counter::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Discharge Counter",
    about = "Serve and render Korean military service progress badges",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render a badge or its data for a service period to stdout
    Badge(BadgeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Badge(args) => run_badge(args),
    }
}
