use crate::demo::{run_catalog_inspect, run_demo, CatalogInspectArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coachflow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CoachFlow Assessment Service",
    about = "Run and exercise the CoachFlow client assessment service from the command line",
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
    /// Inspect the bundled question catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run a scripted end-to-end assessment in the terminal
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print the question table for one catalog variant
    Inspect(CatalogInspectArgs),
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
        Command::Catalog {
            command: CatalogCommand::Inspect(args),
        } => run_catalog_inspect(args),
        Command::Demo(args) => run_demo(args),
    }
}
