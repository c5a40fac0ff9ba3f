mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use panther_cli::output::OutputFormat;
use panther_lib::DistanceUnit;

use commands::network::NetworkArgs;
use commands::{load_catalog, CommandContext};

#[derive(Parser, Debug)]
#[command(author, version, about = "Panther Cloud Air network tools")]
struct Cli {
    /// Load the airport catalog from a CSV file (overrides PANTHER_CATALOG).
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every airport in the catalog.
    Airports,
    /// Show details for one airport.
    Airport {
        /// Three-letter airport code.
        code: String,
    },
    /// Great-circle distance between two airports.
    Distance {
        origin: String,
        destination: String,
        /// Distance unit: miles or km.
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,
    },
    /// Airport details and distance for a pair of airports.
    RouteInfo { origin: String, destination: String },
    /// Generate the flight network.
    Generate {
        #[command(flatten)]
        network: NetworkArgs,
        /// Save the network snapshot as JSON.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Route options between two airports, shortest first.
    Routes {
        #[command(flatten)]
        network: NetworkArgs,
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Show at most this many options.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check every flight against the minimum distance.
    Audit {
        #[command(flatten)]
        network: NetworkArgs,
        /// Audit a saved snapshot instead of a freshly generated network.
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
    },
    /// Summary statistics for the generated network.
    Stats {
        #[command(flatten)]
        network: NetworkArgs,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let ctx = CommandContext::new(catalog, cli.format);

    match cli.command {
        Command::Airports => commands::airports::handle_list_airports(&ctx),
        Command::Airport { code } => commands::airports::handle_airport(&ctx, &code),
        Command::Distance {
            origin,
            destination,
            unit,
        } => commands::distance::handle_distance(&ctx, &origin, &destination, unit),
        Command::RouteInfo {
            origin,
            destination,
        } => commands::distance::handle_route_info(&ctx, &origin, &destination),
        Command::Generate { network, output } => {
            commands::network::handle_generate(&ctx, &network, output.as_deref())
        }
        Command::Routes {
            network,
            from,
            to,
            limit,
        } => commands::network::handle_routes(&ctx, &network, &from, &to, limit),
        Command::Audit { network, snapshot } => {
            commands::network::handle_audit(&ctx, &network, snapshot.as_deref())
        }
        Command::Stats { network } => commands::network::handle_stats(&ctx, &network),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
