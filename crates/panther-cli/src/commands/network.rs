//! Network generation, route queries, auditing and statistics.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use panther_cli::output::{
    render_constraint_report, render_network, render_route_options, render_statistics,
    write_json, OutputFormat, RouteOptionsSummary,
};
use panther_lib::{
    compute_statistics, verify_constraints_with, FixedHubs, FlightEdge, FlightIndex,
    FlightNetwork, HubSelector, HubSet, NetworkConfig, NetworkGenerator, NetworkSnapshot,
    US_AIRPORTS,
};

use super::CommandContext;

/// Generation settings shared by the network subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Minimum flight distance in miles.
    #[arg(long, value_name = "MILES")]
    pub min_distance: Option<f64>,

    /// Spoke pairs shorter than this always get a direct flight.
    #[arg(long, value_name = "MILES")]
    pub direct_ceiling: Option<f64>,

    /// Maximum direct/hub distance ratio for long direct flights.
    #[arg(long, value_name = "RATIO")]
    pub efficiency_ratio: Option<f64>,

    /// Comma-separated hub codes, in priority order.
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    pub hubs: Vec<String>,

    /// Include catalogued airports outside the domestic list.
    #[arg(long)]
    pub include_international: bool,
}

impl NetworkArgs {
    /// Thresholds with any command-line overrides applied.
    pub fn config(&self) -> NetworkConfig {
        let mut config = NetworkConfig::default();
        if let Some(miles) = self.min_distance {
            config = config.with_min_distance(miles);
        }
        if let Some(miles) = self.direct_ceiling {
            config = config.with_direct_ceiling(miles);
        }
        if let Some(ratio) = self.efficiency_ratio {
            config = config.with_efficiency_ratio(ratio);
        }
        config
    }

    /// Airports to connect.
    ///
    /// The built-in catalog uses the domestic list, optionally followed by
    /// every other catalogued airport. A catalog loaded from a file uses all
    /// of its airports.
    pub fn airports(&self, ctx: &CommandContext) -> Vec<String> {
        if ctx.catalog.source_path().is_some() {
            return ctx.catalog.codes();
        }
        let mut airports: Vec<String> = US_AIRPORTS.iter().map(|code| code.to_string()).collect();
        if self.include_international {
            airports.extend(
                ctx.catalog
                    .codes()
                    .into_iter()
                    .filter(|code| !US_AIRPORTS.contains(&code.as_str())),
            );
        }
        airports
    }

    /// Hub set chosen by `--hubs`, or the major hubs.
    pub fn hub_set(&self, ctx: &CommandContext, airports: &[String]) -> Result<HubSet> {
        let selector = if self.hubs.is_empty() {
            FixedHubs::default()
        } else {
            FixedHubs::new(self.hubs.iter().map(|code| code.trim().to_string()))
        };
        selector
            .select(&ctx.catalog, airports)
            .context("invalid hub selection")
    }
}

struct GeneratedNetwork {
    airports: Vec<String>,
    hubs: HubSet,
    config: NetworkConfig,
    network: FlightNetwork,
}

fn build_network(ctx: &CommandContext, args: &NetworkArgs) -> Result<GeneratedNetwork> {
    let airports = args.airports(ctx);
    let hubs = args.hub_set(ctx, &airports)?;
    let config = args.config();
    let network = NetworkGenerator::new(&ctx.catalog, hubs.clone())
        .with_config(config)
        .generate(&airports);
    Ok(GeneratedNetwork {
        airports,
        hubs,
        config,
        network,
    })
}

/// Handle the `generate` subcommand.
///
/// Text output lists decision counts and every flight; JSON output is the
/// snapshot document. `--output` additionally saves the snapshot to disk.
pub fn handle_generate(
    ctx: &CommandContext,
    args: &NetworkArgs,
    output: Option<&Path>,
) -> Result<()> {
    let generated = build_network(ctx, args)?;
    let snapshot = NetworkSnapshot::new(
        &generated.network.edges,
        &generated.hubs,
        &generated.airports,
    );

    if let Some(path) = output {
        snapshot
            .save(path)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        info!(path = %path.display(), flights = snapshot.flights.len(), "snapshot written");
    }

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_network(
            &mut out,
            &generated.network.edges,
            &generated.network.report,
            &ctx.palette,
        )?,
        OutputFormat::Json => write_json(&mut out, &snapshot)?,
    }
    Ok(())
}

/// Handle the `routes --from --to` subcommand.
pub fn handle_routes(
    ctx: &CommandContext,
    args: &NetworkArgs,
    from: &str,
    to: &str,
    limit: Option<usize>,
) -> Result<()> {
    let origin = ctx.catalog.resolve(from)?.code.clone();
    let destination = ctx.catalog.resolve(to)?.code.clone();
    let generated = build_network(ctx, args)?;

    let index = FlightIndex::new(&generated.network.edges);
    let mut options = index.route_options(&origin, &destination, &generated.hubs);
    if let Some(limit) = limit {
        options.truncate(limit);
    }

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => {
            render_route_options(&mut out, &origin, &destination, &options, &ctx.palette)?
        }
        OutputFormat::Json => write_json(
            &mut out,
            &RouteOptionsSummary {
                origin: &origin,
                destination: &destination,
                options: &options,
            },
        )?,
    }
    Ok(())
}

/// Handle the `audit` subcommand.
///
/// Audits a saved snapshot when `--snapshot` is given, otherwise a freshly
/// generated network. Fails when any flight breaks the minimum distance.
pub fn handle_audit(
    ctx: &CommandContext,
    args: &NetworkArgs,
    snapshot: Option<&Path>,
) -> Result<()> {
    let min_distance = args.config().min_distance_miles;
    let edges: Vec<FlightEdge> = match snapshot {
        Some(path) => NetworkSnapshot::load(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?
            .edges(),
        None => build_network(ctx, args)?.network.edges,
    };

    let report = verify_constraints_with(&edges, min_distance);
    {
        let mut out = io::stdout().lock();
        match ctx.format {
            OutputFormat::Text => render_constraint_report(&mut out, &report, &ctx.palette)?,
            OutputFormat::Json => write_json(&mut out, &report)?,
        }
    }

    if !report.valid {
        bail!(
            "{} flight(s) below the {:.0}-mile minimum",
            report.violations.len(),
            min_distance
        );
    }
    Ok(())
}

/// Handle the `stats` subcommand.
pub fn handle_stats(ctx: &CommandContext, args: &NetworkArgs) -> Result<()> {
    let generated = build_network(ctx, args)?;
    let stats = compute_statistics(
        &generated.network.edges,
        &generated.hubs,
        &generated.airports,
    );
    info!(
        min_distance = generated.config.min_distance_miles,
        flights = stats.total_flights,
        "computed network statistics"
    );

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_statistics(&mut out, &stats, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &stats.rounded())?,
    }
    Ok(())
}
