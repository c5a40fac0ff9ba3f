//! Point-to-point distance and route details.

use std::io;

use anyhow::{Context, Result};

use panther_cli::output::{
    render_distance, render_route_info, write_json, DistanceSummary, OutputFormat,
};
use panther_lib::{distance_in, route_info, DistanceUnit};

use super::CommandContext;

/// Handle the `distance <A> <B>` subcommand.
pub fn handle_distance(
    ctx: &CommandContext,
    origin: &str,
    destination: &str,
    unit: DistanceUnit,
) -> Result<()> {
    let from = ctx.catalog.resolve(origin)?;
    let to = ctx.catalog.resolve(destination)?;
    let distance = distance_in(&ctx.catalog, &from.code, &to.code, unit)
        .with_context(|| format!("no distance between {} and {}", from.code, to.code))?;

    let summary = DistanceSummary::new(&from.code, &to.code, distance, unit);
    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_distance(&mut out, &summary, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &summary)?,
    }
    Ok(())
}

/// Handle the `route-info <A> <B>` subcommand.
pub fn handle_route_info(ctx: &CommandContext, origin: &str, destination: &str) -> Result<()> {
    let from = ctx.catalog.resolve(origin)?;
    let to = ctx.catalog.resolve(destination)?;
    let info = route_info(&ctx.catalog, &from.code, &to.code)
        .with_context(|| format!("no route info for {} and {}", from.code, to.code))?;

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_route_info(&mut out, &info, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &info)?,
    }
    Ok(())
}
