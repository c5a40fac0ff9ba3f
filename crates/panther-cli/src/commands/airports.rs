//! Airport catalog listing and lookup.

use std::io;

use anyhow::Result;

use panther_cli::output::{render_airport, render_airports, write_json, OutputFormat};
use panther_lib::AirportInfo;

use super::CommandContext;

/// Handle the `airports` subcommand.
pub fn handle_list_airports(ctx: &CommandContext) -> Result<()> {
    let airports = ctx.catalog.list_all();
    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_airports(&mut out, &airports, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &airports)?,
    }
    Ok(())
}

/// Handle the `airport <CODE>` subcommand. Unknown codes fail with
/// suggestions for near matches.
pub fn handle_airport(ctx: &CommandContext, code: &str) -> Result<()> {
    let info = AirportInfo::from(ctx.catalog.resolve(code)?);
    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => render_airport(&mut out, &info, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &info)?,
    }
    Ok(())
}
