//! Output rendering for CLI commands.
//!
//! Every renderer writes to an `io::Write` so commands print to stdout while
//! tests capture into a buffer. JSON output is pretty-printed and carries no
//! color codes.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use panther_lib::{
    AirportInfo, AirportRecord, ConstraintReport, DistanceUnit, FlightEdge, GenerationReport,
    NetworkStatistics, RouteInfo, RouteOption, RouteType,
};

use crate::terminal::{format_miles, format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Distance answer for the `distance` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceSummary {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub unit: String,
}

impl DistanceSummary {
    pub fn new(origin: &str, destination: &str, distance: f64, unit: DistanceUnit) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance,
            unit: unit.to_string(),
        }
    }
}

/// Route options for the `routes` command.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOptionsSummary<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub options: &'a [RouteOption],
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn render_airports<W: Write>(
    out: &mut W,
    airports: &[AirportRecord],
    palette: &ColorPalette,
) -> io::Result<()> {
    if airports.is_empty() {
        return writeln!(out, "No airports in catalog.");
    }

    writeln!(out, "Airports ({}):", airports.len())?;
    writeln!(out, "{:<5} {:<32} {}", "Code", "Location", "Name")?;
    for airport in airports {
        writeln!(
            out,
            "{}{:<5}{} {:<32} {}{}{}",
            palette.white_bold,
            airport.code,
            palette.reset,
            airport.location_label(),
            palette.gray,
            airport.name,
            palette.reset
        )?;
    }
    Ok(())
}

pub fn render_airport<W: Write>(
    out: &mut W,
    info: &AirportInfo,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{} {}",
        palette.white_bold, info.iata, palette.reset, info.name
    )?;
    if info.state.is_empty() {
        writeln!(out, "  City:        {}", info.city)?;
    } else {
        writeln!(out, "  City:        {}, {}", info.city, info.state)?;
    }
    if !info.metro_area.is_empty() {
        writeln!(out, "  Metro area:  {}", info.metro_area)?;
    }
    writeln!(
        out,
        "  Coordinates: {:.4}, {:.4}",
        info.latitude, info.longitude
    )
}

pub fn render_distance<W: Write>(
    out: &mut W,
    summary: &DistanceSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{} -> {}: {}{}{} {}",
        summary.origin,
        summary.destination,
        palette.yellow,
        format_miles(summary.distance),
        palette.reset,
        summary.unit
    )
}

pub fn render_route_info<W: Write>(
    out: &mut W,
    info: &RouteInfo,
    palette: &ColorPalette,
) -> io::Result<()> {
    for (label, endpoint) in [("Origin", &info.origin), ("Destination", &info.destination)] {
        writeln!(
            out,
            "{:<12} {}{}{} {} ({}{})",
            format!("{label}:"),
            palette.white_bold,
            endpoint.iata,
            palette.reset,
            endpoint.name,
            endpoint.city,
            if endpoint.state.is_empty() {
                String::new()
            } else {
                format!(", {}", endpoint.state)
            }
        )?;
    }
    writeln!(
        out,
        "{:<12} {}{}{} miles / {} km",
        "Distance:",
        palette.yellow,
        format_miles(info.distance_miles),
        palette.reset,
        format_miles(info.distance_kilometers)
    )
}

/// Generated network: decision counts, then one line per flight.
pub fn render_network<W: Write>(
    out: &mut W,
    edges: &[FlightEdge],
    report: &GenerationReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(out, "Generated {} flights", format_with_separators(edges.len() as u64))?;
    writeln!(out, "  Hub-to-hub pairs:     {}", report.hub_pairs)?;
    writeln!(out, "  Spoke-to-hub pairs:   {}", report.spoke_hub_pairs)?;
    writeln!(out, "  Direct spoke pairs:   {}", report.direct_pairs)?;
    writeln!(out, "  Rejected directs:     {}", report.rejected_direct_pairs)?;
    writeln!(out, "  Below minimum:        {}", report.below_minimum_pairs)?;
    if report.unresolved_pairs > 0 {
        writeln!(
            out,
            "  {}Unresolved pairs:     {}{}",
            palette.red, report.unresolved_pairs, palette.reset
        )?;
    }
    writeln!(out)?;
    for edge in edges {
        writeln!(
            out,
            "{} -> {} {}{:>10}{} miles",
            edge.origin,
            edge.destination,
            palette.gray,
            format_miles(edge.distance_miles),
            palette.reset
        )?;
    }
    Ok(())
}

pub fn render_route_options<W: Write>(
    out: &mut W,
    origin: &str,
    destination: &str,
    options: &[RouteOption],
    palette: &ColorPalette,
) -> io::Result<()> {
    if options.is_empty() {
        return writeln!(out, "No routes found from {origin} to {destination}.");
    }

    writeln!(out, "Routes from {origin} to {destination}:")?;
    for (rank, option) in options.iter().enumerate() {
        let (color, kind) = match option.route_type {
            RouteType::Direct => (palette.green, "direct".to_string()),
            RouteType::HubConnection => (
                palette.cyan,
                format!("via {}", option.hub_used.as_deref().unwrap_or("?")),
            ),
        };
        writeln!(
            out,
            "{:>2}. {:<17} {}{:<10}{} {}{:>10}{} miles, {} stop{}",
            rank + 1,
            option.path_label(),
            color,
            kind,
            palette.reset,
            palette.yellow,
            format_miles(option.total_distance_miles),
            palette.reset,
            option.stop_count,
            if option.stop_count == 1 { "" } else { "s" }
        )?;
    }
    Ok(())
}

pub fn render_constraint_report<W: Write>(
    out: &mut W,
    report: &ConstraintReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    if report.valid {
        return writeln!(
            out,
            "{}All flights meet the minimum distance.{}",
            palette.green, palette.reset
        );
    }

    writeln!(
        out,
        "{}{} flight(s) below the minimum distance:{}",
        palette.red,
        report.violations.len(),
        palette.reset
    )?;
    for description in report.descriptions() {
        writeln!(out, "  {description}")?;
    }
    Ok(())
}

pub fn render_statistics<W: Write>(
    out: &mut W,
    stats: &NetworkStatistics,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(out, "{}Network statistics{}", palette.white_bold, palette.reset)?;
    writeln!(out, "  Total flights:     {}", format_with_separators(stats.total_flights as u64))?;
    writeln!(out, "  Unique routes:     {}", format_with_separators(stats.unique_routes as u64))?;
    writeln!(out, "  Direct flights:    {}", format_with_separators(stats.direct_flights as u64))?;
    writeln!(out, "  Hub connections:   {}", format_with_separators(stats.hub_connections as u64))?;
    writeln!(out, "  Total distance:    {} miles", format_miles(stats.total_network_distance))?;
    writeln!(out, "  Average distance:  {} miles", format_miles(stats.average_flight_distance))?;
    writeln!(
        out,
        "  Hubs:              {}{}{}",
        palette.cyan,
        stats.hubs.join(", "),
        palette.reset
    )?;
    writeln!(out, "  Airports served:   {}", stats.airports_served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panther_lib::{
        compute_statistics, find_route_options, generate_default_network, verify_constraints,
        AirportCatalog, HubSet, US_AIRPORTS,
    };

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn airports_listing_has_header_and_rows() {
        let catalog = AirportCatalog::builtin();
        let text = render(|out| render_airports(out, &catalog.list_all(), &ColorPalette::plain()));
        assert!(text.starts_with("Airports (31):"));
        assert!(text.contains("ATL   Atlanta, GA"));
        assert!(text.contains("CDG   Paris, France"));
    }

    #[test]
    fn plain_palette_emits_no_escape_codes() {
        let catalog = AirportCatalog::builtin();
        let edges = generate_default_network(&catalog);
        let options = find_route_options("LAX", "JFK", &edges, &HubSet::major());
        let text = render(|out| {
            render_route_options(out, "LAX", "JFK", &options, &ColorPalette::plain())
        });
        assert!(!text.contains('\x1b'));
        assert!(text.contains(" 1. LAX -> ORD -> JFK"));
        assert!(text.contains("via ORD"));
        assert!(text.contains("2,479.29 miles, 1 stop"));
    }

    #[test]
    fn empty_route_list_says_so() {
        let text = render(|out| render_route_options(out, "LAX", "XYZ", &[], &ColorPalette::plain()));
        assert_eq!(text, "No routes found from LAX to XYZ.\n");
    }

    #[test]
    fn statistics_use_separators() {
        let catalog = AirportCatalog::builtin();
        let edges = generate_default_network(&catalog);
        let stats = compute_statistics(&edges, &HubSet::major(), &US_AIRPORTS);
        let text = render(|out| render_statistics(out, &stats, &ColorPalette::plain()));
        assert!(text.contains("Total flights:     488"));
        assert!(text.contains("Unique routes:     244"));
        assert!(text.contains("Hubs:              ATL, DFW, DEN, ORD"));
    }

    #[test]
    fn violations_are_listed() {
        let edges = vec![FlightEdge::direct("JFK", "LGA", 10.63)];
        let report = verify_constraints(&edges);
        let text = render(|out| render_constraint_report(out, &report, &ColorPalette::plain()));
        assert!(text.contains("1 flight(s) below the minimum distance:"));
        assert!(text.contains("  JFK -> LGA: 10.63 miles"));
    }

    #[test]
    fn distance_json_has_named_fields() {
        let summary = DistanceSummary::new("ATL", "JFK", 759.27, DistanceUnit::Miles);
        let text = render(|out| write_json(out, &summary));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["origin"], "ATL");
        assert_eq!(value["unit"], "miles");
        assert_eq!(value["distance"], 759.27);
    }
}
