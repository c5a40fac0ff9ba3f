// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod airports;
pub mod distance;
pub mod network;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use panther_cli::output::OutputFormat;
use panther_cli::terminal::ColorPalette;
use panther_lib::AirportCatalog;

/// Environment variable naming an alternate airport catalog CSV.
pub const CATALOG_ENV: &str = "PANTHER_CATALOG";

/// State shared by every command handler.
pub struct CommandContext {
    pub catalog: AirportCatalog,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl CommandContext {
    pub fn new(catalog: AirportCatalog, format: OutputFormat) -> Self {
        let palette = match format {
            OutputFormat::Text => ColorPalette::detect(),
            OutputFormat::Json => ColorPalette::plain(),
        };
        Self {
            catalog,
            format,
            palette,
        }
    }
}

/// Load the airport catalog.
///
/// Resolution order:
/// 1. `--catalog` argument
/// 2. `PANTHER_CATALOG` environment variable
/// 3. Built-in airport definitions
pub fn load_catalog(explicit: Option<&Path>) -> Result<AirportCatalog> {
    let path = explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CATALOG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    match path {
        Some(path) => AirportCatalog::from_path(&path)
            .with_context(|| format!("failed to load airport catalog from {}", path.display())),
        None => {
            debug!("using built-in airport catalog");
            Ok(AirportCatalog::builtin())
        }
    }
}
