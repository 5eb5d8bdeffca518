//! Command handlers

use std::path::{Path, PathBuf};

use bidcalc_app::app::estimate_service::apply_catalog;
use bidcalc_app::catalog_loader::{catalog_with_overrides, load_catalog_csv};
use bidcalc_app::config::Config;
use bidcalc_app::constants::default_catalog;
use bidcalc_app::{compute_breakdown, estimate_fingerprint, load_estimate};
use bidcalc_domain::model::Estimate;
use bidcalc_types::{OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_breakdown, output_catalog, output_fingerprint, output_totals};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Totals { file, catalog } => {
            let estimate = priced_estimate(&file, catalog.or_else(|| config.catalog_csv.clone()))?;
            output_totals(output_format, &compute_breakdown(&estimate).totals)
        }

        Commands::Breakdown { file, catalog } => {
            let estimate = priced_estimate(&file, catalog.or_else(|| config.catalog_csv.clone()))?;
            output_breakdown(output_format, &compute_breakdown(&estimate))
        }

        Commands::Catalog { csv } => {
            let catalog = match csv.or_else(|| config.catalog_csv.clone()) {
                Some(path) => catalog_with_overrides(load_catalog_csv(&path)?),
                None => default_catalog(),
            };
            output_catalog(output_format, &catalog)
        }

        Commands::Fingerprint { file } => {
            let estimate = load_estimate(&file)?;
            output_fingerprint(output_format, &estimate_fingerprint(&estimate)?)
        }

        Commands::Config {
            show,
            init,
            set_output,
            set_catalog_csv,
        } => cmd_config(config, show, init, set_output, set_catalog_csv),
    }
}

/// Load an estimate and overlay catalog overrides when a CSV is given
fn priced_estimate(file: &Path, catalog_csv: Option<PathBuf>) -> Result<Estimate> {
    let estimate = load_estimate(file)?;
    match catalog_csv {
        Some(path) => {
            debug!(path = %path.display(), "using catalog overrides");
            let overrides = load_catalog_csv(&path)?;
            Ok(apply_catalog(estimate, &overrides))
        }
        None => Ok(estimate),
    }
}

fn cmd_config(
    mut config: Config,
    show: bool,
    init: bool,
    set_output: Option<OutputFormat>,
    set_catalog_csv: Option<PathBuf>,
) -> Result<()> {
    if init {
        let config = Config::default();
        config.save()?;
        println!("Configuration written to {}", Config::config_path()?.display());
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_catalog_csv {
        config.catalog_csv = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
