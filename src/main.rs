use anyhow::{Context, Result};
use clap::Parser;
use shopcart::catalog::Catalog;
use shopcart::config::Config;
use shopcart::logging;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shopcart", version, about)]
struct Cli {
    /// Config file (default: ~/.config/shopcart/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load products from a TOML catalog instead of the demo catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,

    /// Print the catalog as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_file = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.list {
        logging::init_stderr_tracing(&config.logging);
    } else {
        let log_path = logging::init_file_tracing(&config.logging)
            .context("Failed to open log file")?;
        tracing::info!(log = %log_path.display(), "Logging initialized");
    }

    // A --catalog flag is relative to the working directory, a configured one
    // to the config file.
    let catalog_path = cli
        .catalog
        .or_else(|| config.catalog.resolve_path(&config_file));
    let catalog = match catalog_path {
        Some(path) => Catalog::load_from(&path)?,
        None => Catalog::seeded(),
    };

    if cli.list {
        return print_catalog(&catalog, cli.json);
    }

    shopcart::ui::run(catalog, config.ui).context("Terminal UI failed")
}

fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(catalog.products())?;
        println!("{}", text);
        return Ok(());
    }

    let name_width = catalog
        .iter()
        .map(|product| product.name.chars().count())
        .max()
        .unwrap_or(0);
    for product in catalog.iter() {
        let sale = product
            .display_original_price()
            .map(|original| format!("  (was {})", original))
            .unwrap_or_default();
        println!(
            "{:>3}  {:<width$}  {:<12}  {:>9}  {:.1}★ ({}){}",
            product.id,
            product.name,
            product.category,
            product.display_price(),
            product.rating,
            product.reviews,
            sale,
            width = name_width
        );
    }
    Ok(())
}
