//! wood-calc - CLI for the lumber quantity and price calculator.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wood_calc::config::{LICENSE_REGISTRY_URL, THICKNESS_OPTIONS};
use wood_calc::license::{registry_source, render_block_page};
use wood_calc::{load_calculator, CalcError, FormEvent, LicenseGate, PageMetadata, WoodType};

/// Compute board footage (CFT) and price for a lumber order.
#[derive(Parser, Debug)]
#[command(name = "wood-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Form snapshot JSON (wood type, thickness, price, quantities, running feet)
    #[arg(short, long)]
    form: Option<PathBuf>,

    /// Table layout JSON (defaults to the built-in 6", 5", 2x3 and RFT tables)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Clear all inputs and restore defaults before applying other changes
    #[arg(long)]
    reset: bool,

    /// Wood type: sale or purchase (resets the price to 470)
    #[arg(short, long)]
    wood_type: Option<WoodType>,

    /// Base thickness in inches
    #[arg(short, long)]
    thickness: Option<String>,

    /// Unit price per CFT
    #[arg(short, long)]
    price: Option<String>,

    /// Row input as ID=VALUE (quantity or running feet), repeatable
    #[arg(short, long = "set", value_name = "ID=VALUE")]
    set: Vec<String>,

    /// Write the CSV export (file or directory, default wood_calc.csv)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "wood_calc.csv")]
    export: Option<PathBuf>,

    /// Print the print view to stdout
    #[arg(long)]
    print: bool,

    /// Output the computed sheet as JSON
    #[arg(long)]
    debug: bool,

    /// Page metadata JSON; runs the license check first
    #[arg(long)]
    license: Option<PathBuf>,

    /// License registry URL or file
    #[arg(long, default_value = LICENSE_REGISTRY_URL)]
    registry: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // License gate runs before anything is shown
    if let Some(path) = &args.license {
        let meta = PageMetadata::from_file(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let gate = LicenseGate::new(registry_source(&args.registry));
        if let Err(err) = gate.check(&meta) {
            if let CalcError::LicenseBlocked { reason } = &err {
                println!("{}", render_block_page(*reason));
            }
            error!("{}", err);
            anyhow::bail!("License check failed");
        }
    }

    let mut calc = load_calculator(args.form.as_deref(), args.layout.as_deref())
        .context("Failed to load the sheet")?;

    if args.reset {
        calc.reset();
    }

    if let Some(wood_type) = args.wood_type {
        calc.apply(FormEvent::WoodType(wood_type))?;
    }

    if let Some(thickness) = args.thickness {
        if !THICKNESS_OPTIONS.contains(&thickness.as_str()) {
            warn!(
                "Thickness {} is not one of the standard options ({})",
                thickness,
                THICKNESS_OPTIONS.join(", ")
            );
        }
        calc.apply(FormEvent::Thickness(thickness))?;
    }

    if let Some(price) = args.price {
        calc.apply(FormEvent::Price(price))?;
    }

    for entry in &args.set {
        let (id, value) = entry
            .split_once('=')
            .with_context(|| format!("Expected ID=VALUE, got '{}'", entry))?;
        calc.set_input(id.trim(), value.trim())
            .with_context(|| format!("Failed to set {}", id))?;
    }

    let sheet = calc.sheet();
    info!(
        "{} of {} row(s) filled, grand CFT {}",
        sheet.visible_row_count(),
        calc.layout().row_count(),
        sheet.grand.cft_display
    );

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(sheet)?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(target) = &args.export {
        let path = calc
            .write_csv(target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        info!("Generated: {}", path.display());
    }

    if args.print {
        print!("{}", calc.print_view(chrono::Local::now().year()));
    } else if args.export.is_none() {
        println!("Total Qty: {}", sheet.grand.quantity_display);
        println!("Total CFT: {}", sheet.grand.cft_display);
        println!("Total Price: {}", sheet.grand.price_display);
    }

    Ok(())
}
