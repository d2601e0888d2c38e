use circuitcalc::catalog::{self, RawInput};
use circuitcalc::config::Config;
use circuitcalc::engine::{self, Engine};
use circuitcalc::logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "circuitcalc")]
#[command(about = "Electronics calculators: Ohm's law, RC/LC, reactance, dividers, decibels and more", long_about = None)]
struct Cli {
    /// Log every pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file with display settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all calculators
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show a calculator's fields, units, solve modes and outputs
    Describe {
        /// Calculator slug (e.g. "voltage_divider")
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// Run a calculator
    Calc {
        /// Calculator slug (e.g. "ohms_law")
        slug: String,

        /// Field values such as v=5 i=20mA c=10µF
        #[arg(value_name = "FIELD=VALUE")]
        values: Vec<String>,

        /// Entry of a series/parallel bank, repeatable (e.g. --item 10 --item 4.7)
        #[arg(long = "item", value_name = "VALUE")]
        items: Vec<String>,

        /// Unit for bank entries without their own (e.g. µF)
        #[arg(long)]
        item_unit: Option<String>,

        /// Unit for a field, repeatable (e.g. --unit c=nF)
        #[arg(long = "unit", value_name = "FIELD=UNIT")]
        units: Vec<String>,

        /// Quantity to solve for
        #[arg(long)]
        solve: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => list_calculators(json),
        Commands::Describe { slug, json } => describe_calculator(&slug, json),
        Commands::Calc {
            slug,
            values,
            items,
            item_unit,
            units,
            solve,
            json,
        } => load_config(cli.config.as_ref()).and_then(|config| {
            let raw = build_input(&values, &units, items, item_unit, solve)?;
            run_calculator(&Engine::new(config), &slug, &raw, json)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok(Config::load_from_file(path)?)
        }
        None => Ok(Config::empty()),
    }
}

fn split_assignment(arg: &str) -> Result<(&str, &str), Box<dyn std::error::Error>> {
    arg.split_once('=')
        .filter(|(field, _)| !field.is_empty())
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", arg).into())
}

fn build_input(
    values: &[String],
    units: &[String],
    items: Vec<String>,
    item_unit: Option<String>,
    solve: Option<String>,
) -> Result<RawInput, Box<dyn std::error::Error>> {
    let mut raw = RawInput::new();
    for arg in values {
        let (field, value) = split_assignment(arg)?;
        raw = raw.value(field, value);
    }
    for arg in units {
        let (field, unit) = split_assignment(arg)?;
        raw = raw.unit(field, unit);
    }
    raw.items = items;
    raw.item_unit = item_unit;
    raw.solve_for = solve;
    Ok(raw)
}

fn list_calculators(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
    } else {
        println!("Calculators ({}):", catalog::all().len());
        print!("{}", engine::format_calculator_list(catalog::all()));
    }
    Ok(())
}

fn describe_calculator(slug: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let spec = catalog::lookup(slug)?;
    if json {
        println!("{}", serde_json::to_string_pretty(spec)?);
    } else {
        print!("{}", engine::format_calculator_description(spec));
    }
    Ok(())
}

fn run_calculator(
    calculators: &Engine,
    slug: &str,
    raw: &RawInput,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = calculators.calculate(slug, raw)?;
    if json {
        println!("{}", engine::format_result_json(&result)?);
    } else {
        print!("{}", engine::format_result_text(&result));
    }
    Ok(())
}
