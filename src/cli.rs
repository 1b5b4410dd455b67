//! Command-line arguments.

use clap::{Parser, ValueEnum};
use footprint_core::{Category, ConsumptionReadings, FloatValue};
use std::path::PathBuf;

/// Output format for the calculated report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary, table, chart and tips
    Text,
    /// Readings and report as JSON
    Json,
}

/// Household carbon footprint calculator
#[derive(Parser, Debug)]
#[command(name = "footprint", version)]
#[command(about = "Estimate a household's annual carbon footprint from monthly consumption")]
pub struct Args {
    /// Electricity consumption (kWh/month)
    #[arg(long, value_name = "KWH", value_parser = parse_reading)]
    pub electricity: Option<FloatValue>,

    /// Natural gas consumption (m³/month)
    #[arg(long, value_name = "M3", value_parser = parse_reading)]
    pub natural_gas: Option<FloatValue>,

    /// LPG consumption (kg/month)
    #[arg(long, value_name = "KG", value_parser = parse_reading)]
    pub lpg: Option<FloatValue>,

    /// Gasoline consumption (litres/month)
    #[arg(long, value_name = "L", value_parser = parse_reading)]
    pub gasoline: Option<FloatValue>,

    /// Diesel consumption (litres/month)
    #[arg(long, value_name = "L", value_parser = parse_reading)]
    pub diesel: Option<FloatValue>,

    /// Organic waste (kg/month)
    #[arg(long, value_name = "KG", value_parser = parse_reading)]
    pub organic_waste: Option<FloatValue>,

    /// Water consumption (m³/month)
    #[arg(long, value_name = "M3", value_parser = parse_reading)]
    pub water: Option<FloatValue>,

    /// TOML or JSON file with a `readings` table and optional `factors` table
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Prompt for each reading on stdin, offering values from `--input` as defaults
    #[arg(long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not draw the bar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Do not print the reduction tips
    #[arg(long)]
    pub no_tips: bool,

    /// Width of the longest bar in the chart, in characters
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..=200))]
    pub chart_width: u16,

    /// Increase logging verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Readings given directly as flags, in display order.
    pub fn reading_overrides(&self) -> Vec<(Category, FloatValue)> {
        [
            (Category::Electricity, self.electricity),
            (Category::NaturalGas, self.natural_gas),
            (Category::Lpg, self.lpg),
            (Category::Gasoline, self.gasoline),
            (Category::Diesel, self.diesel),
            (Category::OrganicWaste, self.organic_waste),
            (Category::Water, self.water),
        ]
        .into_iter()
        .filter_map(|(c, v)| v.map(|v| (c, v)))
        .collect()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse a monthly reading, rejecting anything the model cannot accept.
pub fn parse_reading(s: &str) -> Result<FloatValue, String> {
    let value: FloatValue = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{s}' must be a finite number of at least 0"));
    }
    Ok(value)
}

/// Apply flag overrides on top of readings collected elsewhere.
pub fn apply_overrides(readings: &mut ConsumptionReadings, args: &Args) {
    readings.extend(args.reading_overrides());
}
