//! Household carbon footprint calculator.
//!
//! This crate is the presentation layer around [`footprint_core`]: it collects
//! monthly readings from command-line flags, an input file or an interactive
//! form, rejects values the model cannot accept, and renders the resulting
//! [`AnnualEmissionReport`] as text or JSON.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
#[cfg(feature = "python")]
pub mod python;
pub mod render;

use crate::cli::{apply_overrides, Args, OutputFormat};
use crate::config::FootprintInput;
use crate::errors::ShellResult;
use crate::render::RenderOptions;
use footprint_core::{AnnualEmissionReport, EmissionModel};
use log::info;
use std::io::{BufRead, Write};

/// Collect readings, calculate the footprint and render it.
///
/// Input is gathered in order of increasing precedence: the input file, the
/// interactive form, then individual flags. Everything is validated before the
/// model is called.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> ShellResult<AnnualEmissionReport> {
    let mut footprint_input = match &args.input {
        Some(path) => FootprintInput::load(path)?,
        None => FootprintInput::default(),
    };

    if args.interactive {
        footprint_input.readings =
            form::prompt_readings(input, output, footprint_input.readings)?;
        writeln!(output)?;
    }
    apply_overrides(&mut footprint_input.readings, args);
    footprint_input.validate()?;

    if footprint_input.readings.is_empty() {
        info!("All readings are zero; the footprint will be zero");
    }

    let model = EmissionModel::from_parameters(footprint_input.factors);
    let report = model.compute_report(&footprint_input.readings);
    info!(
        "Annual footprint: {:.4} t CO2e ({:.2} kg)",
        report.total_tonnes(),
        report.total_kg()
    );

    match args.format {
        OutputFormat::Text => {
            let options = RenderOptions {
                chart: !args.no_chart,
                tips: !args.no_tips,
                chart_width: usize::from(args.chart_width),
            };
            render::write_text(output, &report, &options)?;
        }
        OutputFormat::Json => render::write_json(output, &footprint_input.readings, &report)?,
    }

    Ok(report)
}
