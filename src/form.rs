//! Interactive input form.
//!
//! Prompts for each category in display order. An empty answer keeps the
//! current value, and invalid or negative answers are asked again. End of input
//! keeps the remaining values as they are.

use crate::cli::parse_reading;
use crate::errors::ShellResult;
use footprint_core::{Category, ConsumptionReadings};
use log::debug;
use std::io::{BufRead, Write};

/// Fill in `readings` from answers read on `input`, writing prompts to `output`.
pub fn prompt_readings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut readings: ConsumptionReadings,
) -> ShellResult<ConsumptionReadings> {
    writeln!(output, "Enter your monthly data")?;

    'categories: for category in Category::ALL {
        loop {
            write!(
                output,
                "{} ({}/month) [{}]: ",
                category.label(),
                category.unit(),
                readings.get(category)
            )?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break 'categories;
            }

            let answer = line.trim();
            if answer.is_empty() {
                break;
            }
            match parse_reading(answer) {
                Ok(value) => {
                    debug!("Form set {} to {}", category, value);
                    readings.set(category, value);
                    break;
                }
                Err(message) => writeln!(output, "  {message}")?,
            }
        }
    }

    Ok(readings)
}
