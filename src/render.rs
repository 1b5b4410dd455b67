//! Report rendering.
//!
//! Text output mirrors the layout of the calculator page: a headline
//! footprint, a breakdown table, a bar chart of the distribution, reduction
//! tips and a closing disclaimer.

use footprint_core::{AnnualEmissionReport, Category, ConsumptionReadings, FloatValue};
use serde::Serialize;
use std::io::{self, Write};

pub const TITLE: &str = "Household Carbon Footprint Calculator";
pub const DESCRIPTION: &str =
    "Calculates your annual carbon footprint from your monthly consumption.";
pub const DISCLAIMER: &str = "This calculator gives an estimate based on average emission \
factors. For a more precise figure, consult specialised sources.";

/// Reduction tips as `(heading, advice)` pairs.
pub const TIPS: [(&str, &str); 5] = [
    (
        "Energy Efficiency",
        "Use LED lighting and appliances with a top efficiency rating.",
    ),
    (
        "Sustainable Transport",
        "Choose walking, cycling or public transport.",
    ),
    (
        "Conscious Consumption",
        "Cut down on wasted water and food.",
    ),
    (
        "Renewable Energy",
        "Consider installing solar panels.",
    ),
    (
        "Recycling",
        "Separate recyclable and organic waste.",
    ),
];

const SOURCE_HEADER: &str = "Source";
const EMISSIONS_HEADER: &str = "Annual Emissions (kg CO₂e)";
const BAR: char = '█';

/// Sections to include in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub chart: bool,
    pub tips: bool,
    pub chart_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chart: true,
            tips: true,
            chart_width: 40,
        }
    }
}

fn label_width() -> usize {
    Category::ALL
        .iter()
        .map(|c| c.label().chars().count())
        .chain(std::iter::once(SOURCE_HEADER.len()))
        .max()
        .unwrap_or(0)
}

/// Headline sentence with the total rounded to two decimals.
pub fn summary(report: &AnnualEmissionReport) -> String {
    format!(
        "Your annual carbon footprint is **{:.2} tonnes of CO₂e**.",
        report.total_tonnes()
    )
}

/// Breakdown table, one row per category in display order.
pub fn table(report: &AnnualEmissionReport) -> String {
    let label_width = label_width();
    let value_width = EMISSIONS_HEADER.chars().count();

    let mut out = format!(
        "{:<label_width$}  {:>value_width$}\n{}  {}\n",
        SOURCE_HEADER,
        EMISSIONS_HEADER,
        "-".repeat(label_width),
        "-".repeat(value_width),
    );
    for (category, emission) in report.iter() {
        out.push_str(&format!(
            "{:<label_width$}  {:>value_width$.2}\n",
            category.label(),
            emission
        ));
    }
    out
}

/// Length of the bar for `value` when `max` spans `width` characters.
fn bar_length(value: FloatValue, max: FloatValue, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    (value / max * width as FloatValue).round() as usize
}

/// Horizontal bar chart keyed by category label.
///
/// Bars are scaled so the largest emission spans `width` characters.
pub fn chart(report: &AnnualEmissionReport, width: usize) -> String {
    let label_width = label_width();
    let max = report.iter().map(|(_, e)| e).fold(0.0, FloatValue::max);

    let mut out = String::new();
    for (category, emission) in report.iter() {
        let bar: String = std::iter::repeat(BAR)
            .take(bar_length(emission, max, width))
            .collect();
        out.push_str(&format!(
            "{:<label_width$} | {bar} {emission:.2}\n",
            category.label()
        ));
    }
    out
}

/// Write the full text report.
pub fn write_text<W: Write>(
    out: &mut W,
    report: &AnnualEmissionReport,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{DESCRIPTION}")?;
    writeln!(out)?;

    writeln!(out, "Results")?;
    writeln!(out, "{}", summary(report))?;
    if let Some((category, _)) = report.largest_source() {
        writeln!(
            out,
            "Largest source: {} ({:.1}% of the total).",
            category.label(),
            report.share(category) * 100.0
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Emissions Breakdown")?;
    write!(out, "{}", table(report))?;

    if options.chart {
        writeln!(out)?;
        writeln!(out, "Emissions Distribution")?;
        write!(out, "{}", chart(report, options.chart_width))?;
    }

    if options.tips {
        writeln!(out)?;
        writeln!(out, "Tips to Reduce Your Carbon Footprint")?;
        for (heading, advice) in TIPS {
            writeln!(out, "- **{heading}**: {advice}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "{DISCLAIMER}")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    readings: &'a ConsumptionReadings,
    #[serde(flatten)]
    report: &'a AnnualEmissionReport,
}

/// Write the readings and report as pretty-printed JSON.
pub fn write_json<W: Write>(
    out: &mut W,
    readings: &ConsumptionReadings,
    report: &AnnualEmissionReport,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { readings, report })?;
    writeln!(out).map_err(serde_json::Error::io)
}
