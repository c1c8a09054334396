//! Detect command implementation
//!
//! Handles the `sizewise detect` command which runs chart detection over a
//! saved product page and prints what was found.

use anyhow::Result;
use console::style;
use scraper::Html;
use std::path::Path;

use crate::detect::ChartDetector;
use crate::error::SizewiseError;
use crate::fmt::{CHART, MAGNIFIER, TAPE};
use crate::model::{Gender, Measurement, SizeChart};

/// Read and parse a saved page from disk.
pub(crate) fn load_page(file: &str) -> Result<Html> {
    let path = Path::new(file);
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SizewiseError::PageNotFound {
                path: path.to_path_buf(),
                source: e,
            }
            .into())
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to read page {}", path.display())))
        }
    };
    Ok(Html::parse_document(&contents))
}

pub(crate) fn parse_gender(value: &str) -> Result<Gender> {
    Gender::parse_str(value).ok_or_else(|| {
        SizewiseError::InvalidChoice {
            field: "gender".to_string(),
            value: value.to_string(),
            valid: vec!["mens".to_string(), "womens".to_string()],
        }
        .into()
    })
}

/// Run chart detection over a saved page and print the result
///
/// When a hostname is given, the detected chart is cached for it so later
/// runs can reuse the result within the freshness window.
///
/// # Errors
///
/// Returns an error when the page file cannot be read or the gender value
/// is unknown. Detection itself never fails; a page without any chart
/// yields the estimated fallback.
pub fn cmd_detect(
    file: &str,
    hostname: Option<&str>,
    gender: &str,
    json: bool,
    data_dir: Option<&str>,
) -> Result<()> {
    let doc = load_page(file)?;
    let gender = parse_gender(gender)?;
    let hostname = hostname.unwrap_or("");

    let chart = ChartDetector::new().detect(&doc, hostname, gender);

    // Remember on-page charts per shop; the estimated fallback is not
    // worth caching.
    if !hostname.is_empty() && chart.source != crate::model::ChartSource::Estimated {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        if let Err(err) = super::open_store(data_dir).cache_chart(hostname, &chart, now) {
            log::warn!("failed to cache chart for {}: {}", hostname, err);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    print_chart(&chart);
    Ok(())
}

fn print_chart(chart: &SizeChart) {
    println!("{} {} Size Chart Detection", TAPE, style("sizewise").bold());
    println!();
    println!(
        "{} source: {}  confidence: {}",
        MAGNIFIER,
        style(chart.source.as_str()).cyan(),
        style(chart.confidence.as_str()).cyan()
    );
    if let Some(garment) = chart.garment {
        println!("   garment: {}", garment.as_str());
    }
    if let Some(guide) = &chart.size_guide_text {
        println!("   size guide link: {:?}", guide);
    }
    println!();

    if !chart.entries.is_empty() {
        println!("{} {} sizes:", CHART, chart.entries.len());
        println!(
            "   {:<8} {:>10} {:>10} {:>10} {:>10}",
            "size", "chest", "waist", "hips", "inseam"
        );
        for entry in &chart.entries {
            let cell = |m: Measurement| {
                entry
                    .range(m)
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string())
            };
            println!(
                "   {:<8} {:>10} {:>10} {:>10} {:>10}",
                entry.size,
                cell(Measurement::Chest),
                cell(Measurement::Waist),
                cell(Measurement::Hips),
                cell(Measurement::Inseam),
            );
        }
    }

    if !chart.size_options.is_empty() {
        println!("{} offered sizes:", CHART);
        for option in &chart.size_options {
            let availability = if option.available {
                style("in stock").green()
            } else {
                style("unavailable").red()
            };
            println!("   {:<8} {}", option.label, availability);
        }
    }

    if chart.entries.is_empty() && chart.size_options.is_empty() {
        println!("No size data found on this page.");
    }
}
