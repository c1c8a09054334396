//! Recommend command implementation
//!
//! Handles the `sizewise recommend` command: full pipeline over a saved
//! page, styled output or JSON, and a history record for later `sizewise
//! history` calls.

use anyhow::{Context, Result};
use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SizewiseError;
use crate::fmt::{badge_glyph, badge_style, format_confidence, SPARKLES};
use crate::model::UserProfile;
use crate::pipeline::SizePipeline;
use crate::recommend::{fit_description, Recommendation};
use crate::score::FitLabel;
use crate::store::HistoryEntry;

use super::detect::load_page;
use super::open_store;

fn load_profile(
    profile_path: Option<&str>,
    data_dir: Option<&str>,
) -> Result<UserProfile> {
    if let Some(path) = profile_path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path))?;
        let profile: UserProfile = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse profile {}", path))?;
        return Ok(profile);
    }

    open_store(data_dir)
        .load_profile()
        .map_err(SizewiseError::from)?
        .ok_or_else(|| SizewiseError::ProfileMissing.into())
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Run the full pipeline over a saved page and print the recommendation
///
/// The stored profile is used unless `--profile` points at a JSON profile
/// file. A fixed `--seed` makes the message selection reproducible. Every
/// successful recommendation is appended to the history.
///
/// # Errors
///
/// Returns an error when the page or profile cannot be loaded. A page or
/// profile that simply yields no recommendation is not an error; a setup
/// hint is printed instead.
pub fn cmd_recommend(
    file: &str,
    hostname: Option<&str>,
    profile_path: Option<&str>,
    seed: Option<u64>,
    json: bool,
    data_dir: Option<&str>,
) -> Result<()> {
    let doc = load_page(file)?;
    let profile = load_profile(profile_path, data_dir)?;
    let hostname = hostname.unwrap_or("");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pipeline = SizePipeline::new();
    let Some(recommendation) = pipeline.recommend(&doc, hostname, &profile, &mut rng) else {
        println!(
            "No recommendation possible: add at least one measurement with \
             'sizewise profile set'."
        );
        return Ok(());
    };

    // Remember it for `sizewise history`; a store hiccup should not eat
    // the recommendation we already computed.
    let url = if hostname.is_empty() {
        file.to_string()
    } else {
        hostname.to_string()
    };
    if let Err(err) = open_store(data_dir).append_history(HistoryEntry {
        size: recommendation.recommended_size.clone(),
        confidence: recommendation.confidence,
        url,
        timestamp: epoch_seconds(),
    }) {
        log::warn!("failed to record history: {}", err);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    print_recommendation(&recommendation);
    Ok(())
}

fn print_recommendation(rec: &Recommendation) {
    let badge = badge_style(rec.confidence).apply_to(format!(
        "{} {}",
        badge_glyph(rec.confidence),
        format_confidence(rec.confidence)
    ));

    println!(
        "{} {}  {}",
        SPARKLES,
        style(&rec.recommended_size).bold().underlined(),
        badge
    );
    println!("{}", rec.message);
    println!();
    println!(
        "source: {}   return risk: {}   body shape: {}",
        rec.source.as_str(),
        rec.return_risk.as_str(),
        rec.body_shape.as_str()
    );
    if let Some(note) = &rec.brand_note {
        println!("brand note: {}", note);
    }

    if !rec.breakdown.is_empty() {
        println!();
        for item in &rec.breakdown {
            let score = item
                .score
                .map(format_confidence)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<8} {:>5}  {:<14} {}",
                item.measurement.name(),
                score,
                item.fit.as_str(),
                if item.fit == FitLabel::NotAvailable {
                    String::new()
                } else {
                    fit_description(item.user_value, item.chart_range).to_string()
                }
            );
        }
    }

    if let Some(alternate) = &rec.alternate {
        println!();
        println!("{}", style(&alternate.message).italic());
    }

    for line in &rec.advice {
        println!("  {}", style(line).dim());
    }
}
