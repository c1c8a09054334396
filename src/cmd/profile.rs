//! Profile command implementations
//!
//! Handles `sizewise profile set` and `sizewise profile show`: the stored
//! measurement profile the recommend command scores against.

use anyhow::Result;
use console::style;

use crate::error::SizewiseError;
use crate::model::{FitPreference, Gender};

use super::open_store;

/// Plausibility bounds for any body measurement, inches.
const MEASUREMENT_BOUNDS: (f64, f64) = (10.0, 80.0);

/// Field updates collected from the CLI flags of `profile set`.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    /// New profile name
    pub name: Option<String>,
    /// New sizing convention
    pub gender: Option<String>,
    /// Chest circumference, inches
    pub chest: Option<f64>,
    /// Waist circumference, inches
    pub waist: Option<f64>,
    /// Hip circumference, inches
    pub hips: Option<f64>,
    /// Inside leg length, inches
    pub inseam: Option<f64>,
    /// Fit taste
    pub fit: Option<String>,
}

fn check_measurement(field: &str, value: f64) -> Result<f64> {
    let (lo, hi) = MEASUREMENT_BOUNDS;
    if !(lo..=hi).contains(&value) {
        return Err(SizewiseError::InvalidMeasurement {
            field: field.to_string(),
            value,
        }
        .into());
    }
    Ok(value)
}

/// Update the stored profile with the supplied fields
///
/// Fields not supplied keep their previous value; the first `set` call
/// starts from the default profile. Measurements are validated against
/// plausibility bounds before anything is written.
///
/// # Errors
///
/// Returns an error for implausible measurements, unknown gender/fit
/// values, or a store failure.
pub fn cmd_profile_set(update: ProfileUpdate, data_dir: Option<&str>) -> Result<()> {
    let store = open_store(data_dir);
    let mut profile = store
        .load_profile()
        .map_err(SizewiseError::from)?
        .unwrap_or_default();

    if let Some(name) = update.name {
        profile.name = name;
    }
    if let Some(gender) = update.gender.as_deref() {
        profile.gender = Gender::parse_str(gender).ok_or_else(|| SizewiseError::InvalidChoice {
            field: "gender".to_string(),
            value: gender.to_string(),
            valid: vec!["mens".to_string(), "womens".to_string()],
        })?;
    }
    if let Some(fit) = update.fit.as_deref() {
        profile.fit_preference =
            FitPreference::parse_str(fit).ok_or_else(|| SizewiseError::InvalidChoice {
                field: "fit".to_string(),
                value: fit.to_string(),
                valid: vec![
                    "fitted".to_string(),
                    "regular".to_string(),
                    "relaxed".to_string(),
                ],
            })?;
    }
    if let Some(chest) = update.chest {
        profile.chest = Some(check_measurement("chest", chest)?);
    }
    if let Some(waist) = update.waist {
        profile.waist = Some(check_measurement("waist", waist)?);
    }
    if let Some(hips) = update.hips {
        profile.hips = Some(check_measurement("hips", hips)?);
    }
    if let Some(inseam) = update.inseam {
        profile.inseam = Some(check_measurement("inseam", inseam)?);
    }

    store.save_profile(&profile).map_err(SizewiseError::from)?;
    println!("Profile '{}' saved.", style(&profile.name).bold());
    Ok(())
}

/// Print the stored profile
///
/// A missing profile prints a setup hint rather than failing: nothing is
/// wrong, there is just nothing to show yet.
pub fn cmd_profile_show(json: bool, data_dir: Option<&str>) -> Result<()> {
    let Some(profile) = open_store(data_dir)
        .load_profile()
        .map_err(SizewiseError::from)?
    else {
        println!("No profile saved yet. Create one with 'sizewise profile set'.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("profile: {}", style(&profile.name).bold());
    println!("gender:  {}", profile.gender.as_str());
    println!("fit:     {}", profile.fit_preference.as_str());
    let field = |v: Option<f64>| v.map(|v| format!("{} in", v)).unwrap_or_else(|| "-".into());
    println!("chest:   {}", field(profile.chest));
    println!("waist:   {}", field(profile.waist));
    println!("hips:    {}", field(profile.hips));
    println!("inseam:  {}", field(profile.inseam));
    Ok(())
}
