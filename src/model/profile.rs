//! User profile: body measurements and fit preferences

use serde::{Deserialize, Serialize};

use super::chart::Measurement;

/// Sizing convention the user shops in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's sizing
    Mens,
    /// Women's sizing
    Womens,
}

impl Gender {
    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Mens => "mens",
            Gender::Womens => "womens",
        }
    }

    /// Parse a CLI/user string ("mens", "men", "womens", "women").
    pub fn parse_str(s: &str) -> Option<Gender> {
        match s.to_lowercase().as_str() {
            "mens" | "men" | "m" => Some(Gender::Mens),
            "womens" | "women" | "w" => Some(Gender::Womens),
            _ => None,
        }
    }
}

/// How the user likes clothes to sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    /// Trim and tailored
    Fitted,
    /// True to measurements
    Regular,
    /// Loose and comfortable
    Relaxed,
}

impl FitPreference {
    /// Offset in inches applied to chest/waist/hips before scoring.
    /// Inseam is excluded; leg length does not change with fit taste.
    pub fn offset(self) -> f64 {
        match self {
            FitPreference::Fitted => -0.5,
            FitPreference::Regular => 0.0,
            FitPreference::Relaxed => 1.0,
        }
    }

    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            FitPreference::Fitted => "fitted",
            FitPreference::Regular => "regular",
            FitPreference::Relaxed => "relaxed",
        }
    }

    /// Parse a CLI/user string.
    pub fn parse_str(s: &str) -> Option<FitPreference> {
        match s.to_lowercase().as_str() {
            "fitted" | "fit" | "slim" => Some(FitPreference::Fitted),
            "regular" => Some(FitPreference::Regular),
            "relaxed" | "loose" => Some(FitPreference::Relaxed),
            _ => None,
        }
    }
}

/// A user's body measurements and preferences.
///
/// All measurements are optional and the scorer works with whatever
/// subset is present, but a profile with none of them cannot be scored
/// at all.
///
/// # Examples
///
/// ```
/// use sizewise::model::{Measurement, UserProfile};
///
/// let profile = UserProfile {
///     chest: Some(39.0),
///     waist: Some(33.0),
///     ..UserProfile::default()
/// };
/// assert_eq!(profile.measurement(Measurement::Chest), Some(39.0));
/// assert_eq!(profile.measurement(Measurement::Hips), None);
/// assert!(profile.has_any_measurement());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile name, for multi-profile support
    pub name: String,
    /// Sizing convention
    pub gender: Gender,
    /// Chest circumference, inches
    pub chest: Option<f64>,
    /// Waist circumference, inches
    pub waist: Option<f64>,
    /// Hip circumference, inches
    pub hips: Option<f64>,
    /// Inside leg length, inches
    pub inseam: Option<f64>,
    /// Fit taste
    pub fit_preference: FitPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            gender: Gender::Mens,
            chest: None,
            waist: None,
            hips: None,
            inseam: None,
            fit_preference: FitPreference::Regular,
        }
    }
}

impl UserProfile {
    /// Value for one canonical measurement, if recorded.
    pub fn measurement(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Chest => self.chest,
            Measurement::Waist => self.waist,
            Measurement::Hips => self.hips,
            Measurement::Inseam => self.inseam,
        }
    }

    /// Whether at least one scorable measurement is present.
    pub fn has_any_measurement(&self) -> bool {
        Measurement::ALL.iter().any(|m| self.measurement(*m).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_offsets() {
        assert_eq!(FitPreference::Fitted.offset(), -0.5);
        assert_eq!(FitPreference::Regular.offset(), 0.0);
        assert_eq!(FitPreference::Relaxed.offset(), 1.0);
    }

    #[test]
    fn test_gender_parse_str_accepts_variants() {
        assert_eq!(Gender::parse_str("mens"), Some(Gender::Mens));
        assert_eq!(Gender::parse_str("Women"), Some(Gender::Womens));
        assert_eq!(Gender::parse_str("unisex"), None);
    }

    #[test]
    fn test_fit_preference_parse_str_accepts_variants() {
        assert_eq!(FitPreference::parse_str("FITTED"), Some(FitPreference::Fitted));
        assert_eq!(FitPreference::parse_str("loose"), Some(FitPreference::Relaxed));
        assert_eq!(FitPreference::parse_str("oversize"), None);
    }

    #[test]
    fn test_empty_profile_has_no_measurements() {
        let profile = UserProfile::default();
        assert!(!profile.has_any_measurement());
    }

    #[test]
    fn test_profile_round_trips_as_json() {
        let profile = UserProfile {
            name: "me".to_string(),
            gender: Gender::Womens,
            chest: Some(36.0),
            waist: Some(29.0),
            hips: Some(39.0),
            inseam: None,
            fit_preference: FitPreference::Relaxed,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
