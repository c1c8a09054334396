//! Body shape classification from chest/waist/hip ratios
//!
//! A coarse heuristic used only for styling advice, never for scoring.
//! Requires all three circumferences; rules are evaluated in a fixed
//! priority order and the first match wins, so classification is total
//! and deterministic.

use serde::{Deserialize, Serialize};

use crate::model::UserProfile;

/// Heuristic body shape buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyShape {
    /// Chest and hips close, waist markedly smaller
    Hourglass,
    /// Hips notably larger than chest
    Pear,
    /// Waist close to or larger than hips and chest
    Apple,
    /// Chest larger than hips with a small waist
    Athletic,
    /// Chest much larger than hips
    InvertedTriangle,
    /// Everything roughly the same
    Rectangle,
    /// Missing one of chest/waist/hips
    Unknown,
}

impl BodyShape {
    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyShape::Hourglass => "hourglass",
            BodyShape::Pear => "pear",
            BodyShape::Apple => "apple",
            BodyShape::Athletic => "athletic",
            BodyShape::InvertedTriangle => "inverted-triangle",
            BodyShape::Rectangle => "rectangle",
            BodyShape::Unknown => "unknown",
        }
    }

    /// Styling advice for the shape, when there is something useful to
    /// say.
    pub fn advice(self) -> Option<&'static str> {
        match self {
            BodyShape::Hourglass => Some("Your balanced proportions work well with most fits"),
            BodyShape::Pear => {
                Some("Consider sizing for your hips; the waist may need tailoring")
            }
            BodyShape::Apple => Some("Focus on chest and waist fit for the most flattering look"),
            BodyShape::Athletic => Some("An athletic build may prefer slightly relaxed fits"),
            _ => None,
        }
    }
}

/// Classify a profile's body shape.
///
/// Returns [`BodyShape::Unknown`] unless chest, waist and hips are all
/// present.
///
/// # Examples
///
/// ```
/// use sizewise::model::UserProfile;
/// use sizewise::recommend::{classify_body_shape, BodyShape};
///
/// let profile = UserProfile {
///     chest: Some(36.0),
///     waist: Some(27.0),
///     hips: Some(36.5),
///     ..UserProfile::default()
/// };
/// assert_eq!(classify_body_shape(&profile), BodyShape::Hourglass);
/// ```
pub fn classify_body_shape(profile: &UserProfile) -> BodyShape {
    let (Some(chest), Some(waist), Some(hips)) = (profile.chest, profile.waist, profile.hips)
    else {
        return BodyShape::Unknown;
    };

    let chest_hip = chest / hips;
    let waist_hip = waist / hips;
    let waist_chest = waist / chest;

    if (chest_hip - 1.0).abs() < 0.08 && waist_hip < 0.78 {
        BodyShape::Hourglass
    } else if chest_hip < 0.9 && waist_hip < 0.85 {
        BodyShape::Pear
    } else if waist_hip > 0.85 && waist_chest > 0.85 {
        BodyShape::Apple
    } else if chest_hip > 1.05 && waist_hip < 0.8 {
        BodyShape::Athletic
    } else if chest_hip > 1.1 {
        BodyShape::InvertedTriangle
    } else {
        BodyShape::Rectangle
    }
}
