//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for scripting
//!
//! Absent input (no profile, no chart, no shared measurements) is never
//! an error; those paths return `None`/empty so callers can fall back to
//! setup prompts. Errors here are real failures: unreadable pages, bad
//! CLI values, a broken store.

use std::path::PathBuf;
use thiserror::Error;

use crate::store::StoreError;

/// sizewise errors with contextual suggestions
#[derive(Error, Debug)]
pub enum SizewiseError {
    /// Saved page file could not be read
    #[error("page file not found: {path}")]
    PageNotFound {
        /// Path to the missing page
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// No profile saved and none supplied
    #[error("no measurement profile available")]
    ProfileMissing,

    /// A supplied measurement is outside plausible bounds
    #[error("implausible {field} measurement: {value} inches")]
    InvalidMeasurement {
        /// Which measurement
        field: String,
        /// The rejected value
        value: f64,
    },

    /// An enum-valued CLI option got an unknown value
    #[error("unknown {field}: '{value}'")]
    InvalidChoice {
        /// Which option
        field: String,
        /// The rejected value
        value: String,
        /// Accepted values
        valid: Vec<String>,
    },

    /// Local store failure
    #[error("store error")]
    Store(#[from] StoreError),
}

impl SizewiseError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sizewise::error::SizewiseError;
    ///
    /// let error = SizewiseError::ProfileMissing;
    /// let suggestion = error.suggestion().expect("has suggestion");
    /// assert!(suggestion.contains("profile set"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PageNotFound { path, .. } => Some(format!(
                "Save the product page as HTML first, then run against {}",
                path.display()
            )),
            Self::ProfileMissing => Some(
                "Create one with: sizewise profile set --chest 39 --waist 33 --hips 40"
                    .to_string(),
            ),
            Self::InvalidMeasurement { field, .. } => Some(format!(
                "Measurements are in inches; a plausible {} is between 10 and 80",
                field
            )),
            Self::InvalidChoice { valid, .. } => {
                Some(format!("Valid values: {}", valid.join(", ")))
            }
            Self::Store(_) => {
                Some("Check permissions on the data directory (see --data-dir)".to_string())
            }
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions so scripts can tell usage mistakes
    /// from missing input from store trouble.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PageNotFound { .. } => 66,      // EX_NOINPUT
            Self::ProfileMissing => 64,           // EX_USAGE
            Self::InvalidMeasurement { .. } => 65, // EX_DATAERR
            Self::InvalidChoice { .. } => 64,     // EX_USAGE
            Self::Store(_) => 74,                 // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to SizewiseError for suggestions
        if let Some(sw_error) = error.downcast_ref::<SizewiseError>() {
            if let Some(suggestion) = sw_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(sw_error) = error.downcast_ref::<SizewiseError>() {
            sw_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_missing_suggests_profile_set() {
        let err = SizewiseError::ProfileMissing;
        let suggestion = err.suggestion().expect("ProfileMissing should have suggestion");
        assert!(suggestion.contains("sizewise profile set"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_invalid_choice_lists_alternatives() {
        let err = SizewiseError::InvalidChoice {
            field: "gender".to_string(),
            value: "unisex".to_string(),
            valid: vec!["mens".to_string(), "womens".to_string()],
        };
        let suggestion = err.suggestion().expect("InvalidChoice should have suggestion");
        assert!(suggestion.contains("mens"));
        assert!(suggestion.contains("womens"));
    }

    #[test]
    fn test_page_not_found_mentions_path() {
        let err = SizewiseError::PageNotFound {
            path: PathBuf::from("saved-page.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.suggestion().unwrap().contains("saved-page.html"));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_all_variants_have_suggestions_and_exit_codes() {
        let errors = vec![
            SizewiseError::PageNotFound {
                path: PathBuf::from("x.html"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            },
            SizewiseError::ProfileMissing,
            SizewiseError::InvalidMeasurement {
                field: "chest".to_string(),
                value: 500.0,
            },
            SizewiseError::InvalidChoice {
                field: "fit".to_string(),
                value: "baggy".to_string(),
                valid: vec!["fitted".to_string()],
            },
        ];

        for err in &errors {
            let suggestion = err.suggestion();
            assert!(suggestion.is_some(), "{:?} should have a suggestion", err);
            assert!(!suggestion.unwrap().is_empty());

            let code = err.exit_code();
            assert!(code > 0 && code < 256, "{:?} exit code out of range", err);
        }
    }

    #[test]
    fn test_formatter_includes_help_line() {
        let err = anyhow::Error::new(SizewiseError::ProfileMissing);
        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("error:"));
        assert!(formatted.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 64);
    }

    #[test]
    fn test_generic_error_exits_one() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
