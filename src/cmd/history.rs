//! History command implementation
//!
//! Handles `sizewise history`: the recent recommendations remembered by
//! the recommend command, newest first.

use anyhow::Result;
use console::style;

use crate::error::SizewiseError;
use crate::fmt::{badge_glyph, badge_style, format_confidence};

use super::open_store;

/// Print recent recommendations
///
/// # Errors
///
/// Returns an error only when the history file exists but cannot be read
/// or parsed; an absent history just prints a hint.
pub fn cmd_history(json: bool, data_dir: Option<&str>) -> Result<()> {
    let history = open_store(data_dir)
        .history()
        .map_err(SizewiseError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No recommendations yet. Run 'sizewise recommend' on a saved page.");
        return Ok(());
    }

    for entry in &history {
        let badge = badge_style(entry.confidence).apply_to(format!(
            "{} {}",
            badge_glyph(entry.confidence),
            format_confidence(entry.confidence)
        ));
        println!(
            "{}  {:<8} {}  {}",
            badge,
            style(&entry.size).bold(),
            entry.url,
            style(format!("@{}", entry.timestamp)).dim()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HistoryEntry, LocalStore};
    use tempfile::TempDir;

    #[test]
    fn test_empty_history_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(cmd_history(false, Some(dir.path().to_str().unwrap())).is_ok());
    }

    #[test]
    fn test_history_with_entries_is_ok() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        LocalStore::new(&data)
            .append_history(HistoryEntry {
                size: "M".to_string(),
                confidence: 92,
                url: "shop.example".to_string(),
                timestamp: 1_700_000_000,
            })
            .unwrap();
        assert!(cmd_history(true, Some(data.to_str().unwrap())).is_ok());
    }
}
