//! Local key-value persistence: profile, history, chart cache
//!
//! Thin JSON-file collaborators for state that outlives a single run. All
//! writes go through a temp file and an atomic rename so a crash can
//! never leave a half-written store behind. A missing file reads as
//! empty, never as an error.
//!
//! Timestamps are plain seconds-since-epoch supplied by the caller, which
//! keeps freshness logic deterministic under test.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::model::{SizeChart, UserProfile};

const PROFILE_FILE: &str = "profile.json";
const HISTORY_FILE: &str = "history.json";
const CHART_CACHE_FILE: &str = "charts.json";

/// Retention cap for the recommendation history.
pub const HISTORY_LIMIT: usize = 50;

/// Cached charts older than this are ignored on read.
pub const CHART_FRESHNESS_SECS: u64 = 7 * 24 * 60 * 60;

/// Errors from the local store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure with context
    #[error("I/O error: {context}")]
    Io {
        /// What the store was doing
        context: String,
        #[source]
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A store file exists but does not parse
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the unparseable file
        path: PathBuf,
        #[source]
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A value could not be serialized
    #[error("failed to serialize {what}")]
    Serialize {
        /// What was being written
        what: String,
        #[source]
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// One remembered recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Recommended size label
    pub size: String,
    /// Aggregate confidence at the time
    pub confidence: u8,
    /// Page the recommendation was made for
    pub url: String,
    /// Seconds since epoch
    pub timestamp: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CachedChart {
    chart: SizeChart,
    cached_at: u64,
}

/// File-backed store rooted at a data directory.
///
/// # Examples
///
/// ```
/// use sizewise::model::UserProfile;
/// use sizewise::store::LocalStore;
/// use tempfile::TempDir;
///
/// let dir = TempDir::new().unwrap();
/// let store = LocalStore::new(dir.path());
///
/// assert!(store.load_profile().unwrap().is_none());
///
/// let profile = UserProfile { chest: Some(39.0), ..UserProfile::default() };
/// store.save_profile(&profile).unwrap();
/// assert_eq!(store.load_profile().unwrap(), Some(profile));
/// ```
#[derive(Debug)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(file);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                })
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| StoreError::Parse { path, source: e })
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            context: format!("creating {}", self.dir.display()),
            source: e,
        })?;

        let contents = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
            what: file.to_string(),
            source: e,
        })?;

        let path = self.dir.join(file);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::Io {
            context: format!("creating temp file in {}", self.dir.display()),
            source: e,
        })?;
        tmp.write_all(contents.as_bytes()).map_err(|e| StoreError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })?;
        tmp.persist(&path).map_err(|e| StoreError::Io {
            context: format!("persisting {}", path.display()),
            source: e.error,
        })?;
        Ok(())
    }

    /// Load the saved profile; `Ok(None)` when none exists yet.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read_json(PROFILE_FILE)
    }

    /// Save the profile.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write_json(PROFILE_FILE, profile)
    }

    /// The recommendation history, newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.read_json(HISTORY_FILE)?.unwrap_or_default())
    }

    /// Prepend an entry to the history, dropping the oldest past
    /// [`HISTORY_LIMIT`].
    pub fn append_history(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut history = self.history()?;
        history.insert(0, entry);
        history.truncate(HISTORY_LIMIT);
        self.write_json(HISTORY_FILE, &history)
    }

    /// Cache a detected chart for a hostname at time `now` (seconds since
    /// epoch).
    pub fn cache_chart(
        &self,
        hostname: &str,
        chart: &SizeChart,
        now: u64,
    ) -> Result<(), StoreError> {
        let mut cache: HashMap<String, CachedChart> =
            self.read_json(CHART_CACHE_FILE)?.unwrap_or_default();
        cache.insert(
            hostname.to_string(),
            CachedChart {
                chart: chart.clone(),
                cached_at: now,
            },
        );
        self.write_json(CHART_CACHE_FILE, &cache)
    }

    /// Fetch a cached chart for a hostname if it is still inside the
    /// freshness window at time `now`.
    pub fn cached_chart(&self, hostname: &str, now: u64) -> Result<Option<SizeChart>, StoreError> {
        let cache: HashMap<String, CachedChart> =
            match self.read_json(CHART_CACHE_FILE)? {
                Some(c) => c,
                None => return Ok(None),
            };
        Ok(cache
            .get(hostname)
            .filter(|c| now.saturating_sub(c.cached_at) < CHART_FRESHNESS_SECS)
            .map(|c| c.chart.clone()))
    }
}
