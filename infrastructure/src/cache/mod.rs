//! TTL cache decorator for air quality providers
//!
//! Entries live in memory for the life of the process and, when a cache
//! directory is set, as JSON files so later runs can reuse them.

use aqi_application::{AirQualityProvider, ProviderError};
use aqi_domain::{City, DataSource, PollutantReading};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

const CACHE_DIR_NAME: &str = "aqi-dashboard";

/// `$XDG_CACHE_HOME/aqi-dashboard` (or the platform equivalent).
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Current(&'static str),
    Series(&'static str, usize),
}

impl CacheKey {
    fn file_name(&self) -> String {
        match self {
            CacheKey::Current(city) => format!("current-{}.json", city.to_lowercase()),
            CacheKey::Series(city, points) => {
                format!("series-{}-{}.json", city.to_lowercase(), points)
            }
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    readings: Vec<PollutantReading>,
}

/// On-disk form of a cache entry; wall-clock stamped so it survives restarts.
#[derive(Debug, Serialize, Deserialize)]
struct DiskEntry {
    stored_at: DateTime<Utc>,
    readings: Vec<PollutantReading>,
}

/// Wraps a provider and remembers successful answers for `ttl`.
///
/// Errors are never cached. A zero TTL turns the cache off entirely.
pub struct CachedProvider<P> {
    inner: P,
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    dir: Option<PathBuf>,
}

impl<P: AirQualityProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
            dir: None,
        }
    }

    /// Also persist entries as JSON files under `dir`.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    async fn lookup(&self, key: &CacheKey) -> Option<Vec<PollutantReading>> {
        if self.ttl.is_zero() {
            return None;
        }
        if let Some(readings) = self.lookup_memory(key) {
            return Some(readings);
        }
        self.lookup_disk(key).await
    }

    fn lookup_memory(&self, key: &CacheKey) -> Option<Vec<PollutantReading>> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!("Cache hit for {:?}", key);
                Some(entry.readings.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    async fn lookup_disk(&self, key: &CacheKey) -> Option<Vec<PollutantReading>> {
        let path = self.dir.as_ref()?.join(key.file_name());
        let bytes = tokio::fs::read(&path).await.ok()?;

        let entry: DiskEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Ignoring unreadable cache file {}: {}", path.display(), e);
                return None;
            }
        };

        // A timestamp in the future fails the conversion and counts as stale.
        let age = Utc::now()
            .signed_duration_since(entry.stored_at)
            .to_std()
            .ok()?;
        if age >= self.ttl {
            return None;
        }

        debug!("Disk cache hit for {:?}", key);
        Some(entry.readings)
    }

    async fn store(&self, key: CacheKey, readings: &[PollutantReading]) {
        if self.ttl.is_zero() {
            return;
        }

        if let Some(dir) = &self.dir
            && let Err(e) = write_disk_entry(dir, &key, readings).await
        {
            warn!("Failed to write cache entry to {}: {}", dir.display(), e);
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                CacheEntry {
                    stored_at: Instant::now(),
                    readings: readings.to_vec(),
                },
            );
        }
    }
}

async fn write_disk_entry(
    dir: &Path,
    key: &CacheKey,
    readings: &[PollutantReading],
) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let entry = DiskEntry {
        stored_at: Utc::now(),
        readings: readings.to_vec(),
    };
    let json = serde_json::to_vec(&entry).map_err(std::io::Error::other)?;
    tokio::fs::write(dir.join(key.file_name()), json).await
}

#[async_trait]
impl<P: AirQualityProvider> AirQualityProvider for CachedProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn source(&self) -> DataSource {
        self.inner.source()
    }

    async fn current(&self, city: &City) -> Result<PollutantReading, ProviderError> {
        let key = CacheKey::Current(city.name);
        if let Some(reading) = self.lookup(&key).await.and_then(|r| r.into_iter().next()) {
            return Ok(reading);
        }

        let reading = self.inner.current(city).await?;
        self.store(key, std::slice::from_ref(&reading)).await;
        Ok(reading)
    }

    async fn series(
        &self,
        city: &City,
        points: usize,
    ) -> Result<Vec<PollutantReading>, ProviderError> {
        let key = CacheKey::Series(city.name, points);
        if let Some(readings) = self.lookup(&key).await {
            return Ok(readings);
        }

        let readings = self.inner.series(city, points).await?;
        self.store(key, &readings).await;
        Ok(readings)
    }
}
