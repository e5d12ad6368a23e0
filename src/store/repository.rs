//! Record Store
//!
//! Owns the aggregate and writes it wholesale to key-value storage after
//! every change. A write that fails leaves the in-memory aggregate untouched.

use chrono::NaiveDate;

use crate::aggregate::HrData;

use super::backend::KeyValueStorage;
use super::seed::seed_data;
use super::StorageResult;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "hrms_data_v1";

/// Suffix of the key that keeps an unreadable value after recovery.
/// Later recoveries append `.1`, `.2`, ... rather than overwrite a backup.
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// How the aggregate was obtained when the store was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored value parsed successfully
    Loaded,
    /// Nothing was stored; the seed dataset was installed
    Seeded,
    /// The stored value could not be parsed and was replaced by the seed
    /// dataset. The unreadable text is kept under `backup_key` when possible.
    Recovered {
        error: String,
        backup_key: Option<String>,
    },
}

impl LoadOutcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }
}

/// Serialize the aggregate to its stored form
pub fn encode(data: &HrData) -> StorageResult<String> {
    Ok(serde_json::to_string(data)?)
}

/// Parse the stored form of the aggregate
pub fn decode(raw: &str) -> StorageResult<HrData> {
    Ok(serde_json::from_str(raw)?)
}

/// First `<key>.corrupt[.N]` key not already holding an earlier backup
fn free_backup_key<S: KeyValueStorage>(storage: &S, key: &str) -> StorageResult<String> {
    let base = format!("{key}{CORRUPT_SUFFIX}");
    if storage.get(&base)?.is_none() {
        return Ok(base);
    }
    let mut n: u32 = 1;
    loop {
        let candidate = format!("{base}.{n}");
        if storage.get(&candidate)?.is_none() {
            return Ok(candidate);
        }
        n += 1;
    }
}

/// The record store
#[derive(Debug)]
pub struct HrStore<S> {
    storage: S,
    key: String,
    data: HrData,
}

impl<S: KeyValueStorage> HrStore<S> {
    /// Load the aggregate from `storage`, seeding it if absent or unreadable.
    ///
    /// `today` dates the seed attendance records.
    pub fn open(
        mut storage: S,
        key: impl Into<String>,
        today: NaiveDate,
    ) -> StorageResult<(Self, LoadOutcome)> {
        let key = key.into();

        let (data, outcome) = match storage.get(&key)? {
            Some(raw) => match decode(&raw) {
                Ok(data) => {
                    tracing::info!(
                        "Loaded {} employees, {} departments from {}",
                        data.employees().len(),
                        data.departments().len(),
                        key
                    );
                    (data, LoadOutcome::Loaded)
                }
                Err(e) => {
                    tracing::warn!("Stored data under {} is unreadable, reseeding: {}", key, e);
                    let backup_key = free_backup_key(&storage, &key)
                        .and_then(|backup| storage.set(&backup, &raw).map(|()| backup));
                    let backup_key = match backup_key {
                        Ok(backup) => Some(backup),
                        Err(backup_err) => {
                            tracing::error!("Could not back up unreadable data: {}", backup_err);
                            None
                        }
                    };
                    let data = seed_data(today)?;
                    storage.set(&key, &encode(&data)?)?;
                    (
                        data,
                        LoadOutcome::Recovered {
                            error: e.to_string(),
                            backup_key,
                        },
                    )
                }
            },
            None => {
                tracing::info!("No data under {}, installing seed dataset", key);
                let data = seed_data(today)?;
                storage.set(&key, &encode(&data)?)?;
                (data, LoadOutcome::Seeded)
            }
        };

        Ok((Self { storage, key, data }, outcome))
    }

    pub fn data(&self) -> &HrData {
        &self.data
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Persist `next` and make it the current aggregate.
    ///
    /// On error the current aggregate is unchanged.
    pub fn commit(&mut self, next: HrData) -> StorageResult<()> {
        let raw = encode(&next)?;
        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::error!("Failed to persist aggregate under {}: {}", self.key, e);
            return Err(e);
        }
        self.data = next;
        Ok(())
    }
}
