//! Common test utilities

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use hrms::domain::{FixedClock, SequentialGenerator};
use hrms::store::{FileStorage, DEFAULT_STORAGE_KEY};
use hrms::{HrService, HrStore, LoadOutcome};

/// Date every test runs "on"
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

/// Fresh data directory, removed when dropped
pub fn data_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Open the file-backed store under `dir`
pub fn open_store(dir: &TempDir) -> (HrStore<FileStorage>, LoadOutcome) {
    let storage = FileStorage::new(dir.path()).expect("Failed to create storage");
    HrStore::open(storage, DEFAULT_STORAGE_KEY, today()).expect("Failed to open store")
}

/// Service over the file-backed store with a fixed clock and sequential ids
pub fn open_service(dir: &TempDir) -> HrService<FileStorage> {
    let (store, _) = open_store(dir);
    HrService::new(store)
        .with_clock(FixedClock::at(today(), 9, 12))
        .with_id_generator(SequentialGenerator::new("t-"))
}
