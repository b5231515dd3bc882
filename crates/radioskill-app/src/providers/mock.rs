//! In-memory directory for tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::StationDirectory;
use crate::data::types::Station;
use crate::error::{AppError, Result};

/// A directory call, recorded in order
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    Search { name: String, min_bitrate: u32 },
    ByUuid(String),
}

#[derive(Default)]
pub struct MockDirectory {
    by_uuid: HashMap<String, Station>,
    search_results: HashMap<String, Vec<Station>>,
    fail_lookups: bool,
    calls: Mutex<Vec<DirectoryCall>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_station(mut self, id: &str, station: Station) -> Self {
        self.by_uuid.insert(id.to_string(), station);
        self
    }

    pub fn with_search(mut self, name: &str, stations: Vec<Station>) -> Self {
        self.search_results.insert(name.to_string(), stations);
        self
    }

    /// Every lookup fails with a not-found error
    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl StationDirectory for MockDirectory {
    fn name(&self) -> &'static str {
        "Mock Directory"
    }

    fn id(&self) -> &'static str {
        "mock"
    }

    fn search(&self, name: &str, min_bitrate: u32) -> Result<Vec<Station>> {
        self.calls.lock().unwrap().push(DirectoryCall::Search {
            name: name.to_string(),
            min_bitrate,
        });
        if self.fail_lookups {
            return Err(AppError::NotFound(name.to_string()));
        }
        Ok(self.search_results.get(name).cloned().unwrap_or_default())
    }

    fn station_by_uuid(&self, id: &str) -> Result<Option<Station>> {
        self.calls
            .lock()
            .unwrap()
            .push(DirectoryCall::ByUuid(id.to_string()));
        if self.fail_lookups {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(self.by_uuid.get(id).cloned())
    }
}
