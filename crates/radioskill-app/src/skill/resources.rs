//! Localized regex resources
//!
//! Each `<name>.regex` file is loaded through the host once and kept for the
//! lifetime of the skill.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use super::host::SkillHost;
use crate::error::{AppError, Result};

#[derive(Debug, Default)]
pub struct ResourceCache {
    regexes: HashMap<String, Regex>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled regex for logical name `name`, loading `<name>.regex`
    /// through `host` on first use
    pub fn regex<H: SkillHost + ?Sized>(&mut self, name: &str, host: &H) -> Result<&Regex> {
        if !self.regexes.contains_key(name) {
            let file = format!("{name}.regex");
            let text = host
                .load_resource(&file)
                .ok_or_else(|| AppError::Resource(file.clone()))?;
            let re = Regex::new(text.trim())?;
            debug!("Loaded {} as {:?}", file, re.as_str());
            self.regexes.insert(name.to_string(), re);
        }
        self.regexes
            .get(name)
            .ok_or_else(|| AppError::Resource(format!("{name}.regex")))
    }

    /// Number of cached resources
    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}
