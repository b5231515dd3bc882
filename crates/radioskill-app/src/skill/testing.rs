//! Recording host for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::host::SkillHost;
use super::types::NowPlaying;
use crate::error::{AppError, Result};

/// A host interaction, recorded in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Speak {
        key: String,
        data: Vec<(String, String)>,
        wait: bool,
    },
    Play {
        uri: String,
        mime_type: String,
    },
    Status(Option<NowPlaying>),
}

#[derive(Default)]
pub struct RecordingHost {
    resources: HashMap<String, String>,
    fail_play: bool,
    calls: RefCell<Vec<HostCall>>,
    loads: Cell<usize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host carrying the built-in en-us resources
    pub fn english() -> Self {
        let mut host = Self::new();
        for name in ["radio.regex", "play.radio.dialog", "could.not.play.dialog"] {
            if let Some(text) = super::locale::embedded_resource("en-us", name) {
                host = host.with_resource(name, text);
            }
        }
        host
    }

    pub fn with_resource(mut self, name: &str, text: &str) -> Self {
        self.resources.insert(name.to_string(), text.to_string());
        self
    }

    /// `play` fails
    pub fn failing_play(mut self) -> Self {
        self.fail_play = true;
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn spoken_keys(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Speak { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn resource_loads(&self) -> usize {
        self.loads.get()
    }
}

impl SkillHost for RecordingHost {
    fn speak_dialog(&self, key: &str, data: &[(&str, &str)], wait: bool) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Speak {
            key: key.to_string(),
            data: data
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            wait,
        });
        Ok(())
    }

    fn play(&self, uri: &str, mime_type: &str) -> Result<()> {
        if self.fail_play {
            return Err(AppError::Host("audio service unavailable".to_string()));
        }
        self.calls.borrow_mut().push(HostCall::Play {
            uri: uri.to_string(),
            mime_type: mime_type.to_string(),
        });
        Ok(())
    }

    fn send_status(&self, status: Option<&NowPlaying>) {
        self.calls
            .borrow_mut()
            .push(HostCall::Status(status.cloned()));
    }

    fn load_resource(&self, name: &str) -> Option<String> {
        self.loads.set(self.loads.get() + 1);
        self.resources.get(name).cloned()
    }
}
