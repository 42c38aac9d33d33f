//! JSONL event log.
//!
//! One JSON object per line, appended to a file. The first write error
//! disables the sink; the session keeps running without a log.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_sandbox_core::WorldSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LogEvent {
    #[serde(rename_all = "camelCase")]
    Start {
        seed: u32,
        width: u32,
        height: u32,
        density: u32,
        ruleset: String,
        mode: String,
    },
    #[serde(rename_all = "camelCase")]
    Generated { snapshot: WorldSnapshot },
    #[serde(rename_all = "camelCase")]
    Action {
        frame: u64,
        action: String,
        outcome: String,
    },
    #[serde(rename_all = "camelCase")]
    Quit { frame: u64 },
}

#[derive(Debug, Default)]
pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
    written: u64,
}

impl EventLog {
    /// A log that drops every event.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(4096),
            written: 0,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Events written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn record(&mut self, event: &LogEvent) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
            return;
        }
        self.written += 1;
    }

    pub fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            if file.flush().is_err() {
                self.file = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_sandbox_core::{Ruleset, WorldState};

    #[test]
    fn disabled_log_drops_events() {
        let mut log = EventLog::disabled();
        log.record(&LogEvent::Quit { frame: 3 });
        assert!(!log.is_enabled());
        assert_eq!(log.written(), 0);
    }

    #[test]
    fn events_are_appended_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let world = WorldState::new(16, 12, 7, Ruleset::classic());
        let mut log = EventLog::open(&path).unwrap();
        log.record(&LogEvent::Generated {
            snapshot: world.snapshot(),
        });
        log.record(&LogEvent::Action {
            frame: 4,
            action: "moveUp".to_string(),
            outcome: "blocked".to_string(),
        });
        log.record(&LogEvent::Quit { frame: 9 });
        log.flush();
        assert_eq!(log.written(), 3);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "generated");
        assert_eq!(first["snapshot"]["seed"], 7);

        let action: LogEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(
            action,
            LogEvent::Action {
                frame: 4,
                action: "moveUp".to_string(),
                outcome: "blocked".to_string(),
            }
        );
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("events.jsonl");
        assert!(EventLog::open(path).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_error_disables_the_log() {
        let mut log = EventLog::open("/dev/full").unwrap();
        assert!(log.is_enabled());

        log.record(&LogEvent::Quit { frame: 1 });
        assert!(!log.is_enabled());
        assert_eq!(log.written(), 0);

        log.record(&LogEvent::Quit { frame: 2 });
        log.flush();
        assert_eq!(log.written(), 0);
    }
}
