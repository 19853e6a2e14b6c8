//! Compose session log.
//!
//! Each line of `events.jsonl` is one [`EventRecord`]: the session id, a
//! timestamp, and a [`ComposeEvent`] tagged by `type`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::RequestMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComposeEvent {
    SessionStarted {
        default_world: String,
        high_intensity_threshold: f64,
    },
    PromptCompiled {
        world: String,
        mode: RequestMode,
        fingerprint: String,
        positive_prompt: String,
        negative_prompt: String,
        references: usize,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<String>,
    },
    VariantSampled {
        index: usize,
        world: String,
        fingerprint: String,
        prompt: String,
    },
    InstructionSampled {
        index: usize,
        world: String,
        instruction: String,
    },
    SessionFinished {
        variants: usize,
        receipt_path: Option<String>,
    },
}

impl ComposeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ComposeEvent::SessionStarted { .. } => "session_started",
            ComposeEvent::PromptCompiled { .. } => "prompt_compiled",
            ComposeEvent::VariantSampled { .. } => "variant_sampled",
            ComposeEvent::InstructionSampled { .. } => "instruction_sampled",
            ComposeEvent::SessionFinished { .. } => "session_finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub session_id: String,
    pub ts: String,
    #[serde(flatten)]
    pub event: ComposeEvent,
}

/// Appends [`EventRecord`]s for one session, creating the parent directory on
/// first write.
#[derive(Debug)]
pub struct EventWriter {
    path: PathBuf,
    session_id: String,
}

impl EventWriter {
    pub fn new(path: impl Into<PathBuf>, session_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            session_id: session_id.into(),
        }
    }

    pub fn for_new_session(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Uuid::new_v4().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn emit(&self, event: ComposeEvent) -> anyhow::Result<EventRecord> {
        let record = EventRecord {
            session_id: self.session_id.clone(),
            ts: now_utc_iso(),
            event,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        Ok(record)
    }
}

/// Reads back every record in an `events.jsonl` file, skipping blank lines.
pub fn read_events(path: &Path) -> anyhow::Result<Vec<EventRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut records = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: invalid event", path.display(), number + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub(crate) fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::DateTime;
    use serde_json::Value;

    use super::*;

    #[test]
    fn records_are_tagged_by_event_type() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("events.jsonl");
        let writer = EventWriter::new(&path, "session-7");

        writer.emit(ComposeEvent::PromptCompiled {
            world: "Historical".to_string(),
            mode: RequestMode::Upscale,
            fingerprint: "abc".to_string(),
            positive_prompt: "A knight.".to_string(),
            negative_prompt: String::new(),
            references: 0,
            warnings: Vec::new(),
        })?;

        let raw: Value = serde_json::from_str(fs::read_to_string(&path)?.trim_end())?;
        assert_eq!(raw["type"], "prompt_compiled");
        assert_eq!(raw["session_id"], "session-7");
        assert_eq!(raw["mode"], "upscale");
        assert!(raw.get("warnings").is_none());
        DateTime::parse_from_rfc3339(raw["ts"].as_str().unwrap_or(""))?;
        Ok(())
    }

    #[test]
    fn read_events_returns_what_was_written() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("nested").join("events.jsonl");
        let writer = EventWriter::for_new_session(&path);

        let started = writer.emit(ComposeEvent::SessionStarted {
            default_world: "Modern Day".to_string(),
            high_intensity_threshold: 0.75,
        })?;
        let finished = writer.emit(ComposeEvent::SessionFinished {
            variants: 3,
            receipt_path: None,
        })?;

        let records = read_events(&path)?;
        assert_eq!(records, vec![started, finished]);
        assert_eq!(records[0].event.kind(), "session_started");
        assert_eq!(records[1].session_id, writer.session_id());
        Ok(())
    }

    #[test]
    fn read_events_names_the_bad_line() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("events.jsonl");
        fs::write(&path, "\n{\"type\": \"nope\"}\n")?;
        let err = read_events(&path).err().map(|err| format!("{err:#}"));
        assert!(err.is_some_and(|message| message.contains(":2: invalid event")));
        Ok(())
    }
}
