//! Serializable event scripts.
//!
//! An [`EventScript`] is a named list of [`EventRecord`]s stored as TOML or JSON.
//! Records hold the raw integer form of every enum and flag field, so a script
//! written against the frozen numeric values reads back bit-exact.
//!
//! Scripts are how tests, demos and tools describe events without going
//! through the builders by hand; [`EventScript::build`] still validates every
//! record through them.
//!
//! # Example
//! ```toml
//! name = "two finger tap"
//!
//! [[events]]
//! type = "motion"
//! device_id = 3
//! source = 0x14          # TOUCHSCREEN | TOUCHSCREEN_MT
//! action = 0             # DOWN
//! event_time = 1000
//! pointers = [{ id = 0, x = 10.0, y = 20.0, pressure = 1.0 }]
//!
//! [[events]]
//! type = "motion"
//! device_id = 3
//! action = 0x0105        # POINTER_DOWN, slot 1
//! event_time = 2000
//! down_time = 1000
//! pointers = [
//!     { id = 0, x = 10.0, y = 20.0 },
//!     { id = 1, x = 50.0, y = 60.0 },
//! ]
//! ```

use crate::device::DeviceClass;
use crate::error::{EventError, FixtureError, Result};
use crate::event::InputEvent;
use crate::key::{KeyAction, KeyEvent, KeyFlags};
use crate::meta::MetaState;
use crate::motion::{ActionCode, EdgeFlags, MotionEvent, PointerCoords};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named, ordered list of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

/// One serialized event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    Key(KeyRecord),
    Motion(MotionRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    #[serde(default)]
    pub device_id: i32,
    /// Device class bits.
    #[serde(default)]
    pub source: i32,
    pub action: i32,
    #[serde(default)]
    pub flags: i32,
    pub key_code: i32,
    #[serde(default)]
    pub scan_code: i32,
    #[serde(default)]
    pub meta_state: i32,
    #[serde(default)]
    pub repeat_count: i32,
    #[serde(default)]
    pub down_time: i64,
    #[serde(default)]
    pub event_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionRecord {
    #[serde(default)]
    pub device_id: i32,
    /// Device class bits.
    #[serde(default)]
    pub source: i32,
    /// Combined action code, pointer index included.
    pub action: i32,
    #[serde(default)]
    pub meta_state: i32,
    #[serde(default)]
    pub edge_flags: i32,
    #[serde(default)]
    pub down_time: i64,
    #[serde(default)]
    pub event_time: i64,
    #[serde(default)]
    pub x_offset: f32,
    #[serde(default)]
    pub y_offset: f32,
    #[serde(default = "unit_precision")]
    pub x_precision: f32,
    #[serde(default = "unit_precision")]
    pub y_precision: f32,
    pub pointers: Vec<PointerRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryRecord>,
}

/// A pointer in raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerRecord {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub pressure: f32,
    #[serde(default)]
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub event_time: i64,
    pub samples: Vec<SampleRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub pressure: f32,
    #[serde(default)]
    pub size: f32,
}

fn unit_precision() -> f32 {
    1.0
}

impl From<SampleRecord> for PointerCoords {
    fn from(s: SampleRecord) -> Self {
        PointerCoords::new(s.x, s.y, s.pressure, s.size)
    }
}

impl From<&PointerCoords> for SampleRecord {
    fn from(c: &PointerCoords) -> Self {
        SampleRecord {
            x: c.x,
            y: c.y,
            pressure: c.pressure,
            size: c.size,
        }
    }
}

impl EventRecord {
    /// Validate and build the event this record describes.
    pub fn build(&self) -> Result<InputEvent> {
        match self {
            EventRecord::Key(k) => k.build().map(InputEvent::Key),
            EventRecord::Motion(m) => m.build().map(InputEvent::Motion),
        }
    }
}

impl KeyRecord {
    pub fn build(&self) -> Result<KeyEvent> {
        KeyEvent::builder(KeyAction::try_from(self.action)?, self.key_code)
            .device_id(self.device_id)
            .source(DeviceClass::from_bits_retain(self.source))
            .flags(KeyFlags::from_bits_retain(self.flags))
            .scan_code(self.scan_code)
            .meta_state(MetaState::from_bits_retain(self.meta_state))
            .repeat_count(self.repeat_count)
            .times(self.down_time, self.event_time)
            .build()
    }
}

impl MotionRecord {
    pub fn build(&self) -> Result<MotionEvent> {
        let mut builder = MotionEvent::builder(ActionCode::from_raw(self.action)?)
            .device_id(self.device_id)
            .source(DeviceClass::from_bits_retain(self.source))
            .meta_state(MetaState::from_bits_retain(self.meta_state))
            .edge_flags(EdgeFlags::from_bits_retain(self.edge_flags))
            .times(self.down_time, self.event_time)
            .offset(self.x_offset, self.y_offset)
            .precision(self.x_precision, self.y_precision);

        for p in &self.pointers {
            builder = builder.pointer(p.id, PointerCoords::new(p.x, p.y, p.pressure, p.size));
        }
        for h in &self.history {
            builder = builder.historical(
                h.event_time,
                h.samples.iter().copied().map(PointerCoords::from).collect(),
            );
        }
        builder.build()
    }
}

impl From<&KeyEvent> for KeyRecord {
    fn from(k: &KeyEvent) -> Self {
        KeyRecord {
            device_id: k.device_id().get(),
            source: k.source().bits(),
            action: k.action().into(),
            flags: k.flags().bits(),
            key_code: k.key_code(),
            scan_code: k.scan_code(),
            meta_state: k.meta_state().bits(),
            repeat_count: k.repeat_count(),
            down_time: k.down_time(),
            event_time: k.event_time(),
        }
    }
}

impl From<&MotionEvent> for MotionRecord {
    fn from(m: &MotionEvent) -> Self {
        MotionRecord {
            device_id: m.device_id().get(),
            source: m.source().bits(),
            action: m.action_code().raw(),
            meta_state: m.meta_state().bits(),
            edge_flags: m.edge_flags().bits(),
            down_time: m.down_time(),
            event_time: m.event_time(),
            x_offset: m.x_offset(),
            y_offset: m.y_offset(),
            x_precision: m.x_precision(),
            y_precision: m.y_precision(),
            pointers: m
                .pointers()
                .map(|p| PointerRecord {
                    id: p.id,
                    x: p.coords.x,
                    y: p.coords.y,
                    pressure: p.coords.pressure,
                    size: p.coords.size,
                })
                .collect(),
            history: m
                .history()
                .map(|h| HistoryRecord {
                    event_time: h.event_time,
                    samples: h.coords.iter().map(SampleRecord::from).collect(),
                })
                .collect(),
        }
    }
}

impl From<&InputEvent> for EventRecord {
    fn from(ev: &InputEvent) -> Self {
        match ev {
            InputEvent::Key(k) => EventRecord::Key(k.into()),
            InputEvent::Motion(m) => EventRecord::Motion(m.into()),
        }
    }
}

impl EventScript {
    /// Script holding the serialized form of `events`.
    pub fn from_events<'a>(
        name: impl Into<String>,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> Self {
        EventScript {
            name: name.into(),
            description: None,
            events: events.into_iter().map(EventRecord::from).collect(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a `.toml` or `.json` script, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let script = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(FixtureError::UnsupportedFormat(ext)),
        };
        tracing::debug!(
            path = %path.display(),
            name = %script.name,
            events = script.events.len(),
            "loaded event script"
        );
        Ok(script)
    }

    pub fn to_toml_string(&self) -> Result<String, FixtureError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build every record, stopping at the first invalid one.
    pub fn build(&self) -> Result<Vec<InputEvent>, FixtureError> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .build()
                    .map_err(|source: EventError| FixtureError::Event { index, source })
            })
            .collect()
    }
}
