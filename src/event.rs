//! The event façade.
//!
//! [`InputEvent`] is a tagged union over [`KeyEvent`] and [`MotionEvent`]. There
//! are two ways to read it:
//!
//! - **Statically**: match on the enum, or use [`InputEvent::as_key`] /
//!   [`InputEvent::as_motion`], and call the infallible accessors on the variant.
//! - **Dynamically**: call the variant-specific accessors directly on
//!   [`InputEvent`]. They return [`EventError::WrongVariant`] when the event is the
//!   other kind, and [`EventError::IndexOutOfRange`] for bad pointer/history slots.
//!
//! Modifier state, down time and event time exist on both variants, so
//! [`InputEvent::meta_state`], [`InputEvent::down_time`] and
//! [`InputEvent::event_time`] never fail. When only a key event is acceptable,
//! go through [`InputEvent::key`] first: `ev.key()?.meta_state()` fails with
//! `WrongVariant` on a motion event, as does `ev.motion()?.down_time()` on a key.
//!
//! Every accessor is a pure read. Events are `Send + Sync` and can be shared
//! across threads freely.
//!
//! ```
//! use eventview::{InputEvent, KeyAction, KeyEvent, EventError, EventType};
//!
//! let ev: InputEvent = KeyEvent::builder(KeyAction::Down, 29).build()?.into();
//! assert_eq!(ev.event_type(), EventType::Key);
//! assert_eq!(ev.key_code()?, 29);
//! assert!(matches!(ev.pointer_count(), Err(EventError::WrongVariant { .. })));
//! # Ok::<(), EventError>(())
//! ```

use crate::device::{DeviceClass, DeviceId};
use crate::error::{EventError, Result};
use crate::key::{KeyAction, KeyEvent, KeyFlags};
use crate::meta::MetaState;
use crate::motion::{ActionCode, EdgeFlags, MotionAction, MotionEvent};
use std::fmt;

/// Primary tag of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EventType {
    Key = 1,
    Motion = 2,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Key => f.write_str("key"),
            EventType::Motion => f.write_str("motion"),
        }
    }
}

impl TryFrom<i32> for EventType {
    type Error = EventError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(EventType::Key),
            2 => Ok(EventType::Motion),
            _ => Err(EventError::UnknownValue {
                what: "event type",
                value,
            }),
        }
    }
}

impl From<EventType> for i32 {
    fn from(ty: EventType) -> Self {
        ty as i32
    }
}

/// Coarse classification of where an event came from.
///
/// This is derived from the event variant and its source device classes; it is
/// not stored on the event and overlaps with [`EventType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EventNature {
    Key = 1,
    Touch = 2,
    Trackball = 3,
}

impl TryFrom<i32> for EventNature {
    type Error = EventError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(EventNature::Key),
            2 => Ok(EventNature::Touch),
            3 => Ok(EventNature::Trackball),
            _ => Err(EventError::UnknownValue {
                what: "event nature",
                value,
            }),
        }
    }
}

impl From<EventNature> for i32 {
    fn from(nature: EventNature) -> Self {
        nature as i32
    }
}

/// A key or motion event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Motion(MotionEvent),
}

impl From<KeyEvent> for InputEvent {
    fn from(ev: KeyEvent) -> Self {
        InputEvent::Key(ev)
    }
}

impl From<MotionEvent> for InputEvent {
    fn from(ev: MotionEvent) -> Self {
        InputEvent::Motion(ev)
    }
}

impl InputEvent {
    #[inline]
    pub fn event_type(&self) -> EventType {
        match self {
            InputEvent::Key(_) => EventType::Key,
            InputEvent::Motion(_) => EventType::Motion,
        }
    }

    #[inline]
    pub fn device_id(&self) -> DeviceId {
        match self {
            InputEvent::Key(k) => k.device_id(),
            InputEvent::Motion(m) => m.device_id(),
        }
    }

    #[inline]
    pub fn source(&self) -> DeviceClass {
        match self {
            InputEvent::Key(k) => k.source(),
            InputEvent::Motion(m) => m.source(),
        }
    }

    /// Key events are `Key`. Motion events are `Trackball` when the source is a
    /// trackball and not a touchscreen, `Touch` otherwise.
    pub fn nature(&self) -> EventNature {
        match self {
            InputEvent::Key(_) => EventNature::Key,
            InputEvent::Motion(m) => {
                let source = m.source();
                if source.contains(DeviceClass::TRACKBALL) && !source.is_touchscreen() {
                    EventNature::Trackball
                } else {
                    EventNature::Touch
                }
            }
        }
    }

    #[inline]
    pub fn meta_state(&self) -> MetaState {
        match self {
            InputEvent::Key(k) => k.meta_state(),
            InputEvent::Motion(m) => m.meta_state(),
        }
    }

    #[inline]
    pub fn down_time(&self) -> i64 {
        match self {
            InputEvent::Key(k) => k.down_time(),
            InputEvent::Motion(m) => m.down_time(),
        }
    }

    #[inline]
    pub fn event_time(&self) -> i64 {
        match self {
            InputEvent::Key(k) => k.event_time(),
            InputEvent::Motion(m) => m.event_time(),
        }
    }

    #[inline]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(k) => Some(k),
            InputEvent::Motion(_) => None,
        }
    }

    #[inline]
    pub fn as_motion(&self) -> Option<&MotionEvent> {
        match self {
            InputEvent::Motion(m) => Some(m),
            InputEvent::Key(_) => None,
        }
    }

    /// The key variant, or `WrongVariant`.
    pub fn key(&self) -> Result<&KeyEvent> {
        self.as_key().ok_or(EventError::WrongVariant {
            expected: EventType::Key,
            actual: self.event_type(),
        })
    }

    /// The motion variant, or `WrongVariant`.
    pub fn motion(&self) -> Result<&MotionEvent> {
        self.as_motion().ok_or(EventError::WrongVariant {
            expected: EventType::Motion,
            actual: self.event_type(),
        })
    }

    // Key-only.

    pub fn key_action(&self) -> Result<KeyAction> {
        Ok(self.key()?.action())
    }

    pub fn key_flags(&self) -> Result<KeyFlags> {
        Ok(self.key()?.flags())
    }

    pub fn key_code(&self) -> Result<i32> {
        Ok(self.key()?.key_code())
    }

    pub fn scan_code(&self) -> Result<i32> {
        Ok(self.key()?.scan_code())
    }

    pub fn repeat_count(&self) -> Result<i32> {
        Ok(self.key()?.repeat_count())
    }

    // Motion-only.

    pub fn action_code(&self) -> Result<ActionCode> {
        Ok(self.motion()?.action_code())
    }

    pub fn motion_action(&self) -> Result<MotionAction> {
        Ok(self.motion()?.action())
    }

    pub fn action_index(&self) -> Result<Option<usize>> {
        Ok(self.motion()?.action_index())
    }

    pub fn edge_flags(&self) -> Result<EdgeFlags> {
        Ok(self.motion()?.edge_flags())
    }

    pub fn x_precision(&self) -> Result<f32> {
        Ok(self.motion()?.x_precision())
    }

    pub fn y_precision(&self) -> Result<f32> {
        Ok(self.motion()?.y_precision())
    }

    pub fn pointer_count(&self) -> Result<usize> {
        Ok(self.motion()?.pointer_count())
    }

    pub fn pointer_id(&self, pointer_index: usize) -> Result<i32> {
        self.motion()?.pointer_id(pointer_index)
    }

    pub fn x(&self, pointer_index: usize) -> Result<f32> {
        self.motion()?.x(pointer_index)
    }

    pub fn y(&self, pointer_index: usize) -> Result<f32> {
        self.motion()?.y(pointer_index)
    }

    pub fn pressure(&self, pointer_index: usize) -> Result<f32> {
        self.motion()?.pressure(pointer_index)
    }

    pub fn size(&self, pointer_index: usize) -> Result<f32> {
        self.motion()?.size(pointer_index)
    }

    pub fn raw_x(&self) -> Result<f32> {
        Ok(self.motion()?.raw_x())
    }

    pub fn raw_y(&self) -> Result<f32> {
        Ok(self.motion()?.raw_y())
    }

    pub fn history_size(&self) -> Result<usize> {
        Ok(self.motion()?.history_size())
    }

    pub fn historical_event_time(&self, history_index: usize) -> Result<i64> {
        self.motion()?.historical_event_time(history_index)
    }

    pub fn historical_x(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        self.motion()?.historical_x(pointer_index, history_index)
    }

    pub fn historical_y(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        self.motion()?.historical_y(pointer_index, history_index)
    }

    pub fn historical_pressure(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        self.motion()?.historical_pressure(pointer_index, history_index)
    }

    pub fn historical_size(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        self.motion()?.historical_size(pointer_index, history_index)
    }
}
