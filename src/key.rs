//! Key events.
//!
//! A [`KeyEvent`] is built once through [`KeyEventBuilder`] and never changes
//! afterwards. All accessors are plain field reads.

use crate::device::{DeviceClass, DeviceId};
use crate::error::{EventError, Result};
use crate::meta::MetaState;
use bitflags::bitflags;

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyAction {
    /// The key has been pressed down.
    Down = 0,
    /// The key has been released.
    Up = 1,
    /// Several duplicate key events in a row, or a complex string. The repeat
    /// count says how many times the key code should be applied.
    Multiple = 2,
}

impl TryFrom<i32> for KeyAction {
    type Error = EventError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(KeyAction::Down),
            1 => Ok(KeyAction::Up),
            2 => Ok(KeyAction::Multiple),
            _ => Err(EventError::UnknownValue {
                what: "key action",
                value,
            }),
        }
    }
}

impl From<KeyAction> for i32 {
    fn from(action: KeyAction) -> Self {
        action as i32
    }
}

bitflags! {
    /// Flags attached to a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyFlags: i32 {
        /// The device woke because of this key event.
        const WOKE_HERE = 0x1;
        /// Generated by a software keyboard.
        const SOFT_KEYBOARD = 0x2;
        /// Should not cause the UI to leave touch mode.
        const KEEP_TOUCH_MODE = 0x4;
        /// Known to come from a trusted part of the system.
        const FROM_SYSTEM = 0x8;
        /// Enter key from an IME whose enter key was relabelled "next" or "done".
        const EDITOR_ACTION = 0x10;
        /// On an up event: the press was canceled and its action must not run.
        const CANCELED = 0x20;
        /// Generated by a virtual (on-screen) hard key area.
        const VIRTUAL_HARD_KEY = 0x40;
        /// First repeat after the long press timeout.
        const LONG_PRESS = 0x80;
        /// Canceled because a long press action ran while the key was down.
        const CANCELED_LONG_PRESS = 0x100;
        /// On an up event: the key is still tracked from its initial down.
        const TRACKING = 0x200;
    }
}

/// An immutable key press, release or repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    device_id: DeviceId,
    source: DeviceClass,
    action: KeyAction,
    flags: KeyFlags,
    key_code: i32,
    scan_code: i32,
    meta_state: MetaState,
    repeat_count: i32,
    down_time: i64,
    event_time: i64,
}

impl KeyEvent {
    /// Start building a key event. Every other field defaults to zero/empty.
    pub fn builder(action: KeyAction, key_code: i32) -> KeyEventBuilder {
        KeyEventBuilder {
            device_id: DeviceId::SYNTHETIC,
            source: DeviceClass::empty(),
            action,
            flags: KeyFlags::empty(),
            key_code,
            scan_code: 0,
            meta_state: MetaState::NONE,
            repeat_count: 0,
            down_time: 0,
            event_time: 0,
        }
    }

    #[inline]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Classes of the originating device, empty when unknown.
    #[inline]
    pub fn source(&self) -> DeviceClass {
        self.source
    }

    #[inline]
    pub fn action(&self) -> KeyAction {
        self.action
    }

    #[inline]
    pub fn flags(&self) -> KeyFlags {
        self.flags
    }

    /// Platform key code.
    #[inline]
    pub fn key_code(&self) -> i32 {
        self.key_code
    }

    /// Hardware key id. Device-specific and not portable.
    #[inline]
    pub fn scan_code(&self) -> i32 {
        self.scan_code
    }

    #[inline]
    pub fn meta_state(&self) -> MetaState {
        self.meta_state
    }

    /// For `Down`, the number of auto-repeats so far; for `Multiple`, the
    /// number of times the key code should be applied.
    #[inline]
    pub fn repeat_count(&self) -> i32 {
        self.repeat_count
    }

    /// Time of the most recent key down, in monotonic nanoseconds.
    #[inline]
    pub fn down_time(&self) -> i64 {
        self.down_time
    }

    /// Time this event was generated, in monotonic nanoseconds.
    #[inline]
    pub fn event_time(&self) -> i64 {
        self.event_time
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.flags.contains(KeyFlags::CANCELED)
    }

    #[inline]
    pub fn is_long_press(&self) -> bool {
        self.flags.contains(KeyFlags::LONG_PRESS)
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.flags.contains(KeyFlags::TRACKING)
    }
}

/// Collects the fields of a [`KeyEvent`] and validates them on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct KeyEventBuilder {
    device_id: DeviceId,
    source: DeviceClass,
    action: KeyAction,
    flags: KeyFlags,
    key_code: i32,
    scan_code: i32,
    meta_state: MetaState,
    repeat_count: i32,
    down_time: i64,
    event_time: i64,
}

impl KeyEventBuilder {
    pub fn device_id(mut self, id: impl Into<DeviceId>) -> Self {
        self.device_id = id.into();
        self
    }

    pub fn source(mut self, source: DeviceClass) -> Self {
        self.source = source;
        self
    }

    pub fn flags(mut self, flags: KeyFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn scan_code(mut self, scan_code: i32) -> Self {
        self.scan_code = scan_code;
        self
    }

    pub fn meta_state(mut self, meta_state: MetaState) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn repeat_count(mut self, repeat_count: i32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Sets both timestamps (nanoseconds).
    pub fn times(mut self, down_time: i64, event_time: i64) -> Self {
        self.down_time = down_time;
        self.event_time = event_time;
        self
    }

    pub fn build(self) -> Result<KeyEvent> {
        if self.down_time > self.event_time {
            return Err(reject(format!(
                "down time {} is after event time {}",
                self.down_time, self.event_time
            )));
        }
        if self.repeat_count < 0 {
            return Err(reject(format!(
                "negative repeat count {}",
                self.repeat_count
            )));
        }

        Ok(KeyEvent {
            device_id: self.device_id,
            source: self.source,
            action: self.action,
            flags: self.flags,
            key_code: self.key_code,
            scan_code: self.scan_code,
            meta_state: self.meta_state,
            repeat_count: self.repeat_count,
            down_time: self.down_time,
            event_time: self.event_time,
        })
    }
}

fn reject(reason: String) -> EventError {
    tracing::debug!(%reason, "rejected key event");
    EventError::Invalid(reason)
}
