//! Device identity and capability classes.
//!
//! Events only carry a [`DeviceId`] and, optionally, the [`DeviceClass`] set of
//! the device that produced them. Looking devices up is outside this crate.

use crate::error::{EventError, Result};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Physical capabilities of an input device.
    ///
    /// A device usually reports several classes at once (e.g. a keyboard that is
    /// also an alphabetic keyboard with a D-pad).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeviceClass: i32 {
        /// Keyboard.
        const KEYBOARD = 0x0000_0001;
        /// Alpha-numeric keyboard (not just a dial pad).
        const ALPHAKEY = 0x0000_0002;
        /// Touchscreen, single- or multi-touch.
        const TOUCHSCREEN = 0x0000_0004;
        /// Trackball.
        const TRACKBALL = 0x0000_0008;
        /// Multi-touch touchscreen.
        const TOUCHSCREEN_MT = 0x0000_0010;
        /// Directional pad.
        const DPAD = 0x0000_0020;
    }
}

impl DeviceClass {
    /// `true` if any touchscreen bit is set.
    #[inline]
    pub fn is_touchscreen(self) -> bool {
        self.intersects(DeviceClass::TOUCHSCREEN | DeviceClass::TOUCHSCREEN_MT)
    }
}

/// Identifier of the device that produced an event.
///
/// `0` is reserved for synthetic events that did not come from a physical
/// device. Other values are arbitrary and should not be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DeviceId(pub i32);

impl DeviceId {
    /// Id used for events with no physical device behind them.
    pub const SYNTHETIC: DeviceId = DeviceId(0);

    #[inline]
    pub fn is_synthetic(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for DeviceId {
    fn from(id: i32) -> Self {
        DeviceId(id)
    }
}

impl From<DeviceId> for i32 {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthetic() {
            f.write_str("synthetic")
        } else {
            write!(f, "device:{}", self.0)
        }
    }
}

/// State of a single key as reported by a device query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyState {
    /// Unknown, or the key is not supported by the device.
    Unknown = -1,
    Up = 0,
    Down = 1,
    /// Down, but emulated by the system rather than physically pressed.
    Virtual = 2,
}

impl KeyState {
    /// `true` for [`KeyState::Down`] and [`KeyState::Virtual`].
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, KeyState::Down | KeyState::Virtual)
    }
}

impl TryFrom<i32> for KeyState {
    type Error = EventError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(KeyState::Unknown),
            0 => Ok(KeyState::Up),
            1 => Ok(KeyState::Down),
            2 => Ok(KeyState::Virtual),
            _ => Err(EventError::UnknownValue {
                what: "key state",
                value,
            }),
        }
    }
}

impl From<KeyState> for i32 {
    fn from(state: KeyState) -> Self {
        state as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_bits_are_frozen() {
        assert_eq!(DeviceClass::KEYBOARD.bits(), 0x1);
        assert_eq!(DeviceClass::ALPHAKEY.bits(), 0x2);
        assert_eq!(DeviceClass::TOUCHSCREEN.bits(), 0x4);
        assert_eq!(DeviceClass::TRACKBALL.bits(), 0x8);
        assert_eq!(DeviceClass::TOUCHSCREEN_MT.bits(), 0x10);
        assert_eq!(DeviceClass::DPAD.bits(), 0x20);
    }

    #[test]
    fn unknown_class_bits_survive() {
        let classes = DeviceClass::from_bits_retain(0x104);
        assert!(classes.contains(DeviceClass::TOUCHSCREEN));
        assert_eq!(classes.bits(), 0x104);
    }

    #[test]
    fn touchscreen_covers_multi_touch() {
        assert!(DeviceClass::TOUCHSCREEN_MT.is_touchscreen());
        assert!(!(DeviceClass::TRACKBALL | DeviceClass::DPAD).is_touchscreen());
    }

    #[test]
    fn key_state_values() {
        for (raw, state) in [
            (-1, KeyState::Unknown),
            (0, KeyState::Up),
            (1, KeyState::Down),
            (2, KeyState::Virtual),
        ] {
            assert_eq!(KeyState::try_from(raw), Ok(state));
            assert_eq!(i32::from(state), raw);
        }
        assert!(KeyState::try_from(3).is_err());
        assert!(KeyState::Virtual.is_down());
        assert!(!KeyState::Unknown.is_down());
    }

    #[test]
    fn synthetic_device() {
        assert!(DeviceId::SYNTHETIC.is_synthetic());
        assert!(!DeviceId(7).is_synthetic());
        assert_eq!(DeviceId(7).to_string(), "device:7");
    }
}
