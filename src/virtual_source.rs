//! Synthetic event source for tests and demos.

use crate::device::{DeviceClass, DeviceId};
use crate::error::{FixtureError, Result};
use crate::event::InputEvent;
use crate::fixture::EventScript;
use crate::key::{KeyAction, KeyEvent};
use crate::motion::{MotionAction, MotionEvent, PointerCoords};

/// Anything that hands out already-built events.
pub trait EventSource {
    /// Drain the events produced since the last poll, oldest first.
    fn poll(&mut self) -> Vec<InputEvent>;
    fn name(&self) -> &str;
    fn device_id(&self) -> DeviceId;
}

/// In-memory source of synthetic events.
///
/// Useful for tests and demos. Events built through the helpers carry this
/// source's device id and classes and use a caller-advanced clock.
#[derive(Debug)]
pub struct VirtualSource {
    device_id: DeviceId,
    name: String,
    classes: DeviceClass,
    now: i64,
    key_down_at: Option<i64>,
    events: Vec<InputEvent>,
}

impl Default for VirtualSource {
    fn default() -> Self {
        Self::new(DeviceId::SYNTHETIC, "Virtual Input", DeviceClass::empty())
    }
}

impl VirtualSource {
    pub fn new(device_id: impl Into<DeviceId>, name: &str, classes: DeviceClass) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.to_string(),
            classes,
            now: 0,
            key_down_at: None,
            events: Vec::new(),
        }
    }

    /// Current clock value in nanoseconds.
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Move the clock forward. Negative steps are ignored; the clock saturates
    /// at `i64::MAX`.
    pub fn advance(&mut self, nanos: i64) {
        self.now = self.now.saturating_add(nanos.max(0));
    }

    /// Queue an event as-is.
    pub fn feed(&mut self, event: impl Into<InputEvent>) {
        self.events.push(event.into());
    }

    /// Build and queue every event of a script.
    pub fn feed_script(&mut self, script: &EventScript) -> Result<usize, FixtureError> {
        let events = script.build()?;
        let n = events.len();
        self.events.extend(events);
        Ok(n)
    }

    pub fn press_key(&mut self, key_code: i32) -> Result<()> {
        self.key_down_at = Some(self.now);
        let ev = KeyEvent::builder(KeyAction::Down, key_code)
            .device_id(self.device_id)
            .source(self.classes)
            .times(self.now, self.now)
            .build()?;
        self.feed(ev);
        Ok(())
    }

    pub fn release_key(&mut self, key_code: i32) -> Result<()> {
        let down = self.key_down_at.take().unwrap_or(self.now);
        let ev = KeyEvent::builder(KeyAction::Up, key_code)
            .device_id(self.device_id)
            .source(self.classes)
            .times(down, self.now)
            .build()?;
        self.feed(ev);
        Ok(())
    }

    /// Queue a single-pointer down followed by an up at the same spot.
    pub fn tap(&mut self, x: f32, y: f32) -> Result<()> {
        let down_time = self.now;
        for action in [MotionAction::Down, MotionAction::Up] {
            let ev = MotionEvent::builder(action)
                .device_id(self.device_id)
                .source(self.classes)
                .times(down_time, self.now)
                .pointer(0, PointerCoords::new(x, y, 1.0, 0.0))
                .build()?;
            self.feed(ev);
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for VirtualSource {
    fn poll(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn device_id(&self) -> DeviceId {
        self.device_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventNature;

    #[test]
    fn key_press_release_pair() {
        let mut src = VirtualSource::new(5, "pad", DeviceClass::KEYBOARD);
        src.advance(1_000);
        src.press_key(29).unwrap();
        src.advance(500);
        src.release_key(29).unwrap();

        let events = src.poll();
        assert_eq!(events.len(), 2);
        let up = events[1].as_key().unwrap();
        assert_eq!(up.action(), KeyAction::Up);
        assert_eq!(up.down_time(), 1_000);
        assert_eq!(up.event_time(), 1_500);
        assert_eq!(up.device_id(), DeviceId(5));
        assert_eq!(src.pending(), 0);
    }

    #[test]
    fn tap_emits_down_then_up() {
        let mut src = VirtualSource::new(1, "ball", DeviceClass::TRACKBALL);
        src.tap(3.0, 4.0).unwrap();
        let events = src.poll();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].motion_action(), Ok(MotionAction::Down));
        assert_eq!(events[1].motion_action(), Ok(MotionAction::Up));
        assert_eq!(events[1].nature(), EventNature::Trackball);
        assert_eq!(events[1].x(0), Ok(3.0));
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut src = VirtualSource::default();
        src.advance(i64::MAX);
        src.advance(1);
        assert_eq!(src.now(), i64::MAX);
        src.advance(-5);
        assert_eq!(src.now(), i64::MAX);
        src.press_key(4).unwrap();
        assert_eq!(src.poll()[0].event_time(), i64::MAX);
    }

    #[test]
    fn default_is_synthetic() {
        let src = VirtualSource::default();
        assert!(src.device_id().is_synthetic());
        assert_eq!(src.name(), "Virtual Input");
    }
}
