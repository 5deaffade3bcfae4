//! Motion (pointer / touch / trackball) events.
//!
//! ## Coordinates
//! Pointer samples are stored in raw screen coordinates. Each event also has an
//! x/y *offset* that adjusts them into the coordinate space of the receiver:
//! - [`MotionEvent::x`] / [`MotionEvent::y`] (and the historical variants) return `raw + offset`;
//! - [`MotionEvent::raw_x`] / [`MotionEvent::raw_y`] return the primary pointer unadjusted.
//!
//! Whole numbers are pixels; devices with sub-pixel precision may report fractions.
//! Multiplying a coordinate by [`MotionEvent::x_precision`] gives the hardware value.
//!
//! ## History
//! `Move` events may batch intermediate samples that happened since the previous
//! event. They are indexed oldest first; every other action carries no history.

use crate::device::{DeviceClass, DeviceId};
use crate::error::{EventError, IndexKind, Result};
use crate::meta::MetaState;
use bitflags::bitflags;
use std::collections::HashSet;
use std::fmt;

/// Bits of an action code that hold the action itself.
pub const ACTION_MASK: i32 = 0xff;
/// Bits of an action code that hold the pointer index for `PointerDown` / `PointerUp`.
pub const ACTION_POINTER_INDEX_MASK: i32 = 0xff00;
/// Shift that turns the masked pointer index bits into an index.
pub const ACTION_POINTER_INDEX_SHIFT: i32 = 8;

/// The action part of a motion event's action code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MotionAction {
    /// A pressed gesture has started; carries the initial location.
    Down = 0,
    /// A pressed gesture has finished; carries the final location.
    Up = 1,
    /// A change during a pressed gesture; may carry history.
    Move = 2,
    /// The gesture was aborted. Treat as `Up` without performing its action.
    Cancel = 3,
    /// Movement outside the bounds of the receiving element.
    Outside = 4,
    /// A non-primary pointer went down.
    PointerDown = 5,
    /// A non-primary pointer went up.
    PointerUp = 6,
}

impl MotionAction {
    /// Decode the action from a combined action code (`code & 0xff`).
    pub fn from_code(code: i32) -> Result<Self> {
        Self::try_from(code & ACTION_MASK)
    }

    /// `true` for the actions whose code carries a pointer index.
    #[inline]
    pub fn has_pointer_index(self) -> bool {
        matches!(self, MotionAction::PointerDown | MotionAction::PointerUp)
    }
}

impl TryFrom<i32> for MotionAction {
    type Error = EventError;

    fn try_from(value: i32) -> Result<Self> {
        Ok(match value {
            0 => MotionAction::Down,
            1 => MotionAction::Up,
            2 => MotionAction::Move,
            3 => MotionAction::Cancel,
            4 => MotionAction::Outside,
            5 => MotionAction::PointerDown,
            6 => MotionAction::PointerUp,
            _ => {
                return Err(EventError::UnknownValue {
                    what: "motion action",
                    value,
                })
            }
        })
    }
}

impl From<MotionAction> for i32 {
    fn from(action: MotionAction) -> Self {
        action as i32
    }
}

/// Combined action and pointer index, exactly as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionCode(i32);

impl ActionCode {
    /// Encode an action. `pointer_index` is only stored for `PointerDown` /
    /// `PointerUp` and must fit in 8 bits.
    pub fn new(action: MotionAction, pointer_index: usize) -> Result<Self> {
        let mut code = i32::from(action);
        if action.has_pointer_index() {
            if pointer_index > 0xff {
                return Err(EventError::Invalid(format!(
                    "pointer index {pointer_index} does not fit in an action code"
                )));
            }
            code |= (pointer_index as i32) << ACTION_POINTER_INDEX_SHIFT;
        }
        Ok(ActionCode(code))
    }

    /// Wrap a raw code, checking that its action bits are known.
    pub fn from_raw(code: i32) -> Result<Self> {
        MotionAction::from_code(code)?;
        Ok(ActionCode(code))
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    /// The action bits, decoded.
    #[inline]
    pub fn action(self) -> MotionAction {
        // Every ActionCode is checked on construction.
        MotionAction::from_code(self.0).unwrap_or(MotionAction::Cancel)
    }

    /// The pointer slot that went down or up, for `PointerDown` / `PointerUp`.
    #[inline]
    pub fn pointer_index(self) -> Option<usize> {
        if self.action().has_pointer_index() {
            Some(((self.0 & ACTION_POINTER_INDEX_MASK) >> ACTION_POINTER_INDEX_SHIFT) as usize)
        } else {
            None
        }
    }
}

impl From<MotionAction> for ActionCode {
    fn from(action: MotionAction) -> Self {
        ActionCode(action as i32)
    }
}

impl From<ActionCode> for i32 {
    fn from(code: ActionCode) -> Self {
        code.0
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pointer_index() {
            Some(idx) => write!(f, "{:?}({idx})", self.action()),
            None => write!(f, "{:?}", self.action()),
        }
    }
}

bitflags! {
    /// Screen edges a touch intersected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EdgeFlags: i32 {
        const TOP = 0x01;
        const BOTTOM = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
    }
}

impl EdgeFlags {
    /// No edges intersected.
    pub const NONE: EdgeFlags = EdgeFlags::empty();
}

/// One sample of one pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerCoords {
    /// Raw x, before the event offset is applied.
    pub x: f32,
    /// Raw y, before the event offset is applied.
    pub y: f32,
    /// Normalized pressure, usually `0.0..=1.0`.
    pub pressure: f32,
    /// Normalized touch area, `0.0..=1.0`.
    pub size: f32,
}

impl PointerCoords {
    pub fn new(x: f32, y: f32, pressure: f32, size: f32) -> Self {
        Self {
            x,
            y,
            pressure,
            size,
        }
    }
}

/// A pointer in its current slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Stable id of the pointer for the duration of the gesture.
    pub id: i32,
    pub coords: PointerCoords,
}

/// A batched sample older than the event's current position.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSample {
    /// When this sample was taken, in monotonic nanoseconds.
    pub event_time: i64,
    /// One entry per pointer slot, in slot order.
    pub coords: Vec<PointerCoords>,
}

/// An immutable motion event with one or more pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    device_id: DeviceId,
    source: DeviceClass,
    action: ActionCode,
    meta_state: MetaState,
    edge_flags: EdgeFlags,
    down_time: i64,
    event_time: i64,
    x_offset: f32,
    y_offset: f32,
    x_precision: f32,
    y_precision: f32,
    pointers: Vec<Pointer>,
    history: Vec<HistoricalSample>,
}

impl MotionEvent {
    /// Start building a motion event. Precision defaults to `1.0`, everything
    /// else to zero/empty; at least one pointer must be added.
    pub fn builder(action: impl Into<ActionCode>) -> MotionEventBuilder {
        MotionEventBuilder {
            device_id: DeviceId::SYNTHETIC,
            source: DeviceClass::empty(),
            action: action.into(),
            meta_state: MetaState::NONE,
            edge_flags: EdgeFlags::NONE,
            down_time: 0,
            event_time: 0,
            x_offset: 0.0,
            y_offset: 0.0,
            x_precision: 1.0,
            y_precision: 1.0,
            pointers: Vec::new(),
            history: Vec::new(),
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

    /// Combined action code (action bits plus pointer index bits).
    #[inline]
    pub fn action_code(&self) -> ActionCode {
        self.action
    }

    #[inline]
    pub fn action(&self) -> MotionAction {
        self.action.action()
    }

    /// Pointer slot that changed, for `PointerDown` / `PointerUp` only.
    #[inline]
    pub fn action_index(&self) -> Option<usize> {
        self.action.pointer_index()
    }

    #[inline]
    pub fn meta_state(&self) -> MetaState {
        self.meta_state
    }

    #[inline]
    pub fn edge_flags(&self) -> EdgeFlags {
        self.edge_flags
    }

    /// Time the gesture started, in monotonic nanoseconds.
    #[inline]
    pub fn down_time(&self) -> i64 {
        self.down_time
    }

    /// Time of the current sample, in monotonic nanoseconds.
    #[inline]
    pub fn event_time(&self) -> i64 {
        self.event_time
    }

    #[inline]
    pub fn x_precision(&self) -> f32 {
        self.x_precision
    }

    #[inline]
    pub fn y_precision(&self) -> f32 {
        self.y_precision
    }

    #[inline]
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    #[inline]
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    /// Always at least 1.
    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointers(&self) -> impl ExactSizeIterator<Item = &Pointer> + '_ {
        self.pointers.iter()
    }

    fn pointer(&self, pointer_index: usize) -> Result<&Pointer> {
        self.pointers
            .get(pointer_index)
            .ok_or(EventError::IndexOutOfRange {
                kind: IndexKind::Pointer,
                index: pointer_index,
                count: self.pointers.len(),
            })
    }

    pub fn pointer_id(&self, pointer_index: usize) -> Result<i32> {
        Ok(self.pointer(pointer_index)?.id)
    }

    /// Slot currently holding the pointer with `pointer_id`.
    pub fn find_pointer_index(&self, pointer_id: i32) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == pointer_id)
    }

    pub fn x(&self, pointer_index: usize) -> Result<f32> {
        Ok(self.pointer(pointer_index)?.coords.x + self.x_offset)
    }

    pub fn y(&self, pointer_index: usize) -> Result<f32> {
        Ok(self.pointer(pointer_index)?.coords.y + self.y_offset)
    }

    pub fn pressure(&self, pointer_index: usize) -> Result<f32> {
        Ok(self.pointer(pointer_index)?.coords.pressure)
    }

    pub fn size(&self, pointer_index: usize) -> Result<f32> {
        Ok(self.pointer(pointer_index)?.coords.size)
    }

    /// Unadjusted x of the primary pointer (slot 0).
    #[inline]
    pub fn raw_x(&self) -> f32 {
        self.pointers[0].coords.x
    }

    /// Unadjusted y of the primary pointer (slot 0).
    #[inline]
    pub fn raw_y(&self) -> f32 {
        self.pointers[0].coords.y
    }

    /// Number of batched samples; 0 unless the action is `Move`.
    #[inline]
    pub fn history_size(&self) -> usize {
        self.history.len()
    }

    /// Historical samples, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoricalSample> + '_ {
        self.history.iter()
    }

    fn historical(&self, pointer_index: usize, history_index: usize) -> Result<&PointerCoords> {
        self.pointer(pointer_index)?;
        let sample = self.historical_sample(history_index)?;
        // Builder guarantees one entry per pointer slot.
        sample
            .coords
            .get(pointer_index)
            .ok_or(EventError::IndexOutOfRange {
                kind: IndexKind::Pointer,
                index: pointer_index,
                count: sample.coords.len(),
            })
    }

    fn historical_sample(&self, history_index: usize) -> Result<&HistoricalSample> {
        self.history
            .get(history_index)
            .ok_or(EventError::IndexOutOfRange {
                kind: IndexKind::History,
                index: history_index,
                count: self.history.len(),
            })
    }

    pub fn historical_event_time(&self, history_index: usize) -> Result<i64> {
        Ok(self.historical_sample(history_index)?.event_time)
    }

    pub fn historical_x(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        Ok(self.historical(pointer_index, history_index)?.x + self.x_offset)
    }

    pub fn historical_y(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        Ok(self.historical(pointer_index, history_index)?.y + self.y_offset)
    }

    pub fn historical_pressure(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        Ok(self.historical(pointer_index, history_index)?.pressure)
    }

    pub fn historical_size(&self, pointer_index: usize, history_index: usize) -> Result<f32> {
        Ok(self.historical(pointer_index, history_index)?.size)
    }

    /// A copy of this event with its offset moved by `(dx, dy)`.
    ///
    /// Fails if the resulting offset is not finite.
    pub fn offset_by(&self, dx: f32, dy: f32) -> Result<MotionEvent> {
        let (x_offset, y_offset) = (self.x_offset + dx, self.y_offset + dy);
        if !(x_offset.is_finite() && y_offset.is_finite()) {
            return Err(reject(format!(
                "offset ({x_offset}, {y_offset}) is not finite"
            )));
        }
        Ok(MotionEvent {
            x_offset,
            y_offset,
            ..self.clone()
        })
    }
}

/// Collects the fields of a [`MotionEvent`] and validates them on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct MotionEventBuilder {
    device_id: DeviceId,
    source: DeviceClass,
    action: ActionCode,
    meta_state: MetaState,
    edge_flags: EdgeFlags,
    down_time: i64,
    event_time: i64,
    x_offset: f32,
    y_offset: f32,
    x_precision: f32,
    y_precision: f32,
    pointers: Vec<Pointer>,
    history: Vec<HistoricalSample>,
}

impl MotionEventBuilder {
    pub fn device_id(mut self, id: impl Into<DeviceId>) -> Self {
        self.device_id = id.into();
        self
    }

    pub fn source(mut self, source: DeviceClass) -> Self {
        self.source = source;
        self
    }

    pub fn meta_state(mut self, meta_state: MetaState) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn edge_flags(mut self, edge_flags: EdgeFlags) -> Self {
        self.edge_flags = edge_flags;
        self
    }

    /// Sets both timestamps (nanoseconds).
    pub fn times(mut self, down_time: i64, event_time: i64) -> Self {
        self.down_time = down_time;
        self.event_time = event_time;
        self
    }

    pub fn offset(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn precision(mut self, x_precision: f32, y_precision: f32) -> Self {
        self.x_precision = x_precision;
        self.y_precision = y_precision;
        self
    }

    /// Append a pointer in the next slot.
    pub fn pointer(mut self, id: i32, coords: PointerCoords) -> Self {
        self.pointers.push(Pointer { id, coords });
        self
    }

    /// Append a historical sample; samples must be added oldest first with one
    /// entry per pointer slot.
    pub fn historical(mut self, event_time: i64, coords: Vec<PointerCoords>) -> Self {
        self.history.push(HistoricalSample { event_time, coords });
        self
    }

    pub fn build(self) -> Result<MotionEvent> {
        self.validate()?;
        Ok(MotionEvent {
            device_id: self.device_id,
            source: self.source,
            action: self.action,
            meta_state: self.meta_state,
            edge_flags: self.edge_flags,
            down_time: self.down_time,
            event_time: self.event_time,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            x_precision: self.x_precision,
            y_precision: self.y_precision,
            pointers: self.pointers,
            history: self.history,
        })
    }

    fn validate(&self) -> Result<()> {
        let count = self.pointers.len();
        if count == 0 {
            return Err(reject("motion event has no pointers".into()));
        }

        for (name, v) in [
            ("x offset", self.x_offset),
            ("y offset", self.y_offset),
            ("x precision", self.x_precision),
            ("y precision", self.y_precision),
        ] {
            check_finite(name, v)?;
        }
        for p in &self.pointers {
            check_coords("pointer", &p.coords)?;
        }
        for sample in &self.history {
            for c in &sample.coords {
                check_coords("historical sample", c)?;
            }
        }

        let mut seen = HashSet::with_capacity(count);
        for p in &self.pointers {
            if !seen.insert(p.id) {
                return Err(reject(format!("duplicate pointer id {}", p.id)));
            }
        }

        if self.down_time > self.event_time {
            return Err(reject(format!(
                "down time {} is after event time {}",
                self.down_time, self.event_time
            )));
        }

        if let Some(idx) = self.action.pointer_index() {
            if idx >= count {
                return Err(reject(format!(
                    "action {} names pointer slot {idx} but event has {count} pointer(s)",
                    self.action
                )));
            }
        }

        if self.history.is_empty() {
            return Ok(());
        }
        if self.action.action() != MotionAction::Move {
            return Err(reject(format!(
                "{} event carries {} historical sample(s)",
                self.action,
                self.history.len()
            )));
        }

        let mut prev = i64::MIN;
        for (i, sample) in self.history.iter().enumerate() {
            if sample.coords.len() != count {
                return Err(reject(format!(
                    "historical sample {i} has {} pointer(s), expected {count}",
                    sample.coords.len()
                )));
            }
            if sample.event_time < prev || sample.event_time > self.event_time {
                return Err(reject(format!(
                    "historical sample {i} at {} is out of order",
                    sample.event_time
                )));
            }
            prev = sample.event_time;
        }
        Ok(())
    }
}

fn check_finite(name: &str, v: f32) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(reject(format!("{name} is {v}")))
    }
}

fn check_coords(what: &str, c: &PointerCoords) -> Result<()> {
    for (field, v) in [("x", c.x), ("y", c.y), ("pressure", c.pressure), ("size", c.size)] {
        if !v.is_finite() {
            return Err(reject(format!("{what} {field} is {v}")));
        }
    }
    Ok(())
}

fn reject(reason: String) -> EventError {
    tracing::debug!(%reason, "rejected motion event");
    EventError::Invalid(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(x: f32, y: f32) -> PointerCoords {
        PointerCoords::new(x, y, 0.5, 0.1)
    }

    #[test]
    fn decodes_pointer_down_with_index() {
        let code = ActionCode::from_raw(0x0105).unwrap();
        assert_eq!(code.raw() & ACTION_MASK, 5);
        assert_eq!((code.raw() & ACTION_POINTER_INDEX_MASK) >> ACTION_POINTER_INDEX_SHIFT, 1);
        assert_eq!(code.action(), MotionAction::PointerDown);
        assert_eq!(code.pointer_index(), Some(1));
    }

    #[test]
    fn pointer_index_only_for_pointer_actions() {
        // Stray index bits on a plain move are ignored.
        let code = ActionCode::from_raw(0x0302).unwrap();
        assert_eq!(code.action(), MotionAction::Move);
        assert_eq!(code.pointer_index(), None);
    }

    #[test]
    fn encode_matches_decode() {
        let code = ActionCode::new(MotionAction::PointerUp, 2).unwrap();
        assert_eq!(code.raw(), 0x0206);
        assert_eq!(ActionCode::new(MotionAction::Up, 9).unwrap().raw(), 1);
        assert!(ActionCode::new(MotionAction::PointerDown, 256).is_err());
    }

    #[test]
    fn unknown_action_bits_are_rejected() {
        assert_eq!(
            ActionCode::from_raw(0x07),
            Err(EventError::UnknownValue {
                what: "motion action",
                value: 7
            })
        );
    }

    #[test]
    fn frozen_action_values() {
        let all = [
            (MotionAction::Down, 0),
            (MotionAction::Up, 1),
            (MotionAction::Move, 2),
            (MotionAction::Cancel, 3),
            (MotionAction::Outside, 4),
            (MotionAction::PointerDown, 5),
            (MotionAction::PointerUp, 6),
        ];
        for (action, raw) in all {
            assert_eq!(i32::from(action), raw);
            assert_eq!(MotionAction::try_from(raw), Ok(action));
        }
        assert_eq!(ACTION_MASK, 0xff);
        assert_eq!(ACTION_POINTER_INDEX_MASK, 0xff00);
        assert_eq!(ACTION_POINTER_INDEX_SHIFT, 8);
    }

    #[test]
    fn edge_flag_bits() {
        assert_eq!(EdgeFlags::NONE.bits(), 0);
        assert_eq!(EdgeFlags::TOP.bits(), 0x1);
        assert_eq!(EdgeFlags::BOTTOM.bits(), 0x2);
        assert_eq!(EdgeFlags::LEFT.bits(), 0x4);
        assert_eq!(EdgeFlags::RIGHT.bits(), 0x8);
    }

    #[test]
    fn offset_applies_to_x_but_not_raw_x() {
        let ev = MotionEvent::builder(MotionAction::Down)
            .pointer(0, coords(100.0, 200.0))
            .offset(-10.0, -20.0)
            .build()
            .unwrap();
        assert_eq!(ev.x(0), Ok(90.0));
        assert_eq!(ev.y(0), Ok(180.0));
        assert_eq!(ev.raw_x(), 100.0);
        assert_eq!(ev.raw_y(), 200.0);

        let shifted = ev.offset_by(5.0, 5.0).unwrap();
        assert_eq!(shifted.x(0), Ok(95.0));
        assert_eq!(shifted.raw_x(), 100.0);
        // `ev` itself is unchanged.
        assert_eq!(ev.x(0), Ok(90.0));
    }

    #[test]
    fn offset_by_rejects_overflow_to_infinity() {
        let ev = MotionEvent::builder(MotionAction::Down)
            .pointer(0, coords(0.0, 0.0))
            .offset(f32::MAX, 0.0)
            .build()
            .unwrap();
        assert!(matches!(
            ev.offset_by(f32::MAX, 0.0),
            Err(EventError::Invalid(_))
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let nan_pointer = MotionEvent::builder(MotionAction::Down)
            .pointer(0, coords(f32::NAN, 0.0))
            .build();
        assert!(matches!(nan_pointer, Err(EventError::Invalid(_))));

        let inf_pressure = MotionEvent::builder(MotionAction::Down)
            .pointer(0, PointerCoords::new(0.0, 0.0, f32::INFINITY, 0.0))
            .build();
        assert!(inf_pressure.is_err());

        let bad_precision = MotionEvent::builder(MotionAction::Down)
            .pointer(0, coords(0.0, 0.0))
            .precision(f32::NAN, 1.0)
            .build();
        assert!(bad_precision.is_err());

        let bad_offset = MotionEvent::builder(MotionAction::Down)
            .pointer(0, coords(0.0, 0.0))
            .offset(0.0, f32::NEG_INFINITY)
            .build();
        assert!(bad_offset.is_err());

        let bad_history = MotionEvent::builder(MotionAction::Move)
            .times(0, 10)
            .pointer(0, coords(0.0, 0.0))
            .historical(5, vec![PointerCoords::new(0.0, 0.0, 0.5, f32::NAN)])
            .build();
        assert!(bad_history.is_err());
    }

    #[test]
    fn history_is_offset_and_indexed_oldest_first() {
        let ev = MotionEvent::builder(MotionAction::Move)
            .times(0, 300)
            .offset(1.0, 2.0)
            .pointer(4, coords(30.0, 30.0))
            .historical(100, vec![coords(10.0, 10.0)])
            .historical(200, vec![coords(20.0, 20.0)])
            .build()
            .unwrap();

        assert_eq!(ev.history_size(), 2);
        assert_eq!(ev.historical_event_time(0), Ok(100));
        assert_eq!(ev.historical_event_time(1), Ok(200));
        assert_eq!(ev.historical_x(0, 0), Ok(11.0));
        assert_eq!(ev.historical_y(0, 1), Ok(22.0));
        assert_eq!(ev.historical_pressure(0, 1), Ok(0.5));
        assert_eq!(ev.historical_size(0, 0), Ok(0.1));
        assert_eq!(
            ev.historical_x(0, 2),
            Err(EventError::IndexOutOfRange {
                kind: IndexKind::History,
                index: 2,
                count: 2
            })
        );
        assert_eq!(
            ev.historical_x(1, 0),
            Err(EventError::IndexOutOfRange {
                kind: IndexKind::Pointer,
                index: 1,
                count: 1
            })
        );
    }

    #[test]
    fn no_pointers_is_rejected() {
        let err = MotionEvent::builder(MotionAction::Down).build().unwrap_err();
        assert!(matches!(err, EventError::Invalid(_)));
    }

    #[test]
    fn history_on_non_move_is_rejected() {
        let err = MotionEvent::builder(MotionAction::Up)
            .times(0, 10)
            .pointer(0, coords(0.0, 0.0))
            .historical(5, vec![coords(0.0, 0.0)])
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn history_must_match_pointer_count() {
        let err = MotionEvent::builder(MotionAction::Move)
            .times(0, 10)
            .pointer(0, coords(0.0, 0.0))
            .pointer(1, coords(1.0, 1.0))
            .historical(5, vec![coords(0.0, 0.0)])
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn history_must_be_ordered() {
        let err = MotionEvent::builder(MotionAction::Move)
            .times(0, 10)
            .pointer(0, coords(0.0, 0.0))
            .historical(8, vec![coords(0.0, 0.0)])
            .historical(4, vec![coords(0.0, 0.0)])
            .build();
        assert!(err.is_err());

        let late = MotionEvent::builder(MotionAction::Move)
            .times(0, 10)
            .pointer(0, coords(0.0, 0.0))
            .historical(11, vec![coords(0.0, 0.0)])
            .build();
        assert!(late.is_err());
    }

    #[test]
    fn pointer_action_index_must_exist() {
        let code = ActionCode::new(MotionAction::PointerDown, 2).unwrap();
        let err = MotionEvent::builder(code)
            .pointer(0, coords(0.0, 0.0))
            .pointer(1, coords(1.0, 1.0))
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_pointer_ids_are_rejected() {
        let err = MotionEvent::builder(MotionAction::Down)
            .pointer(3, coords(0.0, 0.0))
            .pointer(3, coords(1.0, 1.0))
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn find_pointer_index_by_id() {
        let ev = MotionEvent::builder(MotionAction::Move)
            .pointer(7, coords(0.0, 0.0))
            .pointer(2, coords(1.0, 1.0))
            .build()
            .unwrap();
        assert_eq!(ev.find_pointer_index(2), Some(1));
        assert_eq!(ev.find_pointer_index(9), None);
    }
}
