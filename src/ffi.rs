//! C ABI.
//!
//! Exposes the accessor set under its frozen C names and signatures. The opaque
//! `input_event_t` handle is a pointer to an [`InputEvent`] owned by the caller;
//! no function here allocates, frees or retains it.
//!
//! ## Contract violations
//! Passing a null handle, calling a key accessor on a motion event (or the other
//! way round), or indexing past the pointer/history count returns `0` / `0.0`
//! and emits a `warn` event through `tracing`. Use the Rust API when you need to
//! tell a real zero from a failure.
//!
//! Historical accessors take `(pointer_index, history_index)`, in that order.
//! Every function takes a `*const` handle; none of them mutate the event.

#![allow(non_camel_case_types)]

use crate::device::{DeviceClass, KeyState};
use crate::error::Result;
use crate::event::{EventNature, EventType, InputEvent};
use crate::key::{KeyAction, KeyFlags};
use crate::meta::MetaState;
use crate::motion::{
    EdgeFlags, MotionAction, ACTION_MASK, ACTION_POINTER_INDEX_MASK, ACTION_POINTER_INDEX_SHIFT,
};

/// Opaque event handle as seen from C.
pub type input_event_t = InputEvent;

pub const INPUT_DEVICE_CLASS_KEYBOARD: i32 = DeviceClass::KEYBOARD.bits();
pub const INPUT_DEVICE_CLASS_ALPHAKEY: i32 = DeviceClass::ALPHAKEY.bits();
pub const INPUT_DEVICE_CLASS_TOUCHSCREEN: i32 = DeviceClass::TOUCHSCREEN.bits();
pub const INPUT_DEVICE_CLASS_TRACKBALL: i32 = DeviceClass::TRACKBALL.bits();
pub const INPUT_DEVICE_CLASS_TOUCHSCREEN_MT: i32 = DeviceClass::TOUCHSCREEN_MT.bits();
pub const INPUT_DEVICE_CLASS_DPAD: i32 = DeviceClass::DPAD.bits();

pub const KEY_STATE_UNKNOWN: i32 = KeyState::Unknown as i32;
pub const KEY_STATE_UP: i32 = KeyState::Up as i32;
pub const KEY_STATE_DOWN: i32 = KeyState::Down as i32;
pub const KEY_STATE_VIRTUAL: i32 = KeyState::Virtual as i32;

pub const META_NONE: i32 = MetaState::NONE.bits();
pub const META_SHIFT_ON: i32 = MetaState::SHIFT_ON.bits();
pub const META_ALT_ON: i32 = MetaState::ALT_ON.bits();
pub const META_SYM_ON: i32 = MetaState::SYM_ON.bits();
pub const META_ALT_LEFT_ON: i32 = MetaState::ALT_LEFT_ON.bits();
pub const META_ALT_RIGHT_ON: i32 = MetaState::ALT_RIGHT_ON.bits();
pub const META_SHIFT_LEFT_ON: i32 = MetaState::SHIFT_LEFT_ON.bits();
pub const META_SHIFT_RIGHT_ON: i32 = MetaState::SHIFT_RIGHT_ON.bits();

pub const INPUT_EVENT_TYPE_KEY: i32 = EventType::Key as i32;
pub const INPUT_EVENT_TYPE_MOTION: i32 = EventType::Motion as i32;

pub const INPUT_EVENT_NATURE_KEY: i32 = EventNature::Key as i32;
pub const INPUT_EVENT_NATURE_TOUCH: i32 = EventNature::Touch as i32;
pub const INPUT_EVENT_NATURE_TRACKBALL: i32 = EventNature::Trackball as i32;

pub const KEY_EVENT_ACTION_DOWN: i32 = KeyAction::Down as i32;
pub const KEY_EVENT_ACTION_UP: i32 = KeyAction::Up as i32;
pub const KEY_EVENT_ACTION_MULTIPLE: i32 = KeyAction::Multiple as i32;

pub const KEY_EVENT_FLAG_WOKE_HERE: i32 = KeyFlags::WOKE_HERE.bits();
pub const KEY_EVENT_FLAG_SOFT_KEYBOARD: i32 = KeyFlags::SOFT_KEYBOARD.bits();
pub const KEY_EVENT_FLAG_KEEP_TOUCH_MODE: i32 = KeyFlags::KEEP_TOUCH_MODE.bits();
pub const KEY_EVENT_FLAG_FROM_SYSTEM: i32 = KeyFlags::FROM_SYSTEM.bits();
pub const KEY_EVENT_FLAG_EDITOR_ACTION: i32 = KeyFlags::EDITOR_ACTION.bits();
pub const KEY_EVENT_FLAG_CANCELED: i32 = KeyFlags::CANCELED.bits();
pub const KEY_EVENT_FLAG_VIRTUAL_HARD_KEY: i32 = KeyFlags::VIRTUAL_HARD_KEY.bits();
pub const KEY_EVENT_FLAG_LONG_PRESS: i32 = KeyFlags::LONG_PRESS.bits();
pub const KEY_EVENT_FLAG_CANCELED_LONG_PRESS: i32 = KeyFlags::CANCELED_LONG_PRESS.bits();
pub const KEY_EVENT_FLAG_TRACKING: i32 = KeyFlags::TRACKING.bits();

pub const MOTION_EVENT_ACTION_POINTER_INDEX_SHIFT: i32 = ACTION_POINTER_INDEX_SHIFT;
pub const MOTION_EVENT_ACTION_MASK: i32 = ACTION_MASK;
pub const MOTION_EVENT_ACTION_POINTER_INDEX_MASK: i32 = ACTION_POINTER_INDEX_MASK;
pub const MOTION_EVENT_ACTION_DOWN: i32 = MotionAction::Down as i32;
pub const MOTION_EVENT_ACTION_UP: i32 = MotionAction::Up as i32;
pub const MOTION_EVENT_ACTION_MOVE: i32 = MotionAction::Move as i32;
pub const MOTION_EVENT_ACTION_CANCEL: i32 = MotionAction::Cancel as i32;
pub const MOTION_EVENT_ACTION_OUTSIDE: i32 = MotionAction::Outside as i32;
pub const MOTION_EVENT_ACTION_POINTER_DOWN: i32 = MotionAction::PointerDown as i32;
pub const MOTION_EVENT_ACTION_POINTER_UP: i32 = MotionAction::PointerUp as i32;

pub const MOTION_EVENT_EDGE_FLAG_NONE: i32 = EdgeFlags::NONE.bits();
pub const MOTION_EVENT_EDGE_FLAG_TOP: i32 = EdgeFlags::TOP.bits();
pub const MOTION_EVENT_EDGE_FLAG_BOTTOM: i32 = EdgeFlags::BOTTOM.bits();
pub const MOTION_EVENT_EDGE_FLAG_LEFT: i32 = EdgeFlags::LEFT.bits();
pub const MOTION_EVENT_EDGE_FLAG_RIGHT: i32 = EdgeFlags::RIGHT.bits();

/// Borrow the handle for one call and flatten failures to `T::default()`.
///
/// # Safety
/// `event` must be null or point to a live `InputEvent` for the duration of the call.
#[inline]
unsafe fn read<T: Default>(
    event: *const input_event_t,
    op: &'static str,
    f: impl FnOnce(&InputEvent) -> Result<T>,
) -> T {
    let Some(ev) = event.as_ref() else {
        tracing::warn!(op, "null input event handle");
        return T::default();
    };
    match f(ev) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(op, %err, "input event contract violation");
            T::default()
        }
    }
}

// Common.

/// # Safety
/// `event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn input_event_get_type(event: *const input_event_t) -> i32 {
    read(event, "input_event_get_type", |e| Ok(e.event_type().into()))
}

/// # Safety
/// `event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn input_event_get_device_id(event: *const input_event_t) -> i32 {
    read(event, "input_event_get_device_id", |e| Ok(e.device_id().get()))
}

/// # Safety
/// `event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn input_event_get_nature(event: *const input_event_t) -> i32 {
    read(event, "input_event_get_nature", |e| Ok(e.nature().into()))
}

// Key events.

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_action(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_action", |e| {
        Ok(e.key_action()?.into())
    })
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_flags(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_flags", |e| Ok(e.key_flags()?.bits()))
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_key_code(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_key_code", InputEvent::key_code)
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_scan_code(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_scan_code", InputEvent::scan_code)
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_meta_state(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_meta_state", |e| {
        Ok(e.key()?.meta_state().bits())
    })
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_repeat_count(key_event: *const input_event_t) -> i32 {
    read(key_event, "key_event_get_repeat_count", InputEvent::repeat_count)
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_down_time(key_event: *const input_event_t) -> i64 {
    read(key_event, "key_event_get_down_time", |e| Ok(e.key()?.down_time()))
}

/// # Safety
/// `key_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn key_event_get_event_time(key_event: *const input_event_t) -> i64 {
    read(key_event, "key_event_get_event_time", |e| {
        Ok(e.key()?.event_time())
    })
}

// Motion events.

/// Combined action code; decode with `MOTION_EVENT_ACTION_MASK` and
/// `MOTION_EVENT_ACTION_POINTER_INDEX_MASK`.
///
/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_action(motion_event: *const input_event_t) -> i32 {
    read(motion_event, "motion_event_get_action", |e| {
        Ok(e.action_code()?.raw())
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_meta_state(motion_event: *const input_event_t) -> i32 {
    read(motion_event, "motion_event_get_meta_state", |e| {
        Ok(e.motion()?.meta_state().bits())
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_edge_flags(motion_event: *const input_event_t) -> i32 {
    read(motion_event, "motion_event_get_edge_flags", |e| {
        Ok(e.edge_flags()?.bits())
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_down_time(motion_event: *const input_event_t) -> i64 {
    read(motion_event, "motion_event_get_down_time", |e| {
        Ok(e.motion()?.down_time())
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_event_time(motion_event: *const input_event_t) -> i64 {
    read(motion_event, "motion_event_get_event_time", |e| {
        Ok(e.motion()?.event_time())
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_x_precision(motion_event: *const input_event_t) -> f32 {
    read(motion_event, "motion_event_get_x_precision", InputEvent::x_precision)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_y_precision(motion_event: *const input_event_t) -> f32 {
    read(motion_event, "motion_event_get_y_precision", InputEvent::y_precision)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_pointer_count(
    motion_event: *const input_event_t,
) -> usize {
    read(motion_event, "motion_event_get_pointer_count", InputEvent::pointer_count)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_pointer_id(
    motion_event: *const input_event_t,
    pointer_index: usize,
) -> i32 {
    read(motion_event, "motion_event_get_pointer_id", |e| {
        e.pointer_id(pointer_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_raw_x(motion_event: *const input_event_t) -> f32 {
    read(motion_event, "motion_event_get_raw_x", InputEvent::raw_x)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_raw_y(motion_event: *const input_event_t) -> f32 {
    read(motion_event, "motion_event_get_raw_y", InputEvent::raw_y)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_x(
    motion_event: *const input_event_t,
    pointer_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_x", |e| e.x(pointer_index))
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_y(
    motion_event: *const input_event_t,
    pointer_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_y", |e| e.y(pointer_index))
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_pressure(
    motion_event: *const input_event_t,
    pointer_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_pressure", |e| {
        e.pressure(pointer_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_size(
    motion_event: *const input_event_t,
    pointer_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_size", |e| e.size(pointer_index))
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_history_size(
    motion_event: *const input_event_t,
) -> usize {
    read(motion_event, "motion_event_get_history_size", InputEvent::history_size)
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_historical_event_time(
    motion_event: *const input_event_t,
    history_index: usize,
) -> i64 {
    read(motion_event, "motion_event_get_historical_event_time", |e| {
        e.historical_event_time(history_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_historical_x(
    motion_event: *const input_event_t,
    pointer_index: usize,
    history_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_historical_x", |e| {
        e.historical_x(pointer_index, history_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_historical_y(
    motion_event: *const input_event_t,
    pointer_index: usize,
    history_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_historical_y", |e| {
        e.historical_y(pointer_index, history_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_historical_pressure(
    motion_event: *const input_event_t,
    pointer_index: usize,
    history_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_historical_pressure", |e| {
        e.historical_pressure(pointer_index, history_index)
    })
}

/// # Safety
/// `motion_event` must be null or point to a live event.
#[no_mangle]
pub unsafe extern "C" fn motion_event_get_historical_size(
    motion_event: *const input_event_t,
    pointer_index: usize,
    history_index: usize,
) -> f32 {
    read(motion_event, "motion_event_get_historical_size", |e| {
        e.historical_size(pointer_index, history_index)
    })
}
