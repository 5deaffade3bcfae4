#![cfg(feature = "ffi")]

use eventview::ffi::*;
use eventview::{
    ActionCode, DeviceClass, InputEvent, KeyAction, KeyEvent, KeyFlags, MetaState, MotionAction,
    MotionEvent, PointerCoords,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("eventview=debug"))
        .with_test_writer()
        .try_init();
}

fn key() -> InputEvent {
    KeyEvent::builder(KeyAction::Up, 66)
        .device_id(3)
        .source(DeviceClass::KEYBOARD)
        .flags(KeyFlags::CANCELED | KeyFlags::VIRTUAL_HARD_KEY)
        .scan_code(28)
        .meta_state(MetaState::SHIFT_ON)
        .repeat_count(1)
        .times(100, 180)
        .build()
        .unwrap()
        .into()
}

fn swipe() -> InputEvent {
    MotionEvent::builder(ActionCode::new(MotionAction::PointerUp, 1).unwrap())
        .device_id(8)
        .source(DeviceClass::TRACKBALL)
        .times(10, 40)
        .offset(2.0, 3.0)
        .precision(0.5, 0.5)
        .pointer(4, PointerCoords::new(10.0, 20.0, 0.9, 0.3))
        .pointer(6, PointerCoords::new(30.0, 40.0, 0.4, 0.1))
        .build()
        .unwrap()
        .into()
}

fn moving() -> InputEvent {
    MotionEvent::builder(MotionAction::Move)
        .times(0, 30)
        .offset(1.0, 1.0)
        .pointer(0, PointerCoords::new(3.0, 3.0, 0.3, 0.3))
        .historical(10, vec![PointerCoords::new(1.0, 1.0, 0.1, 0.1)])
        .historical(20, vec![PointerCoords::new(2.0, 2.0, 0.2, 0.2)])
        .build()
        .unwrap()
        .into()
}

#[test]
fn key_accessors_over_the_c_abi() {
    let ev = key();
    let p: *const input_event_t = &ev;
    unsafe {
        assert_eq!(input_event_get_type(p), INPUT_EVENT_TYPE_KEY);
        assert_eq!(input_event_get_device_id(p), 3);
        assert_eq!(input_event_get_nature(p), INPUT_EVENT_NATURE_KEY);
        assert_eq!(key_event_get_action(p), KEY_EVENT_ACTION_UP);
        assert_eq!(
            key_event_get_flags(p),
            KEY_EVENT_FLAG_CANCELED | KEY_EVENT_FLAG_VIRTUAL_HARD_KEY
        );
        assert_eq!(key_event_get_key_code(p), 66);
        assert_eq!(key_event_get_scan_code(p), 28);
        assert_eq!(key_event_get_meta_state(p), META_SHIFT_ON);
        assert_eq!(key_event_get_repeat_count(p), 1);
        assert_eq!(key_event_get_down_time(p), 100);
        assert_eq!(key_event_get_event_time(p), 180);
    }
}

#[test]
fn motion_accessors_over_the_c_abi() {
    let ev = swipe();
    let p: *const input_event_t = &ev;
    unsafe {
        assert_eq!(input_event_get_type(p), INPUT_EVENT_TYPE_MOTION);
        assert_eq!(input_event_get_nature(p), INPUT_EVENT_NATURE_TRACKBALL);

        let action = motion_event_get_action(p);
        assert_eq!(action & MOTION_EVENT_ACTION_MASK, MOTION_EVENT_ACTION_POINTER_UP);
        assert_eq!(
            (action & MOTION_EVENT_ACTION_POINTER_INDEX_MASK)
                >> MOTION_EVENT_ACTION_POINTER_INDEX_SHIFT,
            1
        );

        assert_eq!(motion_event_get_meta_state(p), META_NONE);
        assert_eq!(motion_event_get_edge_flags(p), MOTION_EVENT_EDGE_FLAG_NONE);
        assert_eq!(motion_event_get_down_time(p), 10);
        assert_eq!(motion_event_get_event_time(p), 40);
        assert_eq!(motion_event_get_x_precision(p), 0.5);
        assert_eq!(motion_event_get_y_precision(p), 0.5);
        assert_eq!(motion_event_get_pointer_count(p), 2);
        assert_eq!(motion_event_get_pointer_id(p, 1), 6);
        assert_eq!(motion_event_get_raw_x(p), 10.0);
        assert_eq!(motion_event_get_raw_y(p), 20.0);
        assert_eq!(motion_event_get_x(p, 1), 32.0);
        assert_eq!(motion_event_get_y(p, 1), 43.0);
        assert_eq!(motion_event_get_pressure(p, 0), 0.9);
        assert_eq!(motion_event_get_size(p, 0), 0.3);
        assert_eq!(motion_event_get_history_size(p), 0);
    }
}

#[test]
fn historical_accessors_over_the_c_abi() {
    let ev = moving();
    let p: *const input_event_t = &ev;
    unsafe {
        assert_eq!(motion_event_get_history_size(p), 2);
        assert_eq!(motion_event_get_historical_event_time(p, 0), 10);
        assert_eq!(motion_event_get_historical_event_time(p, 1), 20);
        assert_eq!(motion_event_get_historical_x(p, 0, 0), 2.0);
        assert_eq!(motion_event_get_historical_y(p, 0, 1), 3.0);
        assert_eq!(motion_event_get_historical_pressure(p, 0, 1), 0.2);
        assert_eq!(motion_event_get_historical_size(p, 0, 0), 0.1);
    }
}

#[test]
fn violations_read_as_zero() {
    init_logging();
    let key = key();
    let motion = swipe();
    let k: *const input_event_t = &key;
    let m: *const input_event_t = &motion;
    unsafe {
        assert_eq!(motion_event_get_pointer_count(k), 0);
        assert_eq!(motion_event_get_x(k, 0), 0.0);
        assert_eq!(key_event_get_key_code(m), 0);
        assert_eq!(key_event_get_down_time(m), 0);
        assert_eq!(motion_event_get_pointer_id(m, 5), 0);
        assert_eq!(motion_event_get_historical_x(m, 0, 0), 0.0);
        assert_eq!(motion_event_get_historical_event_time(m, 3), 0);
        assert_eq!(input_event_get_device_id(std::ptr::null()), 0);
    }
}
