//! eventview — typed, read-only access to key and motion input events.
//!
//! Events are produced elsewhere (a platform input library, a test script, a
//! [`VirtualSource`]) and only read here. [`InputEvent`] is the façade: a tagged
//! union whose accessors fail with [`EventError::WrongVariant`] or
//! [`EventError::IndexOutOfRange`] instead of reading garbage. The [`ffi`] module
//! exposes the same accessors under their frozen C names.
//!
//! All numeric constants (device classes, meta state, actions, flags) keep
//! their frozen values; see [`DeviceClass`], [`MetaState`], [`KeyFlags`],
//! [`EdgeFlags`] and [`MotionAction`].

pub mod device;
pub mod error;
pub mod event;
#[cfg(feature = "ffi")]
#[cfg_attr(docsrs, doc(cfg(feature = "ffi")))]
pub mod ffi;
pub mod fixture;
pub mod key;
pub mod meta;
pub mod motion;
pub mod virtual_source;

pub use device::*;
pub use error::{EventError, FixtureError, IndexKind};
pub use event::*;
pub use fixture::EventScript;
pub use key::*;
pub use meta::*;
pub use motion::*;
pub use virtual_source::*;
