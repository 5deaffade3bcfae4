//! Modifier (meta key) state.

use bitflags::bitflags;

bitflags! {
    /// Meta keys held while an event was generated.
    ///
    /// The `*_ON` bits are set when either side is pressed; the sided bits
    /// narrow that down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MetaState: i32 {
        const SHIFT_ON = 0x01;
        const ALT_ON = 0x02;
        const SYM_ON = 0x04;
        const ALT_LEFT_ON = 0x10;
        const ALT_RIGHT_ON = 0x20;
        const SHIFT_LEFT_ON = 0x40;
        const SHIFT_RIGHT_ON = 0x80;
    }
}

impl MetaState {
    /// No meta keys pressed.
    pub const NONE: MetaState = MetaState::empty();

    #[inline]
    pub fn is_shift_pressed(self) -> bool {
        self.intersects(MetaState::SHIFT_ON | MetaState::SHIFT_LEFT_ON | MetaState::SHIFT_RIGHT_ON)
    }

    #[inline]
    pub fn is_alt_pressed(self) -> bool {
        self.intersects(MetaState::ALT_ON | MetaState::ALT_LEFT_ON | MetaState::ALT_RIGHT_ON)
    }

    #[inline]
    pub fn is_sym_pressed(self) -> bool {
        self.contains(MetaState::SYM_ON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_bits_are_frozen() {
        assert_eq!(MetaState::NONE.bits(), 0);
        assert_eq!(MetaState::SHIFT_ON.bits(), 0x1);
        assert_eq!(MetaState::ALT_ON.bits(), 0x2);
        assert_eq!(MetaState::SYM_ON.bits(), 0x4);
        assert_eq!(MetaState::ALT_LEFT_ON.bits(), 0x10);
        assert_eq!(MetaState::ALT_RIGHT_ON.bits(), 0x20);
        assert_eq!(MetaState::SHIFT_LEFT_ON.bits(), 0x40);
        assert_eq!(MetaState::SHIFT_RIGHT_ON.bits(), 0x80);
    }

    #[test]
    fn sided_bits_count_as_pressed() {
        let meta = MetaState::SHIFT_ON | MetaState::SHIFT_RIGHT_ON;
        assert!(meta.is_shift_pressed());
        assert!(!meta.is_alt_pressed());
        assert!(MetaState::ALT_LEFT_ON.is_alt_pressed());
        assert!(!MetaState::NONE.is_sym_pressed());
    }
}
