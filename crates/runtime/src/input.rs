//! Per-tick input snapshot.
//!
//! The host samples its own input system once per frame and hands the result
//! to the encounter as plain booleans: edge-triggered ("pressed this tick")
//! and level-triggered ("held this tick") flags per named action.

use encounter_core::DefenseInput;

bitflags::bitflags! {
    /// Named defensive actions the encounter reacts to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InputFlags: u8 {
        const UPPER_DEFEND = 1 << 0;
        const LOWER_DEFEND = 1 << 1;
    }
}

/// Input state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Actions that went down this tick.
    pub pressed: InputFlags,
    /// Actions held down this tick (a press is also held).
    pub held: InputFlags,
}

impl InputFrame {
    /// A frame with no input at all.
    pub const fn empty() -> Self {
        Self {
            pressed: InputFlags::empty(),
            held: InputFlags::empty(),
        }
    }

    /// A frame where the given actions went down this tick.
    pub fn press(flags: InputFlags) -> Self {
        Self {
            pressed: flags,
            held: flags,
        }
    }

    /// A frame where the given actions are held from an earlier tick.
    pub fn hold(flags: InputFlags) -> Self {
        Self {
            pressed: InputFlags::empty(),
            held: flags,
        }
    }

    /// Defensive input against an upper or lower strike.
    pub fn defense_for(&self, is_upper: bool) -> DefenseInput {
        let flag = if is_upper {
            InputFlags::UPPER_DEFEND
        } else {
            InputFlags::LOWER_DEFEND
        };
        DefenseInput {
            timed: self.pressed.contains(flag),
            held: self.held.contains(flag),
        }
    }

    /// True when either defend action went down this tick (dodge timing).
    pub fn any_defend_pressed(&self) -> bool {
        self.pressed
            .intersects(InputFlags::UPPER_DEFEND | InputFlags::LOWER_DEFEND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defense_maps_to_the_matching_guard() {
        let frame = InputFrame::press(InputFlags::UPPER_DEFEND);
        assert!(frame.defense_for(true).timed);
        assert!(frame.defense_for(true).held);
        assert!(!frame.defense_for(false).timed);
        assert!(!frame.defense_for(false).held);
    }

    #[test]
    fn held_is_not_timed() {
        let frame = InputFrame::hold(InputFlags::LOWER_DEFEND);
        let defense = frame.defense_for(false);
        assert!(!defense.timed);
        assert!(defense.held);
    }

    #[test]
    fn any_defend_pressed_covers_both_guards() {
        assert!(InputFrame::press(InputFlags::LOWER_DEFEND).any_defend_pressed());
        assert!(InputFrame::press(InputFlags::UPPER_DEFEND).any_defend_pressed());
        assert!(!InputFrame::hold(InputFlags::UPPER_DEFEND).any_defend_pressed());
        assert!(!InputFrame::empty().any_defend_pressed());
    }
}
