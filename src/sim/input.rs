//! Per-frame input snapshot
//!
//! The backend polls its devices once per frame and hands the result to the
//! simulation; nothing below this point talks to a device.

use glam::Vec2;

use crate::consts::*;

/// Key and cursor state sampled once per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Move forward / accelerate
    pub forward: bool,
    /// Move back / reverse
    pub back: bool,
    /// Strafe / steer left
    pub left: bool,
    /// Strafe / steer right
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
    /// Enter or leave the drivable vehicle
    pub interact: bool,
    /// Restart the session
    pub reset: bool,
    pub quit: bool,
    /// Cursor position in window pixels, if the backend reported one
    pub cursor: Option<Vec2>,
}

/// Turns absolute cursor positions into yaw/pitch changes
#[derive(Debug, Clone)]
pub struct LookTracker {
    last: Option<Vec2>,
    sensitivity: f32,
}

impl LookTracker {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            last: None,
            sensitivity,
        }
    }

    /// Forget the previous sample so the next one does not cause a jump
    pub fn reseed(&mut self) {
        self.last = None;
    }

    /// Apply a cursor sample to `yaw`/`pitch` (degrees)
    ///
    /// Screen y grows downward, so moving the cursor up pitches up. Pitch is
    /// clamped to +/- PITCH_LIMIT here; nothing downstream clamps it again.
    pub fn apply(&mut self, cursor: Vec2, yaw: &mut f32, pitch: &mut f32) {
        let last = self.last.replace(cursor).unwrap_or(cursor);
        let dx = cursor.x - last.x;
        let dy = last.y - cursor.y;

        *yaw += dx * self.sensitivity;
        *pitch = (*pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

impl Default for LookTracker {
    fn default() -> Self {
        Self::new(MOUSE_SENSITIVITY)
    }
}
