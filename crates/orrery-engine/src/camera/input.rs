use glam::Vec2;

// Browser key codes for camera movement.
pub const KEY_SHIFT: u32 = 16;
pub const KEY_A: u32 = 65;
pub const KEY_D: u32 = 68;
pub const KEY_F: u32 = 70;
pub const KEY_R: u32 = 82;
pub const KEY_S: u32 = 83;
pub const KEY_W: u32 = 87;

/// Which movement keys are currently held. WASD translates, R/F moves along
/// world-up, shift is the fast modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fast: bool,
}

impl MovementKeys {
    /// Record a key transition. Returns false for key codes that do not
    /// map to a movement key.
    pub fn set_key(&mut self, key_code: u32, pressed: bool) -> bool {
        match key_code {
            KEY_W => self.forward = pressed,
            KEY_S => self.back = pressed,
            KEY_A => self.left = pressed,
            KEY_D => self.right = pressed,
            KEY_R => self.up = pressed,
            KEY_F => self.down = pressed,
            KEY_SHIFT => self.fast = pressed,
            _ => return false,
        }
        true
    }

    /// Any translation key held (the fast modifier alone moves nothing).
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Transient camera input state. Rebuilt from raw events by the rig's
/// event adapter; `CameraRig::update` only ever reads it.
#[derive(Debug, Clone)]
pub struct InputState {
    pub pointer_down: bool,
    /// Last pointer position seen, screen pixels.
    pub pointer_last: Vec2,
    /// Target (pitch, yaw) the camera eases toward.
    pub rotation_target: Vec2,
    /// Smoothed (pitch, yaw) actually applied this frame.
    pub rotation_current: Vec2,
    pub keys: MovementKeys,
    /// Host timestamp (ms) of the last accepted pause toggle.
    pub last_toggle_ms: f64,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_down: false,
            pointer_last: Vec2::ZERO,
            rotation_target: Vec2::ZERO,
            rotation_current: Vec2::ZERO,
            keys: MovementKeys::default(),
            // Far in the past so the very first toggle is never debounced.
            last_toggle_ms: f64::NEG_INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_and_release() {
        let mut keys = MovementKeys::default();
        assert!(keys.set_key(KEY_W, true));
        assert!(keys.set_key(KEY_SHIFT, true));
        assert!(keys.forward && keys.fast);
        assert!(keys.any());

        assert!(keys.set_key(KEY_W, false));
        assert!(!keys.any(), "fast alone is not movement");
    }

    #[test]
    fn unmapped_key_codes_are_reported() {
        let mut keys = MovementKeys::default();
        assert!(!keys.set_key(999, true));
        assert_eq!(keys, MovementKeys::default());
    }

    #[test]
    fn first_toggle_is_never_debounced() {
        let state = InputState::default();
        assert!(0.0 - state.last_toggle_ms > 100.0);
    }
}
