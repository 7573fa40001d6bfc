//! # Camera Controls
//!
//! Orbit controls are owned by the host; the session only toggles them so a
//! drag that starts on the sculpture does not also orbit the camera.

/// Something that can be switched on and off by the session.
pub trait Controls {
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// Enabled flag mirrored onto the host's orbit controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitControls {
    enabled: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Controls for OrbitControls {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
