use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::camera::input::InputState;
use crate::camera::spherical;
use crate::core::body::BodyHandle;
use crate::extensions::{lerp_vec2, lerp_vec3};
use crate::input::queue::InputEvent;

/// Camera navigation mode, derived from lock and pointer state each frame.
/// The three modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// No lock, pointer up: WASD-style translation.
    FreeFly,
    /// No lock, pointer down: orbit the look-at target.
    MouseLook,
    /// Locked onto a body: orbit and face it.
    ObjectLock,
}

/// The camera's ground truth: where it is and what point it faces.
/// Exclusively owned and mutated by the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Unit facing direction; `None` when position and target coincide.
    pub fn forward(&self) -> Option<Vec3> {
        let v = self.look_at - self.position;
        let len = v.length();
        if len < spherical::MIN_LENGTH {
            None
        } else {
            Some(v / len)
        }
    }
}

/// Tuning knobs for the rig. The defaults are the values the navigation
/// feel was tuned around; apps override selectively.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera position before any input arrives.
    pub home_position: Vec3,
    /// Free-fly translation speed, world units per second.
    pub base_speed: f32,
    /// Speed multiplier while the fast modifier is held.
    pub fast_multiplier: f32,
    /// Radians of rotation per pointer input unit.
    pub look_sensitivity: f32,
    /// Per-frame approach factor for mouse-look smoothing.
    pub rotation_smoothing: f32,
    /// Per-frame lerp factor while locked onto a body.
    pub lock_smoothing: f32,
    /// Wheel-delta to world-distance conversion.
    pub zoom_speed: f32,
    /// Orbit distance restored when a lock is released.
    pub default_distance: f32,
    /// Closest approach outside of a lock.
    pub default_min_distance: f32,
    /// Safe viewing distance is the body radius times this factor.
    pub safe_distance_factor: f32,
    /// How far in front of the camera the look-at target lands on unlock.
    pub look_distance: f32,
    /// Pause toggles arriving within this window (ms) are rejected.
    pub toggle_debounce_ms: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home_position: Vec3::new(-90.0, 140.0, 140.0),
            base_speed: 60.0,
            fast_multiplier: 2.0,
            look_sensitivity: 0.005,
            rotation_smoothing: 0.05,
            lock_smoothing: 0.1,
            zoom_speed: 0.5,
            default_distance: 120.0,
            default_min_distance: 10.0,
            safe_distance_factor: 4.0,
            look_distance: 100.0,
            toggle_debounce_ms: 100.0,
        }
    }
}

type PauseObserver = Box<dyn FnMut(bool)>;

/// Resolves continuous input plus discrete lock requests into one camera
/// pose per frame, across the three navigation modes.
///
/// Raw events land through `apply` (lightweight field writes only); the
/// per-frame `update` is the sole reader and transformer of that state, so
/// no locking discipline is needed anywhere in the rig.
pub struct CameraRig {
    config: CameraConfig,
    pose: CameraPose,
    input: InputState,
    /// At most one active lock; engaging a new one clears the old.
    lock: Option<String>,
    bodies: HashMap<String, BodyHandle>,
    /// Body id to minimum safe viewing distance, fixed at registration.
    safe_distance: HashMap<String, f32>,
    camera_distance: f32,
    min_distance: f32,
    /// Mirror of the last toggled pause state, for observer payloads.
    paused: bool,
    pause_observers: Vec<PauseObserver>,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let pose = CameraPose {
            position: config.home_position,
            look_at: Vec3::ZERO,
        };
        Self {
            pose,
            input: InputState::default(),
            lock: None,
            bodies: HashMap::new(),
            safe_distance: HashMap::new(),
            camera_distance: config.default_distance,
            min_distance: config.default_min_distance,
            paused: false,
            pause_observers: Vec::new(),
            config,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn mode(&self) -> NavigationMode {
        if self.lock.is_some() {
            NavigationMode::ObjectLock
        } else if self.input.pointer_down {
            NavigationMode::MouseLook
        } else {
            NavigationMode::FreeFly
        }
    }

    pub fn locked_body(&self) -> Option<&str> {
        self.lock.as_deref()
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Track a body for lock targeting. Its safe viewing distance is
    /// computed here, once, from the radius.
    pub fn register_body(&mut self, id: impl Into<String>, handle: BodyHandle) {
        let id = id.into();
        let safe = handle.borrow().radius() * self.config.safe_distance_factor;
        self.safe_distance.insert(id.clone(), safe);
        self.bodies.insert(id, handle);
    }

    /// Forget a body. Releases the lock if it was the locked target.
    pub fn deregister_body(&mut self, id: &str) {
        self.bodies.remove(id);
        self.safe_distance.remove(id);
        if self.lock.as_deref() == Some(id) {
            self.clear_lock();
        }
    }

    /// Fold one raw input event into the input state. Nothing heavier than
    /// field writes happens here; resolution waits for `update`.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.input.pointer_down = true;
                self.input.pointer_last = Vec2::new(x, y);
                // Entering mouse-look: reconcile the rotation angles with
                // wherever the camera currently sits, or the first drag
                // frame would snap it to a stale orientation.
                if self.lock.is_none() {
                    self.sync_rotation_to_pose();
                }
            }
            InputEvent::PointerMove { x, y } => {
                if self.input.pointer_down {
                    let pos = Vec2::new(x, y);
                    let delta = pos - self.input.pointer_last;
                    self.input.pointer_last = pos;
                    let s = self.config.look_sensitivity;
                    self.input.rotation_target.y += delta.x * s;
                    self.input.rotation_target.x =
                        (self.input.rotation_target.x + delta.y * s).clamp(-FRAC_PI_2, FRAC_PI_2);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.input.pointer_down = false;
            }
            InputEvent::KeyDown { key_code } => {
                self.input.keys.set_key(key_code, true);
            }
            InputEvent::KeyUp { key_code } => {
                self.input.keys.set_key(key_code, false);
            }
            InputEvent::Wheel { delta } => {
                self.camera_distance =
                    (self.camera_distance + delta * self.config.zoom_speed).max(self.min_distance);
            }
            InputEvent::Custom { .. } => {}
        }
    }

    /// Resolve the current mode into a camera pose. Called once per host
    /// frame, unconditionally; navigation keeps working while the
    /// simulation is paused.
    pub fn update(&mut self, dt: f32) {
        match self.mode() {
            NavigationMode::ObjectLock => self.update_locked(),
            NavigationMode::MouseLook => self.update_mouse_look(),
            NavigationMode::FreeFly => self.update_free_fly(dt),
        }
    }

    /// Toggle the lock on `id`: on if off (clearing any other lock), off if
    /// already on. Unknown ids are ignored.
    pub fn toggle_lock(&mut self, id: &str) {
        if self.lock.as_deref() == Some(id) {
            self.clear_lock();
            return;
        }
        let Some(safe) = self.safe_distance.get(id).copied() else {
            return;
        };
        self.lock = Some(id.to_string());
        self.min_distance = safe;
        self.camera_distance = safe;
        log::debug!("camera locked onto {id}");
    }

    /// Release the active lock, if any, and aim the camera at a point a
    /// fixed distance ahead so free navigation resumes without a snap.
    pub fn clear_lock(&mut self) {
        if self.lock.take().is_none() {
            return;
        }
        self.min_distance = self.config.default_min_distance;
        self.camera_distance = self.config.default_distance;
        if let Some(forward) = self.pose.forward() {
            self.pose.look_at = self.pose.position + forward * self.config.look_distance;
        }
        log::debug!("camera lock released");
    }

    /// Register a pause-toggle listener. Listeners run in registration
    /// order, exactly once per accepted toggle.
    pub fn add_pause_observer(&mut self, observer: impl FnMut(bool) + 'static) {
        self.pause_observers.push(Box::new(observer));
    }

    /// Request a pause toggle at host time `now_ms`. Requests inside the
    /// debounce window of the previous accepted one are rejected (duplicate
    /// input events). Returns the new pause state when accepted.
    pub fn request_pause_toggle(&mut self, now_ms: f64) -> Option<bool> {
        if now_ms - self.input.last_toggle_ms < self.config.toggle_debounce_ms {
            return None;
        }
        self.input.last_toggle_ms = now_ms;
        self.paused = !self.paused;
        for observer in &mut self.pause_observers {
            observer(self.paused);
        }
        Some(self.paused)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    // ── Mode resolution ──────────────────────────────────────────────────

    fn update_free_fly(&mut self, dt: f32) {
        let keys = self.input.keys;
        if !keys.any() {
            return;
        }
        let Some(forward) = self.pose.forward() else {
            return;
        };
        let mut step = Vec3::ZERO;
        if keys.forward {
            step += forward;
        }
        if keys.back {
            step -= forward;
        }
        let right = forward.cross(Vec3::Y);
        if right.length() > spherical::MIN_LENGTH {
            let right = right.normalize();
            if keys.right {
                step += right;
            }
            if keys.left {
                step -= right;
            }
        }
        if keys.up {
            step += Vec3::Y;
        }
        if keys.down {
            step -= Vec3::Y;
        }
        if step == Vec3::ZERO {
            return;
        }
        let mut speed = self.config.base_speed;
        if keys.fast {
            speed *= self.config.fast_multiplier;
        }
        let delta = step * speed * dt;
        // Move the look-at target by the same delta so orientation is
        // preserved across the move.
        self.pose.position += delta;
        self.pose.look_at += delta;
    }

    fn update_mouse_look(&mut self) {
        self.input.rotation_current = lerp_vec2(
            self.input.rotation_current,
            self.input.rotation_target,
            self.config.rotation_smoothing,
        );
        let offset = self.pose.position - self.pose.look_at;
        let dist = offset.length();
        if dist < spherical::MIN_LENGTH {
            return;
        }
        let rot = self.input.rotation_current;
        let dir = spherical::direction(FRAC_PI_2 - rot.x, rot.y);
        self.pose.position = self.pose.look_at + dir * dist;
    }

    fn update_locked(&mut self) {
        let Some(id) = self.lock.as_deref() else {
            return;
        };
        let Some(handle) = self.bodies.get(id) else {
            return;
        };
        let center = handle.borrow().position();
        let dist = self.camera_distance.max(self.min_distance);
        let rot = self.input.rotation_target;
        let dir = spherical::direction(FRAC_PI_2 - rot.x, rot.y);
        let desired = center + dir * dist;
        let t = self.config.lock_smoothing;
        self.pose.position = lerp_vec3(self.pose.position, desired, t);
        self.pose.look_at = lerp_vec3(self.pose.look_at, center, t);
    }

    /// Derive (pitch, yaw) from the current pose so mouse-look picks up
    /// from the camera's actual orientation. Degenerate poses are skipped.
    fn sync_rotation_to_pose(&mut self) {
        if let Some((phi, theta)) = spherical::angles_from_offset(self.pose.position - self.pose.look_at)
        {
            let rotation = Vec2::new(FRAC_PI_2 - phi, theta);
            self.input.rotation_target = rotation;
            self.input.rotation_current = rotation;
        }
    }
}
