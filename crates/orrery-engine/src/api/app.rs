use glam::Vec3;

use crate::api::types::SceneEvent;
use crate::assets::manifest::SceneManifest;
use crate::camera::rig::{CameraConfig, CameraRig};
use crate::core::body::BodyHandle;
use crate::core::registry::OrbitalParams;
use crate::input::queue::InputQueue;
use crate::systems::scheduler::AnimationScheduler;

/// Configuration for the viewer, provided by the visualization.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Orbit center for every registered body.
    pub orbit_center: Vec3,
    /// Initial overall orbital speed scale.
    pub time_scale: f32,
    /// Initial playback speed multiplier (clamped to [0.1, 5.0]).
    pub speed_multiplier: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Maximum number of scene events per frame (default: 32).
    pub max_events: usize,
    /// Camera rig tuning.
    pub camera: CameraConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            orbit_center: Vec3::ZERO,
            time_scale: 1.0,
            speed_multiplier: 1.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            max_events: 32,
            camera: CameraConfig::default(),
        }
    }
}

/// The core contract every visualization must fulfill.
pub trait Visualization {
    /// Return viewer configuration. Called once before init.
    fn config(&self) -> ViewerConfig {
        ViewerConfig::default()
    }

    /// Set up initial state: create bodies and register them.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Per-frame app logic: map UI commands, emit scene events.
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue);

    /// Rebuild the scene from a manifest handed in by the host.
    fn load_scene(&mut self, _ctx: &mut SceneContext, _manifest: &SceneManifest) {}
}

/// Mutable access to the two core components, passed to `init` and
/// `update`. Body registration fans out to both so the scheduler animates
/// what the camera can lock onto.
pub struct SceneContext {
    pub scheduler: AnimationScheduler,
    pub rig: CameraRig,
    pub events: Vec<SceneEvent>,
    max_events: usize,
    now_ms: f64,
}

impl SceneContext {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut scheduler = AnimationScheduler::new(config.orbit_center);
        scheduler.set_time_scale(config.time_scale);
        scheduler.set_speed(config.speed_multiplier);
        Self {
            scheduler,
            rig: CameraRig::new(config.camera.clone()),
            events: Vec::new(),
            max_events: config.max_events,
            now_ms: 0.0,
        }
    }

    /// Called by the frame runner at the top of every tick.
    pub fn begin_frame(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Host timestamp of the current frame, milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Register a body with both core components. Passing no orbital
    /// parameters yields a stationary body (the central sun case).
    pub fn register_body(
        &mut self,
        id: impl Into<String>,
        handle: BodyHandle,
        orbit: Option<OrbitalParams>,
    ) {
        let id = id.into();
        self.rig.register_body(id.clone(), handle.clone());
        self.scheduler.register_body(id, handle, orbit);
    }

    /// Remove a body from both core components.
    pub fn deregister_body(&mut self, id: &str) {
        self.scheduler.deregister_body(id);
        self.rig.deregister_body(id);
    }

    /// Debounced pause toggle. The rig is the single accept/reject point;
    /// accepted toggles are forwarded to the scheduler here, which keeps
    /// the two components synchronized without any other coupling.
    pub fn toggle_pause(&mut self) {
        if let Some(paused) = self.rig.request_pause_toggle(self.now_ms) {
            self.scheduler.set_paused(paused, self.now_ms / 1000.0);
        }
    }

    /// Emit an event for the UI layer. Overflow beyond the configured
    /// per-frame maximum is dropped.
    pub fn emit_event(&mut self, event: SceneEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        }
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}
