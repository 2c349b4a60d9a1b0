/// Solar System: interactive 3D orrery.
///
/// The core scheduler drives the orbits, the rig drives the camera; this
/// app wires UI commands onto both and reports state back each frame.

use orrery_engine::{
    body_handle, InputEvent, InputQueue, NavigationMode, SceneContext, SceneEvent, SceneManifest,
    ViewerConfig, Visualization,
};

use crate::bodies;
use crate::planet::Planet;

// ── Custom event kinds from the UI ───────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_SET_TIME_SCALE: u32 = 2;
const CUSTOM_TOGGLE_PAUSE: u32 = 3;
/// a = body index in registration order, -1 releases the lock.
const CUSTOM_LOCK_BODY: u32 = 4;
const CUSTOM_RESET_CLOCK: u32 = 5;

// ── Scene event kinds to the UI ──────────────────────────────────────

const EVENT_TIME_INFO: f32 = 1.0;
const EVENT_CAMERA_INFO: f32 = 2.0;

// ── Keyboard shortcuts ───────────────────────────────────────────────

const KEY_SPACE: u32 = 32;
const KEY_ESCAPE: u32 = 27;
const KEY_DIGIT_0: u32 = 48;
const KEY_DIGIT_9: u32 = 57;

pub struct SolarSystem {
    /// Registered body ids, registration order. Index 0 is the sun.
    body_ids: Vec<String>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            body_ids: Vec::new(),
        }
    }

    /// Tear down the current scene and build one from the manifest.
    fn apply_manifest(&mut self, ctx: &mut SceneContext, manifest: &SceneManifest) {
        for id in self.body_ids.drain(..) {
            ctx.deregister_body(&id);
        }
        for desc in &manifest.bodies {
            let planet = Planet::from_descriptor(desc);
            ctx.register_body(desc.name.clone(), body_handle(planet), desc.orbit());
            self.body_ids.push(desc.name.clone());
        }
        log::info!("scene loaded: {} bodies", self.body_ids.len());
    }

    fn toggle_lock_by_index(&self, ctx: &mut SceneContext, index: i32) {
        if index < 0 {
            ctx.rig.clear_lock();
            return;
        }
        if let Some(id) = self.body_ids.get(index as usize) {
            ctx.rig.toggle_lock(id);
        }
    }

    fn locked_index(&self, ctx: &SceneContext) -> f32 {
        match ctx.rig.locked_body() {
            Some(locked) => self
                .body_ids
                .iter()
                .position(|id| id == locked)
                .map(|i| i as f32)
                .unwrap_or(-1.0),
            None => -1.0,
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualization for SolarSystem {
    fn config(&self) -> ViewerConfig {
        ViewerConfig {
            // Pluto orbits at 216; leave room for it and the skybox.
            far: 2000.0,
            ..ViewerConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        self.apply_manifest(ctx, &bodies::default_manifest());
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        // ── Handle UI commands ───────────────────────────────────────
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, .. } => match kind {
                    CUSTOM_SET_SPEED => ctx.scheduler.set_speed(a),
                    CUSTOM_SET_TIME_SCALE => ctx.scheduler.set_time_scale(a),
                    CUSTOM_TOGGLE_PAUSE => ctx.toggle_pause(),
                    CUSTOM_LOCK_BODY => self.toggle_lock_by_index(ctx, a as i32),
                    CUSTOM_RESET_CLOCK => ctx.scheduler.reset_clock(),
                    _ => {}
                },
                InputEvent::KeyDown { key_code } => match key_code {
                    KEY_SPACE => ctx.toggle_pause(),
                    KEY_ESCAPE => ctx.rig.clear_lock(),
                    KEY_DIGIT_0..=KEY_DIGIT_9 => {
                        self.toggle_lock_by_index(ctx, (key_code - KEY_DIGIT_0) as i32);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // ── Report state to the UI ───────────────────────────────────
        let time_info = SceneEvent {
            kind: EVENT_TIME_INFO,
            a: ctx.scheduler.sim_time() as f32,
            b: ctx.scheduler.speed(),
            c: if ctx.scheduler.is_paused() { 1.0 } else { 0.0 },
        };
        ctx.emit_event(time_info);

        let mode = match ctx.rig.mode() {
            NavigationMode::FreeFly => 0.0,
            NavigationMode::MouseLook => 1.0,
            NavigationMode::ObjectLock => 2.0,
        };
        let camera_info = SceneEvent {
            kind: EVENT_CAMERA_INFO,
            a: self.locked_index(ctx),
            b: ctx.rig.camera_distance(),
            c: mode,
        };
        ctx.emit_event(camera_info);
    }

    fn load_scene(&mut self, ctx: &mut SceneContext, manifest: &SceneManifest) {
        self.apply_manifest(ctx, manifest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> (SolarSystem, SceneContext) {
        let mut app = SolarSystem::new();
        let mut ctx = SceneContext::new(&app.config());
        app.init(&mut ctx);
        ctx.scheduler.start();
        (app, ctx)
    }

    fn custom(kind: u32, a: f32) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind,
            a,
            b: 0.0,
            c: 0.0,
        });
        input
    }

    #[test]
    fn init_registers_the_full_scene() {
        let (_app, ctx) = scene();
        assert_eq!(ctx.scheduler.body_count(), bodies::PLANET_COUNT + 1);
        assert!(ctx.scheduler.contains_body("sun"));
        assert!(ctx.scheduler.contains_body("pluto"));
        // The sun stays stationary, the planets orbit.
        assert_eq!(ctx.scheduler.get_orbit("sun"), None);
        assert_eq!(ctx.scheduler.get_orbit("earth").unwrap().distance, 62.0);
    }

    #[test]
    fn lock_command_targets_by_registration_index() {
        let (mut app, mut ctx) = scene();
        // Index 3 = sun, mercury, venus, earth.
        app.update(&mut ctx, &custom(CUSTOM_LOCK_BODY, 3.0));
        assert_eq!(ctx.rig.locked_body(), Some("earth"));

        app.update(&mut ctx, &custom(CUSTOM_LOCK_BODY, -1.0));
        assert_eq!(ctx.rig.locked_body(), None);
    }

    #[test]
    fn digit_keys_toggle_locks() {
        let (mut app, mut ctx) = scene();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: 49 }); // "1" = mercury
        app.update(&mut ctx, &input);
        assert_eq!(ctx.rig.locked_body(), Some("mercury"));

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown {
            key_code: KEY_ESCAPE,
        });
        app.update(&mut ctx, &input);
        assert_eq!(ctx.rig.locked_body(), None);
    }

    #[test]
    fn speed_command_is_clamped_by_the_scheduler() {
        let (mut app, mut ctx) = scene();
        app.update(&mut ctx, &custom(CUSTOM_SET_SPEED, 10.0));
        assert_eq!(ctx.scheduler.speed(), 5.0);
    }

    #[test]
    fn pause_command_flips_the_scheduler() {
        let (mut app, mut ctx) = scene();
        ctx.begin_frame(1000.0);
        app.update(&mut ctx, &custom(CUSTOM_TOGGLE_PAUSE, 0.0));
        assert!(ctx.scheduler.is_paused());
    }

    #[test]
    fn every_frame_reports_time_and_camera_info() {
        let (mut app, mut ctx) = scene();
        app.update(&mut ctx, &InputQueue::new());
        let kinds: Vec<f32> = ctx.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EVENT_TIME_INFO, EVENT_CAMERA_INFO]);
        // Nothing locked yet.
        assert_eq!(ctx.events[1].a, -1.0);
    }

    #[test]
    fn load_scene_replaces_the_bodies() {
        let (mut app, mut ctx) = scene();
        let manifest = SceneManifest::from_json(
            r#"{
                "bodies": [
                    { "name": "kepler-22b", "radius": 8.0, "texture": "k.jpg",
                      "distance": 90.0, "angular_speed": 0.3 }
                ]
            }"#,
        )
        .unwrap();
        app.load_scene(&mut ctx, &manifest);
        assert_eq!(ctx.scheduler.body_count(), 1);
        assert!(ctx.scheduler.contains_body("kepler-22b"));
        assert!(!ctx.scheduler.contains_body("earth"));
    }
}
