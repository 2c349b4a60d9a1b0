use orrery_engine::{
    Camera3D, CameraUniform, FrameBuffer, InputEvent, InputQueue, SceneContext, SceneEvent,
    SceneManifest, Visualization,
};

/// Longest frame delta fed to the camera, seconds. A backgrounded tab can
/// sit for minutes between rAF callbacks; clamping keeps the first frame
/// back from teleporting the camera.
const MAX_FRAME_DT: f32 = 0.1;

/// Generic viewer runner that wires up the frame loop.
///
/// Each concrete visualization (e.g. `solar-system`) creates a
/// `thread_local!` ViewerRunner and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs
/// directly.
pub struct ViewerRunner<V: Visualization> {
    app: V,
    ctx: SceneContext,
    input: InputQueue,
    frame: FrameBuffer,
    camera: Camera3D,
    camera_uniform: CameraUniform,
    last_frame_ms: Option<f64>,
    initialized: bool,
}

impl<V: Visualization> ViewerRunner<V> {
    pub fn new(app: V) -> Self {
        let config = app.config();
        Self {
            ctx: SceneContext::new(&config),
            input: InputQueue::new(),
            frame: FrameBuffer::with_capacity(32),
            camera: Camera3D::new(config.fov_y_degrees, config.near, config.far),
            camera_uniform: CameraUniform::IDENTITY,
            last_frame_ms: None,
            initialized: false,
            app,
        }
    }

    /// Initialize the visualization and attach the scheduler.
    /// Call once after construction.
    pub fn init(&mut self) {
        self.app.init(&mut self.ctx);
        self.ctx.scheduler.start();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn start(&mut self) {
        self.ctx.scheduler.start();
    }

    pub fn stop(&mut self) {
        self.ctx.scheduler.stop();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Parse a scene manifest and hand it to the app. Bad JSON is the
    /// host's mistake; it is reported and the current scene stays up.
    pub fn load_manifest(&mut self, json: &str) {
        match SceneManifest::from_json(json) {
            Ok(manifest) => self.app.load_scene(&mut self.ctx, &manifest),
            Err(err) => log::error!("scene manifest rejected: {err}"),
        }
    }

    /// Run one frame. `now_ms` is the host's performance.now().
    ///
    /// Sequence within the frame: app update, input routing, scheduler
    /// tick, camera update, post-frame observers, render snapshot. The
    /// camera updates even while the scheduler is stopped or paused.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }
        let dt = match self.last_frame_ms {
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        self.ctx.clear_frame_data();
        self.ctx.begin_frame(now_ms);

        self.app.update(&mut self.ctx, &self.input);
        for event in self.input.iter() {
            self.ctx.rig.apply(event);
        }
        self.input.clear();

        self.ctx.scheduler.tick(now_ms / 1000.0);
        self.ctx.rig.update(dt);
        self.ctx.scheduler.notify_frame_end();

        self.frame.rebuild(self.ctx.scheduler.bodies());
        self.camera_uniform = self.camera.uniform(self.ctx.rig.pose());
    }

    // ---- Pointer accessors for the JS draw layer ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.frame.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.frame.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- State accessors for the UI ----

    pub fn is_paused(&self) -> bool {
        self.ctx.scheduler.is_paused()
    }

    pub fn sim_time(&self) -> f64 {
        self.ctx.scheduler.sim_time()
    }
}

// Compile-time guarantee that the buffer strides the JS side assumes match
// the actual record layouts.
const _: () = {
    assert!(std::mem::size_of::<SceneEvent>() == SceneEvent::FLOATS * 4);
    assert!(std::mem::size_of::<CameraUniform>() == CameraUniform::FLOATS * 4);
};
