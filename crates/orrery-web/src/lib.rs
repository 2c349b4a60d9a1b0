pub mod runner;

pub use runner::ViewerRunner;

/// Generate all `#[wasm_bindgen]` exports for a visualization.
///
/// This macro generates the per-app boilerplate:
/// - `thread_local!` storage for the ViewerRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (viewer_init, viewer_tick, input handlers,
///   data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod app;
/// use app::SolarSystem;
///
/// orrery_web::export_viewer!(SolarSystem, "solar-system");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements
///   `orrery_engine::Visualization`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_viewer {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::ViewerRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::ViewerRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Viewer not initialized. Call viewer_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn viewer_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::ViewerRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        /// Run one frame. `now_ms` is performance.now() from the rAF loop.
        #[wasm_bindgen]
        pub fn viewer_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn viewer_start() {
            with_runner(|r| r.start());
        }

        #[wasm_bindgen]
        pub fn viewer_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn viewer_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn viewer_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn viewer_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn viewer_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn viewer_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn viewer_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn viewer_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn viewer_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn viewer_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_body_floats() -> u32 {
            BodyInstance::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_floats() -> u32 {
            CameraUniform::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        #[wasm_bindgen]
        pub fn get_event_floats() -> u32 {
            SceneEvent::FLOATS as u32
        }

        // ---- State accessors ----

        #[wasm_bindgen]
        pub fn viewer_is_paused() -> bool {
            with_runner(|r| r.is_paused())
        }

        #[wasm_bindgen]
        pub fn viewer_sim_time() -> f64 {
            with_runner(|r| r.sim_time())
        }
    };
}
