use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// Capability contract for anything the core can animate and orbit around.
///
/// The core never constructs bodies; the host app creates them (meshes,
/// textures and all), wraps them in a handle and registers that handle with
/// the scheduler and the camera rig. Any object satisfying this shape works.
pub trait CelestialBody {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Visual radius, used to derive the minimum safe viewing distance.
    fn radius(&self) -> f32;

    /// Per-frame visual update (self-rotation, shader time and the like).
    /// `dt` is the speed-scaled frame delta in seconds.
    fn update(&mut self, dt: f32);

    /// Place the body on its circular parametric orbit at `sim_time`.
    fn orbit_around(&mut self, center: Vec3, distance: f32, angular_speed: f32, sim_time: f32);

    /// Self-rotation angle in radians, carried into the render snapshot.
    /// Bodies that do not spin keep the default.
    fn spin(&self) -> f32 {
        0.0
    }
}

/// Shared handle to a registered body. The core holds handles without
/// owning body lifetime; single-threaded cooperative model, so `Rc<RefCell>`.
pub type BodyHandle = Rc<RefCell<dyn CelestialBody>>;

/// Wrap a concrete body into a registrable handle.
pub fn body_handle<B: CelestialBody + 'static>(body: B) -> BodyHandle {
    Rc::new(RefCell::new(body))
}
