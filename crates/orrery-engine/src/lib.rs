pub mod api;
pub mod core;
pub mod systems;
pub mod camera;
pub mod input;
pub mod renderer;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::app::{SceneContext, ViewerConfig, Visualization};
pub use api::types::SceneEvent;
pub use self::core::body::{body_handle, BodyHandle, CelestialBody};
pub use self::core::clock::SimulationClock;
pub use self::core::registry::{OrbitRegistry, OrbitalParams};
pub use systems::scheduler::{AnimationScheduler, FrameSnapshot};
pub use camera::input::{InputState, MovementKeys};
pub use camera::rig::{CameraConfig, CameraPose, CameraRig, NavigationMode};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::frame::{BodyInstance, FrameBuffer};
pub use assets::manifest::{BodyDescriptor, RingDescriptor, SceneManifest, SkyboxDescriptor};

// Extensions: decoupled pure-math helpers
pub use extensions::{lerp, lerp_vec2, lerp_vec3};
