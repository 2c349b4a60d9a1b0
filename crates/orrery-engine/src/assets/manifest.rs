use serde::{Deserialize, Serialize};

use crate::core::registry::OrbitalParams;

/// Scene manifest describing the bodies and skybox of a visualization.
/// Loaded from a JSON file at runtime. Texture paths are carried as plain
/// data; resolving and loading them is the host's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    pub bodies: Vec<BodyDescriptor>,
    #[serde(default)]
    pub skybox: Option<SkyboxDescriptor>,
}

/// Describes a single celestial body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique name, also the registration identifier (e.g. "earth").
    pub name: String,
    /// Visual radius in world units.
    pub radius: f32,
    /// Relative path to the surface texture.
    pub texture: String,
    /// Orbit radius from the scene center; omitted for a stationary body.
    #[serde(default)]
    pub distance: Option<f32>,
    /// Orbital angular speed in radians per simulated second.
    #[serde(default)]
    pub angular_speed: Option<f32>,
    /// Self-rotation speed in radians per second (default: none).
    #[serde(default)]
    pub spin_speed: f32,
    /// Whether the body emits light (the sun).
    #[serde(default)]
    pub emissive: bool,
    #[serde(default)]
    pub ring: Option<RingDescriptor>,
}

/// Describes a flat ring around a body (Saturn, Uranus).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Relative path to the ring texture.
    pub texture: String,
}

/// Describes the skybox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyboxDescriptor {
    /// Six cube-face texture paths in +x, -x, +y, -y, +z, -z order.
    pub faces: [String; 6],
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl BodyDescriptor {
    /// Orbital parameters, when the descriptor defines an orbit.
    /// Bodies with only one of the two fields stay stationary.
    pub fn orbit(&self) -> Option<OrbitalParams> {
        match (self.distance, self.angular_speed) {
            (Some(distance), Some(angular_speed)) => Some(OrbitalParams {
                distance,
                angular_speed,
            }),
            _ => None,
        }
    }
}
