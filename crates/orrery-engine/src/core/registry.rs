use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The pair defining a body's fixed circular path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParams {
    /// Orbit radius from the scene center, world units. Expected positive.
    pub distance: f32,
    /// Angular speed in radians per simulated second.
    pub angular_speed: f32,
}

/// Mapping from body identifier to orbital parameters. Pure data + CRUD.
///
/// Deliberately permissive: mutating an unknown identifier is a silent
/// no-op. A cosmetic mismatch must never halt the frame loop.
pub struct OrbitRegistry {
    params: HashMap<String, OrbitalParams>,
}

impl OrbitRegistry {
    pub fn new() -> Self {
        Self {
            params: HashMap::new(),
        }
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: impl Into<String>, params: OrbitalParams) {
        self.params.insert(id.into(), params);
    }

    /// Remove the entry for `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<OrbitalParams> {
        self.params.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<OrbitalParams> {
        self.params.get(id).copied()
    }

    /// Overwrite an existing entry. Unknown ids are left alone.
    pub fn update(&mut self, id: &str, distance: f32, angular_speed: f32) {
        if let Some(entry) = self.params.get_mut(id) {
            *entry = OrbitalParams {
                distance,
                angular_speed,
            };
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.params.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Default for OrbitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
