use glam::Vec3;

use orrery_engine::{BodyDescriptor, CelestialBody};

/// A ring carried by a planet, as resource data for the mesh layer.
#[derive(Debug, Clone)]
pub struct PlanetRing {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: String,
}

/// A celestial body as a thin data + resource wrapper: position, size,
/// self-rotation, and the texture/ring paths the host mesh layer consumes.
/// Orbital placement is driven entirely from outside via `orbit_around`.
#[derive(Debug, Clone)]
pub struct Planet {
    name: String,
    position: Vec3,
    radius: f32,
    spin: f32,
    spin_speed: f32,
    texture: String,
    emissive: bool,
    ring: Option<PlanetRing>,
}

impl Planet {
    pub fn new(name: impl Into<String>, radius: f32, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            radius,
            spin: 0.0,
            spin_speed: 0.0,
            texture: texture.into(),
            emissive: false,
            ring: None,
        }
    }

    pub fn with_spin_speed(mut self, spin_speed: f32) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_ring(mut self, ring: PlanetRing) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn from_descriptor(desc: &BodyDescriptor) -> Self {
        let mut planet = Planet::new(desc.name.clone(), desc.radius, desc.texture.clone())
            .with_spin_speed(desc.spin_speed)
            .with_emissive(desc.emissive);
        if let Some(ring) = &desc.ring {
            planet = planet.with_ring(PlanetRing {
                inner_radius: ring.inner_radius,
                outer_radius: ring.outer_radius,
                texture: ring.texture.clone(),
            });
        }
        planet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive
    }

    pub fn ring(&self) -> Option<&PlanetRing> {
        self.ring.as_ref()
    }
}

impl CelestialBody for Planet {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn update(&mut self, dt: f32) {
        self.spin += self.spin_speed * dt;
    }

    fn orbit_around(&mut self, center: Vec3, distance: f32, angular_speed: f32, sim_time: f32) {
        let angle = sim_time * angular_speed;
        self.position = Vec3::new(
            center.x + angle.sin() * distance,
            center.y,
            center.z + angle.cos() * distance,
        );
    }

    fn spin(&self) -> f32 {
        self.spin
    }
}
