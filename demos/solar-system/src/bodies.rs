/// Planetary data: visual radii, orbit parameters, texture paths.
///
/// Distances and sizes are stage units tuned for readability, not to
/// scale; real proportions would leave everything but the sun sub-pixel.
/// Angular speeds keep the relative pacing of the planets (Mercury laps
/// Pluto several hundred times over).

use orrery_engine::{BodyDescriptor, RingDescriptor, SceneManifest, SkyboxDescriptor};

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "sun";
pub const SUN_RADIUS: f32 = 16.0;
pub const SUN_SPIN_SPEED: f32 = 0.24;
pub const SUN_TEXTURE: &str = "textures/sun.jpg";

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANET_COUNT: usize = 9;

/// Static description of one planet.
pub struct PlanetData {
    pub name: &'static str,
    pub radius: f32,
    /// Orbit radius from the sun, stage units.
    pub distance: f32,
    /// Orbital angular speed, radians per simulated second.
    pub orbit_speed: f32,
    /// Self-rotation speed, radians per second.
    pub spin_speed: f32,
    pub texture: &'static str,
    pub ring: Option<RingData>,
}

pub struct RingData {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

pub fn planet_data() -> [PlanetData; PLANET_COUNT] {
    [
        PlanetData { name: "mercury", radius: 3.2, distance: 28.0,  orbit_speed: 2.4,    spin_speed: 0.24, texture: "textures/mercury.jpg", ring: None },
        PlanetData { name: "venus",   radius: 5.8, distance: 44.0,  orbit_speed: 0.9,    spin_speed: 0.12, texture: "textures/venus.jpg",   ring: None },
        PlanetData { name: "earth",   radius: 6.0, distance: 62.0,  orbit_speed: 0.6,    spin_speed: 1.2,  texture: "textures/earth.jpg",   ring: None },
        PlanetData { name: "mars",    radius: 4.0, distance: 78.0,  orbit_speed: 0.48,   spin_speed: 1.08, texture: "textures/mars.jpg",    ring: None },
        PlanetData { name: "jupiter", radius: 12.0, distance: 100.0, orbit_speed: 0.12,   spin_speed: 2.4,  texture: "textures/jupiter.jpg", ring: None },
        PlanetData {
            name: "saturn", radius: 10.0, distance: 138.0, orbit_speed: 0.054, spin_speed: 2.28,
            texture: "textures/saturn.jpg",
            ring: Some(RingData { inner_radius: 10.0, outer_radius: 20.0, texture: "textures/saturn_ring.png" }),
        },
        PlanetData {
            name: "uranus", radius: 7.0, distance: 176.0, orbit_speed: 0.024, spin_speed: 1.8,
            texture: "textures/uranus.jpg",
            ring: Some(RingData { inner_radius: 7.0, outer_radius: 12.0, texture: "textures/uranus_ring.png" }),
        },
        PlanetData { name: "neptune", radius: 7.0, distance: 200.0, orbit_speed: 0.006,  spin_speed: 1.92, texture: "textures/neptune.jpg", ring: None },
        PlanetData { name: "pluto",   radius: 2.8, distance: 216.0, orbit_speed: 0.0042, spin_speed: 0.48, texture: "textures/pluto.jpg",   ring: None },
    ]
}

// ── Skybox ───────────────────────────────────────────────────────────

pub const SKYBOX_FACES: [&str; 6] = [
    "textures/stars_px.jpg",
    "textures/stars_nx.jpg",
    "textures/stars_py.jpg",
    "textures/stars_ny.jpg",
    "textures/stars_pz.jpg",
    "textures/stars_nz.jpg",
];

/// The built-in scene: the sun, nine planets, a starfield skybox.
/// Same shape the host can supply as external JSON.
pub fn default_manifest() -> SceneManifest {
    let mut bodies = Vec::with_capacity(PLANET_COUNT + 1);
    bodies.push(BodyDescriptor {
        name: SUN_NAME.to_string(),
        radius: SUN_RADIUS,
        texture: SUN_TEXTURE.to_string(),
        distance: None,
        angular_speed: None,
        spin_speed: SUN_SPIN_SPEED,
        emissive: true,
        ring: None,
    });
    for planet in planet_data() {
        bodies.push(BodyDescriptor {
            name: planet.name.to_string(),
            radius: planet.radius,
            texture: planet.texture.to_string(),
            distance: Some(planet.distance),
            angular_speed: Some(planet.orbit_speed),
            spin_speed: planet.spin_speed,
            emissive: false,
            ring: planet.ring.map(|ring| RingDescriptor {
                inner_radius: ring.inner_radius,
                outer_radius: ring.outer_radius,
                texture: ring.texture.to_string(),
            }),
        });
    }
    SceneManifest {
        bodies,
        skybox: Some(SkyboxDescriptor {
            faces: SKYBOX_FACES.map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_count_matches() {
        assert_eq!(planet_data().len(), PLANET_COUNT);
    }

    #[test]
    fn distances_increase_outward() {
        let planets = planet_data();
        for pair in planets.windows(2) {
            assert!(
                pair[0].distance < pair[1].distance,
                "{} is not inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn inner_planets_orbit_faster() {
        let planets = planet_data();
        for pair in planets.windows(2) {
            assert!(
                pair[0].orbit_speed > pair[1].orbit_speed,
                "{} should orbit faster than {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn default_manifest_has_a_stationary_sun() {
        let manifest = default_manifest();
        assert_eq!(manifest.bodies.len(), PLANET_COUNT + 1);
        let sun = &manifest.bodies[0];
        assert_eq!(sun.name, "sun");
        assert!(sun.emissive);
        assert_eq!(sun.orbit(), None);
    }

    #[test]
    fn ringed_planets_carry_ring_descriptors() {
        let manifest = default_manifest();
        for body in &manifest.bodies {
            match body.name.as_str() {
                "saturn" | "uranus" => assert!(body.ring.is_some(), "{} lost its ring", body.name),
                _ => assert!(body.ring.is_none()),
            }
        }
        assert!(manifest.skybox.is_some());
    }
}
