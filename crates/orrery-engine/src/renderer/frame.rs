use bytemuck::{Pod, Zeroable};

use crate::core::body::BodyHandle;

/// One body in the per-frame render snapshot.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    /// Self-rotation angle in radians.
    pub spin: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 5;
}

/// Flat buffer of body instances, rebuilt each frame and read by the host
/// draw layer through raw pointer + count accessors. The core never draws;
/// mesh and texture work stays on the JS side.
pub struct FrameBuffer {
    instances: Vec<BodyInstance>,
}

impl FrameBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Repack the buffer from the registered bodies, in registration order.
    pub fn rebuild<'a>(&mut self, bodies: impl Iterator<Item = (&'a str, &'a BodyHandle)>) {
        self.instances.clear();
        for (_id, handle) in bodies {
            let body = handle.borrow();
            let pos = body.position();
            self.instances.push(BodyInstance {
                position: [pos.x, pos.y, pos.z],
                radius: body.radius(),
                spin: body.spin(),
            });
        }
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{body_handle, CelestialBody};
    use glam::Vec3;

    struct Marble {
        position: Vec3,
        spin: f32,
    }

    impl CelestialBody for Marble {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn radius(&self) -> f32 {
            3.0
        }

        fn update(&mut self, _dt: f32) {}

        fn orbit_around(&mut self, _c: Vec3, _d: f32, _s: f32, _t: f32) {}

        fn spin(&self) -> f32 {
            self.spin
        }
    }

    #[test]
    fn rebuild_packs_positions_and_spin() {
        let a = body_handle(Marble {
            position: Vec3::new(1.0, 2.0, 3.0),
            spin: 0.5,
        });
        let b = body_handle(Marble {
            position: Vec3::new(-4.0, 0.0, 9.0),
            spin: 0.0,
        });
        let bodies = [("a", &a), ("b", &b)];

        let mut buffer = FrameBuffer::with_capacity(8);
        buffer.rebuild(bodies.into_iter());

        assert_eq!(buffer.instance_count(), 2);
        let first = buffer.instances()[0];
        assert_eq!(first.position, [1.0, 2.0, 3.0]);
        assert_eq!(first.radius, 3.0);
        assert_eq!(first.spin, 0.5);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let a = body_handle(Marble {
            position: Vec3::ZERO,
            spin: 0.0,
        });
        let mut buffer = FrameBuffer::with_capacity(8);
        buffer.rebuild([("a", &a)].into_iter());
        buffer.rebuild(std::iter::empty());
        assert_eq!(buffer.instance_count(), 0);
    }
}
