use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::rig::CameraPose;
use crate::camera::spherical;

/// Perspective camera for the host draw layer.
/// Produces a combined view-projection matrix from the rig's pose.
pub struct Camera3D {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Reused when the pose is degenerate (eye on top of target).
    last_uniform: CameraUniform,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;

    pub const IDENTITY: Self = Self {
        view_proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        eye: [0.0, 0.0, 0.0, 1.0],
    };
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect: 16.0 / 9.0,
            near,
            far,
            last_uniform: CameraUniform::IDENTITY,
        }
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Build the uniform for the given pose. A degenerate pose returns the
    /// previous uniform instead of feeding NaNs to the draw layer.
    pub fn uniform(&mut self, pose: CameraPose) -> CameraUniform {
        let dir = pose.look_at - pose.position;
        let len = dir.length();
        if len < spherical::MIN_LENGTH {
            return self.last_uniform;
        }
        // A view direction parallel to world-up breaks look_at; fall back
        // to Z-up for that frame.
        let up = if (dir / len).y.abs() > 0.999 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(pose.position, pose.look_at, up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let uniform = CameraUniform {
            view_proj: (proj * view).to_cols_array_2d(),
            eye: [pose.position.x, pose.position.y, pose.position.z, 1.0],
        };
        self.last_uniform = uniform;
        uniform
    }
}
