/// Spherical-coordinate helpers for the camera rig. Pure math.
///
/// Convention: `phi` is the polar angle measured from +Y (0 = straight up),
/// `theta` is the azimuth in the XZ plane measured from +X toward +Z.
use std::f32::consts::PI;

use glam::Vec3;

/// Polar angles closer than this to either pole get clamped, keeping the
/// camera from flipping over the top of its orbit sphere.
pub const POLE_MARGIN: f32 = 0.1;

/// Offsets shorter than this are degenerate; trig on them is skipped.
pub const MIN_LENGTH: f32 = 1e-5;

pub fn clamp_polar(phi: f32) -> f32 {
    phi.clamp(POLE_MARGIN, PI - POLE_MARGIN)
}

/// Unit direction for the given angles, polar clamp applied.
pub fn direction(phi: f32, theta: f32) -> Vec3 {
    let phi = clamp_polar(phi);
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

/// Recover `(phi, theta)` from a camera offset (position minus look-at).
/// Returns `None` for near-zero offsets.
pub fn angles_from_offset(offset: Vec3) -> Option<(f32, f32)> {
    let dist = offset.length();
    if dist < MIN_LENGTH {
        return None;
    }
    let phi = (offset.y / dist).clamp(-1.0, 1.0).acos();
    let theta = offset.z.atan2(offset.x);
    Some((phi, theta))
}
