use glam::{Mat4, Quat, Vec3};

use crate::pose::WORLD_UP;

/// Whatever currently drives the camera transform
pub trait CameraController {
    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Camera orientation in world space
    fn orientation(&self) -> Quat;

    /// Direction the camera looks along
    fn forward(&self) -> Vec3;

    /// View matrix for rendering
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position(), self.forward(), WORLD_UP)
    }
}
