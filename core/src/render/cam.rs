//! Cameras and camera transforms.

use crate::geom::Tri3;
use crate::math::{Mat4, Vec3, perspective, viewport};

use super::raster::ScreenPt;

/// Type to manage the world-to-screen transformation.
///
/// Points are mapped to the screen by
/// ```text
/// screen = viewport * project * (p, 1)
/// ```
/// followed by a division by the resulting w component and rounding of each
/// coordinate to the nearest integer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Projection matrix.
    pub project: Mat4,
    /// Viewport matrix.
    pub viewport: Mat4,
}

impl Camera {
    /// Creates a camera at distance `camera_distance` along the positive
    /// z axis, looking towards the origin, whose viewport covers an
    /// entire `w` × `h` target and maps depth from −1..1 to 0..`depth`.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::math::vec3;
    /// use tinyrast_core::render::cam::Camera;
    ///
    /// let cam = Camera::new(100, 100, 255.0, 3.0);
    /// assert_eq!(cam.world_to_screen(vec3(0.0, 0.0, 0.0)), vec3(50.0, 50.0, 128.0));
    /// assert_eq!(cam.world_to_screen(vec3(1.0, -1.0, 0.0)), vec3(100.0, 0.0, 128.0));
    /// ```
    pub fn new(w: usize, h: usize, depth: f64, camera_distance: f64) -> Self {
        Self {
            project: perspective(camera_distance),
            viewport: viewport(0.0, 0.0, w as f64, h as f64, depth),
        }
    }

    /// Returns the composite world-to-screen matrix, before perspective
    /// division.
    pub fn world_to_screen_mat(&self) -> Mat4 {
        self.viewport * self.project
    }

    /// Maps a world-space point to screen space.
    ///
    /// The x and y components of the result are pixel coordinates and
    /// z is depth, each rounded to the nearest integer.
    pub fn world_to_screen(&self, p: Vec3) -> ScreenPt {
        use crate::math::float::f64;

        let h = self.world_to_screen_mat().apply(&p.to_homogeneous());
        Vec3::from_homogeneous(h).map(f64::round)
    }

    /// Maps each vertex of a world-space triangle to screen space.
    pub fn tri_to_screen(&self, tri: &Tri3) -> Tri3 {
        Tri3(tri.0.map(|v| self.world_to_screen(v)))
    }
}
