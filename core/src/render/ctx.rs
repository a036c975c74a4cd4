//! Rendering context and parameters.

use core::cell::RefCell;

use crate::math::Color3;

use super::Stats;

/// Context and parameters used by the renderer.
#[derive(Clone, Debug)]
pub struct Context {
    /// The color with which to fill the color buffer to clear it, if any.
    ///
    /// Used by [`next_frame`][super::next_frame] when the frame state has
    /// no background fade.
    ///
    /// If rendered geometry always fills the entire frame, `color_clear`
    /// can be set to `None` to avoid redundant work.
    pub color_clear: Option<Color3>,

    /// The value with which to fill the depth buffer to clear it, if any.
    ///
    /// Greater depth values are nearer to the viewer, so the default is
    /// negative infinity, meaning "nothing drawn yet".
    pub depth_clear: Option<f64>,

    /// Whether to cull (discard) faces pointing either away from or towards
    /// the camera.
    ///
    /// If all geometry drawn is "solid" meshes without holes, backfaces can
    /// usually be culled because they are always occluded by front faces and
    /// drawing them would be redundant.
    pub face_cull: Option<FaceCull>,

    /// Whether to do depth testing and which predicate to use.
    ///
    /// If set to `Some(DepthTest::GreaterOrEqual)` (the default), a fragment
    /// passes the depth test *iff* `new_z >= old_z`, so that of two equally
    /// deep fragments the later one wins. If set to `None`, depth test
    /// is not performed. This setting has no effect if the render target
    /// does not support z-buffering.
    pub depth_test: Option<DepthTest>,

    /// Whether to write color values.
    ///
    /// If `false`, other fragment processing is done but there is no color
    /// output. This setting has no effect if the render target does not
    /// support color writes.
    pub color_write: bool,

    /// Whether to write depth values.
    ///
    /// If `false`, other fragment processing is done but there is no depth
    /// output. This setting has no effect if the render target does not
    /// support depth writes.
    pub depth_write: bool,

    /// Collecting rendering statistics.
    pub stats: RefCell<Stats>,
}

/// Whether to cull front faces or backfaces.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FaceCull {
    Front,
    Back,
}

/// Predicate comparing a new depth value to the one in the depth buffer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DepthTest {
    /// Pass if the new value is greater than the current one.
    Greater,
    /// Pass if the new value is greater than or equal to the current one.
    #[default]
    GreaterOrEqual,
    /// Pass if the new value is less than the current one.
    Less,
    /// Pass if the new value is less than or equal to the current one.
    LessOrEqual,
}

impl Context {
    /// Compares the depth value `new` to `curr` and returns whether `new`
    /// passes the depth test specified by `self.depth_test`.
    /// If `self.depth_test` is `None`, always returns `true`.
    ///
    /// NaN depths never pass an enabled test.
    #[inline]
    pub fn depth_test(&self, new: f64, curr: f64) -> bool {
        use DepthTest::*;
        match self.depth_test {
            None => true,
            Some(Greater) => new > curr,
            Some(GreaterOrEqual) => new >= curr,
            Some(Less) => new < curr,
            Some(LessOrEqual) => new <= curr,
        }
    }

    /// Returns whether a primitive should be culled based on the current face
    /// culling setting.
    #[inline]
    pub fn face_cull(&self, is_backface: bool) -> bool {
        match self.face_cull {
            Some(FaceCull::Back) if is_backface => true,
            Some(FaceCull::Front) if !is_backface => true,
            _ => false,
        }
    }
}

impl Default for Context {
    /// Creates a rendering context with default settings.
    ///
    /// The default values are:
    /// * Color clear:   Black
    /// * Depth clear:   Negative infinity
    /// * Face culling:  Backfaces
    /// * Color writes:  Enabled
    /// * Depth testing: Pass if nearer or equal
    /// * Depth writes:  Enabled
    fn default() -> Self {
        Self {
            color_clear: Some(Color3::BLACK),
            depth_clear: Some(f64::NEG_INFINITY),
            face_cull: Some(FaceCull::Back),
            color_write: true,
            depth_test: Some(DepthTest::GreaterOrEqual),
            depth_write: true,
            stats: Default::default(),
        }
    }
}
