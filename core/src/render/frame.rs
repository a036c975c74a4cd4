//! Per-frame state of an interactive render loop.

use crate::math::{Color3, rgb};

use super::{Context, Target};

/// A value oscillating linearly between two bounds, used to animate the
/// background color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fade {
    /// The current value, always within `min..=max`.
    pub value: f64,
    /// The change in `value` per step. Its sign flips at the bounds.
    pub delta: f64,
    /// The lower bound of `value`.
    pub min: f64,
    /// The upper bound of `value`.
    pub max: f64,
}

/// The state carried over from one frame to the next.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameState {
    /// The number of frames finished so far.
    pub frame: u64,
    /// The background fade. If `None`, frames are cleared to the color
    /// clear value of the context instead.
    pub fade: Option<Fade>,
}

impl Fade {
    /// Advances `self` by one step, reversing direction when `value`
    /// reaches either bound.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::render::frame::Fade;
    ///
    /// let mut f = Fade { value: 1.0, delta: -0.25, min: 0.5, max: 1.0 };
    /// f.step();
    /// assert_eq!(f.value, 0.75);
    /// f.step();
    /// assert_eq!(f.value, 0.5);
    /// f.step();
    /// assert_eq!(f.value, 0.75);
    /// ```
    pub fn step(&mut self) {
        self.value = (self.value + self.delta).clamp(self.min, self.max);
        if (self.value <= self.min && self.delta < 0.0)
            || (self.value >= self.max && self.delta > 0.0)
        {
            self.delta = -self.delta;
        }
    }

    /// Returns the background color for the current value.
    pub fn color(&self) -> Color3 {
        // `as` saturates
        rgb((200.0 * self.value) as u8, 100, 250)
    }
}

impl Default for Fade {
    /// Returns a fade from 1.0 down to 0.5 and back, in steps of 0.0001.
    fn default() -> Self {
        Self {
            value: 1.0,
            delta: -0.0001,
            min: 0.5,
            max: 1.0,
        }
    }
}

impl Default for FrameState {
    /// Returns the state before the first frame, with the default fade.
    fn default() -> Self {
        Self { frame: 0, fade: Some(Fade::default()) }
    }
}

/// Starts a new frame.
///
/// Clears `target` to the current fade color, or to the color clear value
/// of `ctx` if there is no fade, and to the depth clear value of `ctx`.
/// Then increments the frame counters and advances the fade.
pub fn next_frame<T>(state: &mut FrameState, target: &mut T, ctx: &Context)
where
    T: Target + ?Sized,
{
    let color = state.fade.map(|f| f.color()).or(ctx.color_clear);
    target.clear(color, ctx.depth_clear);
    state.frame += 1;
    if let Some(fade) = &mut state.fade {
        fade.step();
    }
    ctx.stats.borrow_mut().frames += 1.0;
}
