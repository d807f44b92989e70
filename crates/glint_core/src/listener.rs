//! Window listener hooks.
//!
//! A listener wraps every dispatch to the root component with a pre/post
//! pair. Pre hooks can swallow the event (`true` = handled, the component
//! never sees it); `pre_scroll` instead returns a rescaled amount, where
//! `0.0` cancels the scroll. Post hooks observe events the component
//! actually received. All methods default to "don't interfere".

use crate::keycode::{KeyCode, MouseButton};

pub trait WindowListener {
    /// Runs at the top of each frame, before `GuiComponent::update`.
    /// Returning true skips the component update (rendering still happens).
    fn pre_update(&mut self) -> bool {
        false
    }

    fn post_update(&mut self) {}

    /// Returning true swallows the click.
    fn pre_click(&mut self, _x: f32, _y: f32, _button: MouseButton) -> bool {
        false
    }

    fn post_click(&mut self, _x: f32, _y: f32, _button: MouseButton) {}

    /// May rescale the scroll amount; returning 0.0 cancels it.
    fn pre_scroll(&mut self, amount: f32) -> f32 {
        amount
    }

    fn post_scroll(&mut self, _amount: f32) {}

    fn pre_key_pressed(&mut self, _key: KeyCode) -> bool {
        false
    }

    fn post_key_pressed(&mut self, _key: KeyCode) {}

    fn pre_key_released(&mut self, _key: KeyCode) -> bool {
        false
    }

    fn post_key_released(&mut self, _key: KeyCode) {}

    fn pre_char_typed(&mut self, _c: char) -> bool {
        false
    }

    fn post_char_typed(&mut self, _c: char) {}
}
