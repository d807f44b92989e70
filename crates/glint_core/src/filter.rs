//! Typed-character filter.
//!
//! Text input arrives from the native layer as layout-applied characters.
//! Control characters (enter, tab, backspace, escape sequences) reach
//! components through key codes instead, so they are rejected here before
//! `char_typed` dispatch.

/// Whether a typed character should be forwarded to the component.
pub fn approve(c: char) -> bool {
    !c.is_control()
}
