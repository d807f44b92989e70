//! Static conversion tables from winit codes to the abstract vocabulary.
//!
//! `convert_key` returns zero, one, or two abstract codes per physical key:
//!
//! - most keys map 1:1;
//! - left/right shift, control, and alt collapse to a single abstract code;
//! - number-row and numpad digits map to TWO codes, the physical-position
//!   code first and the shared generic `Digit*` second, so a component can
//!   react to "any 5" without caring which key produced it;
//! - numpad enter/equals/comma fold into the main-key codes;
//! - everything else maps to the empty slice and is dropped at dispatch.
//!
//! The table never changes at runtime; it is the adapter's one piece of
//! persistent data.

use glint_core::keycode::{KeyCode, MouseButton};
use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::KeyCode as WinitKeyCode;

/// Translate a physical winit key code to abstract key codes.
pub fn convert_key(code: WinitKeyCode) -> &'static [KeyCode] {
    use KeyCode::*;
    match code {
        WinitKeyCode::KeyA => &[A],
        WinitKeyCode::KeyB => &[B],
        WinitKeyCode::KeyC => &[C],
        WinitKeyCode::KeyD => &[D],
        WinitKeyCode::KeyE => &[E],
        WinitKeyCode::KeyF => &[F],
        WinitKeyCode::KeyG => &[G],
        WinitKeyCode::KeyH => &[H],
        WinitKeyCode::KeyI => &[I],
        WinitKeyCode::KeyJ => &[J],
        WinitKeyCode::KeyK => &[K],
        WinitKeyCode::KeyL => &[L],
        WinitKeyCode::KeyM => &[M],
        WinitKeyCode::KeyN => &[N],
        WinitKeyCode::KeyO => &[O],
        WinitKeyCode::KeyP => &[P],
        WinitKeyCode::KeyQ => &[Q],
        WinitKeyCode::KeyR => &[R],
        WinitKeyCode::KeyS => &[S],
        WinitKeyCode::KeyT => &[T],
        WinitKeyCode::KeyU => &[U],
        WinitKeyCode::KeyV => &[V],
        WinitKeyCode::KeyW => &[W],
        WinitKeyCode::KeyX => &[X],
        WinitKeyCode::KeyY => &[Y],
        WinitKeyCode::KeyZ => &[Z],

        WinitKeyCode::Digit0 => &[Row0, Digit0],
        WinitKeyCode::Digit1 => &[Row1, Digit1],
        WinitKeyCode::Digit2 => &[Row2, Digit2],
        WinitKeyCode::Digit3 => &[Row3, Digit3],
        WinitKeyCode::Digit4 => &[Row4, Digit4],
        WinitKeyCode::Digit5 => &[Row5, Digit5],
        WinitKeyCode::Digit6 => &[Row6, Digit6],
        WinitKeyCode::Digit7 => &[Row7, Digit7],
        WinitKeyCode::Digit8 => &[Row8, Digit8],
        WinitKeyCode::Digit9 => &[Row9, Digit9],

        WinitKeyCode::Numpad0 => &[Numpad0, Digit0],
        WinitKeyCode::Numpad1 => &[Numpad1, Digit1],
        WinitKeyCode::Numpad2 => &[Numpad2, Digit2],
        WinitKeyCode::Numpad3 => &[Numpad3, Digit3],
        WinitKeyCode::Numpad4 => &[Numpad4, Digit4],
        WinitKeyCode::Numpad5 => &[Numpad5, Digit5],
        WinitKeyCode::Numpad6 => &[Numpad6, Digit6],
        WinitKeyCode::Numpad7 => &[Numpad7, Digit7],
        WinitKeyCode::Numpad8 => &[Numpad8, Digit8],
        WinitKeyCode::Numpad9 => &[Numpad9, Digit9],

        WinitKeyCode::Escape => &[Escape],
        WinitKeyCode::Backquote => &[Grave],
        WinitKeyCode::CapsLock => &[CapsLock],
        WinitKeyCode::ShiftLeft | WinitKeyCode::ShiftRight => &[Shift],
        WinitKeyCode::ControlLeft | WinitKeyCode::ControlRight => &[Control],
        WinitKeyCode::AltLeft | WinitKeyCode::AltRight => &[Alt],
        WinitKeyCode::Space => &[Space],
        WinitKeyCode::ContextMenu => &[ContextMenu],

        WinitKeyCode::F1 => &[F1],
        WinitKeyCode::F2 => &[F2],
        WinitKeyCode::F3 => &[F3],
        WinitKeyCode::F4 => &[F4],
        WinitKeyCode::F5 => &[F5],
        WinitKeyCode::F6 => &[F6],
        WinitKeyCode::F7 => &[F7],
        WinitKeyCode::F8 => &[F8],
        WinitKeyCode::F9 => &[F9],
        WinitKeyCode::F10 => &[F10],
        WinitKeyCode::F11 => &[F11],
        WinitKeyCode::F12 => &[F12],

        WinitKeyCode::Pause => &[Pause],
        WinitKeyCode::Insert => &[Insert],
        WinitKeyCode::Delete => &[Delete],
        WinitKeyCode::Minus => &[Minus],
        WinitKeyCode::Equal | WinitKeyCode::NumpadEqual => &[Equals],
        WinitKeyCode::Backspace => &[Backspace],
        WinitKeyCode::NumLock => &[NumLock],

        WinitKeyCode::NumpadDivide => &[NumpadDivide],
        WinitKeyCode::NumpadMultiply => &[NumpadMultiply],
        WinitKeyCode::NumpadSubtract => &[NumpadSubtract],
        WinitKeyCode::NumpadAdd => &[NumpadAdd],
        WinitKeyCode::NumpadDecimal => &[NumpadDecimal],

        WinitKeyCode::BracketLeft => &[BracketOpen],
        WinitKeyCode::BracketRight => &[BracketClose],
        WinitKeyCode::Backslash => &[Backslash],
        WinitKeyCode::Semicolon => &[Semicolon],
        WinitKeyCode::Quote => &[Quote],
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => &[Enter],
        WinitKeyCode::Comma | WinitKeyCode::NumpadComma => &[Comma],
        WinitKeyCode::Period => &[Period],
        WinitKeyCode::Slash => &[Slash],

        WinitKeyCode::ArrowLeft => &[Left],
        WinitKeyCode::ArrowRight => &[Right],
        WinitKeyCode::ArrowUp => &[Up],
        WinitKeyCode::ArrowDown => &[Down],

        _ => &[],
    }
}

/// Translate a winit mouse button; buttons without an abstract equivalent
/// (back/forward/extra) return None and are ignored.
pub fn convert_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
