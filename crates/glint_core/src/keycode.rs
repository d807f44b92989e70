//! Abstract key and mouse button codes.
//!
//! The code set is deliberately coarser than any native keyboard layout:
//! left/right modifier pairs collapse into one code, while digits exist in
//! three flavors — `Row*` (number row), `Numpad*` (keypad), and the generic
//! `Digit*` that both of the physical keys *also* produce. Components that
//! only care about "the user typed 5" match on `Digit5`; components that
//! need the physical distinction match on `Row5`/`Numpad5`.

/// Abstract key identifier dispatched to `GuiComponent::key_pressed` /
/// `key_released`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Generic digits: produced by BOTH the number row and the numpad.
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Number-row digits.
    Row0,
    Row1,
    Row2,
    Row3,
    Row4,
    Row5,
    Row6,
    Row7,
    Row8,
    Row9,

    // Numpad digits.
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,

    Escape,
    Grave,
    CapsLock,
    /// Either shift key.
    Shift,
    /// Either control key.
    Control,
    /// Either alt key.
    Alt,
    Space,
    ContextMenu,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Pause,
    Insert,
    Delete,
    Minus,
    Equals,
    Backspace,
    NumLock,

    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadDecimal,

    BracketOpen,
    BracketClose,
    Backslash,
    Semicolon,
    Quote,
    /// Main Enter and numpad Enter both produce this code.
    Enter,
    Comma,
    Period,
    Slash,

    Left,
    Right,
    Up,
    Down,
}

/// Abstract mouse button dispatched to `GuiComponent::click` and tracked by
/// `InputState`. Extra buttons on gaming mice have no abstract equivalent
/// and are ignored at the platform boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
