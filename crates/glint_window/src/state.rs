//! Translation from raw input state into the per-frame component snapshot.
//!
//! The native layer reports the cursor in physical pixels with a top-left
//! origin; components see `[0, 1]²` with a bottom-left origin. The flip and
//! normalization live here so both the update snapshot and click dispatch
//! agree on coordinates.

use glint_core::component::FrameState;
use glint_core::input::InputState;

/// Build the frame snapshot for the current window size.
///
/// When the cursor is outside the window both coordinates are NaN, so a
/// component's range-based hit tests fail without an explicit inside check.
/// Deltas stay zero in that case as well.
pub fn frame_state(input: &InputState, size: (u32, u32)) -> FrameState {
    let (w, h) = size;
    if w == 0 || h == 0 || !input.mouse_inside {
        return FrameState::new(f32::NAN, f32::NAN, 0.0, 0.0, false, size);
    }

    let x = (input.mouse_position.0 / w as f64) as f32;
    let y = 1.0 - (input.mouse_position.1 / h as f64) as f32;
    let dx = (input.mouse_delta.0 / w as f64) as f32;
    // Screen y grows downward, GUI y grows upward.
    let dy = -(input.mouse_delta.1 / h as f64) as f32;

    FrameState::new(x, y, dx, dy, true, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_inside_is_normalized_with_bottom_left_origin() {
        let mut input = InputState::new();
        input.mouse_inside = true;
        input.move_cursor((200.0, 150.0));

        let state = frame_state(&input, (800, 600));
        assert!((state.mouse_x() - 0.25).abs() < 1e-6);
        // 150 px down from the top of a 600 px window is y = 0.75.
        assert!((state.mouse_y() - 0.75).abs() < 1e-6);
        assert!(state.mouse_over());
        assert_eq!(state.window_size(), (800, 600));
    }

    #[test]
    fn cursor_outside_yields_nan_coordinates() {
        let mut input = InputState::new();
        input.mouse_inside = false;
        input.move_cursor((200.0, 150.0));

        let state = frame_state(&input, (800, 600));
        assert!(state.mouse_x().is_nan());
        assert!(state.mouse_y().is_nan());
        assert!(!state.mouse_over());
        assert_eq!(state.mouse_dx(), 0.0);
        assert_eq!(state.mouse_dy(), 0.0);
    }

    #[test]
    fn deltas_are_normalized_and_y_flipped() {
        let mut input = InputState::new();
        input.mouse_inside = true;
        input.move_cursor((0.0, 0.0));
        input.move_cursor((80.0, 60.0));

        let state = frame_state(&input, (800, 600));
        assert!((state.mouse_dx() - 0.1).abs() < 1e-6);
        // Downward screen motion is negative GUI-y motion.
        assert!((state.mouse_dy() + 0.1).abs() < 1e-6);
    }

    #[test]
    fn first_cursor_report_yields_zero_delta() {
        let mut input = InputState::new();
        input.mouse_inside = true;
        // A cursor sitting near the far corner when the window opens must
        // not read as near-full-window motion.
        input.move_cursor((790.0, 10.0));

        let state = frame_state(&input, (800, 600));
        assert_eq!(state.mouse_dx(), 0.0);
        assert_eq!(state.mouse_dy(), 0.0);
        assert!((state.mouse_x() - 0.9875).abs() < 1e-6);
    }

    #[test]
    fn corners_map_to_unit_square_corners() {
        let mut input = InputState::new();
        input.mouse_inside = true;

        input.move_cursor((0.0, 600.0));
        let bottom_left = frame_state(&input, (800, 600));
        assert_eq!(bottom_left.mouse_x(), 0.0);
        assert_eq!(bottom_left.mouse_y(), 0.0);

        input.move_cursor((800.0, 0.0));
        let top_right = frame_state(&input, (800, 600));
        assert_eq!(top_right.mouse_x(), 1.0);
        assert_eq!(top_right.mouse_y(), 1.0);
    }

    #[test]
    fn zero_sized_window_yields_nan() {
        let mut input = InputState::new();
        input.mouse_inside = true;
        input.move_cursor((10.0, 10.0));

        // Minimized windows report a (0, 0) inner size; either dimension
        // being zero makes the snapshot unusable for hit tests.
        for size in [(0, 0), (0, 600), (800, 0)] {
            let state = frame_state(&input, size);
            assert!(state.mouse_x().is_nan(), "{size:?}");
            assert!(state.mouse_y().is_nan(), "{size:?}");
            assert!(!state.mouse_over(), "{size:?}");
        }
    }
}
