//! The window loop: owns the winit event loop, the GPU context, and the
//! root component, and translates native events into component callbacks.
//!
//! Architecture: winit drives the loop via `ApplicationHandler`. The window
//! and GPU surface are created lazily in `resumed`, then every native event
//! funnels through `window_event`:
//!
//!   1. Input events update `InputState` and dispatch through the listener's
//!      pre/post hooks to the root component
//!   2. Any dispatched event marks the window dirty
//!   3. `about_to_wait` requests a redraw when dirty (or always, in
//!      continuous mode)
//!   4. `RedrawRequested` runs update, batches the component's draw calls,
//!      and submits one render pass

mod state;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use glint_core::component::{GuiComponent, InitContext};
use glint_core::filter;
use glint_core::input::InputState;
use glint_core::keycode::MouseButton;
use glint_core::listener::WindowListener;
use glint_platform::{convert_key, convert_mouse_button, create_window, WindowConfig};
use glint_render::{BatchRenderer, GpuContext, TextureStore};

pub use state::frame_state;

/// Scroll amount per wheel detent, as a fraction of the component.
pub const SCROLL_LINE_STEP: f32 = 0.03;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Listener that lets every event through untouched.
struct PassthroughListener;

impl WindowListener for PassthroughListener {}

/// A native window hosting one root `GuiComponent`.
///
/// ```no_run
/// # use glint_window::GuiWindow;
/// # use glint_core::component::GuiComponent;
/// # use glint_core::render::GuiRenderer;
/// # struct Root;
/// # impl GuiComponent for Root {
/// #     fn render(&mut self, _r: &mut dyn GuiRenderer) {}
/// # }
/// let window = GuiWindow::new(Box::new(Root));
/// window.run().unwrap();
/// ```
pub struct GuiWindow {
    config: WindowConfig,
    root: Box<dyn GuiComponent>,
    listener: Box<dyn WindowListener>,
}

impl GuiWindow {
    pub fn new(root: Box<dyn GuiComponent>) -> Self {
        Self::with_config(root, WindowConfig::default())
    }

    pub fn with_config(root: Box<dyn GuiComponent>, config: WindowConfig) -> Self {
        Self {
            config,
            root,
            listener: Box::new(PassthroughListener),
        }
    }

    /// Replace the passthrough listener. Call before `run`.
    pub fn set_listener(&mut self, listener: Box<dyn WindowListener>) {
        self.listener = listener;
    }

    /// Run the event loop until the window closes. Blocks the calling
    /// thread; returns after close, or with the error that ended the loop.
    pub fn run(self) -> Result<(), String> {
        let continuous = self.config.render_continuously;
        let event_loop =
            EventLoop::new().map_err(|e| format!("Failed to create event loop: {e}"))?;
        event_loop.set_control_flow(if continuous {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        });

        let mut app = App {
            config: self.config,
            root: self.root,
            listener: self.listener,
            state: None,
            fatal: None,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| format!("Event loop error: {e}"))?;

        match app.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window-bound resources, created once the event loop hands us a window.
struct WindowState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: BatchRenderer,
    textures: TextureStore,
    input: InputState,
    /// Last reported inner size, zero while minimized. The surface
    /// configuration in `gpu` never holds zero, so frame skipping checks
    /// this field, not `gpu.size`.
    window_size: (u32, u32),
    /// Something happened since the last rendered frame.
    dirty: bool,
}

impl WindowState {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;
        let renderer = BatchRenderer::new(&gpu.device, gpu.surface_format);
        let textures = TextureStore::new(&gpu.device, &gpu.queue, renderer.pipeline());
        let window_size = gpu.size;
        Ok(Self {
            window,
            gpu,
            renderer,
            textures,
            input: InputState::new(),
            window_size,
            dirty: true,
        })
    }

    fn render_frame(&mut self, root: &mut dyn GuiComponent) {
        let Some((output, view)) = self.gpu.begin_frame() else {
            return;
        };

        self.renderer.begin_frame();
        root.render(&mut self.renderer);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("gui frame encoder"),
            });
        self.renderer.flush(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &view,
            &self.textures,
            CLEAR_COLOR,
        );
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

struct App {
    config: WindowConfig,
    root: Box<dyn GuiComponent>,
    listener: Box<dyn WindowListener>,
    state: Option<WindowState>,
    fatal: Option<String>,
}

impl App {
    fn dispatch_key_event(&mut self, event: &winit::event::KeyEvent) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        // Native repeats are dropped: components see one press per physical
        // press. Text editing widgets react to char_typed instead.
        if event.repeat {
            return;
        }

        // Typed text dispatches before the physical key codes.
        if event.state == ElementState::Pressed {
            if let Some(text) = &event.text {
                for c in text.chars().filter(|&c| filter::approve(c)) {
                    if !self.listener.pre_char_typed(c) {
                        self.root.char_typed(c);
                        self.listener.post_char_typed(c);
                    }
                    state.dirty = true;
                }
            }
        }

        for &key in convert_key(code) {
            match event.state {
                ElementState::Pressed => {
                    state.input.key_down(key);
                    if !self.listener.pre_key_pressed(key) {
                        self.root.key_pressed(key);
                        self.listener.post_key_pressed(key);
                    }
                }
                ElementState::Released => {
                    if !self.listener.pre_key_released(key) {
                        self.root.key_released(key);
                        self.listener.post_key_released(key);
                    }
                    state.input.key_up(key);
                }
            }
            state.dirty = true;
        }
    }

    fn dispatch_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };
        if pressed {
            state.input.mouse_down(button);
        } else {
            // Clicks fire on release, at the release position, and only
            // while the cursor is inside the window.
            let snapshot = frame_state(&state.input, state.window_size);
            if snapshot.mouse_over() {
                let (x, y) = (snapshot.mouse_x(), snapshot.mouse_y());
                if !self.listener.pre_click(x, y, button) {
                    self.root.click(x, y, button);
                    self.listener.post_click(x, y, button);
                }
            }
            state.input.mouse_up(button);
        }
        state.dirty = true;
    }

    fn dispatch_scroll(&mut self, amount: f32) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };
        let amount = self.listener.pre_scroll(amount);
        if amount != 0.0 {
            self.root.scroll(amount);
            self.listener.post_scroll(amount);
        }
        state.dirty = true;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let result = create_window(event_loop, &self.config).and_then(WindowState::new);
        match result {
            Ok(mut state) => {
                let mut ctx = InitContext {
                    textures: &mut state.textures,
                };
                self.root.init(&mut ctx);
                self.state = Some(state);
            }
            Err(err) => {
                log::error!("Window startup failed: {err}");
                self.fatal = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            if self.config.render_continuously || state.dirty {
                state.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.state.is_none() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(state) = self.state.as_mut() {
                    let (w, h) = (physical_size.width, physical_size.height);
                    // A minimize reports (0, 0); remember it so frames are
                    // skipped, but leave the surface at its last valid size.
                    state.window_size = (w, h);
                    if w > 0 && h > 0 {
                        state.gpu.resize(w, h);
                        state.dirty = true;
                        log::info!("Resized to {}x{}", w, h);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.dispatch_key_event(&event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(state) = self.state.as_mut() {
                    state.input.move_cursor((position.x, position.y));
                    state.input.mouse_inside = true;
                    state.dirty = true;
                }
            }

            WindowEvent::CursorEntered { .. } => {
                if let Some(state) = self.state.as_mut() {
                    state.input.mouse_inside = true;
                    state.dirty = true;
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(state) = self.state.as_mut() {
                    state.input.mouse_inside = false;
                    state.dirty = true;
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = convert_mouse_button(button) {
                    self.dispatch_mouse_button(button, state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * SCROLL_LINE_STEP,
                    MouseScrollDelta::PixelDelta(pos) => {
                        let height = self
                            .state
                            .as_ref()
                            .map(|s| s.window_size.1.max(1))
                            .unwrap_or(1);
                        (pos.y / height as f64) as f32
                    }
                };
                if amount != 0.0 {
                    self.dispatch_scroll(amount);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(state) = self.state.as_mut() else {
                    return;
                };
                if state.window_size.0 == 0 || state.window_size.1 == 0 {
                    return;
                }

                let snapshot = frame_state(&state.input, state.window_size);
                if !self.listener.pre_update() {
                    self.root.update(&snapshot);
                    self.listener.post_update();
                }

                state.render_frame(self.root.as_mut());

                state.input.end_frame();
                state.dirty = false;
            }

            _ => {}
        }
    }
}
