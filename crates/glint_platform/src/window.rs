use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Window options supplied by the embedding application.
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Borderless fullscreen on the current monitor; width/height ignored.
    pub fullscreen: bool,
    /// Redraw every frame (the default) instead of only after
    /// input/resize changes.
    pub render_continuously: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            render_continuously: true,
        }
    }
}

pub fn create_window(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Arc<Window>, String> {
    let mut attrs = WindowAttributes::default().with_title(&config.title);
    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    } else {
        attrs = attrs.with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
    }

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| format!("Failed to create window: {e}"))?;
    log::info!(
        "Window created: '{}' ({})",
        config.title,
        if config.fullscreen {
            "fullscreen".to_string()
        } else {
            format!("{}x{}", config.width, config.height)
        }
    );
    Ok(Arc::new(window))
}
