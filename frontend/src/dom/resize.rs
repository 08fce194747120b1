use log::info;

use super::listener::EventListener;
use crate::viewport::{ResizeBridge, Viewport};

pub fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

/// The window's `resize` event feeding a [`ResizeBridge`].
pub struct WindowResize {
    bridge: ResizeBridge,
    _listener: EventListener,
}

impl WindowResize {
    pub fn attach() -> Option<Self> {
        let bridge = ResizeBridge::new(window_viewport()?);
        let listener = {
            let bridge = bridge.clone();
            EventListener::on_window("resize", move |_| {
                if let Some(viewport) = window_viewport() {
                    bridge.notify(viewport);
                }
            })?
        };
        info!("resize bridge attached");
        Some(Self {
            bridge,
            _listener: listener,
        })
    }

    pub fn bridge(&self) -> &ResizeBridge {
        &self.bridge
    }
}
