//! Window and Event Loop Management
//!
//! Glue between winit's `ApplicationHandler` and the canvas.

use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::input::{CanvasEvent, PointerTracker};
use crate::{Canvas, CanvasConfig, Renderer};

/// Wrapper for the application window and state
pub struct AppWrapper {
    config: CanvasConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    canvas: Option<Canvas>,
    pointer: PointerTracker,
    /// Set when startup failed and the loop was asked to exit
    error: Option<anyhow::Error>,
}

impl AppWrapper {
    /// Create a new empty app wrapper
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            canvas: None,
            pointer: PointerTracker::new(),
            error: None,
        }
    }

    /// Take the error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let canvas = Canvas::new(&self.config)?;

        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(window_attributes)
            .context("Failed to create window")?;
        log::info!("Window created: {:?}", window.inner_size());

        // The window manager may not have applied our size yet
        let mut size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            size = PhysicalSize::new(self.config.width, self.config.height);
        }

        let window = Arc::new(window);
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            size,
            canvas.theme().background,
        ))?;

        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.canvas = Some(canvas);
        Ok(())
    }
}

impl ApplicationHandler for AppWrapper {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(()) => log::info!("✅ Canvas ready"),
            Err(e) => {
                log::error!("Startup failed: {:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(physical_size) => {
                log::info!("Resize event: {:?}", physical_size);
                if let Some(renderer) = &mut self.renderer {
                    // No-op when the size already matches the canvas
                    if renderer.size() != physical_size {
                        renderer.resize(physical_size);
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                return;
            }
            _ => {}
        }

        let Some(canvas_event) = self.pointer.translate(&event) else {
            return;
        };

        let (Some(window), Some(renderer), Some(canvas)) = (&self.window, &mut self.renderer, &mut self.canvas) else {
            return;
        };

        let drew = canvas.handle(canvas_event, renderer);
        if canvas_event == CanvasEvent::Expose {
            renderer.render();
        } else if drew {
            // Wait mode: only redraw when something changed
            window.request_redraw();
        }
    }
}
