//! Non-blocking access to the winit event loop.
//!
//! `EventPump` owns the event loop and pumps it on demand instead of handing
//! control to `run_app`. Callers decide when to look at input, which lets a
//! sequential driver poll between its own steps.

use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::{
    error::{PlatformError, PlatformResult},
    event::{Event, EventBatch, EventQueue},
    window::{Window, WindowDescriptor},
};

/// How many pump iterations to wait for the platform to let us create a window.
const WINDOW_CREATE_ATTEMPTS: u32 = 100;
const WINDOW_CREATE_POLL: Duration = Duration::from_millis(10);

#[derive(Default)]
struct PumpHandler {
    pending_window: Option<WindowDescriptor>,
    window: Option<Window>,
    create_error: Option<PlatformError>,
    events: EventQueue,
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(descriptor) = self.pending_window.take() else {
            return;
        };

        match Window::new(event_loop, descriptor) {
            Ok(window) => {
                tracing::debug!("Created window {:?}", window.id());
                self.window = Some(window);
            }
            Err(e) => self.create_error = Some(e.into()),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: winit::event::WindowEvent,
    ) {
        if self.window.as_ref().map(Window::id) != Some(window_id) {
            return;
        }

        if let Some(event) = Event::from_winit(event) {
            self.events.push(event);
        }
    }
}

pub struct EventPump {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
    exited: bool,
}

impl EventPump {
    pub fn new() -> PlatformResult<Self> {
        let event_loop = EventLoop::new()?;
        Ok(Self {
            event_loop,
            handler: PumpHandler::default(),
            exited: false,
        })
    }

    /// Create the window, pumping the event loop until the platform allows it.
    pub fn create_window(&mut self, descriptor: WindowDescriptor) -> PlatformResult<Window> {
        if let Some(window) = &self.handler.window {
            return Ok(window.clone());
        }

        self.handler.pending_window = Some(descriptor);

        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            let status = self
                .event_loop
                .pump_app_events(Some(WINDOW_CREATE_POLL), &mut self.handler);

            if let Some(err) = self.handler.create_error.take() {
                return Err(err);
            }
            if let Some(window) = &self.handler.window {
                return Ok(window.clone());
            }
            if let PumpStatus::Exit(code) = status {
                self.exited = true;
                return Err(PlatformError::EventLoopExited(code));
            }
        }

        Err(PlatformError::WindowNotCreated {
            attempts: WINDOW_CREATE_ATTEMPTS,
        })
    }

    /// Collect every event the platform has queued without blocking.
    ///
    /// Once the event loop has exited, every poll reports a close request.
    pub fn poll(&mut self) -> EventBatch {
        if self.exited {
            self.handler.events.push(Event::CloseRequested);
        } else if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler)
        {
            tracing::debug!("Event loop exited with code {}", code);
            self.exited = true;
            self.handler.events.push(Event::CloseRequested);
        }

        self.handler.events.drain()
    }

    pub fn window(&self) -> Option<&Window> {
        self.handler.window.as_ref()
    }
}
