use rmdialog_core::geometry::Size;
use rmdialog_input::{InputSignal, InputState};
use rmdialog_winit::{
    EventPump,
    window::{Window, WindowDescriptor},
};

use crate::{error::DialogueResult, reveal::InputPoller};

/// The dialogue window and the input state fed by its event loop.
pub struct Platform {
    pump: EventPump,
    window: Window,
    input: InputState,
}

impl Platform {
    /// Open the fixed-size, borderless dialogue window.
    pub fn new(size: Size<u32>) -> DialogueResult<Self> {
        let mut pump = EventPump::new()?;
        let window = pump.create_window(WindowDescriptor {
            size,
            ..WindowDescriptor::default()
        })?;
        tracing::info!(
            "Created {}x{} dialogue window (scale factor {})",
            size.width,
            size.height,
            window.scale_factor()
        );

        Ok(Self {
            pump,
            window,
            input: InputState::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl InputPoller for Platform {
    fn poll(&mut self) -> DialogueResult<InputSignal> {
        let mut events = self.pump.poll();
        self.input.handle_events(&mut events);
        if !events.is_empty() {
            tracing::trace!("{} unhandled window events", events.len());
        }
        Ok(self.input.take_signal())
    }
}
