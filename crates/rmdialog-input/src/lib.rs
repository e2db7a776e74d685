//! Input state for the dialogue box.
//!
//! The dialogue only cares about two things: the user asking to quit (window
//! close) and the user accepting the finished text (Enter).

use rmdialog_winit::event::{Event, EventBatch, HandleStatus, Key, NamedKey};

/// What the dialogue should do in response to input since the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSignal {
    #[default]
    None,
    /// Enter was pressed.
    Accept,
    /// The window was asked to close.
    Quit,
}

#[derive(Debug, Default)]
pub struct InputState {
    quit_requested: bool,
    accept_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    /// Consume the events this state understands and leave the rest in the batch.
    pub fn handle_events(&mut self, events: &mut EventBatch) {
        events.dispatch(|event| match event {
            Event::CloseRequested => {
                tracing::debug!("Close requested");
                self.quit_requested = true;
                HandleStatus::consumed()
            }
            Event::KeyInput(key)
                if key.is_pressed() && key.logical_key == Key::Named(NamedKey::Enter) =>
            {
                self.accept_pressed = true;
                HandleStatus::consumed()
            }
            _ => HandleStatus::ignored(),
        });
    }

    /// Report the strongest pending signal.
    ///
    /// A quit request stays set for the rest of the run; an accept is cleared
    /// once it has been reported.
    pub fn take_signal(&mut self) -> InputSignal {
        if self.quit_requested {
            return InputSignal::Quit;
        }
        if std::mem::take(&mut self.accept_pressed) {
            return InputSignal::Accept;
        }
        InputSignal::None
    }
}
