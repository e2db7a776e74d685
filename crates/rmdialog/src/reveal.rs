//! The typewriter reveal: one character at a time, with input checked before each.

use std::{future::Future, time::Duration};

use rmdialog_core::profiling::profile_scope;
use rmdialog_input::InputSignal;
use rmdialog_text::{LayoutBox, WrappedLine};

use crate::{delay::DelayPolicy, error::DialogueResult};

/// How long the terminal wait idles between input polls.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(16);

/// Where revealed text ends up.
pub trait PresentationSink {
    /// Show `text` as the current content of line `index`, replacing what
    /// was previously drawn for that line.
    fn draw_line(&mut self, index: usize, text: &str, layout: &LayoutBox) -> DialogueResult<()>;

    /// Make everything drawn so far visible.
    fn present(&mut self) -> DialogueResult<()>;

    /// Start the blip sound without waiting for it to finish.
    fn play_blip(&mut self) -> DialogueResult<()>;
}

/// Source of quit and accept signals.
pub trait InputPoller {
    /// Collect pending input without blocking.
    fn poll(&mut self) -> DialogueResult<InputSignal>;
}

/// Suspends the reveal between characters.
pub trait Timer {
    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()>;
}

/// Wall-clock timer backed by the `async-io` reactor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsyncTimer;

impl Timer for AsyncTimer {
    async fn sleep(&mut self, duration: Duration) {
        async_io::Timer::after(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every character of every line was shown.
    Completed,
    /// A quit signal arrived before the text finished.
    Cancelled,
}

/// How the finished dialogue was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Accepted,
    Quit,
}

/// Progress through one line.
///
/// The revealed prefix is always the first `cursor` characters of the line.
#[derive(Debug, Clone)]
pub struct RevealState<'a> {
    line: &'a str,
    cursor: usize,
    end: usize,
}

impl<'a> RevealState<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            cursor: 0,
            end: 0,
        }
    }

    pub fn revealed_prefix(&self) -> &'a str {
        &self.line[..self.end]
    }

    /// Characters revealed so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.end == self.line.len()
    }

    /// Reveal the next character and return it, or `None` once the line is complete.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.line[self.end..].chars().next()?;
        self.end += ch.len_utf8();
        self.cursor += 1;
        Some(ch)
    }
}

/// Drives the reveal of laid-out lines.
#[derive(Debug, Clone, Copy)]
pub struct RevealScheduler {
    delays: DelayPolicy,
}

impl RevealScheduler {
    pub fn new(delays: DelayPolicy) -> Self {
        Self { delays }
    }

    /// Reveal `lines` at their `boxes`, in reading order.
    ///
    /// Input is polled before every character. A quit stops the reveal
    /// before that character is drawn or heard. Accept signals are ignored
    /// until the text is complete.
    pub async fn run<S, I, T>(
        &self,
        lines: &[WrappedLine],
        boxes: &[LayoutBox],
        sink: &mut S,
        input: &mut I,
        timer: &mut T,
    ) -> DialogueResult<RevealOutcome>
    where
        S: PresentationSink,
        I: InputPoller,
        T: Timer,
    {
        debug_assert_eq!(lines.len(), boxes.len());

        for (index, (line, layout)) in lines.iter().zip(boxes).enumerate() {
            tracing::debug!("Revealing line {}: {:?}", index, line.as_str());
            let mut state = RevealState::new(line.as_str());

            loop {
                if input.poll()? == InputSignal::Quit {
                    tracing::info!("Quit during reveal of line {}", index);
                    return Ok(RevealOutcome::Cancelled);
                }

                let Some(ch) = state.advance() else {
                    break;
                };

                {
                    profile_scope!("reveal_char");
                    sink.draw_line(index, state.revealed_prefix(), layout)?;
                    sink.present()?;
                    if !ch.is_whitespace() {
                        sink.play_blip()?;
                    }
                }

                timer.sleep(self.delays.delay_for(ch)).await;

                if state.is_complete() {
                    break;
                }
            }
        }

        Ok(RevealOutcome::Completed)
    }
}

/// Idle until the user closes the window or presses Enter.
pub async fn wait_for_dismissal<I, T>(input: &mut I, timer: &mut T) -> DialogueResult<Dismissal>
where
    I: InputPoller,
    T: Timer,
{
    loop {
        match input.poll()? {
            InputSignal::Quit => return Ok(Dismissal::Quit),
            InputSignal::Accept => return Ok(Dismissal::Accepted),
            InputSignal::None => timer.sleep(IDLE_INTERVAL).await,
        }
    }
}
