//! rmdialog - a retro RPG dialogue box
//!
//! Shows a background, a speaker icon and a block of text that appears one
//! character at a time with a blip per character, then waits for Enter or a
//! window close.
//!
//! The pieces are split into crates the way a small engine would split them:
//!
//! - [`core`]: logging, profiling and geometry
//! - [`winit`]: the window and its non-blocking event pump
//! - [`input`]: quit and accept signals
//! - [`render`]: CPU frame composition and GPU presentation
//! - [`text`]: wrapping, layout and the font
//! - [`audio`]: blip playback
//!
//! This crate ties them together. [`reveal`] holds the typewriter engine,
//! which only talks to the outside world through [`PresentationSink`],
//! [`InputPoller`] and [`Timer`].

pub mod app;
pub mod config;
pub mod delay;
pub mod error;
pub mod platform;
pub mod resources;
pub mod reveal;
pub mod scene;

pub use rmdialog_audio as audio;
pub use rmdialog_core as core;
pub use rmdialog_input as input;
pub use rmdialog_render as render;
pub use rmdialog_text as text;
pub use rmdialog_winit as winit;

pub use app::run;
pub use config::{Cli, DialogueConfig};
pub use delay::DelayPolicy;
pub use error::{ConfigError, DialogueError, DialogueResult, ResourceError};
pub use reveal::{
    AsyncTimer, Dismissal, InputPoller, PresentationSink, RevealOutcome, RevealScheduler,
    RevealState, Timer, wait_for_dismissal,
};
