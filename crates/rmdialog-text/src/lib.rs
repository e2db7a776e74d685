//! rmdialog Text
//!
//! Turns a dialogue string into positioned lines:
//!
//! 1. [`wrap`] splits the text greedily so every line fits the text column.
//! 2. [`layout`] places each line according to the alignment modes.
//! 3. [`DialogueFont`] measures and rasterises the lines onto a canvas.
//!
//! Wrapping and layout only need a [`TextMetrics`] implementation, so they can
//! run against [`MonospaceMetrics`] without loading a font.

pub mod error;
pub mod font;
pub mod layout;
pub mod metrics;
pub mod wrap;

pub use error::{TextError, TextResult};
pub use font::DialogueFont;
pub use layout::{
    Alignment, HorizontalAlign, IconSide, LayoutBox, VerticalAlign, Viewport, layout,
};
pub use metrics::{LINE_SPACING, MonospaceMetrics, TextMetrics};
pub use wrap::{WrappedLine, wrap};
