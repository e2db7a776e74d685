//! Command line parsing and validation.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use rmdialog_core::geometry::Size;
use rmdialog_text::{Alignment, HorizontalAlign, IconSide, VerticalAlign, Viewport};

use crate::{delay::DelayPolicy, error::ConfigError};

/// Show a line of dialogue in a retro RPG text box, one character at a time.
///
/// Closes on window close, or on Enter once all text is shown.
#[derive(Parser, Debug, Clone)]
#[command(name = "rmdialog", version)]
pub struct Cli {
    /// The dialogue text to display
    pub text: String,

    /// Background image, stretched over the whole window
    #[arg(long, value_name = "FILE", default_value = "test.png")]
    pub background: PathBuf,

    /// Speaker icon image
    #[arg(long, value_name = "FILE", default_value = "testbg.png")]
    pub icon: PathBuf,

    /// Blip sound played for each revealed character
    #[arg(long, value_name = "FILE", default_value = "text.wav")]
    pub sound: PathBuf,

    /// TrueType/OpenType font file
    #[arg(long, value_name = "FILE", default_value = "font.ttf")]
    pub font: PathBuf,

    /// Which side the icon sits on
    #[arg(long, value_enum, default_value_t = SideArg::Left)]
    pub side: SideArg,

    /// Font size in pixels
    #[arg(long, allow_negative_numbers = true, value_name = "SIZE", default_value_t = 24)]
    pub fontsize: i32,

    /// Window width in pixels
    #[arg(long, allow_negative_numbers = true, default_value_t = 800)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, allow_negative_numbers = true, default_value_t = 600)]
    pub height: i32,

    /// Seconds between characters
    #[arg(long, allow_negative_numbers = true, value_name = "SECS", default_value_t = 0.05)]
    pub speed: f64,

    /// Delay multiplier after . ! ?
    #[arg(long, allow_negative_numbers = true, value_name = "MULT", default_value_t = DelayPolicy::DEFAULT_HEAVY)]
    pub delayheavy: f64,

    /// Delay multiplier after , ; :
    #[arg(long, allow_negative_numbers = true, value_name = "MULT", default_value_t = DelayPolicy::DEFAULT_LIGHT)]
    pub delaylight: f64,

    /// Icon dimensions in pixels
    #[arg(long, allow_negative_numbers = true, num_args = 2, value_names = ["W", "H"], default_values_t = [64, 64])]
    pub iconsize: Vec<i32>,

    /// Gap between the window edge, icon and text
    #[arg(long, allow_negative_numbers = true, value_name = "PIXELS", default_value_t = 20)]
    pub padding: i32,

    /// Horizontal text alignment
    #[arg(long, value_enum, default_value_t = HAlignArg::Left)]
    pub halign: HAlignArg,

    /// Vertical text alignment
    #[arg(long, value_enum, default_value_t = VAlignArg::Bottom)]
    pub valign: VAlignArg,

    /// Log filter such as `debug` or `rmdialog=trace`; RUST_LOG takes precedence
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,

    /// Serve puffin profiling data while running
    #[arg(long)]
    pub profile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HAlignArg {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VAlignArg {
    Top,
    Middle,
    Bottom,
}

impl From<SideArg> for IconSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => IconSide::Left,
            SideArg::Right => IconSide::Right,
        }
    }
}

impl From<HAlignArg> for HorizontalAlign {
    fn from(align: HAlignArg) -> Self {
        match align {
            HAlignArg::Left => HorizontalAlign::Left,
            HAlignArg::Center => HorizontalAlign::Center,
            HAlignArg::Right => HorizontalAlign::Right,
        }
    }
}

impl From<VAlignArg> for VerticalAlign {
    fn from(align: VAlignArg) -> Self {
        match align {
            VAlignArg::Top => VerticalAlign::Top,
            VAlignArg::Middle => VerticalAlign::Middle,
            VAlignArg::Bottom => VerticalAlign::Bottom,
        }
    }
}

/// Validated settings for one dialogue run.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueConfig {
    pub text: String,
    pub background: PathBuf,
    pub icon: PathBuf,
    pub sound: PathBuf,
    pub font: PathBuf,
    pub font_size: u32,
    pub viewport: Viewport,
    pub alignment: Alignment,
    pub delays: DelayPolicy,
    pub log_level: String,
    pub profile: bool,
}

impl DialogueConfig {
    pub fn window_size(&self) -> Size<u32> {
        Size::new(
            self.viewport.size.width as u32,
            self.viewport.size.height as u32,
        )
    }
}

fn positive_int(name: &'static str, value: i32) -> Result<i32, ConfigError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive {
            name,
            value: value.to_string(),
        })
    }
}

fn positive_float(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    // Also rejects NaN.
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive {
            name,
            value: value.to_string(),
        })
    }
}

fn duration(name: &'static str, secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::OutOfRange {
        name,
        value: secs.to_string(),
    })
}

impl TryFrom<Cli> for DialogueConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.text.is_empty() {
            return Err(ConfigError::EmptyText);
        }

        let width = positive_int("width", cli.width)?;
        let height = positive_int("height", cli.height)?;
        let font_size = positive_int("fontsize", cli.fontsize)?;

        // Repeated --iconsize flags append; the last pair wins.
        let (icon_width, icon_height) = match cli.iconsize.as_slice() {
            [.., w, h] => (*w, *h),
            _ => (64, 64),
        };
        let icon_width = positive_int("iconsize", icon_width)?;
        let icon_height = positive_int("iconsize", icon_height)?;

        if cli.padding < 0 {
            return Err(ConfigError::NegativePadding(cli.padding));
        }

        let speed = positive_float("speed", cli.speed)?;
        let heavy = positive_float("delayheavy", cli.delayheavy)?;
        let light = positive_float("delaylight", cli.delaylight)?;
        let base = duration("speed", speed)?;
        duration("delayheavy", speed * heavy)?;
        duration("delaylight", speed * light)?;

        let viewport = Viewport {
            size: Size::new(width, height),
            padding: cli.padding,
            icon: Size::new(icon_width, icon_height),
            side: cli.side.into(),
        };
        let available = viewport.text_max_width();
        if available <= 0 {
            return Err(ConfigError::NoTextRoom { available });
        }

        Ok(DialogueConfig {
            text: cli.text,
            background: cli.background,
            icon: cli.icon,
            sound: cli.sound,
            font: cli.font,
            font_size: font_size as u32,
            viewport,
            alignment: Alignment::new(cli.halign.into(), cli.valign.into()),
            delays: DelayPolicy::new(base, heavy, light),
            log_level: cli.log_level,
            profile: cli.profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["rmdialog"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn config(args: &[&str]) -> Result<DialogueConfig, ConfigError> {
        DialogueConfig::try_from(parse(args))
    }

    #[test]
    fn defaults_match_the_classic_box() {
        let cli = parse(&["Hello"]);
        assert_eq!(cli.background, PathBuf::from("test.png"));
        assert_eq!(cli.icon, PathBuf::from("testbg.png"));
        assert_eq!(cli.sound, PathBuf::from("text.wav"));
        assert_eq!(cli.font, PathBuf::from("font.ttf"));
        assert_eq!(cli.side, SideArg::Left);
        assert_eq!(cli.fontsize, 24);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.speed, 0.05);
        assert_eq!(cli.iconsize, vec![64, 64]);
        assert_eq!(cli.padding, 20);
        assert_eq!(cli.halign, HAlignArg::Left);
        assert_eq!(cli.valign, VAlignArg::Bottom);
        assert_eq!(cli.delayheavy, 5.0);
        assert_eq!(cli.delaylight, 3.0);
        assert_eq!(cli.log_level, "info");
        assert!(!cli.profile);

        let config = DialogueConfig::try_from(cli).unwrap();
        assert_eq!(config.window_size(), Size::new(800, 600));
        assert_eq!(config.viewport.icon, Size::new(64, 64));
        assert_eq!(config.alignment, Alignment::default());
        assert_eq!(config.viewport.side, IconSide::Left);
    }

    #[test]
    fn every_option_is_parsed() {
        let config = config(&[
            "--background", "bg.png",
            "--icon", "face.png",
            "--sound", "blip.ogg",
            "--font", "pixel.ttf",
            "--side", "right",
            "--fontsize", "16",
            "--width", "640",
            "--height", "200",
            "--speed", "0.25",
            "--delayheavy", "2",
            "--delaylight", "1.5",
            "--iconsize", "48", "32",
            "--padding", "8",
            "--halign", "center",
            "--valign", "middle",
            "--log-level", "debug",
            "--profile",
            "What a storm!",
        ])
        .unwrap();

        assert_eq!(config.text, "What a storm!");
        assert_eq!(config.background, PathBuf::from("bg.png"));
        assert_eq!(config.sound, PathBuf::from("blip.ogg"));
        assert_eq!(config.font_size, 16);
        assert_eq!(
            config.viewport,
            Viewport {
                size: Size::new(640, 200),
                padding: 8,
                icon: Size::new(48, 32),
                side: IconSide::Right,
            }
        );
        assert_eq!(
            config.alignment,
            Alignment::new(HorizontalAlign::Center, VerticalAlign::Middle)
        );
        assert_eq!(config.log_level, "debug");
        assert!(config.profile);
    }

    #[test]
    fn delay_multipliers_reach_the_policy() {
        let config = config(&["--speed", "0.5", "--delayheavy", "4", "--delaylight", "2", "Hi."]).unwrap();
        assert_eq!(config.delays.base(), Duration::from_millis(500));
        assert_eq!(config.delays.delay_for('.'), Duration::from_secs(2));
        assert_eq!(config.delays.delay_for(','), Duration::from_secs(1));
        assert_eq!(config.delays.delay_for('H'), Duration::from_millis(500));
    }

    #[test]
    fn missing_text_is_a_usage_error() {
        let err = Cli::try_parse_from(["rmdialog"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_alignment_is_a_usage_error() {
        let err = Cli::try_parse_from(["rmdialog", "--halign", "justify", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(config(&[""]), Err(ConfigError::EmptyText));
    }

    #[test]
    fn non_positive_numbers_are_rejected() {
        let cases: &[(&[&str], &str)] = &[
            (&["--width", "0"], "width"),
            (&["--height", "-10"], "height"),
            (&["--fontsize", "0"], "fontsize"),
            (&["--iconsize", "0", "64"], "iconsize"),
            (&["--iconsize", "64", "-1"], "iconsize"),
            (&["--speed", "0"], "speed"),
            (&["--speed", "-0.5"], "speed"),
            (&["--speed", "NaN"], "speed"),
            (&["--delayheavy", "0"], "delayheavy"),
            (&["--delaylight", "-3"], "delaylight"),
        ];

        for (args, expected) in cases {
            let mut args = args.to_vec();
            args.push("text");
            match config(&args) {
                Err(ConfigError::NonPositive { name, .. }) => assert_eq!(name, *expected),
                other => panic!("{:?} gave {:?}", args, other),
            }
        }
    }

    #[test]
    fn negative_padding_is_rejected() {
        assert_eq!(
            config(&["--padding", "-1", "text"]),
            Err(ConfigError::NegativePadding(-1))
        );
    }

    #[test]
    fn huge_speed_is_out_of_range() {
        assert!(matches!(
            config(&["--speed", "1e300", "text"]),
            Err(ConfigError::OutOfRange { name: "speed", .. })
        ));
        assert!(matches!(
            config(&["--speed", "1e15", "--delayheavy", "1e10", "text"]),
            Err(ConfigError::OutOfRange { name: "delayheavy", .. })
        ));
    }

    #[test]
    fn crowded_window_has_no_text_room() {
        assert_eq!(
            config(&["--width", "100", "text"]),
            Err(ConfigError::NoTextRoom { available: -24 })
        );
    }

    #[test]
    fn repeated_iconsize_uses_last_pair() {
        let config = config(&["--iconsize", "10", "10", "--iconsize", "32", "48", "text"]).unwrap();
        assert_eq!(config.viewport.icon, Size::new(32, 48));
    }
}
