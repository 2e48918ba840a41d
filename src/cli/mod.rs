use clap::{Subcommand, ValueEnum};

use crate::domain::Theme;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive forecaster (default)
    Tui,

    /// Forecast a single topic and print the predictions
    Predict {
        /// Industry, platform, or niche to analyze
        topic: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeArg {
    Light,
    #[default]
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}
