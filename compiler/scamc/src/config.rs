//! Command-line configuration shared by every command.

use std::io::Write;

use scam_diagnostic::emitter::{ColorMode, TerminalEmitter};
use thiserror::Error;

/// A flag the front end does not understand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("invalid value '{0}' for --color (expected auto, always or never)")]
    InvalidColor(String),
}

/// Runtime options gathered from flags and the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub color: ColorMode,
    /// Whether stderr is a terminal; only consulted for `ColorMode::Auto`.
    pub is_tty: bool,
    /// Evaluate files and top-level expressions on the rayon pool.
    pub parallel: bool,
    /// Report passing transcript cases too.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            color: ColorMode::Auto,
            is_tty: false,
            parallel: true,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Split `args` into options and positional arguments.
    ///
    /// Anything starting with `--` is an option, as are `-v` and `-s`.
    /// Other arguments, including negative numbers, are positional.
    pub fn from_args(args: &[String]) -> Result<(RunConfig, Vec<String>), ConfigError> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                config.color =
                    ColorMode::parse(value).ok_or_else(|| ConfigError::InvalidColor(value.into()))?;
            } else if arg == "--sequential" || arg == "-s" {
                config.parallel = false;
            } else if arg == "--verbose" || arg == "-v" {
                config.verbose = true;
            } else if arg.starts_with("--") {
                return Err(ConfigError::UnknownFlag(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((config, positional))
    }

    /// Apply the `NO_COLOR` convention: a non-empty value turns off
    /// automatic color. An explicit `--color=always` still wins.
    #[must_use]
    pub fn with_no_color(mut self, no_color: Option<&str>) -> Self {
        if self.color == ColorMode::Auto && no_color.is_some_and(|v| !v.is_empty()) {
            self.color = ColorMode::Never;
        }
        self
    }

    #[must_use]
    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = is_tty;
        self
    }

    /// Terminal emitter honoring this configuration.
    pub fn emitter<W: Write>(&self, writer: W) -> TerminalEmitter<W> {
        TerminalEmitter::with_color_mode(writer, self.color, self.is_tty)
    }
}
