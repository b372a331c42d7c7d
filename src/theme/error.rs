use std::{io, path::PathBuf};

use thiserror::Error;

/// Returned when a theme is requested outside of any binding.
///
/// This is a setup mistake: wrap the consumer in `theme::provide`, or call
/// `ThemeExt::provide_theme` / `crate::init` on the gpui app first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no theme bound: active_theme() was called outside of any theme provider")]
    NoThemeBound,
}

#[derive(Error, Debug)]
pub enum ThemeLoadError {
    #[error("could not read theme file \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid theme definition: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{0}\" is not a hex color (expected #rgb, #rgba, #rrggbb or #rrggbbaa)")]
pub struct InvalidHexColor(pub String);
