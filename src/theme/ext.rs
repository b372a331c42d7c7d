use std::sync::Arc;

use gpui::{App, Global};

use crate::theme::{ConfigurationError, Theme};

/// The theme bound to an app. Absent until `provide_theme` is called.
struct BoundTheme(Arc<Theme>);

impl Global for BoundTheme {}

/// Extension trait for binding and resolving the app-wide theme.
pub trait ThemeExt {
    /// Binds `theme`, replacing any theme bound before.
    fn provide_theme(&mut self, theme: impl Into<Arc<Theme>>);

    /// Unbinds the current theme, returning it.
    fn unprovide_theme(&mut self) -> Option<Arc<Theme>>;

    /// Resolves the bound theme, failing if none has been provided.
    fn active_theme(&self) -> Result<Arc<Theme>, ConfigurationError>;

    fn has_theme(&self) -> bool;
}

impl ThemeExt for App {
    fn provide_theme(&mut self, theme: impl Into<Arc<Theme>>) {
        let theme = theme.into();
        tracing::debug!(theme = %theme.name, "theme provided to app");
        self.set_global(BoundTheme(theme));
    }

    fn unprovide_theme(&mut self) -> Option<Arc<Theme>> {
        if !self.has_global::<BoundTheme>() {
            return None;
        }

        let BoundTheme(theme) = self.remove_global::<BoundTheme>();
        tracing::debug!(theme = %theme.name, "theme removed from app");
        Some(theme)
    }

    fn active_theme(&self) -> Result<Arc<Theme>, ConfigurationError> {
        match self.try_global::<BoundTheme>() {
            Some(BoundTheme(theme)) => Ok(theme.clone()),
            None => {
                tracing::warn!("active_theme() called before a theme was provided to the app");
                Err(ConfigurationError::NoThemeBound)
            }
        }
    }

    fn has_theme(&self) -> bool {
        self.has_global::<BoundTheme>()
    }
}
