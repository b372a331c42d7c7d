use gpui::App;

use crate::theme::{Theme, ThemeExt};

/// Binds the canonical theme to `cx`, unless the host already provided one.
pub fn init(cx: &mut App) {
    if !cx.has_theme() {
        cx.provide_theme(Theme::default_theme());
    }
}
