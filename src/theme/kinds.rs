#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{FontWeight, Pixels, Rgba};

use crate::theme::{FontStack, StatusPalette, Theme};

/// Font size steps that resolve to theme-defined pixel values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum FontSizeKind {
    #[assoc(resolve = theme.typography.sizes.xxs)]
    Xxs,
    #[assoc(resolve = theme.typography.sizes.xs)]
    Xs,
    #[assoc(resolve = theme.typography.sizes.s)]
    S,
    #[assoc(resolve = theme.typography.sizes.m)]
    M,
    #[assoc(resolve = theme.typography.sizes.l)]
    L,
    #[assoc(resolve = theme.typography.sizes.xl)]
    Xl,
    #[assoc(resolve = theme.typography.sizes.xxl)]
    Xxl,
}

/// Font weight steps.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> FontWeight)]
pub enum FontWeightKind {
    #[assoc(resolve = FontWeight(theme.typography.weights.light))]
    Light,
    #[assoc(resolve = FontWeight(theme.typography.weights.normal))]
    Normal,
    #[assoc(resolve = FontWeight(theme.typography.weights.medium))]
    Medium,
    #[assoc(resolve = FontWeight(theme.typography.weights.bold))]
    Bold,
}

/// Font stacks by role.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> FontStack)]
pub enum FontFamilyKind {
    #[assoc(resolve = theme.typography.families.sans_serif.clone())]
    SansSerif,
    #[assoc(resolve = theme.typography.families.serif.clone())]
    Serif,
    #[assoc(resolve = theme.typography.families.monospace.clone())]
    Monospace,
}

/// Opacity steps, resolved to a fraction in `0..=1`.
///
/// Pair with `HexColor::with_opacity` to tint a palette shade.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum OpacityKind {
    #[assoc(resolve = theme.opacity.light)]
    Light,
    #[assoc(resolve = theme.opacity.medium_light)]
    MediumLight,
    #[assoc(resolve = theme.opacity.medium_heavy)]
    MediumHeavy,
    #[assoc(resolve = theme.opacity.heavy)]
    Heavy,
}

/// Stacking layers, lowest first.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> u32)]
pub enum ZIndexKind {
    /// Floats above dashboard chart content.
    #[assoc(resolve = theme.z_index.above_dashboard_charts)]
    AboveDashboardCharts,
    /// Dropdown menus and popovers.
    #[assoc(resolve = theme.z_index.dropdown)]
    Dropdown,
    /// Always on top.
    #[assoc(resolve = theme.z_index.max)]
    Max,
}

/// Feedback palettes.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn palette(&self, theme: &Theme) -> StatusPalette)]
#[func(pub fn base(&self, theme: &Theme) -> Rgba)]
pub enum StatusKind {
    #[assoc(palette = theme.colors.error.clone())]
    #[assoc(base = theme.colors.error.base.to_rgba())]
    Error,
    #[assoc(palette = theme.colors.warning.clone())]
    #[assoc(base = theme.colors.warning.base.to_rgba())]
    Warning,
    #[assoc(palette = theme.colors.alert.clone())]
    #[assoc(base = theme.colors.alert.base.to_rgba())]
    Alert,
    #[assoc(palette = theme.colors.success.clone())]
    #[assoc(base = theme.colors.success.base.to_rgba())]
    Success,
    #[assoc(palette = theme.colors.info.clone())]
    #[assoc(base = theme.colors.info.base.to_rgba())]
    Info,
}
