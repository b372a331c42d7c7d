use std::{
    fs,
    path::Path,
    sync::{Arc, LazyLock},
    time::Duration,
};

use gpui::{Pixels, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    HexColor, ThemeLoadError,
    deserializers::{de_font_stack, de_percentage, de_pixels, de_seconds, ser_percentage},
};

/// The full set of design tokens in effect for a UI subtree.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    pub name: SharedString,
    #[serde(deserialize_with = "de_pixels")]
    pub border_radius: Pixels,
    pub colors: ThemeColors,
    pub opacity: ThemeOpacity,
    pub typography: ThemeTypography,
    pub z_index: ThemeZIndex,
    /// Seconds.
    #[serde(deserialize_with = "de_seconds")]
    pub transition_timing: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub grid_unit: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub brand_icon_max_width: Pixels,
}

static DEFAULT_THEME: LazyLock<Arc<Theme>> = LazyLock::new(|| {
    Arc::new(
        Theme::from_json(include_str!("../../themes/default.json"))
            .expect("embedded default theme is valid"),
    )
});

impl Theme {
    /// The canonical theme shipped with the crate.
    ///
    /// Parsed once per process; every call hands out the same instance.
    pub fn default_theme() -> Arc<Theme> {
        DEFAULT_THEME.clone()
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeLoadError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeLoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(source)
    }

    /// Spacing expressed in grid units, e.g. `theme.grid(2.)` for double spacing.
    pub fn grid(&self, multiple: f32) -> Pixels {
        self.grid_unit * multiple
    }

    /// Out-of-range timings (only reachable by mutating the field) saturate.
    pub fn transition_duration(&self) -> Duration {
        if self.transition_timing.is_nan() || self.transition_timing <= 0. {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f32(self.transition_timing).unwrap_or(Duration::MAX)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub text: TextColors,
    pub primary: Palette,
    pub secondary: SecondaryPalette,
    pub grayscale: Palette,
    pub error: StatusPalette,
    pub warning: StatusPalette,
    pub alert: StatusPalette,
    pub success: StatusPalette,
    pub info: StatusPalette,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    pub label: HexColor,
    pub help: HexColor,
}

/// Full brand ramp: a base shade, two darker and five lighter steps.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub base: HexColor,
    pub dark1: HexColor,
    pub dark2: HexColor,
    pub light1: HexColor,
    pub light2: HexColor,
    pub light3: HexColor,
    pub light4: HexColor,
    pub light5: HexColor,
}

/// Same ramp as [`Palette`] with one extra dark step.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SecondaryPalette {
    pub base: HexColor,
    pub dark1: HexColor,
    pub dark2: HexColor,
    pub dark3: HexColor,
    pub light1: HexColor,
    pub light2: HexColor,
    pub light3: HexColor,
    pub light4: HexColor,
    pub light5: HexColor,
}

/// Short ramp used by feedback colors (error, warning, alert, success, info).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatusPalette {
    pub base: HexColor,
    pub dark1: HexColor,
    pub dark2: HexColor,
    pub light1: HexColor,
    pub light2: HexColor,
}

/// Opacity steps, stored as fractions in `0..=1` and written as percentages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOpacity {
    #[serde(deserialize_with = "de_percentage", serialize_with = "ser_percentage")]
    pub light: f32,
    #[serde(deserialize_with = "de_percentage", serialize_with = "ser_percentage")]
    pub medium_light: f32,
    #[serde(deserialize_with = "de_percentage", serialize_with = "ser_percentage")]
    pub medium_heavy: f32,
    #[serde(deserialize_with = "de_percentage", serialize_with = "ser_percentage")]
    pub heavy: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeTypography {
    pub families: ThemeFontFamilies,
    pub weights: ThemeFontWeights,
    pub sizes: ThemeFontSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeFontFamilies {
    pub sans_serif: FontStack,
    pub serif: FontStack,
    pub monospace: FontStack,
}

/// An ordered list of font families, most preferred first.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct FontStack {
    #[serde(deserialize_with = "de_font_stack")]
    pub families: SmallVec<[SharedString; 4]>,
}

impl FontStack {
    pub fn primary(&self) -> &SharedString {
        // Never empty, the deserializer rejects empty stacks.
        &self.families[0]
    }

    /// Renders the stack back into a CSS `font-family` value.
    pub fn to_css(&self) -> String {
        self.families
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("'{family}'")
                } else {
                    family.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeFontWeights {
    pub light: f32,
    pub normal: f32,
    pub medium: f32,
    pub bold: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeFontSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub xxs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub s: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub m: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub l: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeZIndex {
    pub above_dashboard_charts: u32,
    pub dropdown: u32,
    pub max: u32,
}
