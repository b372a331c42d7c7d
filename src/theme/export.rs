//! Flat views of a theme for consumers outside of gpui, such as stylesheet
//! generation at build time.

use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::Value;

use super::Theme;

/// Theme metadata rather than design tokens; left out of stylesheets.
const NON_TOKENS: &[&str] = &["name"];
/// Leaves measured in pixels. Everything else numeric is unitless.
const PIXEL_TOKENS: &[&str] = &["borderRadius", "gridUnit", "brandIconMaxWidth"];
const PIXEL_GROUPS: &[&str] = &["typography.sizes."];
const SECOND_TOKENS: &[&str] = &["transitionTiming"];

impl Theme {
    /// Looks up a token by its dotted path, e.g. `"colors.primary.base"`.
    ///
    /// Paths naming a group (`"colors.primary"`) return the whole subtree.
    /// Unknown paths are `Ok(None)`.
    pub fn token(&self, path: &str) -> Result<Option<Value>, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        for segment in path.split('.') {
            value = match value {
                Value::Object(mut map) => match map.remove(segment) {
                    Some(child) => child,
                    None => return Ok(None),
                },
                _ => return Ok(None),
            };
        }
        Ok(Some(value))
    }

    /// Every leaf token keyed by its dotted path, in schema order.
    ///
    /// Font stacks are leaves (arrays of family names).
    pub fn flatten(&self) -> Result<IndexMap<String, Value>, serde_json::Error> {
        let mut tokens = IndexMap::new();
        flatten_into(&mut tokens, String::new(), serde_json::to_value(self)?);
        Ok(tokens)
    }

    /// Renders the theme as CSS custom properties, one declaration per line.
    ///
    /// `prefix` is prepended to every variable name; pass `""` for none.
    pub fn to_css_variables(&self, prefix: &str) -> Result<String, serde_json::Error> {
        let mut css = String::new();
        for (path, value) in self.flatten()? {
            if NON_TOKENS.contains(&path.as_str()) {
                continue;
            }

            let mut name = String::from("--");
            if !prefix.is_empty() {
                name.push_str(prefix);
                name.push('-');
            }
            name.push_str(&css_name(&path));

            // Writing into a String can't fail.
            let _ = writeln!(css, "{name}: {};", css_value(&path, &value));
        }
        Ok(css)
    }
}

fn flatten_into(tokens: &mut IndexMap<String, Value>, path: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(tokens, child_path, child);
            }
        }
        leaf => {
            tokens.insert(path, leaf);
        }
    }
}

/// `typography.families.sansSerif` -> `typography-families-sans-serif`.
fn css_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        match c {
            '.' => name.push('-'),
            c if c.is_ascii_uppercase() => {
                name.push('-');
                name.push(c.to_ascii_lowercase());
            }
            c => name.push(c),
        }
    }
    name
}

fn css_value(path: &str, value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        Value::Number(number) => {
            let number = match number.as_f64() {
                Some(float) if float.fract() == 0. => format!("{}", float as i64),
                Some(float) => format!("{}", (float * 1e4).round() / 1e4),
                None => number.to_string(),
            };

            if PIXEL_TOKENS.contains(&path) || PIXEL_GROUPS.iter().any(|g| path.starts_with(g)) {
                format!("{number}px")
            } else if SECOND_TOKENS.contains(&path) {
                format!("{number}s")
            } else {
                number
            }
        }
        Value::Array(families) => families
            .iter()
            .filter_map(Value::as_str)
            .map(|family| {
                if family.contains(' ') {
                    format!("'{family}'")
                } else {
                    family.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        let theme = Theme::default_theme();

        assert_eq!(
            theme.token("colors.primary.base").unwrap(),
            Some(Value::from("#009B5D"))
        );
        assert_eq!(
            theme.token("opacity.mediumLight").unwrap(),
            Some(Value::from("35%"))
        );
        assert_eq!(theme.token("zIndex.max").unwrap(), Some(Value::from(3000)));
        assert!(theme.token("colors").unwrap().is_some_and(|v| v.is_object()));
    }

    #[test]
    fn test_unknown_token_path() {
        let theme = Theme::default_theme();

        assert_eq!(theme.token("colors.primary.light9").unwrap(), None);
        assert_eq!(theme.token("colors.primary.base.more").unwrap(), None);
        assert_eq!(theme.token("").unwrap(), None);
    }

    #[test]
    fn test_flatten_keeps_schema_order() {
        let tokens = Theme::default_theme().flatten().unwrap();
        let keys: Vec<&str> = tokens.keys().map(String::as_str).collect();

        assert_eq!(keys.first(), Some(&"name"));
        assert_eq!(keys.last(), Some(&"brandIconMaxWidth"));

        let base = keys.iter().position(|k| *k == "colors.primary.base").unwrap();
        let dark1 = keys.iter().position(|k| *k == "colors.primary.dark1").unwrap();
        assert!(base < dark1);
    }

    #[test]
    fn test_flatten_covers_every_palette_shade() {
        let tokens = Theme::default_theme().flatten().unwrap();
        let shades = |palette: &str| {
            tokens
                .keys()
                .filter(|k| k.starts_with(&format!("colors.{palette}.")))
                .count()
        };

        assert_eq!(shades("primary"), 8);
        assert_eq!(shades("secondary"), 9);
        assert_eq!(shades("grayscale"), 8);
        assert_eq!(shades("error"), 5);
        assert_eq!(shades("text"), 2);
    }

    #[test]
    fn test_css_name() {
        assert_eq!(css_name("colors.primary.base"), "colors-primary-base");
        assert_eq!(
            css_name("typography.families.sansSerif"),
            "typography-families-sans-serif"
        );
        assert_eq!(css_name("zIndex.aboveDashboardCharts"), "z-index-above-dashboard-charts");
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default_theme().to_css_variables("ds").unwrap();

        assert!(css.contains("--ds-colors-primary-base: #009B5D;\n"));
        assert!(css.contains("--ds-border-radius: 4px;\n"));
        assert!(css.contains("--ds-typography-sizes-xl: 21px;\n"));
        assert!(css.contains("--ds-typography-weights-bold: 600;\n"));
        assert!(css.contains("--ds-transition-timing: 0.3s;\n"));
        assert!(css.contains("--ds-opacity-medium-heavy: 60%;\n"));
        assert!(css.contains("--ds-z-index-dropdown: 11;\n"));
        assert!(css.contains(
            "--ds-typography-families-serif: Georgia, 'Times New Roman', Times, serif;\n"
        ));
    }

    #[test]
    fn test_css_variables_without_prefix() {
        let css = Theme::default_theme().to_css_variables("").unwrap();
        assert!(css.contains("--grid-unit: 4px;\n"));
    }

    #[test]
    fn test_css_variables_skip_theme_name() {
        let css = Theme::default_theme().to_css_variables("ds").unwrap();

        assert!(!css.contains("--ds-name:"));
        assert!(!css.contains("Default"));
        assert!(css.lines().all(|line| line.starts_with("--ds-")));
    }
}
