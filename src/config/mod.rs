use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, Display, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub theme: Theme,
    pub catalog_enabled: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            catalog_enabled: true,
        }
    }
}

impl ShowcaseConfig {
    /// Reads `window.ENV` from the host page.
    pub fn load() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|window| window.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::default();
        };

        // README style keys first, then the lowercase legacy spelling.
        let lookup = |keys: [&str; 2]| {
            keys.iter().find_map(|key| {
                let value = js_sys::Reflect::get(&env, &(*key).into()).ok()?;
                value
                    .as_string()
                    .or_else(|| value.as_bool().map(|b| b.to_string()))
            })
        };

        Self::from_raw(
            lookup(["THEME", "theme"]).as_deref(),
            lookup(["CATALOG", "catalog"]).as_deref(),
        )
    }

    /// Invalid or missing values fall back to defaults.
    pub fn from_raw(theme: Option<&str>, catalog: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            theme: theme
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.theme),
            catalog_enabled: catalog
                .and_then(|raw| parse_flag(raw.trim()))
                .unwrap_or(defaults.catalog_enabled),
        }
    }

    pub fn root_class(&self) -> &'static str {
        match self.theme {
            Theme::Light => "min-h-screen bg-white text-gray-900",
            Theme::Dark => "dark min-h-screen bg-gray-950 text-gray-100",
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShowcaseConfig::from_raw(None, None);
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.theme, Theme::Light);
        assert!(config.catalog_enabled);
    }

    #[test]
    fn test_parses_theme_and_catalog_flag() {
        let config = ShowcaseConfig::from_raw(Some(" Dark "), Some("false"));
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.catalog_enabled);
        assert!(config.root_class().starts_with("dark "));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ShowcaseConfig::from_raw(Some("sepia"), Some("maybe"));
        assert_eq!(config, ShowcaseConfig::default());
    }
}
