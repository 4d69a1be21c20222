use crate::error::{ThemeError, ThemeResult};
use crate::theme::types::ThemeConfig;
use crate::theme::validation::{ThemeConfigValidator, Validator};
use std::{fs, path::PathBuf};

/// Loads the shared theme-config document from the filesystem.
///
/// The same JSON document drives both the batch generator and the
/// resolver. When it cannot be loaded, the resolver side falls back to
/// the built-in single-entry config so the page still renders; the
/// generator side treats the failure as fatal.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and validate the config document. Any failure is reported
    /// with the offending path.
    pub fn load(&self) -> ThemeResult<ThemeConfig> {
        let content = fs::read_to_string(&self.path).map_err(|e| ThemeError::ConfigLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let config: ThemeConfig =
            serde_json::from_str(&content).map_err(|e| ThemeError::ConfigLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        ThemeConfigValidator
            .validate(&config)
            .map_err(|e| ThemeError::ConfigLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Resolver-side loading: substitute the minimal built-in config on
    /// failure rather than propagating, so the page still renders.
    pub fn load_or_fallback(&self) -> ThemeConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using fallback theme config: {e}");
                ThemeConfig::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "palettes": [{
            "name": "Noir",
            "colors": {
                "--bg-color": "#0a0a0a",
                "--text-color": "#ededed",
                "--accent-color": "#ffffff",
                "--card-bg": "rgba(255,255,255,0.03)"
            }
        }],
        "fontPairings": [{
            "name": "Tech Brutalist",
            "fonts": {
                "--heading-font": "'Space Grotesk', sans-serif",
                "--body-font": "'Space Grotesk', sans-serif"
            }
        }],
        "layouts": ["split", "hero"]
    }"##;

    #[test]
    fn loads_a_valid_config_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = ConfigLoader::new(file.path()).load().unwrap();
        assert_eq!(config.palettes[0].name, "Noir");
        assert_eq!(config.font_pairings[0].name, "Tech Brutalist");
        assert_eq!(config.layouts, vec!["split", "hero"]);
    }

    #[test]
    fn missing_file_is_a_config_load_error() {
        let loader = ConfigLoader::new("definitely/not/here.json");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, ThemeError::ConfigLoad { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_documents_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"palettes\": []}").unwrap();
        assert_err!(ConfigLoader::new(file.path()).load());
    }

    #[test]
    fn fallback_kicks_in_on_any_failure() {
        let loader = ConfigLoader::new("definitely/not/here.json");
        let config = loader.load_or_fallback();
        assert_eq!(config.palettes.len(), 1);
        assert_eq!(config.palettes[0].name, "Default");
    }
}
