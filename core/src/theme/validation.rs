use crate::theme::types::{
    ThemeConfig, ThemeRecord, REQUIRED_COLOR_KEYS, REQUIRED_FONT_KEYS,
};

/// Consistent interface for validating theming data. Validators are
/// cheap unit structs and can be chained by callers.
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Validation failures for loaded configs and records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    EmptyCollection { collection: &'static str },
    MissingKey { owner: String, key: &'static str },
    BlankName { collection: &'static str },
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValidationError::EmptyCollection { collection } => {
                write!(f, "config collection '{collection}' is empty")
            }
            ThemeValidationError::MissingKey { owner, key } => {
                write!(f, "'{owner}' is missing required key '{key}'")
            }
            ThemeValidationError::BlankName { collection } => {
                write!(f, "an entry in '{collection}' has a blank name")
            }
        }
    }
}

/// Checks a loaded theme config: every axis non-empty, every palette and
/// pairing named and carrying the full required key set.
pub struct ThemeConfigValidator;

impl Validator<ThemeConfig> for ThemeConfigValidator {
    type Error = ThemeValidationError;

    fn validate(&self, config: &ThemeConfig) -> Result<(), Self::Error> {
        if config.palettes.is_empty() {
            return Err(ThemeValidationError::EmptyCollection {
                collection: "palettes",
            });
        }
        if config.font_pairings.is_empty() {
            return Err(ThemeValidationError::EmptyCollection {
                collection: "fontPairings",
            });
        }
        if config.layouts.is_empty() {
            return Err(ThemeValidationError::EmptyCollection {
                collection: "layouts",
            });
        }

        for palette in &config.palettes {
            if palette.name.trim().is_empty() {
                return Err(ThemeValidationError::BlankName {
                    collection: "palettes",
                });
            }
            for key in REQUIRED_COLOR_KEYS {
                if !palette.colors.contains_key(key) {
                    return Err(ThemeValidationError::MissingKey {
                        owner: palette.name.clone(),
                        key,
                    });
                }
            }
        }

        for pairing in &config.font_pairings {
            if pairing.name.trim().is_empty() {
                return Err(ThemeValidationError::BlankName {
                    collection: "fontPairings",
                });
            }
            for key in REQUIRED_FONT_KEYS {
                if !pairing.fonts.contains_key(key) {
                    return Err(ThemeValidationError::MissingKey {
                        owner: pairing.name.clone(),
                        key,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Checks a composed or loaded record: renderers expect every required
/// style variable to be present in `colors`.
pub struct ThemeRecordValidator;

impl Validator<ThemeRecord> for ThemeRecordValidator {
    type Error = ThemeValidationError;

    fn validate(&self, record: &ThemeRecord) -> Result<(), Self::Error> {
        for key in REQUIRED_COLOR_KEYS.iter().chain(REQUIRED_FONT_KEYS.iter()) {
            if !record.colors.contains_key(*key) {
                return Err(ThemeValidationError::MissingKey {
                    owner: record.name.clone(),
                    key,
                });
            }
        }
        Ok(())
    }
}
