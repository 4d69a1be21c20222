//! Auxiliary page content: the profile document and the quote rotation.
//!
//! These documents are rendered as-is by the UI glue and are not part of
//! the theming core; load failures are logged and skipped, never fatal.

use crate::error::{ThemeError, ThemeResult};
use crate::theme::generator::Picker;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub linkedin_url: String,
    pub github_url: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotes {
    pub quotes: Vec<String>,
}

impl Quotes {
    /// One uniformly chosen quote, or `None` when the list is empty.
    pub fn pick<'a>(&'a self, picker: &mut dyn Picker) -> Option<&'a str> {
        if self.quotes.is_empty() {
            return None;
        }
        Some(self.quotes[picker.pick(self.quotes.len())].as_str())
    }
}

fn load_document<T: serde::de::DeserializeOwned>(path: &Path) -> ThemeResult<T> {
    let content = fs::read_to_string(path).map_err(|e| ThemeError::ContentLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ThemeError::ContentLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_profile(path: &Path) -> ThemeResult<Profile> {
    load_document(path)
}

pub fn load_quotes(path: &Path) -> ThemeResult<Quotes> {
    load_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::generator::test_support::StubPicker;
    use std::io::Write;

    #[test]
    fn profile_document_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "name": "Ada",
                "description": "Engineer",
                "linkedin_url": "https://linkedin.com/in/ada",
                "github_url": "https://github.com/ada",
                "experience": [{
                    "role": "Analyst",
                    "company": "Engine Works",
                    "period": "1842-1843",
                    "description": "Notes on the analytical engine."
                }]
            }"#,
        )
        .unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Engine Works");
    }

    #[test]
    fn quote_pick_is_uniform_over_the_list() {
        let quotes = Quotes {
            quotes: vec!["first".to_string(), "second".to_string()],
        };
        let mut picker = StubPicker::new(&[1]);
        assert_eq!(quotes.pick(&mut picker), Some("second"));

        let empty = Quotes { quotes: vec![] };
        let mut picker = StubPicker::new(&[0]);
        assert_eq!(empty.pick(&mut picker), None);
    }

    #[test]
    fn missing_document_is_recoverable() {
        let err = load_quotes(Path::new("nope/quotes.json")).unwrap_err();
        assert!(err.is_recoverable());
    }
}
