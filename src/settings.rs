use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CatatError, Result};
use crate::lexicon::{DEFAULT_EXPENSE_CATEGORY, DEFAULT_INCOME_CATEGORY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_income_category")]
    pub default_income_category: String,
    #[serde(default = "default_expense_category")]
    pub default_expense_category: String,
    /// Extra category keywords merged into the lexicon: category name →
    /// keyword list. Unknown names become new expense categories.
    #[serde(default)]
    pub extra_keywords: BTreeMap<String, Vec<String>>,
}

fn default_income_category() -> String {
    DEFAULT_INCOME_CATEGORY.to_string()
}

fn default_expense_category() -> String {
    DEFAULT_EXPENSE_CATEGORY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_income_category: default_income_category(),
            default_expense_category: default_expense_category(),
            extra_keywords: BTreeMap::new(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("catat")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Missing or malformed settings never block a parse; they fall back to the
/// built-in defaults.
pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| CatatError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}
