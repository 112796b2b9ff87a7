use crate::taxonomy::{InvalidTermPolicy, TableOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wordlist: WordListConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListConfig {
    /// CSV word list backing the loaded taxonomy. None disables it.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_wildcard")]
    pub wildcard: char,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub invalid_terms: InvalidTermPolicy,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            path: None,
            wildcard: default_wildcard(),
            delimiter: default_delimiter(),
            invalid_terms: InvalidTermPolicy::default(),
        }
    }
}

impl WordListConfig {
    pub fn table_options(&self) -> anyhow::Result<TableOptions> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("word list delimiter must be ASCII, got {:?}", self.delimiter);
        }
        Ok(TableOptions {
            wildcard: self.wildcard,
            delimiter: self.delimiter as u8,
            invalid_terms: self.invalid_terms,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_text_column")]
    pub text_column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_column: default_text_column(),
        }
    }
}

fn default_wildcard() -> char {
    '*'
}

fn default_delimiter() -> char {
    ','
}

fn default_text_column() -> String {
    "text".to_string()
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(config::Environment::with_prefix("TOPIC").separator("__"));
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
